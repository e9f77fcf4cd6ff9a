//! Transaction CLI commands
//!
//! Implements CLI commands for transaction management.

use chrono::Local;
use clap::Subcommand;

use crate::display::{
    format_notice, format_transaction_details, format_transaction_register,
};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{TransactionId, UserIdentity, DATE_FORMAT};
use crate::services::{TransactionInput, TransactionService};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Income or Expense
        #[arg(value_name = "TYPE")]
        transaction_type: String,
        /// Amount (must be greater than zero)
        amount: String,
        /// Category label
        category: String,
        /// Currency code
        #[arg(short, long, default_value = "USD")]
        currency: String,
        /// Transaction date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// List transactions
    List {
        /// Show only the most recent N transactions
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show transaction details
    Show {
        /// Transaction ID
        id: String,
    },
    /// Edit a transaction (unspecified fields keep their value)
    Edit {
        /// Transaction ID
        id: String,
        /// New type
        #[arg(short = 't', long = "type")]
        transaction_type: Option<String>,
        /// New amount
        #[arg(short, long)]
        amount: Option<String>,
        /// New currency
        #[arg(short, long)]
        currency: Option<String>,
        /// New category
        #[arg(long)]
        category: Option<String>,
        /// New date
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    user: &UserIdentity,
    cmd: TransactionCommands,
) -> TrackerResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            transaction_type,
            amount,
            category,
            currency,
            date,
        } => {
            let input = TransactionInput {
                transaction_type,
                amount,
                currency,
                category,
                date: date.unwrap_or_else(today),
            };

            let (id, notice) = service.add_from_input(user, &input)?;
            println!("{}", format_notice(&notice));
            println!("  ID: {}", id);
        }

        TransactionCommands::List { limit } => {
            let mut transactions = service.list(user)?;
            if let Some(limit) = limit {
                let skip = transactions.len().saturating_sub(limit);
                transactions.drain(..skip);
            }
            print!("{}", format_transaction_register(&transactions));
        }

        TransactionCommands::Show { id } => {
            let stored = service.get(user, parse_id(&id)?)?;
            print!("{}", format_transaction_details(&stored));
        }

        TransactionCommands::Edit {
            id,
            transaction_type,
            amount,
            currency,
            category,
            date,
        } => {
            let id = parse_id(&id)?;
            let current = service.get(user, id)?.transaction;

            let input = TransactionInput {
                transaction_type: transaction_type
                    .unwrap_or_else(|| current.transaction_type.to_string()),
                amount: amount.unwrap_or_else(|| current.amount.value().to_string()),
                currency: currency.unwrap_or_else(|| current.currency.to_string()),
                category: category.unwrap_or(current.category),
                date: date.unwrap_or_else(|| current.date.format(DATE_FORMAT).to_string()),
            };

            let notice = service.replace(user, id, &input.validate()?)?;
            println!("{}", format_notice(&notice));
            if !notice.is_success() {
                return Err(TrackerError::transaction_not_found(id.to_string()));
            }
        }

        TransactionCommands::Delete { id } => {
            let id = parse_id(&id)?;
            let notice = service.delete(user, id)?;
            println!("{}", format_notice(&notice));
            if !notice.is_success() {
                return Err(TrackerError::transaction_not_found(id.to_string()));
            }
        }
    }

    Ok(())
}

fn today() -> String {
    Local::now().date_naive().format(DATE_FORMAT).to_string()
}

/// Parse "txn-12" or "12"
pub fn parse_id(input: &str) -> TrackerResult<TransactionId> {
    input
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("Invalid transaction id: '{}'", input)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("txn-12").unwrap(), TransactionId::new(12));
        assert_eq!(parse_id("12").unwrap(), TransactionId::new(12));
        assert!(matches!(parse_id("twelve"), Err(TrackerError::InvalidInput(_))));
    }

    #[test]
    fn test_today_is_a_valid_date() {
        assert!(crate::models::parse_date(&today()).is_ok());
    }
}
