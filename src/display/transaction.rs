//! Transaction display formatting
//!
//! Register-style tables and detail views for stored transactions.

use crate::models::{StoredTransaction, DATE_FORMAT};

/// Format a single transaction for display (register row)
pub fn format_transaction_row(stored: &StoredTransaction) -> String {
    let txn = &stored.transaction;
    format!(
        "{:<8} {} {:<8} {:20} {:>14} {}",
        stored.id,
        txn.date.format(DATE_FORMAT),
        txn.transaction_type,
        truncate(&txn.category, 20),
        txn.amount,
        txn.currency
    )
}

/// Format a list of transactions as a register
pub fn format_transaction_register(transactions: &[StoredTransaction]) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:<8} {:10} {:<8} {:20} {:>14} {}\n",
        "ID", "Date", "Type", "Category", "Amount", "Cur"
    ));
    output.push_str(&"-".repeat(68));
    output.push('\n');

    for stored in transactions {
        output.push_str(&format_transaction_row(stored));
        output.push('\n');
    }

    output.push_str(&format!("\n{} transaction(s)\n", transactions.len()));
    output
}

/// Format transaction details for display
pub fn format_transaction_details(stored: &StoredTransaction) -> String {
    let txn = &stored.transaction;
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", stored.id));
    output.push_str(&format!("Type:        {}\n", txn.transaction_type));
    output.push_str(&format!("Date:        {}\n", txn.date.format(DATE_FORMAT)));
    output.push_str(&format!("Amount:      {} {}\n", txn.amount, txn.currency));
    output.push_str(&format!("Category:    {}\n", txn.category));

    output
}

/// Truncate a string to a maximum number of characters, padding shorter ones
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionId, UserId};

    fn stored(category: &str) -> StoredTransaction {
        StoredTransaction {
            id: TransactionId::new(7),
            owner: UserId::new(1),
            transaction: Transaction::create("Expense", "42.5", "EUR", category, "2025-04-01")
                .unwrap(),
        }
    }

    #[test]
    fn test_row_contains_fields() {
        let row = format_transaction_row(&stored("Groceries"));
        assert!(row.starts_with("txn-7"));
        assert!(row.contains("2025-04-01"));
        assert!(row.contains("Expense"));
        assert!(row.contains("42.50 EUR"));
    }

    #[test]
    fn test_empty_register() {
        assert_eq!(format_transaction_register(&[]), "No transactions found.\n");
    }

    #[test]
    fn test_register_counts_rows() {
        let output = format_transaction_register(&[stored("A"), stored("B")]);
        assert!(output.contains("2 transaction(s)"));
    }

    #[test]
    fn test_details() {
        let output = format_transaction_details(&stored("Books"));
        assert!(output.contains("Transaction: txn-7"));
        assert!(output.contains("Category:    Books"));
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ääääääää", 5), "ää...");
        assert_eq!(truncate("ab", 4), "ab  ");
    }
}
