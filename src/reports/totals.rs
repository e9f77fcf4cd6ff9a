//! Income / expense totals
//!
//! Sums every transaction after converting it into the base currency.

use std::io::Write;

use super::accumulate;
use crate::error::{TrackerError, TrackerResult};
use crate::fx::CurrencyConverter;
use crate::models::{Currency, Money, Transaction, TransactionType};

/// Converted totals for one snapshot of a user's transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totals {
    /// Sum of income, rounded to cents
    pub income: Money,
    /// Sum of expenses, rounded to cents
    pub expense: Money,
    /// Income minus expense, rounded once from the unrounded sums
    pub net: Money,
}

impl Totals {
    /// Compute totals for a list of transactions
    pub fn generate(
        transactions: &[Transaction],
        converter: &dyn CurrencyConverter,
    ) -> TrackerResult<Self> {
        let mut income = Money::zero();
        let mut expense = Money::zero();

        for txn in transactions {
            let converted = converter.convert(txn.amount, txn.currency)?;
            match txn.transaction_type {
                TransactionType::Income => accumulate(&mut income, converted)?,
                TransactionType::Expense => accumulate(&mut expense, converted)?,
            }
        }

        Ok(Self {
            income: income.round2(),
            expense: expense.round2(),
            net: (income - expense).round2(),
        })
    }

    /// Format the totals for terminal display
    pub fn format_terminal(&self, base: Currency) -> String {
        let mut output = String::new();

        output.push_str(&format!("Totals ({})\n", base));
        output.push_str(&"=".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>19}\n", "Income:", self.income));
        output.push_str(&format!("{:<20} {:>19}\n", "Expense:", self.expense));
        output.push_str(&"-".repeat(40));
        output.push('\n');
        output.push_str(&format!("{:<20} {:>19}\n", "Net:", self.net));

        output
    }

    /// Export the totals to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Income", "Expense", "Net"])?;
        csv_writer.write_record([
            self.income.to_string(),
            self.expense.to_string(),
            self.net.to_string(),
        ])?;
        csv_writer
            .flush()
            .map_err(|e| TrackerError::Export(e.to_string()))
    }
}

/// Total income, expense, and net in the converter's base currency
pub fn compute_totals(
    transactions: &[Transaction],
    converter: &dyn CurrencyConverter,
) -> TrackerResult<Totals> {
    Totals::generate(transactions, converter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::{IdentityConverter, RateTable};
    use crate::config::ExchangeRateSettings;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn txn(t: &str, amount: &str, currency: &str) -> Transaction {
        Transaction::create(t, amount, currency, "Misc", "2025-01-01").unwrap()
    }

    fn oversized(t: TransactionType) -> Transaction {
        Transaction {
            transaction_type: t,
            amount: Money::new(Decimal::MAX),
            currency: Currency::Usd,
            category: "Misc".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_empty_is_zero() {
        let totals = compute_totals(&[], &IdentityConverter).unwrap();
        assert_eq!(totals, Totals::default());
        assert_eq!(totals.net.to_string(), "0.00");
    }

    #[test]
    fn test_income_and_expense() {
        let txns = vec![txn("Income", "100", "USD"), txn("Expense", "40", "USD")];
        let totals = compute_totals(&txns, &IdentityConverter).unwrap();

        assert_eq!(totals.income.value(), dec!(100));
        assert_eq!(totals.expense.value(), dec!(40));
        assert_eq!(totals.net.value(), dec!(60));
        assert_eq!(totals.net.to_string(), "60.00");
    }

    #[test]
    fn test_net_is_rounded_from_raw_sums() {
        // Each figure is rounded once from the raw sums
        let txns = vec![
            txn("Income", "0.005", "USD"),
            txn("Income", "0.005", "USD"),
            txn("Expense", "0.004", "USD"),
        ];
        let totals = compute_totals(&txns, &IdentityConverter).unwrap();

        assert_eq!(totals.income.value(), dec!(0.01));
        assert_eq!(totals.expense.value(), dec!(0.00));
        assert_eq!(totals.net.value(), dec!(0.01));
    }

    #[test]
    fn test_amounts_are_converted() {
        let table = RateTable::new(Currency::Usd, &ExchangeRateSettings::default());
        let txns = vec![txn("Income", "20000", "MMK"), txn("Expense", "1", "USD")];
        let totals = compute_totals(&txns, &table).unwrap();

        assert_eq!(totals.income.value(), dec!(10));
        assert_eq!(totals.net.value(), dec!(9));
    }

    #[test]
    fn test_conversion_failure_propagates() {
        let failing =
            |_: Money, c: Currency| -> TrackerResult<Money> { Err(TrackerError::Conversion(c.to_string())) };
        let txns = vec![txn("Income", "1", "EUR")];
        assert!(matches!(
            compute_totals(&txns, &failing),
            Err(TrackerError::Conversion(_))
        ));
    }

    #[test]
    fn test_sum_past_decimal_range_is_error() {
        let txns = vec![oversized(TransactionType::Income), oversized(TransactionType::Income)];
        let err = compute_totals(&txns, &IdentityConverter).unwrap_err();
        assert!(err.is_overflow());

        let balanced = vec![oversized(TransactionType::Income), oversized(TransactionType::Expense)];
        assert_eq!(compute_totals(&balanced, &IdentityConverter).unwrap().net, Money::zero());
    }

    #[test]
    fn test_export_csv() {
        let txns = vec![txn("Income", "100", "USD"), txn("Expense", "40.5", "USD")];
        let mut out = Vec::new();
        compute_totals(&txns, &IdentityConverter)
            .unwrap()
            .export_csv(&mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Income,Expense,Net\n100.00,40.50,59.50\n"
        );
    }

    #[test]
    fn test_repeat_calls_are_identical() {
        let txns = vec![txn("Income", "33.333", "USD"), txn("Expense", "11.111", "USD")];
        let first = compute_totals(&txns, &IdentityConverter).unwrap();
        let second = compute_totals(&txns, &IdentityConverter).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_format_terminal() {
        let txns = vec![txn("Income", "100", "USD"), txn("Expense", "40", "USD")];
        let output = compute_totals(&txns, &IdentityConverter)
            .unwrap()
            .format_terminal(Currency::Usd);

        assert!(output.contains("Totals (USD)"));
        assert!(output.contains("100.00"));
        assert!(output.contains("60.00"));
    }
}
