//! Category breakdown
//!
//! Groups converted amounts by category label. A category that holds both
//! income and expense rows still accumulates every amount; its type label is
//! taken from the last row seen. [`CategoryBreakdownByType`] keys by
//! `(category, type)` instead and never merges the two.

use std::collections::BTreeMap;
use std::io::Write;

use super::accumulate;
use crate::error::{TrackerError, TrackerResult};
use crate::fx::CurrencyConverter;
use crate::models::{Currency, Money, Transaction, TransactionType};

/// Converted amount for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTotal {
    pub amount: Money,
    pub transaction_type: TransactionType,
}

/// Category label -> converted total
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryBreakdown {
    pub categories: BTreeMap<String, CategoryTotal>,
}

impl CategoryBreakdown {
    /// Build the breakdown for a list of transactions
    pub fn generate(
        transactions: &[Transaction],
        converter: &dyn CurrencyConverter,
    ) -> TrackerResult<Self> {
        let mut categories: BTreeMap<String, CategoryTotal> = BTreeMap::new();

        for txn in transactions {
            let converted = converter.convert(txn.amount, txn.currency)?;
            let entry = categories
                .entry(txn.category.clone())
                .or_insert(CategoryTotal {
                    amount: Money::zero(),
                    transaction_type: txn.transaction_type,
                });
            accumulate(&mut entry.amount, converted)?;
            entry.transaction_type = txn.transaction_type;
        }

        for total in categories.values_mut() {
            total.amount = total.amount.round2();
        }

        Ok(Self { categories })
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn get(&self, category: &str) -> Option<&CategoryTotal> {
        self.categories.get(category)
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, base: Currency) -> String {
        let mut output = String::new();

        output.push_str(&format!("Category Breakdown ({})\n", base));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!("{:<30} {:<10} {:>18}\n", "Category", "Type", "Amount"));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        if self.categories.is_empty() {
            output.push_str("No transactions.\n");
        }

        for (category, total) in &self.categories {
            output.push_str(&format!(
                "{:<30} {:<10} {:>18}\n",
                category, total.transaction_type, total.amount
            ));
        }

        output
    }

    /// Export the breakdown to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Category", "Type", "Amount"])?;

        for (category, total) in &self.categories {
            csv_writer.write_record([
                category.clone(),
                total.transaction_type.to_string(),
                total.amount.to_string(),
            ])?;
        }

        csv_writer
            .flush()
            .map_err(|e| TrackerError::Export(e.to_string()))
    }
}

/// (category, type) -> converted total
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CategoryBreakdownByType {
    pub categories: BTreeMap<(String, TransactionType), Money>,
}

impl CategoryBreakdownByType {
    /// Build the split breakdown for a list of transactions
    pub fn generate(
        transactions: &[Transaction],
        converter: &dyn CurrencyConverter,
    ) -> TrackerResult<Self> {
        let mut categories: BTreeMap<(String, TransactionType), Money> = BTreeMap::new();

        for txn in transactions {
            let converted = converter.convert(txn.amount, txn.currency)?;
            let total = categories
                .entry((txn.category.clone(), txn.transaction_type))
                .or_default();
            accumulate(total, converted)?;
        }

        for amount in categories.values_mut() {
            *amount = amount.round2();
        }

        Ok(Self { categories })
    }

    pub fn get(&self, category: &str, transaction_type: TransactionType) -> Option<Money> {
        self.categories
            .get(&(category.to_string(), transaction_type))
            .copied()
    }

    /// Format the breakdown for terminal display
    pub fn format_terminal(&self, base: Currency) -> String {
        let mut output = String::new();

        output.push_str(&format!("Category Breakdown by Type ({})\n", base));
        output.push_str(&"=".repeat(60));
        output.push('\n');

        for (transaction_type, heading) in [
            (TransactionType::Income, "INCOME"),
            (TransactionType::Expense, "EXPENSE"),
        ] {
            output.push_str(&format!("\n{}\n", heading));
            let mut any = false;
            for ((category, _), amount) in self
                .categories
                .iter()
                .filter(|((_, t), _)| *t == transaction_type)
            {
                any = true;
                output.push_str(&format!("  {:<38} {:>19}\n", category, amount));
            }
            if !any {
                output.push_str("  (none)\n");
            }
        }

        output
    }
}

/// Category label -> converted amount and last-seen type
pub fn category_breakdown(
    transactions: &[Transaction],
    converter: &dyn CurrencyConverter,
) -> TrackerResult<CategoryBreakdown> {
    CategoryBreakdown::generate(transactions, converter)
}

/// (category, type) -> converted amount
pub fn category_breakdown_by_type(
    transactions: &[Transaction],
    converter: &dyn CurrencyConverter,
) -> TrackerResult<CategoryBreakdownByType> {
    CategoryBreakdownByType::generate(transactions, converter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::IdentityConverter;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn txn(t: &str, amount: &str, category: &str) -> Transaction {
        Transaction::create(t, amount, "USD", category, "2025-01-01").unwrap()
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
    fn test_groups_by_category() {
        let txns = vec![
            txn("Expense", "10", "Food"),
            txn("Expense", "5.50", "Food"),
            txn("Income", "100", "Salary"),
        ];
        let breakdown = category_breakdown(&txns, &IdentityConverter).unwrap();

        assert_eq!(breakdown.categories.len(), 2);
        let food = breakdown.get("Food").unwrap();
        assert_eq!(food.amount.value(), dec!(15.50));
        assert_eq!(food.transaction_type, TransactionType::Expense);
        assert_eq!(
            breakdown.get("Salary").unwrap().transaction_type,
            TransactionType::Income
        );
    }

    #[test]
    fn test_category_match_is_exact() {
        let txns = vec![txn("Expense", "1", "food"), txn("Expense", "2", "Food")];
        let breakdown = category_breakdown(&txns, &IdentityConverter).unwrap();
        assert_eq!(breakdown.categories.len(), 2);
    }

    #[test]
    fn test_mixed_category_last_type_wins() {
        let txns = vec![txn("Expense", "30", "Gifts"), txn("Income", "20", "Gifts")];
        let breakdown = category_breakdown(&txns, &IdentityConverter).unwrap();

        let gifts = breakdown.get("Gifts").unwrap();
        assert_eq!(gifts.amount.value(), dec!(50));
        assert_eq!(gifts.transaction_type, TransactionType::Income);
    }

    #[test]
    fn test_by_type_keeps_mixed_rows_apart() {
        let txns = vec![txn("Expense", "30", "Gifts"), txn("Income", "20", "Gifts")];
        let breakdown = category_breakdown_by_type(&txns, &IdentityConverter).unwrap();

        assert_eq!(
            breakdown.get("Gifts", TransactionType::Expense).unwrap().value(),
            dec!(30)
        );
        assert_eq!(
            breakdown.get("Gifts", TransactionType::Income).unwrap().value(),
            dec!(20)
        );
    }

    #[test]
    fn test_amounts_rounded_per_category() {
        let txns = vec![txn("Expense", "0.333", "Tea"), txn("Expense", "0.333", "Tea")];
        let breakdown = category_breakdown(&txns, &IdentityConverter).unwrap();
        assert_eq!(breakdown.get("Tea").unwrap().amount.value(), dec!(0.67));
    }

    #[test]
    fn test_repeat_calls_are_identical() {
        let txns = vec![txn("Expense", "1.005", "A"), txn("Income", "2", "B")];
        assert_eq!(
            category_breakdown(&txns, &IdentityConverter).unwrap(),
            category_breakdown(&txns, &IdentityConverter).unwrap()
        );
    }

    #[test]
    fn test_export_csv_quotes_commas() {
        let txns = vec![txn("Expense", "3", "Food, drinks")];
        let breakdown = category_breakdown(&txns, &IdentityConverter).unwrap();

        let mut out = Vec::new();
        breakdown.export_csv(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        assert_eq!(csv, "Category,Type,Amount\n\"Food, drinks\",Expense,3.00\n");
    }

    #[test]
    fn test_export_csv_escapes_quotes_and_newlines() {
        let txns = vec![
            txn("Expense", "1", "Say \"hi\""),
            txn("Income", "2", "Two\nlines"),
        ];
        let breakdown = category_breakdown(&txns, &IdentityConverter).unwrap();

        let mut out = Vec::new();
        breakdown.export_csv(&mut out).unwrap();
        let mut reader = csv::Reader::from_reader(out.as_slice());
        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["Say \"hi\"".to_string(), "Expense".to_string(), "1.00".to_string()],
                vec!["Two\nlines".to_string(), "Income".to_string(), "2.00".to_string()],
            ]
        );
    }

    #[test]
    fn test_sum_past_decimal_range_is_error() {
        let txns = vec![oversized(TransactionType::Expense), oversized(TransactionType::Expense)];
        assert!(category_breakdown(&txns, &IdentityConverter)
            .unwrap_err()
            .is_overflow());
        assert!(category_breakdown_by_type(&txns, &IdentityConverter)
            .unwrap_err()
            .is_overflow());

        // split by type, the two rows never share a sum
        let mixed = vec![oversized(TransactionType::Expense), oversized(TransactionType::Income)];
        assert!(category_breakdown_by_type(&mixed, &IdentityConverter).is_ok());
    }

    #[test]
    fn test_format_terminal_empty() {
        let output = CategoryBreakdown::default().format_terminal(Currency::Usd);
        assert!(output.contains("No transactions."));
    }
}
