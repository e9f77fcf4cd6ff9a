//! Month-bucketed income / expense summary

use std::collections::BTreeMap;
use std::io::Write;

use super::accumulate;
use crate::error::{TrackerError, TrackerResult};
use crate::fx::CurrencyConverter;
use crate::models::{Currency, Money, Transaction, TransactionType};

/// Converted income and expense within one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MonthSummary {
    pub income: Money,
    pub expense: Money,
}

impl MonthSummary {
    /// Income minus expense for the month
    pub fn net(&self) -> Money {
        self.income - self.expense
    }
}

/// "YYYY-MM" -> monthly figures, in chronological order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MonthlySummary {
    pub months: BTreeMap<String, MonthSummary>,
}

impl MonthlySummary {
    /// Bucket a list of transactions by calendar month
    pub fn generate(
        transactions: &[Transaction],
        converter: &dyn CurrencyConverter,
    ) -> TrackerResult<Self> {
        let mut months: BTreeMap<String, MonthSummary> = BTreeMap::new();

        for txn in transactions {
            let converted = converter.convert(txn.amount, txn.currency)?;
            let bucket = months.entry(txn.month_key()).or_default();
            match txn.transaction_type {
                TransactionType::Income => accumulate(&mut bucket.income, converted)?,
                TransactionType::Expense => accumulate(&mut bucket.expense, converted)?,
            }
        }

        for bucket in months.values_mut() {
            bucket.income = bucket.income.round2();
            bucket.expense = bucket.expense.round2();
        }

        Ok(Self { months })
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn get(&self, month: &str) -> Option<&MonthSummary> {
        self.months.get(month)
    }

    /// The most recent `count` months, oldest first
    pub fn last_months(&self, count: usize) -> impl Iterator<Item = (&String, &MonthSummary)> {
        let skip = self.months.len().saturating_sub(count);
        self.months.iter().skip(skip)
    }

    /// Format the summary for terminal display
    pub fn format_terminal(&self, base: Currency) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Summary ({})\n", base));
        output.push_str(&"=".repeat(60));
        output.push('\n');
        output.push_str(&format!(
            "{:<10} {:>15} {:>15} {:>15}\n",
            "Month", "Income", "Expense", "Net"
        ));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        if self.months.is_empty() {
            output.push_str("No transactions.\n");
        }

        for (month, summary) in &self.months {
            output.push_str(&format!(
                "{:<10} {:>15} {:>15} {:>15}\n",
                month,
                summary.income,
                summary.expense,
                summary.net()
            ));
        }

        output
    }

    /// Export the summary to CSV format
    pub fn export_csv<W: Write>(&self, writer: &mut W) -> TrackerResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["Month", "Income", "Expense", "Net"])?;

        for (month, summary) in &self.months {
            csv_writer.write_record([
                month.clone(),
                summary.income.to_string(),
                summary.expense.to_string(),
                summary.net().to_string(),
            ])?;
        }

        csv_writer
            .flush()
            .map_err(|e| TrackerError::Export(e.to_string()))
    }
}

/// "YYYY-MM" -> converted income and expense
pub fn monthly_summary(
    transactions: &[Transaction],
    converter: &dyn CurrencyConverter,
) -> TrackerResult<MonthlySummary> {
    MonthlySummary::generate(transactions, converter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::IdentityConverter;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn txn(t: &str, amount: &str, date: &str) -> Transaction {
        Transaction::create(t, amount, "USD", "Misc", date).unwrap()
    }

    #[test]
    fn test_same_month_accumulates() {
        let txns = vec![
            txn("Income", "50", "2025-01-15"),
            txn("Income", "70", "2025-01-20"),
        ];
        let summary = monthly_summary(&txns, &IdentityConverter).unwrap();

        assert_eq!(summary.months.len(), 1);
        let january = summary.get("2025-01").unwrap();
        assert_eq!(january.income.value(), dec!(120));
        assert_eq!(january.expense, Money::zero());
        assert_eq!(january.expense.to_string(), "0.00");
    }

    #[test]
    fn test_buckets_sorted_chronologically() {
        let txns = vec![
            txn("Expense", "1", "2025-03-01"),
            txn("Expense", "1", "2024-12-31"),
            txn("Income", "1", "2025-01-01"),
        ];
        let summary = monthly_summary(&txns, &IdentityConverter).unwrap();

        let keys: Vec<_> = summary.months.keys().cloned().collect();
        assert_eq!(keys, vec!["2024-12", "2025-01", "2025-03"]);
    }

    #[test]
    fn test_last_months() {
        let txns = vec![
            txn("Income", "1", "2025-01-01"),
            txn("Income", "2", "2025-02-01"),
            txn("Income", "3", "2025-03-01"),
        ];
        let summary = monthly_summary(&txns, &IdentityConverter).unwrap();

        let recent: Vec<_> = summary.last_months(2).map(|(m, _)| m.as_str()).collect();
        assert_eq!(recent, vec!["2025-02", "2025-03"]);
        assert_eq!(summary.last_months(10).count(), 3);
    }

    #[test]
    fn test_sum_past_decimal_range_is_error() {
        let oversized = |date: NaiveDate| Transaction {
            transaction_type: TransactionType::Income,
            amount: Money::new(Decimal::MAX),
            currency: Currency::Usd,
            category: "Misc".to_string(),
            date,
        };
        let january = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let february = NaiveDate::from_ymd_opt(2025, 2, 1).unwrap();

        let same_month = vec![oversized(january), oversized(january)];
        assert!(monthly_summary(&same_month, &IdentityConverter)
            .unwrap_err()
            .is_overflow());

        let separate_months = vec![oversized(january), oversized(february)];
        assert_eq!(
            monthly_summary(&separate_months, &IdentityConverter)
                .unwrap()
                .months
                .len(),
            2
        );
    }

    #[test]
    fn test_empty() {
        let summary = monthly_summary(&[], &IdentityConverter).unwrap();
        assert!(summary.is_empty());
    }

    #[test]
    fn test_export_csv() {
        let txns = vec![
            txn("Income", "100", "2025-01-01"),
            txn("Expense", "25.5", "2025-01-02"),
        ];
        let summary = monthly_summary(&txns, &IdentityConverter).unwrap();

        let mut out = Vec::new();
        summary.export_csv(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Month,Income,Expense,Net\n2025-01,100.00,25.50,74.50\n"
        );
    }
}
