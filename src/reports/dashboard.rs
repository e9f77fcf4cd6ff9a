//! Dashboard
//!
//! Every analytics figure computed from the same snapshot of transactions.

use crate::error::TrackerResult;
use crate::fx::CurrencyConverter;
use crate::models::{Currency, Money, Transaction};

use super::category::CategoryBreakdown;
use super::forecast::forecast_from_summary;
use super::monthly::MonthlySummary;
use super::totals::Totals;

/// Combined analytics for one user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub base_currency: Currency,
    pub transaction_count: usize,
    pub totals: Totals,
    pub categories: CategoryBreakdown,
    pub monthly: MonthlySummary,
    pub forecast: Money,
    pub forecast_window: usize,
}

impl Dashboard {
    /// Compute every report over the same transaction list
    pub fn generate(
        transactions: &[Transaction],
        converter: &dyn CurrencyConverter,
        base_currency: Currency,
        forecast_window: usize,
    ) -> TrackerResult<Self> {
        let monthly = MonthlySummary::generate(transactions, converter)?;
        let forecast = forecast_from_summary(&monthly, forecast_window)?;

        Ok(Self {
            base_currency,
            transaction_count: transactions.len(),
            totals: Totals::generate(transactions, converter)?,
            categories: CategoryBreakdown::generate(transactions, converter)?,
            monthly,
            forecast,
            forecast_window,
        })
    }

    /// Format the dashboard for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "Dashboard: {} transaction(s), figures in {}\n\n",
            self.transaction_count, self.base_currency
        ));
        output.push_str(&self.totals.format_terminal(self.base_currency));
        output.push('\n');
        output.push_str(&self.monthly.format_terminal(self.base_currency));
        output.push('\n');
        output.push_str(&self.categories.format_terminal(self.base_currency));
        output.push('\n');
        output.push_str(&format!(
            "Forecast next month (avg of last {} month(s)): {} {}\n",
            self.forecast_window, self.forecast, self.base_currency
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fx::IdentityConverter;
    use crate::reports::{category_breakdown, compute_totals, forecast_next_month, monthly_summary};

    fn sample() -> Vec<Transaction> {
        vec![
            Transaction::create("Income", "100", "USD", "Salary", "2025-01-01").unwrap(),
            Transaction::create("Expense", "40", "USD", "Rent", "2025-01-03").unwrap(),
            Transaction::create("Expense", "12.5", "USD", "Food", "2025-02-03").unwrap(),
        ]
    }

    #[test]
    fn test_dashboard_agrees_with_individual_reports() {
        let txns = sample();
        let dashboard = Dashboard::generate(&txns, &IdentityConverter, Currency::Usd, 3).unwrap();

        assert_eq!(dashboard.transaction_count, 3);
        assert_eq!(dashboard.totals, compute_totals(&txns, &IdentityConverter).unwrap());
        assert_eq!(
            dashboard.categories,
            category_breakdown(&txns, &IdentityConverter).unwrap()
        );
        assert_eq!(dashboard.monthly, monthly_summary(&txns, &IdentityConverter).unwrap());
        assert_eq!(
            dashboard.forecast,
            forecast_next_month(&txns, &IdentityConverter, 3).unwrap()
        );
    }

    #[test]
    fn test_format_terminal_has_every_section() {
        let dashboard =
            Dashboard::generate(&sample(), &IdentityConverter, Currency::Usd, 3).unwrap();
        let output = dashboard.format_terminal();

        assert!(output.contains("Totals (USD)"));
        assert!(output.contains("Monthly Summary"));
        assert!(output.contains("Category Breakdown"));
        assert!(output.contains("Forecast next month"));
    }
}
