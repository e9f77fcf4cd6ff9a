//! Reports module for MoneyTrack
//!
//! Analytics over one user's transactions: totals, category breakdowns,
//! monthly summaries, and a short-horizon forecast. Every report is a pure
//! function of a transaction list and a currency converter, recomputed on
//! each call.

pub mod category;
pub mod dashboard;
pub mod forecast;
pub mod monthly;
pub mod totals;

pub use category::{
    category_breakdown, category_breakdown_by_type, CategoryBreakdown, CategoryBreakdownByType,
    CategoryTotal,
};
pub use dashboard::Dashboard;
pub use forecast::{forecast_from_summary, forecast_next_month, DEFAULT_FORECAST_WINDOW};
pub use monthly::{monthly_summary, MonthSummary, MonthlySummary};
pub use totals::{compute_totals, Totals};

use crate::error::{TrackerError, TrackerResult};
use crate::models::Money;

/// Add `amount` into a running total, failing instead of overflowing
fn accumulate(total: &mut Money, amount: Money) -> TrackerResult<()> {
    *total = total
        .checked_add(amount)
        .ok_or_else(|| TrackerError::overflow("sum of converted amounts"))?;
    Ok(())
}
