//! Next-month net forecast
//!
//! A simple moving average of the most recent monthly nets.

use rust_decimal::Decimal;

use super::monthly::MonthlySummary;
use crate::error::{TrackerError, TrackerResult};
use crate::fx::CurrencyConverter;
use crate::models::{Money, Transaction};

/// Default number of trailing months averaged
pub const DEFAULT_FORECAST_WINDOW: usize = 3;

/// Mean net of the last `window_months` month buckets
///
/// Months with no transactions are not buckets and do not count toward the
/// window. Returns zero when there is no history. A window of zero is treated
/// as one month.
pub fn forecast_next_month(
    transactions: &[Transaction],
    converter: &dyn CurrencyConverter,
    window_months: usize,
) -> TrackerResult<Money> {
    let summary = MonthlySummary::generate(transactions, converter)?;
    forecast_from_summary(&summary, window_months)
}

/// Same as [`forecast_next_month`] over an already computed summary
pub fn forecast_from_summary(
    summary: &MonthlySummary,
    window_months: usize,
) -> TrackerResult<Money> {
    let nets: Vec<Money> = summary
        .last_months(window_months.max(1))
        .map(|(_, month)| month.net())
        .collect();

    if nets.is_empty() {
        return Ok(Money::zero());
    }

    let average = nets
        .iter()
        .try_fold(Money::zero(), |total, net| total.checked_add(*net))
        .and_then(|total| total.checked_div(Decimal::from(nets.len())))
        .ok_or_else(|| TrackerError::overflow("forecast over monthly nets"))?;
    Ok(average.round2())
}
