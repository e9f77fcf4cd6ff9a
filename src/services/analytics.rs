//! Analytics service
//!
//! Glues storage, the stored base currency, and the configured exchange
//! rates to the pure report functions. Each call fetches the user's
//! transactions afresh; nothing is cached between calls.

use crate::config::ExchangeRateSettings;
use crate::error::TrackerResult;
use crate::fx::RateTable;
use crate::models::{Money, Transaction, UserIdentity};
use crate::reports::{
    forecast_next_month, CategoryBreakdown, CategoryBreakdownByType, Dashboard, MonthlySummary,
    Totals,
};
use crate::storage::Storage;

use super::settings::SettingsService;

/// Service producing a user's reports in the current base currency
pub struct AnalyticsService<'a> {
    storage: &'a Storage,
    rates: &'a ExchangeRateSettings,
    forecast_window: usize,
}

impl<'a> AnalyticsService<'a> {
    pub fn new(
        storage: &'a Storage,
        rates: &'a ExchangeRateSettings,
        forecast_window: usize,
    ) -> Self {
        Self {
            storage,
            rates,
            forecast_window,
        }
    }

    /// Converter into the currently stored base currency
    pub fn converter(&self) -> TrackerResult<RateTable> {
        let base = SettingsService::new(self.storage).base_currency()?;
        Ok(RateTable::new(base, self.rates))
    }

    fn snapshot(&self, user: &UserIdentity) -> TrackerResult<Vec<Transaction>> {
        Ok(self
            .storage
            .transactions()
            .list(user.id)?
            .into_iter()
            .map(|stored| stored.transaction)
            .collect())
    }

    pub fn totals(&self, user: &UserIdentity) -> TrackerResult<Totals> {
        let converter = self.converter()?;
        Totals::generate(&self.snapshot(user)?, &converter)
    }

    pub fn category_breakdown(&self, user: &UserIdentity) -> TrackerResult<CategoryBreakdown> {
        let converter = self.converter()?;
        CategoryBreakdown::generate(&self.snapshot(user)?, &converter)
    }

    pub fn category_breakdown_by_type(
        &self,
        user: &UserIdentity,
    ) -> TrackerResult<CategoryBreakdownByType> {
        let converter = self.converter()?;
        CategoryBreakdownByType::generate(&self.snapshot(user)?, &converter)
    }

    pub fn monthly_summary(&self, user: &UserIdentity) -> TrackerResult<MonthlySummary> {
        let converter = self.converter()?;
        MonthlySummary::generate(&self.snapshot(user)?, &converter)
    }

    /// Forecast over the configured window
    pub fn forecast(&self, user: &UserIdentity) -> TrackerResult<Money> {
        self.forecast_with_window(user, self.forecast_window)
    }

    pub fn forecast_with_window(
        &self,
        user: &UserIdentity,
        window_months: usize,
    ) -> TrackerResult<Money> {
        let converter = self.converter()?;
        forecast_next_month(&self.snapshot(user)?, &converter, window_months)
    }

    /// Every report from a single fetch
    pub fn dashboard(&self, user: &UserIdentity) -> TrackerResult<Dashboard> {
        let converter = self.converter()?;
        Dashboard::generate(
            &self.snapshot(user)?,
            &converter,
            converter.base(),
            self.forecast_window,
        )
    }
}
