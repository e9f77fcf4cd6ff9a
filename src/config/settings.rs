//! Application settings for MoneyTrack
//!
//! Persisted as `config.json` in the data directory. The active base currency
//! lives in the database (see [`SettingsService`](crate::services::SettingsService));
//! this file only seeds it on first run.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Currency;

/// Fixed exchange-rate table
///
/// Each rate is the value of one unit of the currency expressed in `pivot`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateSettings {
    /// Currency every rate is quoted against
    #[serde(default)]
    pub pivot: Currency,

    /// currency -> value of one unit in the pivot currency
    #[serde(default = "default_rates")]
    pub rates: BTreeMap<Currency, Decimal>,
}

impl Default for ExchangeRateSettings {
    fn default() -> Self {
        Self {
            pivot: Currency::Usd,
            rates: default_rates(),
        }
    }
}

fn default_rates() -> BTreeMap<Currency, Decimal> {
    BTreeMap::from([
        (Currency::Usd, dec!(1)),
        (Currency::Mmk, dec!(0.0005)),
        (Currency::Eur, dec!(1.08)),
        (Currency::Jpy, dec!(0.0067)),
        (Currency::Sgd, dec!(0.74)),
        (Currency::Thb, dec!(0.028)),
        (Currency::Cny, dec!(0.14)),
    ])
}

/// User settings for MoneyTrack
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Base currency written to the database on first initialisation
    #[serde(default)]
    pub default_base_currency: Currency,

    /// Number of trailing months averaged by the forecast
    #[serde(default = "default_forecast_window")]
    pub forecast_window_months: usize,

    /// Conversion rates used for analytics
    #[serde(default)]
    pub exchange_rates: ExchangeRateSettings,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// tracing filter used when RUST_LOG is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_forecast_window() -> usize {
    3
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_base_currency: Currency::default(),
            forecast_window_months: default_forecast_window(),
            exchange_rates: ExchangeRateSettings::default(),
            date_format: default_date_format(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                TrackerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                TrackerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            settings.validate()?;
            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &TrackerPaths) -> Result<(), TrackerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            TrackerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| TrackerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// Reject values no report could work with
    pub fn validate(&self) -> Result<(), TrackerError> {
        if self.forecast_window_months == 0 {
            return Err(TrackerError::Config(
                "forecast_window_months must be at least 1".into(),
            ));
        }
        if let Some((currency, _)) = self
            .exchange_rates
            .rates
            .iter()
            .find(|(_, rate)| **rate <= Decimal::ZERO)
        {
            return Err(TrackerError::Config(format!(
                "exchange rate for {} must be positive",
                currency
            )));
        }
        Ok(())
    }
}
