//! Settings service
//!
//! Reads and writes the global base currency kept in the settings table.

use crate::error::TrackerResult;
use crate::models::Currency;
use crate::storage::{Storage, BASE_CURRENCY_KEY};

use super::outcome::Notice;

/// Service for stored settings
pub struct SettingsService<'a> {
    storage: &'a Storage,
}

impl<'a> SettingsService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// The base currency analytics convert into
    ///
    /// Falls back to USD if the row is missing or holds an unknown code.
    pub fn base_currency(&self) -> TrackerResult<Currency> {
        let stored = self.storage.settings().get(BASE_CURRENCY_KEY)?;
        Ok(match stored {
            Some(code) => code.parse().unwrap_or_else(|_| {
                tracing::warn!(code = %code, "unknown base currency in settings, using USD");
                Currency::Usd
            }),
            None => Currency::Usd,
        })
    }

    /// Change the base currency
    pub fn set_base_currency(&self, currency: Currency) -> TrackerResult<Notice> {
        self.storage
            .settings()
            .set(BASE_CURRENCY_KEY, currency.code())?;
        tracing::info!(%currency, "base currency changed");
        Ok(Notice::success(format!("Base currency set to {}.", currency)))
    }
}
