//! Currency conversion strategies
//!
//! Analytics never decide how an amount is converted; they are handed a
//! [`CurrencyConverter`] whose base currency is fixed for the whole pass.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::config::ExchangeRateSettings;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Currency, Money};

/// Converts an amount denominated in `from` into the converter's base currency
pub trait CurrencyConverter {
    fn convert(&self, amount: Money, from: Currency) -> TrackerResult<Money>;
}

impl<F> CurrencyConverter for F
where
    F: Fn(Money, Currency) -> TrackerResult<Money>,
{
    fn convert(&self, amount: Money, from: Currency) -> TrackerResult<Money> {
        self(amount, from)
    }
}

/// Treats every currency as the base currency
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityConverter;

impl CurrencyConverter for IdentityConverter {
    fn convert(&self, amount: Money, _from: Currency) -> TrackerResult<Money> {
        Ok(amount)
    }
}

/// Fixed-rate conversion into a chosen base currency
#[derive(Debug, Clone)]
pub struct RateTable {
    base: Currency,
    /// currency -> value of one unit in the pivot currency
    rates: BTreeMap<Currency, Decimal>,
}

impl RateTable {
    /// Build a table converting into `base` from the configured pivot rates
    pub fn new(base: Currency, settings: &ExchangeRateSettings) -> Self {
        let mut rates = settings.rates.clone();
        rates.entry(settings.pivot).or_insert(Decimal::ONE);
        Self { base, rates }
    }

    /// The currency every conversion lands in
    pub fn base(&self) -> Currency {
        self.base
    }

    /// Value of one unit of `currency` in the pivot currency
    pub fn rate(&self, currency: Currency) -> TrackerResult<Decimal> {
        match self.rates.get(&currency) {
            Some(rate) if *rate > Decimal::ZERO => Ok(*rate),
            Some(_) => Err(TrackerError::Conversion(format!(
                "exchange rate for {} must be positive",
                currency
            ))),
            None => Err(TrackerError::Conversion(format!(
                "no exchange rate for {}",
                currency
            ))),
        }
    }

    /// Cross rate: how many `base` units one unit of `from` buys
    pub fn cross_rate(&self, from: Currency) -> TrackerResult<Decimal> {
        if from == self.base {
            return Ok(Decimal::ONE);
        }
        self.rate(from)?
            .checked_div(self.rate(self.base)?)
            .ok_or_else(|| TrackerError::overflow(format!("{} to {} rate", from, self.base)))
    }
}

impl CurrencyConverter for RateTable {
    fn convert(&self, amount: Money, from: Currency) -> TrackerResult<Money> {
        if from == self.base {
            return Ok(amount);
        }
        let converted = amount
            .checked_mul(self.cross_rate(from)?)
            .ok_or_else(|| TrackerError::overflow(format!("{} {} in {}", amount, from, self.base)))?
            .round2();
        tracing::trace!(%amount, %from, to = %self.base, %converted, "converted amount");
        Ok(converted)
    }
}
