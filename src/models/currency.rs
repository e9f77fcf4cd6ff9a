//! Supported currencies
//!
//! Transactions may only be recorded in one of a fixed set of currency codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::transaction::ValidationError;

/// A supported ISO-4217 currency code
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[default]
    Usd,
    Mmk,
    Eur,
    Jpy,
    Sgd,
    Thb,
    Cny,
}

impl Currency {
    /// Every supported currency, in display order
    pub fn all() -> &'static [Currency] {
        &[
            Self::Usd,
            Self::Mmk,
            Self::Eur,
            Self::Jpy,
            Self::Sgd,
            Self::Thb,
            Self::Cny,
        ]
    }

    /// The three-letter code
    pub fn code(&self) -> &'static str {
        match self {
            Self::Usd => "USD",
            Self::Mmk => "MMK",
            Self::Eur => "EUR",
            Self::Jpy => "JPY",
            Self::Sgd => "SGD",
            Self::Thb => "THB",
            Self::Cny => "CNY",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for Currency {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.code() == code)
            .ok_or_else(|| ValidationError::InvalidCurrency(s.trim().to_string()))
    }
}
