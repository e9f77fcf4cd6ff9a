//! Money type for representing currency amounts
//!
//! Wraps a `rust_decimal::Decimal` so amounts and converted values keep exact
//! decimal precision. The currency itself travels separately (see
//! [`Currency`](super::Currency)); a `Money` is just a quantity.

use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Number of decimal places every reported figure is rounded to
pub const REPORT_DECIMALS: u32 = 2;

/// A decimal monetary quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money amount from a decimal
    pub const fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a Money amount from whole units and hundredths
    ///
    /// # Examples
    /// ```
    /// use moneytrack::models::Money;
    /// let amount = Money::from_cents(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Get the underlying decimal
    pub const fn value(&self) -> Decimal {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Check if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// Get the absolute value
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Round to two decimal places, half away from zero
    ///
    /// This is the single rounding policy used by every report.
    pub fn round2(&self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(REPORT_DECIMALS, RoundingStrategy::MidpointAwayFromZero),
        )
    }

    /// Add, returning `None` instead of overflowing
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Subtract, returning `None` instead of overflowing
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Scale by a rate, returning `None` instead of overflowing
    pub fn checked_mul(self, rate: Decimal) -> Option<Self> {
        self.0.checked_mul(rate).map(Self)
    }

    /// Divide, returning `None` on overflow or a zero divisor
    pub fn checked_div(self, divisor: Decimal) -> Option<Self> {
        self.0.checked_div(divisor).map(Self)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts plain decimals ("10.50", "-3", "1e2" is rejected), with an
    /// optional leading `$` and thousands separators.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };
        let rest = rest.strip_prefix('$').unwrap_or(rest).replace(',', "");

        if rest.is_empty() || !rest.chars().all(|c| c.is_ascii_digit() || c == '.') {
            return Err(MoneyParseError::InvalidFormat(s.to_string()));
        }

        let value = Decimal::from_str(&rest)
            .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

        Ok(Self(if negative { -value } else { value }))
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut shown = self.round2().0;
        shown.rescale(REPORT_DECIMALS);
        f.pad(&shown.to_string())
    }
}

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Self(value)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

impl Mul<Decimal> for Money {
    type Output = Self;

    fn mul(self, rate: Decimal) -> Self {
        Self(self.0 * rate)
    }
}

impl Div<Decimal> for Money {
    type Output = Self;

    fn div(self, divisor: Decimal) -> Self {
        Self(self.0 / divisor)
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_from_cents() {
        assert_eq!(Money::from_cents(1050).value(), dec!(10.50));
    }

    #[test]
    fn test_display_always_two_places() {
        assert_eq!(Money::from_cents(1050).to_string(), "10.50");
        assert_eq!(Money::zero().to_string(), "0.00");
        assert_eq!(Money::new(dec!(100)).to_string(), "100.00");
        assert_eq!(Money::new(dec!(-3.5)).to_string(), "-3.50");
        assert_eq!(Money::new(dec!(0.005)).to_string(), "0.01");
    }

    #[test]
    fn test_round2_is_half_away_from_zero() {
        assert_eq!(Money::new(dec!(2.345)).round2().value(), dec!(2.35));
        assert_eq!(Money::new(dec!(2.344)).round2().value(), dec!(2.34));
        assert_eq!(Money::new(dec!(-2.345)).round2().value(), dec!(-2.35));
        assert_eq!(Money::new(dec!(0.125)).round2().value(), dec!(0.13));
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!(a + b, Money::from_cents(1500));
        assert_eq!(a - b, Money::from_cents(500));
        assert_eq!(-a, Money::from_cents(-1000));
        assert_eq!(a * dec!(0.5), b);
        assert_eq!(a / dec!(2), b);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("10.50").unwrap().value(), dec!(10.50));
        assert_eq!(Money::parse("$10.50").unwrap().value(), dec!(10.50));
        assert_eq!(Money::parse("-10.50").unwrap().value(), dec!(-10.50));
        assert_eq!(Money::parse("1,250").unwrap().value(), dec!(1250));
        assert_eq!(Money::parse(" 0.05 ").unwrap().value(), dec!(0.05));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("").is_err());
        assert!(Money::parse("1e2").is_err());
        assert!(Money::parse("1.2.3").is_err());
    }

    #[test]
    fn test_is_checks() {
        assert!(Money::zero().is_zero());
        assert!(Money::from_cents(100).is_positive());
        assert!(Money::from_cents(-100).is_negative());
        assert!(!Money::zero().is_positive());
    }

    #[test]
    fn test_serialization_keeps_exact_decimal() {
        let m = Money::new(dec!(10.505));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "\"10.505\"");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let max = Money::new(Decimal::MAX);
        assert_eq!(max.checked_add(Money::from_cents(100)), None);
        assert_eq!(max.checked_mul(dec!(2)), None);
        assert_eq!(Money::from_cents(100).checked_div(Decimal::ZERO), None);
        assert_eq!(
            Money::from_cents(100).checked_add(Money::from_cents(50)),
            Some(Money::from_cents(150))
        );
        assert_eq!(
            Money::from_cents(100).checked_sub(Money::from_cents(150)),
            Some(Money::from_cents(-50))
        );
    }
}
