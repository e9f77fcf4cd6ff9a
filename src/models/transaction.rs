//! Transaction model
//!
//! An income or expense entry recorded in one of the supported currencies.
//! Construction always goes through validation, so a `Transaction` value is
//! known to satisfy every field rule.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use super::currency::Currency;
use super::ids::{TransactionId, UserId};
use super::money::Money;

/// Date format accepted and stored for transactions
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Largest amount a single transaction may record
///
/// Keeps converted sums well inside the range of `Decimal`.
pub const MAX_AMOUNT: Decimal = rust_decimal_macros::dec!(1_000_000_000_000_000);

/// Validation errors raised while constructing a transaction
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid transaction type: {0}")]
    InvalidType(String),

    #[error("Amount must be greater than zero.")]
    InvalidAmount,

    #[error("Amount must not exceed {}.", MAX_AMOUNT)]
    AmountTooLarge,

    #[error("Category cannot be empty.")]
    InvalidCategory,

    #[error("Date must be in YYYY-MM-DD format: '{0}'")]
    InvalidDate(String),

    #[error("Unsupported currency: {0}")]
    InvalidCurrency(String),
}

/// Whether money came in or went out
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    /// Stored / displayed label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Income" => Ok(Self::Income),
            "Expense" => Ok(Self::Expense),
            _ => Err(ValidationError::InvalidType(s.to_string())),
        }
    }
}

/// A validated income/expense entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub amount: Money,
    pub currency: Currency,
    pub category: String,
    pub date: NaiveDate,
}

impl Transaction {
    /// Build a transaction from typed values
    ///
    /// The category is trimmed; the amount must be strictly positive.
    pub fn new(
        transaction_type: TransactionType,
        amount: Money,
        currency: Currency,
        category: &str,
        date: NaiveDate,
    ) -> Result<Self, ValidationError> {
        let txn = Self {
            transaction_type,
            amount,
            currency,
            category: category.trim().to_string(),
            date,
        };
        txn.validate()?;
        Ok(txn)
    }

    /// Build a transaction from raw user input
    ///
    /// Fields are checked in order type, amount, category, date, currency and
    /// the first failure is returned.
    pub fn create(
        transaction_type: &str,
        amount: &str,
        currency: &str,
        category: &str,
        date: &str,
    ) -> Result<Self, ValidationError> {
        let transaction_type: TransactionType = transaction_type.parse()?;
        let amount = Money::parse(amount).map_err(|_| ValidationError::InvalidAmount)?;
        check_amount(amount)?;
        if category.trim().is_empty() {
            return Err(ValidationError::InvalidCategory);
        }
        let date = parse_date(date)?;
        let currency: Currency = currency.parse()?;

        Self::new(transaction_type, amount, currency, category, date)
    }

    /// Check the field rules
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_amount(self.amount)?;
        if self.category.trim().is_empty() {
            return Err(ValidationError::InvalidCategory);
        }
        Ok(())
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    /// Calendar month bucket, "YYYY-MM"
    pub fn month_key(&self) -> String {
        format!("{:04}-{:02}", self.date.year(), self.date.month())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.date.format(DATE_FORMAT),
            self.transaction_type,
            self.category,
            self.amount,
            self.currency
        )
    }
}

fn check_amount(amount: Money) -> Result<(), ValidationError> {
    if !amount.is_positive() {
        return Err(ValidationError::InvalidAmount);
    }
    if amount.value() > MAX_AMOUNT {
        return Err(ValidationError::AmountTooLarge);
    }
    Ok(())
}

/// Parse a "YYYY-MM-DD" calendar date
///
/// Only four-digit years are accepted, so month keys sort chronologically.
pub fn parse_date(input: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .ok()
        .filter(|date| (0..=9999).contains(&date.year()))
        .ok_or_else(|| ValidationError::InvalidDate(input.to_string()))
}

/// A transaction as held by the store, with its row id and owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTransaction {
    pub id: TransactionId,
    pub owner: UserId,
    #[serde(flatten)]
    pub transaction: Transaction,
}
