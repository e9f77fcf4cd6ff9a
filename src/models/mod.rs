//! Core data models for MoneyTrack
//!
//! This module contains the data structures of the tracking domain:
//! transactions, money amounts, currencies, and users.

pub mod currency;
pub mod ids;
pub mod money;
pub mod transaction;
pub mod user;

pub use currency::Currency;
pub use ids::{TransactionId, UserId};
pub use money::{Money, MoneyParseError};
pub use transaction::{
    parse_date, StoredTransaction, Transaction, TransactionType, ValidationError, DATE_FORMAT,
};
pub use user::{UserIdentity, UserRecord};
