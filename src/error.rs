//! Custom error types for MoneyTrack
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::ValidationError;

/// The main error type for MoneyTrack operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Relational store errors (connectivity, SQL, constraint failures)
    #[error("Database error: {0}")]
    Database(String),

    /// A transaction field failed a domain rule
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Registration input rejected before touching the store
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Username already registered
    #[error("User already exists: {0}")]
    DuplicateUser(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Currency conversion errors
    #[error("Conversion error: {0}")]
    Conversion(String),

    /// A sum or conversion left the representable decimal range
    #[error("Amount out of range: {0}")]
    Overflow(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Credentials did not match a stored user
    #[error("Invalid credentials")]
    AuthenticationFailed,
}

impl TrackerError {
    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Create an overflow error for the named computation
    pub fn overflow(what: impl Into<String>) -> Self {
        Self::Overflow(what.into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an overflow error
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<rusqlite::Error> for TrackerError {
    fn from(err: rusqlite::Error) -> Self {
        Self::Database(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for MoneyTrack operations
pub type TrackerResult<T> = Result<T, TrackerError>;
