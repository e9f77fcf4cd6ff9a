//! JSON Export functionality
//!
//! Exports a user's transactions to JSON format with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TrackerResult;
use crate::models::{Currency, StoredTransaction};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A user's complete transaction history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub username: String,

    /// Base currency at the time of export
    pub base_currency: Currency,

    pub transactions: Vec<StoredTransaction>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl UserExport {
    pub fn new(
        username: &str,
        base_currency: Currency,
        transactions: Vec<StoredTransaction>,
    ) -> Self {
        let earliest_transaction = transactions
            .iter()
            .map(|t| t.transaction.date)
            .min()
            .map(|d| d.to_string());

        let latest_transaction = transactions
            .iter()
            .map(|t| t.transaction.date)
            .max()
            .map(|d| d.to_string());

        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            username: username.to_string(),
            base_currency,
            metadata: ExportMetadata {
                transaction_count: transactions.len(),
                earliest_transaction,
                latest_transaction,
            },
            transactions,
        }
    }
}

/// Write an export as pretty-printed JSON
pub fn export_json<W: Write>(export: &UserExport, writer: W) -> TrackerResult<()> {
    serde_json::to_writer_pretty(writer, export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Transaction, TransactionId, UserId};

    fn stored(id: i64, date: &str) -> StoredTransaction {
        StoredTransaction {
            id: TransactionId::new(id),
            owner: UserId::new(1),
            transaction: Transaction::create("Income", "10", "USD", "Gift", date).unwrap(),
        }
    }

    #[test]
    fn test_metadata() {
        let export = UserExport::new(
            "alice",
            Currency::Usd,
            vec![stored(1, "2025-03-01"), stored(2, "2024-12-24")],
        );
        assert_eq!(export.metadata.transaction_count, 2);
        assert_eq!(export.metadata.earliest_transaction.as_deref(), Some("2024-12-24"));
        assert_eq!(export.metadata.latest_transaction.as_deref(), Some("2025-03-01"));
    }

    #[test]
    fn test_json_round_trips_transactions() {
        let export = UserExport::new("alice", Currency::Eur, vec![stored(1, "2025-03-01")]);
        let mut out = Vec::new();
        export_json(&export, &mut out).unwrap();

        let parsed: UserExport = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed.transactions, export.transactions);
        assert_eq!(parsed.base_currency, Currency::Eur);

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["transactions"][0]["type"], "Income");
        assert_eq!(value["transactions"][0]["amount"], "10");
    }
}
