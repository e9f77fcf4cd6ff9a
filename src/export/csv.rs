//! CSV Export functionality
//!
//! Exports a user's transactions to CSV format.

use std::io::Write;

use serde::Serialize;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{StoredTransaction, DATE_FORMAT};

/// One CSV row
#[derive(Debug, Serialize)]
struct TransactionRecord<'a> {
    id: i64,
    #[serde(rename = "type")]
    transaction_type: &'static str,
    amount: String,
    currency: &'static str,
    category: &'a str,
    date: String,
}

impl<'a> From<&'a StoredTransaction> for TransactionRecord<'a> {
    fn from(stored: &'a StoredTransaction) -> Self {
        let txn = &stored.transaction;
        Self {
            id: stored.id.get(),
            transaction_type: txn.transaction_type.as_str(),
            amount: txn.amount.value().to_string(),
            currency: txn.currency.code(),
            category: &txn.category,
            date: txn.date.format(DATE_FORMAT).to_string(),
        }
    }
}

/// Export transactions to CSV
///
/// Amounts are written at full stored precision.
pub fn export_transactions_csv<W: Write>(
    transactions: &[StoredTransaction],
    writer: W,
) -> TrackerResult<()> {
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    if transactions.is_empty() {
        csv_writer.write_record(["id", "type", "amount", "currency", "category", "date"])?;
    }

    for stored in transactions {
        csv_writer.serialize(TransactionRecord::from(stored))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TrackerError::Export(e.to_string()))
}
