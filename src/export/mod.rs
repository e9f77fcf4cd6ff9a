//! Export module for MoneyTrack
//!
//! - CSV: one row per transaction (spreadsheet-compatible)
//! - JSON: machine-readable export with metadata

pub mod csv;
pub mod json;

pub use csv::export_transactions_csv;
pub use json::{export_json, ExportMetadata, UserExport, EXPORT_SCHEMA_VERSION};
