//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod auth;
pub mod export;
pub mod report;
pub mod session;
pub mod settings;
pub mod transaction;

pub use auth::{handle_login, handle_register};
pub use export::{handle_export_command, ExportCommands};
pub use report::{handle_report_command, ReportCommands};
pub use session::{require_user, PASSWORD_ENV, USER_ENV};
pub use settings::{handle_settings_command, SettingsCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
