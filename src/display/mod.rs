//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions, reports, and action
//! notices for terminal display.

pub mod report;
pub mod transaction;

pub use report::{
    format_bar, format_category_bars, format_forecast, format_money_colored, format_notice,
    format_welcome, separator,
};
pub use transaction::{
    format_transaction_details, format_transaction_register, format_transaction_row,
};
