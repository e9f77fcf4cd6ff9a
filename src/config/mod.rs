//! Configuration module for MoneyTrack
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - Application settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{ExchangeRateSettings, Settings};
