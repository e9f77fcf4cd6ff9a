//! MoneyTrack - personal income and expense tracker
//!
//! Users record income and expense transactions in several currencies and
//! view analytics converted into a chosen base currency.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: tracing subscriber setup
//! - `crypto`: Password hashing and zeroizing secrets
//! - `models`: Core data models (transactions, money, currencies, users)
//! - `storage`: SQLite storage layer
//! - `fx`: Currency conversion strategies
//! - `reports`: Analytics over a user's transactions
//! - `services`: Business logic layer
//! - `display`: Terminal formatting
//! - `export`: CSV and JSON export
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use moneytrack::config::{Settings, TrackerPaths};
//! use moneytrack::services::{AnalyticsService, AuthService};
//! use moneytrack::storage::Storage;
//!
//! let paths = TrackerPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths, settings.default_base_currency)?;
//!
//! let user = AuthService::new(&storage).login("alice", "secret")?;
//! let analytics = AnalyticsService::new(&storage, &settings.exchange_rates, 3);
//! println!("{}", analytics.totals(&user)?.net);
//! ```

pub mod cli;
pub mod config;
pub mod crypto;
pub mod display;
pub mod error;
pub mod export;
pub mod fx;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{TrackerError, TrackerResult};
