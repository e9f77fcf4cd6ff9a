//! Service layer for MoneyTrack
//!
//! The service layer provides business logic on top of the storage layer.
//! Every user-scoped call takes the acting [`UserIdentity`](crate::models::UserIdentity)
//! as an explicit argument.

pub mod analytics;
pub mod auth;
pub mod outcome;
pub mod settings;
pub mod transaction;

pub use analytics::AnalyticsService;
pub use auth::AuthService;
pub use outcome::{Notice, NoticeLevel};
pub use settings::SettingsService;
pub use transaction::{TransactionInput, TransactionService};
