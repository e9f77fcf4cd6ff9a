//! Storage layer for MoneyTrack
//!
//! A single SQLite database holds users, transactions, and settings.
//! Repositories borrow the connection owned by [`Storage`], so every
//! operation is a short read or write against the same file.

pub mod init;
pub mod settings;
pub mod transactions;
pub mod users;

pub use init::initialize_schema;
pub use settings::{SettingsRepository, BASE_CURRENCY_KEY};
pub use transactions::TransactionRepository;
pub use users::UserRepository;

use rusqlite::Connection;

use crate::config::paths::TrackerPaths;
use crate::error::TrackerResult;
use crate::models::Currency;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    conn: Connection,
}

impl Storage {
    /// Open (creating if needed) the database under the data directory
    pub fn open(paths: &TrackerPaths, default_base: Currency) -> TrackerResult<Self> {
        paths.ensure_directories()?;

        let path = paths.database_file();
        let conn = Connection::open(&path)?;
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| {
            row.get::<_, String>(0)
        })?;

        tracing::debug!(path = %path.display(), "opened database");
        Self::from_connection(conn, default_base)
    }

    /// Open a private in-memory database
    pub fn open_in_memory(default_base: Currency) -> TrackerResult<Self> {
        Self::from_connection(Connection::open_in_memory()?, default_base)
    }

    fn from_connection(conn: Connection, default_base: Currency) -> TrackerResult<Self> {
        conn.pragma_update(None, "foreign_keys", "ON")?;
        initialize_schema(&conn, default_base)?;
        Ok(Self { conn })
    }

    /// Credential records
    pub fn users(&self) -> UserRepository<'_> {
        UserRepository::new(&self.conn)
    }

    /// Per-user transactions
    pub fn transactions(&self) -> TransactionRepository<'_> {
        TransactionRepository::new(&self.conn)
    }

    /// Global key/value settings
    pub fn settings(&self) -> SettingsRepository<'_> {
        SettingsRepository::new(&self.conn)
    }
}
