//! Key/value settings table

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::TrackerResult;

/// Settings key holding the analytics base currency
pub const BASE_CURRENCY_KEY: &str = "base_currency";

/// Repository for the settings table
pub struct SettingsRepository<'a> {
    conn: &'a Connection,
}

impl<'a> SettingsRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Read a value by key
    pub fn get(&self, key: &str) -> TrackerResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    /// Insert or overwrite a value
    pub fn set(&self, key: &str, value: &str) -> TrackerResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        tracing::debug!(key, "setting updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::Storage;
    use super::*;
    use crate::models::Currency;

    #[test]
    fn test_seeded_base_currency() {
        let storage = Storage::open_in_memory(Currency::Usd).unwrap();
        assert_eq!(
            storage.settings().get(BASE_CURRENCY_KEY).unwrap().as_deref(),
            Some("USD")
        );
    }

    #[test]
    fn test_missing_key_is_none() {
        let storage = Storage::open_in_memory(Currency::Usd).unwrap();
        assert_eq!(storage.settings().get("nope").unwrap(), None);
    }

    #[test]
    fn test_set_is_upsert() {
        let storage = Storage::open_in_memory(Currency::Usd).unwrap();
        let repo = storage.settings();
        repo.set("theme", "dark").unwrap();
        repo.set("theme", "light").unwrap();
        assert_eq!(repo.get("theme").unwrap().as_deref(), Some("light"));
    }
}
