//! Storage initialization
//!
//! Creates the relational schema on first open and seeds default settings.

use rusqlite::{params, Connection};

use crate::error::TrackerResult;
use crate::models::Currency;

use super::settings::BASE_CURRENCY_KEY;

/// Create tables and indexes if missing, and seed the base currency
///
/// Safe to run on every open; existing rows are never touched.
pub fn initialize_schema(conn: &Connection, default_base: Currency) -> TrackerResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            salt TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS transactions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            t_type TEXT NOT NULL,
            amount TEXT NOT NULL,
            currency TEXT NOT NULL,
            category TEXT NOT NULL,
            date TEXT NOT NULL,
            user_id INTEGER NOT NULL REFERENCES users(id)
        );

        CREATE INDEX IF NOT EXISTS idx_transactions_user ON transactions(user_id);

        CREATE TABLE IF NOT EXISTS settings (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );",
    )?;

    conn.execute(
        "INSERT OR IGNORE INTO settings (key, value) VALUES (?1, ?2)",
        params![BASE_CURRENCY_KEY, default_base.code()],
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_count(conn: &Connection) -> TrackerResult<i64> {
        let count = conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master
             WHERE type = 'table' AND name IN ('users', 'transactions', 'settings')",
            [],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    #[test]
    fn test_creates_all_tables() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn, Currency::Usd).unwrap();
        assert_eq!(table_count(&conn).unwrap(), 3);
    }

    #[test]
    fn test_is_idempotent_and_keeps_existing_base() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn, Currency::Eur).unwrap();
        initialize_schema(&conn, Currency::Usd).unwrap();

        let base: String = conn
            .query_row(
                "SELECT value FROM settings WHERE key = ?1",
                [BASE_CURRENCY_KEY],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(base, "EUR");
    }
}
