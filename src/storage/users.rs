//! User repository
//!
//! Salt and hash bytes are stored hex-encoded.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use crate::error::{TrackerError, TrackerResult};
use crate::models::{UserId, UserRecord};

/// Repository for credential records
pub struct UserRepository<'a> {
    conn: &'a Connection,
}

struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    salt: String,
    created_at: String,
}

impl<'a> UserRepository<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Insert a new user
    ///
    /// Returns [`TrackerError::DuplicateUser`] if the username is taken.
    pub fn create(
        &self,
        username: &str,
        password_hash: &[u8],
        salt: &[u8],
    ) -> TrackerResult<UserId> {
        let result = self.conn.execute(
            "INSERT INTO users (username, password_hash, salt, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![
                username,
                hex::encode(password_hash),
                hex::encode(salt),
                Utc::now().to_rfc3339()
            ],
        );

        match result {
            Ok(_) => Ok(UserId::new(self.conn.last_insert_rowid())),
            Err(rusqlite::Error::SqliteFailure(e, _))
                if e.code == ErrorCode::ConstraintViolation =>
            {
                Err(TrackerError::DuplicateUser(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Look up a user by exact username
    pub fn find_by_username(&self, username: &str) -> TrackerResult<Option<UserRecord>> {
        let row = self
            .conn
            .query_row(
                "SELECT id, username, password_hash, salt, created_at
                 FROM users WHERE username = ?1",
                [username],
                |row| {
                    Ok(UserRow {
                        id: row.get(0)?,
                        username: row.get(1)?,
                        password_hash: row.get(2)?,
                        salt: row.get(3)?,
                        created_at: row.get(4)?,
                    })
                },
            )
            .optional()?;

        row.map(UserRow::into_record).transpose()
    }

    /// Check whether a username is registered
    pub fn exists(&self, username: &str) -> TrackerResult<bool> {
        Ok(self.find_by_username(username)?.is_some())
    }
}

impl UserRow {
    fn into_record(self) -> TrackerResult<UserRecord> {
        let corrupt = |field: &str| {
            TrackerError::Database(format!("corrupt {} for user '{}'", field, self.username))
        };

        let password_hash = hex::decode(&self.password_hash).map_err(|_| corrupt("hash"))?;
        let salt = hex::decode(&self.salt).map_err(|_| corrupt("salt"))?;
        let created_at = DateTime::parse_from_rfc3339(&self.created_at)
            .map_err(|_| corrupt("created_at"))?
            .with_timezone(&Utc);

        Ok(UserRecord {
            id: UserId::new(self.id),
            username: self.username,
            salt,
            password_hash,
            created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::Storage;
    use super::*;
    use crate::models::Currency;

    fn storage() -> Storage {
        Storage::open_in_memory(Currency::Usd).unwrap()
    }

    #[test]
    fn test_create_and_find() {
        let storage = storage();
        let id = storage.users().create("alice", &[0xab; 32], &[0x01; 16]).unwrap();

        let record = storage.users().find_by_username("alice").unwrap().unwrap();
        assert_eq!(record.id, id);
        assert_eq!(record.username, "alice");
        assert_eq!(record.password_hash, vec![0xab; 32]);
        assert_eq!(record.salt, vec![0x01; 16]);
    }

    #[test]
    fn test_unknown_user_is_none() {
        let storage = storage();
        assert!(storage.users().find_by_username("ghost").unwrap().is_none());
        assert!(!storage.users().exists("ghost").unwrap());
    }

    #[test]
    fn test_duplicate_username_rejected() {
        let storage = storage();
        storage.users().create("alice", &[1; 32], &[1; 16]).unwrap();

        let err = storage.users().create("alice", &[2; 32], &[2; 16]).unwrap_err();
        assert!(matches!(err, TrackerError::DuplicateUser(name) if name == "alice"));

        let record = storage.users().find_by_username("alice").unwrap().unwrap();
        assert_eq!(record.password_hash, vec![1; 32]);
    }

    #[test]
    fn test_usernames_are_case_sensitive() {
        let storage = storage();
        storage.users().create("alice", &[1; 32], &[1; 16]).unwrap();
        assert!(storage.users().find_by_username("Alice").unwrap().is_none());
    }
}
