//! User model
//!
//! Stored credential records and the identity handed out after a successful
//! login.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// A credential row as held by the store
///
/// `salt` and `password_hash` are raw bytes; the store encodes them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub username: String,
    pub salt: Vec<u8>,
    pub password_hash: Vec<u8>,
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// The public identity for this record
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            id: self.id,
            username: self.username.clone(),
        }
    }
}

/// An authenticated user, passed explicitly to every user-scoped call
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: UserId,
    pub username: String,
}
