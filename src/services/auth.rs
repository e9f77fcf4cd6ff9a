//! Authentication service
//!
//! Registers users and checks their credentials against the stored salt and
//! hash. A failed login never says whether the username or the password was
//! wrong.

use crate::crypto::{hash_password_with, verify_password_with, KdfParams};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{UserId, UserIdentity};
use crate::storage::Storage;

/// Service for registration and login
pub struct AuthService<'a> {
    storage: &'a Storage,
    params: KdfParams,
}

impl<'a> AuthService<'a> {
    /// Create an auth service with the standard KDF parameters
    pub fn new(storage: &'a Storage) -> Self {
        Self::with_params(storage, KdfParams::default())
    }

    /// Create an auth service with explicit KDF parameters
    pub fn with_params(storage: &'a Storage, params: KdfParams) -> Self {
        Self { storage, params }
    }

    /// Register a new user
    pub fn register(&self, username: &str, password: &str) -> TrackerResult<UserId> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(TrackerError::InvalidInput(
                "Username and password cannot be empty.".into(),
            ));
        }

        if self.storage.users().exists(username)? {
            return Err(TrackerError::DuplicateUser(username.to_string()));
        }

        let derived = hash_password_with(password, &self.params);
        let id = self
            .storage
            .users()
            .create(username, &derived.hash, &derived.salt)?;

        tracing::info!(user = %id, username, "registered user");
        Ok(id)
    }

    /// Check credentials
    ///
    /// Returns `None` for an unknown user and for a wrong password alike.
    pub fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> TrackerResult<Option<UserIdentity>> {
        let username = username.trim();

        let Some(record) = self.storage.users().find_by_username(username)? else {
            tracing::warn!("rejected login attempt");
            return Ok(None);
        };

        if verify_password_with(password, &record.salt, &record.password_hash, &self.params) {
            tracing::debug!(user = %record.id, "authenticated");
            Ok(Some(record.identity()))
        } else {
            tracing::warn!("rejected login attempt");
            Ok(None)
        }
    }

    /// Like [`authenticate`](Self::authenticate), but a rejection is an error
    pub fn login(&self, username: &str, password: &str) -> TrackerResult<UserIdentity> {
        self.authenticate(username, password)?
            .ok_or(TrackerError::AuthenticationFailed)
    }
}
