//! Credential input for user-scoped commands
//!
//! The acting user comes from `--user` / `MONEYTRACK_USER`; the password from
//! `MONEYTRACK_PASSWORD` or a hidden terminal prompt.

use crate::crypto::SecureString;
use crate::error::{TrackerError, TrackerResult};
use crate::models::UserIdentity;
use crate::services::AuthService;
use crate::storage::Storage;

/// Environment variable naming the acting user
pub const USER_ENV: &str = "MONEYTRACK_USER";

/// Environment variable holding the password (skips the prompt)
pub const PASSWORD_ENV: &str = "MONEYTRACK_PASSWORD";

/// Read a password from the environment or prompt for it
pub fn read_password(prompt: &str) -> TrackerResult<SecureString> {
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(SecureString::new(password));
    }

    let password = rpassword::prompt_password(prompt)
        .map_err(|e| TrackerError::Io(format!("Failed to read password: {}", e)))?;
    Ok(SecureString::new(password))
}

/// Read a new password, asking twice when prompting
pub fn read_new_password() -> TrackerResult<SecureString> {
    if let Ok(password) = std::env::var(PASSWORD_ENV) {
        return Ok(SecureString::new(password));
    }

    let first = read_password("Choose a password: ")?;
    let second = read_password("Confirm password: ")?;
    if first != second {
        return Err(TrackerError::InvalidInput("Passwords do not match.".into()));
    }
    Ok(first)
}

/// Authenticate the acting user before a user-scoped command
pub fn require_user(storage: &Storage, username: Option<&str>) -> TrackerResult<UserIdentity> {
    let username = username
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            TrackerError::InvalidInput(format!(
                "No user given; pass --user or set {}",
                USER_ENV
            ))
        })?;

    let password = read_password(&format!("Password for {}: ", username))?;
    AuthService::new(storage).login(username, &password)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Currency;

    #[test]
    fn test_missing_user_is_rejected_before_prompting() {
        let storage = Storage::open_in_memory(Currency::Usd).unwrap();
        assert!(matches!(
            require_user(&storage, None),
            Err(TrackerError::InvalidInput(_))
        ));
        assert!(matches!(
            require_user(&storage, Some("   ")),
            Err(TrackerError::InvalidInput(_))
        ));
    }
}
