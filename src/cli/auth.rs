//! Registration and login commands

use crate::display::format_welcome;
use crate::error::TrackerResult;
use crate::services::AuthService;
use crate::storage::Storage;

use super::session::{read_new_password, read_password};

/// Register a new user
pub fn handle_register(storage: &Storage, username: &str) -> TrackerResult<()> {
    let password = read_new_password()?;
    let id = AuthService::new(storage).register(username, &password)?;

    println!("Registered user '{}' ({}).", username.trim(), id);
    println!("You can now log in with 'moneytrack login {}'.", username.trim());
    Ok(())
}

/// Check a user's credentials
pub fn handle_login(storage: &Storage, username: &str) -> TrackerResult<()> {
    let password = read_password(&format!("Password for {}: ", username.trim()))?;
    let identity = AuthService::new(storage).login(username, &password)?;

    println!("{}", format_welcome(&identity));
    Ok(())
}
