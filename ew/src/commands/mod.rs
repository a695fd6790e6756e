pub mod create_wallet;
pub mod history;
pub mod login;
pub mod logout;
pub mod register;
pub mod send;

use crate::error::EwError;

/// Minimum accepted password length.
const MIN_PASSWORD_LEN: usize = 6;

/// Reject empty required fields before anything goes on the wire.
fn require_non_empty(field: &str, value: &str) -> Result<(), EwError> {
    if value.trim().is_empty() {
        return Err(EwError::Validation(format!("{field} is required")));
    }
    Ok(())
}

fn validate_password(password: &str) -> Result<(), EwError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(EwError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}
