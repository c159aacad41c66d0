use crate::error::AppError;
use bcrypt::{hash, verify};
use lazy_static::lazy_static;

/// bcrypt work factor used for every stored credential.
pub const HASH_COST: u32 = 10;

lazy_static! {
    /// Hash at the same cost as real credentials, checked when no user matches.
    static ref ABSENT_USER_HASH: Option<String> = hash("absent-user", HASH_COST).ok();
}

pub fn hash_password(password: &str) -> Result<String, AppError> {
    hash(password, HASH_COST)
        .map_err(|e| AppError::InternalServerError(format!("Failed to hash password: {}", e)))
}

pub fn verify_password(password: &str, hashed_password: &str) -> Result<bool, AppError> {
    verify(password, hashed_password)
        .map_err(|e| AppError::InternalServerError(format!("Failed to verify password: {}", e)))
}

/// Spends one bcrypt verification on a password that has no stored hash.
///
/// Login calls this for unknown usernames so they take as long to reject as a
/// wrong password. Always reports a mismatch.
pub fn verify_absent_user(password: &str) -> bool {
    if let Some(absent) = ABSENT_USER_HASH.as_deref() {
        let _ = verify(password, absent);
    }
    false
}
