use thiserror::Error;

/// Error type for password operations.
///
/// Verification never errors; only producing a new hash can fail.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),
}
