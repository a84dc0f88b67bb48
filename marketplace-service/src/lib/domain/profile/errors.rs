use thiserror::Error;

use crate::domain::account::models::AccountId;

/// Top-level error for profile operations
#[derive(Debug, Clone, Error)]
pub enum ProfileError {
    #[error("Profile not found for account {0}")]
    NotFound(AccountId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
