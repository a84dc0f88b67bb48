use thiserror::Error;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Role;

/// Failures of the access guard.
///
/// Every token problem and an unknown subject share the same message so a
/// caller cannot tell which check rejected the request.
#[derive(Debug, Clone, Error)]
pub enum AccessError {
    #[error("Could not validate credentials")]
    InvalidToken(#[from] auth::TokenError),

    #[error("Could not validate credentials")]
    UnknownAccount,

    #[error("Incorrect email or password")]
    InvalidCredentials,

    #[error("Not authorized: requires {required} role")]
    RoleMismatch { required: Role },

    #[error("You are not authorized to log in as a {asserted}")]
    LoginRoleMismatch { asserted: Role },

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),

    #[error("Account store error: {0}")]
    Store(#[from] AccountError),
}

