use thiserror::Error;

use crate::domain::account::models::AccountId;
use crate::domain::opportunity::models::OpportunityId;

/// Error for OpportunityId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OpportunityIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for OpportunityTitle validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OpportunityTitleError {
    #[error("Title is empty")]
    Empty,

    #[error("Title too long: maximum {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },
}

/// Error for OpportunityDescription validation failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OpportunityDescriptionError {
    #[error("Description is empty")]
    Empty,
}

/// Error for OpportunityStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OpportunityStatusError {
    #[error("Unknown status '{0}' (expected 'open', 'closed' or 'completed')")]
    Unknown(String),
}

/// Top-level error for all opportunity-related operations
#[derive(Debug, Clone, Error)]
pub enum OpportunityError {
    #[error("Invalid opportunity ID: {0}")]
    InvalidOpportunityId(#[from] OpportunityIdError),

    #[error("Invalid title: {0}")]
    InvalidTitle(#[from] OpportunityTitleError),

    #[error("Invalid description: {0}")]
    InvalidDescription(#[from] OpportunityDescriptionError),

    #[error("Invalid status: {0}")]
    InvalidStatus(#[from] OpportunityStatusError),

    #[error("Opportunity not found: {0}")]
    NotFound(OpportunityId),

    #[error("Account {account_id} does not own opportunity {opportunity_id}")]
    NotOwner {
        account_id: AccountId,
        opportunity_id: OpportunityId,
    },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
