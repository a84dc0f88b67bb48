use thiserror::Error;

use crate::domain::application::models::ApplicationId;
use crate::domain::application::models::ApplicationStatus;
use crate::domain::opportunity::models::OpportunityId;

/// Error for ApplicationId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationIdError {
    #[error("Invalid UUID format: {0}")]
    InvalidFormat(String),
}

/// Error for ApplicationStatus parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApplicationStatusError {
    #[error("Unknown status '{0}' (expected 'pending', 'accepted' or 'rejected')")]
    Unknown(String),
}

/// Top-level error for all application-related operations
#[derive(Debug, Clone, Error)]
pub enum ApplicationError {
    #[error("Invalid application ID: {0}")]
    InvalidApplicationId(#[from] ApplicationIdError),

    #[error("Invalid status: {0}")]
    InvalidStatus(#[from] ApplicationStatusError),

    #[error("Application not found: {0}")]
    NotFound(ApplicationId),

    #[error("Opportunity not found: {0}")]
    OpportunityNotFound(OpportunityId),

    #[error("Already applied to opportunity {0}")]
    AlreadyApplied(OpportunityId),

    #[error("Not authorized to review application {0}")]
    NotOwner(ApplicationId),

    #[error("An application cannot be reviewed as '{0}'")]
    InvalidDecision(ApplicationStatus),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
