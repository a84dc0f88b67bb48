use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::models::AccountId;
use crate::domain::application::errors::ApplicationIdError;
use crate::domain::application::errors::ApplicationStatusError;
use crate::domain::opportunity::models::Opportunity;
use crate::domain::opportunity::models::OpportunityId;

/// A seeker's application to an opportunity.
///
/// At most one application exists per (seeker, opportunity) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub id: ApplicationId,
    pub seeker_id: AccountId,
    pub opportunity_id: OpportunityId,
    pub status: ApplicationStatus,
    pub cover_letter: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// An application together with the opportunity it targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApplicationWithOpportunity {
    pub application: Application,
    pub opportunity: Opportunity,
}

/// Application unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ApplicationId(pub Uuid);

impl ApplicationId {
    /// Generate a new random application ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an application ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, ApplicationIdError> {
        Uuid::parse_str(s)
            .map(ApplicationId)
            .map_err(|e| ApplicationIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for ApplicationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Review state of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApplicationStatus {
    #[default]
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Accepted => "accepted",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Whether a provider may set this status when reviewing.
    pub fn is_decision(&self) -> bool {
        matches!(
            self,
            ApplicationStatus::Accepted | ApplicationStatus::Rejected
        )
    }
}

impl FromStr for ApplicationStatus {
    type Err = ApplicationStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ApplicationStatus::Pending),
            "accepted" => Ok(ApplicationStatus::Accepted),
            "rejected" => Ok(ApplicationStatus::Rejected),
            other => Err(ApplicationStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to apply to an opportunity.
#[derive(Debug)]
pub struct ApplyCommand {
    pub opportunity_id: OpportunityId,
    pub cover_letter: Option<String>,
}
