use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::account::models::AccountId;
use crate::domain::opportunity::errors::OpportunityDescriptionError;
use crate::domain::opportunity::errors::OpportunityIdError;
use crate::domain::opportunity::errors::OpportunityStatusError;
use crate::domain::opportunity::errors::OpportunityTitleError;

/// An offer published by a provider that seekers can apply to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Opportunity {
    pub id: OpportunityId,
    pub provider_id: AccountId,
    pub title: OpportunityTitle,
    pub description: OpportunityDescription,
    pub opportunity_type: Option<String>,
    pub tags: Vec<String>,
    pub status: OpportunityStatus,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Opportunity {
    pub fn is_owned_by(&self, account_id: &AccountId) -> bool {
        self.provider_id == *account_id
    }
}

/// Opportunity unique identifier value object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpportunityId(pub Uuid);

impl OpportunityId {
    /// Generate a new random opportunity ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse an opportunity ID from string.
    ///
    /// # Errors
    /// * `InvalidFormat` - String is not a valid UUID
    pub fn from_string(s: &str) -> Result<Self, OpportunityIdError> {
        Uuid::parse_str(s)
            .map(OpportunityId)
            .map_err(|e| OpportunityIdError::InvalidFormat(e.to_string()))
    }
}

impl Default for OpportunityId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for OpportunityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opportunity title value object.
///
/// Trimmed, non-empty, at most 200 characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpportunityTitle(String);

impl OpportunityTitle {
    const MAX_LENGTH: usize = 200;

    /// Create a new validated title.
    ///
    /// # Errors
    /// * `Empty` - Title is blank
    /// * `TooLong` - Title exceeds 200 characters
    pub fn new(title: String) -> Result<Self, OpportunityTitleError> {
        let trimmed = title.trim();

        if trimmed.is_empty() {
            return Err(OpportunityTitleError::Empty);
        }

        let length = trimmed.chars().count();
        if length > Self::MAX_LENGTH {
            return Err(OpportunityTitleError::TooLong {
                max: Self::MAX_LENGTH,
                actual: length,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OpportunityTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Opportunity description value object (non-empty free text).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpportunityDescription(String);

impl OpportunityDescription {
    /// # Errors
    /// * `Empty` - Description is blank
    pub fn new(description: String) -> Result<Self, OpportunityDescriptionError> {
        if description.trim().is_empty() {
            return Err(OpportunityDescriptionError::Empty);
        }
        Ok(Self(description))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Lifecycle state of an opportunity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpportunityStatus {
    #[default]
    Open,
    Closed,
    Completed,
}

impl OpportunityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpportunityStatus::Open => "open",
            OpportunityStatus::Closed => "closed",
            OpportunityStatus::Completed => "completed",
        }
    }
}

impl FromStr for OpportunityStatus {
    type Err = OpportunityStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(OpportunityStatus::Open),
            "closed" => Ok(OpportunityStatus::Closed),
            "completed" => Ok(OpportunityStatus::Completed),
            other => Err(OpportunityStatusError::Unknown(other.to_string())),
        }
    }
}

impl fmt::Display for OpportunityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Command to publish a new opportunity.
#[derive(Debug)]
pub struct CreateOpportunityCommand {
    pub title: OpportunityTitle,
    pub description: OpportunityDescription,
    pub opportunity_type: Option<String>,
    pub tags: Vec<String>,
    pub status: Option<OpportunityStatus>,
    pub location: Option<String>,
}

/// Partial opportunity update. Only provided fields are changed.
#[derive(Debug, Default)]
pub struct UpdateOpportunityCommand {
    pub title: Option<OpportunityTitle>,
    pub description: Option<OpportunityDescription>,
    pub opportunity_type: Option<String>,
    pub tags: Option<Vec<String>>,
    pub status: Option<OpportunityStatus>,
    pub location: Option<String>,
}

impl UpdateOpportunityCommand {
    /// Apply the provided fields onto `opportunity`.
    pub fn apply_to(self, opportunity: &mut Opportunity) {
        if let Some(title) = self.title {
            opportunity.title = title;
        }
        if let Some(description) = self.description {
            opportunity.description = description;
        }
        if let Some(opportunity_type) = self.opportunity_type {
            opportunity.opportunity_type = Some(opportunity_type);
        }
        if let Some(tags) = self.tags {
            opportunity.tags = tags;
        }
        if let Some(status) = self.status {
            opportunity.status = status;
        }
        if let Some(location) = self.location {
            opportunity.location = Some(location);
        }
    }
}
