use async_trait::async_trait;

use crate::domain::account::models::AccountId;
use crate::domain::application::errors::ApplicationError;
use crate::domain::application::models::Application;
use crate::domain::application::models::ApplicationId;
use crate::domain::application::models::ApplicationStatus;
use crate::domain::application::models::ApplicationWithOpportunity;
use crate::domain::application::models::ApplyCommand;
use crate::domain::opportunity::models::OpportunityId;

/// Port for application domain service operations.
#[async_trait]
pub trait ApplicationServicePort: Send + Sync + 'static {
    /// Submit a pending application for a seeker.
    ///
    /// # Errors
    /// * `OpportunityNotFound` - Opportunity does not exist
    /// * `AlreadyApplied` - Seeker already applied to this opportunity
    /// * `DatabaseError` - Database operation failed
    async fn apply(
        &self,
        seeker_id: &AccountId,
        command: ApplyCommand,
    ) -> Result<Application, ApplicationError>;

    /// List a seeker's applications, each with its opportunity.
    async fn list_seeker_applications(
        &self,
        seeker_id: &AccountId,
    ) -> Result<Vec<ApplicationWithOpportunity>, ApplicationError>;

    /// List the applications received by an opportunity owned by `provider_id`.
    ///
    /// # Errors
    /// * `OpportunityNotFound` - Opportunity does not exist or belongs to
    ///   another provider
    async fn list_opportunity_applications(
        &self,
        provider_id: &AccountId,
        opportunity_id: &OpportunityId,
    ) -> Result<Vec<Application>, ApplicationError>;

    /// Accept or reject an application on an opportunity owned by `provider_id`.
    ///
    /// # Errors
    /// * `InvalidDecision` - `status` is not accepted or rejected
    /// * `NotFound` - Application does not exist
    /// * `NotOwner` - Opportunity belongs to another provider
    async fn review_application(
        &self,
        provider_id: &AccountId,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Application, ApplicationError>;
}

/// Persistence operations for applications.
#[async_trait]
pub trait ApplicationRepository: Send + Sync + 'static {
    /// Persist a new application.
    ///
    /// # Errors
    /// * `AlreadyApplied` - Seeker already applied to the opportunity
    /// * `DatabaseError` - Database operation failed
    async fn create(&self, application: Application) -> Result<Application, ApplicationError>;

    /// # Returns
    /// Optional application (None if not found)
    async fn find_by_id(&self, id: &ApplicationId)
        -> Result<Option<Application>, ApplicationError>;

    /// # Returns
    /// Optional application (None if the seeker has not applied)
    async fn find_by_seeker_and_opportunity(
        &self,
        seeker_id: &AccountId,
        opportunity_id: &OpportunityId,
    ) -> Result<Option<Application>, ApplicationError>;

    async fn find_by_seeker_with_opportunity(
        &self,
        seeker_id: &AccountId,
    ) -> Result<Vec<ApplicationWithOpportunity>, ApplicationError>;

    async fn find_by_opportunity(
        &self,
        opportunity_id: &OpportunityId,
    ) -> Result<Vec<Application>, ApplicationError>;

    /// # Errors
    /// * `NotFound` - Application does not exist
    async fn update_status(
        &self,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Application, ApplicationError>;
}
