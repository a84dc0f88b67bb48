use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::account::models::AccountId;
use crate::domain::application::errors::ApplicationError;
use crate::domain::application::models::Application;
use crate::domain::application::models::ApplicationId;
use crate::domain::application::models::ApplicationStatus;
use crate::domain::application::models::ApplicationWithOpportunity;
use crate::domain::application::models::ApplyCommand;
use crate::domain::application::ports::ApplicationRepository;
use crate::domain::application::ports::ApplicationServicePort;
use crate::domain::opportunity::models::Opportunity;
use crate::domain::opportunity::models::OpportunityId;
use crate::domain::opportunity::ports::OpportunityRepository;

/// Domain service implementation for application operations.
pub struct ApplicationService<APR, OR>
where
    APR: ApplicationRepository,
    OR: OpportunityRepository,
{
    repository: Arc<APR>,
    opportunities: Arc<OR>,
}

impl<APR, OR> ApplicationService<APR, OR>
where
    APR: ApplicationRepository,
    OR: OpportunityRepository,
{
    /// Create a new application service.
    ///
    /// # Arguments
    /// * `repository` - Application persistence implementation
    /// * `opportunities` - Opportunity lookup for existence and ownership checks
    pub fn new(repository: Arc<APR>, opportunities: Arc<OR>) -> Self {
        Self {
            repository,
            opportunities,
        }
    }

    async fn find_opportunity(
        &self,
        id: &OpportunityId,
    ) -> Result<Option<Opportunity>, ApplicationError> {
        self.opportunities
            .find_by_id(id)
            .await
            .map_err(|e| ApplicationError::DatabaseError(e.to_string()))
    }
}

#[async_trait]
impl<APR, OR> ApplicationServicePort for ApplicationService<APR, OR>
where
    APR: ApplicationRepository,
    OR: OpportunityRepository,
{
    async fn apply(
        &self,
        seeker_id: &AccountId,
        command: ApplyCommand,
    ) -> Result<Application, ApplicationError> {
        if self
            .find_opportunity(&command.opportunity_id)
            .await?
            .is_none()
        {
            return Err(ApplicationError::OpportunityNotFound(
                command.opportunity_id,
            ));
        }

        if self
            .repository
            .find_by_seeker_and_opportunity(seeker_id, &command.opportunity_id)
            .await?
            .is_some()
        {
            return Err(ApplicationError::AlreadyApplied(command.opportunity_id));
        }

        let application = Application {
            id: ApplicationId::new(),
            seeker_id: *seeker_id,
            opportunity_id: command.opportunity_id,
            status: ApplicationStatus::Pending,
            cover_letter: command.cover_letter,
            submitted_at: Utc::now(),
        };

        let created = self.repository.create(application).await?;

        tracing::info!(
            application_id = %created.id,
            opportunity_id = %created.opportunity_id,
            seeker_id = %seeker_id,
            "Application submitted"
        );

        Ok(created)
    }

    async fn list_seeker_applications(
        &self,
        seeker_id: &AccountId,
    ) -> Result<Vec<ApplicationWithOpportunity>, ApplicationError> {
        self.repository
            .find_by_seeker_with_opportunity(seeker_id)
            .await
    }

    async fn list_opportunity_applications(
        &self,
        provider_id: &AccountId,
        opportunity_id: &OpportunityId,
    ) -> Result<Vec<Application>, ApplicationError> {
        // Someone else's opportunity is reported exactly like a missing one.
        match self.find_opportunity(opportunity_id).await? {
            Some(opportunity) if opportunity.is_owned_by(provider_id) => {
                self.repository.find_by_opportunity(opportunity_id).await
            }
            _ => Err(ApplicationError::OpportunityNotFound(*opportunity_id)),
        }
    }

    async fn review_application(
        &self,
        provider_id: &AccountId,
        id: &ApplicationId,
        status: ApplicationStatus,
    ) -> Result<Application, ApplicationError> {
        if !status.is_decision() {
            return Err(ApplicationError::InvalidDecision(status));
        }

        let application = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ApplicationError::NotFound(*id))?;

        let owned = self
            .find_opportunity(&application.opportunity_id)
            .await?
            .is_some_and(|opportunity| opportunity.is_owned_by(provider_id));

        if !owned {
            return Err(ApplicationError::NotOwner(*id));
        }

        let reviewed = self.repository.update_status(id, status).await?;

        tracing::info!(
            application_id = %id,
            status = %status,
            provider_id = %provider_id,
            "Application reviewed"
        );

        Ok(reviewed)
    }
}
