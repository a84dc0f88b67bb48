use async_trait::async_trait;

use crate::domain::account::models::AccountId;
use crate::domain::opportunity::errors::OpportunityError;
use crate::domain::opportunity::models::CreateOpportunityCommand;
use crate::domain::opportunity::models::Opportunity;
use crate::domain::opportunity::models::OpportunityId;
use crate::domain::opportunity::models::UpdateOpportunityCommand;

/// Port for opportunity domain service operations.
#[async_trait]
pub trait OpportunityServicePort: Send + Sync + 'static {
    /// Publish a new opportunity on behalf of a provider.
    ///
    /// When the command carries no location the provider's profile location
    /// is used, if the profile has both city and country.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn create_opportunity(
        &self,
        provider_id: &AccountId,
        command: CreateOpportunityCommand,
    ) -> Result<Opportunity, OpportunityError>;

    /// List every opportunity, newest first.
    async fn list_opportunities(&self) -> Result<Vec<Opportunity>, OpportunityError>;

    /// # Errors
    /// * `NotFound` - Opportunity does not exist
    async fn get_opportunity(&self, id: &OpportunityId) -> Result<Opportunity, OpportunityError>;

    /// List the opportunities published by one provider, newest first.
    async fn list_provider_opportunities(
        &self,
        provider_id: &AccountId,
    ) -> Result<Vec<Opportunity>, OpportunityError>;

    /// Apply a partial update to an opportunity owned by `provider_id`.
    ///
    /// # Errors
    /// * `NotFound` - Opportunity does not exist
    /// * `NotOwner` - Opportunity belongs to another provider
    /// * `DatabaseError` - Database operation failed
    async fn update_opportunity(
        &self,
        provider_id: &AccountId,
        id: &OpportunityId,
        command: UpdateOpportunityCommand,
    ) -> Result<Opportunity, OpportunityError>;

    /// Delete an opportunity owned by `provider_id`.
    ///
    /// # Errors
    /// * `NotFound` - Opportunity does not exist
    /// * `NotOwner` - Opportunity belongs to another provider
    /// * `DatabaseError` - Database operation failed
    async fn delete_opportunity(
        &self,
        provider_id: &AccountId,
        id: &OpportunityId,
    ) -> Result<(), OpportunityError>;
}

/// Persistence operations for opportunities.
#[async_trait]
pub trait OpportunityRepository: Send + Sync + 'static {
    async fn create(&self, opportunity: Opportunity) -> Result<Opportunity, OpportunityError>;

    async fn find_all(&self) -> Result<Vec<Opportunity>, OpportunityError>;

    /// # Returns
    /// Optional opportunity (None if not found)
    async fn find_by_id(&self, id: &OpportunityId)
        -> Result<Option<Opportunity>, OpportunityError>;

    async fn find_by_provider(
        &self,
        provider_id: &AccountId,
    ) -> Result<Vec<Opportunity>, OpportunityError>;

    /// Write back the mutable fields of an existing opportunity.
    ///
    /// # Errors
    /// * `NotFound` - Opportunity does not exist
    async fn save(&self, opportunity: Opportunity) -> Result<Opportunity, OpportunityError>;

    /// # Errors
    /// * `NotFound` - Opportunity does not exist
    async fn delete(&self, id: &OpportunityId) -> Result<(), OpportunityError>;
}
