use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::account::models::AccountId;
use crate::domain::opportunity::errors::OpportunityError;
use crate::domain::opportunity::models::CreateOpportunityCommand;
use crate::domain::opportunity::models::Opportunity;
use crate::domain::opportunity::models::OpportunityId;
use crate::domain::opportunity::models::UpdateOpportunityCommand;
use crate::domain::opportunity::ports::OpportunityRepository;
use crate::domain::opportunity::ports::OpportunityServicePort;
use crate::domain::profile::ports::ProfileRepository;

/// Domain service implementation for opportunity operations.
///
/// Reads provider profiles to fill in a default location.
pub struct OpportunityService<OR, PR>
where
    OR: OpportunityRepository,
    PR: ProfileRepository,
{
    repository: Arc<OR>,
    profiles: Arc<PR>,
}

impl<OR, PR> OpportunityService<OR, PR>
where
    OR: OpportunityRepository,
    PR: ProfileRepository,
{
    /// Create a new opportunity service.
    ///
    /// # Arguments
    /// * `repository` - Opportunity persistence implementation
    /// * `profiles` - Profile lookup for default locations
    pub fn new(repository: Arc<OR>, profiles: Arc<PR>) -> Self {
        Self {
            repository,
            profiles,
        }
    }

    async fn profile_location(
        &self,
        provider_id: &AccountId,
    ) -> Result<Option<String>, OpportunityError> {
        let profile = self
            .profiles
            .find_by_account(provider_id)
            .await
            .map_err(|e| OpportunityError::DatabaseError(e.to_string()))?;

        Ok(profile.and_then(|p| p.location()))
    }

    /// Load an opportunity and check that `provider_id` owns it.
    async fn owned(
        &self,
        provider_id: &AccountId,
        id: &OpportunityId,
    ) -> Result<Opportunity, OpportunityError> {
        let opportunity = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(OpportunityError::NotFound(*id))?;

        if !opportunity.is_owned_by(provider_id) {
            return Err(OpportunityError::NotOwner {
                account_id: *provider_id,
                opportunity_id: *id,
            });
        }

        Ok(opportunity)
    }
}

#[async_trait]
impl<OR, PR> OpportunityServicePort for OpportunityService<OR, PR>
where
    OR: OpportunityRepository,
    PR: ProfileRepository,
{
    async fn create_opportunity(
        &self,
        provider_id: &AccountId,
        command: CreateOpportunityCommand,
    ) -> Result<Opportunity, OpportunityError> {
        // A blank location counts as not given.
        let location = match command.location.filter(|l| !l.trim().is_empty()) {
            Some(location) => Some(location),
            None => self.profile_location(provider_id).await?,
        };

        let now = Utc::now();
        let opportunity = Opportunity {
            id: OpportunityId::new(),
            provider_id: *provider_id,
            title: command.title,
            description: command.description,
            opportunity_type: command.opportunity_type,
            tags: command.tags,
            status: command.status.unwrap_or_default(),
            location,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create(opportunity).await?;

        tracing::info!(
            opportunity_id = %created.id,
            provider_id = %provider_id,
            "Opportunity created"
        );

        Ok(created)
    }

    async fn list_opportunities(&self) -> Result<Vec<Opportunity>, OpportunityError> {
        self.repository.find_all().await
    }

    async fn get_opportunity(&self, id: &OpportunityId) -> Result<Opportunity, OpportunityError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(OpportunityError::NotFound(*id))
    }

    async fn list_provider_opportunities(
        &self,
        provider_id: &AccountId,
    ) -> Result<Vec<Opportunity>, OpportunityError> {
        self.repository.find_by_provider(provider_id).await
    }

    async fn update_opportunity(
        &self,
        provider_id: &AccountId,
        id: &OpportunityId,
        command: UpdateOpportunityCommand,
    ) -> Result<Opportunity, OpportunityError> {
        let mut opportunity = self.owned(provider_id, id).await?;

        command.apply_to(&mut opportunity);
        opportunity.updated_at = Utc::now();

        self.repository.save(opportunity).await
    }

    async fn delete_opportunity(
        &self,
        provider_id: &AccountId,
        id: &OpportunityId,
    ) -> Result<(), OpportunityError> {
        self.owned(provider_id, id).await?;
        self.repository.delete(id).await?;

        tracing::info!(opportunity_id = %id, provider_id = %provider_id, "Opportunity deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;
    use mockall::predicate::eq;

    use super::*;
    use crate::domain::opportunity::models::OpportunityDescription;
    use crate::domain::opportunity::models::OpportunityStatus;
    use crate::domain::opportunity::models::OpportunityTitle;
    use crate::domain::profile::errors::ProfileError;
    use crate::domain::profile::models::Profile;

    mock! {
        pub TestOpportunityRepository {}

        #[async_trait]
        impl OpportunityRepository for TestOpportunityRepository {
            async fn create(&self, opportunity: Opportunity) -> Result<Opportunity, OpportunityError>;
            async fn find_all(&self) -> Result<Vec<Opportunity>, OpportunityError>;
            async fn find_by_id(&self, id: &OpportunityId) -> Result<Option<Opportunity>, OpportunityError>;
            async fn find_by_provider(&self, provider_id: &AccountId) -> Result<Vec<Opportunity>, OpportunityError>;
            async fn save(&self, opportunity: Opportunity) -> Result<Opportunity, OpportunityError>;
            async fn delete(&self, id: &OpportunityId) -> Result<(), OpportunityError>;
        }
    }

    mock! {
        pub TestProfileRepository {}

        #[async_trait]
        impl ProfileRepository for TestProfileRepository {
            async fn find_by_account(&self, account_id: &AccountId) -> Result<Option<Profile>, ProfileError>;
            async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError>;
        }
    }

    fn create_command(location: Option<&str>) -> CreateOpportunityCommand {
        CreateOpportunityCommand {
            title: OpportunityTitle::new("Rust engineer".to_string()).unwrap(),
            description: OpportunityDescription::new("Build services".to_string()).unwrap(),
            opportunity_type: Some("job".to_string()),
            tags: vec!["rust".to_string(), "sql".to_string()],
            status: None,
            location: location.map(str::to_string),
        }
    }

    fn stored_opportunity(provider_id: AccountId) -> Opportunity {
        let now = Utc::now();
        Opportunity {
            id: OpportunityId::new(),
            provider_id,
            title: OpportunityTitle::new("Rust engineer".to_string()).unwrap(),
            description: OpportunityDescription::new("Build services".to_string()).unwrap(),
            opportunity_type: None,
            tags: Vec::new(),
            status: OpportunityStatus::Open,
            location: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn service(
        repository: MockTestOpportunityRepository,
        profiles: MockTestProfileRepository,
    ) -> OpportunityService<MockTestOpportunityRepository, MockTestProfileRepository> {
        OpportunityService::new(Arc::new(repository), Arc::new(profiles))
    }

    #[tokio::test]
    async fn test_create_defaults_location_from_profile() {
        let provider_id = AccountId::new();
        let mut profiles = MockTestProfileRepository::new();
        profiles
            .expect_find_by_account()
            .with(eq(provider_id))
            .returning(move |_| {
                let mut profile = Profile::empty(provider_id);
                profile.city = Some("Lagos".to_string());
                profile.country = Some("Nigeria".to_string());
                Ok(Some(profile))
            });

        let mut repository = MockTestOpportunityRepository::new();
        repository
            .expect_create()
            .times(1)
            .returning(|opportunity| Ok(opportunity));

        let created = service(repository, profiles)
            .create_opportunity(&provider_id, create_command(None))
            .await
            .unwrap();

        assert_eq!(created.location.as_deref(), Some("Lagos, Nigeria"));
        assert_eq!(created.status, OpportunityStatus::Open);
        assert_eq!(created.provider_id, provider_id);
    }

    #[tokio::test]
    async fn test_create_blank_location_falls_back_to_profile() {
        let provider_id = AccountId::new();
        let mut profiles = MockTestProfileRepository::new();
        profiles
            .expect_find_by_account()
            .times(2)
            .returning(move |_| {
                let mut profile = Profile::empty(provider_id);
                profile.city = Some("Rome".to_string());
                profile.country = Some("Italy".to_string());
                Ok(Some(profile))
            });

        let mut repository = MockTestOpportunityRepository::new();
        repository.expect_create().returning(|opportunity| Ok(opportunity));

        let service = service(repository, profiles);
        for blank in ["", "   "] {
            let created = service
                .create_opportunity(&provider_id, create_command(Some(blank)))
                .await
                .unwrap();

            assert_eq!(created.location.as_deref(), Some("Rome, Italy"));
        }
    }

    #[tokio::test]
    async fn test_create_keeps_explicit_location() {
        let provider_id = AccountId::new();
        let mut profiles = MockTestProfileRepository::new();
        profiles.expect_find_by_account().never();

        let mut repository = MockTestOpportunityRepository::new();
        repository.expect_create().returning(|opportunity| Ok(opportunity));

        let created = service(repository, profiles)
            .create_opportunity(&provider_id, create_command(Some("Remote")))
            .await
            .unwrap();

        assert_eq!(created.location.as_deref(), Some("Remote"));
    }

    #[tokio::test]
    async fn test_create_without_profile_location() {
        let provider_id = AccountId::new();
        let mut profiles = MockTestProfileRepository::new();
        profiles
            .expect_find_by_account()
            .returning(move |_| Ok(Some(Profile::empty(provider_id))));

        let mut repository = MockTestOpportunityRepository::new();
        repository.expect_create().returning(|opportunity| Ok(opportunity));

        let created = service(repository, profiles)
            .create_opportunity(&provider_id, create_command(None))
            .await
            .unwrap();

        assert_eq!(created.location, None);
    }

    #[tokio::test]
    async fn test_get_opportunity_not_found() {
        let mut repository = MockTestOpportunityRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));

        let id = OpportunityId::new();
        let result = service(repository, MockTestProfileRepository::new())
            .get_opportunity(&id)
            .await;

        assert!(matches!(result, Err(OpportunityError::NotFound(missing)) if missing == id));
    }

    #[tokio::test]
    async fn test_update_by_owner() {
        let provider_id = AccountId::new();
        let stored = stored_opportunity(provider_id);
        let id = stored.id;

        let mut repository = MockTestOpportunityRepository::new();
        repository
            .expect_find_by_id()
            .with(eq(id))
            .returning(move |_| Ok(Some(stored.clone())));
        repository
            .expect_save()
            .times(1)
            .returning(|opportunity| Ok(opportunity));

        let updated = service(repository, MockTestProfileRepository::new())
            .update_opportunity(
                &provider_id,
                &id,
                UpdateOpportunityCommand {
                    status: Some(OpportunityStatus::Closed),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, OpportunityStatus::Closed);
        assert_eq!(updated.title.as_str(), "Rust engineer");
    }

    #[tokio::test]
    async fn test_update_by_other_provider_is_rejected() {
        let stored = stored_opportunity(AccountId::new());
        let id = stored.id;

        let mut repository = MockTestOpportunityRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repository.expect_save().never();

        let result = service(repository, MockTestProfileRepository::new())
            .update_opportunity(&AccountId::new(), &id, UpdateOpportunityCommand::default())
            .await;

        assert!(matches!(result, Err(OpportunityError::NotOwner { .. })));
    }

    #[tokio::test]
    async fn test_delete_by_owner() {
        let provider_id = AccountId::new();
        let stored = stored_opportunity(provider_id);
        let id = stored.id;

        let mut repository = MockTestOpportunityRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repository
            .expect_delete()
            .with(eq(id))
            .times(1)
            .returning(|_| Ok(()));

        let result = service(repository, MockTestProfileRepository::new())
            .delete_opportunity(&provider_id, &id)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_opportunity() {
        let mut repository = MockTestOpportunityRepository::new();
        repository.expect_find_by_id().returning(|_| Ok(None));
        repository.expect_delete().never();

        let result = service(repository, MockTestProfileRepository::new())
            .delete_opportunity(&AccountId::new(), &OpportunityId::new())
            .await;

        assert!(matches!(result, Err(OpportunityError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_by_other_provider_is_rejected() {
        let stored = stored_opportunity(AccountId::new());
        let id = stored.id;

        let mut repository = MockTestOpportunityRepository::new();
        repository
            .expect_find_by_id()
            .returning(move |_| Ok(Some(stored.clone())));
        repository.expect_delete().never();

        let result = service(repository, MockTestProfileRepository::new())
            .delete_opportunity(&AccountId::new(), &id)
            .await;

        assert!(matches!(result, Err(OpportunityError::NotOwner { .. })));
    }
}
