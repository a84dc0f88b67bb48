use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::account::models::AccountId;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::UpdateProfileCommand;
use crate::domain::profile::ports::ProfileRepository;
use crate::domain::profile::ports::ProfileServicePort;

/// Domain service implementation for profile operations.
pub struct ProfileService<PR>
where
    PR: ProfileRepository,
{
    repository: Arc<PR>,
}

impl<PR> ProfileService<PR>
where
    PR: ProfileRepository,
{
    pub fn new(repository: Arc<PR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<PR> ProfileServicePort for ProfileService<PR>
where
    PR: ProfileRepository,
{
    async fn get_profile(&self, account_id: &AccountId) -> Result<Profile, ProfileError> {
        self.repository
            .find_by_account(account_id)
            .await?
            .ok_or(ProfileError::NotFound(*account_id))
    }

    async fn upsert_profile(
        &self,
        account_id: &AccountId,
        command: UpdateProfileCommand,
    ) -> Result<Profile, ProfileError> {
        let mut profile = match self.repository.find_by_account(account_id).await? {
            Some(profile) => profile,
            None => {
                tracing::info!(account_id = %account_id, "Creating missing profile");
                Profile::empty(*account_id)
            }
        };

        command.apply_to(&mut profile);

        self.repository.upsert(profile).await
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;

    mock! {
        pub TestProfileRepository {}

        #[async_trait]
        impl ProfileRepository for TestProfileRepository {
            async fn find_by_account(&self, account_id: &AccountId) -> Result<Option<Profile>, ProfileError>;
            async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError>;
        }
    }

    #[tokio::test]
    async fn test_get_profile_success() {
        let mut repository = MockTestProfileRepository::new();
        let account_id = AccountId::new();
        let mut stored = Profile::empty(account_id);
        stored.bio = Some("Data engineer".to_string());

        let returned = stored.clone();
        repository
            .expect_find_by_account()
            .withf(move |id| *id == account_id)
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let service = ProfileService::new(Arc::new(repository));

        let profile = service.get_profile(&account_id).await.unwrap();
        assert_eq!(profile, stored);
    }

    #[tokio::test]
    async fn test_get_profile_not_found() {
        let mut repository = MockTestProfileRepository::new();
        repository
            .expect_find_by_account()
            .times(1)
            .returning(|_| Ok(None));

        let service = ProfileService::new(Arc::new(repository));

        let result = service.get_profile(&AccountId::new()).await;
        assert!(matches!(result, Err(ProfileError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_upsert_updates_existing_profile() {
        let mut repository = MockTestProfileRepository::new();
        let account_id = AccountId::new();
        let mut stored = Profile::empty(account_id);
        stored.bio = Some("old".to_string());
        stored.country = Some("Kenya".to_string());
        let stored_id = stored.id;

        let returned = stored.clone();
        repository
            .expect_find_by_account()
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));
        repository
            .expect_upsert()
            .withf(move |profile| {
                profile.id == stored_id
                    && profile.bio.as_deref() == Some("new")
                    && profile.country.as_deref() == Some("Kenya")
            })
            .times(1)
            .returning(|profile| Ok(profile));

        let service = ProfileService::new(Arc::new(repository));

        let command = UpdateProfileCommand {
            bio: Some("new".to_string()),
            ..Default::default()
        };
        let profile = service.upsert_profile(&account_id, command).await.unwrap();
        assert_eq!(profile.bio.as_deref(), Some("new"));
    }

    #[tokio::test]
    async fn test_upsert_creates_missing_profile() {
        let mut repository = MockTestProfileRepository::new();
        let account_id = AccountId::new();

        repository
            .expect_find_by_account()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_upsert()
            .withf(move |profile| {
                profile.account_id == account_id && profile.skills == vec!["go".to_string()]
            })
            .times(1)
            .returning(|profile| Ok(profile));

        let service = ProfileService::new(Arc::new(repository));

        let command = UpdateProfileCommand {
            skills: Some(vec!["go".to_string()]),
            ..Default::default()
        };
        let profile = service.upsert_profile(&account_id, command).await.unwrap();
        assert_eq!(profile.account_id, account_id);
    }
}
