use async_trait::async_trait;

use crate::domain::account::models::AccountId;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;
use crate::domain::profile::models::UpdateProfileCommand;

/// Port for profile domain service operations.
#[async_trait]
pub trait ProfileServicePort: Send + Sync + 'static {
    /// Retrieve the profile of an account.
    ///
    /// # Errors
    /// * `NotFound` - Account has no profile
    /// * `DatabaseError` - Database operation failed
    async fn get_profile(&self, account_id: &AccountId) -> Result<Profile, ProfileError>;

    /// Apply a partial update to the profile of an account, creating the
    /// profile first when the account has none.
    ///
    /// # Errors
    /// * `DatabaseError` - Database operation failed
    async fn upsert_profile(
        &self,
        account_id: &AccountId,
        command: UpdateProfileCommand,
    ) -> Result<Profile, ProfileError>;
}

/// Persistence operations for profiles.
#[async_trait]
pub trait ProfileRepository: Send + Sync + 'static {
    /// Retrieve the profile owned by an account.
    ///
    /// # Returns
    /// Optional profile (None if the account has none)
    async fn find_by_account(&self, account_id: &AccountId)
        -> Result<Option<Profile>, ProfileError>;

    /// Insert the profile, or overwrite the existing profile of the same account.
    async fn upsert(&self, profile: Profile) -> Result<Profile, ProfileError>;
}
