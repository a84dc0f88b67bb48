use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::account::errors::AccountError;
use crate::domain::account::models::Account;
use crate::domain::account::models::AccountId;
use crate::domain::account::models::RegisterAccountCommand;
use crate::domain::account::models::Role;
use crate::domain::account::models::UpdateAccountCommand;
use crate::domain::account::ports::AccountRepository;
use crate::domain::account::ports::AccountServicePort;
use crate::domain::profile::models::Profile;

/// Domain service implementation for account operations.
///
/// Concrete implementation of AccountServicePort with dependency injection.
pub struct AccountService<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    password_hasher: auth::PasswordHasher,
}

impl<AR> AccountService<AR>
where
    AR: AccountRepository,
{
    /// Create a new account service.
    ///
    /// # Arguments
    /// * `repository` - Account persistence implementation
    pub fn new(repository: Arc<AR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }

    fn initial_profile(account: &Account, command: &RegisterAccountCommand) -> Profile {
        let mut profile = Profile::empty(account.id);
        profile.country = command.country.clone();
        profile.city = command.city.clone();

        match account.role {
            Role::Seeker => {
                profile.skills = command.skills.clone();
            }
            Role::Provider => {
                profile.company_name = command.organization_name.clone();
                profile.company_website = command.website.clone();
            }
        }

        profile
    }
}

#[async_trait]
impl<AR> AccountServicePort for AccountService<AR>
where
    AR: AccountRepository,
{
    async fn register(&self, command: RegisterAccountCommand) -> Result<Account, AccountError> {
        if self
            .repository
            .find_by_email(&command.email)
            .await?
            .is_some()
        {
            return Err(AccountError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self.password_hasher.hash(&command.password)?;

        let now = Utc::now();
        let account = Account {
            id: AccountId::new(),
            email: command.email.clone(),
            password_hash,
            full_name: command.full_name.clone(),
            role: command.role,
            created_at: now,
            updated_at: now,
        };
        let profile = Self::initial_profile(&account, &command);

        let created = self.repository.create(account, profile).await?;

        tracing::info!(
            account_id = %created.id,
            role = %created.role,
            "Account registered"
        );

        Ok(created)
    }

    async fn get_account(&self, id: &AccountId) -> Result<Account, AccountError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))
    }

    async fn update_account(
        &self,
        id: &AccountId,
        command: UpdateAccountCommand,
    ) -> Result<Account, AccountError> {
        let mut account = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(AccountError::NotFound(id.to_string()))?;

        if let Some(full_name) = command.full_name {
            account.full_name = Some(full_name);
        }

        if let Some(password) = command.password {
            account.password_hash = self.password_hasher.hash(&password)?;
        }

        account.updated_at = Utc::now();

        self.repository.save(account).await
    }

    async fn delete_account(&self, id: &AccountId) -> Result<(), AccountError> {
        self.repository.delete(id).await?;

        tracing::info!(account_id = %id, "Account deleted");

        Ok(())
    }
}
