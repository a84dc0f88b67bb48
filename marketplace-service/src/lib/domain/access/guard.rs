use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::access::errors::AccessError;
use crate::domain::access::models::LoginCommand;
use crate::domain::access::ports::AccessGuardPort;
use crate::domain::account::models::Account;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::Role;
use crate::domain::account::ports::AccountRepository;

/// Access guard backed by the account store.
///
/// The signing secret lives inside the injected [`auth::Authenticator`];
/// nothing here reads global state.
pub struct AccessGuard<AR>
where
    AR: AccountRepository,
{
    repository: Arc<AR>,
    authenticator: Arc<auth::Authenticator>,
    /// Verified against when the email is unknown, so both login failures
    /// cost one Argon2 verification.
    dummy_hash: Option<String>,
}

impl<AR> AccessGuard<AR>
where
    AR: AccountRepository,
{
    /// Create a new access guard.
    ///
    /// # Arguments
    /// * `repository` - Account lookup used to resolve token subjects
    /// * `authenticator` - Password verification and token signing
    pub fn new(repository: Arc<AR>, authenticator: Arc<auth::Authenticator>) -> Self {
        let dummy_hash = authenticator.hash_password("unknown-account").ok();

        Self {
            repository,
            authenticator,
            dummy_hash,
        }
    }
}

#[async_trait]
impl<AR> AccessGuardPort for AccessGuard<AR>
where
    AR: AccountRepository,
{
    async fn authenticate(&self, token: &str) -> Result<Account, AccessError> {
        let identity = self.authenticator.validate_token(token).map_err(|e| {
            tracing::warn!(reason = %e, "Rejected access token");
            AccessError::from(e)
        })?;

        // A subject that is not a valid email can never match an account.
        let email = EmailAddress::new(identity.subject).map_err(|_| {
            tracing::warn!("Rejected access token with unusable subject");
            AccessError::UnknownAccount
        })?;

        let account = self
            .repository
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                tracing::warn!("Rejected access token for unknown account");
                AccessError::UnknownAccount
            })?;

        tracing::debug!(
            account_id = %account.id,
            role = %account.role,
            "Authenticated request"
        );

        Ok(account)
    }

    fn require_role(&self, account: Account, required: Role) -> Result<Account, AccessError> {
        if account.role != required {
            tracing::warn!(
                account_id = %account.id,
                role = %account.role,
                required = %required,
                "Role check failed"
            );
            return Err(AccessError::RoleMismatch { required });
        }

        Ok(account)
    }

    async fn login(&self, command: LoginCommand) -> Result<auth::IssuedToken, AccessError> {
        let Some(account) = self.repository.find_by_email(&command.email).await? else {
            if let Some(dummy_hash) = &self.dummy_hash {
                self.authenticator.verify_password(&command.password, dummy_hash);
            }
            tracing::warn!("Login failed: unknown email");
            return Err(AccessError::InvalidCredentials);
        };

        if !self
            .authenticator
            .verify_password(&command.password, &account.password_hash)
        {
            tracing::warn!(account_id = %account.id, "Login failed: wrong password");
            return Err(AccessError::InvalidCredentials);
        }

        // Checked only after the password so a wrong guess never reveals the role.
        if account.role != command.asserted_role {
            tracing::warn!(
                account_id = %account.id,
                asserted = %command.asserted_role,
                "Login failed: role mismatch"
            );
            return Err(AccessError::LoginRoleMismatch {
                asserted: command.asserted_role,
            });
        }

        let issued = self
            .authenticator
            .issue_token(account.email.as_str(), account.role.as_str())
            .map_err(|e| AccessError::TokenIssuance(e.to_string()))?;

        tracing::info!(
            account_id = %account.id,
            role = %account.role,
            expires_at = %issued.expires_at,
            "Login succeeded"
        );

        Ok(issued)
    }
}
