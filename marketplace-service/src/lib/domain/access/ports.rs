use async_trait::async_trait;

use crate::domain::access::errors::AccessError;
use crate::domain::access::models::LoginCommand;
use crate::domain::account::models::Account;
use crate::domain::account::models::Role;

/// Port for the access guard: authentication, role gating and login.
#[async_trait]
pub trait AccessGuardPort: Send + Sync + 'static {
    /// Resolve the account behind a bearer token.
    ///
    /// # Errors
    /// * `InvalidToken` - Token is malformed, expired or lacks claims
    /// * `UnknownAccount` - Token subject no longer exists
    /// * `Store` - Account lookup failed
    async fn authenticate(&self, token: &str) -> Result<Account, AccessError>;

    /// Pass the account through only if it holds exactly `required`.
    ///
    /// # Errors
    /// * `RoleMismatch` - Account role differs from `required`
    fn require_role(&self, account: Account, required: Role) -> Result<Account, AccessError>;

    /// Check credentials and the asserted role, then issue an access token.
    ///
    /// # Errors
    /// * `InvalidCredentials` - Unknown email or wrong password
    /// * `LoginRoleMismatch` - Password is right but the account has another role
    /// * `TokenIssuance` - Token could not be signed
    /// * `Store` - Account lookup failed
    async fn login(&self, command: LoginCommand) -> Result<auth::IssuedToken, AccessError>;
}
