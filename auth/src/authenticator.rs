use std::sync::Arc;

use chrono::DateTime;
use chrono::Duration;
use chrono::TimeZone;
use chrono::Utc;

use crate::clock::Clock;
use crate::clock::SystemClock;
use crate::jwt::Claims;
use crate::jwt::JwtHandler;
use crate::jwt::TokenError;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Lifetime applied by [`Authenticator::issue_token`] unless overridden.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 15;

/// Authentication coordinator combining password verification and token handling.
///
/// Holds the signing secret for its whole lifetime; build one at startup and
/// share it behind an `Arc`.
#[derive(Clone)]
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: Arc<JwtHandler>,
    clock: Arc<dyn Clock>,
    token_ttl: Duration,
}

/// A freshly signed access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedToken {
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Identity carried by a token that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub subject: String,
    pub role: String,
}

impl Authenticator {
    /// Create a new authenticator using the system clock and the default
    /// token lifetime.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for token signing
    pub fn new(jwt_secret: &[u8]) -> Self {
        Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: Arc::new(JwtHandler::new(jwt_secret)),
            clock: Arc::new(SystemClock),
            token_ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
        }
    }

    /// Override the default token lifetime.
    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Replace the clock used for issuance and expiry checks.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Hash a password for storage.
    ///
    /// # Errors
    /// * `PasswordError` - Hashing operation failed
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// Returns false for a malformed stored hash.
    pub fn verify_password(&self, password: &str, stored_hash: &str) -> bool {
        self.password_hasher.verify(password, stored_hash)
    }

    /// Issue a token for `subject` with the configured lifetime.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed
    pub fn issue_token(&self, subject: &str, role: &str) -> Result<IssuedToken, TokenError> {
        self.issue_token_with_ttl(subject, role, self.token_ttl)
    }

    /// Issue a token for `subject` expiring `ttl` from now.
    ///
    /// A zero (or negative) `ttl` produces a token that is already expired.
    ///
    /// # Errors
    /// * `EncodingFailed` - Token generation failed or `ttl` overflows the clock range
    pub fn issue_token_with_ttl(
        &self,
        subject: &str,
        role: &str,
        ttl: Duration,
    ) -> Result<IssuedToken, TokenError> {
        let claims = Claims::for_subject(subject, role, self.clock.now(), ttl)?;
        let access_token = self.jwt_handler.encode(&claims)?;

        // exp is stored with second precision, report exactly what was signed
        let expires_at = claims
            .exp
            .and_then(|exp| Utc.timestamp_opt(exp, 0).single())
            .ok_or_else(|| TokenError::EncodingFailed("expiry out of range".to_string()))?;

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }

    /// Validate a token and extract its identity.
    ///
    /// # Errors
    /// * `Malformed` - Token cannot be decoded or its signature does not verify
    /// * `MissingClaims` - `exp`, `sub` or `role` is absent
    /// * `Expired` - Current time is at or past the expiry
    pub fn validate_token(&self, token: &str) -> Result<TokenIdentity, TokenError> {
        let claims: Claims = self.jwt_handler.decode(token)?;

        if claims.exp.is_none() {
            return Err(TokenError::MissingClaims("exp"));
        }

        if claims.is_expired(self.clock.now().timestamp()) {
            return Err(TokenError::Expired);
        }

        let subject = claims.sub.ok_or(TokenError::MissingClaims("sub"))?;
        let role = claims.role.ok_or(TokenError::MissingClaims("role"))?;

        Ok(TokenIdentity { subject, role })
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("clock", &self.clock)
            .field("token_ttl", &self.token_ttl)
            .finish_non_exhaustive()
    }
}
