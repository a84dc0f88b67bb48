//! Authentication utilities library
//!
//! Provides the credential and token primitives used by the marketplace service:
//! - Password hashing (Argon2id)
//! - Signed, time-limited access tokens (JWT, HS256) carrying subject and role
//! - A clock abstraction so issuance and expiry share one time source
//!
//! The library knows nothing about accounts or roles beyond their string
//! form; the service maps them onto its own domain types.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! use auth::PasswordHasher;
//!
//! let hasher = PasswordHasher::new();
//! let hash = hasher.hash("my_password").unwrap();
//! assert!(hasher.verify("my_password", &hash));
//! assert!(!hasher.verify("other_password", &hash));
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!");
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and issue token
//! assert!(auth.verify_password("password123", &hash));
//! let issued = auth.issue_token("u@x.com", "seeker").unwrap();
//!
//! // Validate token
//! let identity = auth.validate_token(&issued.access_token).unwrap();
//! assert_eq!(identity.subject, "u@x.com");
//! assert_eq!(identity.role, "seeker");
//! ```

pub mod authenticator;
pub mod clock;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::Authenticator;
pub use authenticator::IssuedToken;
pub use authenticator::TokenIdentity;
pub use authenticator::DEFAULT_TOKEN_TTL_MINUTES;
pub use clock::Clock;
pub use clock::FixedClock;
pub use clock::SystemClock;
pub use jwt::Claims;
pub use jwt::JwtHandler;
pub use jwt::TokenError;
pub use password::PasswordError;
pub use password::PasswordHasher;
