use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::Role;

/// Credentials presented at login together with the role the caller
/// claims to log in as.
#[derive(Debug)]
pub struct LoginCommand {
    pub email: EmailAddress,
    pub password: String,
    pub asserted_role: Role,
}
