use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::access::errors::AccessError;
use crate::domain::access::models::LoginCommand;
use crate::domain::access::ports::AccessGuardPort;
use crate::domain::account::errors::RoleError;
use crate::domain::account::models::EmailAddress;
use crate::domain::account::models::Role;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<ApiSuccess<LoginResponseData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .access_guard
        .login(command)
        .await
        .map_err(ApiError::from)
        .map(|issued| ApiSuccess::new(StatusCode::OK, issued.into()))
}

/// HTTP request body for logging in (raw JSON).
///
/// `username` is accepted as an alias of `email`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    #[serde(alias = "username")]
    email: String,
    password: String,
    role: String,
}

impl LoginRequest {
    fn try_into_command(self) -> Result<LoginCommand, ApiError> {
        let asserted_role: Role = self
            .role
            .parse()
            .map_err(|e: RoleError| ApiError::UnprocessableEntity(e.to_string()))?;

        // A malformed email cannot belong to any account.
        let email = EmailAddress::new(self.email)
            .map_err(|_| ApiError::from(AccessError::InvalidCredentials))?;

        Ok(LoginCommand {
            email,
            password: self.password,
            asserted_role,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
}

impl From<auth::IssuedToken> for LoginResponseData {
    fn from(issued: auth::IssuedToken) -> Self {
        Self {
            access_token: issued.access_token,
            token_type: "bearer".to_string(),
            expires_at: issued.expires_at,
        }
    }
}
