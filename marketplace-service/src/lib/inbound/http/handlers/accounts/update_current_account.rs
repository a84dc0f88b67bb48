use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::account::models::UpdateAccountCommand;
use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::handlers::AccountData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

/// HTTP request body for updating the current account (raw JSON).
///
/// Email and role are not accepted; unknown fields are ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub full_name: Option<String>,
    pub password: Option<String>,
}

impl UpdateAccountRequest {
    fn try_into_command(self) -> Result<UpdateAccountCommand, ApiError> {
        if matches!(self.password.as_deref(), Some("")) {
            return Err(ApiError::UnprocessableEntity(
                "Password must not be empty".to_string(),
            ));
        }

        Ok(UpdateAccountCommand {
            full_name: self.full_name,
            password: self.password,
        })
    }
}

pub async fn update_current_account(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
    Json(req): Json<UpdateAccountRequest>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    let command = req.try_into_command()?;

    state
        .account_service
        .update_account(&current.account.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}
