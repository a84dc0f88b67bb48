use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn delete_current_account(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
) -> Result<StatusCode, ApiError> {
    state
        .account_service
        .delete_account(&current.account.id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
