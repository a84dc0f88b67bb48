use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::account::ports::AccountServicePort;
use crate::inbound::http::handlers::AccountData;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn get_current_account(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
) -> Result<ApiSuccess<AccountData>, ApiError> {
    state
        .account_service
        .get_account(&current.account.id)
        .await
        .map_err(ApiError::from)
        .map(|ref account| ApiSuccess::new(StatusCode::OK, account.into()))
}
