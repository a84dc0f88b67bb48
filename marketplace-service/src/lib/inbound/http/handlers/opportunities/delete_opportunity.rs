use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::opportunity::ports::OpportunityServicePort;
use crate::inbound::http::handlers::opportunities::parse_opportunity_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn delete_opportunity(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
    Path(opportunity_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let opportunity_id = parse_opportunity_id(&opportunity_id)?;

    state
        .opportunity_service
        .delete_opportunity(&current.account.id, &opportunity_id)
        .await
        .map_err(ApiError::from)
        .map(|_| StatusCode::NO_CONTENT)
}
