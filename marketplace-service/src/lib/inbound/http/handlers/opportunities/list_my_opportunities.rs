use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::opportunity::ports::OpportunityServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::OpportunityData;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn list_my_opportunities(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
) -> Result<ApiSuccess<Vec<OpportunityData>>, ApiError> {
    state
        .opportunity_service
        .list_provider_opportunities(&current.account.id)
        .await
        .map_err(ApiError::from)
        .map(|opportunities| {
            ApiSuccess::new(
                StatusCode::OK,
                opportunities.iter().map(OpportunityData::from).collect(),
            )
        })
}
