use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use crate::domain::opportunity::ports::OpportunityServicePort;
use crate::inbound::http::handlers::opportunities::parse_opportunity_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::OpportunityData;
use crate::inbound::http::router::AppState;

pub async fn get_opportunity(
    State(state): State<AppState>,
    Path(opportunity_id): Path<String>,
) -> Result<ApiSuccess<OpportunityData>, ApiError> {
    let opportunity_id = parse_opportunity_id(&opportunity_id)?;

    state
        .opportunity_service
        .get_opportunity(&opportunity_id)
        .await
        .map_err(ApiError::from)
        .map(|ref opportunity| ApiSuccess::new(StatusCode::OK, opportunity.into()))
}
