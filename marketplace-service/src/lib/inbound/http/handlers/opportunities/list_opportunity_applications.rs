use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use crate::domain::application::ports::ApplicationServicePort;
use crate::inbound::http::handlers::opportunities::parse_opportunity_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ApplicationData;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

/// Applications received by one of the caller's opportunities.
pub async fn list_opportunity_applications(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
    Path(opportunity_id): Path<String>,
) -> Result<ApiSuccess<Vec<ApplicationData>>, ApiError> {
    let opportunity_id = parse_opportunity_id(&opportunity_id)?;

    state
        .application_service
        .list_opportunity_applications(&current.account.id, &opportunity_id)
        .await
        .map_err(ApiError::from)
        .map(|applications| {
            ApiSuccess::new(
                StatusCode::OK,
                applications.iter().map(ApplicationData::from).collect(),
            )
        })
}
