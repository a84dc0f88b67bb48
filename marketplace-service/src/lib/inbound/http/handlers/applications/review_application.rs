use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::application::errors::ApplicationError;
use crate::domain::application::models::ApplicationId;
use crate::domain::application::models::ApplicationStatus;
use crate::domain::application::ports::ApplicationServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ApplicationData;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

/// Accept or reject an application to one of the caller's opportunities.
pub async fn review_application(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
    Path(application_id): Path<String>,
    Json(body): Json<ReviewApplicationRequest>,
) -> Result<ApiSuccess<ApplicationData>, ApiError> {
    let application_id = ApplicationId::from_string(&application_id)
        .map_err(|e| ApiError::from(ApplicationError::from(e)))?;
    let status = body.status()?;

    state
        .application_service
        .review_application(&current.account.id, &application_id, status)
        .await
        .map_err(ApiError::from)
        .map(|ref application| ApiSuccess::new(StatusCode::OK, application.into()))
}

/// HTTP request body for reviewing an application (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewApplicationRequest {
    status: String,
}

impl ReviewApplicationRequest {
    fn status(&self) -> Result<ApplicationStatus, ApiError> {
        self.status
            .parse::<ApplicationStatus>()
            .map_err(|e| ApiError::from(ApplicationError::from(e)))
    }
}
