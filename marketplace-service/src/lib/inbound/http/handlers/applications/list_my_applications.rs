use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use serde::Serialize;

use crate::domain::application::models::ApplicationWithOpportunity;
use crate::domain::application::ports::ApplicationServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ApplicationData;
use crate::inbound::http::handlers::OpportunityData;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn list_my_applications(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
) -> Result<ApiSuccess<Vec<SeekerApplicationData>>, ApiError> {
    state
        .application_service
        .list_seeker_applications(&current.account.id)
        .await
        .map_err(ApiError::from)
        .map(|applications| {
            ApiSuccess::new(
                StatusCode::OK,
                applications.iter().map(SeekerApplicationData::from).collect(),
            )
        })
}

/// An application as seen by the seeker who submitted it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeekerApplicationData {
    #[serde(flatten)]
    pub application: ApplicationData,
    pub opportunity: OpportunityData,
}

impl From<&ApplicationWithOpportunity> for SeekerApplicationData {
    fn from(entry: &ApplicationWithOpportunity) -> Self {
        Self {
            application: (&entry.application).into(),
            opportunity: (&entry.opportunity).into(),
        }
    }
}
