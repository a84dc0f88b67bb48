use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::profile::models::UpdateProfileCommand;
use crate::domain::profile::ports::ProfileServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ProfileData;
use crate::inbound::http::handlers::StringListInput;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

/// HTTP request body for a partial profile update (raw JSON)
#[derive(Debug, Default, Deserialize)]
pub struct UpsertProfileRequest {
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<StringListInput>,
    pub interests: Option<StringListInput>,
    pub company_name: Option<String>,
    pub company_website: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl From<UpsertProfileRequest> for UpdateProfileCommand {
    fn from(req: UpsertProfileRequest) -> Self {
        Self {
            avatar_url: req.avatar_url,
            bio: req.bio,
            skills: req.skills.map(StringListInput::into_vec),
            interests: req.interests.map(StringListInput::into_vec),
            company_name: req.company_name,
            company_website: req.company_website,
            country: req.country,
            city: req.city,
        }
    }
}

pub async fn upsert_my_profile(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
    Json(req): Json<UpsertProfileRequest>,
) -> Result<ApiSuccess<ProfileData>, ApiError> {
    state
        .profile_service
        .upsert_profile(&current.account.id, req.into())
        .await
        .map_err(ApiError::from)
        .map(|ref profile| ApiSuccess::new(StatusCode::OK, profile.into()))
}
