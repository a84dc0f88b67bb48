use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::application::models::ApplyCommand;
use crate::domain::application::ports::ApplicationServicePort;
use crate::inbound::http::handlers::opportunities::parse_opportunity_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::ApplicationData;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn apply(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
    Json(body): Json<ApplyRequest>,
) -> Result<ApiSuccess<ApplicationData>, ApiError> {
    let command = body.try_into_command()?;

    state
        .application_service
        .apply(&current.account.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref application| ApiSuccess::new(StatusCode::CREATED, application.into()))
}

/// HTTP request body for applying to an opportunity (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApplyRequest {
    opportunity_id: String,
    cover_letter: Option<String>,
}

impl ApplyRequest {
    fn try_into_command(self) -> Result<ApplyCommand, ApiError> {
        Ok(ApplyCommand {
            opportunity_id: parse_opportunity_id(&self.opportunity_id)?,
            cover_letter: self.cover_letter,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opportunity_id_must_be_a_uuid() {
        let request: ApplyRequest =
            serde_json::from_str(r#"{"opportunity_id":"not-a-uuid"}"#).unwrap();

        assert!(matches!(
            request.try_into_command(),
            Err(ApiError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn test_cover_letter_is_optional() {
        let request: ApplyRequest = serde_json::from_str(
            r#"{"opportunity_id":"6f1c1a52-6d2a-4a59-9b39-1d2b8f0c7e11"}"#,
        )
        .unwrap();

        let command = request.try_into_command().unwrap();
        assert_eq!(
            command.opportunity_id.to_string(),
            "6f1c1a52-6d2a-4a59-9b39-1d2b8f0c7e11"
        );
        assert!(command.cover_letter.is_none());
    }
}
