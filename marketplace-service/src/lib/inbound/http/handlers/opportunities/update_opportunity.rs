use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::opportunity::errors::OpportunityError;
use crate::domain::opportunity::models::OpportunityDescription;
use crate::domain::opportunity::models::OpportunityStatus;
use crate::domain::opportunity::models::OpportunityTitle;
use crate::domain::opportunity::models::UpdateOpportunityCommand;
use crate::domain::opportunity::ports::OpportunityServicePort;
use crate::inbound::http::handlers::opportunities::parse_opportunity_id;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::OpportunityData;
use crate::inbound::http::handlers::StringListInput;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn update_opportunity(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
    Path(opportunity_id): Path<String>,
    Json(body): Json<UpdateOpportunityRequest>,
) -> Result<ApiSuccess<OpportunityData>, ApiError> {
    let opportunity_id = parse_opportunity_id(&opportunity_id)?;
    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .opportunity_service
        .update_opportunity(&current.account.id, &opportunity_id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref opportunity| ApiSuccess::new(StatusCode::OK, opportunity.into()))
}

/// HTTP request body for a partial opportunity update (raw JSON)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateOpportunityRequest {
    title: Option<String>,
    description: Option<String>,
    #[serde(rename = "type")]
    opportunity_type: Option<String>,
    tags: Option<StringListInput>,
    status: Option<String>,
    location: Option<String>,
}

impl UpdateOpportunityRequest {
    fn try_into_command(self) -> Result<UpdateOpportunityCommand, OpportunityError> {
        Ok(UpdateOpportunityCommand {
            title: self.title.map(OpportunityTitle::new).transpose()?,
            description: self
                .description
                .map(OpportunityDescription::new)
                .transpose()?,
            opportunity_type: self.opportunity_type,
            tags: self.tags.map(StringListInput::into_vec),
            status: self
                .status
                .map(|raw| raw.parse::<OpportunityStatus>())
                .transpose()?,
            location: self.location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_provided_fields_are_set() {
        let request: UpdateOpportunityRequest =
            serde_json::from_str(r#"{"status":"closed","tags":["a"," b "]}"#).unwrap();

        let command = request.try_into_command().unwrap();
        assert_eq!(command.status, Some(OpportunityStatus::Closed));
        assert_eq!(command.tags, Some(vec!["a".to_string(), "b".to_string()]));
        assert!(command.title.is_none());
        assert!(command.description.is_none());
    }

    #[test]
    fn test_empty_description_is_rejected() {
        let request: UpdateOpportunityRequest =
            serde_json::from_str(r#"{"description":""}"#).unwrap();

        assert!(matches!(
            request.try_into_command(),
            Err(OpportunityError::InvalidDescription(_))
        ));
    }
}
