use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Json;
use serde::Deserialize;

use crate::domain::opportunity::errors::OpportunityError;
use crate::domain::opportunity::models::CreateOpportunityCommand;
use crate::domain::opportunity::models::OpportunityDescription;
use crate::domain::opportunity::models::OpportunityStatus;
use crate::domain::opportunity::models::OpportunityTitle;
use crate::domain::opportunity::ports::OpportunityServicePort;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::handlers::ApiSuccess;
use crate::inbound::http::handlers::OpportunityData;
use crate::inbound::http::handlers::StringListInput;
use crate::inbound::http::middleware::AuthenticatedAccount;
use crate::inbound::http::router::AppState;

pub async fn create_opportunity(
    State(state): State<AppState>,
    Extension(current): Extension<AuthenticatedAccount>,
    Json(body): Json<CreateOpportunityRequest>,
) -> Result<ApiSuccess<OpportunityData>, ApiError> {
    let command = body.try_into_command().map_err(ApiError::from)?;

    state
        .opportunity_service
        .create_opportunity(&current.account.id, command)
        .await
        .map_err(ApiError::from)
        .map(|ref opportunity| ApiSuccess::new(StatusCode::CREATED, opportunity.into()))
}

/// HTTP request body for publishing an opportunity (raw JSON)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateOpportunityRequest {
    title: String,
    description: String,
    #[serde(rename = "type")]
    opportunity_type: Option<String>,
    tags: Option<StringListInput>,
    status: Option<String>,
    location: Option<String>,
}

impl CreateOpportunityRequest {
    fn try_into_command(self) -> Result<CreateOpportunityCommand, OpportunityError> {
        let status = self
            .status
            .map(|raw| raw.parse::<OpportunityStatus>())
            .transpose()?;

        Ok(CreateOpportunityCommand {
            title: OpportunityTitle::new(self.title)?,
            description: OpportunityDescription::new(self.description)?,
            opportunity_type: self.opportunity_type,
            tags: self.tags.map(StringListInput::into_vec).unwrap_or_default(),
            status,
            location: self.location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(json: &str) -> CreateOpportunityRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_type_and_comma_tags_are_read() {
        let command = request(
            r#"{"title":"Backend role","description":"Build APIs","type":"job","tags":"rust, sql"}"#,
        )
        .try_into_command()
        .unwrap();

        assert_eq!(command.title.as_str(), "Backend role");
        assert_eq!(command.opportunity_type.as_deref(), Some("job"));
        assert_eq!(command.tags, vec!["rust", "sql"]);
        assert_eq!(command.status, None);
        assert_eq!(command.location, None);
    }

    #[test]
    fn test_blank_title_is_rejected() {
        let result = request(r#"{"title":"   ","description":"Build APIs"}"#).try_into_command();

        assert!(matches!(result, Err(OpportunityError::InvalidTitle(_))));
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = request(r#"{"title":"Role","description":"Desc","status":"archived"}"#)
            .try_into_command();

        assert!(matches!(result, Err(OpportunityError::InvalidStatus(_))));
    }
}
