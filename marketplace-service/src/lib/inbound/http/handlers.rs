use axum::http::header;
use axum::http::HeaderValue;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::domain::access::errors::AccessError;
use crate::domain::account::errors::AccountError;
use crate::domain::account::models::split_comma_list;
use crate::domain::account::models::Account;
use crate::domain::application::errors::ApplicationError;
use crate::domain::application::models::Application;
use crate::domain::opportunity::errors::OpportunityError;
use crate::domain::opportunity::models::Opportunity;
use crate::domain::profile::errors::ProfileError;
use crate::domain::profile::models::Profile;

pub mod accounts;
pub mod applications;
pub mod authentication;
pub mod opportunities;
pub mod profiles;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        let mut response = (status, Json(ApiResponseBody::new_error(status, message))).into_response();

        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}

impl From<AccessError> for ApiError {
    fn from(err: AccessError) -> Self {
        match err {
            AccessError::InvalidToken(_)
            | AccessError::UnknownAccount
            | AccessError::InvalidCredentials => ApiError::Unauthorized(err.to_string()),
            AccessError::RoleMismatch { .. } | AccessError::LoginRoleMismatch { .. } => {
                ApiError::Forbidden(err.to_string())
            }
            AccessError::TokenIssuance(_) | AccessError::Store(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<AccountError> for ApiError {
    fn from(err: AccountError) -> Self {
        match err {
            AccountError::NotFound(_) => ApiError::NotFound(err.to_string()),
            AccountError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            AccountError::InvalidAccountId(_)
            | AccountError::InvalidEmail(_)
            | AccountError::InvalidRole(_) => ApiError::UnprocessableEntity(err.to_string()),
            AccountError::Password(_) | AccountError::DatabaseError(_) => {
                ApiError::InternalServerError(err.to_string())
            }
        }
    }
}

impl From<ProfileError> for ApiError {
    fn from(err: ProfileError) -> Self {
        match err {
            ProfileError::NotFound(_) => ApiError::NotFound("Profile not found".to_string()),
            ProfileError::DatabaseError(msg) => ApiError::InternalServerError(msg),
        }
    }
}

impl From<OpportunityError> for ApiError {
    fn from(err: OpportunityError) -> Self {
        match err {
            OpportunityError::NotFound(_) => ApiError::NotFound("Opportunity not found".to_string()),
            OpportunityError::NotOwner { .. } => {
                ApiError::Forbidden("Not authorized to modify this opportunity".to_string())
            }
            OpportunityError::InvalidOpportunityId(_)
            | OpportunityError::InvalidTitle(_)
            | OpportunityError::InvalidDescription(_)
            | OpportunityError::InvalidStatus(_) => ApiError::UnprocessableEntity(err.to_string()),
            OpportunityError::DatabaseError(msg) => ApiError::InternalServerError(msg),
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        match err {
            ApplicationError::NotFound(_) => ApiError::NotFound("Application not found".to_string()),
            ApplicationError::OpportunityNotFound(_) => {
                ApiError::NotFound("Opportunity not found".to_string())
            }
            ApplicationError::AlreadyApplied(_) => {
                ApiError::Conflict("You have already applied to this opportunity".to_string())
            }
            ApplicationError::NotOwner(_) => ApiError::Forbidden(err.to_string()),
            ApplicationError::InvalidApplicationId(_)
            | ApplicationError::InvalidStatus(_)
            | ApplicationError::InvalidDecision(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            ApplicationError::DatabaseError(msg) => ApiError::InternalServerError(msg),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// Public view of an account. The password hash never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccountData {
    pub id: String,
    pub email: String,
    pub full_name: Option<String>,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Account> for AccountData {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.to_string(),
            email: account.email.as_str().to_string(),
            full_name: account.full_name.clone(),
            role: account.role.to_string(),
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileData {
    pub id: String,
    pub account_id: String,
    pub avatar_url: Option<String>,
    pub bio: Option<String>,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
    pub company_name: Option<String>,
    pub company_website: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
}

impl From<&Profile> for ProfileData {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            account_id: profile.account_id.to_string(),
            avatar_url: profile.avatar_url.clone(),
            bio: profile.bio.clone(),
            skills: profile.skills.clone(),
            interests: profile.interests.clone(),
            company_name: profile.company_name.clone(),
            company_website: profile.company_website.clone(),
            country: profile.country.clone(),
            city: profile.city.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OpportunityData {
    pub id: String,
    pub provider_id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub opportunity_type: Option<String>,
    pub tags: Vec<String>,
    pub status: String,
    pub location: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&Opportunity> for OpportunityData {
    fn from(opportunity: &Opportunity) -> Self {
        Self {
            id: opportunity.id.to_string(),
            provider_id: opportunity.provider_id.to_string(),
            title: opportunity.title.as_str().to_string(),
            description: opportunity.description.as_str().to_string(),
            opportunity_type: opportunity.opportunity_type.clone(),
            tags: opportunity.tags.clone(),
            status: opportunity.status.to_string(),
            location: opportunity.location.clone(),
            created_at: opportunity.created_at,
            updated_at: opportunity.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationData {
    pub id: String,
    pub seeker_id: String,
    pub opportunity_id: String,
    pub status: String,
    pub cover_letter: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl From<&Application> for ApplicationData {
    fn from(application: &Application) -> Self {
        Self {
            id: application.id.to_string(),
            seeker_id: application.seeker_id.to_string(),
            opportunity_id: application.opportunity_id.to_string(),
            status: application.status.to_string(),
            cover_letter: application.cover_letter.clone(),
            submitted_at: application.submitted_at,
        }
    }
}

/// A list of strings sent either as a JSON array or as one comma separated
/// string. Entries are trimmed and blanks dropped in both forms.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum StringListInput {
    List(Vec<String>),
    Joined(String),
}

impl StringListInput {
    pub fn into_vec(self) -> Vec<String> {
        match self {
            StringListInput::List(items) => items
                .iter()
                .map(|item| item.trim())
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
            StringListInput::Joined(raw) => split_comma_list(&raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::models::Role;

    #[test]
    fn test_unauthorized_carries_bearer_challenge() {
        let response = ApiError::Unauthorized("Could not validate credentials".to_string())
            .into_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE),
            Some(&HeaderValue::from_static("Bearer"))
        );
    }

    #[test]
    fn test_forbidden_has_no_challenge() {
        let response = ApiError::Forbidden("nope".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[test]
    fn test_access_errors_map_to_status() {
        assert_eq!(
            ApiError::from(AccessError::InvalidToken(auth::TokenError::Expired)),
            ApiError::Unauthorized("Could not validate credentials".to_string())
        );
        assert_eq!(
            ApiError::from(AccessError::UnknownAccount),
            ApiError::Unauthorized("Could not validate credentials".to_string())
        );
        assert_eq!(
            ApiError::from(AccessError::RoleMismatch {
                required: Role::Provider
            }),
            ApiError::Forbidden("Not authorized: requires provider role".to_string())
        );
        assert_eq!(
            ApiError::from(AccessError::LoginRoleMismatch {
                asserted: Role::Seeker
            }),
            ApiError::Forbidden("You are not authorized to log in as a seeker".to_string())
        );
    }

    #[test]
    fn test_string_list_accepts_both_forms() {
        let joined: StringListInput = serde_json::from_str(r#"" rust, axum ,, sql""#).unwrap();
        let list: StringListInput = serde_json::from_str(r#"["rust", " axum", ""]"#).unwrap();

        assert_eq!(joined.into_vec(), vec!["rust", "axum", "sql"]);
        assert_eq!(list.into_vec(), vec!["rust", "axum"]);
    }

    #[test]
    fn test_duplicate_email_is_conflict() {
        let err = ApiError::from(AccountError::EmailAlreadyExists("u@x.com".to_string()));
        assert!(matches!(err, ApiError::Conflict(_)));
    }
}
