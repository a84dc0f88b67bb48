use axum::extract::Request;
use axum::extract::State;
use axum::http::header;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;

use crate::domain::access::ports::AccessGuardPort;
use crate::domain::account::models::Account;
use crate::domain::account::models::Role;
use crate::inbound::http::handlers::ApiError;
use crate::inbound::http::router::AppState;

const INVALID_CREDENTIALS: &str = "Could not validate credentials";

/// Extension type holding the account resolved from the bearer token.
#[derive(Debug, Clone)]
pub struct AuthenticatedAccount {
    pub account: Account,
}

/// Middleware that resolves the bearer token to an account and stores it in
/// the request extensions.
pub async fn authenticate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer_token(req.headers())
        .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?
        .to_owned();

    let account = state.access_guard.authenticate(&token).await?;

    req.extensions_mut().insert(AuthenticatedAccount { account });

    Ok(next.run(req).await)
}

/// Middleware admitting only seekers. Must run after [`authenticate`].
pub async fn require_seeker(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    require_role(&state, req, next, Role::Seeker).await
}

/// Middleware admitting only providers. Must run after [`authenticate`].
pub async fn require_provider(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    require_role(&state, req, next, Role::Provider).await
}

async fn require_role(
    state: &AppState,
    req: Request,
    next: Next,
    required: Role,
) -> Result<Response, ApiError> {
    let account = req
        .extensions()
        .get::<AuthenticatedAccount>()
        .map(|authenticated| authenticated.account.clone())
        .ok_or_else(|| ApiError::Unauthorized(INVALID_CREDENTIALS.to_string()))?;

    state.access_guard.require_role(account, required)?;

    Ok(next.run(req).await)
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
///
/// The scheme is matched case-insensitively; an empty token counts as absent.
fn extract_bearer_token(headers: &HeaderMap) -> Option<&str> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }

    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
