use std::sync::Arc;
use std::time::Duration;

use auth::Authenticator;
use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::patch;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::accounts::delete_current_account;
use super::handlers::accounts::get_current_account;
use super::handlers::accounts::update_current_account;
use super::handlers::applications::apply;
use super::handlers::applications::list_my_applications;
use super::handlers::applications::review_application;
use super::handlers::authentication::login;
use super::handlers::authentication::register;
use super::handlers::opportunities::create_opportunity;
use super::handlers::opportunities::delete_opportunity;
use super::handlers::opportunities::get_opportunity;
use super::handlers::opportunities::list_my_opportunities;
use super::handlers::opportunities::list_opportunities;
use super::handlers::opportunities::list_opportunity_applications;
use super::handlers::opportunities::update_opportunity;
use super::handlers::profiles::get_my_profile;
use super::handlers::profiles::upsert_my_profile;
use super::middleware::authenticate;
use super::middleware::require_provider;
use super::middleware::require_seeker;
use crate::domain::access::AccessGuard;
use crate::domain::account::AccountService;
use crate::domain::application::ApplicationService;
use crate::domain::opportunity::OpportunityService;
use crate::domain::profile::ProfileService;
use crate::outbound::repositories::PostgresAccountRepository;
use crate::outbound::repositories::PostgresApplicationRepository;
use crate::outbound::repositories::PostgresOpportunityRepository;
use crate::outbound::repositories::PostgresProfileRepository;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService<PostgresAccountRepository>>,
    pub profile_service: Arc<ProfileService<PostgresProfileRepository>>,
    pub opportunity_service:
        Arc<OpportunityService<PostgresOpportunityRepository, PostgresProfileRepository>>,
    pub application_service:
        Arc<ApplicationService<PostgresApplicationRepository, PostgresOpportunityRepository>>,
    pub access_guard: Arc<AccessGuard<PostgresAccountRepository>>,
}

impl AppState {
    /// Wire every service onto one connection pool.
    ///
    /// # Arguments
    /// * `pool` - Postgres pool shared by all repositories
    /// * `authenticator` - Holds the signing secret and token lifetime
    pub fn new(pool: PgPool, authenticator: Arc<Authenticator>) -> Self {
        let account_repository = Arc::new(PostgresAccountRepository::new(pool.clone()));
        let profile_repository = Arc::new(PostgresProfileRepository::new(pool.clone()));
        let opportunity_repository = Arc::new(PostgresOpportunityRepository::new(pool.clone()));
        let application_repository = Arc::new(PostgresApplicationRepository::new(pool));

        Self {
            account_service: Arc::new(AccountService::new(Arc::clone(&account_repository))),
            profile_service: Arc::new(ProfileService::new(Arc::clone(&profile_repository))),
            opportunity_service: Arc::new(OpportunityService::new(
                Arc::clone(&opportunity_repository),
                profile_repository,
            )),
            application_service: Arc::new(ApplicationService::new(
                application_repository,
                opportunity_repository,
            )),
            access_guard: Arc::new(AccessGuard::new(account_repository, authenticator)),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/opportunities", get(list_opportunities))
        .route("/api/opportunities/:opportunity_id", get(get_opportunity));

    // route_layer runs bottom-up: authenticate first, then the role check.
    let authenticated_routes = Router::new()
        .route(
            "/api/users/me",
            get(get_current_account)
                .patch(update_current_account)
                .delete(delete_current_account),
        )
        .route("/api/profiles/me", get(get_my_profile).put(upsert_my_profile))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let seeker_routes = Router::new()
        .route("/api/applications/apply", post(apply))
        .route("/api/applications/me", get(list_my_applications))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_seeker))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    let provider_routes = Router::new()
        .route("/api/opportunities", post(create_opportunity))
        .route("/api/opportunities/me", get(list_my_opportunities))
        .route(
            "/api/opportunities/:opportunity_id",
            put(update_opportunity).delete(delete_opportunity),
        )
        .route(
            "/api/opportunities/:opportunity_id/applications",
            get(list_opportunity_applications),
        )
        .route("/api/applications/:application_id", patch(review_application))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_provider,
        ))
        .route_layer(middleware::from_fn_with_state(state.clone(), authenticate));

    // Headers are left out of the span: they carry the bearer token.
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .merge(public_routes)
        .merge(authenticated_routes)
        .merge(seeker_routes)
        .merge(provider_routes)
        .layer(trace_layer)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
