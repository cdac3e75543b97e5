use axum::{
    routing::get,
    Router,
    middleware
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;

pub mod handlers {
    pub mod contact_handlers;
    pub mod contact_dtos;
    pub mod auth_middleware;
}
pub mod models {
    pub mod contact_models;
}
pub mod repositories {
    pub mod contact_repository;
}
pub mod config {
    pub mod app_config;
}
pub mod utils {
    pub mod rate_limit;
}
pub mod db;
pub mod error;
pub mod schema;

use config::app_config::AppConfig;
use handlers::contact_handlers;
use repositories::contact_repository::ContactRepository;
use utils::rate_limit::{self, SubmissionLimiter};

pub use db::DbPool;

pub struct AppState {
    pub contact_repository: Arc<ContactRepository>,
    pub submission_limiter: Arc<SubmissionLimiter>,
    pub config: AppConfig,
}

impl AppState {
    pub fn new(db_pool: DbPool, config: AppConfig) -> Self {
        let contact_repository = Arc::new(ContactRepository::new(db_pool));
        let submission_limiter = Arc::new(SubmissionLimiter::per_minute(
            config.contact_rate_limit_per_minute,
        ));
        Self {
            contact_repository,
            submission_limiter,
            config,
        }
    }
}

async fn health_check() -> &'static str {
    "OK"
}

pub fn build_router(state: Arc<AppState>) -> Router {
    let contact_routes = Router::new()
        .route(
            "/api/contact",
            get(contact_handlers::list_contacts).post(contact_handlers::submit_contact),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            rate_limit::limit_contact_submissions,
        ));

    let allow_origin = match &state.config.frontend_origin {
        Some(origin) => AllowOrigin::exact(origin.clone()),
        None => AllowOrigin::from(Any),
    };

    Router::new()
        .route("/api/health", get(health_check))
        .merge(contact_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::OPTIONS,
                ])
                .allow_origin(allow_origin)
                .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::AUTHORIZATION])
                .expose_headers([axum::http::header::CONTENT_TYPE])
        )
        .with_state(state)
}
