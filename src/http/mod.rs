//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The preview host serves the fixture registry and resolves admin URLs
//! through the entity route table. Every endpoint is a read-only JSON GET.

pub mod preview;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the preview router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(healthz))
        .route("/api/routes", get(preview::list_routes))
        .route("/api/samples/{entity}", get(preview::entity_samples))
        .route("/api/samples/{entity}/{tier}", get(preview::tier_sample))
        .route("/api/navigate/{*url}", get(preview::navigate))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
