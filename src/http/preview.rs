//! Fixture preview routes.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use crate::error::{ErrorBody, ErrorCode};
use crate::routes::{RouteError, RouteKey, RouteSummary, View};
use crate::samples::{SampleTier, registry, registry::RegistryError};
use crate::state::AppState;

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Route(#[from] RouteError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

impl ErrorCode for ApiError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Route(e) => e.error_code(),
            Self::Registry(e) => e.error_code(),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Route(e) => route_error_to_status(e),
            Self::Registry(e) => registry_error_to_status(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!(code = self.error_code(), error = %self, "preview request failed");
        }
        (status, Json(ErrorBody::from_error(&self))).into_response()
    }
}

pub(crate) fn route_error_to_status(err: &RouteError) -> StatusCode {
    match err {
        RouteError::UnknownRoute(_) | RouteError::NoMatchingRoute { .. } => StatusCode::NOT_FOUND,
        RouteError::MalformedKey { .. } => StatusCode::BAD_REQUEST,
        RouteError::DuplicatePath(_) | RouteError::InvalidPath(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn registry_error_to_status(err: &RegistryError) -> StatusCode {
    match err {
        RegistryError::UnknownEntity(_) | RegistryError::RecordNotFound { .. } => StatusCode::NOT_FOUND,
        RegistryError::UnknownTier(_) => StatusCode::BAD_REQUEST,
        RegistryError::Serialize(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/routes`: route table in menu order with load state.
pub async fn list_routes(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    Json(state.routes.summaries())
}

/// `GET /api/samples/:entity`: all four samples of an entity.
pub async fn entity_samples(Path(entity): Path<String>) -> Result<Json<Value>, ApiError> {
    let set = registry::lookup(&entity)?;
    Ok(Json(set.all_json()?))
}

/// `GET /api/samples/:entity/:tier`: one sample.
pub async fn tier_sample(Path((entity, tier)): Path<(String, String)>) -> Result<Json<Value>, ApiError> {
    let tier: SampleTier = tier.parse()?;
    Ok(Json(registry::sample_json(&entity, tier)?))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    pub entity: &'static str,
    pub view: View,
    pub id: Option<RouteKey>,
    pub page_title: String,
    pub record: Value,
}

/// `GET /api/navigate/*url`: resolve an admin URL and attach the record
/// its page would show.
pub async fn navigate(
    State(state): State<AppState>,
    Path(url): Path<String>,
) -> Result<Json<NavigationResponse>, ApiError> {
    let nav = state.routes.navigate(&url)?;
    let record = nav.module.record_json(nav.view, nav.id.as_ref())?;

    Ok(Json(NavigationResponse {
        entity: nav.entity(),
        view: nav.view,
        id: nav.id,
        page_title: nav.page_title.to_owned(),
        record,
    }))
}

#[cfg(test)]
#[path = "preview_test.rs"]
mod tests;
