//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the parsed configuration and the entity route table. Both are
//! read-only after start-up; the only interior mutability is each route
//! entry's once-cell.

use std::sync::Arc;

use crate::config::PreviewConfig;
use crate::routes::RouteTable;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<PreviewConfig>,
    pub routes: Arc<RouteTable>,
}

impl AppState {
    #[must_use]
    pub fn new(config: PreviewConfig, routes: RouteTable) -> Self {
        Self { config: Arc::new(config), routes: Arc::new(routes) }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use super::*;
    use crate::routes::{DEFAULT_NAMESPACE, entity_routes};

    /// `AppState` with default config and the full entity route table,
    /// nothing preloaded.
    #[must_use]
    pub fn test_app_state() -> AppState {
        let routes = entity_routes(DEFAULT_NAMESPACE).expect("entity routes should build");
        AppState::new(PreviewConfig::default(), routes)
    }
}
