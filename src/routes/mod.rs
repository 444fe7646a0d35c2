//! Entity route table of the admin console.
//!
//! SYSTEM CONTEXT
//! ==============
//! One URL segment per entity, each bound to a route module that is built
//! on first navigation. The host router (the preview server here) resolves
//! URLs through `RouteTable::navigate`.

pub mod module;
pub mod table;

pub use module::{ChildRoute, EntityModule, RouteKey, RouteMatch, View, crud_module};
pub use table::{ModuleFactory, Navigation, RouteEntry, RouteSummary, RouteTable};

use crate::domain::{Adicional, Authority, Caracteristica, Dispositivo, Entity, Opcion, Personalizacion, Venta};
use crate::error::ErrorCode;

/// i18n namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "backendProgram2App";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    #[error("invalid route path: {0:?}")]
    InvalidPath(String),
    #[error("no route for {0:?}")]
    UnknownRoute(String),
    #[error("no {entity} route matches {path:?}")]
    NoMatchingRoute { entity: &'static str, path: String },
    #[error("malformed {entity} key: {key:?}")]
    MalformedKey { entity: &'static str, key: String },
}

impl ErrorCode for RouteError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DuplicatePath(_) => "E_DUPLICATE_ROUTE",
            Self::InvalidPath(_) => "E_INVALID_ROUTE_PATH",
            Self::UnknownRoute(_) => "E_UNKNOWN_ROUTE",
            Self::NoMatchingRoute { .. } => "E_NO_MATCHING_ROUTE",
            Self::MalformedKey { .. } => "E_MALFORMED_KEY",
        }
    }
}

/// `{namespace}.{key}.home.title`
#[must_use]
pub fn page_title(namespace: &str, key: &str) -> String {
    format!("{namespace}.{key}.home.title")
}

fn entry<E: crate::samples::HasSamples>(namespace: &str) -> RouteEntry {
    RouteEntry::new(E::NAME, page_title(namespace, E::NAME), crud_module::<E>)
}

/// The admin console's entity routes, in menu order.
///
/// # Errors
///
/// Only fails if the bindings themselves collide.
pub fn entity_routes(namespace: &str) -> Result<RouteTable, RouteError> {
    RouteTable::new(vec![
        RouteEntry::new(Authority::NAME, page_title(namespace, "adminAuthority"), crud_module::<Authority>),
        entry::<Venta>(namespace),
        entry::<Dispositivo>(namespace),
        entry::<Caracteristica>(namespace),
        entry::<Personalizacion>(namespace),
        entry::<Opcion>(namespace),
        entry::<Adicional>(namespace),
    ])
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
