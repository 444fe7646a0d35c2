//! Ordered path bindings with deferred module loading.
//!
//! DESIGN
//! ======
//! Each entry owns a factory and a `OnceLock` slot. The first lookup of a
//! path runs the factory inside `get_or_init`, so concurrent first
//! navigations still load a module once; later lookups return the cached
//! module.

use std::collections::HashSet;
use std::sync::OnceLock;

use serde::Serialize;
use tracing::info;

use super::RouteError;
use super::module::{EntityModule, RouteKey, View};

/// Zero-argument constructor of a route module.
pub type ModuleFactory = fn() -> EntityModule;

pub struct RouteEntry {
    path: String,
    page_title: String,
    load: ModuleFactory,
    module: OnceLock<EntityModule>,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, page_title: impl Into<String>, load: ModuleFactory) -> Self {
        Self { path: path.into(), page_title: page_title.into(), load, module: OnceLock::new() }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// i18n key of the page title.
    #[must_use]
    pub fn page_title(&self) -> &str {
        &self.page_title
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.module.get().is_some()
    }

    /// The entry's module, loading it on first call.
    pub fn module(&self) -> &EntityModule {
        self.module.get_or_init(|| {
            let module = (self.load)();
            info!(path = %self.path, entity = module.entity(), "route module loaded");
            module
        })
    }
}

impl std::fmt::Debug for RouteEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteEntry")
            .field("path", &self.path)
            .field("page_title", &self.page_title)
            .field("loaded", &self.is_loaded())
            .finish_non_exhaustive()
    }
}

/// Result of resolving a URL through the table.
#[derive(Debug)]
pub struct Navigation<'a> {
    pub module: &'a EntityModule,
    pub view: View,
    pub id: Option<RouteKey>,
    pub page_title: &'a str,
}

impl Navigation<'_> {
    #[must_use]
    pub fn entity(&self) -> &'static str {
        self.module.entity()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSummary {
    pub path: String,
    pub page_title: String,
    pub loaded: bool,
}

// =============================================================================
// TABLE
// =============================================================================

#[derive(Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, keeping entry order.
    ///
    /// # Errors
    ///
    /// `InvalidPath` for an empty path or one containing `/`,
    /// `DuplicatePath` when two entries share a path.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.path.is_empty() || entry.path.contains('/') {
                return Err(RouteError::InvalidPath(entry.path.clone()));
            }
            if !seen.insert(entry.path.as_str()) {
                return Err(RouteError::DuplicatePath(entry.path.clone()));
            }
        }
        Ok(Self { entries })
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// # Errors
    ///
    /// `UnknownRoute` when no entry has this path.
    pub fn entry(&self, path: &str) -> Result<&RouteEntry, RouteError> {
        self.entries
            .iter()
            .find(|e| e.path == path)
            .ok_or_else(|| RouteError::UnknownRoute(path.to_owned()))
    }

    /// # Errors
    ///
    /// `UnknownRoute` when no entry has this path.
    pub fn module(&self, path: &str) -> Result<&EntityModule, RouteError> {
        Ok(self.entry(path)?.module())
    }

    /// Whether the module behind `path` has been loaded. Unknown paths are
    /// never loaded.
    #[must_use]
    pub fn loaded(&self, path: &str) -> bool {
        self.entry(path).is_ok_and(RouteEntry::is_loaded)
    }

    /// Load every module now; returns how many entries the table has.
    pub fn preload_all(&self) -> usize {
        for entry in &self.entries {
            entry.module();
        }
        self.entries.len()
    }

    #[must_use]
    pub fn summaries(&self) -> Vec<RouteSummary> {
        self.entries
            .iter()
            .map(|e| RouteSummary { path: e.path.clone(), page_title: e.page_title.clone(), loaded: e.is_loaded() })
            .collect()
    }

    /// Resolve `url` (e.g. `/venta/12/edit`) to a child route.
    ///
    /// # Errors
    ///
    /// `UnknownRoute` for an unbound first segment, then whatever the
    /// module's `resolve` reports.
    pub fn navigate(&self, url: &str) -> Result<Navigation<'_>, RouteError> {
        let url = url.trim_start_matches('/');
        let (segment, rest) = url.split_once('/').unwrap_or((url, ""));
        let entry = self.entry(segment)?;
        let module = entry.module();
        let matched = module.resolve(rest)?;
        Ok(Navigation { module, view: matched.view, id: matched.id, page_title: &entry.page_title })
    }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
