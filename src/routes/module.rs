//! Entity route modules: the child routes one entity exposes once loaded.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::RouteError;
use crate::domain::KeyKind;
use crate::samples::registry::{self, RegistryError, SampleSet};
use crate::samples::{HasSamples, SampleTier};

/// Which admin page a child route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum View {
    #[serde(rename = "list")]
    List,
    #[serde(rename = "view")]
    Detail,
    #[serde(rename = "new")]
    Create,
    #[serde(rename = "edit")]
    Edit,
}

impl View {
    /// Whether the route carries a record key.
    #[must_use]
    pub fn is_keyed(self) -> bool {
        matches!(self, Self::Detail | Self::Edit)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildRoute {
    pub pattern: &'static str,
    pub view: View,
}

/// Conventional CRUD layout shared by every generated entity module.
pub const CRUD_CHILDREN: &[ChildRoute] = &[
    ChildRoute { pattern: "", view: View::List },
    ChildRoute { pattern: ":id/view", view: View::Detail },
    ChildRoute { pattern: "new", view: View::Create },
    ChildRoute { pattern: ":id/edit", view: View::Edit },
];

const KEY_SEGMENT: &str = ":id";

/// A record key taken from a URL, checked against the entity's key kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RouteKey {
    Numeric(u64),
    Text(String),
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Numeric(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub view: View,
    pub id: Option<RouteKey>,
}

// =============================================================================
// ENTITY MODULE
// =============================================================================

pub struct EntityModule {
    entity: &'static str,
    key_kind: KeyKind,
    children: &'static [ChildRoute],
    samples: &'static dyn SampleSet,
}

impl fmt::Debug for EntityModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityModule")
            .field("entity", &self.entity)
            .field("key_kind", &self.key_kind)
            .field("children", &self.children)
            .finish_non_exhaustive()
    }
}

/// Build the CRUD module for an entity. Used as a deferred route factory.
#[must_use]
pub fn crud_module<E: HasSamples>() -> EntityModule {
    EntityModule {
        entity: E::NAME,
        key_kind: E::KEY_KIND,
        children: CRUD_CHILDREN,
        samples: registry::sample_set::<E>(),
    }
}

impl EntityModule {
    #[must_use]
    pub fn entity(&self) -> &'static str {
        self.entity
    }

    #[must_use]
    pub fn key_kind(&self) -> KeyKind {
        self.key_kind
    }

    #[must_use]
    pub fn children(&self) -> &'static [ChildRoute] {
        self.children
    }

    #[must_use]
    pub fn samples(&self) -> &'static dyn SampleSet {
        self.samples
    }

    /// Match the part of a URL after the entity segment against the child
    /// routes, in declaration order.
    ///
    /// # Errors
    ///
    /// `NoMatchingRoute` when no child pattern fits, `MalformedKey` when the
    /// `:id` segment is not a valid key for this entity.
    pub fn resolve(&self, rest: &str) -> Result<RouteMatch, RouteError> {
        let rest = rest.trim_matches('/');
        let segments: Vec<&str> = if rest.is_empty() { Vec::new() } else { rest.split('/').collect() };

        for child in self.children {
            let pattern: Vec<&str> =
                if child.pattern.is_empty() { Vec::new() } else { child.pattern.split('/').collect() };
            if pattern.len() != segments.len() {
                continue;
            }

            let mut raw_key = None;
            let matched = pattern.iter().zip(&segments).all(|(p, s)| {
                if *p == KEY_SEGMENT {
                    raw_key = Some(*s);
                    true
                } else {
                    p == s
                }
            });
            if !matched {
                continue;
            }

            let id = raw_key.map(|raw| self.parse_key(raw)).transpose()?;
            return Ok(RouteMatch { view: child.view, id });
        }

        Err(RouteError::NoMatchingRoute { entity: self.entity, path: rest.to_owned() })
    }

    fn parse_key(&self, raw: &str) -> Result<RouteKey, RouteError> {
        let malformed = || RouteError::MalformedKey { entity: self.entity, key: raw.to_owned() };
        match self.key_kind {
            KeyKind::Numeric => match raw.parse::<u64>() {
                Ok(n) if n > 0 => Ok(RouteKey::Numeric(n)),
                _ => Err(malformed()),
            },
            KeyKind::Text if raw.is_empty() => Err(malformed()),
            KeyKind::Text => Ok(RouteKey::Text(raw.to_owned())),
        }
    }

    /// The fixture payload a page for `view` would render.
    ///
    /// # Errors
    ///
    /// `RecordNotFound` when a keyed view names no persisted sample.
    pub fn record_json(&self, view: View, id: Option<&RouteKey>) -> Result<Value, RegistryError> {
        match (view, id) {
            (View::List, _) => Ok(Value::Array(self.samples.persisted_json()?)),
            (View::Create, _) => self.samples.tier_json(SampleTier::New),
            (View::Detail | View::Edit, Some(key)) => self.samples.find_json(&key.to_string()),
            (View::Detail | View::Edit, None) => {
                Err(RegistryError::RecordNotFound { entity: self.entity, key: String::new() })
            }
        }
    }
}

#[cfg(test)]
#[path = "module_test.rs"]
mod tests;
