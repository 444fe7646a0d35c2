//! Fixture records for every entity, in four coverage tiers.
//!
//! DESIGN
//! ======
//! Each entity has one `Samples` set built on first access and kept for
//! the life of the process. Callers only ever receive `&'static`
//! references, so no test or preview can mutate shared fixture state; a
//! caller that needs to modify a record clones it first.
//!
//! Tiers:
//! - `required`: identifier plus mandatory fields only
//! - `partial`: identifier plus a subset of optional fields
//! - `full`: every field
//! - `new`: mandatory fields, no identifier (not yet persisted)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::Entity;

mod accounts;
mod catalog;
pub mod registry;
mod sales;

pub use accounts::{authority, user};
pub use catalog::{adicional, caracteristica, dispositivo, opcion, personalizacion};
pub use registry::{RegistryError, SampleSet};
pub use sales::venta;

// =============================================================================
// TIERS
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleTier {
    Required,
    Partial,
    Full,
    New,
}

impl SampleTier {
    pub const ALL: [Self; 4] = [Self::Required, Self::Partial, Self::Full, Self::New];

    /// Tiers whose record carries an identifier.
    pub const PERSISTED: [Self; 3] = [Self::Required, Self::Partial, Self::Full];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Partial => "partial",
            Self::Full => "full",
            Self::New => "new",
        }
    }
}

impl fmt::Display for SampleTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SampleTier {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "required" => Ok(Self::Required),
            "partial" => Ok(Self::Partial),
            "full" => Ok(Self::Full),
            "new" => Ok(Self::New),
            _ => Err(RegistryError::UnknownTier(s.to_owned())),
        }
    }
}

// =============================================================================
// SAMPLE SET
// =============================================================================

/// The four fixture records of one entity. Fields are private and there are
/// no mutating accessors.
#[derive(Debug)]
pub struct Samples<E> {
    required: E,
    partial: E,
    full: E,
    new: E,
}

impl<E: Entity> Samples<E> {
    pub(crate) fn new(required: E, partial: E, full: E, new: E) -> Self {
        Self { required, partial, full, new }
    }

    #[must_use]
    pub fn required(&self) -> &E {
        &self.required
    }

    #[must_use]
    pub fn partial(&self) -> &E {
        &self.partial
    }

    #[must_use]
    pub fn full(&self) -> &E {
        &self.full
    }

    #[must_use]
    pub fn new_record(&self) -> &E {
        &self.new
    }

    #[must_use]
    pub fn get(&self, tier: SampleTier) -> &E {
        match tier {
            SampleTier::Required => &self.required,
            SampleTier::Partial => &self.partial,
            SampleTier::Full => &self.full,
            SampleTier::New => &self.new,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (SampleTier, &E)> {
        SampleTier::ALL.into_iter().map(|tier| (tier, self.get(tier)))
    }

    /// First persisted sample whose identifier renders as `key`.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<&E> {
        SampleTier::PERSISTED
            .into_iter()
            .map(|tier| self.get(tier))
            .find(|record| record.id().is_some_and(|id| id.to_string() == key))
    }
}

/// Entities that ship a fixture set.
pub trait HasSamples: Entity {
    fn samples() -> &'static Samples<Self>;
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
