//! Name-addressed access to the fixture sets, rendered as JSON.
//!
//! The preview host only knows entity names from URLs, so this module erases
//! the record type behind `SampleSet`.

use serde_json::{Map, Value};
use tracing::debug;

use super::{HasSamples, SampleTier, Samples};
use crate::domain::{Adicional, Authority, Caracteristica, Dispositivo, Entity, Opcion, Personalizacion, User, Venta};
use crate::error::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("unknown entity: {0}")]
    UnknownEntity(String),
    #[error("unknown sample tier: {0}")]
    UnknownTier(String),
    #[error("no {entity} sample with identifier {key}")]
    RecordNotFound { entity: &'static str, key: String },
    #[error("sample serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownEntity(_) => "E_UNKNOWN_ENTITY",
            Self::UnknownTier(_) => "E_UNKNOWN_TIER",
            Self::RecordNotFound { .. } => "E_RECORD_NOT_FOUND",
            Self::Serialize(_) => "E_SERIALIZE",
        }
    }
}

/// Type-erased view of one entity's fixture set.
pub trait SampleSet: Send + Sync {
    fn entity(&self) -> &'static str;

    /// # Errors
    ///
    /// Fails only if the record cannot be serialized.
    fn tier_json(&self, tier: SampleTier) -> Result<Value, RegistryError>;

    /// All four tiers keyed by tier name.
    ///
    /// # Errors
    ///
    /// Fails only if a record cannot be serialized.
    fn all_json(&self) -> Result<Value, RegistryError>;

    /// The persisted tiers, in tier order.
    ///
    /// # Errors
    ///
    /// Fails only if a record cannot be serialized.
    fn persisted_json(&self) -> Result<Vec<Value>, RegistryError>;

    /// # Errors
    ///
    /// Returns `RecordNotFound` when no persisted sample has identifier `key`.
    fn find_json(&self, key: &str) -> Result<Value, RegistryError>;
}

impl<E: Entity> SampleSet for Samples<E> {
    fn entity(&self) -> &'static str {
        E::NAME
    }

    fn tier_json(&self, tier: SampleTier) -> Result<Value, RegistryError> {
        Ok(serde_json::to_value(self.get(tier))?)
    }

    fn all_json(&self) -> Result<Value, RegistryError> {
        let mut map = Map::new();
        for (tier, record) in self.iter() {
            map.insert(tier.as_str().to_owned(), serde_json::to_value(record)?);
        }
        Ok(Value::Object(map))
    }

    fn persisted_json(&self) -> Result<Vec<Value>, RegistryError> {
        SampleTier::PERSISTED
            .into_iter()
            .map(|tier| self.tier_json(tier))
            .collect()
    }

    fn find_json(&self, key: &str) -> Result<Value, RegistryError> {
        let record = self
            .find(key)
            .ok_or_else(|| RegistryError::RecordNotFound { entity: E::NAME, key: key.to_owned() })?;
        Ok(serde_json::to_value(record)?)
    }
}

/// Erase a typed fixture set.
#[must_use]
pub fn sample_set<E: HasSamples>() -> &'static dyn SampleSet {
    E::samples()
}

const SETS: [(&str, fn() -> &'static dyn SampleSet); 8] = [
    (Adicional::NAME, sample_set::<Adicional>),
    (Authority::NAME, sample_set::<Authority>),
    (Caracteristica::NAME, sample_set::<Caracteristica>),
    (Dispositivo::NAME, sample_set::<Dispositivo>),
    (Opcion::NAME, sample_set::<Opcion>),
    (Personalizacion::NAME, sample_set::<Personalizacion>),
    (User::NAME, sample_set::<User>),
    (Venta::NAME, sample_set::<Venta>),
];

/// Entity names that have a fixture set, alphabetically.
pub fn entity_names() -> impl Iterator<Item = &'static str> {
    SETS.iter().map(|(name, _)| *name)
}

/// Look up a fixture set by entity name.
///
/// # Errors
///
/// Returns `UnknownEntity` for names without a fixture set.
pub fn lookup(entity: &str) -> Result<&'static dyn SampleSet, RegistryError> {
    SETS.iter()
        .find(|(name, _)| *name == entity)
        .map(|(_, set)| set())
        .ok_or_else(|| RegistryError::UnknownEntity(entity.to_owned()))
}

/// One sample of one entity as JSON.
///
/// # Errors
///
/// Returns `UnknownEntity` for names without a fixture set.
pub fn sample_json(entity: &str, tier: SampleTier) -> Result<Value, RegistryError> {
    debug!(entity, %tier, "sample lookup");
    lookup(entity)?.tier_json(tier)
}

/// The persisted sample of `entity` whose identifier is `key`.
///
/// # Errors
///
/// Returns `UnknownEntity` or `RecordNotFound`.
pub fn find_by_id(entity: &str, key: &str) -> Result<Value, RegistryError> {
    debug!(entity, key, "sample lookup by identifier");
    lookup(entity)?.find_json(key)
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;
