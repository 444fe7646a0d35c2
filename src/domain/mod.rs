//! Entity model for the device-store admin console.
//!
//! DESIGN
//! ======
//! Every entity is a flat record. All fields are `Option` so the same type
//! carries persisted records, pre-persistence records (no identifier), and
//! merge-patch payloads. Which fields are mandatory is part of the `Entity`
//! contract and enforced by `validate`, not by the type layout.
//!
//! On the wire, field names are camelCase and absent fields are omitted.

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ErrorCode;

pub mod adicional;
pub mod authority;
pub mod caracteristica;
pub mod dispositivo;
pub mod money;
pub mod opcion;
pub mod personalizacion;
pub mod user;
pub mod venta;

pub use adicional::Adicional;
pub use authority::Authority;
pub use caracteristica::Caracteristica;
pub use dispositivo::Dispositivo;
pub use money::Money;
pub use opcion::Opcion;
pub use personalizacion::Personalizacion;
pub use user::User;
pub use venta::Venta;

// =============================================================================
// CONTRACT
// =============================================================================

/// How an entity's identifier appears in a URL segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    /// Positive integer surrogate key.
    Numeric,
    /// Free-form natural key (e.g. an authority name).
    Text,
}

/// Field contract shared by every entity record.
pub trait Entity: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Id: PartialEq + fmt::Display + fmt::Debug;

    /// Lowercase entity name, also its route segment.
    const NAME: &'static str;
    /// JSON name of the identifier field.
    const ID_FIELD: &'static str = "id";
    const KEY_KIND: KeyKind = KeyKind::Numeric;
    /// Mandatory fields. A natural-key identifier is listed here too.
    const REQUIRED_FIELDS: &'static [&'static str];
    /// Every field besides the identifier.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> Option<&Self::Id>;

    /// Check mandatory fields and value constraints.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    fn validate(&self) -> Result<(), ValidationError>;

    /// Overwrite the fields present in `patch`; the identifier is kept.
    fn merge(&mut self, patch: Self);

    /// Two records denote the same entity only if both are persisted with
    /// equal identifiers.
    fn same_identity(&self, other: &Self) -> bool {
        matches!((self.id(), other.id()), (Some(a), Some(b)) if a == b)
    }
}

// =============================================================================
// VALIDATION
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{entity}.{field} is required")]
    Missing { entity: &'static str, field: &'static str },
    #[error("{entity}.{field} must not be blank")]
    Blank { entity: &'static str, field: &'static str },
    #[error("{entity}.{field} must not be negative")]
    Negative { entity: &'static str, field: &'static str },
    #[error("{entity}.{field} is longer than {max} characters")]
    TooLong { entity: &'static str, field: &'static str, max: usize },
    #[error("login {0:?} is not a valid login")]
    InvalidLogin(String),
}

impl ErrorCode for ValidationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "E_FIELD_REQUIRED",
            Self::Blank { .. } => "E_FIELD_BLANK",
            Self::Negative { .. } => "E_NEGATIVE_AMOUNT",
            Self::TooLong { .. } => "E_FIELD_TOO_LONG",
            Self::InvalidLogin(_) => "E_INVALID_LOGIN",
        }
    }
}

pub(crate) fn require_text(
    entity: &'static str,
    field: &'static str,
    value: Option<&str>,
) -> Result<(), ValidationError> {
    match value {
        None => Err(ValidationError::Missing { entity, field }),
        Some(v) if v.trim().is_empty() => Err(ValidationError::Blank { entity, field }),
        Some(_) => Ok(()),
    }
}

pub(crate) fn require_amount(
    entity: &'static str,
    field: &'static str,
    value: Option<Money>,
) -> Result<(), ValidationError> {
    let amount = value.ok_or(ValidationError::Missing { entity, field })?;
    check_amount(entity, field, Some(amount))
}

pub(crate) fn check_amount(
    entity: &'static str,
    field: &'static str,
    value: Option<Money>,
) -> Result<(), ValidationError> {
    match value {
        Some(amount) if amount.is_negative() => Err(ValidationError::Negative { entity, field }),
        _ => Ok(()),
    }
}

/// Copy every listed field from `patch` into `target` when it is present.
macro_rules! merge_present {
    ($target:expr, $patch:expr; $($field:ident),+ $(,)?) => {
        $(
            if $patch.$field.is_some() {
                $target.$field = $patch.$field;
            }
        )+
    };
}

pub(crate) use merge_present;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
