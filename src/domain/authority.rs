//! Authority: a named security role. The name is the identifier.

use serde::{Deserialize, Serialize};

use super::{Entity, KeyKind, ValidationError, require_text};

/// Longest authority name the console accepts.
pub const NAME_MAX_LEN: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Authority {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl Entity for Authority {
    type Id = String;

    const NAME: &'static str = "authority";
    const ID_FIELD: &'static str = "name";
    const KEY_KIND: KeyKind = KeyKind::Text;
    const REQUIRED_FIELDS: &'static [&'static str] = &["name"];
    const FIELDS: &'static [&'static str] = &["name"];

    fn id(&self) -> Option<&String> {
        self.name.as_ref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Self::NAME, "name", self.name.as_deref())?;
        match &self.name {
            Some(name) if name.chars().count() > NAME_MAX_LEN => {
                Err(ValidationError::TooLong { entity: Self::NAME, field: "name", max: NAME_MAX_LEN })
            }
            _ => Ok(()),
        }
    }

    // The name is the whole record; a patch can never rename an authority.
    fn merge(&mut self, _patch: Self) {}
}
