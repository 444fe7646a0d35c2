//! Caracteristica: a descriptive characteristic of a device.

use serde::{Deserialize, Serialize};

use super::{Entity, ValidationError, merge_present, require_text};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Caracteristica {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
}

impl Entity for Caracteristica {
    type Id = i64;

    const NAME: &'static str = "caracteristica";
    const REQUIRED_FIELDS: &'static [&'static str] = &["nombre", "descripcion"];
    const FIELDS: &'static [&'static str] = &["nombre", "descripcion"];

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Self::NAME, "nombre", self.nombre.as_deref())?;
        require_text(Self::NAME, "descripcion", self.descripcion.as_deref())
    }

    fn merge(&mut self, patch: Self) {
        merge_present!(self, patch; nombre, descripcion);
    }
}
