//! Opcion: one selectable option of a customization.

use serde::{Deserialize, Serialize};

use super::{Entity, Money, ValidationError, merge_present, require_amount, require_text};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opcion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    /// Surcharge over the device base price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio_adicional: Option<Money>,
}

impl Entity for Opcion {
    type Id = i64;

    const NAME: &'static str = "opcion";
    const REQUIRED_FIELDS: &'static [&'static str] = &["codigo", "nombre", "descripcion", "precioAdicional"];
    const FIELDS: &'static [&'static str] = &["codigo", "nombre", "descripcion", "precioAdicional"];

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Self::NAME, "codigo", self.codigo.as_deref())?;
        require_text(Self::NAME, "nombre", self.nombre.as_deref())?;
        require_text(Self::NAME, "descripcion", self.descripcion.as_deref())?;
        require_amount(Self::NAME, "precioAdicional", self.precio_adicional)
    }

    fn merge(&mut self, patch: Self) {
        merge_present!(self, patch; codigo, nombre, descripcion, precio_adicional);
    }
}
