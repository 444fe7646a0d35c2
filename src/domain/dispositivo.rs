//! Dispositivo: a device offered for sale.

use serde::{Deserialize, Serialize};

use super::{Entity, Money, ValidationError, merge_present, require_amount, require_text};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dispositivo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub codigo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    /// Large text body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio_base: Option<Money>,
    /// Currency code the base price is quoted in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moneda: Option<String>,
}

impl Entity for Dispositivo {
    type Id = i64;

    const NAME: &'static str = "dispositivo";
    const REQUIRED_FIELDS: &'static [&'static str] = &["codigo", "nombre", "descripcion", "precioBase", "moneda"];
    const FIELDS: &'static [&'static str] = &["codigo", "nombre", "descripcion", "precioBase", "moneda"];

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Self::NAME, "codigo", self.codigo.as_deref())?;
        require_text(Self::NAME, "nombre", self.nombre.as_deref())?;
        require_text(Self::NAME, "descripcion", self.descripcion.as_deref())?;
        require_amount(Self::NAME, "precioBase", self.precio_base)?;
        require_text(Self::NAME, "moneda", self.moneda.as_deref())
    }

    fn merge(&mut self, patch: Self) {
        merge_present!(self, patch; codigo, nombre, descripcion, precio_base, moneda);
    }
}
