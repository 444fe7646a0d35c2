//! Adicional: a paid add-on offered with a device.

use serde::{Deserialize, Serialize};

use super::{Entity, Money, ValidationError, check_amount, merge_present, require_amount, require_text};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Adicional {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nombre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descripcion: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio: Option<Money>,
    /// Price charged when the add-on is granted for free on a sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub precio_gratis: Option<Money>,
}

impl Entity for Adicional {
    type Id = i64;

    const NAME: &'static str = "adicional";
    const REQUIRED_FIELDS: &'static [&'static str] = &["nombre", "descripcion", "precio"];
    const FIELDS: &'static [&'static str] = &["nombre", "descripcion", "precio", "precioGratis"];

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        require_text(Self::NAME, "nombre", self.nombre.as_deref())?;
        require_text(Self::NAME, "descripcion", self.descripcion.as_deref())?;
        require_amount(Self::NAME, "precio", self.precio)?;
        check_amount(Self::NAME, "precioGratis", self.precio_gratis)
    }

    fn merge(&mut self, patch: Self) {
        merge_present!(self, patch; nombre, descripcion, precio, precio_gratis);
    }
}
