//! Venta: a completed sale.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use super::{Entity, Money, ValidationError, check_amount, merge_present};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Venta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub fecha_venta: Option<OffsetDateTime>,
    /// Profit booked for the sale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ganancia: Option<Money>,
}

impl Entity for Venta {
    type Id = i64;

    const NAME: &'static str = "venta";
    const REQUIRED_FIELDS: &'static [&'static str] = &["fechaVenta"];
    const FIELDS: &'static [&'static str] = &["fechaVenta", "ganancia"];

    fn id(&self) -> Option<&i64> {
        self.id.as_ref()
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.fecha_venta.is_none() {
            return Err(ValidationError::Missing { entity: Self::NAME, field: "fechaVenta" });
        }
        check_amount(Self::NAME, "ganancia", self.ganancia)
    }

    fn merge(&mut self, patch: Self) {
        merge_present!(self, patch; fecha_venta, ganancia);
    }
}
