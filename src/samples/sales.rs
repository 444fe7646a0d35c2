//! Sale fixtures.

use std::sync::LazyLock;

use time::macros::datetime;

use super::{HasSamples, Samples};
use crate::domain::{Money, Venta};

static VENTA: LazyLock<Samples<Venta>> = LazyLock::new(|| {
    Samples::new(
        Venta { id: Some(26086), fecha_venta: Some(datetime!(2024-10-24 00:49 UTC)), ganancia: None },
        Venta { id: Some(842), fecha_venta: Some(datetime!(2024-10-23 22:38 UTC)), ganancia: None },
        Venta {
            id: Some(11144),
            fecha_venta: Some(datetime!(2024-10-23 21:27 UTC)),
            ganancia: Some(Money::from_cents(2_609_325)),
        },
        Venta { id: None, fecha_venta: Some(datetime!(2024-10-23 21:54 UTC)), ganancia: None },
    )
});

#[must_use]
pub fn venta() -> &'static Samples<Venta> {
    &VENTA
}

impl HasSamples for Venta {
    fn samples() -> &'static Samples<Self> {
        venta()
    }
}
