//! Device catalog fixtures: devices, their characteristics, customizations,
//! options and add-ons.

use std::sync::LazyLock;

use super::{HasSamples, Samples};
use crate::domain::{Adicional, Caracteristica, Dispositivo, Money, Opcion, Personalizacion};

/// Placeholder body used for large-text device descriptions.
const BLOB_DESCRIPTION: &str = "../fake-data/blob/hipster.txt";

fn text(s: &str) -> Option<String> {
    Some(s.to_owned())
}

fn cents(c: i64) -> Option<Money> {
    Some(Money::from_cents(c))
}

// =============================================================================
// ADICIONAL
// =============================================================================

static ADICIONAL: LazyLock<Samples<Adicional>> = LazyLock::new(|| {
    let record = |id, nombre, descripcion, precio, precio_gratis: Option<i64>| Adicional {
        id,
        nombre: text(nombre),
        descripcion: text(descripcion),
        precio: cents(precio),
        precio_gratis: precio_gratis.map(Money::from_cents),
    };
    Samples::new(
        record(Some(8509), "in hurtle ring", "joyfully eventuate far", 798_232, None),
        record(Some(22984), "as", "meanwhile guard er", 2_445_607, Some(2_576_122)),
        record(Some(28171), "fen", "yet via", 2_749_268, Some(696_548)),
        record(None, "medium", "frankly", 3_192_458, None),
    )
});

#[must_use]
pub fn adicional() -> &'static Samples<Adicional> {
    &ADICIONAL
}

impl HasSamples for Adicional {
    fn samples() -> &'static Samples<Self> {
        adicional()
    }
}

// =============================================================================
// CARACTERISTICA
// =============================================================================

static CARACTERISTICA: LazyLock<Samples<Caracteristica>> = LazyLock::new(|| {
    let record = |id, nombre, descripcion| Caracteristica { id, nombre: text(nombre), descripcion: text(descripcion) };
    Samples::new(
        record(Some(24237), "solidly bold tensely", "cheap"),
        record(Some(31100), "ugh mid sunbonnet", "stare"),
        record(Some(19179), "regarding", "along"),
        record(None, "shabby", "deadly republic"),
    )
});

#[must_use]
pub fn caracteristica() -> &'static Samples<Caracteristica> {
    &CARACTERISTICA
}

impl HasSamples for Caracteristica {
    fn samples() -> &'static Samples<Self> {
        caracteristica()
    }
}

// =============================================================================
// DISPOSITIVO
// =============================================================================

static DISPOSITIVO: LazyLock<Samples<Dispositivo>> = LazyLock::new(|| {
    let record = |id, codigo, nombre, precio_base, moneda| Dispositivo {
        id,
        codigo: text(codigo),
        nombre: text(nombre),
        descripcion: text(BLOB_DESCRIPTION),
        precio_base: cents(precio_base),
        moneda: text(moneda),
    };
    Samples::new(
        record(Some(32246), "rapid seeker quietly", "per", 269_466, "winding selfish"),
        record(Some(31746), "considering", "value via", 668_692, "however circa"),
        record(Some(3136), "why ew", "zowie", 435_948, "er brilliant"),
        record(None, "monumental lest whose", "acceptable annually into", 2_560_237, "likewise ha notable"),
    )
});

#[must_use]
pub fn dispositivo() -> &'static Samples<Dispositivo> {
    &DISPOSITIVO
}

impl HasSamples for Dispositivo {
    fn samples() -> &'static Samples<Self> {
        dispositivo()
    }
}

// =============================================================================
// OPCION
// =============================================================================

static OPCION: LazyLock<Samples<Opcion>> = LazyLock::new(|| {
    let record = |id, codigo, nombre, descripcion, precio_adicional| Opcion {
        id,
        codigo: text(codigo),
        nombre: text(nombre),
        descripcion: text(descripcion),
        precio_adicional: cents(precio_adicional),
    };
    Samples::new(
        record(Some(31053), "voluntarily whoa millennium", "defense now", "lazily", 2_764_487),
        record(Some(14638), "regarding flintlock whereas", "lest", "miaow humongous poorly", 2_547_445),
        record(Some(19109), "meh crick station", "aha", "anti yuck sonnet", 2_422_589),
        record(None, "beyond psychologist", "dollop", "equally incidentally now", 469_881),
    )
});

#[must_use]
pub fn opcion() -> &'static Samples<Opcion> {
    &OPCION
}

impl HasSamples for Opcion {
    fn samples() -> &'static Samples<Self> {
        opcion()
    }
}

// =============================================================================
// PERSONALIZACION
// =============================================================================

static PERSONALIZACION: LazyLock<Samples<Personalizacion>> = LazyLock::new(|| {
    let record = |id, nombre, descripcion| Personalizacion { id, nombre: text(nombre), descripcion: text(descripcion) };
    Samples::new(
        record(Some(27569), "ack", "onto loyally circumnavigate"),
        record(Some(18321), "longingly obnoxiously meanwhile", "deluge extremely manager"),
        record(Some(25778), "deduce force organ", "once"),
        record(None, "quizzically gen", "subcomponent but"),
    )
});

#[must_use]
pub fn personalizacion() -> &'static Samples<Personalizacion> {
    &PERSONALIZACION
}

impl HasSamples for Personalizacion {
    fn samples() -> &'static Samples<Self> {
        personalizacion()
    }
}
