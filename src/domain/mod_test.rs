use super::*;
use time::macros::datetime;

fn opcion(id: Option<i64>) -> Opcion {
    Opcion {
        id,
        codigo: Some("OPT-1".into()),
        nombre: Some("Color".into()),
        descripcion: Some("Matte black".into()),
        precio_adicional: Some(Money::from_cents(1_250)),
    }
}

// =============================================================================
// field helpers
// =============================================================================

#[test]
fn require_text_distinguishes_missing_and_blank() {
    assert_eq!(require_text("x", "f", None), Err(ValidationError::Missing { entity: "x", field: "f" }));
    assert_eq!(require_text("x", "f", Some("  ")), Err(ValidationError::Blank { entity: "x", field: "f" }));
    assert!(require_text("x", "f", Some("ok")).is_ok());
}

#[test]
fn amounts_must_not_be_negative() {
    assert_eq!(
        require_amount("x", "p", Some(Money::from_cents(-1))),
        Err(ValidationError::Negative { entity: "x", field: "p" })
    );
    assert!(require_amount("x", "p", Some(Money::ZERO)).is_ok());
    assert!(check_amount("x", "p", None).is_ok());
}

#[test]
fn validation_error_codes_are_stable() {
    assert_eq!(ValidationError::Missing { entity: "x", field: "f" }.error_code(), "E_FIELD_REQUIRED");
    assert_eq!(ValidationError::InvalidLogin(String::new()).error_code(), "E_INVALID_LOGIN");
}

// =============================================================================
// validate
// =============================================================================

#[test]
fn dispositivo_reports_first_missing_field() {
    let device = Dispositivo { codigo: Some("D-1".into()), nombre: Some("Phone".into()), ..Dispositivo::default() };
    assert_eq!(
        device.validate(),
        Err(ValidationError::Missing { entity: "dispositivo", field: "descripcion" })
    );
}

#[test]
fn adicional_rejects_negative_free_price() {
    let addon = Adicional {
        id: None,
        nombre: Some("Case".into()),
        descripcion: Some("Leather case".into()),
        precio: Some(Money::from_cents(500)),
        precio_gratis: Some(Money::from_cents(-100)),
    };
    assert_eq!(
        addon.validate(),
        Err(ValidationError::Negative { entity: "adicional", field: "precioGratis" })
    );
}

#[test]
fn venta_requires_sale_date_only() {
    assert!(Venta { id: None, fecha_venta: Some(datetime!(2024-10-23 21:27 UTC)), ganancia: None }
        .validate()
        .is_ok());
    assert_eq!(
        Venta::default().validate(),
        Err(ValidationError::Missing { entity: "venta", field: "fechaVenta" })
    );
}

#[test]
fn authority_name_length_is_bounded() {
    let authority = Authority { name: Some("R".repeat(authority::NAME_MAX_LEN + 1)) };
    assert!(matches!(authority.validate(), Err(ValidationError::TooLong { field: "name", .. })));
}

// =============================================================================
// merge
// =============================================================================

#[test]
fn merge_overwrites_only_present_fields() {
    let mut target = opcion(Some(3));
    let patch = Opcion { nombre: Some("Finish".into()), ..Opcion::default() };
    target.merge(patch);
    assert_eq!(target.nombre.as_deref(), Some("Finish"));
    assert_eq!(target.codigo.as_deref(), Some("OPT-1"));
    assert_eq!(target.precio_adicional, Some(Money::from_cents(1_250)));
}

#[test]
fn merge_never_changes_identifier() {
    let mut target = opcion(Some(3));
    target.merge(opcion(Some(99)));
    assert_eq!(target.id, Some(3));
}

#[test]
fn merge_venta_keeps_date_when_patch_has_none() {
    let date = datetime!(2024-10-24 00:49 UTC);
    let mut sale = Venta { id: Some(1), fecha_venta: Some(date), ganancia: None };
    sale.merge(Venta { ganancia: Some(Money::from_cents(10)), ..Venta::default() });
    assert_eq!(sale.fecha_venta, Some(date));
    assert_eq!(sale.ganancia, Some(Money::from_cents(10)));
}

// =============================================================================
// identity
// =============================================================================

#[test]
fn same_identity_requires_both_ids() {
    assert!(opcion(Some(1)).same_identity(&opcion(Some(1))));
    assert!(!opcion(Some(1)).same_identity(&opcion(Some(2))));
    assert!(!opcion(None).same_identity(&opcion(None)));
    assert!(!opcion(Some(1)).same_identity(&opcion(None)));
}

#[test]
fn authority_identity_uses_name() {
    let a = Authority { name: Some("ROLE_ADMIN".into()) };
    assert!(a.same_identity(&a.clone()));
    assert!(!Authority::default().same_identity(&Authority::default()));
}

// =============================================================================
// serde
// =============================================================================

#[test]
fn serializes_camel_case_and_omits_absent_fields() {
    let json = serde_json::to_value(opcion(None)).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "codigo": "OPT-1",
            "nombre": "Color",
            "descripcion": "Matte black",
            "precioAdicional": 12.5,
        })
    );
}

#[test]
fn deserializes_null_identifier_as_absent() {
    let sale: Venta = serde_json::from_str(r#"{"id":null,"fechaVenta":"2024-10-23T21:54:00Z"}"#).unwrap();
    assert_eq!(sale.id, None);
    assert_eq!(sale.fecha_venta, Some(datetime!(2024-10-23 21:54 UTC)));
}

#[test]
fn venta_date_is_rfc3339_on_the_wire() {
    let sale = Venta { id: Some(5), fecha_venta: Some(datetime!(2024-10-24 00:49 UTC)), ganancia: None };
    let json = serde_json::to_value(&sale).unwrap();
    assert_eq!(json["fechaVenta"], "2024-10-24T00:49:00Z");
}
