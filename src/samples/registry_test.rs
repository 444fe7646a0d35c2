use super::*;
use serde_json::json;

#[test]
fn every_entity_has_a_set() {
    let names: Vec<_> = entity_names().collect();
    assert_eq!(
        names,
        ["adicional", "authority", "caracteristica", "dispositivo", "opcion", "personalizacion", "user", "venta"]
    );
    for name in names {
        assert_eq!(lookup(name).unwrap().entity(), name);
    }
}

#[test]
fn lookup_unknown_entity_fails() {
    let err = lookup("widget").err().unwrap();
    assert!(matches!(&err, RegistryError::UnknownEntity(n) if n == "widget"));
    assert_eq!(err.error_code(), "E_UNKNOWN_ENTITY");
}

#[test]
fn sample_json_renders_the_tier() {
    let value = sample_json("caracteristica", SampleTier::Full).unwrap();
    assert_eq!(value, json!({ "id": 19179, "nombre": "regarding", "descripcion": "along" }));
}

#[test]
fn new_sample_json_omits_identifier() {
    let value = sample_json("personalizacion", SampleTier::New).unwrap();
    assert!(value.get("id").is_none());
    assert_eq!(value["nombre"], "quizzically gen");
}

#[test]
fn all_json_has_four_tiers() {
    let value = lookup("user").unwrap().all_json().unwrap();
    let object = value.as_object().unwrap();
    assert_eq!(object.len(), 4);
    assert_eq!(value["required"], json!({ "id": 19726, "login": "UHD" }));
    assert!(object.contains_key("new"));
}

#[test]
fn persisted_json_is_in_tier_order() {
    let rows = lookup("venta").unwrap().persisted_json().unwrap();
    let ids: Vec<_> = rows.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(ids, [26086, 842, 11144]);
}

#[test]
fn find_by_id_matches_persisted_records() {
    let value = find_by_id("dispositivo", "3136").unwrap();
    assert_eq!(value["nombre"], "zowie");
    assert_eq!(value["precioBase"], json!(4359.48));
}

#[test]
fn find_by_id_missing_record() {
    let err = find_by_id("opcion", "1").err().unwrap();
    assert!(matches!(err, RegistryError::RecordNotFound { entity: "opcion", .. }));
    assert_eq!(err.error_code(), "E_RECORD_NOT_FOUND");
}
