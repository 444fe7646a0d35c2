use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::domain::{Opcion, Venta};
use crate::routes::crud_module;

// Each test owns its counter so parallel tests do not interfere.
static SEQUENTIAL_LOADS: AtomicUsize = AtomicUsize::new(0);
static CONCURRENT_LOADS: AtomicUsize = AtomicUsize::new(0);

fn counted_sequential() -> EntityModule {
    SEQUENTIAL_LOADS.fetch_add(1, Ordering::SeqCst);
    crud_module::<Venta>()
}

fn counted_concurrent() -> EntityModule {
    CONCURRENT_LOADS.fetch_add(1, Ordering::SeqCst);
    crud_module::<Venta>()
}

fn single(path: &str, load: ModuleFactory) -> RouteTable {
    RouteTable::new(vec![RouteEntry::new(path, "t.venta.home.title", load)]).unwrap()
}

// =============================================================================
// construction
// =============================================================================

#[test]
fn duplicate_paths_are_rejected() {
    let err = RouteTable::new(vec![
        RouteEntry::new("venta", "a", crud_module::<Venta>),
        RouteEntry::new("opcion", "b", crud_module::<Opcion>),
        RouteEntry::new("venta", "c", crud_module::<Venta>),
    ])
    .unwrap_err();
    assert_eq!(err, RouteError::DuplicatePath("venta".into()));
}

#[test]
fn empty_and_nested_paths_are_rejected() {
    for path in ["", "admin/venta"] {
        let err = RouteTable::new(vec![RouteEntry::new(path, "t", crud_module::<Venta>)]).unwrap_err();
        assert_eq!(err, RouteError::InvalidPath(path.into()));
    }
}

#[test]
fn entries_keep_declaration_order() {
    let table = RouteTable::new(vec![
        RouteEntry::new("opcion", "b", crud_module::<Opcion>),
        RouteEntry::new("venta", "a", crud_module::<Venta>),
    ])
    .unwrap();
    let paths: Vec<_> = table.entries().iter().map(RouteEntry::path).collect();
    assert_eq!(paths, ["opcion", "venta"]);
}

// =============================================================================
// lazy loading
// =============================================================================

#[test]
fn factory_runs_once_on_first_use() {
    let table = single("venta", counted_sequential);
    assert!(!table.loaded("venta"));
    assert_eq!(SEQUENTIAL_LOADS.load(Ordering::SeqCst), 0);

    let first = table.module("venta").unwrap();
    let second = table.module("venta").unwrap();
    assert!(std::ptr::eq(first, second));
    assert!(table.loaded("venta"));
    assert_eq!(SEQUENTIAL_LOADS.load(Ordering::SeqCst), 1);

    table.navigate("venta/new").unwrap();
    assert_eq!(SEQUENTIAL_LOADS.load(Ordering::SeqCst), 1);
}

#[test]
fn concurrent_first_navigation_loads_once() {
    let table = single("venta", counted_concurrent);
    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| table.navigate("/venta").unwrap().view);
        }
    });
    assert_eq!(CONCURRENT_LOADS.load(Ordering::SeqCst), 1);
}

#[test]
fn unknown_path_is_never_loaded() {
    let table = single("venta", crud_module::<Venta>);
    assert!(!table.loaded("opcion"));
    assert_eq!(table.module("opcion").unwrap_err(), RouteError::UnknownRoute("opcion".into()));
}

#[test]
fn preload_all_loads_every_entry() {
    let table = RouteTable::new(vec![
        RouteEntry::new("opcion", "b", crud_module::<Opcion>),
        RouteEntry::new("venta", "a", crud_module::<Venta>),
    ])
    .unwrap();
    assert_eq!(table.preload_all(), 2);
    assert!(table.summaries().iter().all(|s| s.loaded));
}

// =============================================================================
// navigation
// =============================================================================

#[test]
fn navigate_resolves_entity_view_and_key() {
    let table = single("venta", crud_module::<Venta>);
    let nav = table.navigate("/venta/26086/edit").unwrap();
    assert_eq!(nav.entity(), "venta");
    assert_eq!(nav.view, View::Edit);
    assert_eq!(nav.id, Some(RouteKey::Numeric(26086)));
    assert_eq!(nav.page_title, "t.venta.home.title");
}

#[test]
fn navigate_bare_segment_is_list() {
    let table = single("venta", crud_module::<Venta>);
    assert_eq!(table.navigate("venta").unwrap().view, View::List);
}

#[test]
fn navigate_unknown_segment() {
    let table = single("venta", crud_module::<Venta>);
    assert_eq!(table.navigate("/ventas/1/view").unwrap_err(), RouteError::UnknownRoute("ventas".into()));
    assert_eq!(table.navigate("").unwrap_err(), RouteError::UnknownRoute(String::new()));
}

#[test]
fn summaries_serialize_camel_case() {
    let table = single("venta", crud_module::<Venta>);
    let json = serde_json::to_value(table.summaries()).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{ "path": "venta", "pageTitle": "t.venta.home.title", "loaded": false }])
    );
}
