use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn section(id: &str) -> Section {
    Section::new(id, id.to_uppercase(), format!("{id} subtitle"), "dot", Loader::noop())
}

fn fleet_registry() -> SectionRegistry {
    let sections = ["dashboard", "vehicles", "rentals"].into_iter().map(section).collect();
    SectionRegistry::new(sections, "dashboard").unwrap()
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_rejects_empty_list() {
    let err = SectionRegistry::new(Vec::new(), "dashboard").unwrap_err();
    assert_eq!(err, RegistryError::Empty);
}

#[test]
fn new_rejects_blank_id() {
    let err = SectionRegistry::new(vec![section("dashboard"), section("  ")], "dashboard").unwrap_err();
    assert_eq!(err, RegistryError::BlankId);
}

#[test]
fn new_rejects_duplicate_id() {
    let err = SectionRegistry::new(vec![section("rentals"), section("rentals")], "rentals").unwrap_err();
    assert_eq!(err, RegistryError::Duplicate("rentals".to_owned()));
}

#[test]
fn new_rejects_unregistered_default() {
    let err = SectionRegistry::new(vec![section("vehicles")], "dashboard").unwrap_err();
    assert_eq!(err, RegistryError::UnknownDefault("dashboard".to_owned()));
}

// =============================================================
// Lookup
// =============================================================

#[test]
fn get_distinguishes_known_and_unknown_ids() {
    let registry = fleet_registry();
    assert_eq!(registry.get("vehicles").map(|s| s.title.as_str()), Some("VEHICLES"));
    assert!(registry.get("invoices").is_none());
    assert!(registry.contains("rentals"));
    assert!(!registry.contains("Rentals"));
}

#[test]
fn iter_and_nth_follow_registration_order() {
    let registry = fleet_registry();
    let ids: Vec<_> = registry.iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, ["dashboard", "vehicles", "rentals"]);
    assert_eq!(registry.nth(2).map(|s| s.id.as_str()), Some("rentals"));
    assert!(registry.nth(3).is_none());
    assert_eq!(registry.len(), 3);
    assert!(!registry.is_empty());
}

#[test]
fn resolve_accepts_hash_prefixed_fragment() {
    let registry = fleet_registry();
    assert_eq!(registry.resolve("#rentals").id, "rentals");
    assert_eq!(registry.resolve("vehicles").id, "vehicles");
}

#[test]
fn resolve_falls_back_to_default() {
    let registry = fleet_registry();
    assert_eq!(registry.resolve("").id, "dashboard");
    assert_eq!(registry.resolve("#").id, "dashboard");
    assert_eq!(registry.resolve("#nowhere").id, "dashboard");
}

// =============================================================
// Loader
// =============================================================

#[test]
fn loader_invoke_runs_closure() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let loader = Loader::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });
    loader.invoke();
    loader.clone().invoke();
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}
