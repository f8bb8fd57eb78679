use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::*;

/// Clones share one map, so a test can keep a handle on what was persisted.
#[derive(Clone, Default)]
struct MemoryStore(Rc<RefCell<HashMap<String, String>>>);

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.0.borrow().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.0.borrow_mut().insert(key.to_owned(), value.to_owned());
    }
}

fn with_stored(value: &str) -> ThemePreference<MemoryStore> {
    let mut store = MemoryStore::default();
    store.set(THEME_STORAGE_KEY, value);
    ThemePreference::new(store)
}

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_parse_accepts_stored_values() {
    assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
    assert_eq!(Theme::parse("light"), Some(Theme::Light));
    assert_eq!(Theme::parse("sepia"), None);
}

#[test]
fn theme_as_str_matches_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(theme.as_str()), Some(theme));
    }
}

#[test]
fn theme_toggled_flips() {
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled(), Theme::Light);
    assert!(Theme::Dark.is_dark());
}

// =============================================================
// ThemePreference
// =============================================================

#[test]
fn initial_follows_system_when_nothing_stored() {
    let pref = ThemePreference::new(MemoryStore::default());
    assert_eq!(pref.initial(true), Theme::Dark);
    assert_eq!(pref.initial(false), Theme::Light);
}

#[test]
fn initial_prefers_stored_choice_over_system() {
    assert_eq!(with_stored("light").initial(true), Theme::Light);
    assert_eq!(with_stored("dark").initial(false), Theme::Dark);
}

#[test]
fn initial_ignores_unrecognized_stored_value() {
    assert_eq!(with_stored("true").initial(true), Theme::Dark);
}

#[test]
fn toggle_persists_next_theme() {
    let store = MemoryStore::default();
    let mut pref = ThemePreference::new(store.clone());
    assert_eq!(pref.toggle(Theme::Light), Theme::Dark);
    assert_eq!(pref.stored(), Some(Theme::Dark));
    assert_eq!(pref.toggle(Theme::Dark), Theme::Light);
    assert_eq!(store.get(THEME_STORAGE_KEY).as_deref(), Some("light"));
}

#[test]
fn system_change_applies_only_without_explicit_choice() {
    let pref = ThemePreference::new(MemoryStore::default());
    assert_eq!(pref.on_system_change(true), Some(Theme::Dark));
    assert_eq!(with_stored("light").on_system_change(true), None);
}
