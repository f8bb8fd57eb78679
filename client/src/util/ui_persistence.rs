//! Browser `localStorage` access for dashboard preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only storage glue: the theme preference reads through
//! [`LocalStorage`], and the sidebar collapse flag is stored as JSON. Under
//! SSR and in tests every read is empty and every write is dropped.

use serde::Serialize;
use serde::de::DeserializeOwned;
use shell::PreferenceStore;

/// Storage key for the sidebar collapse flag.
pub const SIDEBAR_STORAGE_KEY: &str = "fleetdesk_sidebar";

/// `PreferenceStore` over `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl PreferenceStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
            storage.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        #[cfg(feature = "hydrate")]
        {
            let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
                return;
            };
            if storage.set_item(key, value).is_err() {
                log::warn!("localStorage write failed for `{key}`");
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
        }
    }
}

/// Load a JSON value stored under `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = LocalStorage.get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value under `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    LocalStorage.set(key, &raw);
}

pub fn load_sidebar_collapsed() -> bool {
    load_json(SIDEBAR_STORAGE_KEY).unwrap_or(false)
}

pub fn save_sidebar_collapsed(collapsed: bool) {
    save_json(SIDEBAR_STORAGE_KEY, &collapsed);
}
