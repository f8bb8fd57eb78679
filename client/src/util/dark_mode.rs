//! Theme initialization, toggle, and system-change tracking.
//!
//! Resolves the theme through `shell::ThemePreference` over `localStorage`
//! and applies it as a `data-theme` attribute on the `<html>` element.
//! Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! SSR always renders the light theme. `hydrate()` applies the real one
//! before mounting, so a dark-mode user can see one light frame.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use shell::{Theme, ThemePreference};

use super::ui_persistence::LocalStorage;

#[cfg(feature = "hydrate")]
const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

fn preference() -> ThemePreference<LocalStorage> {
    ThemePreference::new(LocalStorage)
}

/// Whether the system currently prefers a dark appearance.
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// The theme to show at load: the stored choice, else the system preference.
pub fn read_preference() -> Theme {
    preference().initial(system_prefers_dark())
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) else {
            return;
        };
        if el.set_attribute("data-theme", theme.as_str()).is_err() {
            log::warn!("could not set data-theme");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = preference().toggle(current);
    apply(next);
    next
}

/// Follow system appearance changes while no explicit preference is stored.
///
/// `on_change` receives each theme that was applied. The subscription lives
/// for the rest of the page.
pub fn watch_system(on_change: impl Fn(Theme) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let Some(mq) = web_sys::window().and_then(|w| w.match_media(DARK_QUERY).ok().flatten()) else {
            return;
        };
        let listener = Closure::<dyn Fn(web_sys::MediaQueryListEvent)>::new(move |ev: web_sys::MediaQueryListEvent| {
            if let Some(theme) = preference().on_system_change(ev.matches()) {
                apply(theme);
                on_change(theme);
            }
        });
        if mq
            .add_event_listener_with_callback("change", listener.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("could not subscribe to color scheme changes");
            return;
        }
        listener.forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = on_change;
    }
}
