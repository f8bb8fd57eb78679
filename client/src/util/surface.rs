//! `shell::Surface` over the reactive shell state and the browser window.
//!
//! ARCHITECTURE
//! ============
//! Highlight, header, visibility, badges and overlays are plain writes to
//! `RwSignal<ShellState>`; the views re-render from it after the router call
//! returns, so a transition paints in one pass. History and scrolling go
//! straight to `web-sys` under `hydrate` and no-op elsewhere.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use std::collections::BTreeSet;
use std::sync::Arc;

use leptos::prelude::*;
use shell::{HistoryEntry, HistoryMode, Surface};

use crate::state::shell::ShellState;

#[derive(Clone)]
pub struct SignalSurface {
    shell: RwSignal<ShellState>,
    nav_entries: Arc<BTreeSet<String>>,
}

impl SignalSurface {
    /// `nav_entries` lists the section ids the sidebar renders an entry for.
    pub fn new<I, T>(shell: RwSignal<ShellState>, nav_entries: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self { shell, nav_entries: Arc::new(nav_entries.into_iter().map(Into::into).collect()) }
    }
}

impl Surface for SignalSurface {
    fn clear_scroll_lock(&mut self) {
        self.shell.update(|s| s.scroll_locked = false);
    }

    fn deactivate_overlays(&mut self) {
        self.shell.update(|s| s.open_overlays.clear());
    }

    fn remove_dialog(&mut self, id: &str) {
        self.shell.update(|s| {
            s.dialogs.remove(id);
        });
    }

    fn highlight_nav(&mut self, id: &str) {
        let active = self.nav_entries.contains(id).then(|| id.to_owned());
        self.shell.update(|s| s.active_nav = active);
    }

    fn set_header(&mut self, title: &str, subtitle: &str) {
        self.shell.update(|s| {
            title.clone_into(&mut s.header_title);
            subtitle.clone_into(&mut s.header_subtitle);
        });
    }

    fn show_region(&mut self, id: &str) {
        self.shell.update(|s| s.visible_region = Some(id.to_owned()));
    }

    fn record_history(&mut self, entry: &HistoryEntry, mode: HistoryMode) {
        #[cfg(feature = "hydrate")]
        {
            let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
                return;
            };
            let state = wasm_bindgen::JsValue::from_str(&entry.to_state());
            let url = entry.fragment();
            let result = match mode {
                HistoryMode::Push => history.push_state_with_url(&state, "", Some(&url)),
                HistoryMode::Replace => history.replace_state_with_url(&state, "", Some(&url)),
                HistoryMode::Skip => Ok(()),
            };
            if result.is_err() {
                log::warn!("history update failed for `{}`", entry.section);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (entry, mode);
        }
    }

    fn scroll_to_top(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }

    fn has_nav_entry(&self, id: &str) -> bool {
        self.nav_entries.contains(id)
    }

    fn set_badge(&mut self, id: &str, label: Option<&str>) {
        self.shell.update(|s| match label {
            Some(label) => {
                s.badges.insert(id.to_owned(), label.to_owned());
            }
            None => {
                s.badges.remove(id);
            }
        });
    }
}

/// Reflect the scroll lock onto `<body>` as `overflow: hidden`.
pub fn apply_scroll_lock(locked: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            log::warn!("could not update body scroll lock");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = locked;
    }
}
