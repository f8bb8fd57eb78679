//! Reactive model of the dashboard chrome the router drives.
//!
//! DESIGN
//! ======
//! Views derive highlight, visibility, header text and badges from this one
//! value. The router writes it through `SignalSurface`; components only open
//! and dismiss overlays on it directly.

#[cfg(test)]
#[path = "shell_test.rs"]
mod shell_test;

use std::collections::{BTreeMap, BTreeSet};

/// A dynamically constructed dialog. Removed from the document when closed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Dialog {
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ShellState {
    /// Nav entry currently marked active.
    pub active_nav: Option<String>,
    /// The single content region currently shown.
    pub visible_region: Option<String>,
    pub header_title: String,
    pub header_subtitle: String,
    /// Badge labels keyed by section id.
    pub badges: BTreeMap<String, String>,
    /// Static overlays currently open, keyed by element id.
    pub open_overlays: BTreeSet<String>,
    /// Disposable dialogs currently present, keyed by element id.
    pub dialogs: BTreeMap<String, Dialog>,
    /// Page scrolling is disabled while an overlay is up.
    pub scroll_locked: bool,
}

impl ShellState {
    /// State matching a page that has just rendered section `id`.
    pub fn landing(id: &str, title: &str, subtitle: &str) -> Self {
        Self {
            active_nav: Some(id.to_owned()),
            visible_region: Some(id.to_owned()),
            header_title: title.to_owned(),
            header_subtitle: subtitle.to_owned(),
            ..Self::default()
        }
    }

    pub fn is_nav_active(&self, id: &str) -> bool {
        self.active_nav.as_deref() == Some(id)
    }

    pub fn is_region_visible(&self, id: &str) -> bool {
        self.visible_region.as_deref() == Some(id)
    }

    pub fn is_overlay_open(&self, id: &str) -> bool {
        self.open_overlays.contains(id)
    }

    pub fn open_overlay(&mut self, id: &str) {
        self.open_overlays.insert(id.to_owned());
        self.scroll_locked = true;
    }

    /// Close one overlay; the scroll lock lifts once nothing is left open.
    pub fn close_overlay(&mut self, id: &str) {
        self.open_overlays.remove(id);
        self.release_scroll_lock_if_idle();
    }

    /// Show a disposable dialog, replacing any dialog with the same id.
    pub fn open_dialog(&mut self, id: &str, dialog: Dialog) {
        self.dialogs.insert(id.to_owned(), dialog);
        self.scroll_locked = true;
    }

    pub fn dismiss_dialog(&mut self, id: &str) {
        self.dialogs.remove(id);
        self.release_scroll_lock_if_idle();
    }

    fn release_scroll_lock_if_idle(&mut self) {
        if self.open_overlays.is_empty() && self.dialogs.is_empty() {
            self.scroll_locked = false;
        }
    }
}
