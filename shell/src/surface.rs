//! The seam between routing decisions and whatever renders them.
//!
//! ARCHITECTURE
//! ============
//! `Router` never touches a document. It calls one `Surface` method per
//! visible effect, in transition order. Implementations guard their own
//! missing anchors, so an absent element skips that step only.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use serde::{Deserialize, Serialize};

/// Browser history state payload for one navigation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub section: String,
}

impl HistoryEntry {
    pub fn new(section: impl Into<String>) -> Self {
        Self { section: section.into() }
    }

    /// URL fragment for this entry, e.g. `#rentals`.
    #[must_use]
    pub fn fragment(&self) -> String {
        format!("#{}", self.section)
    }

    /// Serialized form stored in the history state slot.
    #[must_use]
    pub fn to_state(&self) -> String {
        let Ok(raw) = serde_json::to_string(self) else {
            return "null".to_owned();
        };
        raw
    }

    /// Parse a history state slot. Foreign or malformed state yields `None`.
    #[must_use]
    pub fn from_state(raw: &str) -> Option<Self> {
        let Ok(entry) = serde_json::from_str(raw) else {
            return None;
        };
        Some(entry)
    }
}

/// How a navigation interacts with browser history.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HistoryMode {
    /// Push a new entry.
    #[default]
    Push,
    /// Rewrite the current entry in place.
    Replace,
    /// Leave history alone; used when replaying a pop.
    Skip,
}

/// Visible effects the router applies during a transition.
pub trait Surface {
    /// Remove any page-level scroll lock imposed by an overlay.
    fn clear_scroll_lock(&mut self);

    /// Mark every open overlay dialog inactive.
    fn deactivate_overlays(&mut self);

    /// Remove a dynamically constructed dialog from the document entirely.
    fn remove_dialog(&mut self, id: &str);

    /// Mark exactly the nav entry for `id` active.
    fn highlight_nav(&mut self, id: &str);

    fn set_header(&mut self, title: &str, subtitle: &str);

    /// Hide every content region, then reveal the one for `id`.
    fn show_region(&mut self, id: &str);

    /// Apply `mode` for `entry`. Never called with [`HistoryMode::Skip`].
    fn record_history(&mut self, entry: &HistoryEntry, mode: HistoryMode);

    fn scroll_to_top(&mut self);

    /// Whether a nav entry exists for `id`.
    fn has_nav_entry(&self, id: &str) -> bool;

    /// Set (`Some`) or remove (`None`) the badge on the nav entry for `id`.
    fn set_badge(&mut self, id: &str, label: Option<&str>);
}
