//! Hash router: owns the active section and drives every transition.
//!
//! DESIGN
//! ======
//! The router holds the only copy of the navigation state. Every change goes
//! through `navigate_with`, which applies the full transition to the surface
//! in a fixed order: close overlays, set state, highlight, header, region,
//! loader, history, scroll. Unknown targets leave state untouched and come
//! back as `RouteError` after a `warn` diagnostic.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use std::sync::Arc;

use log::{debug, warn};

use crate::badge::badge_label;
use crate::error::RouteError;
use crate::section::SectionRegistry;
use crate::surface::{HistoryEntry, HistoryMode, Surface};

pub struct Router<S> {
    registry: Arc<SectionRegistry>,
    surface: S,
    current: String,
    disposable_dialogs: Vec<String>,
    started: bool,
}

impl<S: Surface> Router<S> {
    /// Create a router positioned on the registry's default section.
    /// Nothing is applied to the surface until [`Router::start`].
    pub fn new(registry: Arc<SectionRegistry>, surface: S) -> Self {
        let current = registry.default_section().id.clone();
        Self { registry, surface, current, disposable_dialogs: Vec::new(), started: false }
    }

    /// Ids of dynamically built dialogs that `close_all_modals` removes outright.
    #[must_use]
    pub fn with_disposable_dialogs<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.disposable_dialogs = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Initial navigation from the page's URL fragment.
    ///
    /// The resolved section replaces the current history entry so that
    /// traversing back to the load entry replays it like any other.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::AlreadyStarted`] on any call after the first.
    pub fn start(&mut self, fragment: &str) -> Result<(), RouteError> {
        if self.started {
            warn!("router start ignored: already started");
            return Err(RouteError::AlreadyStarted);
        }
        self.started = true;
        let id = self.registry.resolve(fragment).id.clone();
        self.navigate_with(&id, HistoryMode::Replace)
    }

    /// Navigate to `id`, pushing a history entry.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownSection`] if `id` is not registered.
    pub fn navigate(&mut self, id: &str) -> Result<(), RouteError> {
        self.navigate_with(id, HistoryMode::Push)
    }

    /// Navigate to `id` with an explicit history policy.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownSection`] if `id` is not registered; the
    /// surface and navigation state are left unchanged.
    pub fn navigate_with(&mut self, id: &str, mode: HistoryMode) -> Result<(), RouteError> {
        let registry = Arc::clone(&self.registry);
        let Some(section) = registry.get(id) else {
            warn!("navigation ignored: unknown section `{id}`");
            return Err(RouteError::UnknownSection(id.to_owned()));
        };

        self.close_all_modals();
        self.current.clone_from(&section.id);
        self.surface.highlight_nav(&section.id);
        self.surface.set_header(&section.title, &section.subtitle);
        self.surface.show_region(&section.id);
        section.loader.invoke();
        if mode != HistoryMode::Skip {
            self.surface.record_history(&HistoryEntry::new(section.id.as_str()), mode);
        }
        self.surface.scroll_to_top();

        debug!("navigated to `{}` ({mode:?})", section.id);
        Ok(())
    }

    /// Replay a browser history pop without recording a new entry.
    ///
    /// `state` is the raw history state slot. When it carries no section (the
    /// user edited the hash by hand, or the entry predates the router) the
    /// current URL `fragment` decides.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownSection`] if the state names a section
    /// that is no longer registered.
    pub fn on_history_pop(&mut self, state: Option<&str>, fragment: &str) -> Result<(), RouteError> {
        let target = match state.and_then(HistoryEntry::from_state) {
            Some(entry) => entry.section,
            None => self.registry.resolve(fragment).id.clone(),
        };
        self.navigate_with(&target, HistoryMode::Skip)
    }

    /// Show `count` on the nav entry for `id`; `count <= 0` removes the badge.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownSection`] if `id` is not registered. A
    /// registered section without a nav entry is a silent no-op.
    pub fn update_badge(&mut self, id: &str, count: i64) -> Result<(), RouteError> {
        if !self.registry.contains(id) {
            warn!("badge update ignored: unknown section `{id}`");
            return Err(RouteError::UnknownSection(id.to_owned()));
        }
        if !self.surface.has_nav_entry(id) {
            debug!("badge update skipped: no nav entry for `{id}`");
            return Ok(());
        }
        let label = badge_label(count);
        self.surface.set_badge(id, label.as_deref());
        Ok(())
    }

    /// The active section id.
    #[must_use]
    pub fn current_section(&self) -> &str {
        &self.current
    }

    /// Clear scroll lock, deactivate open overlays, and remove disposable
    /// dialogs. Safe to call with nothing open.
    pub fn close_all_modals(&mut self) {
        self.surface.clear_scroll_lock();
        self.surface.deactivate_overlays();
        for id in &self.disposable_dialogs {
            self.surface.remove_dialog(id);
        }
    }

    #[must_use]
    pub fn registry(&self) -> &SectionRegistry {
        &self.registry
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}
