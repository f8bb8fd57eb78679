//! Context handle to the dashboard router and its browser bindings.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` installs one `shell::Router` here and provides the handle through
//! context. Sidebar clicks, the `popstate` and `keydown` listeners, and
//! section loaders all reach the router through this handle and nothing
//! else.
//!
//! Loaders are invoked while the router is borrowed, so they must defer any
//! call back into the handle (section loaders do their work in
//! `spawn_local`).

use leptos::prelude::*;
use shell::{RouteError, Router};

use crate::util::surface::SignalSurface;

type DashboardRouter = Router<SignalSurface>;

#[derive(Clone, Copy)]
pub struct RouterHandle {
    slot: StoredValue<Option<DashboardRouter>>,
}

impl Default for RouterHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterHandle {
    /// An empty handle. Loaders can capture it before the router exists.
    pub fn new() -> Self {
        Self { slot: StoredValue::new(None) }
    }

    pub fn install(self, router: DashboardRouter) {
        self.slot.set_value(Some(router));
    }

    fn with_router<T>(self, f: impl FnOnce(&mut DashboardRouter) -> T) -> Option<T> {
        let mut out = None;
        self.slot.update_value(|slot| {
            if let Some(router) = slot.as_mut() {
                out = Some(f(router));
            }
        });
        if out.is_none() {
            log::warn!("router call dropped: no router installed");
        }
        out
    }

    /// Initial navigation from the URL fragment.
    ///
    /// # Errors
    ///
    /// Propagates [`RouteError::AlreadyStarted`] on repeat calls.
    pub fn start(self, fragment: &str) -> Result<(), RouteError> {
        self.with_router(|r| r.start(fragment)).unwrap_or(Ok(()))
    }

    /// # Errors
    ///
    /// Returns [`RouteError::UnknownSection`] for unregistered ids.
    pub fn navigate(self, id: &str) -> Result<(), RouteError> {
        self.with_router(|r| r.navigate(id)).unwrap_or(Ok(()))
    }

    /// Navigation from a user gesture. The router has already logged any
    /// rejection, so nothing is reported back.
    pub fn select(self, id: &str) {
        let _ = self.navigate(id);
    }

    /// Navigate to the section at `index` in sidebar order.
    pub fn select_nth(self, index: usize) {
        let target = self.with_router(|r| r.registry().nth(index).map(|s| s.id.clone())).flatten();
        if let Some(id) = target {
            self.select(&id);
        }
    }

    /// # Errors
    ///
    /// Returns [`RouteError::UnknownSection`] when the state names a section
    /// that is no longer registered.
    pub fn on_history_pop(self, state: Option<&str>, fragment: &str) -> Result<(), RouteError> {
        self.with_router(|r| r.on_history_pop(state, fragment)).unwrap_or(Ok(()))
    }

    /// # Errors
    ///
    /// Returns [`RouteError::UnknownSection`] for unregistered ids.
    pub fn update_badge(self, id: &str, count: i64) -> Result<(), RouteError> {
        self.with_router(|r| r.update_badge(id, count)).unwrap_or(Ok(()))
    }

    pub fn current_section(self) -> Option<String> {
        self.slot.with_value(|slot| slot.as_ref().map(|r| r.current_section().to_owned()))
    }

    pub fn close_all_modals(self) {
        self.with_router(DashboardRouter::close_all_modals);
    }

    /// Resolve the page's URL fragment and bind `popstate` and `keydown`.
    /// Call once, after hydration.
    pub fn bind_browser(self) {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::shortcuts::{Modifiers, Shortcut, shortcut_for};

            let fragment = window().location().hash().unwrap_or_default();
            if self.start(&fragment).is_err() {
                return;
            }

            let _popstate = window_event_listener(leptos::ev::popstate, move |ev| {
                let state = ev.state().as_string();
                let fragment = window().location().hash().unwrap_or_default();
                let _ = self.on_history_pop(state.as_deref(), &fragment);
            });

            let _keydown = window_event_listener(leptos::ev::keydown, move |ev| {
                let mods = Modifiers { alt: ev.alt_key(), ctrl: ev.ctrl_key(), meta: ev.meta_key(), shift: ev.shift_key() };
                match shortcut_for(&ev.code(), mods) {
                    Some(Shortcut::Section(index)) => {
                        ev.prevent_default();
                        self.select_nth(index);
                    }
                    Some(Shortcut::CloseModals) => self.close_all_modals(),
                    None => {}
                }
            });
        }
    }
}
