//! # client
//!
//! Leptos + WASM frontend for the Fleetdesk admin dashboard.
//!
//! This crate renders the sidebar, header, section regions and overlays,
//! and adapts them to the `shell` router through `SignalSurface`. Section
//! loaders fetch record counts from the hosted database via `net::backend`.

pub mod app;
pub mod components;
pub mod net;
pub mod router;
pub mod sections;
pub mod state;
pub mod util;

/// WASM entry point: apply the theme before first paint, then hydrate.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    util::dark_mode::apply(util::dark_mode::read_preference());
    leptos::mount::hydrate_body(app::App);
}
