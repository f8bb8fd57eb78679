//! Reactive state provided through Leptos context.
//!
//! DESIGN
//! ======
//! `shell` is what the router writes, `sections` is what loaders write and
//! `ui` holds user preferences. Each lives in its own `RwSignal`.

pub mod sections;
pub mod shell;
pub mod ui;
