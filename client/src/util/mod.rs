//! Browser-facing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `window`, `localStorage` or `matchMedia` lives
//! here behind `hydrate`, leaving components and state free of `web-sys`.

pub mod dark_mode;
pub mod shortcuts;
pub mod surface;
pub mod ui_persistence;
