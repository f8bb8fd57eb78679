//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome while reading shared state from Leptos
//! context providers. Navigation always goes through `RouterHandle`.

pub mod dialog_host;
pub mod help_modal;
pub mod icons;
pub mod page_header;
pub mod section_view;
pub mod sidebar;
