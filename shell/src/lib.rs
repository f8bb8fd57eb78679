//! # shell
//!
//! Navigation core for the Fleetdesk admin dashboard: the section registry,
//! the hash router, the badge policy, and theme preference resolution.
//!
//! This crate is UI-framework agnostic. Every visible effect goes through the
//! [`Surface`] trait so the Leptos client can drive reactive state while tests
//! drive an in-memory fake.

pub mod badge;
pub mod error;
pub mod router;
pub mod section;
pub mod surface;
pub mod theme;

pub use error::{RegistryError, RouteError};
pub use router::Router;
pub use section::{Loader, Section, SectionRegistry};
pub use surface::{HistoryEntry, HistoryMode, Surface};
pub use theme::{PreferenceStore, Theme, ThemePreference};
