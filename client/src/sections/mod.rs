//! The dashboard's section table and registry construction.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SECTIONS` is the single source for sidebar order, header text and icons.
//! `build_registry` turns it into the `shell::SectionRegistry` the router
//! validates against, pairing each entry with a loader.

pub mod loader;


use shell::{Loader, RegistryError, Section, SectionRegistry};

pub const DEFAULT_SECTION: &str = "dashboard";

/// Disposable dialog opened when a section fails to load.
pub const LOAD_ERROR_DIALOG: &str = "load-error-dialog";

/// Dialogs `close_all_modals` removes from the document outright.
pub const DISPOSABLE_DIALOGS: &[&str] = &[LOAD_ERROR_DIALOG];

/// Static overlay listing keyboard shortcuts.
pub const HELP_MODAL: &str = "help-modal";

/// Backend table a section counts rows from on load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountSource {
    pub table: &'static str,
    /// PostgREST filter appended to the query, e.g. `status=eq.active`.
    pub filter: Option<&'static str>,
    /// Caption for the count in the section body.
    pub caption: &'static str,
    /// Mirror the count onto the sidebar badge.
    pub badge: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionDef {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub source: Option<CountSource>,
}

pub const SECTIONS: &[SectionDef] = &[
    SectionDef {
        id: "dashboard",
        title: "Dashboard",
        subtitle: "Fleet overview at a glance",
        icon: "gauge",
        source: Some(CountSource {
            table: "vehicles",
            filter: Some("status=eq.available"),
            caption: "vehicles available now",
            badge: false,
        }),
    },
    SectionDef {
        id: "vehicles",
        title: "Vehicles",
        subtitle: "Manage your fleet inventory",
        icon: "car",
        source: Some(CountSource { table: "vehicles", filter: None, caption: "vehicles in the fleet", badge: false }),
    },
    SectionDef {
        id: "customers",
        title: "Customers",
        subtitle: "Customer accounts and contacts",
        icon: "users",
        source: Some(CountSource { table: "customers", filter: None, caption: "registered customers", badge: false }),
    },
    SectionDef {
        id: "rentals",
        title: "Rentals",
        subtitle: "Active and upcoming rentals",
        icon: "key",
        source: Some(CountSource {
            table: "rentals",
            filter: Some("status=eq.active"),
            caption: "rentals in progress",
            badge: true,
        }),
    },
    SectionDef {
        id: "payments",
        title: "Payments",
        subtitle: "Invoices and payment status",
        icon: "card",
        source: Some(CountSource {
            table: "payments",
            filter: Some("status=eq.pending"),
            caption: "payments awaiting settlement",
            badge: true,
        }),
    },
    SectionDef {
        id: "reports",
        title: "Reports",
        subtitle: "Revenue and utilization reports",
        icon: "chart",
        source: None,
    },
    SectionDef { id: "settings", title: "Settings", subtitle: "Workspace preferences", icon: "cog", source: None },
];

pub fn find(id: &str) -> Option<&'static SectionDef> {
    SECTIONS.iter().find(|def| def.id == id)
}

/// The default section's definition.
pub fn default_def() -> &'static SectionDef {
    find(DEFAULT_SECTION).unwrap_or(&SECTIONS[0])
}

/// Build the router's registry from `SECTIONS`, asking `make_loader` for
/// each section's loader.
///
/// # Errors
///
/// Returns a [`RegistryError`] if the table is inconsistent.
pub fn build_registry(make_loader: impl Fn(&'static SectionDef) -> Loader) -> Result<SectionRegistry, RegistryError> {
    let sections = SECTIONS
        .iter()
        .map(|def| Section::new(def.id, def.title, def.subtitle, def.icon, make_loader(def)))
        .collect();
    SectionRegistry::new(sections, DEFAULT_SECTION)
}
