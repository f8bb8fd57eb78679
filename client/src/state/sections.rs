//! Per-section load progress written by section loaders.

#[cfg(test)]
#[path = "sections_test.rs"]
mod sections_test;

use std::collections::BTreeMap;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// The section has not been opened yet.
    #[default]
    Idle,
    Loading,
    /// Loaded; carries the record count for table-backed sections.
    Ready(Option<u64>),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SectionsState {
    statuses: BTreeMap<String, LoadStatus>,
}

impl SectionsState {
    pub fn status(&self, id: &str) -> LoadStatus {
        self.statuses.get(id).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, id: &str, status: LoadStatus) {
        self.statuses.insert(id.to_owned(), status);
    }
}
