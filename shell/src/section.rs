//! Section metadata and the immutable registry the router resolves against.
//!
//! DESIGN
//! ======
//! The registry is validated once and then shared behind an `Arc`. Lookups
//! return `Option` so unknown ids can never be confused with a real section,
//! and fragment resolution always lands on a registered section.

#[cfg(test)]
#[path = "section_test.rs"]
mod section_test;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::RegistryError;

/// Zero-argument data loader for a section.
///
/// Invoked by the router after the section becomes visible. The router does
/// not wait for or inspect the outcome; loaders that do async work spawn it
/// themselves and report failures through their own UI.
#[derive(Clone)]
pub struct Loader(Arc<dyn Fn() + Send + Sync>);

impl Loader {
    pub fn new(f: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// Loader for sections with nothing to fetch.
    #[must_use]
    pub fn noop() -> Self {
        Self::new(|| {})
    }

    pub fn invoke(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Loader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Loader")
    }
}

/// One navigable screen of the dashboard.
#[derive(Clone, Debug)]
pub struct Section {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    /// Symbolic icon name, rendered by the UI layer.
    pub icon: String,
    pub loader: Loader,
}

impl Section {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        subtitle: impl Into<String>,
        icon: impl Into<String>,
        loader: Loader,
    ) -> Self {
        Self { id: id.into(), title: title.into(), subtitle: subtitle.into(), icon: icon.into(), loader }
    }
}

/// Ordered, read-only section table with a designated default.
#[derive(Debug)]
pub struct SectionRegistry {
    sections: Vec<Section>,
    index: HashMap<String, usize>,
    default_index: usize,
}

impl SectionRegistry {
    /// Validate and build the registry.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] if the list is empty, an id is blank or
    /// repeated, or `default_id` is not among the sections.
    pub fn new(sections: Vec<Section>, default_id: &str) -> Result<Self, RegistryError> {
        if sections.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut index = HashMap::with_capacity(sections.len());
        for (pos, section) in sections.iter().enumerate() {
            if section.id.trim().is_empty() {
                return Err(RegistryError::BlankId);
            }
            if index.insert(section.id.clone(), pos).is_some() {
                return Err(RegistryError::Duplicate(section.id.clone()));
            }
        }

        let Some(&default_index) = index.get(default_id) else {
            return Err(RegistryError::UnknownDefault(default_id.to_owned()));
        };

        Ok(Self { sections, index, default_index })
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Section> {
        self.index.get(id).map(|&pos| &self.sections[pos])
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Section at `index` in registration order.
    #[must_use]
    pub fn nth(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    #[must_use]
    pub fn default_section(&self) -> &Section {
        &self.sections[self.default_index]
    }

    /// Resolve a URL fragment (with or without the leading `#`) to a section.
    /// Empty and unrecognized fragments resolve to the default section.
    #[must_use]
    pub fn resolve(&self, fragment: &str) -> &Section {
        let id = fragment.trim().trim_start_matches('#').trim();
        self.get(id).unwrap_or_else(|| self.default_section())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
