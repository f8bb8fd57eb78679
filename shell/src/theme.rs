//! Light/dark theme resolution over a persisted preference store.
//!
//! An explicit user choice always wins. Without one, the system appearance
//! decides, and later system changes are followed until the user toggles.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Storage key for the persisted theme.
pub const THEME_STORAGE_KEY: &str = "fleetdesk_theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value written to storage and to the `data-theme` attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Key/value store holding user preferences.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

pub struct ThemePreference<P> {
    store: P,
}

impl<P: PreferenceStore> ThemePreference<P> {
    pub fn new(store: P) -> Self {
        Self { store }
    }

    /// The explicitly chosen theme, if any. Unrecognized values count as none.
    #[must_use]
    pub fn stored(&self) -> Option<Theme> {
        self.store.get(THEME_STORAGE_KEY).as_deref().and_then(Theme::parse)
    }

    /// Theme to apply at page load.
    #[must_use]
    pub fn initial(&self, system_dark: bool) -> Theme {
        self.stored().unwrap_or(Theme::from_dark(system_dark))
    }

    /// Flip `current`, persist the result, and return it.
    pub fn toggle(&mut self, current: Theme) -> Theme {
        let next = current.toggled();
        self.store.set(THEME_STORAGE_KEY, next.as_str());
        next
    }

    /// Theme to apply after a system appearance change, or `None` when an
    /// explicit preference pins the theme.
    #[must_use]
    pub fn on_system_change(&self, prefers_dark: bool) -> Option<Theme> {
        match self.stored() {
            Some(_) => None,
            None => Some(Theme::from_dark(prefers_dark)),
        }
    }
}
