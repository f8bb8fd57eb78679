//! Local UI chrome state (theme, sidebar width).
//!
//! DESIGN
//! ======
//! Keeps presentation preferences out of the navigation model (`shell`) so
//! routing never has to reason about appearance.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use shell::Theme;

/// Presentation preferences shared by the header, sidebar and settings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
}

impl UiState {
    pub fn is_dark(&self) -> bool {
        self.theme.is_dark()
    }
}
