//! Keyboard shortcuts for section navigation.
//!
//! `Alt+1` through `Alt+9` open the nth section in sidebar order and
//! `Escape` closes every overlay. Matching uses `KeyboardEvent.code` so the
//! digit row works regardless of layout or the characters Alt produces.

#[cfg(test)]
#[path = "shortcuts_test.rs"]
mod shortcuts_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Zero-based index into the section list.
    Section(usize),
    CloseModals,
}

/// Modifier state of a key event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

/// Rows shown in the help modal, in the same order as `shortcut_for` checks.
pub const SHORTCUT_HELP: &[(&str, &str)] = &[
    ("Open section 1-9", "Alt + 1 … 9"),
    ("Close dialogs", "Esc"),
    ("Back / forward", "Browser back / forward"),
];

pub fn shortcut_for(code: &str, mods: Modifiers) -> Option<Shortcut> {
    if code == "Escape" && !mods.alt && !mods.ctrl && !mods.meta {
        return Some(Shortcut::CloseModals);
    }
    if !mods.alt || mods.ctrl || mods.meta || mods.shift {
        return None;
    }
    let digit = code.strip_prefix("Digit")?.parse::<usize>().ok()?;
    (1..=9).contains(&digit).then(|| Shortcut::Section(digit - 1))
}
