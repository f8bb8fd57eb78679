use super::*;

fn dialog() -> Dialog {
    Dialog { title: "Could not load Rentals".to_owned(), message: "request failed: 503".to_owned() }
}

#[test]
fn default_state_has_nothing_open() {
    let state = ShellState::default();
    assert!(state.active_nav.is_none());
    assert!(state.visible_region.is_none());
    assert!(state.open_overlays.is_empty());
    assert!(state.dialogs.is_empty());
    assert!(!state.scroll_locked);
}

#[test]
fn landing_marks_section_active_and_visible() {
    let state = ShellState::landing("dashboard", "Dashboard", "Fleet overview");
    assert!(state.is_nav_active("dashboard"));
    assert!(state.is_region_visible("dashboard"));
    assert!(!state.is_region_visible("rentals"));
    assert_eq!(state.header_title, "Dashboard");
    assert_eq!(state.header_subtitle, "Fleet overview");
}

#[test]
fn open_overlay_sets_scroll_lock() {
    let mut state = ShellState::default();
    state.open_overlay("help-modal");
    assert!(state.is_overlay_open("help-modal"));
    assert!(state.scroll_locked);
}

#[test]
fn close_overlay_keeps_lock_while_dialog_present() {
    let mut state = ShellState::default();
    state.open_overlay("help-modal");
    state.open_dialog("load-error-dialog", dialog());

    state.close_overlay("help-modal");
    assert!(state.scroll_locked);

    state.dismiss_dialog("load-error-dialog");
    assert!(!state.scroll_locked);
    assert!(state.dialogs.is_empty());
}

#[test]
fn open_dialog_replaces_same_id() {
    let mut state = ShellState::default();
    state.open_dialog("load-error-dialog", dialog());
    let second = Dialog { title: "Could not load Payments".to_owned(), message: "timeout".to_owned() };
    state.open_dialog("load-error-dialog", second.clone());
    assert_eq!(state.dialogs.len(), 1);
    assert_eq!(state.dialogs.get("load-error-dialog"), Some(&second));
}
