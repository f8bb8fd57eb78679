use super::*;

#[test]
fn ui_state_default_is_light_and_expanded() {
    let state = UiState::default();
    assert_eq!(state.theme, Theme::Light);
    assert!(!state.is_dark());
    assert!(!state.sidebar_collapsed);
}

#[test]
fn ui_state_is_dark_follows_theme() {
    let state = UiState { theme: Theme::Dark, ..UiState::default() };
    assert!(state.is_dark());
}
