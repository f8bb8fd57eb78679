//! Header above the content area: section title, subtitle and page actions.

use leptos::prelude::*;

use crate::sections::HELP_MODAL;
use crate::state::shell::ShellState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

#[component]
pub fn PageHeader() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    let title = move || shell.with(|s| s.header_title.clone());
    let subtitle = move || shell.with(|s| s.header_subtitle.clone());
    let on_help = move |_| shell.update(|s| s.open_overlay(HELP_MODAL));

    view! {
        <header class="page-header">
            <div class="page-header__text">
                <h1 id="page-title" class="page-header__title">{title}</h1>
                <p id="page-subtitle" class="page-header__subtitle">{subtitle}</p>
            </div>
            <span class="page-header__spacer"></span>
            <button class="btn page-header__help" on:click=on_help title="Keyboard shortcuts">
                "?"
            </button>
            <ThemeToggle/>
        </header>
    }
}

/// Light/dark toggle; persists the explicit choice.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    view! {
        <button class="btn theme-toggle" on:click=on_toggle title="Toggle dark mode">
            <span id="theme-icon">{move || if ui.get().is_dark() { "☀" } else { "☾" }}</span>
        </button>
    }
}
