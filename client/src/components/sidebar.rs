//! Sidebar navigation with one entry per section.
//!
//! DESIGN
//! ======
//! Entries are plain `#section` links so they work before hydration and in
//! new tabs. After hydration a click is routed through `RouterHandle`, which
//! owns highlighting; the sidebar only reads it back from `ShellState`.

use leptos::prelude::*;

use crate::components::icons::render_icon;
use crate::router::RouterHandle;
use crate::sections::SECTIONS;
use crate::state::shell::ShellState;
use crate::state::ui::UiState;
use crate::util::ui_persistence::save_sidebar_collapsed;

#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let router = expect_context::<RouterHandle>();

    let entries = SECTIONS
        .iter()
        .enumerate()
        .map(|(index, def)| {
            let id = def.id;
            let is_active = move || shell.with(|s| s.is_nav_active(id));
            let badge = move || shell.with(|s| s.badges.get(id).cloned());
            let on_click = move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                router.select(id);
            };
            let tooltip = format!("{} (Alt+{})", def.title, index + 1);

            view! {
                <a
                    href=format!("#{id}")
                    class="sidebar__link"
                    class:sidebar__link--active=is_active
                    attr:data-section=id
                    title=tooltip
                    on:click=on_click
                >
                    <span class="sidebar__icon">{render_icon(def.icon)}</span>
                    <span class="sidebar__label">{def.title}</span>
                    {move || badge().map(|label| view! { <span class="sidebar__badge">{label}</span> })}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let on_collapse = move |_| {
        ui.update(|u| u.sidebar_collapsed = !u.sidebar_collapsed);
        save_sidebar_collapsed(ui.get_untracked().sidebar_collapsed);
    };

    view! {
        <nav class="sidebar" class:sidebar--collapsed=move || ui.get().sidebar_collapsed>
            <div class="sidebar__brand">
                <span class="sidebar__logo">{render_icon("car")}</span>
                <span class="sidebar__label">"Fleetdesk"</span>
            </div>
            <div class="sidebar__links">{entries}</div>
            <button class="sidebar__collapse" on:click=on_collapse title="Collapse sidebar">
                {move || if ui.get().sidebar_collapsed { "»" } else { "«" }}
            </button>
        </nav>
    }
}
