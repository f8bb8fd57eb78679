//! Content regions, one per section; only the routed one is shown.

use leptos::prelude::*;

use crate::components::page_header::ThemeToggle;
use crate::net::backend::BackendClient;
use crate::sections::{SECTIONS, SectionDef};
use crate::state::sections::{LoadStatus, SectionsState};
use crate::state::shell::ShellState;

#[component]
pub fn SectionViews() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    SECTIONS
        .iter()
        .map(|def| {
            let id = def.id;
            let visible = move || shell.with(|s| s.is_region_visible(id));
            view! {
                <section
                    id=format!("section-{id}")
                    class="content-section"
                    class:content-section--active=visible
                    hidden=move || !visible()
                >
                    <SectionBody def=def/>
                </section>
            }
        })
        .collect_view()
}

#[component]
fn SectionBody(def: &'static SectionDef) -> impl IntoView {
    if def.id == "settings" {
        return view! { <SettingsPanel/> }.into_any();
    }

    let sections = expect_context::<RwSignal<SectionsState>>();
    let caption = def.source.map_or("", |s| s.caption);

    let body = move || match sections.with(|s| s.status(def.id)) {
        LoadStatus::Idle | LoadStatus::Loading => {
            view! { <p class="section-body__hint">"Loading…"</p> }.into_any()
        }
        LoadStatus::Ready(Some(count)) => view! {
            <div class="stat-card">
                <span class="stat-card__value">{count}</span>
                <span class="stat-card__caption">{caption}</span>
            </div>
        }
        .into_any(),
        LoadStatus::Ready(None) => view! {
            <p class="section-body__hint">{format!("{} is ready.", def.title)}</p>
        }
        .into_any(),
        LoadStatus::Failed(message) => view! {
            <p class="section-body__error">{message}</p>
        }
        .into_any(),
    };

    view! { <div class="section-body">{body}</div> }.into_any()
}

/// Settings: appearance and the backend endpoint this build talks to.
#[component]
fn SettingsPanel() -> impl IntoView {
    let backend = expect_context::<BackendClient>();
    let endpoint = backend.endpoint().to_owned();

    view! {
        <div class="section-body settings-panel">
            <div class="settings-panel__row">
                <span class="settings-panel__label">"Appearance"</span>
                <ThemeToggle/>
            </div>
            <div class="settings-panel__row">
                <span class="settings-panel__label">"Data endpoint"</span>
                <code class="settings-panel__value">{endpoint}</code>
            </div>
        </div>
    }
}
