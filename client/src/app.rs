//! Root application component: contexts, router installation, page layout.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use shell::Router;

use crate::components::{dialog_host::DialogHost, page_header::PageHeader, section_view::SectionViews, sidebar::Sidebar};
use crate::net::backend::{BackendClient, BackendConfig};
use crate::router::RouterHandle;
use crate::sections::loader::{LoaderContext, section_loader};
use crate::sections::{DISPOSABLE_DIALOGS, build_registry, default_def};
use crate::state::{sections::SectionsState, shell::ShellState, ui::UiState};
use crate::util::surface::{SignalSurface, apply_scroll_lock};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state, builds the section registry and installs the
/// router. Browser bindings are attached once, after hydration.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let landing = default_def();
    let shell = RwSignal::new(ShellState::landing(landing.id, landing.title, landing.subtitle));
    let sections = RwSignal::new(SectionsState::default());
    let ui = RwSignal::new(UiState::default());
    let backend = BackendClient::new(BackendConfig::from_build_env());
    let router = RouterHandle::new();

    provide_context(shell);
    provide_context(sections);
    provide_context(ui);
    provide_context(backend.clone());
    provide_context(router);

    let ctx = LoaderContext { router, shell, sections, backend };
    match build_registry(|def| section_loader(def, ctx.clone())) {
        Ok(registry) => {
            let surface = SignalSurface::new(shell, registry.iter().map(|section| section.id.clone()));
            router.install(Router::new(Arc::new(registry), surface).with_disposable_dialogs(DISPOSABLE_DIALOGS.iter().copied()));
        }
        Err(e) => log::error!("section table rejected: {e}"),
    }

    // Runs once on the client after hydration.
    Effect::new(move || {
        untrack(|| {
            let theme = crate::util::dark_mode::read_preference();
            crate::util::dark_mode::apply(theme);
            ui.update(|u| {
                u.theme = theme;
                u.sidebar_collapsed = crate::util::ui_persistence::load_sidebar_collapsed();
            });
            crate::util::dark_mode::watch_system(move |theme| ui.update(|u| u.theme = theme));
            router.bind_browser();
        });
    });

    Effect::new(move || apply_scroll_lock(shell.with(|s| s.scroll_locked)));

    let page_title = move || shell.with(|s| format!("{} · Fleetdesk", s.header_title));

    view! {
        <Stylesheet id="leptos" href="/pkg/fleetdesk.css"/>
        <Title text=page_title/>

        <div class="app-shell" class:app-shell--collapsed=move || ui.get().sidebar_collapsed>
            <Sidebar/>
            <main class="app-main">
                <PageHeader/>
                <div class="app-main__content">
                    <SectionViews/>
                </div>
            </main>
        </div>
        <DialogHost/>
    }
}
