//! Section loaders: fetch a section's record count once it is shown.
//!
//! ERROR HANDLING
//! ==============
//! A failed fetch marks the section `Failed`, logs a warning and opens the
//! disposable load-error dialog. Navigation never sees the outcome.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use leptos::prelude::*;
use shell::Loader;

use super::{CountSource, LOAD_ERROR_DIALOG, SectionDef};
use crate::net::backend::BackendClient;
use crate::router::RouterHandle;
use crate::state::sections::{LoadStatus, SectionsState};
use crate::state::shell::{Dialog, ShellState};

/// Everything a loader writes to.
#[derive(Clone)]
pub struct LoaderContext {
    pub router: RouterHandle,
    pub shell: RwSignal<ShellState>,
    pub sections: RwSignal<SectionsState>,
    pub backend: BackendClient,
}

/// Loader for `def`. Sections without a count source are ready immediately.
pub fn section_loader(def: &'static SectionDef, ctx: LoaderContext) -> Loader {
    let Some(source) = def.source else {
        return Loader::new(move || ctx.sections.update(|s| s.set(def.id, LoadStatus::Ready(None))));
    };

    Loader::new(move || {
        begin_load(def, &ctx);
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            let result = ctx.backend.count(source.table, source.filter).await;
            finish_load(def, source, &ctx, result);
        });
    })
}

fn begin_load(def: &'static SectionDef, ctx: &LoaderContext) {
    ctx.sections.update(|s| s.set(def.id, LoadStatus::Loading));
}

fn finish_load(def: &'static SectionDef, source: CountSource, ctx: &LoaderContext, result: Result<u64, String>) {
    match result {
        Ok(count) => {
            ctx.sections.update(|s| s.set(def.id, LoadStatus::Ready(Some(count))));
            if source.badge {
                let _ = ctx.router.update_badge(def.id, badge_count(count));
            }
        }
        Err(message) => {
            log::warn!("{} loader failed: {message}", def.id);
            ctx.sections.update(|s| s.set(def.id, LoadStatus::Failed(message.clone())));
            ctx.shell.update(|s| s.open_dialog(LOAD_ERROR_DIALOG, load_error_dialog(def, &message)));
        }
    }
}

fn badge_count(count: u64) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

fn load_error_dialog(def: &SectionDef, message: &str) -> Dialog {
    Dialog { title: format!("Could not load {}", def.title), message: message.to_owned() }
}
