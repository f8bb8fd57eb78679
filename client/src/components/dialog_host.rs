//! Renders open overlays and disposable dialogs from `ShellState`.
//!
//! Static overlays stay mounted in the component tree and toggle on
//! `open_overlays`. Disposable dialogs exist only while present in
//! `dialogs`; closing one removes it entirely.

use leptos::prelude::*;

use crate::components::help_modal::HelpModal;
use crate::sections::HELP_MODAL;
use crate::state::shell::{Dialog, ShellState};

#[component]
pub fn DialogHost() -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();

    let help_open = move || shell.with(|s| s.is_overlay_open(HELP_MODAL));
    let on_help_close = Callback::new(move |()| shell.update(|s| s.close_overlay(HELP_MODAL)));

    let dialogs = move || {
        shell
            .with(|s| s.dialogs.iter().map(|(id, d)| (id.clone(), d.clone())).collect::<Vec<_>>())
            .into_iter()
            .map(|(id, dialog)| view! { <DisposableDialog id=id dialog=dialog/> })
            .collect_view()
    };

    view! {
        <Show when=help_open>
            <HelpModal on_close=on_help_close/>
        </Show>
        {dialogs}
    }
}

#[component]
fn DisposableDialog(id: String, dialog: Dialog) -> impl IntoView {
    let shell = expect_context::<RwSignal<ShellState>>();
    let dismiss_id = id.clone();
    let on_dismiss = move |_| shell.update(|s| s.dismiss_dialog(&dismiss_id));

    view! {
        <div id=id class="dialog-backdrop">
            <div class="dialog" role="alertdialog">
                <h2>{dialog.title}</h2>
                <p class="dialog__message">{dialog.message}</p>
                <div class="dialog__actions">
                    <button class="btn" on:click=on_dismiss>"Dismiss"</button>
                </div>
            </div>
        </div>
    }
}
