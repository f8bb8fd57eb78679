//! Modal listing dashboard keyboard shortcuts.

use leptos::prelude::*;

use crate::sections::SECTIONS;
use crate::util::shortcuts::SHORTCUT_HELP;

/// Fullscreen modal with the shortcut table.
#[component]
pub fn HelpModal(on_close: Callback<()>) -> impl IntoView {
    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());

    let section_rows = SECTIONS
        .iter()
        .take(9)
        .enumerate()
        .map(|(index, def)| {
            view! {
                <tr>
                    <td>{format!("Open {}", def.title)}</td>
                    <td class="help-modal__keys">{format!("Alt + {}", index + 1)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <div id="help-modal" class="help-modal__backdrop" on:click=on_backdrop>
            <div class="help-modal" on:click=move |ev| ev.stop_propagation() tabindex="0">
                <div class="help-modal__header">
                    <h2>"Keyboard shortcuts"</h2>
                    <button class="help-modal__close" on:click=on_close_click title="Close help">
                        "✕"
                    </button>
                </div>
                <table class="help-modal__table">
                    <thead>
                        <tr>
                            <th>"Action"</th>
                            <th>"Shortcut"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {SHORTCUT_HELP
                            .iter()
                            .map(|(action, keys)| {
                                view! {
                                    <tr>
                                        <td>{*action}</td>
                                        <td class="help-modal__keys">{*keys}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                        {section_rows}
                    </tbody>
                </table>
            </div>
        </div>
    }
}
