//! Confirm Dialog Component
//!
//! Modal yes/no prompt used before destructive actions.

use leptos::prelude::*;

/// Modal confirmation dialog
///
/// # Arguments
/// * `open` - Whether the dialog is shown
/// * `message` - Question to ask
/// * `busy` - Disables the confirm button while the request runs
/// * `on_confirm` / `on_cancel` - Button callbacks
#[component]
pub fn ConfirmDialog(
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] message: String,
    #[prop(into, optional)] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
                <div class="dialog" on:click=|ev| ev.stop_propagation()>
                    <p class="dialog-message">{message.clone()}</p>
                    <div class="dialog-actions">
                        <button class="cancel-btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button
                            class="danger-btn"
                            disabled=move || busy.get()
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_confirm.run(());
                            }
                        >
                            "Delete"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
