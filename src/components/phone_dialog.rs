//! Phone Dialog Component
//!
//! Manual phone entry, plus the save path shared with host-provided numbers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{use_app_context, AppContext};
use crate::forms;
use crate::messages;
use crate::store::{store_update_user, AppStateStoreFields};

/// Persist a phone number and swap in the returned profile.
/// `on_finished` receives whether the update succeeded.
pub fn persist_phone(ctx: AppContext, phone: String, on_finished: impl FnOnce(bool) + 'static) {
    let api = ctx.api();
    spawn_local(async move {
        match api::users::set_phone(&api, &phone).await {
            Ok(user) => {
                log::info!("[Phone] saved for user {}", user.id);
                store_update_user(&ctx.store, user);
                ctx.success(messages::PHONE_UPDATED);
                on_finished(true);
            }
            Err(e) => {
                log::error!("[Phone] update failed: {}", e);
                ctx.fail(messages::PHONE_UPDATE_FAILED);
                on_finished(false);
            }
        }
    });
}

#[component]
pub fn PhoneDialog() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let (phone, set_phone) = signal(String::new());
    let (saving, set_saving) = signal(false);

    let close = move || {
        store.phone_dialog_open().set(false);
        set_phone.set(String::new());
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let normalized = match forms::manual_phone(&phone.get_untracked()) {
            Ok(normalized) => normalized,
            Err(_) => {
                ctx.fail(messages::PHONE_REQUIRED);
                return;
            }
        };
        set_saving.set(true);
        persist_phone(ctx, normalized, move |saved| {
            set_saving.try_set(false);
            if saved {
                store.phone_dialog_open().try_set(false);
                set_phone.try_set(String::new());
            }
        });
    };

    view! {
        <Show when=move || store.phone_dialog_open().get()>
            <div class="dialog-backdrop">
                <form class="dialog phone-dialog" on:submit=submit>
                    <h3>"Enter your phone number"</h3>
                    <p class="dialog-help">"Include the country code, e.g. +1234567890"</p>
                    <input
                        type="tel"
                        class="field-input"
                        placeholder="+1234567890"
                        prop:value=move || phone.get()
                        on:input=move |ev| set_phone.set(event_target_value(&ev))
                    />
                    <div class="dialog-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| close()>"Cancel"</button>
                        <button type="submit" disabled=move || saving.get()>"Save"</button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
