//! Add Friend Form Component

use leptos::prelude::*;

use crate::api;
use crate::components::spawn_mutation;
use crate::context::use_app_context;
use crate::forms;
use crate::messages;
use crate::models::Friend;
use crate::screen::{Change, ListState};

/// Adds a friend by phone in `+<10-15 digits>` form
#[component]
pub fn AddFriendForm(state: RwSignal<ListState<Friend>>) -> impl IntoView {
    let ctx = use_app_context();
    let (phone, set_phone) = signal(String::new());
    let (invalid, set_invalid) = signal(false);

    let add_friend = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let phone_number = match forms::friend_phone(&phone.get_untracked()) {
            Ok(phone_number) => phone_number,
            Err(_) => {
                set_invalid.set(true);
                ctx.fail(messages::FRIEND_PHONE_INVALID);
                return;
            }
        };
        set_invalid.set(false);

        let api = ctx.api();
        spawn_mutation(
            state,
            async move { api::friends::add_friend(&api, &phone_number).await },
            move |result| match result {
                Ok(friend) => {
                    log::info!("[Friends] added friend {}", friend.id);
                    set_phone.try_set(String::new());
                    ctx.success(messages::FRIEND_ADDED);
                    Some(Change::Append(friend))
                }
                Err(e) => {
                    ctx.report_failure(&e, messages::FRIEND_ADD_FAILED);
                    None
                }
            },
        );
    };

    view! {
        <form class="add-friend-form" on:submit=add_friend>
            <input
                type="tel"
                class=move || if invalid.get() { "field-input invalid" } else { "field-input" }
                placeholder="+1234567890"
                prop:value=move || phone.get()
                on:input=move |ev| set_phone.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || state.with(|s| s.is_mutating() || s.is_loading())>
                "Add friend"
            </button>
            <Show when=move || invalid.get()>
                <span class="field-hint">{messages::FRIEND_PHONE_INVALID}</span>
            </Show>
        </form>
    }
}
