//! Event Detail Component
//!
//! Items attached to one event, a selector for attaching more, and the
//! rename/delete actions. Changes are mirrored into the parent list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::{settle_delete, spawn_mutation, ConfirmDialog, ItemCard};
use crate::context::use_app_context;
use crate::forms::EventDraft;
use crate::messages;
use crate::models::Event;
use crate::screen::{Change, EventDetailState, ListState, LoadPhase};

#[component]
pub fn EventDetail(
    event: Event,
    state: RwSignal<ListState<Event>>,
    #[prop(into)] on_back: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let event_id = event.id;
    let detail = RwSignal::new(EventDetailState::new(event));
    let (renaming, set_renaming) = signal(false);
    let (new_title, set_new_title) = signal(String::new());
    let (deleting, set_deleting) = signal(false);

    // Load the user's items to compute what can still be attached
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api::items::list_items(&api).await {
                Ok(items) => {
                    detail.try_update(|d| d.set_candidates(&items));
                }
                Err(e) => {
                    ctx.report_failure(&e, messages::FETCH_ITEMS_FAILED);
                    detail.try_update(|d| d.candidates_failed(e.user_message(messages::FETCH_ITEMS_FAILED)));
                }
            }
        });
    });

    let busy = move || state.with(|s| s.is_mutating());

    let attach_selected = move |_: web_sys::MouseEvent| {
        let Some(item_id) = detail.with_untracked(|d| d.selected()) else { return };
        let api = ctx.api();
        spawn_mutation(
            state,
            async move { api::events::attach_item(&api, event_id, item_id).await },
            move |result| match result {
                Ok(()) => {
                    log::info!("[Events] attached item {} to event {}", item_id, event_id);
                    ctx.success(messages::ITEM_ADDED_TO_EVENT);
                    detail
                        .try_update(|d| {
                            d.attach(item_id);
                            d.event.clone()
                        })
                        .map(Change::Replace)
                }
                Err(e) => {
                    ctx.report_failure(&e, messages::ITEM_ADD_TO_EVENT_FAILED);
                    None
                }
            },
        );
    };

    let save_title = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = match (EventDraft { title: new_title.get_untracked() }).check() {
            Ok(body) => body,
            Err(_) => {
                ctx.fail(messages::EVENT_TITLE_INVALID);
                return;
            }
        };
        let api = ctx.api();
        spawn_mutation(
            state,
            async move { api::events::update_event(&api, event_id, &body).await },
            move |result| match result {
                Ok(updated) => {
                    set_renaming.try_set(false);
                    ctx.success(messages::EVENT_UPDATED);
                    detail
                        .try_update(|d| {
                            d.rename(updated);
                            d.event.clone()
                        })
                        .map(Change::Replace)
                }
                Err(e) => {
                    log::error!("[Events] rename {} failed: {}", event_id, e);
                    ctx.fail(messages::EVENT_UPDATE_FAILED);
                    None
                }
            },
        );
    };

    let confirm_delete = move |_: ()| {
        let api = ctx.api();
        spawn_mutation(
            state,
            async move { api::events::delete_event(&api, event_id).await },
            move |result| {
                settle_delete(
                    result,
                    event_id,
                    move || {
                        set_deleting.try_set(false);
                        ctx.success(messages::EVENT_DELETED);
                        on_back.run(());
                    },
                    move |e: ApiError| {
                        log::error!("[Events] delete {} failed: {}", event_id, e);
                        ctx.fail(messages::EVENT_DELETE_FAILED);
                    },
                )
            },
        );
    };

    let attached_items = move || {
        let items = detail.with(|d| d.attached().to_vec());
        if items.is_empty() {
            return view! { <p class="empty">{messages::NO_ITEMS_IN_EVENT}</p> }.into_any();
        }
        view! {
            <ul class="item-list">
                {items.into_iter().map(|item| view! { <li><ItemCard item=item /></li> }).collect_view()}
            </ul>
        }
        .into_any()
    };

    let selector = move || {
        match detail.with(|d| d.candidates().clone()) {
            LoadPhase::Idle | LoadPhase::Loading => {
                return view! { <p class="status">{messages::LOADING}</p> }.into_any();
            }
            LoadPhase::Failed(message) => {
                return view! { <p class="status error">{message}</p> }.into_any();
            }
            LoadPhase::Loaded => {}
        }
        let available = detail.with(|d| d.available().to_vec());
        if available.is_empty() {
            return ().into_any();
        }
        view! {
            <div class="attach-item">
                <select
                    prop:value=move || detail.with(|d| d.selected().map(|id| id.to_string()).unwrap_or_default())
                    on:change=move |ev| {
                        if let Ok(id) = event_target_value(&ev).parse::<u32>() {
                            detail.update(|d| d.select(id));
                        }
                    }
                >
                    {available.into_iter().map(|item| view! {
                        <option value=item.id.to_string()>{item.title}</option>
                    }).collect_view()}
                </select>
                <button disabled=busy on:click=attach_selected>"Add to event"</button>
            </div>
        }
        .into_any()
    };

    view! {
        <div class="event-detail">
            <button class="back-btn" on:click=move |_| on_back.run(())>"Back to events"</button>
            <h2>{move || detail.with(|d| d.event.title.clone())}</h2>
            <div class="event-actions">
                <button
                    class="edit-btn"
                    on:click=move |_| {
                        set_new_title.set(detail.with_untracked(|d| EventDraft::from_event(&d.event).title));
                        set_renaming.set(true);
                    }
                >
                    "Edit"
                </button>
                <button class="delete-btn" on:click=move |_| set_deleting.set(true)>"Delete"</button>
            </div>

            <h3>"Wishes in this event"</h3>
            {attached_items}
            {selector}

            <Show when=move || renaming.get()>
                <div class="dialog-backdrop">
                    <form class="dialog" on:submit=save_title>
                        <h3>"Edit event"</h3>
                        <input
                            type="text"
                            class="field-input"
                            prop:value=move || new_title.get()
                            on:input=move |ev| set_new_title.set(event_target_value(&ev))
                        />
                        <div class="dialog-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| set_renaming.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" disabled=busy>"Save"</button>
                        </div>
                    </form>
                </div>
            </Show>

            <ConfirmDialog
                open=deleting
                message=messages::CONFIRM_DELETE_EVENT
                busy=Signal::derive(busy)
                on_confirm=confirm_delete
                on_cancel=move |_: ()| set_deleting.set(false)
            />
        </div>
    }
}
