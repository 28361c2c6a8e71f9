//! Items Screen
//!
//! The user's own wishlist: create, import, edit and delete items.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::{settle_delete, spawn_mutation, AddItemForm, ConfirmDialog, ItemCard, ItemEditDialog};
use crate::context::use_app_context;
use crate::messages;
use crate::models::Item;
use crate::screen::{ListState, LoadPhase};

#[component]
pub fn ItemsScreen() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(ListState::<Item>::new());
    let (editing, set_editing) = signal::<Option<Item>>(None);
    let (deleting, set_deleting) = signal::<Option<u32>>(None);

    // Load on mount
    Effect::new(move |_| {
        state.update(|s| s.begin_load());
        let api = ctx.api();
        spawn_local(async move {
            let result = api::items::list_items(&api).await.map_err(|e| {
                log::error!("[Items] load failed: {}", e);
                messages::FETCH_ITEMS_FAILED.to_string()
            });
            if let Ok(items) = &result {
                log::info!("[Items] loaded {} items", items.len());
            }
            state.try_update(|s| s.finish_load(result));
        });
    });

    let confirm_delete = move |_: ()| {
        let Some(item_id) = deleting.get_untracked() else { return };
        let api = ctx.api();
        spawn_mutation(
            state,
            async move { api::items::delete_item(&api, item_id).await },
            move |result| {
                settle_delete(
                    result,
                    item_id,
                    move || {
                        set_deleting.try_set(None);
                        ctx.success(messages::ITEM_DELETED);
                    },
                    move |e: ApiError| {
                        log::error!("[Items] delete {} failed: {}", item_id, e);
                        ctx.fail(messages::ITEM_DELETE_FAILED);
                    },
                )
            },
        );
    };

    let items_view = move || match state.with(|s| s.phase().clone()) {
        LoadPhase::Idle | LoadPhase::Loading => {
            view! { <p class="status">{messages::LOADING}</p> }.into_any()
        }
        LoadPhase::Failed(message) => view! { <p class="status error">{message}</p> }.into_any(),
        LoadPhase::Loaded => {
            let items = state.with(|s| s.entries().to_vec());
            if items.is_empty() {
                return view! { <p class="empty">{messages::NO_ITEMS}</p> }.into_any();
            }
            view! {
                <ul class="item-list">
                    {items.into_iter().map(|item| {
                        let id = item.id;
                        let for_edit = item.clone();
                        view! {
                            <li>
                                <ItemCard item=item>
                                    <button
                                        class="edit-btn"
                                        on:click=move |_| set_editing.set(Some(for_edit.clone()))
                                    >
                                        "Edit"
                                    </button>
                                    <button class="delete-btn" on:click=move |_| set_deleting.set(Some(id))>
                                        "Delete"
                                    </button>
                                </ItemCard>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            }.into_any()
        }
    };

    view! {
        <section class="screen items-screen">
            <h2>"My wishes"</h2>
            <AddItemForm state=state />
            {items_view}
            <ItemEditDialog editing=editing set_editing=set_editing state=state />
            <ConfirmDialog
                open=Signal::derive(move || deleting.get().is_some())
                message=messages::CONFIRM_DELETE_ITEM
                busy=Signal::derive(move || state.with(|s| s.is_mutating()))
                on_confirm=confirm_delete
                on_cancel=move |_: ()| set_deleting.set(None)
            />
        </section>
    }
}
