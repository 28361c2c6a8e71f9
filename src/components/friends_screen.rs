//! Friends Screen
//!
//! Friend list with add-by-phone, remove, and drill-down into a friend's wishlist.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ApiError};
use crate::components::{settle_delete, spawn_mutation, AddFriendForm, ConfirmDialog};
use crate::context::use_app_context;
use crate::messages;
use crate::models::Friend;
use crate::screen::{ListState, LoadPhase};
use crate::store::View;

#[component]
pub fn FriendsScreen() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(ListState::<Friend>::new());
    let (deleting, set_deleting) = signal::<Option<u32>>(None);

    // Load on mount
    Effect::new(move |_| {
        state.update(|s| s.begin_load());
        let api = ctx.api();
        spawn_local(async move {
            let result = api::friends::list_friends(&api).await.map_err(|e| {
                log::error!("[Friends] load failed: {}", e);
                messages::FETCH_FRIENDS_FAILED.to_string()
            });
            state.try_update(|s| s.finish_load(result));
        });
    });

    let confirm_delete = move |_: ()| {
        let Some(friend_id) = deleting.get_untracked() else { return };
        let api = ctx.api();
        spawn_mutation(
            state,
            async move { api::friends::remove_friend(&api, friend_id).await },
            move |result| {
                settle_delete(
                    result,
                    friend_id,
                    move || {
                        set_deleting.try_set(None);
                        ctx.success(messages::FRIEND_DELETED);
                    },
                    move |e: ApiError| {
                        log::error!("[Friends] delete {} failed: {}", friend_id, e);
                        ctx.fail(messages::FRIEND_DELETE_FAILED);
                    },
                )
            },
        );
    };

    let friend_list = move || match state.with(|s| s.phase().clone()) {
        LoadPhase::Idle | LoadPhase::Loading => {
            view! { <p class="status">{messages::LOADING}</p> }.into_any()
        }
        LoadPhase::Failed(message) => view! { <p class="status error">{message}</p> }.into_any(),
        LoadPhase::Loaded => {
            let friends = state.with(|s| s.entries().to_vec());
            if friends.is_empty() {
                return view! { <p class="empty">{messages::NO_FRIENDS}</p> }.into_any();
            }
            view! {
                <ul class="friend-list">
                    {friends.into_iter().map(|friend| {
                        let id = friend.id;
                        let name = friend.name.clone();
                        let avatar = friend.avatar_url.clone();
                        view! {
                            <li
                                class="friend-row"
                                on:click=move |_| ctx.navigate(View::FriendWishlist(friend.clone()))
                            >
                                {avatar.map(|src| view! { <img class="avatar" src=src alt="" /> })}
                                <span class="friend-name">{name}</span>
                                <button
                                    class="delete-btn"
                                    on:click=move |ev| {
                                        ev.stop_propagation();
                                        set_deleting.set(Some(id));
                                    }
                                >
                                    "Remove"
                                </button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            }.into_any()
        }
    };

    view! {
        <section class="screen friends-screen">
            <h2>"Friends"</h2>
            <AddFriendForm state=state />
            {friend_list}
            <ConfirmDialog
                open=Signal::derive(move || deleting.get().is_some())
                message=messages::CONFIRM_DELETE_FRIEND
                busy=Signal::derive(move || state.with(|s| s.is_mutating()))
                on_confirm=confirm_delete
                on_cancel=move |_: ()| set_deleting.set(None)
            />
        </section>
    }
}
