//! Events Screen
//!
//! The user's events; selecting one opens its detail view in place.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CreateEventForm, EventDetail};
use crate::context::use_app_context;
use crate::list_ops;
use crate::messages;
use crate::models::Event;
use crate::screen::{ListState, LoadPhase};

#[component]
pub fn EventsScreen() -> impl IntoView {
    let ctx = use_app_context();
    let state = RwSignal::new(ListState::<Event>::new());
    let (selected, set_selected) = signal::<Option<u32>>(None);

    // Load on mount
    Effect::new(move |_| {
        let Some(user_id) = ctx.user_id_untracked() else { return };
        state.update(|s| s.begin_load());
        let api = ctx.api();
        spawn_local(async move {
            let result = api::users::user_events(&api, user_id).await.map_err(|e| {
                log::error!("[Events] load failed: {}", e);
                messages::FETCH_EVENTS_FAILED.to_string()
            });
            state.try_update(|s| s.finish_load(result));
        });
    });

    let event_list = move || match state.with(|s| s.phase().clone()) {
        LoadPhase::Idle | LoadPhase::Loading => {
            view! { <p class="status">{messages::LOADING}</p> }.into_any()
        }
        LoadPhase::Failed(message) => view! { <p class="status error">{message}</p> }.into_any(),
        LoadPhase::Loaded => {
            let events = state.with(|s| s.entries().to_vec());
            if events.is_empty() {
                return view! { <p class="empty">{messages::NO_EVENTS}</p> }.into_any();
            }
            view! {
                <ul class="event-list">
                    {events.into_iter().map(|event| {
                        let id = event.id;
                        view! {
                            <li class="event-row" on:click=move |_| set_selected.set(Some(id))>
                                <span class="event-title">{event.title}</span>
                                {event.date.map(|d| view! { <span class="event-date">{d}</span> })}
                                <span class="event-count">{format!("{} wishes", event.items.len())}</span>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            }.into_any()
        }
    };

    // Only re-render the detail when the selection changes
    let detail = move || {
        let id = selected.get()?;
        let event = state.with_untracked(|s| list_ops::find_by_id(s.entries(), id).cloned())?;
        Some(view! {
            <EventDetail event=event state=state on_back=move |_: ()| set_selected.set(None) />
        })
    };

    view! {
        <section class="screen events-screen">
            <Show
                when=move || selected.get().is_some()
                fallback=move || view! {
                    <h2>"My events"</h2>
                    <CreateEventForm state=state />
                    {event_list}
                }
            >
                {detail}
            </Show>
        </section>
    }
}
