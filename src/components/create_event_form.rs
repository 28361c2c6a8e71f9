//! Create Event Form Component

use leptos::prelude::*;

use crate::api;
use crate::components::spawn_mutation;
use crate::context::use_app_context;
use crate::forms::EventDraft;
use crate::messages;
use crate::models::Event;
use crate::screen::{Change, ListState};
use crate::validation::ValidationError;

fn title_hint(error: &ValidationError) -> &'static str {
    match error {
        ValidationError::TitleRequired => messages::EVENT_TITLE_REQUIRED,
        _ => messages::EVENT_TITLE_INVALID,
    }
}

#[component]
pub fn CreateEventForm(state: RwSignal<ListState<Event>>) -> impl IntoView {
    let ctx = use_app_context();
    let (title, set_title) = signal(String::new());
    let (error, set_error) = signal::<Option<&'static str>>(None);

    let create_event = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let body = match (EventDraft { title: title.get_untracked() }).check() {
            Ok(body) => body,
            Err(e) => {
                set_error.set(Some(title_hint(&e)));
                ctx.fail(messages::VALIDATION_ERROR);
                return;
            }
        };
        set_error.set(None);

        let api = ctx.api();
        spawn_mutation(
            state,
            async move { api::events::create_event(&api, &body).await },
            move |result| match result {
                Ok(event) => {
                    log::info!("[Events] created event {}", event.id);
                    set_title.try_set(String::new());
                    ctx.success(messages::EVENT_ADDED);
                    Some(Change::Append(event))
                }
                Err(e) => {
                    ctx.report_failure(&e, messages::EVENT_ADD_FAILED);
                    None
                }
            },
        );
    };

    view! {
        <form class="create-event-form" on:submit=create_event>
            <input
                type="text"
                class=move || if error.get().is_some() { "field-input invalid" } else { "field-input" }
                placeholder="New event title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <button type="submit" disabled=move || state.with(|s| s.is_mutating() || s.is_loading())>
                "Create event"
            </button>
            {move || error.get().map(|hint| view! { <span class="field-hint">{hint}</span> })}
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_hint() {
        assert_eq!(title_hint(&ValidationError::TitleRequired), messages::EVENT_TITLE_REQUIRED);
        assert_eq!(title_hint(&ValidationError::TitleTooLong), messages::EVENT_TITLE_INVALID);
    }
}
