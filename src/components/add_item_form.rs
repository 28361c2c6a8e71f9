//! Add Item Form Component
//!
//! Manual create form plus the import-from-link shortcut.

use leptos::prelude::*;

use crate::api;
use crate::components::spawn_mutation;
use crate::context::use_app_context;
use crate::forms::{self, ItemDraft};
use crate::messages;
use crate::models::Item;
use crate::screen::{Change, ListState};
use crate::validation::{Field, FieldErrors};

/// Input with its validation hint
#[component]
pub fn FormField(
    #[prop(into)] label: String,
    field: Field,
    errors: ReadSignal<FieldErrors>,
    value: ReadSignal<String>,
    set_value: WriteSignal<String>,
    #[prop(optional, into)] input_type: Option<String>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let hint = move || errors.with(|e| e.get(field).map(|err| err.hint()));
    let input_class = move || if hint().is_some() { "field-input invalid" } else { "field-input" };
    let input = if multiline {
        view! {
            <textarea
                class=input_class
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        }
        .into_any()
    } else {
        view! {
            <input
                type=input_type.unwrap_or_else(|| "text".to_string())
                class=input_class
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
        }
        .into_any()
    };

    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            {input}
            {move || hint().map(|h| view! { <span class="field-hint">{h}</span> })}
        </label>
    }
}

#[component]
pub fn AddItemForm(state: RwSignal<ListState<Item>>) -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (link, set_link) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());
    let (import_url, set_import_url) = signal(String::new());
    let (import_errors, set_import_errors) = signal(FieldErrors::default());

    let busy = move || state.with(|s| s.is_mutating() || s.is_loading());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft {
            title: title.get_untracked(),
            link: link.get_untracked(),
            price: price.get_untracked(),
            ..Default::default()
        };
        if let Err(field_errors) = draft.check_new() {
            set_errors.set(field_errors);
            ctx.fail(messages::VALIDATION_ERROR);
            return;
        }
        set_errors.set(FieldErrors::default());

        let api = ctx.api();
        let body = draft.to_new_item();
        spawn_mutation(
            state,
            async move { api::items::create_item(&api, &body).await },
            move |result| match result {
                Ok(item) => {
                    log::info!("[Items] created item {}", item.id);
                    set_title.try_set(String::new());
                    set_link.try_set(String::new());
                    set_price.try_set(String::new());
                    ctx.success(messages::ITEM_ADDED);
                    Some(Change::Append(item))
                }
                Err(e) => {
                    ctx.report_failure(&e, messages::ITEM_ADD_FAILED);
                    None
                }
            },
        );
    };

    let import_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let request = match forms::scrape_request(&import_url.get_untracked()) {
            Ok(request) => request,
            Err(error) => {
                let mut field_errors = FieldErrors::default();
                field_errors.push(error);
                set_import_errors.set(field_errors);
                ctx.fail(messages::VALIDATION_ERROR);
                return;
            }
        };
        set_import_errors.set(FieldErrors::default());

        let api = ctx.api();
        spawn_mutation(
            state,
            async move { api::items::import_item(&api, &request).await },
            move |result| match result {
                Ok(item) => {
                    log::info!("[Items] imported item {}", item.id);
                    set_import_url.try_set(String::new());
                    ctx.success(messages::ITEM_IMPORTED);
                    Some(Change::Append(item))
                }
                Err(e) => {
                    ctx.report_failure(&e, messages::ITEM_IMPORT_FAILED);
                    None
                }
            },
        );
    };

    view! {
        <form class="add-item-form" on:submit=create_item>
            <h3>"Add a wish"</h3>
            <FormField label="Title" field=Field::Title errors=errors value=title set_value=set_title />
            <FormField label="Link" field=Field::Link errors=errors value=link set_value=set_link input_type="url" />
            <FormField label="Price" field=Field::Price errors=errors value=price set_value=set_price input_type="number" />
            <button type="submit" disabled=busy>"Add wish"</button>
        </form>
        <form class="import-item-form" on:submit=import_item>
            <FormField
                label="Import from link"
                field=Field::Link
                errors=import_errors
                value=import_url
                set_value=set_import_url
                input_type="url"
            />
            <button type="submit" disabled=busy>"Import"</button>
        </form>
    }
}
