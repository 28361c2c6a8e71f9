//! Item Edit Dialog
//!
//! Modal editor for title, link, price, description and note.

use leptos::prelude::*;

use crate::api;
use crate::components::{spawn_mutation, FormField};
use crate::context::use_app_context;
use crate::forms::ItemDraft;
use crate::messages;
use crate::models::Item;
use crate::screen::{Change, ListState};
use crate::validation::{Field, FieldErrors};

#[component]
pub fn ItemEditDialog(
    editing: ReadSignal<Option<Item>>,
    set_editing: WriteSignal<Option<Item>>,
    state: RwSignal<ListState<Item>>,
) -> impl IntoView {
    let ctx = use_app_context();

    let (title, set_title) = signal(String::new());
    let (link, set_link) = signal(String::new());
    let (price, set_price) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (note, set_note) = signal(String::new());
    let (errors, set_errors) = signal(FieldErrors::default());

    // Reset fields whenever a new item is opened
    Effect::new(move |_| {
        if let Some(item) = editing.get() {
            let draft = ItemDraft::from_item(&item);
            set_title.set(draft.title);
            set_link.set(draft.link);
            set_price.set(draft.price);
            set_description.set(draft.description);
            set_note.set(draft.note);
            set_errors.set(FieldErrors::default());
        }
    });

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(item) = editing.get_untracked() else { return };
        let draft = ItemDraft {
            title: title.get_untracked(),
            link: link.get_untracked(),
            price: price.get_untracked(),
            description: description.get_untracked(),
            note: note.get_untracked(),
        };
        if let Err(field_errors) = draft.check() {
            set_errors.set(field_errors);
            ctx.fail(messages::VALIDATION_ERROR);
            return;
        }

        let api = ctx.api();
        let changes = draft.to_changes();
        spawn_mutation(
            state,
            async move { api::items::update_item(&api, item.id, &changes).await },
            move |result| match result {
                Ok(updated) => {
                    set_editing.try_set(None);
                    ctx.success(messages::ITEM_UPDATED);
                    Some(Change::Replace(updated))
                }
                Err(e) => {
                    log::error!("[Items] update failed: {}", e);
                    ctx.fail(messages::ITEM_UPDATE_FAILED);
                    None
                }
            },
        );
    };

    view! {
        <Show when=move || editing.with(Option::is_some)>
            <div class="dialog-backdrop">
                <form class="dialog item-edit-dialog" on:submit=save>
                    <h3>"Edit wish"</h3>
                    <FormField label="Title" field=Field::Title errors=errors value=title set_value=set_title />
                    <FormField label="Link" field=Field::Link errors=errors value=link set_value=set_link input_type="url" />
                    <FormField label="Price" field=Field::Price errors=errors value=price set_value=set_price input_type="number" />
                    <FormField
                        label="Description"
                        field=Field::Description
                        errors=errors
                        value=description
                        set_value=set_description
                        multiline=true
                    />
                    <FormField label="Note" field=Field::Note errors=errors value=note set_value=set_note multiline=true />
                    <div class="dialog-actions">
                        <button type="button" class="cancel-btn" on:click=move |_| set_editing.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || state.with(|s| s.is_mutating())>
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </Show>
    }
}
