//! Navigation Tabs Component
//!
//! Tab bar for switching between the top-level screens.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields, View};

const TABS: &[(View, &str)] = &[
    (View::Items, "My wishes"),
    (View::Events, "My events"),
    (View::Friends, "Friends"),
];

#[component]
pub fn NavTabs() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    view! {
        <Show when=move || store.view().with(View::shows_tabs)>
            <nav class="nav-tabs">
                {TABS.iter().map(|(target, label)| {
                    let target_for_class = target.clone();
                    let target_for_click = target.clone();
                    let tab_class = move || {
                        if store.view().with(|v| *v == target_for_class) { "nav-tab active" } else { "nav-tab" }
                    };
                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| ctx.navigate(target_for_click.clone())
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </nav>
        </Show>
    }
}
