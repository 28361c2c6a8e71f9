//! Toast Host Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Renders the current toast, click to dismiss
#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();
    let notifier = ctx.notifier;

    move || {
        notifier.current().map(|toast| {
            view! {
                <div class=toast.severity.css_class() role="status" on:click=move |_| notifier.dismiss()>
                    {toast.message}
                </div>
            }
        })
    }
}
