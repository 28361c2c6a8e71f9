//! Profile Card Component
//!
//! Current user summary, phone sharing prompt, and the development identity
//! switcher with its log viewer.

use leptos::prelude::*;

use crate::components::persist_phone;
use crate::context::use_app_context;
use crate::host::{ContactOutcome, MOCK_USERS};
use crate::messages;
use crate::models::User;
use crate::store::{store_switch_mock, use_app_store, AppStateStoreFields};
use crate::toast::Severity;
use crate::validation::normalize_phone;

#[component]
pub fn ProfileCard() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let share_phone = move |_: web_sys::MouseEvent| {
        let bridge = ctx.bridge();
        if !bridge.supports_contact_request() {
            log::info!("[Phone] contact request unsupported, using manual entry");
            ctx.store.phone_dialog_open().set(true);
            return;
        }
        bridge.request_contact(Box::new(move |outcome: ContactOutcome| match outcome {
            ContactOutcome::Shared(phone) => persist_phone(ctx, normalize_phone(&phone), |_| {}),
            // the number arrives through the pushed-phone subscription
            ContactOutcome::Pending => log::info!("[Phone] contact shared, waiting for push"),
            ContactOutcome::Declined => {
                log::info!("[Phone] contact request declined");
                ctx.notify(messages::PHONE_SHARE_DECLINED, Severity::Warning);
            }
        }));
        ctx.notify(messages::PHONE_REQUEST_SENT, Severity::Info);
    };

    let card = move |user: User| {
        let has_phone = user.has_phone();
        view! {
            <div class="profile-card">
                {user.avatar_url.clone().map(|src| view! { <img class="avatar" src=src alt="" /> })}
                <div class="profile-info">
                    <span class="profile-name">{format!("{}, {}", messages::WELCOME, user.name)}</span>
                    {user.phone.clone().filter(|_| has_phone).map(|p| view! {
                        <span class="profile-phone">{format!("Phone: {}", p)}</span>
                    })}
                </div>
                <Show when=move || !has_phone>
                    <div class="phone-prompt">
                        <p>{messages::PHONE_PROMPT}</p>
                        <button class="primary-btn" on:click=share_phone>"Share phone number"</button>
                        <button class="link-btn" on:click=move |_| ctx.store.phone_dialog_open().set(true)>
                            "Enter manually"
                        </button>
                    </div>
                </Show>
            </div>
        }
    };

    move || store.user().get().map(card)
}

/// Recent log lines from the in-memory buffer
#[component]
fn DevLogPanel() -> impl IntoView {
    let (open, set_open) = signal(false);
    let (dumped, set_dumped) = signal(String::new());
    let refresh = move || set_dumped.set(rolling_logger::dump(&rolling_logger::recent_lines()));

    view! {
        <button
            class="dev-btn"
            on:click=move |_| {
                refresh();
                set_open.update(|o| *o = !*o);
            }
        >
            "Logs"
        </button>
        <Show when=move || open.get()>
            <div class="dev-log">
                <div class="dialog-actions">
                    <button class="dev-btn" on:click=move |_| refresh()>"Refresh"</button>
                    <button
                        class="dev-btn"
                        on:click=move |_| {
                            rolling_logger::clear_recent();
                            refresh();
                        }
                    >
                        "Clear"
                    </button>
                </div>
                <pre>{move || dumped.get()}</pre>
            </div>
        </Show>
    }
}

/// Buttons for the development identities; renders nothing inside the host
#[component]
pub fn DevSwitcher() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    ctx.bridge().is_development().then(|| {
        view! {
            <div class="dev-switcher">
                {MOCK_USERS.iter().enumerate().map(|(index, profile)| {
                    let button_class = move || {
                        if store.mock_user().get() == index { "dev-btn active" } else { "dev-btn" }
                    };
                    view! {
                        <button
                            class=button_class
                            on:click=move |_| {
                                if store.mock_user().get_untracked() != index {
                                    store_switch_mock(&store, index);
                                }
                            }
                        >
                            {profile.label}
                        </button>
                    }
                }).collect_view()}
                <DevLogPanel />
            </div>
        }
    })
}
