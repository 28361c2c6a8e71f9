//! Wishlist App
//!
//! Root component: host handshake, sign-in, screen selection and the
//! app-wide context.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::auth;
use crate::components::{
    persist_phone, DevSwitcher, EventsScreen, FriendWishlist, FriendsScreen, ItemsScreen, NavTabs,
    PhoneDialog, ProfileCard, ToastHost,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::host::{self, MockBridge};
use crate::messages;
use crate::session::Session;
use crate::store::{store_auth_failed, store_sign_in, AppState, AppStateStoreFields, AuthStatus, View};
use crate::toast::Notifier;
use crate::validation::normalize_phone;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let api = ApiClient::new(&config, Session::new());
    let bridge = host::detect(config.dev_mocks, 0);
    let ctx = AppContext::new(api, bridge, Notifier::new(config.toast_duration_ms), store);
    provide_context(ctx);

    // Numbers the host pushes after a contact share
    ctx.bridge().on_phone_pushed(Box::new(move |phone: String| {
        log::info!("[Phone] number pushed by host");
        persist_phone(ctx, normalize_phone(&phone), |_| {});
    }));

    // Only the latest handshake may install its token and sign in
    let handshakes = StoredValue::new_local(auth::Handshakes::default());

    // Identity handshake; reruns when the development identity changes
    Effect::new(move |_| {
        let mock_index = store.mock_user().get();
        if ctx.bridge().is_development() {
            ctx.set_bridge(Rc::new(MockBridge::new(mock_index)));
        }
        let bridge = ctx.bridge();
        bridge.ready();

        let generation = handshakes.with_value(|h| h.begin());
        let api = ctx.api();
        api.session().clear();
        let identity = bridge.identity();
        spawn_local(async move {
            let result = auth::sign_in(&api, identity).await;
            let Some(guard) = handshakes.try_get_value() else { return };
            match guard.finish(generation, api.session(), result) {
                None => log::debug!("[Auth] dropping superseded handshake"),
                Some(Ok(user)) => store_sign_in(&store, user),
                Some(Err(e)) => {
                    log::error!("[Auth] {}", e);
                    store_auth_failed(&store, messages::AUTH_FAILED);
                }
            }
        });
    });

    let screen = move || match store.view().get() {
        View::Items => view! { <ItemsScreen /> }.into_any(),
        View::Events => view! { <EventsScreen /> }.into_any(),
        View::Friends => view! { <FriendsScreen /> }.into_any(),
        View::FriendWishlist(friend) => view! { <FriendWishlist friend=friend /> }.into_any(),
    };

    let body = move || match store.auth().get() {
        AuthStatus::Authenticating => {
            view! { <p class="status">{messages::AUTHENTICATING}</p> }.into_any()
        }
        AuthStatus::Failed(message) => {
            view! { <div class="error-banner" role="alert">{message}</div> }.into_any()
        }
        AuthStatus::SignedIn => view! {
            <ProfileCard />
            <NavTabs />
            <main class="main-content">{screen}</main>
            <PhoneDialog />
        }
        .into_any(),
    };

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Wishlist"</h1>
                <DevSwitcher />
            </header>
            {body}
            <ToastHost />
        </div>
    }
}

/// Shown instead of the app when startup configuration is invalid
#[component]
pub fn ConfigErrorView(#[prop(into)] detail: String) -> impl IntoView {
    view! {
        <div class="app-layout">
            <div class="error-banner" role="alert">
                <p>{messages::CONFIG_FAILED}</p>
                <code>{detail}</code>
            </div>
        </div>
    }
}
