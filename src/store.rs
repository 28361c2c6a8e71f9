//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Screen
//! collections are not kept here; each screen owns its own copy.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Friend, User};

/// Top-level screen selection
#[derive(Clone, Debug, Default, PartialEq)]
pub enum View {
    #[default]
    Items,
    Events,
    Friends,
    FriendWishlist(Friend),
}

impl View {
    /// Navigation tabs are hidden while a friend's wishlist is open
    pub fn shows_tabs(&self) -> bool {
        !matches!(self, View::FriendWishlist(_))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum AuthStatus {
    #[default]
    Authenticating,
    SignedIn,
    Failed(String),
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in profile
    pub user: Option<User>,
    pub auth: AuthStatus,
    pub view: View,
    pub phone_dialog_open: bool,
    /// Index into the development identities
    pub mock_user: usize,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_sign_in(store: &AppStore, user: User) {
    store.user().set(Some(user));
    store.auth().set(AuthStatus::SignedIn);
}

pub fn store_auth_failed(store: &AppStore, message: &str) {
    store.user().set(None);
    store.auth().set(AuthStatus::Failed(message.to_string()));
}

/// Replace the profile after a phone update
pub fn store_update_user(store: &AppStore, user: User) {
    store.user().set(Some(user));
}

pub fn store_navigate(store: &AppStore, view: View) {
    store.view().set(view);
}

/// Restart the handshake as another development identity
pub fn store_switch_mock(store: &AppStore, index: usize) {
    store.user().set(None);
    store.auth().set(AuthStatus::Authenticating);
    store.view().set(View::Items);
    store.mock_user().set(index);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_hidden_in_friend_wishlist() {
        assert!(View::Items.shows_tabs());
        assert!(View::Friends.shows_tabs());
        let friend = Friend { id: 2, name: "Ann".into(), avatar_url: None };
        assert!(!View::FriendWishlist(friend).shows_tabs());
    }

    #[test]
    fn test_defaults() {
        let state = AppState::default();
        assert_eq!(state.auth, AuthStatus::Authenticating);
        assert_eq!(state.view, View::Items);
        assert!(state.user.is_none());
    }
}
