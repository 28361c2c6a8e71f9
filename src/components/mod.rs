//! UI Components
//!
//! Leptos components, one per file.

mod add_friend_form;
mod add_item_form;
mod confirm_dialog;
mod create_event_form;
mod event_detail;
mod events_screen;
mod friend_wishlist;
mod friends_screen;
mod item_card;
mod item_edit_dialog;
mod items_screen;
mod mutation;
mod nav_tabs;
mod phone_dialog;
mod profile_card;
mod toast_host;

pub use add_friend_form::AddFriendForm;
pub use add_item_form::{AddItemForm, FormField};
pub use confirm_dialog::ConfirmDialog;
pub use create_event_form::CreateEventForm;
pub use event_detail::EventDetail;
pub use events_screen::EventsScreen;
pub use friend_wishlist::FriendWishlist;
pub use friends_screen::FriendsScreen;
pub use item_card::ItemCard;
pub use item_edit_dialog::ItemEditDialog;
pub use items_screen::ItemsScreen;
pub use mutation::{settle_delete, spawn_mutation};
pub use nav_tabs::NavTabs;
pub use phone_dialog::{persist_phone, PhoneDialog};
pub use profile_card::{DevSwitcher, ProfileCard};
pub use toast_host::ToastHost;
