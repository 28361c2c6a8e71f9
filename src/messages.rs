//! User-facing Strings
//!
//! English copy for toasts, banners, labels and empty states.

// ========================
// Status
// ========================

pub const LOADING: &str = "Loading...";
pub const AUTHENTICATING: &str = "Signing you in...";
pub const AUTH_FAILED: &str = "Authentication failed. Please reopen the app.";
pub const CONFIG_FAILED: &str = "The app is misconfigured and cannot start.";
pub const WELCOME: &str = "Welcome";

// ========================
// Validation
// ========================

pub const VALIDATION_ERROR: &str = "Please fix the highlighted fields";
pub const TITLE_REQUIRED: &str = "Title is required";
pub const TITLE_INVALID: &str = "Title must be 1 to 255 characters";
pub const LINK_INVALID: &str = "Link must be a valid URL";
pub const PRICE_INVALID: &str = "Price cannot be negative";
pub const DESCRIPTION_INVALID: &str = "Description must be at most 1000 characters";
pub const NOTE_INVALID: &str = "Note must be at most 500 characters";
pub const EVENT_TITLE_REQUIRED: &str = "Event title is required";
pub const EVENT_TITLE_INVALID: &str = "Event title must be 1 to 255 characters";
pub const FRIEND_PHONE_INVALID: &str = "Phone must start with + followed by 10 to 15 digits";
pub const IMPORT_URL_REQUIRED: &str = "Paste a product link to import";

// ========================
// Items
// ========================

pub const FETCH_ITEMS_FAILED: &str = "Could not load your wishes";
pub const ITEM_ADDED: &str = "Wish added";
pub const ITEM_ADD_FAILED: &str = "Could not add the wish";
pub const ITEM_IMPORTED: &str = "Wish imported from link";
pub const ITEM_IMPORT_FAILED: &str = "Could not import from that link";
pub const ITEM_UPDATED: &str = "Wish updated";
pub const ITEM_UPDATE_FAILED: &str = "Could not update the wish";
pub const ITEM_DELETED: &str = "Wish deleted";
pub const ITEM_DELETE_FAILED: &str = "Could not delete the wish";
pub const CONFIRM_DELETE_ITEM: &str = "Delete this wish?";
pub const NO_ITEMS: &str = "No wishes yet";

// ========================
// Events
// ========================

pub const FETCH_EVENTS_FAILED: &str = "Could not load events";
pub const EVENT_ADDED: &str = "Event created";
pub const EVENT_ADD_FAILED: &str = "Could not create the event";
pub const EVENT_UPDATED: &str = "Event updated";
pub const EVENT_UPDATE_FAILED: &str = "Could not update the event";
pub const EVENT_DELETED: &str = "Event deleted";
pub const EVENT_DELETE_FAILED: &str = "Could not delete the event";
pub const CONFIRM_DELETE_EVENT: &str = "Delete this event?";
pub const ITEM_ADDED_TO_EVENT: &str = "Wish added to event";
pub const ITEM_ADD_TO_EVENT_FAILED: &str = "Could not add the wish to the event";
pub const NO_EVENTS: &str = "No events yet";
pub const NO_ITEMS_IN_EVENT: &str = "No wishes in this event";

// ========================
// Friends
// ========================

pub const FETCH_FRIENDS_FAILED: &str = "Could not load friends";
pub const FRIEND_ADDED: &str = "Friend added";
pub const FRIEND_ADD_FAILED: &str = "Could not add the friend";
pub const FRIEND_DELETED: &str = "Friend removed";
pub const FRIEND_DELETE_FAILED: &str = "Could not remove the friend";
pub const CONFIRM_DELETE_FRIEND: &str = "Remove this friend?";
pub const NO_FRIENDS: &str = "No friends yet";
pub const NO_PUBLIC_WISHLISTS: &str = "This friend has no wishlists yet";
pub const GIFT_BOOKED: &str = "Gift booked";
pub const BOOK_FAILED: &str = "Could not book the gift";

// ========================
// Phone
// ========================

pub const PHONE_REQUIRED: &str = "Enter a phone number";
pub const PHONE_PROMPT: &str = "Share your phone number so friends can find you";
pub const PHONE_REQUEST_SENT: &str = "Phone number request sent";
pub const PHONE_SHARE_DECLINED: &str = "Phone number was not shared. You can enter it manually";
pub const PHONE_UPDATED: &str = "Phone number saved";
pub const PHONE_UPDATE_FAILED: &str = "Could not save the phone number";
