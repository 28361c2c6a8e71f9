//! Host Platform Bridge
//!
//! Capability seam between the UI and the chat-platform runtime that embeds
//! the app. UI code only talks to [`HostBridge`].

mod init_data;
pub mod mock;
pub mod telegram;

pub use init_data::{dev_init_data, InitData};
pub use mock::{MockBridge, MockProfile, MOCK_USERS};
pub use telegram::TelegramBridge;

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// User object the host attaches to the init payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostUser {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub language_code: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl HostUser {
    pub fn display_name(&self) -> String {
        match &self.last_name {
            Some(last) if !last.is_empty() => format!("{} {}", self.first_name, last),
            _ => self.first_name.clone(),
        }
    }
}

/// Raw init-data string to send to the backend plus the parsed user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostIdentity {
    pub init_data: String,
    pub user: HostUser,
}

/// Result of a contact-share prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The host handed the phone number over directly
    Shared(String),
    /// Accepted; the number arrives later through a data-update push
    Pending,
    Declined,
}

pub trait HostBridge {
    /// Tell the host the app has rendered
    fn ready(&self);

    /// Identity issued by the host, if the app runs inside it
    fn identity(&self) -> Option<HostIdentity>;

    fn supports_contact_request(&self) -> bool;

    /// Prompt the user to share their phone number
    fn request_contact(&self, on_result: Box<dyn FnOnce(ContactOutcome)>);

    /// Subscribe to phone numbers pushed by the host after a share
    fn on_phone_pushed(&self, handler: Box<dyn Fn(String)>);

    /// Stand-in identities for running outside the host
    fn is_development(&self) -> bool {
        false
    }
}

/// Telegram when it issued an identity, else mock `mock_index` (if allowed)
pub fn detect(allow_mocks: bool, mock_index: usize) -> Rc<dyn HostBridge> {
    let telegram = TelegramBridge;
    if telegram.identity().is_some() || !allow_mocks {
        Rc::new(telegram)
    } else {
        log::info!("[Host] no host identity, using development mock #{}", mock_index);
        Rc::new(MockBridge::new(mock_index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name() {
        let mut user = MOCK_USERS[0].host_user();
        assert_eq!(user.display_name(), "Dev User 1");
        user.last_name = None;
        assert_eq!(user.display_name(), "Dev");
    }
}
