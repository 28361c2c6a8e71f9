//! Development identities used when the app runs outside the host.

use super::{dev_init_data, ContactOutcome, HostBridge, HostIdentity, HostUser};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockProfile {
    pub label: &'static str,
    pub id: i64,
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub username: &'static str,
    pub phone: &'static str,
}

impl MockProfile {
    pub fn host_user(&self) -> HostUser {
        HostUser {
            id: self.id,
            first_name: self.first_name.to_string(),
            last_name: Some(self.last_name.to_string()),
            username: Some(self.username.to_string()),
            language_code: Some("en".to_string()),
            phone_number: Some(self.phone.to_string()),
            photo_url: None,
        }
    }

    pub fn identity(&self) -> HostIdentity {
        HostIdentity {
            init_data: dev_init_data(self.id),
            user: self.host_user(),
        }
    }
}

pub const MOCK_USERS: [MockProfile; 2] = [
    MockProfile {
        label: "User 1",
        id: 999_999_999,
        first_name: "Dev",
        last_name: "User 1",
        username: "dev_user_1",
        phone: "+9999999990",
    },
    MockProfile {
        label: "User 2",
        id: 888_888_888,
        first_name: "Test",
        last_name: "User 2",
        username: "test_user_2",
        phone: "+8888888880",
    },
];

/// Bridge that answers with one of [`MOCK_USERS`] and cannot share contacts
#[derive(Debug, Clone, Copy)]
pub struct MockBridge {
    profile: MockProfile,
}

impl MockBridge {
    /// Out-of-range indices fall back to the first profile
    pub fn new(index: usize) -> Self {
        Self {
            profile: MOCK_USERS.get(index).copied().unwrap_or(MOCK_USERS[0]),
        }
    }

    pub fn profile(&self) -> &MockProfile {
        &self.profile
    }
}

impl HostBridge for MockBridge {
    fn ready(&self) {
        log::debug!("[Host] mock ready as {}", self.profile.username);
    }

    fn identity(&self) -> Option<HostIdentity> {
        Some(self.profile.identity())
    }

    fn supports_contact_request(&self) -> bool {
        false
    }

    fn request_contact(&self, on_result: Box<dyn FnOnce(ContactOutcome)>) {
        on_result(ContactOutcome::Declined);
    }

    fn on_phone_pushed(&self, _handler: Box<dyn Fn(String)>) {}

    fn is_development(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_mock_identity_init_data() {
        let bridge = MockBridge::new(1);
        let identity = bridge.identity().unwrap();
        assert_eq!(identity.init_data, "dev_user_id=888888888");
        assert_eq!(identity.user.username.as_deref(), Some("test_user_2"));
        assert!(bridge.is_development());
    }

    #[test]
    fn test_out_of_range_index() {
        assert_eq!(MockBridge::new(7).profile().id, 999_999_999);
    }

    #[test]
    fn test_mock_cannot_share_contact() {
        let bridge = MockBridge::new(0);
        assert!(!bridge.supports_contact_request());

        let outcome = Rc::new(RefCell::new(None));
        let slot = outcome.clone();
        bridge.request_contact(Box::new(move |o: ContactOutcome| *slot.borrow_mut() = Some(o)));
        assert_eq!(*outcome.borrow(), Some(ContactOutcome::Declined));
    }

    #[test]
    fn test_mock_phones_pass_friend_check() {
        for profile in MOCK_USERS {
            assert!(crate::validation::validate_phone(profile.phone));
        }
    }
}
