//! Frontend Models
//!
//! Data structures matching backend entities.

use serde::{Deserialize, Serialize};

/// Current user profile (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    #[serde(default)]
    pub telegram_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl User {
    pub fn has_phone(&self) -> bool {
        self.phone.as_deref().is_some_and(|p| !p.trim().is_empty())
    }
}

/// Wishlist item (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub category_id: Option<u32>,
    #[serde(default)]
    pub user_id: Option<u32>,
    #[serde(default)]
    pub is_booked: Option<bool>,
}

impl Item {
    pub fn is_booked(&self) -> bool {
        self.is_booked.unwrap_or(false)
    }

    /// `$19.99`; `None` when the item has no price
    pub fn price_label(&self) -> Option<String> {
        self.price.map(|p| format!("${}", p))
    }
}

/// Event grouping items (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub user_id: Option<u32>,
}

/// Friend link target (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Result of booking a friend's item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: u32,
    pub item_id: u32,
    pub booked_by_user_id: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_defaults() {
        let item: Item = serde_json::from_str(r#"{"id": 3, "title": "Lamp"}"#).unwrap();
        assert!(!item.is_booked());
        assert_eq!(item.price_label(), None);
        assert_eq!(item.link, None);
    }

    #[test]
    fn test_item_full_payload() {
        let item: Item = serde_json::from_str(
            r#"{"id": 1, "title": "Book", "link": null, "price": 19.99, "description": null,
                "note": null, "image_url": null, "user_id": 7, "category_id": 2, "is_booked": true}"#,
        )
        .unwrap();
        assert!(item.is_booked());
        assert_eq!(item.price_label().as_deref(), Some("$19.99"));
        assert_eq!(item.user_id, Some(7));
    }

    #[test]
    fn test_event_with_items() {
        let event: Event = serde_json::from_str(
            r#"{"id": 5, "title": "Birthday", "date": "2024-05-01T00:00:00", "is_shared": false,
                "user_id": 1, "items": [{"id": 1, "title": "A"}], "collaborators": []}"#,
        )
        .unwrap();
        assert_eq!(event.items.len(), 1);
        assert_eq!(event.date.as_deref(), Some("2024-05-01T00:00:00"));
    }

    #[test]
    fn test_user_phone() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "telegram_id": 999999999, "name": "Dev", "phone": null, "created_at": "2024-01-01T00:00:00"}"#,
        )
        .unwrap();
        assert!(!user.has_phone());

        let user = User { phone: Some("+1234567890".into()), ..user };
        assert!(user.has_phone());
    }

    #[test]
    fn test_token_type_default() {
        let token: TokenResponse = serde_json::from_str(r#"{"access_token": "abc"}"#).unwrap();
        assert_eq!(token.token_type, "bearer");
    }
}
