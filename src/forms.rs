//! Form Drafts
//!
//! Editable form state and its conversion into request bodies.

use crate::api::events::EventTitle;
use crate::api::items::{ItemChanges, NewItem, ScrapeRequest};
use crate::models::{Event, Item};
use crate::validation::{
    self, FieldErrors, ValidationError, DEFAULT_CATEGORY,
};

fn optional(text: &str) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text.to_string()) }
}

/// Item create/edit form, kept as raw input strings
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemDraft {
    pub title: String,
    pub link: String,
    pub price: String,
    pub description: String,
    pub note: String,
}

impl ItemDraft {
    pub fn from_item(item: &Item) -> Self {
        Self {
            title: item.title.clone(),
            link: item.link.clone().unwrap_or_default(),
            price: item.price.map(|p| p.to_string()).unwrap_or_default(),
            description: item.description.clone().unwrap_or_default(),
            note: item.note.clone().unwrap_or_default(),
        }
    }

    /// Checks for the create form (title, link, price)
    pub fn check_new(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::default();
        errors.check(validation::validate_title(&self.title));
        errors.check(validation::check_link(&self.link));
        errors.check(validation::validate_price(self.price()));
        errors.into_result()
    }

    /// Checks for the edit dialog (adds description and note bounds)
    pub fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = match self.check_new() {
            Ok(()) => FieldErrors::default(),
            Err(errors) => errors,
        };
        errors.check(validation::validate_description(&self.description));
        errors.check(validation::validate_note(&self.note));
        errors.into_result()
    }

    pub fn price(&self) -> f64 {
        validation::parse_price(&self.price)
    }

    pub fn to_new_item(&self) -> NewItem {
        NewItem {
            title: self.title.clone(),
            link: optional(&self.link),
            price: self.price(),
            category_name: DEFAULT_CATEGORY.to_string(),
        }
    }

    pub fn to_changes(&self) -> ItemChanges {
        ItemChanges {
            title: self.title.clone(),
            link: optional(&self.link),
            price: self.price(),
            description: optional(&self.description),
            note: optional(&self.note),
        }
    }
}

/// Import-from-link form: the URL must be present and URL-shaped
pub fn scrape_request(url: &str) -> Result<ScrapeRequest, ValidationError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(ValidationError::ImportUrlRequired);
    }
    validation::check_link(url)?;
    Ok(ScrapeRequest {
        url: url.to_string(),
        category_name: DEFAULT_CATEGORY.to_string(),
    })
}

/// Event create/rename form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub title: String,
}

impl EventDraft {
    pub fn from_event(event: &Event) -> Self {
        Self { title: event.title.clone() }
    }

    pub fn check(&self) -> Result<EventTitle, ValidationError> {
        validation::validate_title(&self.title)?;
        Ok(EventTitle { title: self.title.trim().to_string() })
    }
}

/// Add-friend form; phone is sent exactly as typed once it passes
pub fn friend_phone(raw: &str) -> Result<String, ValidationError> {
    if validation::validate_phone(raw) {
        Ok(raw.to_string())
    } else {
        Err(ValidationError::InvalidPhone)
    }
}

/// Manual phone entry: blank is rejected, anything else is normalized
pub fn manual_phone(raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        Err(ValidationError::PhoneRequired)
    } else {
        Ok(validation::normalize_phone(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Field;
    use serde_json::json;

    fn draft(title: &str, link: &str, price: &str) -> ItemDraft {
        ItemDraft {
            title: title.to_string(),
            link: link.to_string(),
            price: price.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_create_body_shape() {
        let draft = draft("Book", "", "19.99");
        assert!(draft.check_new().is_ok());
        let body = serde_json::to_value(draft.to_new_item()).unwrap();
        assert_eq!(
            body,
            json!({"title": "Book", "link": null, "price": 19.99, "category_name": "General"})
        );
    }

    #[test]
    fn test_unparseable_price_is_zero() {
        let body = serde_json::to_value(draft("Lamp", "https://shop.example.com", "").to_new_item()).unwrap();
        assert_eq!(body["price"], json!(0.0));
        assert_eq!(body["link"], json!("https://shop.example.com"));
    }

    #[test]
    fn test_create_rejections() {
        let errors = draft("  ", "example.com", "1").check_new().unwrap_err();
        assert!(errors.has(Field::Title));
        assert!(errors.has(Field::Link));
        assert!(!errors.has(Field::Price));

        let errors = draft("Lamp", "", "-3").check_new().unwrap_err();
        assert!(errors.has(Field::Price));
    }

    #[test]
    fn test_edit_checks_lengths() {
        let mut edit = draft("Lamp", "", "10");
        edit.note = "n".repeat(501);
        let errors = edit.check().unwrap_err();
        assert!(errors.has(Field::Note));
        assert!(!errors.has(Field::Description));
    }

    #[test]
    fn test_changes_roundtrip_from_item() {
        let item = Item {
            id: 4,
            title: "Lamp".into(),
            description: Some("Warm light".into()),
            image_url: None,
            link: None,
            price: Some(25.5),
            note: None,
            category_id: None,
            user_id: Some(1),
            is_booked: None,
        };
        let body = serde_json::to_value(ItemDraft::from_item(&item).to_changes()).unwrap();
        assert_eq!(
            body,
            json!({"title": "Lamp", "link": null, "price": 25.5, "description": "Warm light", "note": null})
        );
    }

    #[test]
    fn test_scrape_request() {
        assert_eq!(scrape_request(" "), Err(ValidationError::ImportUrlRequired));
        assert_eq!(scrape_request("shop"), Err(ValidationError::InvalidLink));
        let request = scrape_request("https://shop.example.com/p/1").unwrap();
        assert_eq!(request.category_name, "General");
    }

    #[test]
    fn test_event_title() {
        assert_eq!(EventDraft::default().check(), Err(ValidationError::TitleRequired));
        let body = EventDraft { title: " Birthday ".into() }.check().unwrap();
        assert_eq!(body.title, "Birthday");
    }

    #[test]
    fn test_phone_forms() {
        assert_eq!(friend_phone("+1234567890").as_deref(), Ok("+1234567890"));
        assert_eq!(friend_phone("1234567890"), Err(ValidationError::InvalidPhone));
        assert_eq!(manual_phone("   "), Err(ValidationError::PhoneRequired));
        assert_eq!(manual_phone("1234567890").as_deref(), Ok("+1234567890"));
    }
}
