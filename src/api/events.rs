//! Event Endpoints

use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::models::Event;

/// Body for creating and renaming events
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventTitle {
    pub title: String,
}

#[derive(Debug, Serialize)]
pub struct AttachItem {
    pub item_id: u32,
}

pub fn event_path(event_id: u32) -> String {
    format!("/api/events/{}", event_id)
}

pub async fn create_event(api: &ApiClient, body: &EventTitle) -> ApiResult<Event> {
    api.post("/api/events", body).await
}

pub async fn update_event(api: &ApiClient, event_id: u32, body: &EventTitle) -> ApiResult<Event> {
    api.put(&event_path(event_id), body).await
}

pub async fn delete_event(api: &ApiClient, event_id: u32) -> ApiResult<()> {
    api.delete(&event_path(event_id)).await
}

/// Attach an existing item; the response is only an acknowledgement
pub async fn attach_item(api: &ApiClient, event_id: u32, item_id: u32) -> ApiResult<()> {
    let _ack: serde_json::Value = api
        .post(&format!("{}/items", event_path(event_id)), &AttachItem { item_id })
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_bodies() {
        assert_eq!(event_path(3), "/api/events/3");
        assert_eq!(
            serde_json::to_value(EventTitle { title: "Birthday".into() }).unwrap(),
            json!({"title": "Birthday"})
        );
        assert_eq!(serde_json::to_value(AttachItem { item_id: 9 }).unwrap(), json!({"item_id": 9}));
    }
}
