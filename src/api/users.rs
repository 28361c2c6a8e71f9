//! User Endpoints

use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::models::{Event, User};

#[derive(Debug, Serialize)]
pub struct PhoneUpdate<'a> {
    pub phone: &'a str,
}

pub fn user_events_path(user_id: u32) -> String {
    format!("/api/users/{}/events", user_id)
}

pub async fn me(api: &ApiClient) -> ApiResult<User> {
    api.get("/api/users/me").await
}

/// Set or replace the current user's phone; returns the updated profile
pub async fn set_phone(api: &ApiClient, phone: &str) -> ApiResult<User> {
    api.put("/api/users/me/phone", &PhoneUpdate { phone }).await
}

/// Events of any user: own, or a friend's wishlist
pub async fn user_events(api: &ApiClient, user_id: u32) -> ApiResult<Vec<Event>> {
    api.get(&user_events_path(user_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_and_body() {
        assert_eq!(user_events_path(42), "/api/users/42/events");
        let body = serde_json::to_value(PhoneUpdate { phone: "+1234567890" }).unwrap();
        assert_eq!(body, serde_json::json!({"phone": "+1234567890"}));
    }
}
