//! Friend Endpoints

use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::models::Friend;

#[derive(Debug, Serialize)]
pub struct AddFriend<'a> {
    pub phone: &'a str,
}

pub async fn list_friends(api: &ApiClient) -> ApiResult<Vec<Friend>> {
    api.get("/api/friends").await
}

/// Link to the user registered with `phone`
pub async fn add_friend(api: &ApiClient, phone: &str) -> ApiResult<Friend> {
    api.post("/api/friends", &AddFriend { phone }).await
}

pub async fn remove_friend(api: &ApiClient, friend_id: u32) -> ApiResult<()> {
    api.delete(&format!("/api/friends/{}", friend_id)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_friend_body() {
        let body = serde_json::to_value(AddFriend { phone: "+1234567890" }).unwrap();
        assert_eq!(body, serde_json::json!({"phone": "+1234567890"}));
    }
}
