//! Item Endpoints

use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::models::{Booking, Item};

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewItem {
    pub title: String,
    pub link: Option<String>,
    pub price: f64,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemChanges {
    pub title: String,
    pub link: Option<String>,
    pub price: f64,
    pub description: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScrapeRequest {
    pub url: String,
    pub category_name: String,
}

pub fn item_path(item_id: u32) -> String {
    format!("/api/items/{}", item_id)
}

// ========================
// Endpoints
// ========================

pub async fn list_items(api: &ApiClient) -> ApiResult<Vec<Item>> {
    api.get("/api/items").await
}

pub async fn create_item(api: &ApiClient, item: &NewItem) -> ApiResult<Item> {
    api.post("/api/items/manual", item).await
}

/// Let the backend build an item from a product page
pub async fn import_item(api: &ApiClient, request: &ScrapeRequest) -> ApiResult<Item> {
    api.post("/api/items/scrape", request).await
}

pub async fn update_item(api: &ApiClient, item_id: u32, changes: &ItemChanges) -> ApiResult<Item> {
    api.put(&item_path(item_id), changes).await
}

pub async fn delete_item(api: &ApiClient, item_id: u32) -> ApiResult<()> {
    api.delete(&item_path(item_id)).await
}

/// Book a friend's item. The caller's copy of the item is not updated.
pub async fn book_item(api: &ApiClient, item_id: u32) -> ApiResult<Booking> {
    api.post(&format!("{}/book", item_path(item_id)), &serde_json::json!({})).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_paths() {
        assert_eq!(item_path(7), "/api/items/7");
    }

    #[test]
    fn test_scrape_body() {
        let body = serde_json::to_value(ScrapeRequest {
            url: "https://shop.example.com/p/1".into(),
            category_name: "General".into(),
        })
        .unwrap();
        assert_eq!(body, json!({"url": "https://shop.example.com/p/1", "category_name": "General"}));
    }
}
