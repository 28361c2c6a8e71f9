//! Auth Endpoints

use serde::Serialize;

use super::{ApiClient, ApiResult};
use crate::models::TokenResponse;

#[derive(Debug, Serialize)]
pub struct AuthRequest<'a> {
    pub init_data: &'a str,
}

/// Exchange the host init payload for a bearer token
pub async fn exchange_init_data(api: &ApiClient, init_data: &str) -> ApiResult<TokenResponse> {
    api.post("/api/auth/telegram", &AuthRequest { init_data }).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_body() {
        let body = serde_json::to_value(AuthRequest { init_data: "dev_user_id=999999999" }).unwrap();
        assert_eq!(body, serde_json::json!({"init_data": "dev_user_id=999999999"}));
    }
}
