//! Backend API Client
//!
//! Thin reqwest wrapper for the wishlist REST backend. Every request carries
//! the session's bearer token once one is stored.

pub mod auth;
pub mod events;
pub mod friends;
pub mod items;
pub mod users;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::AppConfig;
use crate::session::Session;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server returned {status}")]
    Status { status: u16, detail: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Build a status error, pulling `detail` out of a FastAPI error body
    pub fn from_status(status: StatusCode, body: &[u8]) -> Self {
        Self::Status {
            status: status.as_u16(),
            detail: extract_detail(body),
        }
    }

    /// Backend-provided message, if any
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Backend detail when present, else `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

/// `{"detail": "..."}` or `{"detail": [{"msg": "..."}, ...]}`
fn extract_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(detail) => Some(detail.clone()),
        serde_json::Value::Array(errors) => errors
            .first()?
            .get("msg")?
            .as_str()
            .map(str::to_string),
        _ => None,
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &AppConfig, session: Session) -> Self {
        Self {
            http: Client::new(),
            base: config.api_base.clone(),
            session,
        }
    }

    /// Same backend and connection pool, separate token holder
    pub fn with_session(&self, session: Session) -> Self {
        Self {
            http: self.http.clone(),
            base: self.base.clone(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.session.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> ApiResult<Vec<u8>> {
        let response = builder
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        if !status.is_success() {
            let error = ApiError::from_status(status, &body);
            log::warn!("[Api] {} -> {:?}", status, error.detail());
            return Err(error);
        }
        Ok(body.to_vec())
    }

    async fn decode<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let body = self.execute(builder).await?;
        serde_json::from_slice(&body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.decode(self.request(Method::GET, path)).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.decode(self.request(Method::POST, path).json(body)).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        self.decode(self.request(Method::PUT, path).json(body)).await
    }

    /// Delete endpoints answer with an arbitrary body that is ignored
    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(self.request(Method::DELETE, path)).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_string() {
        let error = ApiError::from_status(StatusCode::BAD_REQUEST, br#"{"detail": "Friend already added"}"#);
        assert_eq!(error.detail(), Some("Friend already added"));
        assert_eq!(error.user_message("fallback"), "Friend already added");
    }

    #[test]
    fn test_detail_validation_list() {
        let body = br#"{"detail": [{"loc": ["body", "phone"], "msg": "string does not match regex", "type": "value_error"}]}"#;
        let error = ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, body);
        assert_eq!(error.detail(), Some("string does not match regex"));
    }

    #[test]
    fn test_detail_missing() {
        let error = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, b"Internal Server Error");
        assert_eq!(error, ApiError::Status { status: 500, detail: None });
        assert_eq!(error.user_message("Could not book the gift"), "Could not book the gift");
        assert_eq!(ApiError::Transport("offline".into()).detail(), None);
    }

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://api.example.com", "/api/items"), "https://api.example.com/api/items");
        assert_eq!(join_url("https://api.example.com/", "api/items"), "https://api.example.com/api/items");
    }
}
