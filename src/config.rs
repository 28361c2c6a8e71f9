//! Startup Configuration
//!
//! Build-time overrides resolved once against the page origin.

use log::LevelFilter;
use thiserror::Error;

/// How long a toast stays visible
pub const DEFAULT_TOAST_MS: u32 = 6000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API base is not an absolute http(s) URL: {0}")]
    InvalidBase(String),
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
    #[error("no API base configured and no page origin available")]
    MissingBase,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend origin without trailing slash, e.g. `https://api.example.com`
    pub api_base: String,
    pub log_level: LevelFilter,
    pub toast_duration_ms: u32,
    /// Offer the mock identities when the host supplies none
    pub dev_mocks: bool,
}

impl AppConfig {
    /// Resolve from `WISHLIST_*` build variables, falling back to `origin`
    pub fn from_env(origin: Option<String>) -> Result<Self, ConfigError> {
        resolve(
            option_env!("WISHLIST_API_BASE"),
            option_env!("WISHLIST_LOG_LEVEL"),
            option_env!("WISHLIST_DEV_MOCKS"),
            origin,
        )
    }
}

pub fn resolve(
    api_base: Option<&str>,
    log_level: Option<&str>,
    dev_mocks: Option<&str>,
    origin: Option<String>,
) -> Result<AppConfig, ConfigError> {
    let base = match api_base.map(str::trim).filter(|s| !s.is_empty()) {
        Some(base) => base.to_string(),
        None => origin.ok_or(ConfigError::MissingBase)?,
    };
    let url = reqwest::Url::parse(&base).map_err(|_| ConfigError::InvalidBase(base.clone()))?;
    if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
        return Err(ConfigError::InvalidBase(base));
    }

    let log_level = match log_level {
        Some(raw) => raw
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(raw.to_string()))?,
        None => LevelFilter::Info,
    };

    let dev_mocks = match dev_mocks {
        Some(raw) => matches!(raw.trim(), "1" | "true" | "yes" | "on"),
        None => cfg!(debug_assertions),
    };

    Ok(AppConfig {
        api_base: base.trim_end_matches('/').to_string(),
        log_level,
        toast_duration_ms: DEFAULT_TOAST_MS,
        dev_mocks,
    })
}

/// `window.location.origin`, if running in a browser
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_wins_over_origin() {
        let config = resolve(
            Some("https://api.example.com/"),
            None,
            None,
            Some("http://localhost:8080".to_string()),
        )
        .unwrap();
        assert_eq!(config.api_base, "https://api.example.com");
        assert_eq!(config.log_level, LevelFilter::Info);
        assert_eq!(config.toast_duration_ms, 6000);
    }

    #[test]
    fn test_falls_back_to_origin() {
        let config = resolve(None, Some("debug"), Some("false"), Some("http://localhost:8080".to_string())).unwrap();
        assert_eq!(config.api_base, "http://localhost:8080");
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(!config.dev_mocks);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert_eq!(resolve(None, None, None, None), Err(ConfigError::MissingBase));
        assert_eq!(
            resolve(Some("ftp://files.example.com"), None, None, None),
            Err(ConfigError::InvalidBase("ftp://files.example.com".to_string()))
        );
        assert_eq!(
            resolve(Some("not a url"), None, None, None),
            Err(ConfigError::InvalidBase("not a url".to_string()))
        );
        assert_eq!(
            resolve(Some("https://a.example"), Some("loud"), None, None),
            Err(ConfigError::InvalidLogLevel("loud".to_string()))
        );
    }

    #[test]
    fn test_dev_mocks_flag() {
        let on = resolve(Some("https://a.example"), None, Some("1"), None).unwrap();
        assert!(on.dev_mocks);
    }
}
