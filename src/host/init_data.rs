//! Init-data Query String
//!
//! The host signs a `key=value&...` string whose `user` field is JSON. The
//! raw string goes to the backend untouched; parsing here is for display.

use percent_encoding::percent_decode_str;

use super::HostUser;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitData {
    pairs: Vec<(String, String)>,
}

fn decode(component: &str) -> String {
    percent_decode_str(&component.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

impl InitData {
    pub fn parse(raw: &str) -> Self {
        let pairs = raw
            .split('&')
            .filter(|part| !part.is_empty())
            .map(|part| match part.split_once('=') {
                Some((key, value)) => (decode(key), decode(value)),
                None => (decode(part), String::new()),
            })
            .collect();
        Self { pairs }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn user(&self) -> Option<HostUser> {
        let json = self.get("user")?;
        match serde_json::from_str(json) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("[Host] unreadable init-data user: {}", e);
                None
            }
        }
    }
}

/// Init payload accepted by the backend for development identities
pub fn dev_init_data(telegram_id: i64) -> String {
    format!("dev_user_id={}", telegram_id)
}
