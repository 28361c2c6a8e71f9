//! Session
//!
//! Bearer token owned by the root component and shared with the API client.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Clone, Default)]
pub struct Session {
    token: Arc<RwLock<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn token(&self) -> Option<String> {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = if self.is_authenticated() { "<redacted>" } else { "<none>" };
        f.debug_struct("Session").field("token", &state).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_shared_between_clones() {
        let session = Session::new();
        let handle = session.clone();
        assert!(!handle.is_authenticated());

        session.set_token("abc");
        assert_eq!(handle.token().as_deref(), Some("abc"));

        handle.clear();
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_debug_hides_token() {
        let session = Session::new();
        session.set_token("secret-token");
        let printed = format!("{:?}", session);
        assert!(!printed.contains("secret-token"));
        assert!(printed.contains("<redacted>"));
    }
}
