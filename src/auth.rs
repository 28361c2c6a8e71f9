//! Sign-in Handshake
//!
//! Exchange the host identity for a token and fetch the profile. The token is
//! only installed on the shared session once the handshake is known to be the
//! latest one. No retries: any failure is final for this page load.

use std::cell::Cell;
use std::rc::Rc;

use thiserror::Error;

use crate::api::{self, ApiClient, ApiError};
use crate::host::HostIdentity;
use crate::models::User;
use crate::session::Session;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum AuthError {
    #[error("no host identity available")]
    NoIdentity,
    #[error("token exchange failed: {0}")]
    Exchange(ApiError),
    #[error("profile fetch failed: {0}")]
    Profile(ApiError),
}

/// Token and profile of a completed handshake, not yet installed
#[derive(Debug, Clone, PartialEq)]
pub struct SignedIn {
    pub token: String,
    pub user: User,
}

/// Run the handshake on a private session; `api`'s own session is not touched
pub async fn sign_in(api: &ApiClient, identity: Option<HostIdentity>) -> Result<SignedIn, AuthError> {
    let identity = identity.ok_or(AuthError::NoIdentity)?;
    log::info!("[Auth] signing in {} ({})", identity.user.display_name(), identity.user.id);

    let scoped = api.with_session(Session::new());
    let token = api::auth::exchange_init_data(&scoped, &identity.init_data)
        .await
        .map_err(AuthError::Exchange)?;
    scoped.session().set_token(token.access_token.clone());

    let user = api::users::me(&scoped).await.map_err(AuthError::Profile)?;
    log::info!("[Auth] signed in as user {}", user.id);
    Ok(SignedIn {
        token: token.access_token,
        user,
    })
}

/// Generation counter for overlapping handshakes
#[derive(Debug, Clone, Default)]
pub struct Handshakes {
    latest: Rc<Cell<u64>>,
}

impl Handshakes {
    /// Start a handshake, superseding any still in flight
    pub fn begin(&self) -> u64 {
        let generation = self.latest.get() + 1;
        self.latest.set(generation);
        generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.latest.get() == generation
    }

    /// Install the token on `session` and hand back the outcome, or `None`
    /// when a newer handshake has started since `generation` began.
    pub fn finish(
        &self,
        generation: u64,
        session: &Session,
        result: Result<SignedIn, AuthError>,
    ) -> Option<Result<User, AuthError>> {
        if !self.is_current(generation) {
            return None;
        }
        Some(result.map(|signed_in| {
            session.set_token(signed_in.token);
            signed_in.user
        }))
    }
}
