//! # Persisted client session
//!
//! A [`Session`] is the credential pair handed out by the backend on login: an
//! opaque bearer `token` and the `username` it was issued for. It lives in
//! persistent client storage so a page reload keeps the admin signed in.
//!
//! ## [`SessionStore`] trait
//!
//! Three synchronous methods (`load`, `save`, `clear`). Storage access is
//! synchronous on every platform we target (`localStorage`, a small file, or
//! memory), so there is nothing to await. Implementations live in sibling
//! modules ([`crate::memory`], [`crate::file_store`], and `crate::local` on the web).
//!
//! Backends never fail the caller: a broken or unavailable storage degrades to
//! "no session" and the problem is logged.
//!
//! ## Storage keys
//!
//! Both values are stored under fixed keys, [`TOKEN_KEY`] and [`USERNAME_KEY`].
//! A stored token is what makes a session exist; a missing username is read
//! back as an empty string.

use serde::{Deserialize, Serialize};

/// Storage key for the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Storage key for the signed-in username.
pub const USERNAME_KEY: &str = "username";

/// Credentials of the signed-in admin.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    #[serde(default)]
    pub username: String,
}

impl Session {
    pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            username: username.into(),
        }
    }

    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Persistent storage for the current [`Session`].
pub trait SessionStore {
    /// Read the stored session, if a token is present.
    fn load(&self) -> Option<Session>;

    /// Persist `session`, replacing any previous one.
    fn save(&self, session: &Session);

    /// Remove any stored session. Clearing an empty store is a no-op.
    fn clear(&self);

    /// Whether a token is currently stored.
    fn has_token(&self) -> bool {
        self.load().is_some()
    }

    /// Username of the stored session.
    fn username(&self) -> Option<String> {
        self.load().map(|s| s.username)
    }
}
