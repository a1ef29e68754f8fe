//! # Browser `localStorage` session store
//!
//! [`LocalStore`] is the [`SessionStore`] used on the **web platform**. The
//! token and username are kept as two plain string entries under
//! [`TOKEN_KEY`] and [`USERNAME_KEY`] in `window.localStorage`.
//!
//! Every method looks the storage object up again instead of holding it, so the
//! store is a zero-size `Copy` value. Errors (private browsing, disabled
//! storage) are logged and read as "no session".

use web_sys::Storage;

use crate::session::{Session, SessionStore, TOKEN_KEY, USERNAME_KEY};

/// `localStorage`-backed SessionStore for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        match web_sys::window()?.local_storage() {
            Ok(storage) => storage,
            Err(e) => {
                tracing::warn!("localStorage unavailable: {:?}", e);
                None
            }
        }
    }
}

impl SessionStore for LocalStore {
    fn load(&self) -> Option<Session> {
        let storage = self.storage()?;
        let token = storage.get_item(TOKEN_KEY).ok()??;
        if token.is_empty() {
            return None;
        }
        let username = storage.get_item(USERNAME_KEY).ok().flatten().unwrap_or_default();
        Some(Session { token, username })
    }

    fn save(&self, session: &Session) {
        let Some(storage) = self.storage() else {
            return;
        };
        if let Err(e) = storage.set_item(TOKEN_KEY, &session.token) {
            tracing::warn!("Failed to store token: {:?}", e);
            return;
        }
        if let Err(e) = storage.set_item(USERNAME_KEY, &session.username) {
            tracing::warn!("Failed to store username: {:?}", e);
        }
    }

    fn clear(&self) {
        let Some(storage) = self.storage() else {
            return;
        };
        for key in [TOKEN_KEY, USERNAME_KEY] {
            if let Err(e) = storage.remove_item(key) {
                tracing::warn!("Failed to remove {}: {:?}", key, e);
            }
        }
    }
}
