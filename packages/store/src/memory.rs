use std::sync::{Arc, Mutex};

use crate::session::{Session, SessionStore};

/// In-memory SessionStore for tests.
///
/// Clones share the same slot, so a client and a session manager built from
/// clones of one store see each other's writes.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    session: Arc<Mutex<Option<Session>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `session`.
    pub fn with_session(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(Some(session))),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        self.session.lock().ok()?.clone()
    }

    fn save(&self, session: &Session) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = Some(session.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.session.lock() {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_clear() {
        let store = MemoryStore::new();

        // Initially empty
        assert!(store.load().is_none());
        assert!(!store.has_token());

        store.save(&Session::new("tok", "admin"));
        assert_eq!(store.load(), Some(Session::new("tok", "admin")));
        assert_eq!(store.username().as_deref(), Some("admin"));

        store.clear();
        assert!(store.load().is_none());

        // Clearing twice is the same as once
        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.save(&Session::new("shared", "admin"));
        assert!(other.has_token());

        other.clear();
        assert!(!store.has_token());
    }
}
