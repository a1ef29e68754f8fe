//! # Filesystem-backed session store
//!
//! [`FileStore`] is a [`SessionStore`] implementation that persists the session
//! as a small TOML file. It is used by native builds so a signed-in admin stays
//! signed in across restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── session.toml       # token = "...", username = "..."
//! ```
//!
//! Use `dirs::data_dir()` joined with `portfolio` for a platform-appropriate
//! base directory.

use std::path::PathBuf;

use crate::session::{Session, SessionStore};

const SESSION_FILE: &str = "session.toml";

/// Filesystem-backed SessionStore for native persistence.
#[derive(Clone, Debug)]
pub struct FileStore {
    base: PathBuf,
}

impl FileStore {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn session_path(&self) -> PathBuf {
        self.base.join(SESSION_FILE)
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Option<Session> {
        let content = std::fs::read_to_string(self.session_path()).ok()?;
        match toml::from_str::<Session>(&content) {
            Ok(session) if !session.token.is_empty() => Some(session),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!("Ignoring unreadable session file: {}", e);
                None
            }
        }
    }

    fn save(&self, session: &Session) {
        let content = match toml::to_string(session) {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!("Failed to serialize session: {}", e);
                return;
            }
        };
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create session directory: {}", e);
            return;
        }
        if let Err(e) = std::fs::write(self.session_path(), content) {
            tracing::warn!("Failed to write session file: {}", e);
        }
    }

    fn clear(&self) {
        match std::fs::remove_file(self.session_path()) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove session file: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_roundtrip() {
        let dir = std::env::temp_dir().join(format!("portfolio_session_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let store = FileStore::new(dir.clone());
        assert!(store.load().is_none());

        store.save(&Session::new("file-token", "admin"));

        // Re-open from same directory
        let store2 = FileStore::new(dir.clone());
        assert_eq!(store2.load(), Some(Session::new("file-token", "admin")));

        store2.clear();
        assert!(store.load().is_none());
        store2.clear();

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_clear_reports_undeletable_session() {
        let dir = std::env::temp_dir().join(format!("portfolio_session_dir_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        // A directory where the file should be cannot be removed with remove_file
        std::fs::create_dir_all(dir.join(SESSION_FILE)).unwrap();
        let store = FileStore::new(dir.clone());
        store.clear();
        assert!(dir.join(SESSION_FILE).exists());

        // Clearing a store that never held a session stays quiet
        let _ = std::fs::remove_dir_all(&dir);
        FileStore::new(dir.clone()).clear();
        assert!(!dir.exists());
    }

    #[test]
    fn test_corrupt_file_reads_as_no_session() {
        let dir = std::env::temp_dir().join(format!("portfolio_session_corrupt_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(SESSION_FILE), "not = [valid").unwrap();

        let store = FileStore::new(dir.clone());
        assert!(store.load().is_none());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
