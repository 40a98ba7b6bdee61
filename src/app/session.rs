//! Session Token Store
//!
//! The single session-context provider. The bearer token lives in one file
//! under the platform data directory and is read back at request time, so
//! every collaborator observes the same token without caching it. `clear`
//! is idempotent; clearing an already-cleared session is a no-op.

use std::io;
use std::path::PathBuf;

/// Persisted session token with explicit get/set/clear.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Open the store at its platform-default location.
    pub fn open() -> Self {
        let mut path = dirs::data_dir().unwrap_or_else(std::env::temp_dir);
        path.push("civipost");
        path.push("session.token");
        Self { path }
    }

    /// Open the store at an explicit path. Used by tests.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// The current token, if a session exists.
    pub fn token(&self) -> Option<String> {
        let raw = std::fs::read_to_string(&self.path).ok()?;
        let token = raw.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Persist a new token, replacing any existing session.
    pub fn set_token(&self, token: &str) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, token)
    }

    /// Destroy the session. Safe to call when no session exists.
    pub fn clear(&self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(error = %e, "failed to remove session token file");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::with_path(dir.path().join("session.token"))
    }

    #[test]
    fn test_token_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        assert_eq!(store.token(), None);
        store.set_token("tok-123").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-123"));
    }

    #[test]
    fn test_set_token_replaces_previous() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.set_token("first").unwrap();
        store.set_token("second").unwrap();
        assert_eq!(store.token().as_deref(), Some("second"));
    }

    #[test]
    fn test_clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.set_token("tok-123").unwrap();
        store.clear();
        assert_eq!(store.token(), None);

        // A second clear must behave the same as the first.
        store.clear();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_blank_file_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = temp_store(&dir);

        store.set_token("  \n").unwrap();
        assert_eq!(store.token(), None);
    }

    #[test]
    fn test_set_token_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::with_path(dir.path().join("nested").join("session.token"));

        store.set_token("tok-123").unwrap();
        assert_eq!(store.token().as_deref(), Some("tok-123"));
    }
}
