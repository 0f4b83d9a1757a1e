//! Session token persisted to a file.

use std::path::{Path, PathBuf};

use affiliate_client::{SessionError, TokenStore, TOKEN_KEY};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// On-disk session record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSession {
    #[serde(rename = "admin_token")]
    pub token: String,
    pub saved_at: DateTime<Utc>,
}

/// Token store backed by a JSON file in the user's data directory.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full record, including when it was saved.
    pub fn read(&self) -> Option<StoredSession> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&content) {
            Ok(session) => Some(session),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "ignoring unreadable session file");
                None
            }
        }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Option<String> {
        self.read().map(|s| s.token)
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SessionError::Storage(e.to_string()))?;
        }
        let record = StoredSession {
            token: token.to_string(),
            saved_at: Utc::now(),
        };
        let content =
            serde_json::to_string_pretty(&record).map_err(|e| SessionError::Storage(e.to_string()))?;
        std::fs::write(&self.path, content).map_err(|e| SessionError::Storage(e.to_string()))
    }

    fn clear(&self) -> Result<(), SessionError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(SessionError::Storage(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> FileTokenStore {
        let path = std::env::temp_dir()
            .join(format!("affiliate-cli-test-{}-{}", name, std::process::id()))
            .join("session.json");
        FileTokenStore::new(path)
    }

    #[test]
    fn test_save_load_clear() {
        let store = temp_store("roundtrip");
        assert_eq!(store.load(), None);

        store.save("abc").unwrap();
        assert_eq!(store.load().as_deref(), Some("abc"));
        assert!(store.read().unwrap().saved_at <= Utc::now());

        store.clear().unwrap();
        assert_eq!(store.load(), None);
        store.clear().unwrap();
    }

    #[test]
    fn test_file_uses_token_key() {
        let store = temp_store("key");
        store.save("xyz").unwrap();
        let raw: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(raw[TOKEN_KEY], "xyz");
        store.clear().unwrap();
    }
}
