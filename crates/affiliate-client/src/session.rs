//! Session context.
//!
//! The admin bearer token lives in session-local storage. Instead of reading
//! ambient global storage, the client receives a [`SessionContext`] wrapping a
//! [`TokenStore`], so tests and tools can supply their own storage.

use std::sync::{Arc, Mutex};

use affiliate_catalog::RepositoryError;

/// Key the token is stored under.
pub const TOKEN_KEY: &str = "admin_token";

/// Errors from session storage.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session storage error: {0}")]
    Storage(String),
}

/// Persistent storage for the session token.
pub trait TokenStore: Send + Sync {
    /// Read the stored token, if any.
    fn load(&self) -> Option<String>;

    /// Replace the stored token.
    fn save(&self, token: &str) -> Result<(), SessionError>;

    /// Remove the stored token.
    fn clear(&self) -> Result<(), SessionError>;
}

/// Token store held in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Mutex::new(Some(token.into())),
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.token.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<String> {
        self.slot().clone()
    }

    fn save(&self, token: &str) -> Result<(), SessionError> {
        *self.slot() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        *self.slot() = None;
        Ok(())
    }
}

/// The caller's session, passed explicitly to the client.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn TokenStore>,
}

impl std::fmt::Debug for SessionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionContext")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

impl SessionContext {
    /// Create a session over a token store.
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// A session with no token (public storefront).
    pub fn anonymous() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// An in-memory session holding `token`.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(Arc::new(MemoryTokenStore::with_token(token)))
    }

    /// The current token. Blank tokens count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.load().filter(|t| !t.trim().is_empty())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// The token, or [`RepositoryError::AuthMissing`] for the login boundary.
    pub fn require_token(&self) -> Result<String, RepositoryError> {
        self.token().ok_or(RepositoryError::AuthMissing)
    }

    /// Value for the `Authorization` header.
    pub fn authorization(&self) -> Option<String> {
        self.token().map(|t| format!("Bearer {}", t))
    }

    /// Store a new token.
    pub fn login(&self, token: &str) -> Result<(), SessionError> {
        self.store.save(token.trim())
    }

    /// Forget the token.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.store.clear()
    }
}
