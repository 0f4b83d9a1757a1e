//! Catalog error types.

use thiserror::Error;

/// Errors returned by a [`ProductRepository`](crate::repository::ProductRepository).
///
/// Every operation is a single round trip, so each error describes the whole
/// operation; there is no partial success.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The request never produced an HTTP response (unreachable host, I/O).
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("Server rejected request ({status}): {}", .message.as_deref().unwrap_or("no message"))]
    Rejected {
        status: u16,
        /// The `error` field of the response body, when present.
        message: Option<String>,
    },

    /// The response body did not decode into the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),

    /// No session token is available for an admin operation.
    #[error("Not authenticated")]
    AuthMissing,
}

impl RepositoryError {
    /// Build a rejection from a status and an optional server message.
    pub fn rejected(status: u16, message: Option<String>) -> Self {
        RepositoryError::Rejected { status, message }
    }

    /// The message supplied by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            RepositoryError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// The text to show a user: the server message verbatim, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .filter(|m| !m.is_empty())
            .unwrap_or(fallback)
            .to_string()
    }

    /// HTTP status of a rejection.
    pub fn status(&self) -> Option<u16> {
        match self {
            RepositoryError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(e: serde_json::Error) -> Self {
        RepositoryError::Decode(e.to_string())
    }
}

/// Errors from the admin mutation workflow.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkflowError {
    /// Save was requested while no product form is open.
    #[error("No product form is open")]
    FormClosed,

    /// The repository call failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = RepositoryError::rejected(409, Some("Slug já está em uso".to_string()));
        assert_eq!(err.user_message("Falha ao salvar produto."), "Slug já está em uso");
        assert_eq!(err.status(), Some(409));
    }

    #[test]
    fn test_user_message_fallback() {
        let err = RepositoryError::rejected(500, None);
        assert_eq!(err.user_message("Falha ao salvar produto."), "Falha ao salvar produto.");

        let err = RepositoryError::rejected(400, Some(String::new()));
        assert_eq!(err.user_message("fallback"), "fallback");

        let err = RepositoryError::Transport("connection refused".to_string());
        assert_eq!(err.user_message("fallback"), "fallback");
        assert_eq!(err.status(), None);
    }
}
