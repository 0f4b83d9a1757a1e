//! User-facing notifications emitted by the admin workflow.

use serde::{Deserialize, Serialize};

pub const LOAD_FAILED: &str = "Falha ao carregar produtos.";
pub const SAVE_FAILED: &str = "Falha ao salvar produto.";
pub const DELETE_FAILED: &str = "Falha ao excluir produto.";
pub const CREATED: &str = "Produto adicionado com sucesso!";
pub const UPDATED: &str = "Produto atualizado com sucesso!";
pub const DELETED: &str = "Produto excluído com sucesso!";
pub const LOGGED_OUT: &str = "Logout realizado";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Error,
}

/// A toast-style message for the operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NotificationLevel::Error
    }
}
