//! CLI configuration.

use std::path::PathBuf;

use affiliate_client::{ClientConfig, BASE_URL_ENV, DEFAULT_BASE_URL};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// File names searched for in the working directory and its parents.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["affiliate.toml", ".affiliate.toml", "affiliate.json"];

/// Environment variable overriding the token file location.
pub const TOKEN_FILE_ENV: &str = "AFFILIATE_TOKEN_FILE";

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Backend configuration.
    #[serde(default)]
    pub api: ClientConfig,

    /// Session storage configuration.
    #[serde(default)]
    pub session: SessionConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Apply environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        self.api = self.api.with_env_override();
        if let Ok(path) = std::env::var(TOKEN_FILE_ENV) {
            if !path.trim().is_empty() {
                self.session.token_file = Some(PathBuf::from(path));
            }
        }
        self
    }

    /// Where the session token is persisted.
    pub fn token_file(&self) -> PathBuf {
        self.session
            .token_file
            .clone()
            .unwrap_or_else(default_token_file)
    }
}

/// Session storage configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Token file path (default: the user's data directory).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_file: Option<PathBuf>,
}

/// Platform-specific default location of the token file.
pub fn default_token_file() -> PathBuf {
    let base = if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        std::env::temp_dir()
    };
    base.join("affiliate-cli").join("session.json")
}

/// Generate a default affiliate.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Affiliate catalog CLI configuration

[api]
base_url = "{base_url}"

[session]
# token_file = "~/.local/share/affiliate-cli/session.json"

# Environment overrides: {url_env}, {token_env}
"#,
        base_url = DEFAULT_BASE_URL,
        url_env = BASE_URL_ENV,
        token_env = TOKEN_FILE_ENV,
    )
}
