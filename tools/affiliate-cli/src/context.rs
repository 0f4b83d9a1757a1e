//! CLI execution context.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use affiliate_client::{ApiClient, HttpProductRepository, SessionContext};
use anyhow::{Context as _, Result};

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;
use crate::token_store::FileTokenStore;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// Session backed by the token file.
    pub session: SessionContext,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            Self::find_config(&cwd).unwrap_or_default()
        }
        .with_env_overrides();

        let store = FileTokenStore::new(config.token_file());
        output.debug(&format!("Session file: {}", store.path().display()));
        let session = SessionContext::new(Arc::new(store));

        Ok(Self {
            config,
            output,
            cwd,
            session,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Repository over the configured backend, using the current session.
    pub fn repository(&self) -> Result<HttpProductRepository> {
        let client = ApiClient::new(self.config.api.clone(), self.session.clone())
            .context("Failed to build HTTP client")?;
        Ok(HttpProductRepository::new(client))
    }

    /// Gate for admin commands: a session token must be present.
    pub fn require_admin(&self) -> Result<()> {
        self.session
            .require_token()
            .context("Not logged in. Run `affiliate login` first.")?;
        Ok(())
    }
}
