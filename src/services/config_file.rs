//! Configuration provider backed by `config.toml` on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::configuration::{HOST_ENV_VAR, validate_host};
use crate::domain::{AppError, Config};
use crate::ports::ConfigProvider;

/// Environment variable that relocates the configuration directory.
pub const CONFIG_DIR_ENV_VAR: &str = "GHCTX_CONFIG_DIR";

const CONFIG_FILE: &str = "config.toml";

/// Loads [`Config`] from `<config dir>/config.toml`.
///
/// A missing file yields the blank configuration. `GH_HOST`, when set,
/// overrides the configured default host.
#[derive(Debug, Clone)]
pub struct FileConfigProvider {
    config_dir: Option<PathBuf>,
    host_override: Option<String>,
}

impl FileConfigProvider {
    /// Read from an explicit directory, ignoring the environment.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self { config_dir: Some(config_dir.into()), host_override: None }
    }

    /// Resolve the directory and host override from the environment.
    ///
    /// `GHCTX_CONFIG_DIR` wins; otherwise the platform config directory
    /// (`~/.config/ghctx` on Linux) is used.
    pub fn from_env() -> Self {
        let config_dir = std::env::var_os(CONFIG_DIR_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .or_else(|| dirs::config_dir().map(|dir| dir.join("ghctx")));
        let host_override =
            std::env::var(HOST_ENV_VAR).ok().filter(|value| !value.trim().is_empty());

        Self { config_dir, host_override }
    }

    pub fn with_host_override(mut self, host: impl Into<String>) -> Self {
        self.host_override = Some(host.into());
        self
    }

    pub fn config_path(&self) -> Option<PathBuf> {
        self.config_dir.as_ref().map(|dir| dir.join(CONFIG_FILE))
    }

    fn read_file(path: &Path) -> Result<Config, AppError> {
        if !path.is_file() {
            tracing::debug!(?path, "No config file found, using blank configuration");
            return Ok(Config::blank());
        }

        tracing::debug!(?path, "Loading config file");
        let content = fs::read_to_string(path)?;
        Config::parse_toml(&content).map_err(|err| {
            AppError::config_error(format!("Invalid config file {}: {}", path.display(), err))
        })
    }
}

impl ConfigProvider for FileConfigProvider {
    fn load_config(&self) -> Result<Config, AppError> {
        let config = match self.config_path() {
            Some(path) => Self::read_file(&path)?,
            None => Config::blank(),
        };

        match &self.host_override {
            Some(host) => {
                validate_host(host).map_err(|err| {
                    AppError::config_error(format!("Invalid {}: {}", HOST_ENV_VAR, err))
                })?;
                tracing::debug!(host = %host, "Default host overridden from environment");
                Ok(config.with_default_host(host.clone()))
            }
            None => Ok(config),
        }
    }
}
