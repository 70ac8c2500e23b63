//! User configuration model (`config.toml`).

use serde::Deserialize;
use url::Url;

use super::AppError;
use super::repository::DEFAULT_HOST;

/// Environment variable that overrides the configured default host.
pub const HOST_ENV_VAR: &str = "GH_HOST";

/// User-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Host used for references that do not name one.
    #[serde(default = "default_host")]
    default_host: String,
    /// API client settings.
    #[serde(default)]
    pub api: ApiSettings,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::blank()
    }
}

impl Config {
    /// Configuration used when no file exists.
    pub fn blank() -> Self {
        Self { default_host: default_host(), api: ApiSettings::default() }
    }

    pub fn with_default_host(mut self, host: impl Into<String>) -> Self {
        self.default_host = host.into();
        self
    }

    pub fn default_host(&self) -> &str {
        &self.default_host
    }

    /// Parse and validate TOML content.
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        validate_host(&self.default_host)?;
        if self.api.timeout_secs == 0 {
            return Err(AppError::config_error("api.timeout_secs must be greater than zero"));
        }
        Ok(())
    }

    /// GraphQL endpoint for the default host, unless overridden.
    pub fn graphql_url(&self) -> Result<Url, AppError> {
        if let Some(url) = &self.api.graphql_url {
            return Ok(url.clone());
        }
        graphql_url_for_host(&self.default_host)
    }
}

/// API client settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSettings {
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Explicit GraphQL endpoint.
    #[serde(default)]
    pub graphql_url: Option<Url>,
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self { timeout_secs: default_timeout_secs(), graphql_url: None }
    }
}

/// Reject host names that would not survive a round trip through a reference.
pub fn validate_host(host: &str) -> Result<(), AppError> {
    if host.is_empty() {
        return Err(AppError::config_error("default_host must not be empty"));
    }
    if host.contains('/') || host.chars().any(char::is_whitespace) {
        return Err(AppError::config_error(format!(
            "Invalid default_host '{}': must be a bare host name",
            host
        )));
    }
    Ok(())
}

/// `api.github.com` for the public host, `<host>/api/graphql` for enterprise hosts.
pub fn graphql_url_for_host(host: &str) -> Result<Url, AppError> {
    let raw = if host.eq_ignore_ascii_case(DEFAULT_HOST) {
        "https://api.github.com/graphql".to_string()
    } else {
        format!("https://{}/api/graphql", host)
    };
    Url::parse(&raw).map_err(|e| AppError::ParseError {
        what: "GraphQL endpoint".to_string(),
        details: format!("{}: {}", raw, e),
    })
}
