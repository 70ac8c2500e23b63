//! Identity provider backed by the GitHub GraphQL API.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, Config};
use crate::ports::IdentityProvider;

/// Token variables, in lookup order.
pub const TOKEN_ENV_VARS: [&str; 2] = ["GH_TOKEN", "GITHUB_TOKEN"];

const CURRENT_USER_QUERY: &str = "query UserCurrent{viewer{login}}";

/// Looks up the authenticated user's login with a single GraphQL query.
#[derive(Clone)]
pub struct GraphQlIdentityClient {
    endpoint: Url,
    token: Option<String>,
    client: Client,
}

impl std::fmt::Debug for GraphQlIdentityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphQlIdentityClient")
            .field("endpoint", &self.endpoint)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl GraphQlIdentityClient {
    /// Create a client for `endpoint` with the given request timeout.
    pub fn new(endpoint: Url, token: Option<String>, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { endpoint, token, client })
    }

    /// Create a client for the configured default host, reading the token from the environment.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let token = TOKEN_ENV_VARS
            .iter()
            .find_map(|key| std::env::var(key).ok().filter(|value| !value.is_empty()));

        Self::new(config.graphql_url()?, token, Duration::from_secs(config.api.timeout_secs))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[derive(Debug, Serialize)]
struct GraphQlRequest<'a> {
    query: &'a str,
}

#[derive(Debug, Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<CurrentUserData>,
    #[serde(default)]
    errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
struct CurrentUserData {
    viewer: Viewer,
}

#[derive(Debug, Deserialize)]
struct Viewer {
    login: String,
}

#[derive(Debug, Deserialize)]
struct GraphQlError {
    message: String,
}

impl IdentityProvider for GraphQlIdentityClient {
    fn current_login(&self) -> Result<String, AppError> {
        tracing::debug!(endpoint = %self.endpoint, "Querying current user");

        let mut request = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(USER_AGENT, concat!("ghctx/", env!("CARGO_PKG_VERSION")))
            .json(&GraphQlRequest { query: CURRENT_USER_QUERY });
        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("bearer {}", token));
        }

        let response = request.send().map_err(|e| AppError::Http(e.to_string()))?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let message = body.trim();
            let message = if message.is_empty() {
                status.canonical_reason().unwrap_or("Unknown error")
            } else {
                message
            };
            return Err(AppError::Api { status: status.as_u16(), message: message.to_string() });
        }

        let payload: GraphQlResponse = response.json().map_err(|e| AppError::ParseError {
            what: "current user response".to_string(),
            details: e.to_string(),
        })?;

        if !payload.errors.is_empty() {
            let messages: Vec<&str> =
                payload.errors.iter().map(|error| error.message.as_str()).collect();
            return Err(AppError::GraphQl(messages.join("; ")));
        }

        let login = payload.data.map(|data| data.viewer.login).unwrap_or_default();
        if login.is_empty() {
            return Err(AppError::ParseError {
                what: "current user response".to_string(),
                details: "missing viewer login".to_string(),
            });
        }

        tracing::debug!(login = %login, "Resolved current user");
        Ok(login)
    }
}
