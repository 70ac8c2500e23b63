//! API Facade for the application.
//!
//! Wires the on-disk configuration, the GraphQL identity client and the
//! process's standard streams into the resolvers.

use std::cell::RefCell;

use crate::app::{repository_resolver, run_options_resolver};
use crate::domain::{AppError, Config, RepositoryReference, RunFlags, RunOptions};
use crate::ports::{ConfigProvider, IdentityProvider};
use crate::services::{FileConfigProvider, GraphQlIdentityClient, StdioInput};

/// Shares a single configuration load between host and owner resolution.
struct SessionConfig<'a> {
    provider: &'a FileConfigProvider,
    loaded: RefCell<Option<Config>>,
}

impl<'a> SessionConfig<'a> {
    fn new(provider: &'a FileConfigProvider) -> Self {
        Self { provider, loaded: RefCell::new(None) }
    }
}

impl ConfigProvider for SessionConfig<'_> {
    fn load_config(&self) -> Result<Config, AppError> {
        if let Some(config) = self.loaded.borrow().as_ref() {
            return Ok(config.clone());
        }
        let config = self.provider.load_config()?;
        *self.loaded.borrow_mut() = Some(config.clone());
        Ok(config)
    }
}

/// Identity lookup against the GraphQL endpoint of the configured host.
struct SessionIdentity<'a> {
    config: &'a SessionConfig<'a>,
}

impl IdentityProvider for SessionIdentity<'_> {
    fn current_login(&self) -> Result<String, AppError> {
        let config = self.config.load_config()?;
        GraphQlIdentityClient::from_config(&config)?.current_login()
    }
}

/// Resolve a repository identifier with configuration read from the environment.
///
/// With `lookup_owner` unset, a missing owner is left empty instead of being
/// fetched from the API.
pub fn resolve_repository(input: &str, lookup_owner: bool) -> Result<RepositoryReference, AppError> {
    resolve_repository_with(input, &FileConfigProvider::from_env(), lookup_owner)
}

/// Resolve a repository identifier with an explicit configuration source.
pub fn resolve_repository_with(
    input: &str,
    provider: &FileConfigProvider,
    lookup_owner: bool,
) -> Result<RepositoryReference, AppError> {
    let config = SessionConfig::new(provider);
    let identity = SessionIdentity { config: &config };

    let identity: Option<&dyn IdentityProvider> =
        if lookup_owner { Some(&identity) } else { None };
    repository_resolver::resolve_repository(input, Some(&config), identity)
}

/// Resolve `workflow run` options against the process's standard streams.
pub fn workflow_run_options(positional: &[String], flags: RunFlags) -> Result<RunOptions, AppError> {
    run_options_resolver::resolve_run_options(positional, flags, &StdioInput)
}
