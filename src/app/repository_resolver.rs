//! Resolution of `[HOST/]OWNER/REPO` short-hands into full references.

use crate::domain::{AppError, DEFAULT_HOST, ParsedReference, RepositoryReference};
use crate::ports::{ConfigProvider, IdentityProvider};

/// Resolve `input` into a [`RepositoryReference`].
///
/// Segments missing from `input` are filled in order, each with at most one
/// collaborator call:
///
/// 1. host: the config provider's default host, or `github.com` without one;
/// 2. owner: the identity provider's login, or empty without one.
///
/// The first collaborator failure aborts resolution; later steps never run.
pub fn resolve_repository(
    input: &str,
    config: Option<&dyn ConfigProvider>,
    identity: Option<&dyn IdentityProvider>,
) -> Result<RepositoryReference, AppError> {
    let parsed = ParsedReference::parse(input)?;

    let host = match (parsed.host, config) {
        (Some(host), _) => host.to_string(),
        (None, Some(provider)) => provider
            .load_config()
            .map_err(|err| AppError::ConfigLookupFailed(Box::new(err)))?
            .default_host()
            .to_string(),
        (None, None) => DEFAULT_HOST.to_string(),
    };

    let owner = match (parsed.owner, identity) {
        (Some(owner), _) => owner.to_string(),
        (None, Some(provider)) => provider
            .current_login()
            .map_err(|err| AppError::IdentityLookupFailed(Box::new(err)))?,
        (None, None) => String::new(),
    };

    Ok(RepositoryReference::new(host, owner, parsed.name))
}
