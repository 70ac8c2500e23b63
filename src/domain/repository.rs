//! Repository references and the `[HOST/]OWNER/REPO` short-hand.

use std::fmt;

use serde::Serialize;

use super::AppError;

/// Host used when neither the input nor configuration names one.
pub const DEFAULT_HOST: &str = "github.com";

/// A fully-resolved repository reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepositoryReference {
    host: String,
    owner: String,
    name: String,
}

impl RepositoryReference {
    pub fn new(host: impl Into<String>, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self { host: host.into(), owner: owner.into(), name: name.into() }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Empty when the owner was neither supplied nor looked up.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `OWNER/REPO`, or just `REPO` while the owner is unknown.
    pub fn full_name(&self) -> String {
        if self.owner.is_empty() {
            self.name.clone()
        } else {
            format!("{}/{}", self.owner, self.name)
        }
    }

    /// Compare two references ignoring ASCII case.
    pub fn is_same(&self, other: &RepositoryReference) -> bool {
        self.host.eq_ignore_ascii_case(&other.host)
            && self.owner.eq_ignore_ascii_case(&other.owner)
            && self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl fmt::Display for RepositoryReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.host.eq_ignore_ascii_case(DEFAULT_HOST) {
            write!(f, "{}", self.full_name())
        } else {
            write!(f, "{}/{}", self.host, self.full_name())
        }
    }
}

/// The literal components of a repository identifier, before any fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference<'a> {
    pub host: Option<&'a str>,
    pub owner: Option<&'a str>,
    pub name: &'a str,
}

impl<'a> ParsedReference<'a> {
    /// Split `input` on `/` into one to three non-empty segments.
    pub fn parse(input: &'a str) -> Result<Self, AppError> {
        let segments: Vec<&str> = input.split('/').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(AppError::MalformedReference(input.to_string()));
        }

        match segments[..] {
            [name] => Ok(Self { host: None, owner: None, name }),
            [owner, name] => Ok(Self { host: None, owner: Some(owner), name }),
            [host, owner, name] => Ok(Self { host: Some(host), owner: Some(owner), name }),
            _ => Err(AppError::MalformedReference(input.to_string())),
        }
    }
}
