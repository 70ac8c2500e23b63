//! ghctx: resolve repository references and `workflow run` options before any
//! network or interactive work happens.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{resolve_repository, resolve_repository_with, workflow_run_options};
pub use app::{repository_resolver, run_options_resolver};
pub use domain::{AppError, Config, RepositoryReference, RunFlags, RunOptions};
pub use ports::{ConfigProvider, IdentityProvider, InputDescriptor};
