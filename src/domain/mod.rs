pub mod configuration;
pub mod error;
pub mod repository;
pub mod run_options;

pub use configuration::{ApiSettings, Config};
pub use error::AppError;
pub use repository::{DEFAULT_HOST, ParsedReference, RepositoryReference};
pub use run_options::{INPUT_ARGS_SEPARATOR, RunFlags, RunOptions};
