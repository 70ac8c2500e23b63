mod config_file;
mod identity_graphql;
mod stdio_input;

pub use config_file::{CONFIG_DIR_ENV_VAR, FileConfigProvider};
pub use identity_graphql::{GraphQlIdentityClient, TOKEN_ENV_VARS};
pub use stdio_input::StdioInput;
