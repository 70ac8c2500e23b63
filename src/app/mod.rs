pub mod api;
pub mod cli;
mod logging;
mod output;
pub mod repository_resolver;
pub mod run_options_resolver;
