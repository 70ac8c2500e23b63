//! Configuration provider port definition.

use crate::domain::{AppError, Config};

/// Supplies the user configuration on demand.
pub trait ConfigProvider {
    /// Load the configuration.
    fn load_config(&self) -> Result<Config, AppError>;
}

impl<F> ConfigProvider for F
where
    F: Fn() -> Result<Config, AppError>,
{
    fn load_config(&self) -> Result<Config, AppError> {
        self()
    }
}
