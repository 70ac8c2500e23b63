use std::sync::Mutex;

use crate::domain::{AppError, Config};
use crate::ports::ConfigProvider;

/// Config provider that counts calls and returns a fixed outcome.
pub struct FakeConfigProvider {
    default_host: Option<String>,
    failure: Option<String>,
    pub calls: Mutex<usize>,
}

impl FakeConfigProvider {
    /// Behaves like a freshly created, empty configuration.
    pub fn blank() -> Self {
        Self { default_host: None, failure: None, calls: Mutex::new(0) }
    }

    pub fn with_host(host: &str) -> Self {
        Self { default_host: Some(host.to_string()), failure: None, calls: Mutex::new(0) }
    }

    pub fn failing(message: &str) -> Self {
        Self { default_host: None, failure: Some(message.to_string()), calls: Mutex::new(0) }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl ConfigProvider for FakeConfigProvider {
    fn load_config(&self) -> Result<Config, AppError> {
        *self.calls.lock().unwrap() += 1;
        if let Some(message) = &self.failure {
            return Err(AppError::config_error(message.clone()));
        }
        Ok(match &self.default_host {
            Some(host) => Config::blank().with_default_host(host.clone()),
            None => Config::blank(),
        })
    }
}
