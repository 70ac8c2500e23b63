use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::IdentityProvider;

/// Identity provider that counts calls and returns a fixed outcome.
pub struct FakeIdentityProvider {
    result: Result<String, (u16, String)>,
    pub calls: Mutex<usize>,
}

impl FakeIdentityProvider {
    pub fn login(login: &str) -> Self {
        Self { result: Ok(login.to_string()), calls: Mutex::new(0) }
    }

    /// Fails the way an HTTP error response would.
    pub fn http_error(status: u16, message: &str) -> Self {
        Self { result: Err((status, message.to_string())), calls: Mutex::new(0) }
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl IdentityProvider for FakeIdentityProvider {
    fn current_login(&self) -> Result<String, AppError> {
        *self.calls.lock().unwrap() += 1;
        match &self.result {
            Ok(login) => Ok(login.clone()),
            Err((status, message)) => {
                Err(AppError::Api { status: *status, message: message.clone() })
            }
        }
    }
}
