//! Identity provider port definition.

use crate::domain::AppError;

/// Looks up the currently authenticated account.
pub trait IdentityProvider {
    /// Login of the authenticated user.
    fn current_login(&self) -> Result<String, AppError>;
}

impl<F> IdentityProvider for F
where
    F: Fn() -> Result<String, AppError>,
{
    fn current_login(&self) -> Result<String, AppError> {
        self()
    }
}
