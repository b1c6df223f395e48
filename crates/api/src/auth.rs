//! Admin gate for the `admin*` actions.
//!
//! Authentication is a single shared password compared for exact
//! equality on every request. There are no sessions, token expiry, or
//! hashing; keeping this behaviour unchanged is an explicit product
//! decision, not an oversight.

use encore_core::error::CoreError;

use crate::config::ServerConfig;
use crate::error::AppError;

/// Check the request's `password` field against the configured secret.
///
/// Fails when no password is configured, so a blank `ADMIN_PASSWORD`
/// disables the admin surface entirely.
pub fn require_admin(config: &ServerConfig, password: Option<&str>) -> Result<(), AppError> {
    let expected = config.admin_password.as_str();
    if !expected.is_empty() && password == Some(expected) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Unauthorized(
            "Invalid admin password".to_string(),
        )))
    }
}
