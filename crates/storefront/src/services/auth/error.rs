//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] luxestore_core::EmailError),

    /// Name was blank at registration.
    #[error("name is required")]
    MissingName,
}
