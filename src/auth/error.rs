//! Credential error types.

use thiserror::Error;

/// Errors raised while a credential authenticates a request.
///
/// These abort the call before anything is sent.
///
/// # Example
///
/// ```rust
/// use gerrit_api::auth::AuthError;
///
/// let error = AuthError::ColonInUsername;
/// assert!(error.to_string().contains("':'"));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// HTTP Basic authentication cannot carry a username containing `:`.
    #[error("Username must not contain ':' when using HTTP Basic authentication.")]
    ColonInUsername,

    /// The credential refused to authenticate the request.
    #[error("Credential rejected the request: {reason}")]
    Rejected {
        /// Why the credential refused.
        reason: String,
    },
}
