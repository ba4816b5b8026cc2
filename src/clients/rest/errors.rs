//! Error type for calls made through the Gerrit transport.
//!
//! [`GerritError`] separates failures of the caller's own input (an invalid
//! path, arguments that cannot be encoded) from transport and server
//! failures, which arrive wrapped in [`HttpError`].
//!
//! # Example
//!
//! ```rust,ignore
//! use gerrit_api::clients::rest::GerritError;
//!
//! match client.projects().get_project("demo").await {
//!     Ok(project) => println!("{}", project.id),
//!     Err(e) if e.is_not_found() => println!("No such project"),
//!     Err(GerritError::Json(e)) => println!("Unexpected payload: {e}"),
//!     Err(e) => println!("Call failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for Gerrit API calls.
///
/// # Example
///
/// ```rust
/// use gerrit_api::clients::rest::GerritError;
///
/// let error = GerritError::InvalidPath { path: String::new() };
/// assert!(error.to_string().contains("Invalid"));
/// assert!(!error.is_not_found());
/// ```
#[derive(Debug, Error)]
pub enum GerritError {
    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A request body could not be encoded or a response body could not
    /// be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request path is empty after normalization.
    #[error("Invalid Gerrit API path: {path}")]
    InvalidPath {
        /// The path that was provided.
        path: String,
    },

    /// GET arguments could not be flattened into query parameters.
    #[error("Invalid query arguments: {reason}")]
    InvalidArguments {
        /// What was wrong with the arguments.
        reason: String,
    },
}

impl GerritError {
    /// Returns the HTTP status code, if the error came from a response.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Returns `true` if the server answered `404 Not Found`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_not_found())
    }

    /// Returns `true` if the server answered `403 Forbidden`.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_forbidden())
    }

    /// Returns `true` if the server answered `401 Unauthorized`.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_unauthorized())
    }

    /// Returns `true` if the transport timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }
}
