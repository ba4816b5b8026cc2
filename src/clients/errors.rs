//! HTTP-specific error types for the Gerrit API client.
//!
//! This module contains error types for HTTP operations, including response
//! errors, retry exhaustion, credential failures and request validation.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the server
//! - [`MaxHttpRetriesExceededError`]: When retry attempts are exhausted
//! - [`InvalidHttpRequestError`]: When a request fails validation before sending
//! - [`HttpError`]: Unified error type encompassing all HTTP-related errors
//!
//! [`HttpError`] exposes classification helpers that inspect the HTTP status
//! or transport error without re-parsing the body.
//!
//! # Example
//!
//! ```rust,ignore
//! match client.request(request, &hook).await {
//!     Ok(response) => println!("Success: {}", response.text()),
//!     Err(e) if e.is_not_found() => println!("No such resource"),
//!     Err(HttpError::Response(e)) => println!("Server error {}: {}", e.code, e.message),
//!     Err(e) => println!("Request failed: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::auth::AuthError;

/// Error returned when the server answers with a non-successful status.
///
/// The message is the response body after the anti-XSSI prefix has been
/// removed. Gerrit usually answers errors in plain text; JSON string bodies
/// are unwrapped.
///
/// # Example
///
/// ```rust
/// use gerrit_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: "Not found: demo".to_string(),
/// };
///
/// assert_eq!(error.to_string(), "Not found: demo");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The response body text.
    pub message: String,
}

/// Error returned when maximum retry attempts have been exhausted.
#[derive(Debug, Error)]
#[error("Exceeded maximum retry count of {tries}. Last message: {message}")]
pub struct MaxHttpRetriesExceededError {
    /// The HTTP status code of the last response.
    pub code: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
    /// Body text of the last response.
    pub message: String,
}

/// Error returned when an HTTP request fails validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A request was configured with zero attempts.
    #[error("A request must be attempted at least once.")]
    NoAttempts,
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxHttpRetriesExceededError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The credential could not authenticate the request.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Network, connection or body read error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code carried by this error, if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::MaxRetries(e) => Some(e.code),
            Self::Network(e) => e.status().map(|status| status.as_u16()),
            Self::InvalidRequest(_) | Self::Auth(_) => None,
        }
    }

    /// Returns `true` if the server answered `404 Not Found`.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns `true` if the server answered `403 Forbidden`.
    #[must_use]
    pub fn is_forbidden(&self) -> bool {
        self.status() == Some(403)
    }

    /// Returns `true` if the server answered `401 Unauthorized`.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Returns `true` if the transport timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(e) if e.is_timeout())
    }
}
