//! Error types for the Gerrit API client.
//!
//! This module contains the errors caused by the caller's own input:
//! configuration values and timestamps. Transport and server failures live
//! in [`clients`](crate::clients).
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use gerrit_api::{ConfigError, Username};
//!
//! let result = Username::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyUsername)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Username cannot be empty.
    #[error("Username cannot be empty. Please provide a valid Gerrit username.")]
    EmptyUsername,

    /// Password cannot be empty.
    #[error("Password cannot be empty. Please provide a valid Gerrit HTTP password.")]
    EmptyPassword,

    /// Endpoint URL is invalid.
    #[error("Invalid endpoint '{url}'. Please provide an absolute http(s) URL (e.g., 'https://review.example.com').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The number of request attempts must be at least one.
    #[error("Invalid tries value {tries}. At least one attempt is required.")]
    InvalidTries {
        /// The invalid value that was provided.
        tries: u32,
    },

    /// The default page size must be at least one.
    #[error("Invalid default limit {limit}. The default page size must be at least 1.")]
    InvalidDefaultLimit {
        /// The invalid value that was provided.
        limit: u32,
    },
}

/// Errors raised by the Gerrit timestamp codec.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// Gerrit timestamps carry exactly four year digits.
    #[error("Timestamp year {year} is outside of range [0, 9999].")]
    YearOutOfRange {
        /// The year of the rejected instant.
        year: i32,
    },

    /// The text does not match `YYYY-MM-DD HH:MM:SS.nnnnnnnnn`.
    #[error("Invalid Gerrit timestamp '{input}'. Expected 'YYYY-MM-DD HH:MM:SS.nnnnnnnnn'.")]
    InvalidFormat {
        /// The text that failed to parse.
        input: String,
    },
}
