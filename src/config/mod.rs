//! Configuration types for the Gerrit API client.
//!
//! This module provides the configuration types used to tune HTTP behavior
//! and the validated value types used by credentials.
//!
//! # Overview
//!
//! - [`GerritConfig`]: Client-wide settings (user agent, timeout, retries, page size)
//! - [`GerritConfigBuilder`]: A builder for constructing [`GerritConfig`] instances
//! - [`Endpoint`]: A validated Gerrit server URL
//! - [`Username`]: A validated account name
//! - [`Password`]: A validated HTTP password with masked debug output
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use gerrit_api::GerritConfig;
//!
//! let config = GerritConfig::builder()
//!     .user_agent_prefix("review-bot/1.0")
//!     .timeout(Duration::from_secs(30))
//!     .tries(3)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.tries(), 3);
//! ```

mod newtypes;

pub use newtypes::{Endpoint, Password, Username};

use std::time::Duration;

use crate::error::ConfigError;

/// Page size applied by [`ListOptions`](crate::rest::ListOptions) when no
/// explicit limit is given.
pub const DEFAULT_LIMIT: u32 = 25;

/// Client-wide configuration.
///
/// `GerritConfig` is `Clone`, `Send`, and `Sync`. It carries no secrets;
/// authentication material lives in a [`Credential`](crate::auth::Credential).
#[derive(Clone, Debug)]
pub struct GerritConfig {
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    debug: bool,
    tries: u32,
    default_limit: u32,
}

impl GerritConfig {
    /// Creates a new builder for constructing a `GerritConfig`.
    #[must_use]
    pub fn builder() -> GerritConfigBuilder {
        GerritConfigBuilder::new()
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns whether request and response bodies are logged.
    #[must_use]
    pub const fn debug(&self) -> bool {
        self.debug
    }

    /// Returns how many times a request is attempted on 429/5xx responses.
    #[must_use]
    pub const fn tries(&self) -> u32 {
        self.tries
    }

    /// Returns the default page size for list operations.
    #[must_use]
    pub const fn default_limit(&self) -> u32 {
        self.default_limit
    }
}

impl Default for GerritConfig {
    fn default() -> Self {
        Self {
            user_agent_prefix: None,
            timeout: None,
            debug: false,
            tries: 1,
            default_limit: DEFAULT_LIMIT,
        }
    }
}

// Verify GerritConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GerritConfig>();
};

/// Builder for constructing [`GerritConfig`] instances.
///
/// # Defaults
///
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (reqwest default)
/// - `debug`: `false`
/// - `tries`: `1` (no retries)
/// - `default_limit`: [`DEFAULT_LIMIT`]
#[derive(Debug, Default)]
pub struct GerritConfigBuilder {
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
    debug: Option<bool>,
    tries: Option<u32>,
    default_limit: Option<u32>,
}

impl GerritConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets the overall request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables logging of request and response bodies at `debug` level.
    #[must_use]
    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Sets how many times a request is attempted on 429/5xx responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = Some(tries);
        self
    }

    /// Sets the default page size for list operations.
    #[must_use]
    pub const fn default_limit(mut self, limit: u32) -> Self {
        self.default_limit = Some(limit);
        self
    }

    /// Builds the [`GerritConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidTries`] if `tries` is zero, or
    /// [`ConfigError::InvalidDefaultLimit`] if `default_limit` is zero.
    pub fn build(self) -> Result<GerritConfig, ConfigError> {
        let tries = self.tries.unwrap_or(1);
        if tries == 0 {
            return Err(ConfigError::InvalidTries { tries });
        }

        let default_limit = self.default_limit.unwrap_or(DEFAULT_LIMIT);
        if default_limit == 0 {
            return Err(ConfigError::InvalidDefaultLimit {
                limit: default_limit,
            });
        }

        Ok(GerritConfig {
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
            debug: self.debug.unwrap_or(false),
            tries,
            default_limit,
        })
    }
}
