//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated Gerrit username.
///
/// # Example
///
/// ```rust
/// use gerrit_api::Username;
///
/// let user = Username::new("admin").unwrap();
/// assert_eq!(user.as_ref(), "admin");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl<'de> Deserialize<'de> for Username {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Gerrit HTTP password.
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`, so it never leaks into logs.
///
/// # Example
///
/// ```rust
/// use gerrit_api::Password;
///
/// let password = Password::new("hunter2").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new validated password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

impl<'de> Deserialize<'de> for Password {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated Gerrit server endpoint.
///
/// The endpoint must be an absolute `http` or `https` URL. It may carry a
/// path prefix for servers mounted below the site root
/// (e.g. `https://example.com/gerrit`). Trailing slashes are removed so
/// request paths can be joined with a single `/`.
///
/// # Example
///
/// ```rust
/// use gerrit_api::Endpoint;
///
/// let endpoint = Endpoint::new("https://review.example.com/").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://review.example.com");
/// assert_eq!(endpoint.host_name(), "review.example.com");
/// assert_eq!(endpoint.join("a/projects/"), "https://review.example.com/a/projects/");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL has no `http`/`https`
    /// scheme or no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let url = raw.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidEndpoint { url: raw.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = url[..scheme_end].to_ascii_lowercase();
        if scheme != "http" && scheme != "https" {
            return Err(invalid());
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(invalid());
        }

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);
        if host_end == host_start {
            return Err(invalid());
        }

        // Query strings and fragments cannot be joined with request paths.
        if url[host_end..].contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (`http` or `https`).
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }

    /// Joins a relative request path onto this endpoint.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

impl Serialize for Endpoint {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.url)
    }
}

impl<'de> Deserialize<'de> for Endpoint {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_empty_string() {
        assert!(matches!(Username::new(""), Err(ConfigError::EmptyUsername)));
    }

    #[test]
    fn test_password_rejects_empty_string() {
        assert!(matches!(Password::new(""), Err(ConfigError::EmptyPassword)));
    }

    #[test]
    fn test_password_masks_value_in_debug() {
        let password = Password::new("super-secret").unwrap();
        let debug_output = format!("{:?}", password);
        assert_eq!(debug_output, "Password(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_endpoint_validates_format() {
        let endpoint = Endpoint::new("https://review.example.com").unwrap();
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host_name(), "review.example.com");

        let endpoint = Endpoint::new("http://localhost:8080").unwrap();
        assert_eq!(endpoint.scheme(), "http");
        assert_eq!(endpoint.host_name(), "localhost");

        let endpoint = Endpoint::new("https://example.com/gerrit/").unwrap();
        assert_eq!(endpoint.as_ref(), "https://example.com/gerrit");
        assert_eq!(endpoint.host_name(), "example.com");
    }

    #[test]
    fn test_endpoint_rejects_invalid() {
        assert!(Endpoint::new("review.example.com").is_err());
        assert!(Endpoint::new("https://").is_err());
        assert!(Endpoint::new("://example.com").is_err());
        assert!(Endpoint::new("ftp://example.com").is_err());
        assert!(Endpoint::new("https://example.com/?x=1").is_err());
    }

    #[test]
    fn test_endpoint_join_uses_single_separator() {
        let endpoint = Endpoint::new("https://example.com/gerrit/").unwrap();
        assert_eq!(
            endpoint.join("/a/changes/"),
            "https://example.com/gerrit/a/changes/"
        );
        assert_eq!(
            endpoint.join("config/server/version"),
            "https://example.com/gerrit/config/server/version"
        );
    }

    #[test]
    fn test_endpoint_round_trip_serialization() {
        let original = Endpoint::new("https://review.example.com").unwrap();
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, r#""https://review.example.com""#);
        let restored: Endpoint = serde_json::from_str(&json).unwrap();
        assert_eq!(original, restored);
    }
}
