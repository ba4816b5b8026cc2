//! Credentials for authenticated Gerrit calls.
//!
//! A [`Credential`] supplies the server endpoint, embeds authentication
//! material into each outgoing request, and rewrites request paths onto
//! Gerrit's authenticated API surface (`/a/...`).

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

use crate::auth::AuthError;
use crate::clients::HttpRequest;
use crate::config::{Endpoint, Password, Username};

/// Prefix routing a request through Gerrit's authenticated API.
pub const AUTH_PREFIX: &str = "a/";

/// Returns `true` if `path` already targets the authenticated API.
///
/// # Example
///
/// ```rust
/// use gerrit_api::auth::has_authenticated_path;
///
/// assert!(has_authenticated_path("a/projects/"));
/// assert!(has_authenticated_path("/a/projects/"));
/// assert!(!has_authenticated_path("projects/"));
/// ```
#[must_use]
pub fn has_authenticated_path(path: &str) -> bool {
    path.starts_with(AUTH_PREFIX) || path.starts_with("/a/")
}

/// Rewrites `path` onto the authenticated API.
///
/// Already-prefixed paths pass through unchanged; any other path has its
/// leading slashes removed and `a/` prepended.
///
/// # Example
///
/// ```rust
/// use gerrit_api::auth::authenticated_path;
///
/// assert_eq!(authenticated_path("projects/"), "a/projects/");
/// assert_eq!(authenticated_path("/changes/"), "a/changes/");
/// assert_eq!(authenticated_path("a/projects/"), "a/projects/");
/// ```
#[must_use]
pub fn authenticated_path(path: &str) -> String {
    if has_authenticated_path(path) {
        return path.to_string();
    }
    format!("{AUTH_PREFIX}{}", path.trim_start_matches('/'))
}

/// A capability that authenticates calls to a Gerrit server.
///
/// Implementors must be safe for concurrent reads; the client shares one
/// credential across all in-flight calls.
pub trait Credential: Send + Sync + fmt::Debug {
    /// Returns the server endpoint this credential is valid for.
    fn endpoint(&self) -> &Endpoint;

    /// Embeds authentication material into the outgoing request.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the request cannot be authenticated; the
    /// call is aborted before it is sent.
    fn authenticate(&self, request: &mut HttpRequest) -> Result<(), AuthError>;

    /// Rewrites a request path for authenticated access.
    fn rewrite_path(&self, path: &str) -> String {
        authenticated_path(path)
    }
}

/// Username and HTTP password, sent with HTTP Basic authentication.
///
/// The password is the HTTP password generated in Gerrit's user settings,
/// not the account's login password.
///
/// # Example
///
/// ```rust
/// use gerrit_api::auth::{Credential, PasswordCredential};
/// use gerrit_api::{Endpoint, Password, Username};
///
/// let credential = PasswordCredential::new(
///     Endpoint::new("https://review.example.com").unwrap(),
///     Username::new("admin").unwrap(),
///     Password::new("secret").unwrap(),
/// );
/// assert_eq!(credential.endpoint().host_name(), "review.example.com");
/// ```
#[derive(Clone, Debug, Deserialize)]
pub struct PasswordCredential {
    endpoint: Endpoint,
    username: Username,
    password: Password,
}

impl PasswordCredential {
    /// Creates a new password credential.
    #[must_use]
    pub const fn new(endpoint: Endpoint, username: Username, password: Password) -> Self {
        Self {
            endpoint,
            username,
            password,
        }
    }

    /// Returns the username.
    #[must_use]
    pub const fn username(&self) -> &Username {
        &self.username
    }

    fn basic_auth_value(&self) -> Result<String, AuthError> {
        let username = self.username.as_ref();
        if username.contains(':') {
            return Err(AuthError::ColonInUsername);
        }
        let token = STANDARD.encode(format!("{username}:{}", self.password.as_ref()));
        Ok(format!("Basic {token}"))
    }
}

impl Credential for PasswordCredential {
    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    fn authenticate(&self, request: &mut HttpRequest) -> Result<(), AuthError> {
        let value = self.basic_auth_value()?;
        request.set_header("Authorization", value);
        Ok(())
    }
}

// Verify PasswordCredential is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<PasswordCredential>();
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpMethod;

    fn credential(username: &str, password: &str) -> PasswordCredential {
        PasswordCredential::new(
            Endpoint::new("https://review.example.com").unwrap(),
            Username::new(username).unwrap(),
            Password::new(password).unwrap(),
        )
    }

    fn request() -> HttpRequest {
        HttpRequest::builder(HttpMethod::Get, "projects/")
            .build()
            .unwrap()
    }

    #[test]
    fn test_authenticated_path_is_idempotent() {
        assert_eq!(authenticated_path("a/projects/"), "a/projects/");
        assert_eq!(authenticated_path("/a/projects/"), "/a/projects/");
        assert_eq!(
            authenticated_path(&authenticated_path("projects/")),
            "a/projects/"
        );
    }

    #[test]
    fn test_authenticated_path_prefixes_plain_paths() {
        assert_eq!(authenticated_path("projects/"), "a/projects/");
        assert_eq!(authenticated_path("//projects/"), "a/projects/");
        assert_eq!(authenticated_path("accounts/self"), "a/accounts/self");
    }

    #[test]
    fn test_authenticated_path_does_not_match_similar_prefixes() {
        assert_eq!(authenticated_path("access/"), "a/access/");
        assert_eq!(authenticated_path("accounts/"), "a/accounts/");
    }

    #[test]
    fn test_password_credential_sets_basic_auth_header() {
        let mut req = request();
        credential("admin", "secret").authenticate(&mut req).unwrap();

        assert_eq!(req.header("Authorization"), Some("Basic YWRtaW46c2VjcmV0"));
    }

    #[test]
    fn test_password_credential_rejects_colon_in_username() {
        let mut req = request();
        let result = credential("ad:min", "secret").authenticate(&mut req);

        assert_eq!(result, Err(AuthError::ColonInUsername));
        assert!(req.header("Authorization").is_none());
    }

    #[test]
    fn test_password_credential_uses_default_path_rewrite() {
        let cred = credential("admin", "secret");
        assert_eq!(cred.rewrite_path("changes/"), "a/changes/");
    }

    #[test]
    fn test_password_credential_debug_masks_password() {
        let debug_output = format!("{:?}", credential("admin", "super-secret"));
        assert!(debug_output.contains("admin"));
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_password_credential_deserializes() {
        let json = r#"{
            "endpoint": "https://review.example.com/",
            "username": "admin",
            "password": "secret"
        }"#;
        let cred: PasswordCredential = serde_json::from_str(json).unwrap();

        assert_eq!(cred.endpoint().as_ref(), "https://review.example.com");
        assert_eq!(cred.username().as_ref(), "admin");
    }

    #[test]
    fn test_password_credential_rejects_empty_fields() {
        let json = r#"{"endpoint": "https://review.example.com", "username": "", "password": "x"}"#;
        assert!(serde_json::from_str::<PasswordCredential>(json).is_err());
    }
}
