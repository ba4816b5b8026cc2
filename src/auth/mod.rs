//! Authentication for Gerrit API calls.
//!
//! Gerrit serves two API surfaces: anonymous endpoints at the site root and
//! authenticated endpoints below `/a/`. A [`Credential`] decides both how a
//! request is authenticated and how its path is moved onto the authenticated
//! surface.
//!
//! # Overview
//!
//! - [`Credential`]: The capability trait consumed by the transport
//! - [`PasswordCredential`]: Username + HTTP password over HTTP Basic auth
//! - [`authenticated_path`]: The default, idempotent `a/` path rewrite
//! - [`AuthError`]: Failures raised while authenticating a request
//!
//! # Example
//!
//! ```rust
//! use gerrit_api::auth::{Credential, PasswordCredential};
//! use gerrit_api::{Endpoint, Password, Username};
//!
//! let credential = PasswordCredential::new(
//!     Endpoint::new("https://review.example.com").unwrap(),
//!     Username::new("admin").unwrap(),
//!     Password::new("secret").unwrap(),
//! );
//!
//! assert_eq!(credential.rewrite_path("projects/"), "a/projects/");
//! ```

mod credential;
mod error;

pub use credential::{
    authenticated_path, has_authenticated_path, Credential, PasswordCredential, AUTH_PREFIX,
};
pub use error::AuthError;
