//! # Gerrit API Rust Client
//!
//! A Rust client for the Gerrit Code Review REST API, providing type-safe
//! configuration, credential handling, a search-query builder, and typed
//! access to accounts, changes, projects, groups and server configuration.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`GerritConfig`] and [`GerritConfigBuilder`]
//! - Validated newtypes for endpoints and credentials
//! - HTTP Basic authentication via [`PasswordCredential`], with automatic
//!   rewriting of paths onto Gerrit's authenticated `/a/` prefix
//! - A transport shim ([`GerritClient`]) that strips the `)]}'` guard Gerrit
//!   prepends to JSON responses
//! - A composable [`Query`] builder for change and account searches
//! - A [`Timestamp`] codec for Gerrit's `YYYY-MM-DD HH:MM:SS.nnnnnnnnn` format
//! - Async HTTP invoker with retry logic for 429 and 5xx responses
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use gerrit_api::{Endpoint, GerritClient, GerritConfig, Password, PasswordCredential, Username};
//!
//! let endpoint = Endpoint::new("https://review.example.com").unwrap();
//! let credential = PasswordCredential::new(
//!     endpoint,
//!     Username::new("admin").unwrap(),
//!     Password::new("http-password").unwrap(),
//! );
//!
//! let config = GerritConfig::builder().tries(3).build().unwrap();
//! let client = GerritClient::new(Arc::new(credential), config).unwrap();
//! assert_eq!(client.endpoint().host_name(), "review.example.com");
//! ```
//!
//! ## Searching Changes
//!
//! ```rust,ignore
//! use gerrit_api::rest::resources::QueryChangesOptions;
//! use gerrit_api::rest::AdditionalField;
//! use gerrit_api::Query;
//!
//! let query = Query::and([
//!     Query::field("project", "platform/build"),
//!     Query::not(Query::field("status", "abandoned")),
//! ]);
//! let options = QueryChangesOptions::new(&query)
//!     .list(client.list_options(0))
//!     .field(AdditionalField::CurrentRevision);
//!
//! for change in client.changes().query_changes(&options).await? {
//!     println!("{}: {}", change.number, change.subject);
//! }
//! ```
//!
//! ## Calling Endpoints Without a Typed Wrapper
//!
//! ```rust,ignore
//! use gerrit_api::clients::rest::plain_text;
//! use gerrit_api::HttpMethod;
//!
//! // Any path works; the credential adds the `a/` prefix
//! let version: String = client
//!     .invoke(HttpMethod::Get, "config/server/version", None)
//!     .await?;
//!
//! // Endpoints taking a text body
//! let response = client
//!     .invoke_raw(
//!         HttpMethod::Put,
//!         "changes/demo~1/message",
//!         None,
//!         &[plain_text("New commit message")],
//!     )
//!     .await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Cancellation by drop**: Dropping a call's future abandons the request

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod query;
pub mod rest;

// Re-export public types at crate root for convenience
pub use auth::{AuthError, Credential, PasswordCredential};
pub use config::{Endpoint, GerritConfig, GerritConfigBuilder, Password, Username};
pub use error::{ConfigError, TimestampError};
pub use query::Query;
pub use rest::Timestamp;

// Re-export HTTP client types
pub use clients::{
    CallHook, DataType, GerritClient, GerritError, HttpClient, HttpError, HttpMethod,
    HttpRequest, HttpRequestBuilder, HttpResponse,
};
