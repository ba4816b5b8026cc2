//! HTTP client types for Gerrit API communication.
//!
//! This module provides the HTTP layer the Gerrit client is built on. The
//! generic invoker knows nothing about Gerrit; the transport shim in
//! [`rest`] adds credentials, path rewriting and response framing.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HttpClient`]: The async HTTP invoker with retry handling
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A fully read response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies
//! - [`CallHook`]: Pre-send and post-receive hooks around one call
//! - [`rest::GerritClient`]: The Gerrit transport shim
//! - [`rest::GerritError`]: Error type for Gerrit calls
//!
//! # Example
//!
//! ```rust,ignore
//! use gerrit_api::clients::{HttpClient, HttpMethod, HttpRequest, NoopHook};
//! use gerrit_api::Endpoint;
//!
//! let client = HttpClient::new(Endpoint::new("https://review.example.com")?, None)?;
//! let request = HttpRequest::builder(HttpMethod::Get, "config/server/version").build()?;
//!
//! let response = client.request(request, &NoopHook).await?;
//! ```
//!
//! # Retry Behavior
//!
//! The invoker implements automatic retry logic for transient failures:
//!
//! - **429 (Rate Limited)**: Retries using `Retry-After` header value, or 1 second if not present
//! - **5xx (Server Error)**: Retries with fixed 1-second delay
//! - **Other errors (4xx)**: Returns immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Configure via
//! [`HttpRequest::builder`] with `.tries(n)` to enable retries.

mod errors;
mod http_client;
mod http_request;
mod http_response;
pub mod rest;

pub use errors::{
    HttpError, HttpResponseError, InvalidHttpRequestError, MaxHttpRetriesExceededError,
};
pub use http_client::{CallHook, HttpClient, NoopHook, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;

// Re-export the Gerrit client at the clients module level
pub use rest::{GerritClient, GerritError, RequestFn};
