//! HTTP request types for the Gerrit API client.
//!
//! This module provides the [`HttpRequest`] type and its builder for
//! constructing requests to the Gerrit REST API.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Gerrit REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources and triggering actions.
    Post,
    /// HTTP PUT method for creating or replacing resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl HttpMethod {
    /// Returns the canonical upper-case method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content type for HTTP request bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// JSON content type (`application/json`).
    Json,
    /// Plain text content type (`text/plain`).
    PlainText,
    /// A body sent without any `Content-Type` header.
    Unspecified,
}

impl DataType {
    /// Returns the MIME type string for this data type, or `None` when no
    /// `Content-Type` header should be sent.
    #[must_use]
    pub const fn as_content_type(&self) -> Option<&'static str> {
        match self {
            Self::Json => Some("application/json; charset=UTF-8"),
            Self::PlainText => Some("text/plain; charset=UTF-8"),
            Self::Unspecified => None,
        }
    }
}

/// An HTTP request to be sent to the Gerrit server.
///
/// The path is relative to the configured [`Endpoint`](crate::Endpoint).
/// Query parameters are kept as ordered pairs because Gerrit repeats keys
/// (for example `o=LABELS&o=DETAILED_ACCOUNTS`).
///
/// # Example
///
/// ```rust
/// use gerrit_api::clients::{HttpRequest, HttpMethod};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "changes/")
///     .query_param("q", "status:open")
///     .query_param("o", "LABELS")
///     .query_param("o", "MESSAGES")
///     .build()
///     .unwrap();
/// assert_eq!(get_request.query.len(), 3);
///
/// let put_request = HttpRequest::builder(HttpMethod::Put, "projects/demo")
///     .json(json!({"description": "Demo project"}))
///     .build()
///     .unwrap();
/// assert!(put_request.body.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path (relative to the endpoint) for this request.
    pub path: String,
    /// The encoded request body, if any.
    pub body: Option<String>,
    /// The content type of the body.
    pub body_type: Option<DataType>,
    /// Query parameters, in order. Keys may repeat.
    pub query: Vec<(String, String)>,
    /// Additional headers to include in the request.
    pub extra_headers: HashMap<String, String>,
    /// Number of times to attempt the request (default: 1).
    pub tries: u32,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Replaces the body with the given plain text.
    pub fn set_text_body(&mut self, body: impl Into<String>) {
        self.body = Some(body.into());
        self.body_type = Some(DataType::PlainText);
    }

    /// Sets a header, replacing any previous value.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra_headers.insert(key.into(), value.into());
    }

    /// Returns the value of an extra header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, key: &str) -> Option<&str> {
        self.extra_headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(key))
            .map(|(_, value)| value.as_str())
    }

    /// Validates the request, ensuring it meets all requirements.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if:
    /// - `body` is `Some` but `body_type` is `None`
    /// - `tries` is zero
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        if self.body.is_some() && self.body_type.is_none() {
            return Err(InvalidHttpRequestError::MissingBodyType);
        }

        if self.tries == 0 {
            return Err(InvalidHttpRequestError::NoAttempts);
        }

        Ok(())
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<String>,
    body_type: Option<DataType>,
    query: Vec<(String, String)>,
    extra_headers: HashMap<String, String>,
    tries: u32,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            query: Vec::new(),
            extra_headers: HashMap::new(),
            tries: 1,
        }
    }

    /// Sets a JSON request body.
    #[must_use]
    pub fn json(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into().to_string());
        self.body_type = Some(DataType::Json);
        self
    }

    /// Sets a plain text request body.
    #[must_use]
    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.body_type = Some(DataType::PlainText);
        self
    }

    /// Appends all query parameters at once.
    #[must_use]
    pub fn query(mut self, query: impl IntoIterator<Item = (String, String)>) -> Self {
        self.query.extend(query);
        self
    }

    /// Appends a single query parameter.
    #[must_use]
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Adds a single extra header.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers.insert(key.into(), value.into());
        self
    }

    /// Sets the number of times to attempt the request.
    ///
    /// Default is 1 (no retries). Higher values enable automatic retries
    /// for 429 and 5xx responses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }

    /// Builds the [`HttpRequest`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError`] if the request fails validation.
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            query: self.query,
            extra_headers: self.extra_headers,
            tries: self.tries,
        };
        request.verify()?;
        Ok(request)
    }
}
