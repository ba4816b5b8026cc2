//! Generic HTTP invoker for Gerrit API communication.
//!
//! This module provides the [`HttpClient`] type, which sends an
//! [`HttpRequest`] to the configured endpoint, runs the caller's
//! [`CallHook`] around the exchange, maps non-2xx responses to errors and
//! retries 429/5xx responses when asked to.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::{HttpError, HttpResponseError, MaxHttpRetriesExceededError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{Endpoint, GerritConfig};

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hooks run around a single call.
///
/// `before` runs once, after the request has been built and before it is
/// validated and sent. `after` runs on every received response, before the
/// status is inspected, so it sees error bodies too. An error from either
/// hook aborts the call and is returned unchanged.
pub trait CallHook: Send + Sync {
    /// Mutates the outgoing request.
    ///
    /// # Errors
    ///
    /// Any error aborts the call before it is sent.
    fn before(&self, request: &mut HttpRequest) -> Result<(), HttpError>;

    /// Mutates the received response.
    ///
    /// # Errors
    ///
    /// Any error aborts the call.
    fn after(&self, response: &mut HttpResponse) -> Result<(), HttpError>;
}

/// A [`CallHook`] that leaves requests and responses untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopHook;

impl CallHook for NoopHook {
    fn before(&self, _request: &mut HttpRequest) -> Result<(), HttpError> {
        Ok(())
    }

    fn after(&self, _response: &mut HttpResponse) -> Result<(), HttpError> {
        Ok(())
    }
}

/// HTTP client for making requests to a Gerrit server.
///
/// The client handles:
/// - URL construction from the endpoint and a relative path
/// - Default headers including User-Agent and Accept
/// - Automatic retry logic for 429 and 5xx responses
///
/// It knows nothing about credentials or Gerrit's response framing; those
/// are applied through a [`CallHook`].
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    endpoint: Endpoint,
    default_headers: HashMap<String, String>,
    debug: bool,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client for the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g. TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use gerrit_api::Endpoint;
    /// use gerrit_api::clients::HttpClient;
    ///
    /// let endpoint = Endpoint::new("https://review.example.com").unwrap();
    /// let client = HttpClient::new(endpoint, None).unwrap();
    /// assert_eq!(client.endpoint().as_ref(), "https://review.example.com");
    /// ```
    pub fn new(endpoint: Endpoint, config: Option<&GerritConfig>) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .and_then(GerritConfig::user_agent_prefix)
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Gerrit API Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.and_then(GerritConfig::timeout) {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint,
            default_headers,
            debug: config.is_some_and(GerritConfig::debug),
        })
    }

    /// Returns the endpoint requests are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Points the client at a different endpoint.
    pub fn set_endpoint(&mut self, endpoint: Endpoint) {
        self.endpoint = endpoint;
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the Gerrit server.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - A hook fails (`Auth`, or whatever the hook returns)
    /// - Request validation fails (`InvalidRequest`)
    /// - A network or body read error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - Retries are exhausted (`MaxRetries`)
    pub async fn request(
        &self,
        mut request: HttpRequest,
        hook: &dyn CallHook,
    ) -> Result<HttpResponse, HttpError> {
        hook.before(&mut request)?;
        request.verify()?;

        let url = self.endpoint.join(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(content_type) = request.body_type.and_then(|t| t.as_content_type()) {
            headers.insert("Content-Type".to_string(), content_type.to_string());
        }
        for (key, value) in &request.extra_headers {
            headers.insert(key.clone(), value.clone());
        }

        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = match request.http_method {
                HttpMethod::Get => self.client.get(&url),
                HttpMethod::Post => self.client.post(&url),
                HttpMethod::Put => self.client.put(&url),
                HttpMethod::Delete => self.client.delete(&url),
            };

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if !request.query.is_empty() {
                req_builder = req_builder.query(&request.query);
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.clone());
            }

            tracing::debug!(method = %request.http_method, url = %url, "Sending Gerrit request");
            if self.debug {
                if let Some(body) = &request.body {
                    tracing::debug!(body = %body, "Gerrit request body");
                }
            }

            let res = req_builder.send().await?;

            let code = res.status().as_u16();
            let res_headers = Self::parse_response_headers(res.headers());
            let body = res.bytes().await?.to_vec();

            let mut response = HttpResponse::new(code, res_headers, body);
            hook.after(&mut response)?;

            tracing::debug!(status = code, url = %url, "Received Gerrit response");
            if self.debug {
                tracing::debug!(body = %response.text(), "Gerrit response body");
            }

            if response.is_ok() {
                return Ok(response);
            }

            let message = response.error_message();

            let should_retry = code == 429 || code >= 500;
            if !should_retry || tries >= request.tries {
                if should_retry && request.tries > 1 {
                    return Err(HttpError::MaxRetries(MaxHttpRetriesExceededError {
                        code,
                        tries: request.tries,
                        message,
                    }));
                }
                return Err(HttpError::Response(HttpResponseError { code, message }));
            }

            let delay = Self::calculate_retry_delay(&response, code);
            tracing::warn!(
                status = code,
                attempt = tries,
                delay_secs = delay.as_secs_f64(),
                "Retrying Gerrit request to {}",
                request.path
            );
            tokio::time::sleep(delay).await;
        }
    }

    /// Parses response headers into a `HashMap` keyed by lower-case name.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Calculates the retry delay based on response and status code.
    fn calculate_retry_delay(response: &HttpResponse, status: u16) -> Duration {
        // Only 429 honors Retry-After; server errors use the fixed delay.
        if status == 429 {
            if let Some(retry_after) = response.retry_request_after {
                if let Ok(delay) = Duration::try_from_secs_f64(retry_after) {
                    return delay;
                }
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn endpoint() -> Endpoint {
        Endpoint::new("https://review.example.com").unwrap()
    }

    #[test]
    fn test_client_construction_with_endpoint() {
        let client = HttpClient::new(endpoint(), None).unwrap();
        assert_eq!(client.endpoint().as_ref(), "https://review.example.com");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(endpoint(), None).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Gerrit API Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = GerritConfig::builder()
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        let client = HttpClient::new(endpoint(), Some(&config)).unwrap();

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Gerrit API Library"));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = HttpClient::new(endpoint(), None).unwrap();

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_set_endpoint_replaces_base() {
        let mut client = HttpClient::new(endpoint(), None).unwrap();
        client.set_endpoint(Endpoint::new("http://localhost:8080").unwrap());
        assert_eq!(client.endpoint().as_ref(), "http://localhost:8080");
    }

    #[test]
    fn test_retry_delay_honors_retry_after_for_429_only() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), vec!["2".to_string()]);
        let response = HttpResponse::new(429, headers, Vec::new());

        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 429),
            Duration::from_secs(2)
        );
        assert_eq!(
            HttpClient::calculate_retry_delay(&response, 503),
            Duration::from_secs(RETRY_WAIT_TIME)
        );
    }

    #[test]
    fn test_retry_delay_falls_back_for_unrepresentable_retry_after() {
        for value in ["1e20", "-5", "NaN", "inf"] {
            let mut headers = HashMap::new();
            headers.insert("retry-after".to_string(), vec![value.to_string()]);
            let response = HttpResponse::new(429, headers, Vec::new());

            assert_eq!(
                HttpClient::calculate_retry_delay(&response, 429),
                Duration::from_secs(RETRY_WAIT_TIME),
                "Retry-After: {value}"
            );
        }
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
