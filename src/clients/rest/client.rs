//! Gerrit transport shim.
//!
//! [`GerritClient`] wraps the generic [`HttpClient`] and applies Gerrit's
//! calling conventions to every request:
//!
//! - GET arguments travel as query parameters, anything else as a JSON body
//! - With a credential configured, paths move to the authenticated `a/`
//!   surface and the credential authenticates the request
//! - The `)]}'` anti-XSSI prefix is stripped from every response body,
//!   including error bodies, before anything decodes it

use std::fmt;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::auth::Credential;
use crate::clients::rest::GerritError;
use crate::clients::{
    CallHook, DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpResponse,
};
use crate::config::{Endpoint, GerritConfig};
use crate::rest::resources::{
    AccountsService, ChangesService, ConfigService, GroupsService, ProjectsService,
};
use crate::rest::ListOptions;

/// The anti-XSSI prefix Gerrit puts in front of JSON response bodies.
pub const MAGIC_PREFIX: &[u8] = b")]}'\n";

/// A per-call request mutator, run after the path rewrite and before the
/// credential authenticates the request.
pub type RequestFn = Box<dyn Fn(&mut HttpRequest) -> Result<(), HttpError> + Send + Sync>;

/// Returns a mutator that replaces the request body with plain text.
///
/// Some Gerrit endpoints (commit messages, file contents) take a raw body
/// instead of JSON.
///
/// # Example
///
/// ```rust
/// use gerrit_api::clients::rest::plain_text;
/// use gerrit_api::clients::{DataType, HttpMethod, HttpRequest};
///
/// let mut request = HttpRequest::builder(HttpMethod::Put, "changes/1/message")
///     .build()
///     .unwrap();
/// plain_text("Fix typo")(&mut request).unwrap();
///
/// assert_eq!(request.body.as_deref(), Some("Fix typo"));
/// assert_eq!(request.body_type, Some(DataType::PlainText));
/// ```
#[must_use]
pub fn plain_text(body: impl Into<String>) -> RequestFn {
    let body = body.into();
    Box::new(move |request| {
        request.set_text_body(body.clone());
        Ok(())
    })
}

/// Returns a mutator that sends the request without a `Content-Type` header.
///
/// The body, if any, is sent unchanged.
#[must_use]
pub fn no_content_type() -> RequestFn {
    Box::new(|request| {
        request.body_type = Some(DataType::Unspecified);
        Ok(())
    })
}

/// Returns `body` with the leading magic prefix removed, if present.
///
/// Only an exact prefix match is removed; any other body passes through
/// unchanged.
///
/// # Example
///
/// ```rust
/// use gerrit_api::clients::rest::strip_magic_prefix;
///
/// assert_eq!(strip_magic_prefix(b")]}'\n{}"), b"{}");
/// assert_eq!(strip_magic_prefix(b"{}"), b"{}");
/// ```
#[must_use]
pub fn strip_magic_prefix(body: &[u8]) -> &[u8] {
    body.strip_prefix(MAGIC_PREFIX).unwrap_or(body)
}

/// The hook that applies Gerrit's conventions around one call.
struct GerritHook<'a> {
    credential: Option<&'a dyn Credential>,
    hooks: &'a [RequestFn],
}

impl CallHook for GerritHook<'_> {
    fn before(&self, request: &mut HttpRequest) -> Result<(), HttpError> {
        if let Some(credential) = self.credential {
            request.path = credential.rewrite_path(&request.path);
        }
        for hook in self.hooks {
            hook(request)?;
        }
        if let Some(credential) = self.credential {
            credential.authenticate(request)?;
        }
        Ok(())
    }

    fn after(&self, response: &mut HttpResponse) -> Result<(), HttpError> {
        if response.body.starts_with(MAGIC_PREFIX) {
            response.body.drain(..MAGIC_PREFIX.len());
        }
        Ok(())
    }
}

/// Client for a Gerrit server's REST API.
///
/// The client holds an optional credential; without one, calls go to the
/// anonymous API surface. Resource operations are reached through the
/// service accessors ([`accounts`](Self::accounts),
/// [`changes`](Self::changes), ...).
///
/// # Thread Safety
///
/// `GerritClient` is `Send + Sync`. Calls only read the credential, so one
/// client can serve concurrent tasks. A call is cancelled by dropping its
/// future.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use gerrit_api::{Endpoint, GerritClient, GerritConfig, Password, PasswordCredential, Username};
/// use gerrit_api::query::Query;
/// use gerrit_api::rest::resources::QueryChangesOptions;
///
/// let credential = PasswordCredential::new(
///     Endpoint::new("https://review.example.com")?,
///     Username::new("admin")?,
///     Password::new("secret")?,
/// );
/// let client = GerritClient::new(Arc::new(credential), GerritConfig::default())?;
///
/// let query = Query::and([Query::field("status", "open"), Query::field("project", "demo")]);
/// let changes = client
///     .changes()
///     .query_changes(&QueryChangesOptions::new(&query))
///     .await?;
/// ```
pub struct GerritClient {
    http_client: HttpClient,
    credential: Option<Arc<dyn Credential>>,
    config: GerritConfig,
}

// Verify GerritClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GerritClient>();
};

impl fmt::Debug for GerritClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GerritClient")
            .field("endpoint", self.http_client.endpoint())
            .field("credential", &self.credential)
            .field("config", &self.config)
            .finish()
    }
}

impl GerritClient {
    /// Creates a client that authenticates every call with `credential`.
    ///
    /// Requests go to the credential's endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError::Http`] if the HTTP client cannot be created.
    pub fn new(credential: Arc<dyn Credential>, config: GerritConfig) -> Result<Self, GerritError> {
        let http_client = HttpClient::new(credential.endpoint().clone(), Some(&config))?;
        Ok(Self {
            http_client,
            credential: Some(credential),
            config,
        })
    }

    /// Creates a client for the anonymous API surface of `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError::Http`] if the HTTP client cannot be created.
    pub fn anonymous(endpoint: Endpoint, config: GerritConfig) -> Result<Self, GerritError> {
        let http_client = HttpClient::new(endpoint, Some(&config))?;
        Ok(Self {
            http_client,
            credential: None,
            config,
        })
    }

    /// Replaces the credential and points the client at its endpoint.
    pub fn set_credential(&mut self, credential: Arc<dyn Credential>) {
        tracing::debug!(endpoint = %credential.endpoint(), "Switching Gerrit credential");
        self.http_client.set_endpoint(credential.endpoint().clone());
        self.credential = Some(credential);
    }

    /// Returns the configured credential, if any.
    #[must_use]
    pub fn credential(&self) -> Option<&dyn Credential> {
        self.credential.as_deref()
    }

    /// Returns the endpoint calls are sent to.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        self.http_client.endpoint()
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &GerritConfig {
        &self.config
    }

    /// Returns list options for page `skip` using the configured page size.
    #[must_use]
    pub const fn list_options(&self, skip: u32) -> ListOptions {
        ListOptions::new(skip, self.config.default_limit())
    }

    /// Account operations.
    #[must_use]
    pub const fn accounts(&self) -> AccountsService<'_> {
        AccountsService::new(self)
    }

    /// Change operations.
    #[must_use]
    pub const fn changes(&self) -> ChangesService<'_> {
        ChangesService::new(self)
    }

    /// Project, branch, tag and commit operations.
    #[must_use]
    pub const fn projects(&self) -> ProjectsService<'_> {
        ProjectsService::new(self)
    }

    /// Group operations.
    #[must_use]
    pub const fn groups(&self) -> GroupsService<'_> {
        GroupsService::new(self)
    }

    /// Server configuration operations.
    #[must_use]
    pub const fn config_service(&self) -> ConfigService<'_> {
        ConfigService::new(self)
    }

    /// Calls the API and decodes the JSON response into `T`.
    ///
    /// For GET, `args` must be a JSON object (or `null`) and is sent as query
    /// parameters; for every other method it is sent as the JSON body. An
    /// empty response body decodes as `null`, so `T = ()` accepts
    /// `204 No Content`.
    ///
    /// # Errors
    ///
    /// Returns [`GerritError::InvalidPath`] for an empty path,
    /// [`GerritError::InvalidArguments`] for GET arguments that cannot be
    /// flattened, [`GerritError::Http`] for transport, credential and server
    /// failures, and [`GerritError::Json`] if the body does not decode.
    pub async fn invoke<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        args: Option<Value>,
    ) -> Result<T, GerritError> {
        self.invoke_with(method, path, args, &[]).await
    }

    /// Like [`invoke`](Self::invoke), running `hooks` on the request before
    /// the credential authenticates it.
    ///
    /// # Errors
    ///
    /// See [`invoke`](Self::invoke). An error returned by a hook aborts the
    /// call before it is sent.
    pub async fn invoke_with<T: DeserializeOwned>(
        &self,
        method: HttpMethod,
        path: &str,
        args: Option<Value>,
        hooks: &[RequestFn],
    ) -> Result<T, GerritError> {
        let response = self.invoke_raw(method, path, args, hooks).await?;
        Ok(response.json()?)
    }

    /// Calls the API and returns the response without decoding it.
    ///
    /// The body has already had the magic prefix removed.
    ///
    /// # Errors
    ///
    /// See [`invoke_with`](Self::invoke_with), minus JSON decoding.
    pub async fn invoke_raw(
        &self,
        method: HttpMethod,
        path: &str,
        args: Option<Value>,
        hooks: &[RequestFn],
    ) -> Result<HttpResponse, GerritError> {
        let path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, path).tries(self.config.tries());
        match (method, args) {
            (_, None) => {}
            (HttpMethod::Get, Some(args)) => builder = builder.query(encode_query(&args)?),
            (_, Some(body)) => builder = builder.json(body),
        }
        let request = builder.build().map_err(HttpError::from)?;

        let hook = GerritHook {
            credential: self.credential.as_deref(),
            hooks,
        };
        Ok(self.http_client.request(request, &hook).await?)
    }
}

/// Strips leading slashes and rejects empty paths.
fn normalize_path(path: &str) -> Result<String, GerritError> {
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return Err(GerritError::InvalidPath {
            path: path.to_string(),
        });
    }
    Ok(trimmed.to_string())
}

/// Flattens a JSON object into query pairs.
///
/// Arrays repeat their key once per element, `null` fields are skipped and
/// scalars are rendered without JSON quoting.
fn encode_query(args: &Value) -> Result<Vec<(String, String)>, GerritError> {
    let fields = match args {
        Value::Null => return Ok(Vec::new()),
        Value::Object(fields) => fields,
        other => {
            return Err(GerritError::InvalidArguments {
                reason: format!("expected an object, got {other}"),
            })
        }
    };

    let mut pairs = Vec::new();
    for (key, value) in fields {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if !item.is_null() {
                        pairs.push((key.clone(), scalar_value(key, item)?));
                    }
                }
            }
            scalar => pairs.push((key.clone(), scalar_value(key, scalar)?)),
        }
    }
    Ok(pairs)
}

fn scalar_value(key: &str, value: &Value) -> Result<String, GerritError> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(GerritError::InvalidArguments {
            reason: format!("field `{key}` is not a scalar"),
        }),
    }
}
