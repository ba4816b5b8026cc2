//! Integration tests for the Gerrit transport shim.
//!
//! These tests verify how [`GerritClient`] applies Gerrit's conventions on
//! the wire: credential injection, the `/a/` path rewrite, argument
//! placement and stripping of the `)]}'` response prefix.

use std::sync::Arc;
use std::time::Duration;

use gerrit_api::auth::{AuthError, Credential};
use gerrit_api::clients::rest::{no_content_type, plain_text};
use gerrit_api::clients::{HttpError, HttpMethod, HttpRequest, RequestFn};
use gerrit_api::{
    Endpoint, GerritClient, GerritConfig, GerritError, Password, PasswordCredential, Username,
};
use serde_json::{json, Value};
use wiremock::matchers::{
    body_json, body_string, header, header_exists, method, path, query_param,
};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const MAGIC: &str = ")]}'\n";

fn credential_for(server: &MockServer) -> PasswordCredential {
    PasswordCredential::new(
        Endpoint::new(server.uri()).unwrap(),
        Username::new("admin").unwrap(),
        Password::new("secret").unwrap(),
    )
}

fn authenticated_client(server: &MockServer) -> GerritClient {
    GerritClient::new(Arc::new(credential_for(server)), GerritConfig::default()).unwrap()
}

fn anonymous_client(server: &MockServer) -> GerritClient {
    GerritClient::anonymous(Endpoint::new(server.uri()).unwrap(), GerritConfig::default())
        .unwrap()
}

fn gerrit_json(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(format!("{MAGIC}{body}").into_bytes(), "application/json")
}

#[derive(Debug)]
struct RevokedCredential(Endpoint);

impl Credential for RevokedCredential {
    fn endpoint(&self) -> &Endpoint {
        &self.0
    }

    fn authenticate(&self, _request: &mut HttpRequest) -> Result<(), AuthError> {
        Err(AuthError::Rejected {
            reason: "token revoked".to_string(),
        })
    }
}

// ============================================================================
// Authentication and path rewriting
// ============================================================================

#[tokio::test]
async fn test_credential_adds_basic_auth_and_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a/config/server/version"))
        .and(header("Authorization", "Basic YWRtaW46c2VjcmV0"))
        .respond_with(gerrit_json("\"3.9.1\""))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let version: String = client
        .invoke(HttpMethod::Get, "config/server/version", None)
        .await
        .unwrap();

    assert_eq!(version, "3.9.1");
}

#[tokio::test]
async fn test_prefixed_path_is_not_prefixed_twice() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a/accounts/self"))
        .respond_with(gerrit_json("{\"_account_id\": 1000000}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let account: Value = client
        .invoke(HttpMethod::Get, "/a/accounts/self", None)
        .await
        .unwrap();

    assert_eq!(account["_account_id"], 1_000_000);
}

#[tokio::test]
async fn test_anonymous_client_uses_plain_path() {
    let server = MockServer::start().await;
    Mock::given(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/projects/"))
        .respond_with(gerrit_json("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let projects: Value = client
        .invoke(HttpMethod::Get, "projects/", None)
        .await
        .unwrap();
    assert_eq!(projects, json!({}));
}

#[tokio::test]
async fn test_credential_failure_aborts_before_sending() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let credential = RevokedCredential(Endpoint::new(server.uri()).unwrap());
    let client = GerritClient::new(Arc::new(credential), GerritConfig::default()).unwrap();

    let result: Result<Value, GerritError> =
        client.invoke(HttpMethod::Get, "changes/", None).await;

    assert!(matches!(
        result,
        Err(GerritError::Http(HttpError::Auth(AuthError::Rejected { .. })))
    ));
}

// ============================================================================
// Arguments
// ============================================================================

#[tokio::test]
async fn test_get_arguments_sent_as_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a/changes/"))
        .and(query_param("q", "status:open project:demo"))
        .and(query_param("n", "2"))
        .and(query_param("o", "LABELS"))
        .and(query_param("o", "CURRENT_REVISION"))
        .respond_with(gerrit_json("[]"))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let args = json!({
        "q": "status:open project:demo",
        "n": 2,
        "o": ["LABELS", "CURRENT_REVISION"],
        "S": null
    });
    let changes: Vec<Value> = client
        .invoke(HttpMethod::Get, "changes/", Some(args))
        .await
        .unwrap();
    assert!(changes.is_empty());

    let requests = server.received_requests().await.unwrap();
    let query = requests[0].url.query().unwrap_or_default().to_string();
    assert_eq!(query.matches("o=").count(), 2);
    assert!(!query.contains("S="));
}

#[tokio::test]
async fn test_put_arguments_sent_as_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/a/projects/demo"))
        .and(header("Content-Type", "application/json; charset=UTF-8"))
        .and(body_json(json!({"description": "Demo project"})))
        .respond_with(ResponseTemplate::new(201).set_body_raw(
            format!("{MAGIC}{{\"id\": \"demo\", \"name\": \"demo\"}}").into_bytes(),
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let project: Value = client
        .invoke(
            HttpMethod::Put,
            "projects/demo",
            Some(json!({"description": "Demo project"})),
        )
        .await
        .unwrap();

    assert_eq!(project["id"], "demo");
}

#[tokio::test]
async fn test_get_with_nested_arguments_is_rejected() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server);

    let result: Result<Value, GerritError> = client
        .invoke(HttpMethod::Get, "changes/", Some(json!({"q": {"nested": true}})))
        .await;

    assert!(matches!(result, Err(GerritError::InvalidArguments { .. })));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_empty_path_is_rejected() {
    let server = MockServer::start().await;
    let client = authenticated_client(&server);

    let result: Result<Value, GerritError> = client.invoke(HttpMethod::Get, "/", None).await;

    assert!(matches!(result, Err(GerritError::InvalidPath { .. })));
}

#[tokio::test]
async fn test_plain_text_hook_replaces_body() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/a/changes/demo~1/message"))
        .and(header("Content-Type", "text/plain; charset=UTF-8"))
        .and(body_string("Rewrite the commit message"))
        .and(header("Authorization", "Basic YWRtaW46c2VjcmV0"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let response = client
        .invoke_raw(
            HttpMethod::Put,
            "changes/demo~1/message",
            None,
            &[plain_text("Rewrite the commit message")],
        )
        .await
        .unwrap();

    assert_eq!(response.code, 204);
}

#[tokio::test]
async fn test_no_content_type_hook_omits_header() {
    let server = MockServer::start().await;
    Mock::given(header_exists("Content-Type"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/a/projects/demo/description"))
        .and(body_string("Plain description"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let response = client
        .invoke_raw(
            HttpMethod::Put,
            "projects/demo/description",
            None,
            &[plain_text("Plain description"), no_content_type()],
        )
        .await
        .unwrap();

    assert_eq!(response.code, 204);
}

#[tokio::test]
async fn test_hook_error_aborts_call() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let hooks: Vec<RequestFn> = vec![Box::new(
        |_request: &mut HttpRequest| -> Result<(), HttpError> {
            Err(HttpError::Auth(AuthError::Rejected {
                reason: "hook refused".to_string(),
            }))
        },
    )];

    let result = client
        .invoke_raw(HttpMethod::Post, "changes/", Some(json!({})), &hooks)
        .await;

    assert!(result.is_err());
}

// ============================================================================
// Responses
// ============================================================================

#[tokio::test]
async fn test_magic_prefix_stripped_from_raw_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a/projects/demo/HEAD"))
        .respond_with(gerrit_json("\"refs/heads/main\""))
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let response = client
        .invoke_raw(HttpMethod::Get, "projects/demo/HEAD", None, &[])
        .await
        .unwrap();

    assert_eq!(response.body, b"\"refs/heads/main\"");
}

#[tokio::test]
async fn test_body_without_prefix_decodes_unchanged() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[1,2,3]"))
        .mount(&server)
        .await;

    let client = anonymous_client(&server);
    let numbers: Vec<u32> = client
        .invoke(HttpMethod::Get, "numbers", None)
        .await
        .unwrap();

    assert_eq!(numbers, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_error_body_is_stripped_and_classified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a/changes/404"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_raw(format!("{MAGIC}\"Not found: 404\"").into_bytes(), "application/json"),
        )
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let error = client
        .invoke::<Value>(HttpMethod::Get, "changes/404", None)
        .await
        .unwrap_err();

    assert!(error.is_not_found());
    assert_eq!(error.status(), Some(404));
    match error {
        GerritError::Http(HttpError::Response(e)) => assert_eq!(e.message, "Not found: 404"),
        other => panic!("Expected Response error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_no_content_decodes_as_unit() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/a/accounts/1000002/active"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let (): () = client
        .invoke(HttpMethod::Delete, "accounts/1000002/active", None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_malformed_json_returns_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(gerrit_json("{not json"))
        .mount(&server)
        .await;

    let client = authenticated_client(&server);
    let result = client
        .invoke::<Value>(HttpMethod::Get, "changes/", None)
        .await;

    assert!(matches!(result, Err(GerritError::Json(_))));
}

#[tokio::test]
async fn test_configured_tries_retry_server_errors() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a/config/server/version"))
        .respond_with(ResponseTemplate::new(502))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/a/config/server/version"))
        .respond_with(gerrit_json("\"3.10.0\""))
        .expect(1)
        .mount(&server)
        .await;

    let config = GerritConfig::builder().tries(2).build().unwrap();
    let client = GerritClient::new(Arc::new(credential_for(&server)), config).unwrap();
    let version: String = client
        .invoke(HttpMethod::Get, "config/server/version", None)
        .await
        .unwrap();

    assert_eq!(version, "3.10.0");
}

#[tokio::test]
async fn test_slow_response_is_classified_as_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/a/config/server/version"))
        .respond_with(gerrit_json("\"3.10.0\"").set_delay(Duration::from_millis(500)))
        .mount(&server)
        .await;

    let config = GerritConfig::builder()
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();
    let client = GerritClient::new(Arc::new(credential_for(&server)), config).unwrap();
    let err = client
        .invoke::<String>(HttpMethod::Get, "config/server/version", None)
        .await
        .unwrap_err();

    assert!(err.is_timeout(), "unexpected error: {err}");
    assert!(matches!(err, GerritError::Http(HttpError::Network(_))));
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_concurrent_calls_share_one_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(|request: &Request| {
            let body = format!("{MAGIC}\"{}\"", request.url.path());
            ResponseTemplate::new(200).set_body_raw(body.into_bytes(), "application/json")
        })
        .expect(3)
        .mount(&server)
        .await;

    let client = Arc::new(authenticated_client(&server));
    let mut handles = Vec::new();
    for name in ["alpha", "beta", "gamma"] {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            client
                .invoke::<String>(HttpMethod::Get, &format!("projects/{name}"), None)
                .await
        }));
    }

    let mut paths = Vec::new();
    for handle in handles {
        paths.push(handle.await.unwrap().unwrap());
    }
    assert_eq!(
        paths,
        vec!["/a/projects/alpha", "/a/projects/beta", "/a/projects/gamma"]
    );
}
