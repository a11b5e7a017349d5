//! Integration tests for client construction and configuration.
//!
//! These tests verify credential validation, option resolution, default
//! header assembly, and the normalization helpers, without any network.

use base64::prelude::*;
use serde_json::{json, Value};
use std::time::Duration;
use swell_api::{
    format_message, normalize_headers, ApiError, ApiRequest, Client, ClientOptions, ConfigError,
    HttpMethod, DEFAULT_URL, USER_AGENT,
};

fn create_test_client() -> Client {
    Client::create("test-store", "test-key", ClientOptions::new()).unwrap()
}

// ============================================================================
// Initialization
// ============================================================================

#[tokio::test]
async fn test_full_workflow_create_to_configured_client() {
    let client = create_test_client();

    assert!(client.is_initialized());
    assert_eq!(client.client_id(), Some("test-store"));

    let config = client.config().unwrap();
    assert_eq!(config.base_url(), DEFAULT_URL);
    assert!(config.verify_cert());
    assert_eq!(config.version(), 1);
    assert!(config.timeout().is_none());
}

#[tokio::test]
async fn test_missing_credentials_are_rejected() {
    assert!(matches!(
        Client::create("", "test-key", ClientOptions::new()),
        Err(ConfigError::MissingClientId)
    ));
    assert!(matches!(
        Client::create("test-store", "", ClientOptions::new()),
        Err(ConfigError::MissingClientKey)
    ));

    let mut client = Client::new();
    let result = client.init("", "", ClientOptions::new());
    assert!(matches!(result, Err(ConfigError::MissingClientId)));
    assert!(!client.is_initialized());
}

#[tokio::test]
async fn test_failed_init_leaves_existing_connection_alone() {
    let mut client = create_test_client();

    let result = client.init("", "other-key", ClientOptions::new());
    assert!(result.is_err());

    // The previous connection is still there and untouched.
    assert!(client.is_initialized());
    assert_eq!(client.client_id(), Some("test-store"));
}

#[tokio::test]
async fn test_reinit_replaces_settings_wholesale() {
    let mut client = Client::create(
        "first-store",
        "first-key",
        ClientOptions::new().version(2).header("X-Env", "staging"),
    )
    .unwrap();

    client
        .init("second-store", "second-key", ClientOptions::new())
        .unwrap();

    assert_eq!(client.client_id(), Some("second-store"));
    let config = client.config().unwrap();
    assert_eq!(config.version(), 1);
    assert!(config.headers().is_empty());
    assert!(client
        .default_headers()
        .unwrap()
        .get("X-Env")
        .is_none());
}

#[tokio::test]
async fn test_options_resolve_against_defaults() {
    let client = Client::create(
        "test-store",
        "test-key",
        ClientOptions::new()
            .url("https://api.swell.test/")
            .verify_cert(false)
            .timeout(2_500),
    )
    .unwrap();

    let config = client.config().unwrap();
    assert_eq!(config.base_url(), "https://api.swell.test/");
    assert!(!config.verify_cert());
    assert_eq!(config.timeout(), Some(Duration::from_millis(2_500)));
    // Unset options keep their defaults.
    assert_eq!(config.version(), 1);
}

// ============================================================================
// Default headers
// ============================================================================

#[tokio::test]
async fn test_default_headers_carry_auth_and_identity() {
    let client = create_test_client();
    let headers = client.default_headers().unwrap();

    let token = BASE64_STANDARD.encode("test-store:test-key");
    assert_eq!(
        headers.get("Authorization"),
        Some(&format!("Basic {token}"))
    );
    assert_eq!(
        headers.get("Content-Type"),
        Some(&"application/json".to_string())
    );
    assert_eq!(headers.get("User-Agent"), Some(&USER_AGENT.to_string()));
}

#[tokio::test]
async fn test_user_agent_identifies_the_crate() {
    assert!(USER_AGENT.starts_with("swell-api-rust/"));
}

#[tokio::test]
async fn test_caller_headers_win_over_standard_headers() {
    let client = Client::create(
        "test-store",
        "test-key",
        ClientOptions::new()
            .header("User-Agent", "my-backend/3.0")
            .header("X-Env", "production"),
    )
    .unwrap();

    let headers = client.default_headers().unwrap();
    assert_eq!(headers.get("User-Agent"), Some(&"my-backend/3.0".to_string()));
    assert_eq!(headers.get("X-Env"), Some(&"production".to_string()));
    // Untouched standard headers survive.
    assert!(headers.contains_key("Authorization"));
}

#[tokio::test]
async fn test_multiple_clients_have_independent_credentials() {
    let client1 = Client::create("store-one", "key-one", ClientOptions::new()).unwrap();
    let client2 = Client::create("store-two", "key-two", ClientOptions::new()).unwrap();

    assert_eq!(client1.client_id(), Some("store-one"));
    assert_eq!(client2.client_id(), Some("store-two"));

    let auth1 = client1.default_headers().unwrap().get("Authorization");
    let auth2 = client2.default_headers().unwrap().get("Authorization");
    assert_ne!(auth1, auth2);
}

#[tokio::test]
async fn test_debug_output_never_contains_the_key() {
    let client = create_test_client();
    let debug_output = format!("{client:?}");

    assert!(!debug_output.contains("test-key"));
    assert!(!debug_output.contains(&BASE64_STANDARD.encode("test-store:test-key")));
}

// ============================================================================
// Request and response normalization
// ============================================================================

#[tokio::test]
async fn test_request_normalization_fills_null_body() {
    let request = ApiRequest::new(HttpMethod::Get, "/products", None);
    assert_eq!(request.data, Value::Null);

    let request = ApiRequest::new(HttpMethod::Post, "/products", Some(json!({"name": "Hat"})));
    assert_eq!(request.data["name"], "Hat");
}

#[tokio::test]
async fn test_http_method_display() {
    assert_eq!(HttpMethod::Get.to_string(), "get");
    assert_eq!(HttpMethod::Post.to_string(), "post");
    assert_eq!(HttpMethod::Put.to_string(), "put");
    assert_eq!(HttpMethod::Delete.to_string(), "delete");
}

#[tokio::test]
async fn test_normalize_headers_lowercases_and_accumulates() {
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

    let mut headers = HeaderMap::new();
    headers.insert(
        HeaderName::from_static("content-type"),
        HeaderValue::from_static("application/json"),
    );
    headers.append(
        HeaderName::from_static("set-cookie"),
        HeaderValue::from_static("a=1"),
    );
    headers.append(
        HeaderName::from_static("set-cookie"),
        HeaderValue::from_static("b=2"),
    );

    let normalized = normalize_headers(&headers);
    assert_eq!(normalized["content-type"], vec!["application/json"]);
    assert_eq!(normalized["set-cookie"], vec!["a=1", "b=2"]);
}

#[tokio::test]
async fn test_format_message_trims_text_and_keeps_json() {
    assert_eq!(format_message(&json!("  Internal Server Error \n")), "Internal Server Error");
    assert_eq!(
        format_message(&json!({"errors": {"name": "required"}})),
        r#"{"errors":{"name":"required"}}"#
    );
}

#[tokio::test]
async fn test_api_error_displays_its_message() {
    let error = ApiError {
        message: "Not found".to_string(),
        code: "NOT_FOUND".to_string(),
        status: Some(404),
        headers: std::collections::HashMap::new(),
    };

    assert_eq!(error.to_string(), "Not found");
    assert_eq!(format!("{error}"), "Not found");
}
