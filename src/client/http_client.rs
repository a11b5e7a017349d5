//! Authenticated HTTP client for the Swell API.
//!
//! This module provides the [`Client`] type, the entry point for making
//! authenticated requests against a Swell store.

use std::collections::HashMap;
use std::fmt;

use base64::prelude::*;
use serde_json::Value;

use crate::client::errors::{transform_error, ApiError, TransportError};
use crate::client::http_request::{ApiRequest, HttpMethod};
use crate::client::http_response::{normalize_response, ApiResponse};
use crate::config::{ClientConfig, ClientId, ClientKey, ClientOptions};
use crate::error::ConfigError;

/// User agent reported with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for making authenticated requests to the Swell API.
///
/// The client handles:
/// - Credential validation and Basic auth header construction
/// - Default headers, with caller-supplied headers taking precedence
/// - Body and response normalization
/// - Collapsing every failure into a single [`ApiError`] shape
///
/// A client starts out unconnected. [`Client::init`] (or the
/// [`Client::create`] shorthand) validates the store credentials and opens
/// a connection; requests made before that fail with the `NOT_INITIALIZED`
/// error code. Calling `init` again replaces the connection wholesale, so
/// stale settings can never leak into the new one.
///
/// # Thread Safety
///
/// `Client` is `Send + Sync`. Requests borrow the client immutably, so a
/// single instance can serve concurrent tasks.
///
/// # Example
///
/// ```rust,ignore
/// use swell_api::{Client, ClientOptions};
/// use serde_json::json;
///
/// let client = Client::create("my-store", "secret-key", ClientOptions::new())?;
///
/// let products = client.get("/products", None).await?;
/// let created = client
///     .post("/products", Some(json!({"name": "Shirt", "price": 42})))
///     .await?;
/// ```
#[derive(Debug, Default)]
pub struct Client {
    connection: Option<Connection>,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

/// An established store connection.
///
/// Built once per `init` call and never mutated afterwards. The secret key
/// is consumed into the Basic auth header and not retained.
struct Connection {
    http: reqwest::Client,
    config: ClientConfig,
    client_id: ClientId,
    default_headers: HashMap<String, String>,
}

impl fmt::Debug for Connection {
    // The default headers carry the authorization token, so they are
    // left out of debug output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Connection")
            .field("config", &self.config)
            .field("client_id", &self.client_id)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates an unconnected client.
    ///
    /// Requests fail with the `NOT_INITIALIZED` error code until
    /// [`Client::init`] succeeds.
    #[must_use]
    pub const fn new() -> Self {
        Self { connection: None }
    }

    /// Creates a client and initializes it in one step.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if either credential is empty.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use swell_api::{Client, ClientOptions};
    ///
    /// let client = Client::create("my-store", "secret-key", ClientOptions::new()).unwrap();
    /// assert!(client.is_initialized());
    /// ```
    pub fn create(
        client_id: impl Into<String>,
        client_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ConfigError> {
        let mut client = Self::new();
        client.init(client_id, client_key, options)?;
        Ok(client)
    }

    /// Validates credentials and opens a connection to the store.
    ///
    /// Options left unset fall back to the defaults documented on
    /// [`ClientOptions`]. Calling `init` on an already initialized client
    /// replaces the previous connection entirely.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingClientId`] or
    /// [`ConfigError::MissingClientKey`] if the corresponding credential
    /// is empty.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use swell_api::{Client, ClientOptions};
    ///
    /// let mut client = Client::new();
    /// client
    ///     .init("my-store", "secret-key", ClientOptions::new().timeout(10_000))
    ///     .unwrap();
    /// assert!(client.is_initialized());
    /// ```
    pub fn init(
        &mut self,
        client_id: impl Into<String>,
        client_key: impl Into<String>,
        options: ClientOptions,
    ) -> Result<(), ConfigError> {
        let client_id = ClientId::new(client_id)?;
        let client_key = ClientKey::new(client_key)?;
        let config = ClientConfig::from(options);

        self.connection = Some(Connection::new(client_id, &client_key, config));
        Ok(())
    }

    /// Returns `true` once [`Client::init`] has succeeded.
    #[must_use]
    pub const fn is_initialized(&self) -> bool {
        self.connection.is_some()
    }

    /// Returns the connected store ID, if initialized.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.connection
            .as_ref()
            .map(|connection| connection.client_id.as_ref())
    }

    /// Returns the resolved configuration, if initialized.
    #[must_use]
    pub fn config(&self) -> Option<&ClientConfig> {
        self.connection.as_ref().map(|connection| &connection.config)
    }

    /// Returns the headers sent with every request, if initialized.
    ///
    /// Note that these include the `Authorization` header.
    #[must_use]
    pub fn default_headers(&self) -> Option<&HashMap<String, String>> {
        self.connection
            .as_ref()
            .map(|connection| &connection.default_headers)
    }

    /// Sends a GET request to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails for any reason, including
    /// an uninitialized client.
    pub async fn get(&self, url: &str, data: Option<Value>) -> Result<Value, ApiError> {
        self.request(HttpMethod::Get, url, data).await
    }

    /// Sends a POST request to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails for any reason, including
    /// an uninitialized client.
    pub async fn post(&self, url: &str, data: Option<Value>) -> Result<Value, ApiError> {
        self.request(HttpMethod::Post, url, data).await
    }

    /// Sends a PUT request to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails for any reason, including
    /// an uninitialized client.
    pub async fn put(&self, url: &str, data: Option<Value>) -> Result<Value, ApiError> {
        self.request(HttpMethod::Put, url, data).await
    }

    /// Sends a DELETE request to the given endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails for any reason, including
    /// an uninitialized client.
    pub async fn delete(&self, url: &str, data: Option<Value>) -> Result<Value, ApiError> {
        self.request(HttpMethod::Delete, url, data).await
    }

    /// Sends a request with an explicit method.
    ///
    /// The endpoint is resolved against the configured base URL. A `None`
    /// body sends no payload at all. On success the parsed response body
    /// is returned directly.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] with:
    /// - code `NOT_INITIALIZED` if [`Client::init`] has not succeeded yet
    /// - the status-derived code for non-2xx responses
    /// - code `NO_RESPONSE` when the request went unanswered
    /// - the transport's own code (e.g. `TIMEOUT`) otherwise
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use swell_api::HttpMethod;
    /// use serde_json::json;
    ///
    /// let updated = client
    ///     .request(HttpMethod::Put, "/products/123", Some(json!({"price": 19})))
    ///     .await?;
    /// ```
    pub async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        data: Option<Value>,
    ) -> Result<Value, ApiError> {
        let connection = self
            .connection
            .as_ref()
            .ok_or_else(ApiError::not_initialized)?;

        let request = ApiRequest::new(method, url, data);
        let response = connection.send(&request).await?;
        Ok(response.data)
    }
}

impl Connection {
    /// Opens a connection with validated credentials.
    fn new(client_id: ClientId, client_key: &ClientKey, config: ClientConfig) -> Self {
        let token = BASE64_STANDARD.encode(format!(
            "{}:{}",
            client_id.as_ref(),
            client_key.as_ref()
        ));

        // Standard headers first, then caller headers, so a caller entry
        // with the same name wins.
        let mut default_headers = HashMap::new();
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());
        default_headers.insert("User-Agent".to_string(), USER_AGENT.to_string());
        default_headers.insert("Authorization".to_string(), format!("Basic {token}"));
        if let Some(application) = config.user_application() {
            default_headers.insert("X-User-Application".to_string(), application.to_string());
        }
        for (name, value) in config.headers() {
            default_headers.insert(name.clone(), value.clone());
        }

        let mut builder = reqwest::Client::builder()
            .use_rustls_tls()
            .cookie_store(true);
        if !config.verify_cert() {
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().expect("Failed to create HTTP client");

        Self {
            http,
            config,
            client_id,
            default_headers,
        }
    }

    /// Dispatches a normalized request and normalizes the outcome.
    async fn send(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let url = join_url(self.config.base_url(), &request.url);
        tracing::debug!("{} {}", request.method, url);

        let mut builder = match request.method {
            HttpMethod::Get => self.http.get(&url),
            HttpMethod::Post => self.http.post(&url),
            HttpMethod::Put => self.http.put(&url),
            HttpMethod::Delete => self.http.delete(&url),
        };

        for (name, value) in &self.default_headers {
            builder = builder.header(name, value);
        }

        if !request.data.is_null() {
            builder = builder.json(&request.data);
        }

        let response = match builder.send().await {
            Ok(response) => response,
            Err(error) => return Err(transform_error(TransportError::from(error))),
        };

        let status = response.status();
        let headers = response.headers().clone();
        let text = response.text().await.unwrap_or_default();
        let response = normalize_response(status.as_u16(), &headers, &text);

        if status.is_success() {
            return Ok(response);
        }

        tracing::debug!("request to {} failed with status {}", url, status);
        Err(transform_error(TransportError::from_response(
            response.status,
            response.data,
            response.headers,
        )))
    }
}

/// Joins the base URL and an endpoint with exactly one slash between them.
fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
