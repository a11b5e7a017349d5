//! Configuration types for the Swell API client.
//!
//! This module provides the types used to initialize a client connection:
//! the options accepted at initialization and the resolved configuration
//! the client operates with afterwards.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientOptions`]: Optional settings accepted by [`Client::init`](crate::Client::init)
//! - [`ClientConfig`]: The resolved configuration after defaults are applied
//! - [`ClientId`]: A validated store ID newtype
//! - [`ClientKey`]: A validated store secret key newtype with masked debug output
//!
//! Every field of [`ClientOptions`] is optional. Resolving options into a
//! [`ClientConfig`] fills the gaps from the documented defaults, so a partial
//! set of options always produces a fully specified configuration.
//!
//! # Example
//!
//! ```rust
//! use swell_api::{ClientConfig, ClientOptions};
//!
//! let options = ClientOptions::new()
//!     .version(2)
//!     .timeout(10_000);
//!
//! let config = ClientConfig::from(options);
//! assert_eq!(config.base_url(), "https://api.swell.store");
//! assert_eq!(config.version(), 2);
//! ```

mod newtypes;

pub use newtypes::{ClientId, ClientKey};

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Default base URL for the Swell API.
pub const DEFAULT_URL: &str = "https://api.swell.store";

/// Optional settings accepted when initializing a [`Client`](crate::Client).
///
/// All fields are optional. Anything left unset falls back to the documented
/// default when the options are resolved into a [`ClientConfig`].
///
/// # Defaults
///
/// - `url`: [`DEFAULT_URL`]
/// - `verify_cert`: `true`
/// - `version`: `1`
/// - `timeout`: none (requests wait indefinitely)
/// - `headers`: empty
/// - `user_application`: `None`
///
/// # Serialization
///
/// `ClientOptions` deserializes from a plain JSON object with every key
/// optional, so options can be loaded from an application config file:
///
/// ```rust
/// use swell_api::ClientOptions;
///
/// let options: ClientOptions =
///     serde_json::from_str(r#"{"url": "https://api.swell.test", "timeout": 5000}"#).unwrap();
/// ```
///
/// # Example
///
/// ```rust
/// use swell_api::ClientOptions;
///
/// let options = ClientOptions::new()
///     .url("https://api.swell.test")
///     .verify_cert(false)
///     .header("X-Env", "staging");
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    url: Option<String>,
    verify_cert: Option<bool>,
    version: Option<u32>,
    timeout: Option<u64>,
    headers: HashMap<String, String>,
    user_application: Option<String>,
}

impl ClientOptions {
    /// Creates an empty set of options. Everything falls back to defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL requests are sent to.
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Sets whether TLS certificates are verified.
    ///
    /// Disabling verification is only appropriate when targeting a local
    /// development server with a self-signed certificate.
    #[must_use]
    pub const fn verify_cert(mut self, verify: bool) -> Self {
        self.verify_cert = Some(verify);
        self
    }

    /// Sets the requested API version.
    #[must_use]
    pub const fn version(mut self, version: u32) -> Self {
        self.version = Some(version);
        self
    }

    /// Sets the request timeout in milliseconds.
    #[must_use]
    pub const fn timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout = Some(timeout_ms);
        self
    }

    /// Replaces the extra headers sent with every request.
    ///
    /// These are layered over the client's standard headers, so a caller
    /// entry with the same name wins.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = headers;
        self
    }

    /// Adds a single extra header sent with every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the application identifier reported in the `X-User-Application`
    /// header.
    #[must_use]
    pub fn user_application(mut self, application: impl Into<String>) -> Self {
        self.user_application = Some(application.into());
        self
    }
}

/// Resolved client configuration.
///
/// Produced by applying defaults to a [`ClientOptions`] value. Once built,
/// the configuration is immutable for the lifetime of the connection that
/// holds it.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Example
///
/// ```rust
/// use swell_api::{ClientConfig, ClientOptions};
///
/// let config = ClientConfig::from(ClientOptions::new());
/// assert_eq!(config.base_url(), "https://api.swell.store");
/// assert!(config.verify_cert());
/// assert_eq!(config.version(), 1);
/// assert!(config.timeout().is_none());
/// ```
#[derive(Clone, Debug)]
pub struct ClientConfig {
    base_url: String,
    verify_cert: bool,
    version: u32,
    timeout: Option<Duration>,
    headers: HashMap<String, String>,
    user_application: Option<String>,
}

impl ClientConfig {
    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns whether TLS certificates are verified.
    #[must_use]
    pub const fn verify_cert(&self) -> bool {
        self.verify_cert
    }

    /// Returns the requested API version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the request timeout, if one is configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the extra headers sent with every request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the application identifier, if one is configured.
    #[must_use]
    pub fn user_application(&self) -> Option<&str> {
        self.user_application.as_deref()
    }
}

impl From<ClientOptions> for ClientConfig {
    /// Resolves options into a full configuration by filling unset fields
    /// with the documented defaults.
    fn from(options: ClientOptions) -> Self {
        Self {
            base_url: options.url.unwrap_or_else(|| DEFAULT_URL.to_owned()),
            verify_cert: options.verify_cert.unwrap_or(true),
            version: options.version.unwrap_or(1),
            timeout: options.timeout.map(Duration::from_millis),
            headers: options.headers,
            user_application: options.user_application,
        }
    }
}

// Verify ClientConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ClientConfig>();
};
