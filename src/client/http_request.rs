//! Request types for the Swell API client.
//!
//! This module provides the [`HttpMethod`] enum and the [`ApiRequest`] type,
//! the normalized form every request takes before it is dispatched.

use serde_json::Value;
use std::fmt;

/// HTTP methods supported by the Swell API.
///
/// The client supports the four standard methods used by the REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A normalized request ready for dispatch.
///
/// Every call goes through this shape before anything touches the network:
/// the endpoint is kept as given, and an absent body becomes an explicit
/// JSON `null` so downstream code never deals with a missing field.
///
/// # Example
///
/// ```rust
/// use swell_api::{ApiRequest, HttpMethod};
/// use serde_json::{json, Value};
///
/// let request = ApiRequest::new(HttpMethod::Get, "/products", None);
/// assert_eq!(request.data, Value::Null);
///
/// let request = ApiRequest::new(HttpMethod::Post, "/products", Some(json!({"name": "Shirt"})));
/// assert_eq!(request.data["name"], "Shirt");
/// ```
#[derive(Clone, Debug)]
pub struct ApiRequest {
    /// The HTTP method for this request.
    pub method: HttpMethod,
    /// The endpoint, relative to the configured base URL.
    pub url: String,
    /// The request body. `Value::Null` when no body was given.
    pub data: Value,
}

impl ApiRequest {
    /// Creates a normalized request.
    ///
    /// A `None` body is normalized to `Value::Null`. A null body is never
    /// serialized onto the wire; it only marks the request as body-less.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            method,
            url: url.into(),
            data: data.unwrap_or(Value::Null),
        }
    }
}
