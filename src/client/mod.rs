//! HTTP client types for Swell API communication.
//!
//! This module provides the authenticated client layer for talking to a
//! Swell store. It handles request normalization, response parsing, and
//! collapsing every failure mode into one error shape.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Client`]: The async client for API communication
//! - [`ApiRequest`]: The normalized form of an outgoing request
//! - [`ApiResponse`]: A normalized response from the API
//! - [`ApiError`]: The single error shape surfaced to callers
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//!
//! # Example
//!
//! ```rust,ignore
//! use swell_api::{Client, ClientOptions};
//!
//! // Connect to a store
//! let client = Client::create("my-store", "secret-key", ClientOptions::new())?;
//!
//! // Fetch and create resources
//! let products = client.get("/products", None).await?;
//! ```
//!
//! # Error Classification
//!
//! Failed requests are classified in fixed precedence order:
//!
//! - **Server responded non-2xx**: code derived from the status text
//!   (e.g. `NOT_FOUND`), message from the response body, status and
//!   headers attached
//! - **No response received**: code `NO_RESPONSE` with a fixed message
//! - **Request never went out**: the transport's own message and code,
//!   with `ERROR` as the fallback code
//!
//! Timeouts keep their own `TIMEOUT` code so they stay distinguishable
//! from generic connection failures.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{format_message, ApiError};
pub use http_client::{Client, USER_AGENT};
pub use http_request::{ApiRequest, HttpMethod};
pub use http_response::{normalize_headers, normalize_response, ApiResponse};
