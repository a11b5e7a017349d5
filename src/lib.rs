//! # Swell API Rust Client
//!
//! A Rust client for the Swell commerce API, providing validated store
//! credentials, an authenticated async HTTP client, and a single normalized
//! error shape for every failure mode.
//!
//! ## Overview
//!
//! This crate provides:
//! - An async [`Client`] covering the GET, POST, PUT, and DELETE verbs
//! - Type-safe initialization via [`ClientOptions`] and [`ClientConfig`]
//! - Validated newtypes for store credentials ([`ClientId`], [`ClientKey`])
//! - Basic auth derived from the store credentials, never logged
//! - Response normalization into [`ApiResponse`]
//! - Error classification into [`ApiError`] with stable uppercase codes
//!
//! ## Quick Start
//!
//! ```rust
//! use swell_api::{Client, ClientOptions};
//!
//! // Connect with your store ID and secret key
//! let client = Client::create("my-store", "secret-key", ClientOptions::new()).unwrap();
//! assert!(client.is_initialized());
//! ```
//!
//! ## Making API Requests
//!
//! Every verb takes an endpoint and an optional JSON body, and resolves to
//! the parsed response body on success:
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let products = client.get("/products", Some(json!({"limit": 25}))).await?;
//! let created = client.post("/products", Some(json!({"name": "Shirt"}))).await?;
//! let updated = client.put("/products/123", Some(json!({"price": 19}))).await?;
//! client.delete("/products/123", None).await?;
//! ```
//!
//! ## Error Handling
//!
//! All failures surface as [`ApiError`], so callers branch on the `code`
//! field instead of matching transport-specific types:
//!
//! ```rust,ignore
//! match client.get("/products/missing", None).await {
//!     Ok(data) => println!("{data}"),
//!     Err(error) => match error.code.as_str() {
//!         "NOT_FOUND" => println!("no such product"),
//!         "NO_RESPONSE" => println!("the API never answered"),
//!         _ => println!("failed with {}: {}", error.code, error),
//!     },
//! }
//! ```
//!
//! ## Configuration
//!
//! Everything beyond the credentials is optional and defaulted:
//!
//! ```rust
//! use swell_api::{Client, ClientOptions};
//!
//! let options = ClientOptions::new()
//!     .url("https://api.swell.store")
//!     .version(1)
//!     .timeout(15_000)
//!     .header("X-Env", "production");
//!
//! let client = Client::create("my-store", "secret-key", options).unwrap();
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Clients are instances; run as many as you need
//! - **Fail-fast validation**: Credentials are validated before any request
//! - **One error shape**: Every failure is an [`ApiError`] with a stable code
//! - **Thread-safe**: The client is `Send + Sync` and shares across tasks
//! - **Async-first**: Designed for use with the Tokio async runtime

pub mod client;
pub mod config;
pub mod error;

// Re-export public types at crate root for convenience
pub use client::{
    format_message, normalize_headers, normalize_response, ApiError, ApiRequest, ApiResponse,
    Client, HttpMethod, USER_AGENT,
};
pub use config::{ClientConfig, ClientId, ClientKey, ClientOptions, DEFAULT_URL};
pub use error::ConfigError;
