//! Error types and classification for API requests.
//!
//! Every failure mode of a request collapses into a single [`ApiError`]
//! shape, so callers branch on a stable `code` string instead of matching
//! a zoo of transport types.
//!
//! # Classification
//!
//! A failed request is classified in fixed precedence order:
//!
//! 1. The server answered with a non-2xx status: the message comes from the
//!    response body, the code from the status text, and the status and
//!    normalized headers are attached.
//! 2. The request went out but nothing came back: the literal
//!    `NO_RESPONSE` code with a fixed message.
//! 3. The request never produced a response attempt: the transport's own
//!    message and code, normalized, with `ERROR` as the fallback code.
//!
//! # Example
//!
//! ```rust
//! use swell_api::ApiError;
//!
//! fn handle(error: &ApiError) {
//!     match error.code.as_str() {
//!         "NOT_FOUND" => println!("missing resource"),
//!         "NO_RESPONSE" => println!("network trouble: {error}"),
//!         _ => println!("request failed: {error}"),
//!     }
//! }
//! ```

use std::collections::HashMap;

use serde_json::Value;
use thiserror::Error;

/// The single error type surfaced to callers of a [`Client`](crate::Client).
///
/// Whatever went wrong, the caller sees this shape: a human-readable
/// message, a stable uppercase code, the HTTP status when a response was
/// received, and the normalized response headers.
///
/// # Example
///
/// ```rust
/// use swell_api::ApiError;
/// use std::collections::HashMap;
///
/// let error = ApiError {
///     message: "Not found".to_string(),
///     code: "NOT_FOUND".to_string(),
///     status: Some(404),
///     headers: HashMap::new(),
/// };
///
/// assert_eq!(error.to_string(), "Not found");
/// ```
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable description of the failure.
    pub message: String,
    /// Stable uppercase code, e.g. `NOT_FOUND` or `NO_RESPONSE`.
    pub code: String,
    /// The HTTP status code, when a response was received.
    pub status: Option<u16>,
    /// Normalized response headers. Empty when no response was received.
    pub headers: HashMap<String, Vec<String>>,
}

impl ApiError {
    /// The error reported when a request is made before [`Client::init`]
    /// has succeeded.
    ///
    /// [`Client::init`]: crate::Client::init
    pub(crate) fn not_initialized() -> Self {
        Self {
            message: "Swell client is not initialized. Call init() with your store ID and key."
                .to_string(),
            code: "NOT_INITIALIZED".to_string(),
            status: None,
            headers: HashMap::new(),
        }
    }
}

/// A transport failure awaiting classification.
///
/// This is the neutral shape [`transform_error`] classifies. Dispatch fills
/// it in from whatever the HTTP layer reported; keeping it free of transport
/// types lets the classification rules be tested with literal values.
#[derive(Debug)]
pub(crate) struct TransportError {
    /// The received response, when the server answered at all.
    pub(crate) response: Option<TransportResponse>,
    /// Whether the request made it onto the wire.
    pub(crate) request_sent: bool,
    /// The transport's own error code, if it has one.
    pub(crate) code: Option<String>,
    /// The transport's own error message.
    pub(crate) message: String,
}

/// A non-success response captured for classification.
#[derive(Debug)]
pub(crate) struct TransportResponse {
    pub(crate) status: u16,
    pub(crate) data: Value,
    pub(crate) headers: HashMap<String, Vec<String>>,
}

impl TransportError {
    /// Captures a non-success response.
    pub(crate) fn from_response(
        status: u16,
        data: Value,
        headers: HashMap<String, Vec<String>>,
    ) -> Self {
        Self {
            response: Some(TransportResponse {
                status,
                data,
                headers,
            }),
            request_sent: true,
            code: None,
            message: format!("request failed with status {status}"),
        }
    }
}

impl From<reqwest::Error> for TransportError {
    /// Maps an HTTP layer failure onto the neutral shape.
    ///
    /// Timeouts are kept as their own signal so callers get a `TIMEOUT`
    /// code with the transport's message rather than a generic
    /// `NO_RESPONSE`. Connection and send failures mean the request went
    /// out (or was attempted) without an answer. Everything else failed
    /// before a response could exist, and carries a code named after the
    /// failing stage.
    fn from(error: reqwest::Error) -> Self {
        let message = error.to_string();

        if error.is_timeout() {
            return Self {
                response: None,
                request_sent: false,
                code: Some("timeout".to_string()),
                message,
            };
        }

        if error.is_connect() || error.is_request() {
            return Self {
                response: None,
                request_sent: true,
                code: None,
                message,
            };
        }

        Self {
            response: None,
            request_sent: false,
            code: stage_code(&error).map(str::to_string),
            message,
        }
    }
}

/// Names the stage a request died in before any response attempt.
fn stage_code(error: &reqwest::Error) -> Option<&'static str> {
    if error.is_builder() {
        Some("builder")
    } else if error.is_redirect() {
        Some("redirect")
    } else if error.is_body() {
        Some("body")
    } else if error.is_decode() {
        Some("decode")
    } else {
        None
    }
}

/// Classifies a transport failure into an [`ApiError`].
///
/// Precedence is fixed: a received response wins over a sent request,
/// which wins over the transport's own code and message.
pub(crate) fn transform_error(error: TransportError) -> ApiError {
    if let Some(response) = error.response {
        let reason = reqwest::StatusCode::from_u16(response.status)
            .ok()
            .and_then(|status| status.canonical_reason());

        return ApiError {
            message: format_message(&response.data),
            code: normalize_code(reason),
            status: Some(response.status),
            headers: response.headers,
        };
    }

    if error.request_sent {
        return ApiError {
            message: "No response from server".to_string(),
            code: "NO_RESPONSE".to_string(),
            status: None,
            headers: HashMap::new(),
        };
    }

    ApiError {
        message: error.message,
        code: normalize_code(error.code.as_deref()),
        status: None,
        headers: HashMap::new(),
    }
}

/// Derives the error message from a response body.
///
/// String bodies are trimmed of surrounding whitespace. Anything else is
/// rendered as compact JSON so structured error payloads survive intact.
#[must_use]
pub fn format_message(data: &Value) -> String {
    match data {
        Value::String(message) => message.trim().to_string(),
        data => data.to_string(),
    }
}

/// Normalizes an error code to uppercase with underscores, falling back
/// to the literal `ERROR`.
fn normalize_code(code: Option<&str>) -> String {
    code.map_or_else(
        || "ERROR".to_string(),
        |code| code.to_uppercase().replace(' ', "_"),
    )
}
