//! Response types for the Swell API client.
//!
//! This module provides the [`ApiResponse`] type and the header
//! normalization every response and error goes through.

use std::collections::HashMap;

/// A normalized response from the Swell API.
///
/// Contains the parsed body, the normalized response headers, and the
/// HTTP status code. Only 2xx responses become an `ApiResponse`; anything
/// else is reported as an [`ApiError`](crate::ApiError).
///
/// # Example
///
/// ```rust
/// use swell_api::ApiResponse;
/// use std::collections::HashMap;
/// use serde_json::json;
///
/// let response = ApiResponse::new(200, HashMap::new(), json!({"count": 42}));
/// assert_eq!(response.data["count"], 42);
/// ```
#[derive(Clone, Debug)]
pub struct ApiResponse {
    /// The HTTP status code.
    pub status: u16,
    /// Normalized response headers. Names are lowercase; values keep
    /// their order of appearance.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub data: serde_json::Value,
}

impl ApiResponse {
    /// Creates a normalized response.
    #[must_use]
    pub const fn new(
        status: u16,
        headers: HashMap<String, Vec<String>>,
        data: serde_json::Value,
    ) -> Self {
        Self {
            status,
            headers,
            data,
        }
    }

    /// Returns the first value of the named header, if present.
    ///
    /// Lookup is by the normalized (lowercase) header name.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Normalizes transport headers into a plain map.
///
/// Header names are lowercased and repeated headers accumulate their values
/// in order of appearance. Values that are not valid UTF-8 are kept as empty
/// strings so the name still appears in the map. Normalization is stable:
/// rebuilding a header map from normalized output and normalizing it again
/// yields the same map.
///
/// # Example
///
/// ```rust
/// use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
/// use swell_api::normalize_headers;
///
/// let mut headers = HeaderMap::new();
/// headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
///
/// let normalized = normalize_headers(&headers);
/// assert_eq!(normalized["content-type"], vec!["application/json"]);
/// ```
#[must_use]
pub fn normalize_headers(headers: &reqwest::header::HeaderMap) -> HashMap<String, Vec<String>> {
    let mut normalized: HashMap<String, Vec<String>> = HashMap::new();

    for (name, value) in headers {
        let name = name.as_str().to_lowercase();
        let value = value.to_str().unwrap_or_default().to_string();
        normalized.entry(name).or_default().push(value);
    }

    normalized
}

/// Normalizes a raw response into an [`ApiResponse`].
///
/// The body is parsed as JSON when possible; non-JSON text is kept as a
/// string value, so an empty body comes through as `""` and a plain text
/// body survives verbatim.
///
/// # Example
///
/// ```rust
/// use reqwest::header::HeaderMap;
/// use swell_api::normalize_response;
///
/// let response = normalize_response(200, &HeaderMap::new(), r#"{"count": 42}"#);
/// assert_eq!(response.status, 200);
/// assert_eq!(response.data["count"], 42);
/// ```
#[must_use]
pub fn normalize_response(
    status: u16,
    headers: &reqwest::header::HeaderMap,
    body: &str,
) -> ApiResponse {
    ApiResponse::new(status, normalize_headers(headers), parse_body(body))
}

/// Parses a response body as JSON, keeping non-JSON text as a string value.
fn parse_body(text: &str) -> serde_json::Value {
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::Value::String(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
    use serde_json::json;

    fn header_map(entries: &[(&str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in entries {
            headers.append(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        headers
    }

    #[test]
    fn test_response_preserves_fields() {
        let mut headers = HashMap::new();
        headers.insert("x-request-id".to_string(), vec!["abc-123".to_string()]);

        let response = ApiResponse::new(200, headers, json!({"id": "prod_1"}));

        assert_eq!(response.status, 200);
        assert_eq!(response.data["id"], "prod_1");
        assert_eq!(response.header("x-request-id"), Some("abc-123"));
    }

    #[test]
    fn test_header_accessor_returns_first_value() {
        let mut headers = HashMap::new();
        headers.insert(
            "set-cookie".to_string(),
            vec!["a=1".to_string(), "b=2".to_string()],
        );

        let response = ApiResponse::new(200, headers, json!(null));
        assert_eq!(response.header("set-cookie"), Some("a=1"));
        assert_eq!(response.header("missing"), None);
    }

    #[test]
    fn test_normalize_lowercases_names() {
        let headers = header_map(&[("Content-Type", "application/json")]);
        let normalized = normalize_headers(&headers);

        assert_eq!(normalized["content-type"], vec!["application/json"]);
        assert!(!normalized.contains_key("Content-Type"));
    }

    #[test]
    fn test_normalize_accumulates_repeated_headers() {
        let headers = header_map(&[("set-cookie", "a=1"), ("set-cookie", "b=2")]);
        let normalized = normalize_headers(&headers);

        assert_eq!(normalized["set-cookie"], vec!["a=1", "b=2"]);
    }

    #[test]
    fn test_normalize_is_stable() {
        let headers = header_map(&[
            ("Content-Type", "application/json"),
            ("set-cookie", "a=1"),
            ("set-cookie", "b=2"),
        ]);
        let normalized = normalize_headers(&headers);

        // Rebuild a header map from the normalized output and run it
        // through again.
        let mut rebuilt = HeaderMap::new();
        for (name, values) in &normalized {
            for value in values {
                rebuilt.append(
                    HeaderName::from_bytes(name.as_bytes()).unwrap(),
                    HeaderValue::from_str(value).unwrap(),
                );
            }
        }

        assert_eq!(normalize_headers(&rebuilt), normalized);
    }

    #[test]
    fn test_normalize_keeps_non_utf8_values_as_empty() {
        let mut headers = HeaderMap::new();
        headers.insert(
            HeaderName::from_static("x-raw"),
            HeaderValue::from_bytes(&[0xff, 0xfe]).unwrap(),
        );

        let normalized = normalize_headers(&headers);
        assert_eq!(normalized["x-raw"], vec![String::new()]);
    }

    #[test]
    fn test_normalize_response_parses_json_body() {
        let headers = header_map(&[("Content-Type", "application/json")]);
        let response = normalize_response(200, &headers, r#"{"id": "prod_1"}"#);

        assert_eq!(response.status, 200);
        assert_eq!(response.data, json!({"id": "prod_1"}));
        assert_eq!(response.header("content-type"), Some("application/json"));
    }

    #[test]
    fn test_normalize_response_keeps_text_body_as_string() {
        let response = normalize_response(502, &HeaderMap::new(), "Bad Gateway\n");
        assert_eq!(response.data, json!("Bad Gateway\n"));
    }

    #[test]
    fn test_parse_body_handles_json_and_text() {
        assert_eq!(parse_body(r#"{"a": 1}"#), json!({"a": 1}));
        assert_eq!(parse_body("42"), json!(42));
        assert_eq!(parse_body("null"), serde_json::Value::Null);
        assert_eq!(parse_body("not json"), json!("not json"));
        assert_eq!(parse_body(""), json!(""));
    }
}
