//! HTTP response types for the auditable graph client.
//!
//! This module provides the [`HttpResponse`] type for accessing parsed
//! response data from the graph service.

use std::collections::HashMap;

/// An HTTP response from the graph service.
///
/// Contains the response status code, lowercased headers, and the JSON body.
/// An empty response body (e.g., a 204 from an update) is represented as an
/// empty JSON object.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the `Location` header value, if present.
    ///
    /// Create operations report the assigned identifier through this header.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get("location")
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `x-request-id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get("x-request-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
