//! Generic HTTP call executor for the auditable graph client.
//!
//! This module provides the [`HttpClient`] type, the transport layer the
//! domain client is layered on. It resolves path templates, merges headers,
//! sends each request exactly once, and parses the response.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::GraphConfig;

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generic HTTP call executor for the graph service.
///
/// The client handles:
/// - Base URI construction from the configured endpoint and base path
/// - Default headers including User-Agent and bearer token
/// - Path template resolution with percent-encoded parameters
/// - Response parsing into [`HttpResponse`]
///
/// Every request is sent exactly once; retries, caching, and timeouts are
/// the caller's responsibility.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use auditable_graph::{Endpoint, GraphConfig};
/// use auditable_graph::clients::{HttpClient, HttpRequest, HttpMethod};
///
/// let config = GraphConfig::builder()
///     .endpoint(Endpoint::new("https://graph.example.com").unwrap())
///     .build()
///     .unwrap();
///
/// let client = HttpClient::new(&config);
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/:id")
///     .path_param("id", "vertex-123")
///     .build()
///     .unwrap();
///
/// let response = client.request(request).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://graph.example.com`).
    base_uri: String,
    /// Base path the vertex collection is mounted under (may be empty).
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use auditable_graph::{Endpoint, GraphConfig};
    /// use auditable_graph::clients::HttpClient;
    ///
    /// let config = GraphConfig::builder()
    ///     .endpoint(Endpoint::new("https://graph.example.com").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &GraphConfig) -> Self {
        let base_uri = config.endpoint().as_ref().to_string();
        let base_path = config.base_path().to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Auditable Graph Client v{SDK_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        // Add bearer token header if configured
        if let Some(token) = config.auth_token() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_uri,
            base_path,
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an HTTP request to the graph service.
    ///
    /// This method handles:
    /// - Request validation and path template resolution
    /// - URL construction
    /// - Header merging (defaults, then Content-Type when a body is present,
    ///   then per-request extras)
    /// - Response parsing
    ///
    /// The request is sent exactly once; a failed call surfaces immediately.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        // Validate request and resolve the path template first
        request.verify().map_err(HttpError::InvalidRequest)?;
        let path = request.resolve_path().map_err(HttpError::InvalidRequest)?;

        // Build full URL
        let url = format!("{}{}{}", self.base_uri, self.base_path, path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if request.body.is_some() {
            headers.insert("Content-Type".to_string(), "application/json".to_string());
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        // Build the reqwest request
        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        // Add headers
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        // Add query params
        if let Some(query) = &request.query {
            if !query.is_empty() {
                req_builder = req_builder.query(query);
            }
        }

        // Add body
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        // Send request
        let res = req_builder.send().await?;

        // Parse response
        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await.unwrap_or_default();

        // Parse body as JSON; empty bodies (e.g. 204) become an empty object
        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).unwrap_or_else(|_| {
                // For 5xx errors, keep the raw body for diagnostics
                if code >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        };

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        let error_message = Self::serialize_error(&response);
        Err(HttpError::Response(HttpResponseError {
            code,
            message: error_message,
            error_reference: response.request_id().map(String::from),
        }))
    }

    /// Parses response headers into a lowercased `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes an error response body into a JSON message.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        if let Some(errors) = response.body.get("errors") {
            error_body.insert("errors".to_string(), errors.clone());
        }
        if let Some(error) = response.body.get("error") {
            error_body.insert("error".to_string(), error.clone());
        }
        if let Some(message) = response.body.get("message") {
            error_body.insert("message".to_string(), message.clone());
        }

        if let Some(request_id) = response.request_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {request_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AuthToken, Endpoint};

    fn create_test_config() -> GraphConfig {
        GraphConfig::builder()
            .endpoint(Endpoint::new("https://graph.example.com").unwrap())
            .base_path("/auditable-item-graph")
            .build()
            .unwrap()
    }

    #[test]
    fn test_client_construction_from_config() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(client.base_uri(), "https://graph.example.com");
        assert_eq!(client.base_path(), "/auditable-item-graph");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = HttpClient::new(&create_test_config());

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Auditable Graph Client v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = GraphConfig::builder()
            .endpoint(Endpoint::new("https://graph.example.com").unwrap())
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
        assert!(user_agent.contains("Auditable Graph Client"));
    }

    #[test]
    fn test_bearer_token_header_injection() {
        let config = GraphConfig::builder()
            .endpoint(Endpoint::new("https://graph.example.com").unwrap())
            .auth_token(AuthToken::new("test-token").unwrap())
            .build()
            .unwrap();
        let client = HttpClient::new(&config);

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer test-token".to_string())
        );
    }

    #[test]
    fn test_no_authorization_header_without_token() {
        let client = HttpClient::new(&create_test_config());
        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_accept_header_defaults_to_json() {
        let client = HttpClient::new(&create_test_config());

        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}
