//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated graph service endpoint URL.
///
/// This newtype validates that the endpoint has a proper format with a scheme
/// and host. Trailing slashes are trimmed so the endpoint can be joined with
/// request paths without doubling separators.
///
/// # Example
///
/// ```rust
/// use auditable_graph::Endpoint;
///
/// let endpoint = Endpoint::new("https://graph.example.com/").unwrap();
/// assert_eq!(endpoint.as_ref(), "https://graph.example.com");
/// assert_eq!(endpoint.scheme(), "https");
/// assert_eq!(endpoint.host_name(), Some("graph.example.com"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl Endpoint {
    /// Creates a new validated endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] if the URL is missing a
    /// scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        // Find scheme
        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidEndpoint { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        // Find host
        let host_start = scheme_end + 3; // Skip "://"
        if host_start >= url.len() {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        // Host ends at port, path, query, or end of string
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        let host = &url[host_start..host_end];
        if host.is_empty() {
            return Err(ConfigError::InvalidEndpoint { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }
}

impl AsRef<str> for Endpoint {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

/// A validated bearer token for authenticating with the graph service.
///
/// This newtype ensures the token is non-empty and masks its value
/// in debug output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `AuthToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use auditable_graph::AuthToken;
///
/// let token = AuthToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AuthToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Creates a new validated auth token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAuthToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyAuthToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AuthToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(*****)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_validates_format() {
        let endpoint = Endpoint::new("https://graph.example.com").unwrap();
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host_name(), Some("graph.example.com"));

        // With port
        let endpoint = Endpoint::new("http://localhost:8080").unwrap();
        assert_eq!(endpoint.scheme(), "http");
        assert_eq!(endpoint.host_name(), Some("localhost"));

        // With path
        let endpoint = Endpoint::new("https://api.example.com/graph").unwrap();
        assert_eq!(endpoint.scheme(), "https");
        assert_eq!(endpoint.host_name(), Some("api.example.com"));
    }

    #[test]
    fn test_endpoint_trims_trailing_slashes() {
        let endpoint = Endpoint::new("https://graph.example.com/").unwrap();
        assert_eq!(endpoint.as_ref(), "https://graph.example.com");

        let endpoint = Endpoint::new("http://localhost:8080///").unwrap();
        assert_eq!(endpoint.as_ref(), "http://localhost:8080");
    }

    #[test]
    fn test_endpoint_rejects_invalid() {
        // No scheme
        assert!(Endpoint::new("graph.example.com").is_err());

        // Empty host
        assert!(Endpoint::new("https://").is_err());

        // Invalid scheme
        assert!(Endpoint::new("://example.com").is_err());

        // Empty
        assert!(matches!(
            Endpoint::new(""),
            Err(ConfigError::InvalidEndpoint { url }) if url.is_empty()
        ));
    }

    #[test]
    fn test_auth_token_rejects_empty_string() {
        let result = AuthToken::new("");
        assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
    }

    #[test]
    fn test_auth_token_masks_value_in_debug() {
        let token = AuthToken::new("super-secret-token").unwrap();
        let debug_output = format!("{:?}", token);
        assert_eq!(debug_output, "AuthToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_auth_token_exposes_value_via_as_ref() {
        let token = AuthToken::new("my-token").unwrap();
        assert_eq!(token.as_ref(), "my-token");
    }
}
