//! Error types for client configuration.
//!
//! This module contains error types used for configuration and validation
//! failures raised before a client is ever constructed.
//!
//! # Error Handling
//!
//! All configuration constructors return `Result<T, ConfigError>` to enable
//! fail-fast validation. Error messages are designed to be clear and actionable.
//!
//! # Example
//!
//! ```rust
//! use auditable_graph::{AuthToken, ConfigError};
//!
//! let result = AuthToken::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyAuthToken)));
//! ```

use thiserror::Error;

/// Errors that can occur during client configuration.
///
/// This enum represents all possible errors that can occur when creating
/// or validating configuration types. Each variant provides a clear,
/// actionable error message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Endpoint URL is invalid.
    #[error("Invalid endpoint '{url}'. Please provide a valid URL with scheme (e.g., 'https://graph.example.com').")]
    InvalidEndpoint {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Auth token cannot be empty.
    #[error("Auth token cannot be empty. Omit the token entirely for unauthenticated access.")]
    EmptyAuthToken,

    /// Protocol version is invalid.
    #[error("Invalid protocol version '{version}'. Expected one of: 'v1', 'v2', 'v3'.")]
    InvalidProtocolVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_endpoint_error_message() {
        let error = ConfigError::InvalidEndpoint {
            url: "not a url".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("not a url"));
        assert!(message.contains("valid URL with scheme"));
    }

    #[test]
    fn test_empty_auth_token_error_message() {
        let error = ConfigError::EmptyAuthToken;
        let message = error.to_string();
        assert!(message.contains("Auth token cannot be empty"));
    }

    #[test]
    fn test_invalid_protocol_version_error_message() {
        let error = ConfigError::InvalidProtocolVersion {
            version: "v9".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("v9"));
        assert!(message.contains("Expected one of"));
    }

    #[test]
    fn test_missing_required_field_error_message() {
        let error = ConfigError::MissingRequiredField { field: "endpoint" };
        let message = error.to_string();
        assert!(message.contains("endpoint"));
        assert!(message.contains("must be set"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyAuthToken;
        // Verify it implements std::error::Error by using it as a dyn Error
        let _: &dyn std::error::Error = &error;
    }
}
