//! Operation-level error types for the graph client.
//!
//! This module contains the [`GraphError`] type returned by every domain
//! operation. Transport failures pass through untranslated; the client adds
//! no recovery logic.

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for graph operations.
///
/// Local validation and the not-supported rejection are raised before any
/// network activity; transport failures are propagated unmodified from the
/// underlying call executor.
///
/// # Example
///
/// ```rust
/// use auditable_graph::GraphError;
///
/// let error = GraphError::Validation { argument: "id" };
/// assert!(error.to_string().contains("id"));
/// ```
#[derive(Debug, Error)]
pub enum GraphError {
    /// A required identifier argument was missing or empty.
    ///
    /// Raised client-side before any network call is issued.
    #[error("Missing required argument '{argument}': a non-empty identifier must be provided")]
    Validation {
        /// The name of the invalid argument.
        argument: &'static str,
    },

    /// The operation is not supported by this client.
    ///
    /// Raised synchronously, never reaching the network.
    #[error("Operation '{operation}' is not supported by the remote graph client")]
    NotSupported {
        /// The name of the unsupported operation.
        operation: &'static str,
    },

    /// A transport or remote failure from the underlying call executor.
    ///
    /// Propagated unmodified; use [`is_not_found`](Self::is_not_found) to
    /// inspect the untouched status code.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A 2xx response whose body could not be decoded into a domain value.
    #[error(transparent)]
    Decode(#[from] serde_json::Error),

    /// A 2xx response missing a required envelope element.
    #[error("Unexpected response from graph service: {reason}")]
    UnexpectedResponse {
        /// What was wrong with the response.
        reason: String,
    },
}

impl GraphError {
    /// Returns `true` if this error is a remote not-found response.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Http(HttpError::Response(e)) if e.code == 404)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::HttpResponseError;

    #[test]
    fn test_validation_error_message() {
        let error = GraphError::Validation { argument: "id" };
        let message = error.to_string();
        assert!(message.contains("'id'"));
        assert!(message.contains("non-empty identifier"));
    }

    #[test]
    fn test_not_supported_error_message() {
        let error = GraphError::NotSupported {
            operation: "removeImmutable",
        };
        assert!(error.to_string().contains("removeImmutable"));
    }

    #[test]
    fn test_is_not_found_matches_404_only() {
        let not_found = GraphError::Http(HttpError::Response(HttpResponseError {
            code: 404,
            message: r#"{"error":"notFound"}"#.to_string(),
            error_reference: None,
        }));
        assert!(not_found.is_not_found());

        let server_error = GraphError::Http(HttpError::Response(HttpResponseError {
            code: 500,
            message: "{}".to_string(),
            error_reference: None,
        }));
        assert!(!server_error.is_not_found());

        let local = GraphError::Validation { argument: "id" };
        assert!(!local.is_not_found());
    }

    #[test]
    fn test_transport_error_passes_through_transparently() {
        let inner = HttpError::Response(HttpResponseError {
            code: 503,
            message: r#"{"error":"unavailable"}"#.to_string(),
            error_reference: None,
        });
        let expected = inner.to_string();
        let error: GraphError = inner.into();
        assert_eq!(error.to_string(), expected);
    }
}
