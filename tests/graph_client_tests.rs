//! Integration tests for client configuration and the graph client surface.
//!
//! These tests verify configuration validation, request building, error
//! types, and the operation contract that holds without a server.

use auditable_graph::clients::{HttpMethod, HttpRequest};
use auditable_graph::{
    AuditableGraph, AuthToken, ConfigError, Endpoint, GraphClient, GraphConfig, GraphError,
    HttpError, HttpResponseError, InvalidHttpRequestError, ProtocolVersion,
};

fn create_test_config() -> GraphConfig {
    GraphConfig::builder()
        .endpoint(Endpoint::new("https://graph.example.com").unwrap())
        .base_path("/auditable-item-graph")
        .build()
        .unwrap()
}

// ============================================================================
// Configuration Tests
// ============================================================================

#[test]
fn test_config_builder_requires_endpoint() {
    let result = GraphConfig::builder().build();
    assert!(matches!(
        result,
        Err(ConfigError::MissingRequiredField { field: "endpoint" })
    ));
}

#[test]
fn test_endpoint_rejects_url_without_scheme() {
    assert!(matches!(
        Endpoint::new("graph.example.com"),
        Err(ConfigError::InvalidEndpoint { .. })
    ));
}

#[test]
fn test_endpoint_trims_trailing_slash() {
    let endpoint = Endpoint::new("https://graph.example.com/").unwrap();
    assert_eq!(endpoint.as_ref(), "https://graph.example.com");
}

#[test]
fn test_auth_token_rejects_empty() {
    assert!(matches!(
        AuthToken::new(""),
        Err(ConfigError::EmptyAuthToken)
    ));
}

#[test]
fn test_auth_token_debug_is_redacted() {
    let token = AuthToken::new("secret-token").unwrap();
    let debug = format!("{token:?}");
    assert!(!debug.contains("secret-token"));
}

#[test]
fn test_base_path_is_normalized_to_leading_slash() {
    let config = GraphConfig::builder()
        .endpoint(Endpoint::new("https://graph.example.com").unwrap())
        .base_path("auditable-item-graph/")
        .build()
        .unwrap();
    assert_eq!(config.base_path(), "/auditable-item-graph");
}

#[test]
fn test_default_protocol_version_is_latest() {
    let config = create_test_config();
    assert_eq!(config.protocol_version(), ProtocolVersion::latest());
}

// ============================================================================
// Request Building Tests
// ============================================================================

#[test]
fn test_post_request_requires_body() {
    let result = HttpRequest::builder(HttpMethod::Post, "").build();
    assert!(matches!(
        result,
        Err(InvalidHttpRequestError::MissingBody { .. })
    ));
}

#[test]
fn test_path_template_substitutes_and_encodes_params() {
    let request = HttpRequest::builder(HttpMethod::Get, "/:id")
        .path_param("id", "urn:example:123")
        .build()
        .unwrap();

    assert_eq!(request.resolve_path().unwrap(), "/urn%3Aexample%3A123");
}

#[test]
fn test_unresolved_path_param_is_rejected() {
    let request = HttpRequest::builder(HttpMethod::Get, "/:id").build().unwrap();
    assert!(matches!(
        request.resolve_path(),
        Err(InvalidHttpRequestError::MissingPathParam { .. })
    ));
}

// ============================================================================
// Graph Client Surface Tests
// ============================================================================

#[test]
fn test_client_reports_configured_version() {
    for version in ProtocolVersion::supported_versions() {
        let config = GraphConfig::builder()
            .endpoint(Endpoint::new("https://graph.example.com").unwrap())
            .protocol_version(version)
            .build()
            .unwrap();
        let client = GraphClient::new(&config);
        assert_eq!(client.protocol_version(), version);
    }
}

#[test]
fn test_client_is_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphClient>();
    assert_send_sync::<GraphConfig>();
}

#[tokio::test]
async fn test_remove_immutable_is_always_rejected() {
    let client = GraphClient::new(&create_test_config());

    let error = client.remove_immutable("vertex-123").await.unwrap_err();
    assert!(matches!(
        error,
        GraphError::NotSupported {
            operation: "removeImmutable"
        }
    ));
    assert!(error.to_string().contains("removeImmutable"));
}

#[tokio::test]
async fn test_operations_available_through_trait_object_free_generic() {
    // The five operations are reachable through the shared trait bound.
    async fn probe<G: AuditableGraph>(graph: &G) -> Result<(), GraphError> {
        graph.remove_immutable("vertex-123").await
    }

    let client = GraphClient::new(&create_test_config());
    assert!(probe(&client).await.is_err());
}

// ============================================================================
// Error Type Tests
// ============================================================================

#[test]
fn test_is_not_found_matches_only_http_404() {
    let not_found = GraphError::Http(HttpError::Response(HttpResponseError {
        code: 404,
        message: r#"{"error":"vertex not found"}"#.to_string(),
        error_reference: None,
    }));
    assert!(not_found.is_not_found());

    let server_error = GraphError::Http(HttpError::Response(HttpResponseError {
        code: 500,
        message: "{}".to_string(),
        error_reference: None,
    }));
    assert!(!server_error.is_not_found());

    let validation = GraphError::Validation { argument: "id" };
    assert!(!validation.is_not_found());
}

#[test]
fn test_validation_error_names_the_argument() {
    let error = GraphError::Validation { argument: "id" };
    assert!(error.to_string().contains("id"));
}

#[test]
fn test_http_response_error_preserves_reference() {
    let error = HttpResponseError {
        code: 429,
        message: "{}".to_string(),
        error_reference: Some("req-abc".to_string()),
    };
    assert_eq!(error.error_reference.as_deref(), Some("req-abc"));
}
