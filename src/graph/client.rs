//! The auditable item graph client.
//!
//! This module provides [`GraphClient`], the domain client that translates
//! the five graph operations into HTTP requests via the generic call
//! executor and the active wire codec.

use crate::clients::{HttpClient, HttpMethod, HttpRequest};
use crate::config::{GraphConfig, ProtocolVersion};
use crate::graph::codec::{codec_for, WireCodec};
use crate::graph::errors::GraphError;
use crate::graph::model::{Vertex, VertexInput};
use crate::graph::options::{GetOptions, VertexPage, VertexQuery};
use crate::graph::AuditableGraph;

/// Client for an auditable item graph service.
///
/// Each operation is a single stateless request/response exchange: the
/// client validates required identifiers locally, encodes the request
/// through the wire codec selected by the configured
/// [`ProtocolVersion`], sends it once via the internal
/// [`HttpClient`], and decodes the response. Transport failures are
/// propagated unmodified; no retries, caching, or client-side filtering.
///
/// # Thread Safety
///
/// `GraphClient` is `Send + Sync`; callers may issue concurrent operations,
/// which are independent and carry no ordering guarantee relative to one
/// another.
///
/// # Example
///
/// ```rust,ignore
/// use auditable_graph::{Endpoint, GetOptions, GraphClient, GraphConfig, VertexInput};
///
/// let config = GraphConfig::builder()
///     .endpoint(Endpoint::new("https://graph.example.com").unwrap())
///     .base_path("/auditable-item-graph")
///     .build()?;
/// let client = GraphClient::new(&config);
///
/// // Create a vertex; the server assigns the id
/// let id = client.create(&VertexInput::default()).await?;
///
/// // Retrieve it
/// let vertex = client.get(&id, None).await?;
/// ```
pub struct GraphClient {
    /// The internal HTTP call executor.
    http_client: HttpClient,
    /// The wire codec for the configured protocol version.
    codec: &'static dyn WireCodec,
    /// Diagnostic label for this client instance.
    label: String,
}

// Verify GraphClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphClient>();
};

impl std::fmt::Debug for GraphClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GraphClient")
            .field("label", &self.label)
            .field("protocol_version", &self.codec.version())
            .finish_non_exhaustive()
    }
}

impl GraphClient {
    /// Creates a new graph client from the given configuration.
    ///
    /// A non-latest protocol version logs a warning once at construction.
    #[must_use]
    pub fn new(config: &GraphConfig) -> Self {
        let version = config.protocol_version();
        let label = config
            .label()
            .unwrap_or(env!("CARGO_PKG_NAME"))
            .to_string();

        tracing::debug!(
            label = %label,
            endpoint = %config.endpoint().as_ref(),
            version = %version,
            "Constructing graph client"
        );
        if !version.is_latest() {
            tracing::warn!(
                label = %label,
                version = %version,
                latest = %ProtocolVersion::latest(),
                "Graph client is using a non-latest protocol version"
            );
        }

        Self {
            http_client: HttpClient::new(config),
            codec: codec_for(version),
            label,
        }
    }

    /// Returns the protocol version this client speaks.
    #[must_use]
    pub fn protocol_version(&self) -> ProtocolVersion {
        self.codec.version()
    }

    /// Returns the diagnostic label for this client instance.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Creates a new vertex.
    ///
    /// The server assigns the identifier; any `id` on the input is ignored
    /// and never serialized. Child aliases, resources, and edges are created
    /// atomically as part of the same call.
    ///
    /// Returns the newly assigned vertex id, extracted from the `Location`
    /// response header.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Http`] for transport failures and
    /// [`GraphError::UnexpectedResponse`] when a 2xx response lacks a
    /// usable `Location` header.
    pub async fn create(&self, vertex: &VertexInput) -> Result<String, GraphError> {
        tracing::debug!(label = %self.label, "create vertex");

        let body = self.codec.encode_vertex_body(vertex)?;
        let request = HttpRequest::builder(HttpMethod::Post, "")
            .body(body)
            .header("Accept", self.codec.accept_header())
            .build()
            .map_err(crate::clients::HttpError::InvalidRequest)?;

        let response = self.http_client.request(request).await?;

        let location = response
            .location()
            .ok_or_else(|| GraphError::UnexpectedResponse {
                reason: "create response is missing the Location header".to_string(),
            })?;
        extract_created_id(location).ok_or_else(|| GraphError::UnexpectedResponse {
            reason: format!("Location header '{location}' has no id segment"),
        })
    }

    /// Retrieves a vertex by id.
    ///
    /// Pass `None` for default options: no soft-deleted children, no
    /// changeset history, no signature verification (none of the three
    /// query parameters is sent at all).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Validation`] before any network activity when
    /// `id` is empty, and the untranslated transport error otherwise
    /// (check [`GraphError::is_not_found`] for a missing vertex).
    pub async fn get(&self, id: &str, options: Option<&GetOptions>) -> Result<Vertex, GraphError> {
        verify_id(id, "id")?;
        tracing::debug!(label = %self.label, id = %id, "get vertex");

        let default_options = GetOptions::default();
        let query = self
            .codec
            .get_query(options.unwrap_or(&default_options));

        let request = HttpRequest::builder(HttpMethod::Get, "/:id")
            .path_param("id", id)
            .query(query)
            .header("Accept", self.codec.accept_header())
            .build()
            .map_err(crate::clients::HttpError::InvalidRequest)?;

        let response = self.http_client.request(request).await?;
        self.codec.decode_vertex(response.body)
    }

    /// Updates an existing vertex.
    ///
    /// The input's `id` is required and travels only in the request path,
    /// never in the body. Omitted collections are left unchanged
    /// server-side; explicit empty collections replace with empty.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Validation`] before any network activity when
    /// the input has no non-empty `id`, and the untranslated transport
    /// error otherwise.
    pub async fn update(&self, vertex: &VertexInput) -> Result<(), GraphError> {
        let id = vertex.id.as_deref().unwrap_or_default();
        verify_id(id, "vertex.id")?;
        tracing::debug!(label = %self.label, id = %id, "update vertex");

        let body = self.codec.encode_vertex_body(vertex)?;
        let request = HttpRequest::builder(HttpMethod::Put, "/:id")
            .path_param("id", id)
            .body(body)
            .header("Accept", self.codec.accept_header())
            .build()
            .map_err(crate::clients::HttpError::InvalidRequest)?;

        self.http_client.request(request).await?;
        Ok(())
    }

    /// Rejects the remove-immutable operation.
    ///
    /// The remote service cannot remove immutable audit data, so this
    /// always fails with [`GraphError::NotSupported`] without issuing any
    /// network call, for every `id` including the empty string. It exists
    /// to satisfy the [`AuditableGraph`] contract shared with storage
    /// implementations that can.
    ///
    /// # Errors
    ///
    /// Always returns [`GraphError::NotSupported`].
    pub async fn remove_immutable(&self, _id: &str) -> Result<(), GraphError> {
        Err(GraphError::NotSupported {
            operation: "removeImmutable",
        })
    }

    /// Queries vertices with filtering, ordering, projection, and
    /// cursor-based pagination.
    ///
    /// All filtering, sorting, and pagination is delegated to the server;
    /// the client only encodes parameters faithfully and passes the
    /// response through. A page without a cursor is the end of results.
    ///
    /// # Errors
    ///
    /// Returns the untranslated transport error, or a decode error when the
    /// response does not match the page envelope.
    pub async fn query(&self, query: &VertexQuery) -> Result<VertexPage, GraphError> {
        tracing::debug!(label = %self.label, "query vertices");

        let params = self.codec.list_query(query)?;
        let request = HttpRequest::builder(HttpMethod::Get, "")
            .query(params)
            .header("Accept", self.codec.accept_header())
            .build()
            .map_err(crate::clients::HttpError::InvalidRequest)?;

        let response = self.http_client.request(request).await?;
        self.codec.decode_page(response.body)
    }
}

impl AuditableGraph for GraphClient {
    async fn create(&self, vertex: &VertexInput) -> Result<String, GraphError> {
        Self::create(self, vertex).await
    }

    async fn get(&self, id: &str, options: Option<&GetOptions>) -> Result<Vertex, GraphError> {
        Self::get(self, id, options).await
    }

    async fn update(&self, vertex: &VertexInput) -> Result<(), GraphError> {
        Self::update(self, vertex).await
    }

    async fn remove_immutable(&self, id: &str) -> Result<(), GraphError> {
        Self::remove_immutable(self, id).await
    }

    async fn query(&self, query: &VertexQuery) -> Result<VertexPage, GraphError> {
        Self::query(self, query).await
    }
}

/// Validates that a required identifier argument is a non-empty string.
///
/// Identifiers are opaque, so no trimming or format checks beyond presence.
fn verify_id(id: &str, argument: &'static str) -> Result<(), GraphError> {
    if id.is_empty() {
        return Err(GraphError::Validation { argument });
    }
    Ok(())
}

/// Extracts the created id from a `Location` header value.
///
/// Takes everything after the last path separator, with any query or
/// fragment stripped first and percent-encoding decoded. Returns `None`
/// when the trailer is empty.
fn extract_created_id(location: &str) -> Option<String> {
    let path = location
        .split(['?', '#'])
        .next()
        .unwrap_or(location);
    let trailer = path.rsplit('/').next().unwrap_or(path);
    if trailer.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(trailer).ok()?;
    Some(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Endpoint;

    fn create_test_client(version: ProtocolVersion) -> GraphClient {
        let config = GraphConfig::builder()
            .endpoint(Endpoint::new("https://graph.example.com").unwrap())
            .protocol_version(version)
            .build()
            .unwrap();
        GraphClient::new(&config)
    }

    #[test]
    fn test_client_selects_codec_from_config() {
        for version in ProtocolVersion::supported_versions() {
            let client = create_test_client(version);
            assert_eq!(client.protocol_version(), version);
        }
    }

    #[test]
    fn test_label_defaults_to_crate_name() {
        let client = create_test_client(ProtocolVersion::latest());
        assert_eq!(client.label(), "auditable-graph-client");
    }

    #[test]
    fn test_label_from_config() {
        let config = GraphConfig::builder()
            .endpoint(Endpoint::new("https://graph.example.com").unwrap())
            .label("inventory-service")
            .build()
            .unwrap();
        let client = GraphClient::new(&config);
        assert_eq!(client.label(), "inventory-service");
    }

    #[test]
    fn test_remove_immutable_is_rejected_synchronously() {
        let client = create_test_client(ProtocolVersion::latest());
        let result = tokio_test::block_on(client.remove_immutable("vertex-123"));
        assert!(matches!(
            result,
            Err(GraphError::NotSupported {
                operation: "removeImmutable"
            })
        ));
    }

    #[test]
    fn test_verify_id_rejects_empty() {
        assert!(matches!(
            verify_id("", "id"),
            Err(GraphError::Validation { argument: "id" })
        ));
        assert!(verify_id("vertex-123", "id").is_ok());
    }

    #[test]
    fn test_extract_created_id_takes_path_trailer() {
        assert_eq!(
            extract_created_id("/auditable-item-graph/vertex-123"),
            Some("vertex-123".to_string())
        );
        assert_eq!(
            extract_created_id("https://graph.example.com/graph/vertex-123"),
            Some("vertex-123".to_string())
        );
        assert_eq!(
            extract_created_id("vertex-123"),
            Some("vertex-123".to_string())
        );
    }

    #[test]
    fn test_extract_created_id_strips_query_and_fragment() {
        assert_eq!(
            extract_created_id("/graph/vertex-123?includeDeleted=true"),
            Some("vertex-123".to_string())
        );
        assert_eq!(
            extract_created_id("/graph/vertex-123#frag"),
            Some("vertex-123".to_string())
        );
    }

    #[test]
    fn test_extract_created_id_percent_decodes() {
        assert_eq!(
            extract_created_id("/graph/urn%3Aexample%3A123"),
            Some("urn:example:123".to_string())
        );
    }

    #[test]
    fn test_extract_created_id_empty_trailer() {
        assert_eq!(extract_created_id("/graph/"), None);
        assert_eq!(extract_created_id(""), None);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphClient>();
    }
}
