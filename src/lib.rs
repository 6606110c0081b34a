//! # Auditable Graph Client
//!
//! An asynchronous Rust client for auditable item graph services: vertices
//! with attached aliases, resources, and edges, backed by an immutable,
//! cryptographically verifiable changeset history.
//!
//! ## Features
//!
//! - **Typed configuration** with validated endpoint and token newtypes
//! - **Three wire protocol versions** (v1, v2, v3) behind one domain model
//! - **Cursor-based pagination** with server-side filtering and ordering
//! - **Layered error handling** that keeps transport failures inspectable
//! - **Structured logging** via `tracing`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use auditable_graph::{
//!     AuditableGraph, AuthToken, Endpoint, GraphClient, GraphConfig, VertexInput, VertexQuery,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GraphConfig::builder()
//!         .endpoint(Endpoint::new("https://graph.example.com")?)
//!         .base_path("/auditable-item-graph")
//!         .auth_token(AuthToken::new("secret-token")?)
//!         .build()?;
//!     let client = GraphClient::new(&config);
//!
//!     // Create a vertex; the service assigns and returns the id
//!     let id = client.create(&VertexInput::default()).await?;
//!
//!     // Retrieve it with default options
//!     let vertex = client.get(&id, None).await?;
//!     println!("created {:?}", vertex.id);
//!
//!     // Page through all vertices
//!     let page = client.query(&VertexQuery::default()).await?;
//!     println!("first page holds {} vertices", page.vertices.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Protocol Versions
//!
//! The service speaks three wire shapes that coexist across deployments.
//! Pick one with [`ProtocolVersion`] at configuration time; the client
//! translates so that application code sees a single domain model:
//!
//! - **v1** carries typed `metadata` property lists and pipe-joined
//!   projections
//! - **v2** carries opaque `annotationObject` payloads, the shape the
//!   domain model mirrors
//! - **v3** (latest, default) negotiates `application/ld+json` and nests
//!   verification results per changeset
//!
//! ## Design Principles
//!
//! The client is a faithful binding, not a smart proxy: every operation is
//! a single request/response exchange with no retries, caching, or
//! client-side filtering, and server errors pass through untranslated so
//! callers can inspect status codes and request references directly.

pub mod clients;
pub mod config;
pub mod error;
pub mod graph;

pub use clients::{
    HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError, SDK_VERSION,
};
pub use config::{AuthToken, Endpoint, GraphConfig, GraphConfigBuilder, ProtocolVersion};
pub use error::ConfigError;
pub use graph::{
    Alias, AnnotationObject, AuditableGraph, Changeset, Edge, EpochVerification, GetOptions,
    GraphClient, GraphError, IdMode, OrderBy, OrderDirection, Resource, VerificationDepth, Vertex,
    VertexField, VertexInput, VertexPage, VertexQuery,
};
