//! Auditable item graph domain: model types, operation options, wire
//! codecs, and the [`GraphClient`].
//!
//! The graph service stores vertices with attached aliases, resources, and
//! edges, and keeps an immutable changeset history for every mutation. This
//! module exposes the five graph operations behind the [`AuditableGraph`]
//! trait and translates between the domain model and the wire shape of the
//! configured protocol version.

pub mod client;
pub mod codec;
pub mod errors;
pub mod model;
pub mod options;

pub use client::GraphClient;
pub use errors::GraphError;
pub use model::{
    Alias, AnnotationObject, Changeset, Edge, EpochVerification, Resource, Vertex, VertexInput,
};
pub use options::{
    GetOptions, IdMode, OrderBy, OrderDirection, VerificationDepth, VertexField, VertexPage,
    VertexQuery,
};

/// The contract of an auditable item graph store.
///
/// Implemented by [`GraphClient`] over HTTP; other implementations (for
/// example direct storage backends) can share the same surface. Not every
/// implementation supports every operation: a remote binding cannot remove
/// immutable audit data, so [`AuditableGraph::remove_immutable`] may fail
/// with [`GraphError::NotSupported`].
#[allow(async_fn_in_trait)]
pub trait AuditableGraph {
    /// Creates a vertex and returns the server-assigned id.
    async fn create(&self, vertex: &VertexInput) -> Result<String, GraphError>;

    /// Retrieves a vertex by id.
    async fn get(&self, id: &str, options: Option<&GetOptions>) -> Result<Vertex, GraphError>;

    /// Updates an existing vertex, addressed by the input's `id`.
    async fn update(&self, vertex: &VertexInput) -> Result<(), GraphError>;

    /// Removes the immutable audit trail of a vertex, where supported.
    async fn remove_immutable(&self, id: &str) -> Result<(), GraphError>;

    /// Queries vertices with server-side filtering and pagination.
    async fn query(&self, query: &VertexQuery) -> Result<VertexPage, GraphError>;
}
