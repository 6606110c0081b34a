//! Operation options for get and query calls.
//!
//! These types model the query-parameter surface of the graph service:
//! verification depth and changeset inclusion for gets, and
//! filter/order/projection/pagination options for list queries. All of them
//! are encoded into the outbound query string by the active wire codec; a
//! default or absent option produces no parameter at all, letting the server
//! apply its own defaults.

use std::str::FromStr;

use serde_json::Value;

use crate::graph::errors::GraphError;
use crate::graph::model::Vertex;

/// How far back into a vertex's changeset history the server recomputes
/// cryptographic integrity checks before responding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerificationDepth {
    /// Skip verification entirely.
    #[default]
    None,
    /// Verify only the latest changeset.
    Current,
    /// Verify every changeset in the vertex's history.
    All,
}

impl VerificationDepth {
    /// Returns the wire value for this depth.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Current => "current",
            Self::All => "all",
        }
    }
}

/// Options for the get operation.
///
/// The defaults produce an empty query string: no flag is sent unless the
/// caller opted in.
///
/// # Example
///
/// ```rust
/// use auditable_graph::{GetOptions, VerificationDepth};
///
/// let options = GetOptions {
///     include_changesets: true,
///     verify_signature_depth: VerificationDepth::All,
///     ..GetOptions::default()
/// };
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GetOptions {
    /// Include soft-deleted aliases, resources, and edges in the result.
    pub include_deleted: bool,
    /// Include the changeset history in the result.
    pub include_changesets: bool,
    /// How many historical signatures the server verifies before returning.
    pub verify_signature_depth: VerificationDepth,
}

/// Which identifier space an exact-match query id is matched against.
///
/// The matching semantics of [`Both`](Self::Both) are defined by the remote
/// service; the client forwards the value untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IdMode {
    /// Match against the vertex's own identifier.
    Id,
    /// Match against the vertex's aliases.
    Alias,
    /// Match against both spaces.
    Both,
}

impl IdMode {
    /// Returns the wire value for this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Alias => "alias",
            Self::Both => "both",
        }
    }
}

/// The ordering key for list queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderBy {
    /// Order by creation timestamp.
    #[default]
    DateCreated,
    /// Order by last-modification timestamp.
    DateModified,
}

impl OrderBy {
    /// Returns the wire value for this ordering key.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DateCreated => "dateCreated",
            Self::DateModified => "dateModified",
        }
    }
}

/// The ordering direction for list queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrderDirection {
    /// Ascending order.
    Asc,
    /// Descending order, the server default.
    #[default]
    Desc,
}

impl OrderDirection {
    /// Returns the wire value for this direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// A vertex field that can be requested in a query projection.
///
/// The server default projection is id, creation timestamp, aliases, and
/// annotation object.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexField {
    /// The vertex identifier.
    Id,
    /// The creation timestamp.
    DateCreated,
    /// The last-modification timestamp.
    DateModified,
    /// The alias collection.
    Aliases,
    /// The annotation object.
    AnnotationObject,
    /// The resource collection.
    Resources,
    /// The edge collection.
    Edges,
}

impl VertexField {
    /// Returns the wire value for this field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::DateCreated => "dateCreated",
            Self::DateModified => "dateModified",
            Self::Aliases => "aliases",
            Self::AnnotationObject => "annotationObject",
            Self::Resources => "resources",
            Self::Edges => "edges",
        }
    }
}

impl FromStr for VertexField {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "dateCreated" => Ok(Self::DateCreated),
            "dateModified" => Ok(Self::DateModified),
            "aliases" => Ok(Self::Aliases),
            "annotationObject" => Ok(Self::AnnotationObject),
            "resources" => Ok(Self::Resources),
            "edges" => Ok(Self::Edges),
            _ => Err(GraphError::UnexpectedResponse {
                reason: format!("unknown vertex field '{s}'"),
            }),
        }
    }
}

/// Parameters for the query operation.
///
/// Every field is optional; an unset field is omitted from the outbound
/// query string so the server applies its own defaults. The `conditions`
/// list is an opaque comparator structure passed through unmodified, and
/// `cursor` is an opaque continuation token from a prior [`VertexPage`].
///
/// # Example
///
/// ```rust
/// use auditable_graph::{IdMode, OrderBy, VertexField, VertexQuery};
///
/// let query = VertexQuery {
///     id: Some("bar-456".to_string()),
///     id_mode: Some(IdMode::Alias),
///     order_by: Some(OrderBy::DateModified),
///     properties: Some(vec![VertexField::Id, VertexField::Aliases]),
///     page_size: Some(25),
///     ..VertexQuery::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexQuery {
    /// Exact-match identifier filter.
    pub id: Option<String>,
    /// Which identifier space `id` is matched against.
    pub id_mode: Option<IdMode>,
    /// Opaque structured filter predicates, passed through unmodified.
    pub conditions: Option<Vec<Value>>,
    /// The ordering key.
    pub order_by: Option<OrderBy>,
    /// The ordering direction.
    pub order_by_direction: Option<OrderDirection>,
    /// The vertex fields to return.
    pub properties: Option<Vec<VertexField>>,
    /// Opaque continuation cursor from a prior page.
    pub cursor: Option<String>,
    /// The maximum page size.
    pub page_size: Option<u32>,
}

/// One page of query results.
///
/// A present `cursor` means more results may exist; its absence means the
/// caller has reached the end. It is never an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexPage {
    /// The vertices on this page, possibly partial under a projection.
    pub vertices: Vec<Vertex>,
    /// Continuation cursor for the next page, if any.
    pub cursor: Option<String>,
}
