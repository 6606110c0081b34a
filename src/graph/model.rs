//! Domain types for auditable item graph vertices.
//!
//! This module provides the vertex shape returned by the graph service
//! ([`Vertex`] and its child collections) plus the input shape used for
//! create and update operations ([`VertexInput`]).
//!
//! Annotation payloads are opaque, order-preserving JSON objects; the client
//! never interprets or validates their internal structure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// An opaque structured payload attached to a vertex, alias, or edge.
///
/// The graph service treats these documents as linked-data objects; this
/// client passes them through untouched, preserving key order.
pub type AnnotationObject = serde_json::Map<String, Value>;

/// An alternate identifier for a vertex.
///
/// Aliases are created and updated only as part of a vertex create/update
/// call. Deleted aliases are soft-deleted server-side and surfaced (with a
/// `dateDeleted` marker) only when `includeDeleted` is requested.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Alias {
    /// The alias value, unique within the vertex's alias set.
    pub id: String,

    /// Optional classification tag describing the alias format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_format: Option<String>,

    /// Optional opaque payload describing the alias.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_object: Option<AnnotationObject>,

    /// When the alias was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<DateTime<Utc>>,

    /// When the alias was soft-deleted, if it was.
    /// Read-only field, present only when `includeDeleted` was requested.
    #[serde(skip_serializing)]
    pub date_deleted: Option<DateTime<Utc>>,
}

impl Alias {
    /// Creates an alias with just an id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// An attachment referencing external content.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    /// The resource identifier; the server assigns one when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Opaque payload describing the referenced content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_object: Option<AnnotationObject>,

    /// When the resource was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<DateTime<Utc>>,

    /// When the resource was soft-deleted, if it was.
    /// Read-only field, present only when `includeDeleted` was requested.
    #[serde(skip_serializing)]
    pub date_deleted: Option<DateTime<Utc>>,
}

/// A directed relationship from a vertex to another vertex.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// The target vertex id.
    pub id: String,

    /// The relationship label.
    pub edge_relationship: String,

    /// Optional opaque payload describing the relationship.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_object: Option<AnnotationObject>,

    /// When the edge was created.
    /// Read-only field.
    #[serde(skip_serializing)]
    pub date_created: Option<DateTime<Utc>>,

    /// When the edge was soft-deleted, if it was.
    /// Read-only field, present only when `includeDeleted` was requested.
    #[serde(skip_serializing)]
    pub date_deleted: Option<DateTime<Utc>>,
}

impl Edge {
    /// Creates an edge to the given target vertex with a relationship label.
    #[must_use]
    pub fn new(id: impl Into<String>, edge_relationship: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            edge_relationship: edge_relationship.into(),
            ..Self::default()
        }
    }
}

/// An immutable, server-produced audit record of a historical vertex mutation.
///
/// Changesets are never created or mutated by the client. They are returned
/// only when `includeChangesets` is requested on a get.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Changeset {
    /// Point-in-time marker for the mutation.
    pub epoch: u64,

    /// The identity that performed the mutation, when the server records one.
    pub user_identity: Option<String>,

    /// The individual change records, opaque to the client.
    pub changes: Option<Vec<Value>>,

    /// Hash of the changeset contents.
    pub hash: Option<String>,

    /// Cryptographic signature over the changeset.
    pub signature: Option<String>,
}

/// The verification outcome for a single changeset epoch.
///
/// Produced by the server when a get requests signature verification; the
/// client decodes all protocol shapes into this one flat form.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EpochVerification {
    /// The changeset epoch this outcome applies to.
    pub epoch: u64,

    /// The failure indicator, absent when the epoch verified cleanly.
    pub failure: Option<String>,

    /// The specific properties that failed verification, if any.
    pub properties: Option<Vec<String>>,
}

/// A node in the remote audit graph, the unit of create/get/update.
///
/// Vertices are never locally mutated; the client only parses responses
/// into this shape. Any field may be absent when a query projection
/// excluded it.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Vertex {
    /// The opaque vertex identifier, assigned by the server.
    pub id: Option<String>,

    /// Opaque structured payload describing the vertex.
    pub annotation_object: Option<AnnotationObject>,

    /// When the vertex was created.
    pub date_created: Option<DateTime<Utc>>,

    /// When the vertex was last modified.
    pub date_modified: Option<DateTime<Utc>>,

    /// Alternate identifiers for the vertex.
    pub aliases: Option<Vec<Alias>>,

    /// Attachments referencing external content.
    pub resources: Option<Vec<Resource>>,

    /// Directed relationships to other vertices.
    pub edges: Option<Vec<Edge>>,

    /// Historical audit records, present when `includeChangesets` was requested.
    pub changesets: Option<Vec<Changeset>>,

    /// Overall verification outcome, present when verification was requested.
    pub verified: Option<bool>,

    /// Per-epoch verification outcomes, present when verification was requested.
    pub verification: Option<Vec<EpochVerification>>,
}

/// The input shape for vertex create and update operations.
///
/// On create the server assigns the identifier, so `id` is ignored; on
/// update it is required and travels only in the request path, never in the
/// body (the `id` field is never serialized).
///
/// For the collections, `None` means "leave unchanged" on update while
/// `Some(vec![])` means "replace with empty" — the distinction is preserved
/// exactly in the serialized body.
///
/// # Example
///
/// ```rust
/// use auditable_graph::{Alias, VertexInput};
///
/// let input = VertexInput {
///     aliases: Some(vec![Alias::new("bar-456")]),
///     ..VertexInput::default()
/// };
/// ```
#[derive(Debug, Clone, Serialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct VertexInput {
    /// The vertex identifier, required for update, ignored for create.
    /// Travels in the request path only.
    #[serde(skip_serializing)]
    pub id: Option<String>,

    /// Opaque structured payload describing the vertex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotation_object: Option<AnnotationObject>,

    /// Alias descriptors to create or replace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<Vec<Alias>>,

    /// Resource descriptors to create or replace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<Resource>>,

    /// Edge descriptors to create or replace.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<Edge>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn annotation(value: Value) -> AnnotationObject {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_vertex_input_never_serializes_id() {
        let input = VertexInput {
            id: Some("vertex-123".to_string()),
            annotation_object: Some(annotation(json!({"type": "Note"}))),
            ..VertexInput::default()
        };

        let value = serde_json::to_value(&input).unwrap();
        assert!(value.get("id").is_none());
        assert_eq!(value["annotationObject"]["type"], "Note");
    }

    #[test]
    fn test_vertex_input_omits_absent_collections() {
        let input = VertexInput::default();
        let value = serde_json::to_value(&input).unwrap();

        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_vertex_input_preserves_explicit_empty_collections() {
        let input = VertexInput {
            aliases: Some(vec![]),
            ..VertexInput::default()
        };

        let value = serde_json::to_value(&input).unwrap();
        assert_eq!(value, json!({"aliases": []}));
    }

    #[test]
    fn test_alias_serializes_writable_fields_only() {
        let alias = Alias {
            id: "bar-456".to_string(),
            alias_format: Some("gs1".to_string()),
            annotation_object: None,
            date_created: Some(Utc::now()),
            date_deleted: None,
        };

        let value = serde_json::to_value(&alias).unwrap();
        assert_eq!(value, json!({"id": "bar-456", "aliasFormat": "gs1"}));
    }

    #[test]
    fn test_edge_requires_relationship() {
        let edge = Edge::new("target-1", "frenemy");
        let value = serde_json::to_value(&edge).unwrap();
        assert_eq!(
            value,
            json!({"id": "target-1", "edgeRelationship": "frenemy"})
        );
    }

    #[test]
    fn test_vertex_deserializes_camel_case_fields() {
        let vertex: Vertex = serde_json::from_value(json!({
            "id": "vertex-123",
            "annotationObject": {"type": "Note", "content": "hello"},
            "dateCreated": "2024-05-01T08:30:00Z",
            "dateModified": "2024-06-01T10:00:00Z",
            "aliases": [{"id": "bar-456", "aliasFormat": "gs1"}],
            "edges": [{"id": "other", "edgeRelationship": "linked"}],
            "verified": true,
            "verification": [{"epoch": 1715598000000u64, "failure": null}]
        }))
        .unwrap();

        assert_eq!(vertex.id.as_deref(), Some("vertex-123"));
        assert_eq!(vertex.annotation_object.unwrap()["type"], "Note");
        assert_eq!(vertex.aliases.as_ref().unwrap()[0].id, "bar-456");
        assert_eq!(
            vertex.edges.as_ref().unwrap()[0].edge_relationship,
            "linked"
        );
        assert_eq!(vertex.verified, Some(true));
        assert_eq!(
            vertex.verification.as_ref().unwrap()[0].epoch,
            1_715_598_000_000
        );
    }

    #[test]
    fn test_vertex_tolerates_unknown_fields() {
        let vertex: Vertex = serde_json::from_value(json!({
            "id": "vertex-123",
            "@context": "https://schema.example.org/",
            "nodeIdentity": "urn:identity:abc"
        }))
        .unwrap();

        assert_eq!(vertex.id.as_deref(), Some("vertex-123"));
    }

    #[test]
    fn test_changeset_deserializes_optional_fields() {
        let changeset: Changeset = serde_json::from_value(json!({
            "epoch": 1715598000000u64,
            "userIdentity": "urn:identity:abc",
            "changes": [{"itemType": "vertex", "operation": "add"}],
            "hash": "aGFzaA==",
            "signature": "c2ln"
        }))
        .unwrap();

        assert_eq!(changeset.epoch, 1_715_598_000_000);
        assert_eq!(changeset.user_identity.as_deref(), Some("urn:identity:abc"));
        assert_eq!(changeset.changes.unwrap().len(), 1);
    }

    #[test]
    fn test_annotation_object_preserves_key_order() {
        let vertex: Vertex = serde_json::from_value(json!({
            "annotationObject": {"z": 1, "a": 2, "m": 3}
        }))
        .unwrap();

        let keys: Vec<&String> = vertex.annotation_object.as_ref().unwrap().keys().collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
