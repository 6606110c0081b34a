//! Wire codecs for the coexisting protocol shapes.
//!
//! The graph service has three incompatible wire forms of the same five
//! operations (see [`ProtocolVersion`]). Rather than one client per shape,
//! a single [`GraphClient`](crate::GraphClient) delegates every wire-level
//! decision to a [`WireCodec`]: how vertex bodies are encoded, how responses
//! are decoded, which media type is negotiated, and how list-typed query
//! options are flattened into strings.
//!
//! Shared behavior lives in the trait's default methods, built on the small
//! set of required methods each codec provides. Every string encoding a
//! codec produces must round-trip through that same codec's decoder.

use std::collections::HashMap;

use serde_json::Value;

use crate::config::ProtocolVersion;
use crate::graph::errors::GraphError;
use crate::graph::model::{Vertex, VertexInput};
use crate::graph::options::{
    GetOptions, VerificationDepth, VertexField, VertexPage, VertexQuery,
};

mod annotation;
mod linked_data;
mod property_list;

pub use annotation::AnnotationCodec;
pub use linked_data::LinkedDataCodec;
pub use property_list::PropertyListCodec;

/// The per-version wire strategy for the graph protocol.
///
/// One stateless instance exists per protocol version; select it with
/// [`codec_for`]. The required methods capture the axes the versions differ
/// on; the default methods carry the behavior common to all shapes.
pub trait WireCodec: Send + Sync {
    /// The protocol version this codec implements.
    fn version(&self) -> ProtocolVersion;

    /// The media type requested via the `Accept` header.
    fn accept_header(&self) -> &'static str;

    /// The separator used to join projection field lists.
    fn properties_separator(&self) -> char;

    /// Encodes a vertex input into a request body.
    ///
    /// The identifier is never part of the body in any protocol version;
    /// absent optional fields are omitted, never serialized as null.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Decode`] if the input cannot be serialized.
    fn encode_vertex_body(&self, input: &VertexInput) -> Result<Value, GraphError>;

    /// Decodes a response body into a [`Vertex`].
    ///
    /// All shapes decode to the same domain value: codecs with
    /// version-specific envelopes normalize them here.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Decode`] if the body does not match the
    /// codec's wire shape.
    fn decode_vertex(&self, value: Value) -> Result<Vertex, GraphError>;

    /// Encodes a projection field list into its separator-joined wire form.
    fn encode_properties(&self, fields: &[VertexField]) -> String {
        let parts: Vec<&str> = fields.iter().map(|field| field.as_str()).collect();
        parts.join(&self.properties_separator().to_string())
    }

    /// Decodes a separator-joined projection list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnexpectedResponse`] if a component is not a
    /// known vertex field.
    fn decode_properties(&self, raw: &str) -> Result<Vec<VertexField>, GraphError> {
        raw.split(self.properties_separator())
            .map(str::parse)
            .collect()
    }

    /// Encodes an opaque condition list into its transportable string form.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Decode`] if the conditions cannot be serialized.
    fn encode_conditions(&self, conditions: &[Value]) -> Result<String, GraphError> {
        Ok(serde_json::to_string(conditions)?)
    }

    /// Decodes a condition list previously encoded by this codec.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Decode`] if the string is not a JSON array.
    fn decode_conditions(&self, raw: &str) -> Result<Vec<Value>, GraphError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Builds the query parameters for a get operation.
    ///
    /// Boolean flags appear only when true; the verification depth is
    /// omitted when [`VerificationDepth::None`]. Default options therefore
    /// produce an empty map.
    fn get_query(&self, options: &GetOptions) -> HashMap<String, String> {
        let mut query = HashMap::new();
        if options.include_deleted {
            query.insert("includeDeleted".to_string(), "true".to_string());
        }
        if options.include_changesets {
            query.insert("includeChangesets".to_string(), "true".to_string());
        }
        if options.verify_signature_depth != VerificationDepth::None {
            query.insert(
                "verifySignatureDepth".to_string(),
                options.verify_signature_depth.as_str().to_string(),
            );
        }
        query
    }

    /// Builds the query parameters for a list query.
    ///
    /// Unset fields are omitted entirely so the server applies its own
    /// defaults; the cursor is forwarded byte-for-byte.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Decode`] if the condition list cannot be
    /// serialized.
    fn list_query(&self, query: &VertexQuery) -> Result<HashMap<String, String>, GraphError> {
        let mut params = HashMap::new();
        if let Some(id) = &query.id {
            params.insert("id".to_string(), id.clone());
        }
        if let Some(id_mode) = query.id_mode {
            params.insert("idMode".to_string(), id_mode.as_str().to_string());
        }
        if let Some(conditions) = &query.conditions {
            params.insert(
                "conditions".to_string(),
                self.encode_conditions(conditions)?,
            );
        }
        if let Some(order_by) = query.order_by {
            params.insert("orderBy".to_string(), order_by.as_str().to_string());
        }
        if let Some(direction) = query.order_by_direction {
            params.insert(
                "orderByDirection".to_string(),
                direction.as_str().to_string(),
            );
        }
        if let Some(properties) = &query.properties {
            params.insert("properties".to_string(), self.encode_properties(properties));
        }
        if let Some(cursor) = &query.cursor {
            params.insert("cursor".to_string(), cursor.clone());
        }
        if let Some(page_size) = query.page_size {
            params.insert("pageSize".to_string(), page_size.to_string());
        }
        Ok(params)
    }

    /// Decodes a list-query response body into a [`VertexPage`].
    ///
    /// The page envelope is common to all protocol shapes; a missing cursor
    /// means end of results, never an error.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnexpectedResponse`] if the envelope lacks a
    /// vertex array, or a decode error from the per-vertex decoding.
    fn decode_page(&self, mut value: Value) -> Result<VertexPage, GraphError> {
        let vertices = match value.get_mut("vertices").map(Value::take) {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| self.decode_vertex(item))
                .collect::<Result<Vec<Vertex>, GraphError>>()?,
            _ => {
                return Err(GraphError::UnexpectedResponse {
                    reason: "query response is missing the 'vertices' array".to_string(),
                })
            }
        };

        let cursor = value
            .get("cursor")
            .and_then(Value::as_str)
            .map(String::from);

        Ok(VertexPage { vertices, cursor })
    }
}

/// Returns the stateless codec instance for a protocol version.
#[must_use]
pub fn codec_for(version: ProtocolVersion) -> &'static dyn WireCodec {
    match version {
        ProtocolVersion::V1 => &PropertyListCodec,
        ProtocolVersion::V2 => &AnnotationCodec,
        ProtocolVersion::V3 => &LinkedDataCodec,
    }
}
