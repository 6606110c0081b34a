//! The v2 "annotation" wire codec.

use serde_json::Value;

use crate::config::ProtocolVersion;
use crate::graph::codec::WireCodec;
use crate::graph::errors::GraphError;
use crate::graph::model::{Vertex, VertexInput};

/// Wire codec for protocol version 2.
///
/// The v2 shape carries opaque `annotationObject` payloads on the wire, a
/// flat vertex-level verification list, and negotiates plain JSON. Projection
/// lists are comma-joined. This is the shape the domain model mirrors, so
/// encoding and decoding are direct serde passes.
pub struct AnnotationCodec;

impl WireCodec for AnnotationCodec {
    fn version(&self) -> ProtocolVersion {
        ProtocolVersion::V2
    }

    fn accept_header(&self) -> &'static str {
        "application/json"
    }

    fn properties_separator(&self) -> char {
        ','
    }

    fn encode_vertex_body(&self, input: &VertexInput) -> Result<Value, GraphError> {
        Ok(serde_json::to_value(input)?)
    }

    fn decode_vertex(&self, value: Value) -> Result<Vertex, GraphError> {
        Ok(serde_json::from_value(value)?)
    }
}
