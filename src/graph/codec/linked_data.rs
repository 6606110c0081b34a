//! The v3 "linked data" wire codec.

use serde_json::Value;

use crate::config::ProtocolVersion;
use crate::graph::codec::WireCodec;
use crate::graph::errors::GraphError;
use crate::graph::model::{Vertex, VertexInput};

/// Wire codec for protocol version 3, the latest shape.
///
/// The v3 shape carries opaque `annotationObject` payloads and negotiates a
/// linked-data representation (`application/ld+json`). Its one structural
/// difference from v2 is the verification envelope: instead of a flat
/// vertex-level list, each returned changeset nests its own
/// `verification` object (`{failure?, properties?}`). The codec lifts those
/// nested objects into the flat per-epoch list of the domain model so
/// callers see one shape regardless of version.
pub struct LinkedDataCodec;

impl WireCodec for LinkedDataCodec {
    fn version(&self) -> ProtocolVersion {
        ProtocolVersion::V3
    }

    fn accept_header(&self) -> &'static str {
        "application/ld+json"
    }

    fn properties_separator(&self) -> char {
        ','
    }

    fn encode_vertex_body(&self, input: &VertexInput) -> Result<Value, GraphError> {
        Ok(serde_json::to_value(input)?)
    }

    fn decode_vertex(&self, mut value: Value) -> Result<Vertex, GraphError> {
        lift_changeset_verification(&mut value);
        Ok(serde_json::from_value(value)?)
    }
}

/// Moves per-changeset `verification` objects into a flat vertex-level list.
///
/// Only fills the flat list when the response did not already carry one, so
/// a well-formed flat envelope passes through untouched.
fn lift_changeset_verification(value: &mut Value) {
    let Some(obj) = value.as_object_mut() else {
        return;
    };
    if obj
        .get("verification")
        .is_some_and(|existing| !existing.is_null())
    {
        return;
    }

    let mut lifted = Vec::new();
    if let Some(Value::Array(changesets)) = obj.get_mut("changesets") {
        for changeset in changesets {
            let Some(changeset) = changeset.as_object_mut() else {
                continue;
            };
            let epoch = changeset.get("epoch").cloned();
            if let Some(Value::Object(mut nested)) = changeset.remove("verification") {
                let mut entry = serde_json::Map::new();
                if let Some(epoch) = epoch {
                    entry.insert("epoch".to_string(), epoch);
                }
                if let Some(failure) = nested.remove("failure") {
                    entry.insert("failure".to_string(), failure);
                }
                if let Some(properties) = nested.remove("properties") {
                    entry.insert("properties".to_string(), properties);
                }
                lifted.push(Value::Object(entry));
            }
        }
    }

    if !lifted.is_empty() {
        obj.insert("verification".to_string(), Value::Array(lifted));
    }
}
