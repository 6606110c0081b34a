//! The v1 "property list" wire codec.

use serde_json::{Map, Value};

use crate::config::ProtocolVersion;
use crate::graph::codec::WireCodec;
use crate::graph::errors::GraphError;
use crate::graph::model::{Vertex, VertexInput};

/// Wire codec for protocol version 1.
///
/// The oldest wire shape predates opaque annotation objects: vertex, alias,
/// and edge payloads carry a `metadata` list of typed properties
/// (`{key, type, value}`) instead of an `annotationObject`. Verification
/// results are a flat vertex-level list, plain JSON is negotiated, and
/// projection lists are pipe-joined.
///
/// The codec renders an annotation document into the typed list on encode
/// and revives an equal document on decode, so callers see the same domain
/// shape across all versions.
pub struct PropertyListCodec;

impl WireCodec for PropertyListCodec {
    fn version(&self) -> ProtocolVersion {
        ProtocolVersion::V1
    }

    fn accept_header(&self) -> &'static str {
        "application/json"
    }

    fn properties_separator(&self) -> char {
        '|'
    }

    fn encode_vertex_body(&self, input: &VertexInput) -> Result<Value, GraphError> {
        let mut body = serde_json::to_value(input)?;
        if let Value::Object(obj) = &mut body {
            annotation_to_metadata(obj);
            for collection in ["aliases", "edges"] {
                if let Some(Value::Array(items)) = obj.get_mut(collection) {
                    for item in items {
                        if let Value::Object(child) = item {
                            annotation_to_metadata(child);
                        }
                    }
                }
            }
        }
        Ok(body)
    }

    fn decode_vertex(&self, mut value: Value) -> Result<Vertex, GraphError> {
        if let Value::Object(obj) = &mut value {
            metadata_to_annotation(obj);
            for collection in ["aliases", "edges"] {
                if let Some(Value::Array(items)) = obj.get_mut(collection) {
                    for item in items {
                        if let Value::Object(child) = item {
                            metadata_to_annotation(child);
                        }
                    }
                }
            }
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Replaces an `annotationObject` document with a `metadata` property list.
fn annotation_to_metadata(obj: &mut Map<String, Value>) {
    if let Some(Value::Object(doc)) = obj.remove("annotationObject") {
        let properties = doc
            .into_iter()
            .map(|(key, value)| typed_property(&key, value))
            .collect();
        obj.insert("metadata".to_string(), Value::Array(properties));
    }
}

/// Replaces a `metadata` property list with an `annotationObject` document.
fn metadata_to_annotation(obj: &mut Map<String, Value>) {
    if let Some(Value::Array(properties)) = obj.remove("metadata") {
        let mut doc = Map::new();
        for property in properties {
            if let Value::Object(mut entry) = property {
                let key = entry
                    .remove("key")
                    .and_then(|k| k.as_str().map(String::from));
                let type_name = entry
                    .get("type")
                    .and_then(Value::as_str)
                    .map(String::from);
                let value = entry.remove("value");
                if let (Some(key), Some(value)) = (key, value) {
                    doc.insert(key, revive_property_value(type_name.as_deref(), value));
                }
            }
        }
        obj.insert("annotationObject".to_string(), Value::Object(doc));
    }
}

/// Builds a `{key, type, value}` property from a document entry.
///
/// The type is inferred from the JSON value; structured values are carried
/// as nested JSON text under the `json` type.
fn typed_property(key: &str, value: Value) -> Value {
    let (type_name, wire_value) = match value {
        Value::String(_) => ("text", value),
        Value::Bool(_) => ("boolean", value),
        Value::Number(ref n) => {
            if n.is_i64() || n.is_u64() {
                ("integer", value)
            } else {
                ("float", value)
            }
        }
        other => ("json", Value::String(other.to_string())),
    };

    serde_json::json!({
        "key": key,
        "type": type_name,
        "value": wire_value
    })
}

/// Revives a property's wire value into its document form.
fn revive_property_value(type_name: Option<&str>, value: Value) -> Value {
    if type_name == Some("json") {
        if let Value::String(text) = &value {
            if let Ok(parsed) = serde_json::from_str(text) {
                return parsed;
            }
        }
    }
    value
}
