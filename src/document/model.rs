use super::lenient::{kind_of, lenient, lenient_opt_seq, lenient_seq, lenient_string};
use crate::error::DocumentError;
use crate::graph::Connections;
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;
use std::fs;

/// A complete workflow document as delivered by the automation service.
///
/// The typed fields are a read-only projection of `raw`, which keeps the payload
/// exactly as received (unknown fields and key order included). Every way of
/// deserializing a `Workflow` goes through `from_value`, so `raw` is always filled.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(try_from = "Value")]
pub struct Workflow {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
    pub nodes: Vec<Node>,
    pub connections: Connections,
    pub settings: Option<Map<String, Value>>,
    pub static_data: Option<Value>,
    pub tags: Option<Vec<Tag>>,
    raw: Value,
}

/// The typed fields of a workflow document, before the raw payload is attached.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkflowFields {
    #[serde(default, deserialize_with = "lenient_string")]
    id: String,
    #[serde(default, deserialize_with = "lenient")]
    name: String,
    #[serde(default, deserialize_with = "lenient")]
    active: bool,
    #[serde(default, deserialize_with = "lenient")]
    created_at: String,
    #[serde(default, deserialize_with = "lenient")]
    updated_at: String,
    #[serde(default, deserialize_with = "lenient_seq")]
    nodes: Vec<Node>,
    #[serde(default)]
    connections: Connections,
    #[serde(default, deserialize_with = "lenient")]
    settings: Option<Map<String, Value>>,
    #[serde(default)]
    static_data: Option<Value>,
    #[serde(default, deserialize_with = "lenient_opt_seq")]
    tags: Option<Vec<Tag>>,
}

impl TryFrom<Value> for Workflow {
    type Error = DocumentError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        Self::from_value(value)
    }
}

impl Workflow {
    /// Builds a workflow from an already-parsed JSON value.
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        if !value.is_object() {
            return Err(DocumentError::NotAnObject {
                found: kind_of(&value),
            });
        }
        let fields = WorkflowFields::deserialize(&value)?;
        Ok(Workflow {
            id: fields.id,
            name: fields.name,
            active: fields.active,
            created_at: fields.created_at,
            updated_at: fields.updated_at,
            nodes: fields.nodes,
            connections: fields.connections,
            settings: fields.settings,
            static_data: fields.static_data,
            tags: fields.tags,
            raw: value,
        })
    }

    /// Parses a workflow from its JSON text.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Loads a workflow from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, DocumentError> {
        let content = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// The document exactly as received.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Consumes the workflow, returning the document as received.
    pub fn into_raw(self) -> Value {
        self.raw
    }

    /// The document serialized with 2-space indentation and the key order it arrived in.
    pub fn raw_json(&self) -> String {
        serde_json::to_string_pretty(&self.raw).unwrap_or_else(|_| self.raw.to_string())
    }

    /// Finds a node by its display name (the key used by connections).
    pub fn node_by_name(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Finds a node by its identifier.
    pub fn node_by_id(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }
}

/// One step of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub node_type: String,
    #[serde(default, deserialize_with = "lenient")]
    pub type_version: f64,
    #[serde(default, deserialize_with = "lenient")]
    pub position: Position,
    #[serde(default, deserialize_with = "lenient")]
    pub parameters: Map<String, Value>,
    #[serde(default, deserialize_with = "lenient")]
    pub credentials: Option<Map<String, Value>>,
    #[serde(default, deserialize_with = "lenient")]
    pub disabled: bool,
    #[serde(default, deserialize_with = "lenient")]
    pub notes: Option<String>,
}

impl Node {
    /// The credentials record, if it holds at least one entry.
    pub fn non_empty_credentials(&self) -> Option<&Map<String, Value>> {
        self.credentials.as_ref().filter(|c| !c.is_empty())
    }

    /// The type version as displayed: whole numbers without a fractional part.
    pub fn type_version_label(&self) -> String {
        format_number(self.type_version)
    }
}

/// Canvas coordinates of a node. A display hint only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Position(pub f64, pub f64);

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", format_number(self.0), format_number(self.1))
    }
}

/// A label attached to a workflow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, serde::Serialize)]
pub struct Tag {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
}

fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.is_finite() {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
