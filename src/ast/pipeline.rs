//! Pipeline payload posted by the editor
//!
//! Shape: `{"nodes": [{"id": ..}], "edges": [{"source": .., "target": ..}]}`.
//! Extra fields on nodes and edges (positions, handles, node data) are ignored.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DagCheckError, Result};

/// Opaque node identifier
///
/// The editor sends strings, but any JSON scalar that hashes exactly is
/// accepted. Variants never compare equal to each other, so `"1"` and `1`
/// are distinct nodes. Floats and `null` are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Bool(bool),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Text(s) => f.write_str(s),
            NodeId::Integer(n) => write!(f, "{n}"),
            NodeId::Unsigned(n) => write!(f, "{n}"),
            NodeId::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Text(s.to_string())
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Integer(n)
    }
}

/// A pipeline graph as submitted for validation
///
/// Missing `nodes`/`edges` keys decode to empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pipeline {
    #[serde(default)]
    pub nodes: Vec<PipelineNode>,
    #[serde(default)]
    pub edges: Vec<PipelineEdge>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineNode {
    pub id: NodeId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineEdge {
    pub source: NodeId,
    pub target: NodeId,
}

impl Pipeline {
    /// Decode a pipeline from the raw `pipeline` form field.
    ///
    /// Syntax errors map to [`DagCheckError::InvalidJson`]; well-formed JSON
    /// of the wrong shape maps to [`DagCheckError::Processing`].
    pub fn from_json(raw: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).map_err(|_| DagCheckError::InvalidJson)?;

        // serde would also accept a JSON array as a struct sequence
        if !value.is_object() {
            return Err(DagCheckError::Processing {
                reason: format!("pipeline must be a JSON object, got {}", json_type(&value)),
            });
        }

        serde_json::from_value(value).map_err(|e| DagCheckError::Processing {
            reason: e.to_string(),
        })
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(|n| &n.id)
    }

    pub fn edge_pairs(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> {
        self.edges.iter().map(|e| (&e.source, &e.target))
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
