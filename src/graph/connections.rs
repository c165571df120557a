use crate::document::Workflow;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single directed edge into a node's input port.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Edge {
    /// Display name of the target node. Not guaranteed to resolve.
    pub node: String,
    /// Type of the target port, e.g. `main`.
    #[serde(rename = "type")]
    pub port_type: String,
    /// Index of the target port.
    pub index: u64,
}

/// An ordered batch of edges leaving one output port at one slot.
pub type ConnectionGroup = Vec<Edge>;

/// One named output port of a source node and its ordered groups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OutputPort {
    pub name: String,
    pub groups: Vec<ConnectionGroup>,
}

/// All output ports of one source node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceConnections {
    pub source: String,
    pub ports: Vec<OutputPort>,
}

/// The directed edges of a workflow: source name -> output port -> groups -> edges.
///
/// Order is kept exactly as supplied at every level. Nothing is re-sorted and
/// target names are never checked against the node list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Connections {
    sources: Vec<SourceConnections>,
}

/// One flattened row of the connection listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortConnections<'a> {
    pub source: &'a str,
    pub port: &'a str,
    pub groups: &'a [ConnectionGroup],
}

/// An edge together with where it leaves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeRef<'a> {
    pub source: &'a str,
    pub port: &'a str,
    pub group: usize,
    pub edge: &'a Edge,
}

impl Connections {
    pub fn new(sources: Vec<SourceConnections>) -> Self {
        Self { sources }
    }

    /// Reads the upstream map shape, degrading malformed levels to empty ones.
    pub fn from_value(value: &Value) -> Self {
        let Some(sources) = value.as_object() else {
            return Self::default();
        };
        let sources = sources
            .iter()
            .map(|(source, ports)| SourceConnections {
                source: source.clone(),
                ports: parse_ports(ports),
            })
            .collect();
        Self { sources }
    }

    pub fn sources(&self) -> &[SourceConnections] {
        &self.sources
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Lists every (source, port, groups) triple in supplied order.
    pub fn ports(&self) -> impl Iterator<Item = PortConnections<'_>> {
        self.sources.iter().flat_map(|s| {
            s.ports.iter().map(move |p| PortConnections {
                source: &s.source,
                port: &p.name,
                groups: &p.groups,
            })
        })
    }

    /// Walks every edge in display order.
    pub fn edges(&self) -> impl Iterator<Item = EdgeRef<'_>> {
        self.ports().flat_map(|pc| {
            pc.groups.iter().enumerate().flat_map(move |(group, edges)| {
                edges.iter().map(move |edge| EdgeRef {
                    source: pc.source,
                    port: pc.port,
                    group,
                    edge,
                })
            })
        })
    }

    pub fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Outgoing edges of the named source node.
    pub fn targets_of<'a>(&'a self, source: &'a str) -> impl Iterator<Item = EdgeRef<'a>> + 'a {
        self.edges().filter(move |e| e.source == source)
    }

    /// Incoming edges of the named target node.
    pub fn sources_of<'a>(&'a self, target: &'a str) -> impl Iterator<Item = EdgeRef<'a>> + 'a {
        self.edges().filter(move |e| e.edge.node == target)
    }

    /// Edges whose target names no node of `workflow`.
    pub fn dangling_edges<'a>(&'a self, workflow: &'a Workflow) -> Vec<EdgeRef<'a>> {
        self.edges()
            .filter(|e| workflow.node_by_name(&e.edge.node).is_none())
            .collect()
    }
}

impl<'de> Deserialize<'de> for Connections {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

/// The connection listing of a workflow, in supplied order.
pub fn connections_of(workflow: &Workflow) -> Vec<PortConnections<'_>> {
    workflow.connections.ports().collect()
}

fn parse_ports(value: &Value) -> Vec<OutputPort> {
    value
        .as_object()
        .map(|ports| {
            ports
                .iter()
                .map(|(name, groups)| OutputPort {
                    name: name.clone(),
                    groups: parse_groups(groups),
                })
                .collect()
        })
        .unwrap_or_default()
}

// A non-array group keeps its slot as an empty group so later indices do not shift.
fn parse_groups(value: &Value) -> Vec<ConnectionGroup> {
    match value {
        Value::Array(groups) => groups
            .iter()
            .map(|group| match group {
                Value::Array(edges) => edges
                    .iter()
                    .filter_map(|e| e.as_object().map(parse_edge))
                    .collect(),
                _ => Vec::new(),
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn parse_edge(edge: &Map<String, Value>) -> Edge {
    Edge {
        node: edge
            .get("node")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        port_type: edge
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        index: edge.get("index").and_then(Value::as_u64).unwrap_or(0),
    }
}
