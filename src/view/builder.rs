use crate::document::{Node, Tag, Workflow};
use crate::expansion::{ExpansionKey, ExpansionState};
use crate::graph::SourceConnections;
use crate::render::{DisplayFragment, RendererRegistry, entry_blocks};
use crate::value::{humanize_key, setting_string};
use serde::Serialize;
use serde_json::{Map, Value};

/// The composed display model of a whole workflow document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkflowView {
    pub metadata: Metadata,
    pub settings: Option<Vec<SettingEntry>>,
    pub nodes: Vec<NodeView>,
    pub connections: Vec<SourceConnections>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metadata {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub status: String,
    pub node_count: usize,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingEntry {
    pub key: String,
    pub label: String,
    pub value: String,
}

/// A collapsible region. `content` is only materialized while expanded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub key: ExpansionKey,
    pub title: String,
    pub count: usize,
    pub expanded: bool,
    pub content: Option<DisplayFragment>,
}

impl Section {
    /// Summary line, e.g. `Parameters (3)`.
    pub fn summary(&self) -> String {
        format!("{} ({})", self.title, self.count)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodeView {
    pub id: String,
    pub name: String,
    pub node_type: String,
    pub type_version: String,
    pub position: String,
    pub disabled: bool,
    pub notes: Option<String>,
    pub parameters: Section,
    pub credentials: Option<Section>,
}

/// Projects workflow documents into `WorkflowView`s.
///
/// Building is deterministic: the same document and expansion state always
/// yield the same view. Nothing is fetched and the document is never mutated.
pub struct ViewBuilder {
    registry: RendererRegistry,
}

impl ViewBuilder {
    pub fn new() -> Self {
        Self::with_registry(RendererRegistry::new())
    }

    pub fn with_registry(registry: RendererRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &RendererRegistry {
        &self.registry
    }

    pub fn build(&self, workflow: &Workflow, state: &ExpansionState) -> WorkflowView {
        let connections = &workflow.connections;
        log::debug!(
            "Building view for workflow '{}': {} node(s), {} edge(s)",
            workflow.id,
            workflow.nodes.len(),
            connections.edge_count()
        );
        for dangling in connections.dangling_edges(workflow) {
            log::warn!(
                "Connection from '{}' ({}) targets unknown node '{}'",
                dangling.source,
                dangling.port,
                dangling.edge.node
            );
        }

        WorkflowView {
            metadata: metadata(workflow),
            settings: workflow.settings.as_ref().map(settings),
            nodes: workflow
                .nodes
                .iter()
                .map(|node| self.node_view(node, state))
                .collect(),
            connections: connections.sources().to_vec(),
            tags: workflow.tags.clone().unwrap_or_default(),
        }
    }

    fn node_view(&self, node: &Node, state: &ExpansionState) -> NodeView {
        let key = ExpansionKey::parameters(&node.id);
        let expanded = state.is_expanded(&key);
        let parameters = Section {
            count: node.parameters.len(),
            title: "Parameters".to_string(),
            content: expanded.then(|| {
                let mut fragment = self.registry.render(node);
                fragment.apply_expansion(&node.id, state);
                fragment
            }),
            expanded,
            key,
        };

        NodeView {
            id: node.id.clone(),
            name: node.name.clone(),
            node_type: node.node_type.clone(),
            type_version: node.type_version_label(),
            position: node.position.to_string(),
            disabled: node.disabled,
            notes: node.notes.clone().filter(|n| !n.is_empty()),
            parameters,
            credentials: node
                .non_empty_credentials()
                .map(|credentials| credentials_section(&node.id, credentials, state)),
        }
    }
}

impl Default for ViewBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a view with the built-in renderers.
pub fn build_view(workflow: &Workflow, state: &ExpansionState) -> WorkflowView {
    ViewBuilder::new().build(workflow, state)
}

fn metadata(workflow: &Workflow) -> Metadata {
    Metadata {
        id: workflow.id.clone(),
        name: workflow.name.clone(),
        active: workflow.active,
        status: if workflow.active { "Active" } else { "Inactive" }.to_string(),
        node_count: workflow.nodes.len(),
        created_at: workflow.created_at.clone(),
        updated_at: workflow.updated_at.clone(),
    }
}

fn settings(settings: &Map<String, Value>) -> Vec<SettingEntry> {
    settings
        .iter()
        .map(|(key, value)| SettingEntry {
            key: key.clone(),
            label: humanize_key(key),
            value: setting_string(value),
        })
        .collect()
}

fn credentials_section(
    node_id: &str,
    credentials: &Map<String, Value>,
    state: &ExpansionState,
) -> Section {
    let key = ExpansionKey::credentials(node_id);
    let expanded = state.is_expanded(&key);
    Section {
        count: credentials.len(),
        title: "Credentials".to_string(),
        content: expanded.then(|| DisplayFragment {
            header: None,
            blocks: entry_blocks(credentials),
        }),
        expanded,
        key,
    }
}
