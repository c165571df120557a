use super::Workflow;
use serde::Serialize;

/// The list-view projection of a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowSummary {
    pub id: String,
    pub name: String,
    pub active: bool,
    pub node_count: usize,
    pub updated_at: String,
    pub tags: Vec<String>,
}

impl From<&Workflow> for WorkflowSummary {
    fn from(workflow: &Workflow) -> Self {
        Self {
            id: workflow.id.clone(),
            name: workflow.name.clone(),
            active: workflow.active,
            node_count: workflow.nodes.len(),
            updated_at: workflow.updated_at.clone(),
            tags: workflow
                .tags
                .iter()
                .flatten()
                .map(|t| t.name.clone())
                .collect(),
        }
    }
}
