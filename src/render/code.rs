use super::fragment::{Block, DisplayFragment, Header, Theme};
use super::lookup::{first_text, text};
use super::{NodeRenderer, node_types};
use crate::document::Node;

/// How often an inline-code node runs its script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionMode {
    OncePerItem,
    OnceForAllItems,
}

impl ExecutionMode {
    /// Only the exact `runOnceForAllItems` token selects the all-items mode.
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("runOnceForAllItems") => ExecutionMode::OnceForAllItems,
            _ => ExecutionMode::OncePerItem,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExecutionMode::OncePerItem => "Run Once For Each Item",
            ExecutionMode::OnceForAllItems => "Run Once For All Items",
        }
    }
}

/// Renders inline-code nodes: the script verbatim plus its execution mode.
pub struct CodeRenderer;

impl NodeRenderer for CodeRenderer {
    fn node_type(&self) -> &str {
        node_types::CODE
    }

    fn render(&self, node: &Node) -> DisplayFragment {
        let params = &node.parameters;
        let mode = ExecutionMode::from_token(text(params, &["mode"]));
        let source = first_text(params, &["jsCode", "code"]).unwrap_or("// No code");

        let header = Header::new("💻", "Code Node", Theme::Purple).with_badge(mode.label());
        let mut fragment = DisplayFragment::new(header);
        fragment.push(Block::Code {
            source: source.to_string(),
        });
        fragment
    }
}
