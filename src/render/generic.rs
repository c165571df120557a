use super::fragment::{Block, DisplayFragment};
use super::NodeRenderer;
use crate::document::Node;
use crate::value::classify;
use serde_json::{Map, Value};

/// Shown in place of an empty parameter record.
pub const NO_PARAMETERS: &str = "(no parameters)";

/// Fallback for node types without a specialized renderer.
pub struct GenericRenderer;

impl NodeRenderer for GenericRenderer {
    fn node_type(&self) -> &str {
        "*"
    }

    fn render(&self, node: &Node) -> DisplayFragment {
        DisplayFragment {
            header: None,
            blocks: entry_blocks(&node.parameters),
        }
    }
}

/// Flat key -> classified-value list, or the placeholder when `record` is empty.
pub fn entry_blocks(record: &Map<String, Value>) -> Vec<Block> {
    if record.is_empty() {
        return vec![Block::placeholder(NO_PARAMETERS)];
    }
    record
        .iter()
        .map(|(key, value)| Block::Entry {
            key: key.clone(),
            value: classify(value),
        })
        .collect()
}
