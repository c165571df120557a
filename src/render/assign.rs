use super::fragment::{Block, DisplayFragment, Header, Theme};
use super::lookup::{field, flag, list};
use super::{NodeRenderer, node_types};
use crate::document::Node;
use crate::value::display_string;

/// Renders field-assignment nodes: each assignment and whether other fields are kept.
pub struct AssignmentRenderer;

impl NodeRenderer for AssignmentRenderer {
    fn node_type(&self) -> &str {
        node_types::ASSIGNMENT
    }

    fn render(&self, node: &Node) -> DisplayFragment {
        let params = &node.parameters;
        let assignments = list(params, &["assignments", "assignments"]);
        let keep_other_fields = flag(params, "includeOtherFields", true);

        let mut header = Header::new("✏️", "Set Fields", Theme::Green);
        if keep_other_fields {
            header = header.with_badge("+ Keep other fields");
        }
        let mut fragment = DisplayFragment::new(header);

        if assignments.is_empty() {
            fragment.push(Block::placeholder("No field assignments"));
            return fragment;
        }

        for assignment in assignments {
            fragment.push(Block::Assignment {
                name: assignment
                    .get("name")
                    .map(display_string)
                    .unwrap_or_default(),
                value: assignment
                    .get("value")
                    .map(display_string)
                    .unwrap_or_else(|| "(empty)".to_string()),
                declared_type: field(assignment, "type").map(str::to_string),
            });
        }
        fragment
    }
}
