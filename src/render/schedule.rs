use super::fragment::{Block, DisplayFragment, Header, Theme};
use super::lookup::{field, list};
use super::{NodeRenderer, node_types};
use crate::document::Node;

/// Renders schedule triggers by the expression of their first interval rule.
pub struct ScheduleRenderer;

impl NodeRenderer for ScheduleRenderer {
    fn node_type(&self) -> &str {
        node_types::SCHEDULE_TRIGGER
    }

    fn render(&self, node: &Node) -> DisplayFragment {
        let expression = list(&node.parameters, &["rule", "interval"])
            .first()
            .and_then(|interval| {
                field(interval, "expression").or_else(|| field(interval, "cronExpression"))
            });

        let mut fragment =
            DisplayFragment::new(Header::new("⏰", "Schedule Trigger", Theme::Cyan));
        fragment.push(match expression {
            Some(expression) => Block::Inline {
                label: "Schedule".to_string(),
                text: expression.to_string(),
            },
            None => Block::placeholder("Not configured"),
        });
        fragment
    }
}
