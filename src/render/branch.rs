use super::fragment::{Block, DisplayFragment, Header, Theme};
use super::lookup::{field, list, text};
use super::{NodeRenderer, node_types};
use crate::document::Node;
use crate::value::{display_string, is_falsy};
use serde_json::Value;

/// How consecutive conditions of a branch node are joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Combinator {
    And,
    Or,
}

impl Combinator {
    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some("or") => Combinator::Or,
            _ => Combinator::And,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Combinator::And => "and",
            Combinator::Or => "or",
        }
    }
}

/// Display symbol of a comparison operator token, if it is a known one.
pub fn operator_symbol(token: &str) -> Option<&'static str> {
    match token {
        "equals" => Some("="),
        "notEquals" => Some("≠"),
        "gt" => Some(">"),
        "lt" => Some("<"),
        "gte" => Some("≥"),
        "lte" => Some("≤"),
        "contains" => Some("⊃"),
        "notContains" => Some("⊅"),
        _ => None,
    }
}

/// Renders conditional nodes as a combinator-separated list of comparisons.
pub struct BranchRenderer;

impl NodeRenderer for BranchRenderer {
    fn node_type(&self) -> &str {
        node_types::BRANCH
    }

    fn render(&self, node: &Node) -> DisplayFragment {
        let params = &node.parameters;
        let conditions = list(params, &["conditions", "conditions"]);
        let combinator = Combinator::from_token(text(params, &["conditions", "combinator"]));

        let mut fragment = DisplayFragment::new(Header::new("🔀", "IF Condition", Theme::Yellow));
        if conditions.is_empty() {
            fragment.push(Block::placeholder("No conditions set"));
            return fragment;
        }

        for (idx, condition) in conditions.iter().enumerate() {
            if idx > 0 {
                fragment.push(Block::Separator {
                    text: combinator.as_str().to_string(),
                });
            }
            fragment.push(condition_block(condition));
        }
        fragment
    }
}

fn condition_block(condition: &Value) -> Block {
    let left = condition
        .get("leftValue")
        .filter(|v| !is_falsy(v))
        .map(display_string)
        .unwrap_or_else(|| "(empty)".to_string());

    let token = condition
        .get("operator")
        .and_then(|op| field(op, "operation"));
    let operator = match token {
        Some(token) => operator_symbol(token).unwrap_or(token),
        None => "?",
    };

    let right = condition
        .get("rightValue")
        .map(display_string)
        .unwrap_or_else(|| "(empty)".to_string());

    Block::Condition {
        left,
        operator: operator.to_string(),
        right,
    }
}
