use super::fragment::{Block, DisplayFragment, Header, Pair, Theme};
use super::lookup::{first_set, list, text};
use super::{NodeRenderer, node_types};
use crate::document::Node;
use crate::value::{classify, display_string};
use serde_json::Value;

/// Method used when a request node does not declare one.
pub const DEFAULT_METHOD: &str = "GET";

/// The color of an HTTP method badge. Unrecognized methods share the `GET` color.
pub fn method_theme(method: &str) -> Theme {
    match method {
        "POST" => Theme::Green,
        "PUT" => Theme::Yellow,
        "DELETE" => Theme::Red,
        "PATCH" => Theme::Purple,
        _ => Theme::Blue,
    }
}

/// Renders request-call nodes: method, URL, query, headers and body.
pub struct HttpRequestRenderer;

impl NodeRenderer for HttpRequestRenderer {
    fn node_type(&self) -> &str {
        node_types::HTTP_REQUEST
    }

    fn render(&self, node: &Node) -> DisplayFragment {
        let params = &node.parameters;
        let method = text(params, &["method"]).unwrap_or(DEFAULT_METHOD);
        let url = text(params, &["url"]).unwrap_or_default();

        let mut fragment = DisplayFragment::new(Header::new("🌐", "HTTP Request", Theme::Blue));
        fragment.push(Block::Badge {
            text: method.to_string(),
            theme: method_theme(method),
        });
        fragment.push(Block::Inline {
            label: "URL".to_string(),
            text: url.to_string(),
        });

        let query = pairs(list(params, &["queryParameters", "parameters"]));
        if !query.is_empty() {
            fragment.push(Block::Pairs {
                label: "Query Parameters".to_string(),
                separator: "=".to_string(),
                items: query,
            });
        }

        let headers = pairs(list(params, &["headerParameters", "parameters"]));
        if !headers.is_empty() {
            fragment.push(Block::Pairs {
                label: "Headers".to_string(),
                separator: ":".to_string(),
                items: headers,
            });
        }

        if let Some(body) = first_set(params, &["bodyParameters", "body"]) {
            fragment.push(Block::Entry {
                key: "Body".to_string(),
                value: classify(body),
            });
        }

        fragment
    }
}

fn pairs(entries: &[Value]) -> Vec<Pair> {
    entries
        .iter()
        .map(|entry| Pair {
            name: entry
                .get("name")
                .map(display_string)
                .unwrap_or_default(),
            value: entry
                .get("value")
                .map(display_string)
                .unwrap_or_default(),
        })
        .collect()
}
