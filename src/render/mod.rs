//! Polymorphic node rendering keyed by a node's declared type.
//!
//! Every node type identifier maps to a [`NodeRenderer`]. Lookup is an exact
//! string match on `Node::node_type`; `type_version` never takes part in it.
//! Types without an entry are handled by [`GenericRenderer`].

use crate::document::Node;
use ahash::AHashMap;

mod assign;
mod branch;
mod code;
pub mod fragment;
mod generic;
mod http;
pub mod lookup;
mod mail;
mod schedule;

pub use assign::AssignmentRenderer;
pub use branch::{BranchRenderer, Combinator, operator_symbol};
pub use code::{CodeRenderer, ExecutionMode};
pub use fragment::*;
pub use generic::{GenericRenderer, NO_PARAMETERS, entry_blocks};
pub use http::{DEFAULT_METHOD, HttpRequestRenderer, method_theme};
pub use mail::{MailRenderer, OperationStyle, operation_style};
pub use schedule::ScheduleRenderer;

/// Type identifiers with a specialized renderer.
pub mod node_types {
    pub const HTTP_REQUEST: &str = "n8n-nodes-base.httpRequest";
    pub const CODE: &str = "n8n-nodes-base.code";
    pub const BRANCH: &str = "n8n-nodes-base.if";
    pub const ASSIGNMENT: &str = "n8n-nodes-base.set";
    pub const SCHEDULE_TRIGGER: &str = "n8n-nodes-base.scheduleTrigger";
    pub const MAIL: &str = "n8n-nodes-base.gmail";
}

/// Defines the contract for rendering one node type into a `DisplayFragment`.
///
/// Implementations must be total: a missing or wrongly-typed parameter degrades
/// to a default or a placeholder, never to a panic.
pub trait NodeRenderer: Send + Sync {
    fn node_type(&self) -> &str;
    fn render(&self, node: &Node) -> DisplayFragment;
}

/// Generates the default registration table and by-name construction of the
/// built-in renderers from one list.
macro_rules! define_node_renderers {
    ( $( ($renderer:ident, $node_type:path) ),* $(,)? ) => {
        fn register_default_renderers(registry: &mut AHashMap<String, Box<dyn NodeRenderer>>) {
            $( registry.insert($node_type.to_string(), Box::new($renderer)); )*
        }

        fn create_renderer_by_name(name: &str) -> Option<Box<dyn NodeRenderer>> {
            match name {
                $( $node_type => Some(Box::new($renderer)), )*
                _ => None,
            }
        }
    };
}

define_node_renderers! {
    (HttpRequestRenderer, node_types::HTTP_REQUEST),
    (CodeRenderer, node_types::CODE),
    (BranchRenderer, node_types::BRANCH),
    (AssignmentRenderer, node_types::ASSIGNMENT),
    (ScheduleRenderer, node_types::SCHEDULE_TRIGGER),
    (MailRenderer, node_types::MAIL),
}

/// Dispatch table from node type identifier to renderer.
pub struct RendererRegistry {
    renderers: AHashMap<String, Box<dyn NodeRenderer>>,
    fallback: GenericRenderer,
}

pub struct RendererRegistryBuilder {
    renderers: AHashMap<String, Box<dyn NodeRenderer>>,
}

impl RendererRegistryBuilder {
    pub fn new() -> Self {
        let mut renderers: AHashMap<String, Box<dyn NodeRenderer>> = AHashMap::new();
        register_default_renderers(&mut renderers);
        Self { renderers }
    }

    /// Renders `alias` with the built-in renderer of `known_type`.
    /// Unknown `known_type` values are ignored.
    pub fn with_type_mapping(mut self, alias: &str, known_type: &str) -> Self {
        if let Some(renderer) = create_renderer_by_name(known_type) {
            self.renderers.insert(alias.to_string(), renderer);
        }
        self
    }

    /// Registers a renderer under its own `node_type()`, replacing any existing one.
    pub fn with_custom_renderer(mut self, renderer: Box<dyn NodeRenderer>) -> Self {
        self.renderers
            .insert(renderer.node_type().to_string(), renderer);
        self
    }

    pub fn build(self) -> RendererRegistry {
        RendererRegistry {
            renderers: self.renderers,
            fallback: GenericRenderer,
        }
    }
}

impl Default for RendererRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RendererRegistry {
    /// A registry with the built-in renderers only.
    pub fn new() -> Self {
        RendererRegistryBuilder::new().build()
    }

    pub fn builder() -> RendererRegistryBuilder {
        RendererRegistryBuilder::new()
    }

    /// The renderer responsible for `node_type`, falling back to the generic one.
    pub fn renderer_for(&self, node_type: &str) -> &dyn NodeRenderer {
        match self.renderers.get(node_type) {
            Some(renderer) => renderer.as_ref(),
            None => &self.fallback,
        }
    }

    pub fn is_known(&self, node_type: &str) -> bool {
        self.renderers.contains_key(node_type)
    }

    /// Registered type identifiers, sorted.
    pub fn known_types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    pub fn render(&self, node: &Node) -> DisplayFragment {
        let renderer = self.renderer_for(&node.node_type);
        log::debug!(
            "Rendering node '{}' ({}) with '{}' renderer",
            node.name,
            node.node_type,
            renderer.node_type()
        );
        renderer.render(node)
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}
