//! # Flowlens - Workflow Inspection and Rendering Engine
//!
//! **Flowlens** turns loosely-typed automation-workflow documents (a graph of
//! typed nodes with free-form parameter bags) into a structured, human-readable
//! display model. Rendering is total: once a document is in hand, no input shape
//! makes it fail.
//!
//! ## Core Workflow
//!
//! 1.  **Load a document**: Parse a payload with `Workflow::from_json`, or obtain one from a
//!     `WorkflowSource` such as the directory-backed `DirectorySource`.
//! 2.  **Choose what is open**: Toggle collapsible regions on an `ExpansionState`, keyed by
//!     `ExpansionKey`s derived from node identifiers.
//! 3.  **Build the view**: `ViewBuilder::build` composes metadata, settings, nodes (each rendered
//!     by the `RendererRegistry` for its type), connections and tags into a `WorkflowView`.
//! 4.  **Paint it**: hand the view to a presentation layer, serialize it, or print it with
//!     `ViewFormatter`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use flowlens::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let workflow = Workflow::from_file("path/to/workflow.json")?;
//!
//!     // Everything starts collapsed; open the first node's parameters.
//!     let mut state = ExpansionState::new();
//!     if let Some(node) = workflow.nodes.first() {
//!         state.toggle(&ExpansionKey::parameters(&node.id));
//!     }
//!
//!     let view = ViewBuilder::new().build(&workflow, &state);
//!     println!("{}", ViewFormatter::format_view(&view));
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;
pub mod expansion;
pub mod graph;
pub mod prelude;
pub mod render;
pub mod text;
pub mod value;
pub mod view;
