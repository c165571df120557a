//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the flowlens crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use flowlens::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let source = DirectorySource::new("path/to/workflows");
//! let workflow = source.fetch_workflow("wf-1")?;
//! let view = build_view(&workflow, &ExpansionState::new());
//! println!("{}", ViewFormatter::format_view(&view));
//! # Ok(())
//! # }
//! ```

// Document model and sources
pub use crate::document::{
    DirectorySource, Node, Position, Tag, Workflow, WorkflowSource, WorkflowSummary,
    WorkflowUpdate,
};

// Rendering
pub use crate::render::{Block, DisplayFragment, NodeRenderer, RendererRegistry};
pub use crate::value::{RenderableValue, classify};

// Graph and expansion state
pub use crate::expansion::{ExpansionKey, ExpansionState, Region};
pub use crate::graph::{Connections, Edge, connections_of};

// Views
pub use crate::text::ViewFormatter;
pub use crate::view::{ViewBuilder, WorkflowView, build_view, raw_document};

// Error types
pub use crate::error::{DocumentError, FetchError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
