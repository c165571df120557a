pub mod builder;

pub use builder::*;

use crate::document::Workflow;

/// The raw-document passthrough: the workflow exactly as received, pretty-printed
/// with 2-space indentation.
pub fn raw_document(workflow: &Workflow) -> String {
    workflow.raw_json()
}
