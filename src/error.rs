use thiserror::Error;

/// Errors that can occur while turning a raw payload into a `Workflow`.
///
/// Only the outer shape is checked here. Individual fields with an unexpected
/// shape never fail a document, they degrade to their defaults.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to parse workflow JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Workflow document must be a JSON object, but found {found}")]
    NotAnObject { found: &'static str },

    #[error("Could not read workflow file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors surfaced by a `WorkflowSource` when a document cannot be delivered.
///
/// Every variant maps onto an HTTP-status-like code through [`FetchError::status`]
/// so a presentation layer can treat local and remote sources alike.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Workflow '{id}' not found")]
    NotFound { id: String },

    #[error("Upstream request failed: {status} - {message}")]
    Upstream { status: u16, message: String },

    #[error("Workflow '{id}' could not be read: {source}")]
    InvalidDocument {
        id: String,
        #[source]
        source: DocumentError,
    },

    #[error("Workflow storage error: {0}")]
    Io(#[from] std::io::Error),
}

impl FetchError {
    /// The HTTP-status-like code associated with this failure.
    pub fn status(&self) -> u16 {
        match self {
            FetchError::NotFound { .. } => 404,
            FetchError::Upstream { status, .. } => *status,
            FetchError::InvalidDocument { .. } => 422,
            FetchError::Io(_) => 500,
        }
    }
}
