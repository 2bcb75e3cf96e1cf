//! Error types for the simple-graphs library.

use thiserror::Error;

/// All errors that can occur in the simple-graphs library.
///
/// Graph mutations never return these directly; they report a
/// [`Mutation`](super::Mutation) which converts into an error through
/// [`Mutation::into_result`](super::Mutation::into_result).
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex index outside `0..vertex_count`.
    #[error("Vertex index out of range")]
    VertexOutOfRange,

    /// Edge from a vertex to itself.
    #[error("Self-loop not allowed")]
    SelfLoop,

    /// Edge weight below 1.
    #[error("Edge weight must be at least 1")]
    InvalidWeight,

    /// Vertex or edge is already present.
    #[error("Vertex or edge already exists")]
    AlreadyExists,

    /// Vertex or edge is absent.
    #[error("Vertex or edge not found")]
    NotFound,

    /// Malformed edge string on the command line.
    #[error("Invalid edge spec {spec:?}: {reason}")]
    InvalidEdgeSpec { spec: String, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON decoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GraphError {
    /// Shorthand for an [`GraphError::InvalidEdgeSpec`].
    pub fn edge_spec(spec: &str, reason: impl Into<String>) -> Self {
        Self::InvalidEdgeSpec {
            spec: spec.to_string(),
            reason: reason.into(),
        }
    }
}

/// Convenience result type for simple-graphs operations.
pub type GraphResult<T> = Result<T, GraphError>;
