//! Observable outcome of graph mutations.

use serde::Serialize;

use super::error::{GraphError, GraphResult};

/// What a mutating call did to the graph.
///
/// Every variant other than [`Mutation::Applied`] means the graph was left
/// exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutation {
    /// The graph was changed (or, for upserts, rewritten).
    Applied,
    /// An endpoint is not a vertex of the graph.
    OutOfRange,
    /// Both endpoints name the same vertex.
    SelfLoop,
    /// Edge weight below 1.
    InvalidWeight,
    /// The vertex or edge being added is already present.
    AlreadyExists,
    /// The vertex or edge being removed is absent.
    NotFound,
}

impl Mutation {
    /// Whether the call changed the graph.
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }

    /// Return a human-readable name for this outcome.
    pub fn name(self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::OutOfRange => "out_of_range",
            Self::SelfLoop => "self_loop",
            Self::InvalidWeight => "invalid_weight",
            Self::AlreadyExists => "already_exists",
            Self::NotFound => "not_found",
        }
    }

    /// Turn a rejected mutation into an error, for callers that prefer `?`.
    pub fn into_result(self) -> GraphResult<()> {
        match self {
            Self::Applied => Ok(()),
            Self::OutOfRange => Err(GraphError::VertexOutOfRange),
            Self::SelfLoop => Err(GraphError::SelfLoop),
            Self::InvalidWeight => Err(GraphError::InvalidWeight),
            Self::AlreadyExists => Err(GraphError::AlreadyExists),
            Self::NotFound => Err(GraphError::NotFound),
        }
    }
}

impl std::fmt::Display for Mutation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
