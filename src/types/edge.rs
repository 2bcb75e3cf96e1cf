//! The weighted directed edge struct.

use serde::{Deserialize, Serialize};

use super::{VertexId, Weight, DEFAULT_WEIGHT};

/// A directed, weighted edge between two vertex indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeightedEdge {
    /// Origin vertex.
    pub src: VertexId,
    /// Destination vertex.
    pub dst: VertexId,
    /// Edge weight (1 when omitted from input).
    #[serde(default = "default_weight")]
    pub weight: Weight,
}

fn default_weight() -> Weight {
    DEFAULT_WEIGHT
}

impl WeightedEdge {
    /// Create a new edge.
    pub fn new(src: VertexId, dst: VertexId, weight: Weight) -> Self {
        Self { src, dst, weight }
    }
}

impl From<(VertexId, VertexId, Weight)> for WeightedEdge {
    fn from((src, dst, weight): (VertexId, VertexId, Weight)) -> Self {
        Self::new(src, dst, weight)
    }
}

impl std::fmt::Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {} ({})", self.src, self.dst, self.weight)
    }
}
