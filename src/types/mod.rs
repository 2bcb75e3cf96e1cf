//! All data types for the simple-graphs library.

pub mod distance;
pub mod edge;
pub mod error;
pub mod outcome;

pub use distance::Distance;
pub use edge::WeightedEdge;
pub use error::{GraphError, GraphResult};
pub use outcome::Mutation;

/// Index of a vertex in a directed graph.
pub type VertexId = usize;

/// Positive edge weight of a directed graph.
pub type Weight = u32;

/// Weight given to edges whose input omits one.
pub const DEFAULT_WEIGHT: Weight = 1;

/// Upper bound on the vertex count an edge list may imply.
///
/// Edges naming a vertex at or beyond this index never grow a graph.
pub const MAX_VERTEX_COUNT: usize = 1 << 20;

/// Rendered adjacency listings shorter than this fit on one line.
pub const RENDER_WRAP_WIDTH: usize = 70;
