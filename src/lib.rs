//! simple-graphs: small in-memory graphs and the classic algorithms over them.
//!
//! Two independent graph kinds:
//! - [`DirectedGraph`]: directed, positively weighted, vertices `0..n`,
//!   stored as a dense adjacency matrix by default.
//! - [`UndirectedGraph`]: undirected, unweighted, vertices keyed by any
//!   ordered label, stored as an adjacency list.
//!
//! Mutations never fail; they report a [`Mutation`] outcome and leave the
//! graph untouched unless it is [`Mutation::Applied`].

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    AdjacencyMatrix, DirectedGraph, SparseAdjacency, TraversalOrder, UndirectedGraph,
    WeightedAdjacency,
};
pub use types::{
    Distance, GraphError, GraphResult, Mutation, VertexId, Weight, WeightedEdge, DEFAULT_WEIGHT,
    MAX_VERTEX_COUNT,
};
