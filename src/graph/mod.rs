//! In-memory graphs and the algorithms that run over them.

pub mod directed;
pub mod frontier;
pub mod render;
pub mod representation;
pub mod traversal;
pub mod undirected;

pub use directed::DirectedGraph;
pub use frontier::{Frontier, MinQueue, Queue, Stack};
pub use representation::{AdjacencyMatrix, SparseAdjacency, WeightedAdjacency};
pub use traversal::{traverse, TraversalOrder};
pub use undirected::UndirectedGraph;
