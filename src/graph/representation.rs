//! Storage backends for directed weighted graphs.
//!
//! Algorithms in [`DirectedGraph`](super::DirectedGraph) only talk to the
//! [`WeightedAdjacency`] trait, so the dense matrix and the sparse edge map
//! are interchangeable.

use std::collections::BTreeMap;

use crate::types::{VertexId, Weight};

/// Vertex-dense adjacency storage: vertices are always `0..vertex_count()`.
///
/// Implementations trust their caller for bounds and weight validation.
pub trait WeightedAdjacency {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Append one isolated vertex and return the new vertex count.
    fn push_vertex(&mut self) -> usize;

    /// Weight of `src -> dst`, if that edge exists.
    fn weight(&self, src: VertexId, dst: VertexId) -> Option<Weight>;

    /// Insert or overwrite `src -> dst`.
    fn set_weight(&mut self, src: VertexId, dst: VertexId, weight: Weight);

    /// Remove `src -> dst` if present.
    fn clear_weight(&mut self, src: VertexId, dst: VertexId);

    /// Outgoing edges of `src` as `(dst, weight)`, ascending by `dst`.
    fn successors(&self, src: VertexId) -> Vec<(VertexId, Weight)>;

    /// Every edge as `(src, dst, weight)`, in row-major order.
    fn edges(&self) -> Vec<(VertexId, VertexId, Weight)> {
        (0..self.vertex_count())
            .flat_map(|src| {
                self.successors(src)
                    .into_iter()
                    .map(move |(dst, weight)| (src, dst, weight))
            })
            .collect()
    }
}

/// Dense square matrix; `0` marks a missing edge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<Weight>>,
}

impl AdjacencyMatrix {
    /// Create an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw matrix rows.
    pub fn rows(&self) -> &[Vec<Weight>] {
        &self.rows
    }
}

impl WeightedAdjacency for AdjacencyMatrix {
    fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    fn push_vertex(&mut self) -> usize {
        for row in &mut self.rows {
            row.push(0);
        }
        let count = self.rows.len() + 1;
        self.rows.push(vec![0; count]);
        count
    }

    fn weight(&self, src: VertexId, dst: VertexId) -> Option<Weight> {
        match self.rows.get(src).and_then(|row| row.get(dst)) {
            Some(&w) if w > 0 => Some(w),
            _ => None,
        }
    }

    fn set_weight(&mut self, src: VertexId, dst: VertexId, weight: Weight) {
        self.rows[src][dst] = weight;
    }

    fn clear_weight(&mut self, src: VertexId, dst: VertexId) {
        self.rows[src][dst] = 0;
    }

    fn successors(&self, src: VertexId) -> Vec<(VertexId, Weight)> {
        self.rows
            .get(src)
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|&(_, &w)| w > 0)
                    .map(|(dst, &w)| (dst, w))
                    .collect()
            })
            .unwrap_or_default()
    }
}

/// Edge-indexed map for large, sparse graphs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseAdjacency {
    vertex_count: usize,
    /// Keyed by `(src, dst)` so a range scan yields one row in order.
    weights: BTreeMap<(VertexId, VertexId), Weight>,
}

impl SparseAdjacency {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored edges.
    pub fn edge_count(&self) -> usize {
        self.weights.len()
    }
}

impl WeightedAdjacency for SparseAdjacency {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn push_vertex(&mut self) -> usize {
        self.vertex_count += 1;
        self.vertex_count
    }

    fn weight(&self, src: VertexId, dst: VertexId) -> Option<Weight> {
        self.weights.get(&(src, dst)).copied()
    }

    fn set_weight(&mut self, src: VertexId, dst: VertexId, weight: Weight) {
        self.weights.insert((src, dst), weight);
    }

    fn clear_weight(&mut self, src: VertexId, dst: VertexId) {
        self.weights.remove(&(src, dst));
    }

    fn successors(&self, src: VertexId) -> Vec<(VertexId, Weight)> {
        self.weights
            .range((src, 0)..=(src, VertexId::MAX))
            .map(|(&(_, dst), &w)| (dst, w))
            .collect()
    }

    fn edges(&self) -> Vec<(VertexId, VertexId, Weight)> {
        self.weights
            .iter()
            .map(|(&(src, dst), &w)| (src, dst, w))
            .collect()
    }
}
