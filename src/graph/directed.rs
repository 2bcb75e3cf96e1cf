//! Directed, positively weighted graph over dense integer vertices.

use crate::types::{Distance, Mutation, VertexId, WeightedEdge, Weight, MAX_VERTEX_COUNT};

use super::frontier::{MinQueue, Stack};
use super::representation::{AdjacencyMatrix, WeightedAdjacency};
use super::traversal::{traverse, TraversalOrder};

/// A directed weighted graph whose vertices are always `0..vertex_count()`.
///
/// Storage is pluggable through [`WeightedAdjacency`]; the default is a dense
/// [`AdjacencyMatrix`]. No self-loops, one edge per ordered pair, and every
/// stored weight is at least 1.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectedGraph<R = AdjacencyMatrix> {
    adjacency: R,
}

impl DirectedGraph<AdjacencyMatrix> {
    /// Create a new empty matrix-backed graph.
    pub fn new() -> Self {
        Self::with_representation(AdjacencyMatrix::new())
    }

    /// Build a matrix-backed graph from `(src, dst, weight)` edges.
    ///
    /// See [`DirectedGraph::from_edges_in`].
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (VertexId, VertexId, Weight)>,
    {
        Self::from_edges_in(
            AdjacencyMatrix::new(),
            edges.into_iter().map(WeightedEdge::from),
        )
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }
}

impl<R: WeightedAdjacency> DirectedGraph<R> {
    /// Wrap existing storage.
    pub fn with_representation(adjacency: R) -> Self {
        Self { adjacency }
    }

    /// Build a graph on top of `adjacency` from an initial edge list.
    ///
    /// The vertex count grows to `max(src, dst) + 1` over all edges before
    /// any edge is added; edges that `add_edge` rejects are skipped. Edges
    /// naming a vertex at or beyond [`MAX_VERTEX_COUNT`] do not grow the
    /// graph and end up rejected as out of range.
    pub fn from_edges_in<I>(adjacency: R, edges: I) -> Self
    where
        I: IntoIterator<Item = WeightedEdge>,
    {
        let edges: Vec<WeightedEdge> = edges.into_iter().collect();
        let mut graph = Self::with_representation(adjacency);

        let needed = edges
            .iter()
            .filter_map(|e| {
                let count = e.src.max(e.dst).checked_add(1)?;
                if count > MAX_VERTEX_COUNT {
                    log::debug!("edge {e} exceeds the vertex limit, not growing the graph");
                    return None;
                }
                Some(count)
            })
            .max()
            .unwrap_or(0);
        while graph.vertex_count() < needed {
            graph.add_vertex();
        }

        for edge in edges {
            graph.add_edge(edge.src, edge.dst, edge.weight);
        }
        graph
    }

    /// The underlying storage.
    pub fn representation(&self) -> &R {
        &self.adjacency
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// Whether `v` is a vertex of this graph.
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v < self.vertex_count()
    }

    /// Weight of `src -> dst`, or `None` when there is no such edge.
    pub fn weight(&self, src: VertexId, dst: VertexId) -> Option<Weight> {
        if !self.contains_vertex(src) || !self.contains_vertex(dst) {
            return None;
        }
        self.adjacency.weight(src, dst)
    }

    /// Add an isolated vertex, returns the new vertex count.
    pub fn add_vertex(&mut self) -> usize {
        self.adjacency.push_vertex()
    }

    /// Insert or overwrite the edge `src -> dst`.
    pub fn add_edge(&mut self, src: VertexId, dst: VertexId, weight: Weight) -> Mutation {
        let outcome = if !self.contains_vertex(src) || !self.contains_vertex(dst) {
            Mutation::OutOfRange
        } else if src == dst {
            Mutation::SelfLoop
        } else if weight < 1 {
            Mutation::InvalidWeight
        } else {
            self.adjacency.set_weight(src, dst, weight);
            Mutation::Applied
        };

        if !outcome.is_applied() {
            log::debug!("add_edge({src}, {dst}, {weight}) ignored: {outcome}");
        }
        outcome
    }

    /// Remove the edge `src -> dst`.
    ///
    /// Applied whenever both endpoints exist, even if there was no edge.
    pub fn remove_edge(&mut self, src: VertexId, dst: VertexId) -> Mutation {
        if !self.contains_vertex(src) || !self.contains_vertex(dst) {
            log::debug!("remove_edge({src}, {dst}) ignored: vertex out of range");
            return Mutation::OutOfRange;
        }
        self.adjacency.clear_weight(src, dst);
        Mutation::Applied
    }

    /// All vertices in ascending order.
    pub fn get_vertices(&self) -> Vec<VertexId> {
        (0..self.vertex_count()).collect()
    }

    /// All edges, ordered by source then destination.
    pub fn get_edges(&self) -> Vec<WeightedEdge> {
        self.adjacency
            .edges()
            .into_iter()
            .map(WeightedEdge::from)
            .collect()
    }

    /// Whether `path` can be walked along existing edges.
    pub fn is_valid_path(&self, path: &[VertexId]) -> bool {
        if path.iter().any(|&v| !self.contains_vertex(v)) {
            return false;
        }
        path.windows(2)
            .all(|pair| self.adjacency.weight(pair[0], pair[1]).is_some())
    }

    /// Depth-first visitation order from `start`, smallest successor first.
    ///
    /// Stops after visiting `end` when given. Empty if `start` is not a vertex.
    pub fn dfs(&self, start: VertexId, end: Option<VertexId>) -> Vec<VertexId> {
        self.traverse(TraversalOrder::DepthFirst, start, end)
    }

    /// Breadth-first visitation order from `start`, smallest successor first.
    pub fn bfs(&self, start: VertexId, end: Option<VertexId>) -> Vec<VertexId> {
        self.traverse(TraversalOrder::BreadthFirst, start, end)
    }

    /// Run a traversal in the given order.
    pub fn traverse(
        &self,
        order: TraversalOrder,
        start: VertexId,
        end: Option<VertexId>,
    ) -> Vec<VertexId> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }
        traverse(order, start, end.as_ref(), |&v| self.successor_ids(v))
    }

    /// Whether any directed cycle exists.
    ///
    /// Tries every vertex as a start and walks everything reachable from it,
    /// looking for an edge back into the start. O(V·(V+E)).
    pub fn has_cycle(&self) -> bool {
        (0..self.vertex_count()).any(|start| self.returns_to(start))
    }

    fn returns_to(&self, start: VertexId) -> bool {
        let mut visited = vec![false; self.vertex_count()];
        let mut stack = Stack::new();
        stack.push(start);

        while let Some(vertex) = stack.pop() {
            visited[vertex] = true;
            for next in self.successor_ids(vertex) {
                if next == start {
                    return true;
                }
                if !visited[next] {
                    stack.push(next);
                }
            }
        }
        false
    }

    /// Shortest distance from `src` to every vertex, indexed by vertex.
    ///
    /// Lazy-deletion Dijkstra: one queue entry per relaxation, stale entries
    /// are skipped when popped. If `src` is not a vertex, every distance is
    /// [`Distance::Unreachable`].
    pub fn dijkstra(&self, src: VertexId) -> Vec<Distance> {
        let count = self.vertex_count();
        let mut settled: Vec<Option<u64>> = vec![None; count];
        if !self.contains_vertex(src) {
            log::debug!("dijkstra from {src} ignored: vertex out of range");
            return vec![Distance::Unreachable; count];
        }

        let mut queue: MinQueue<(u64, VertexId)> = MinQueue::new();
        queue.push((0, src));

        while let Some((distance, vertex)) = queue.pop() {
            if settled[vertex].is_some() {
                continue;
            }
            settled[vertex] = Some(distance);

            for (next, weight) in self.adjacency.successors(vertex) {
                if settled[next].is_none() {
                    queue.push((distance + u64::from(weight), next));
                }
            }
        }

        settled.into_iter().map(Distance::from).collect()
    }

    fn successor_ids(&self, v: VertexId) -> Vec<VertexId> {
        self.adjacency
            .successors(v)
            .into_iter()
            .map(|(dst, _)| dst)
            .collect()
    }
}
