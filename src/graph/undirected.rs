//! Undirected, unweighted graph keyed by arbitrary labels.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::types::Mutation;

use super::frontier::Stack;
use super::traversal::{traverse, TraversalOrder};

/// An undirected graph stored as an adjacency list.
///
/// Adjacency is always symmetric, with no self-loops and no duplicate
/// neighbors. Neighbor lists keep edge-addition order and vertices keep
/// insertion order; traversals sort labels themselves.
#[derive(Debug, Clone)]
pub struct UndirectedGraph<L = String> {
    /// Vertex -> neighbors, in the order the edges were added.
    adjacency: HashMap<L, Vec<L>>,
    /// Vertices in insertion order.
    order: Vec<L>,
}

impl<L> UndirectedGraph<L>
where
    L: Clone + Eq + Hash + Ord,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Build a graph by adding each `(u, v)` pair through [`Self::add_edge`].
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (L, L)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Whether `v` is a vertex.
    pub fn contains_vertex(&self, v: &L) -> bool {
        self.adjacency.contains_key(v)
    }

    /// Whether `u` and `v` are joined by an edge.
    pub fn contains_edge(&self, u: &L, v: &L) -> bool {
        self.neighbors(u).contains(v) && self.neighbors(v).contains(u)
    }

    /// Neighbors of `v` in edge-addition order; empty for an absent vertex.
    pub fn neighbors(&self, v: &L) -> &[L] {
        self.adjacency.get(v).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Add an isolated vertex.
    pub fn add_vertex(&mut self, v: L) -> Mutation {
        if self.adjacency.contains_key(&v) {
            return Mutation::AlreadyExists;
        }
        self.order.push(v.clone());
        self.adjacency.insert(v, Vec::new());
        Mutation::Applied
    }

    /// Join `u` and `v`, creating either vertex if needed.
    pub fn add_edge(&mut self, u: L, v: L) -> Mutation {
        if u == v {
            log::debug!("add_edge ignored: self-loop");
            return Mutation::SelfLoop;
        }
        if self.contains_edge(&u, &v) {
            return Mutation::AlreadyExists;
        }

        self.add_vertex(u.clone());
        self.add_vertex(v.clone());
        self.link(&u, v.clone());
        self.link(&v, u);
        Mutation::Applied
    }

    /// Remove the edge between `u` and `v`.
    pub fn remove_edge(&mut self, u: &L, v: &L) -> Mutation {
        if u == v {
            log::debug!("remove_edge ignored: self-loop");
            return Mutation::SelfLoop;
        }
        if !self.contains_edge(u, v) {
            log::debug!("remove_edge ignored: no such edge");
            return Mutation::NotFound;
        }

        self.unlink(u, v);
        self.unlink(v, u);
        Mutation::Applied
    }

    /// Remove `v` together with every edge touching it.
    pub fn remove_vertex(&mut self, v: &L) -> Mutation {
        let Some(neighbors) = self.adjacency.remove(v) else {
            log::debug!("remove_vertex ignored: no such vertex");
            return Mutation::NotFound;
        };

        for neighbor in &neighbors {
            self.unlink(neighbor, v);
        }
        self.order.retain(|x| x != v);
        Mutation::Applied
    }

    /// All vertices in insertion order.
    pub fn get_vertices(&self) -> Vec<L> {
        self.order.clone()
    }

    /// Every edge exactly once, as `(a, b)` with `a < b`.
    pub fn get_edges(&self) -> Vec<(L, L)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for a in &self.order {
            for b in self.neighbors(a) {
                if b > a {
                    edges.push((a.clone(), b.clone()));
                }
            }
        }
        edges
    }

    /// Whether each vertex of `path` is a neighbor of the one before it.
    pub fn is_valid_path(&self, path: &[L]) -> bool {
        let Some(first) = path.first() else {
            return true;
        };
        if !self.contains_vertex(first) {
            return false;
        }
        path.windows(2)
            .all(|pair| self.neighbors(&pair[0]).contains(&pair[1]))
    }

    /// Depth-first visitation order from `start`, smallest label first.
    ///
    /// Stops after visiting `end` when given. Empty for an absent `start`.
    pub fn dfs(&self, start: &L, end: Option<&L>) -> Vec<L> {
        self.traverse(TraversalOrder::DepthFirst, start, end)
    }

    /// Breadth-first visitation order from `start`, smallest label first.
    pub fn bfs(&self, start: &L, end: Option<&L>) -> Vec<L> {
        self.traverse(TraversalOrder::BreadthFirst, start, end)
    }

    /// Run a traversal in the given order.
    pub fn traverse(&self, order: TraversalOrder, start: &L, end: Option<&L>) -> Vec<L> {
        if !self.contains_vertex(start) {
            return Vec::new();
        }
        traverse(order, start.clone(), end, |v| self.sorted_neighbors(v))
    }

    /// Number of connected components.
    pub fn count_connected_components(&self) -> usize {
        let mut seen: HashSet<L> = HashSet::new();
        let mut components = 0;
        for root in &self.order {
            if seen.contains(root) {
                continue;
            }
            components += 1;
            seen.extend(self.dfs(root, None));
        }
        components
    }

    /// Whether any cycle exists.
    ///
    /// A cycle shows up as a neighbor that was already reached but is not the
    /// vertex we came from.
    pub fn has_cycle(&self) -> bool {
        let mut visited: HashSet<&L> = HashSet::new();

        for root in &self.order {
            if !visited.insert(root) {
                continue;
            }
            let mut stack: Stack<(&L, Option<&L>)> = Stack::new();
            stack.push((root, None));

            while let Some((vertex, parent)) = stack.pop() {
                for neighbor in self.neighbors(vertex) {
                    if Some(neighbor) == parent {
                        continue;
                    }
                    if !visited.insert(neighbor) {
                        return true;
                    }
                    stack.push((neighbor, Some(vertex)));
                }
            }
        }
        false
    }

    /// Vertices with their neighbor lists, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&L, &[L])> + '_ {
        self.order.iter().map(move |v| (v, self.neighbors(v)))
    }

    fn sorted_neighbors(&self, v: &L) -> Vec<L> {
        let mut neighbors = self.neighbors(v).to_vec();
        neighbors.sort();
        neighbors
    }

    fn link(&mut self, from: &L, to: L) {
        if let Some(list) = self.adjacency.get_mut(from) {
            list.push(to);
        }
    }

    fn unlink(&mut self, from: &L, to: &L) {
        if let Some(list) = self.adjacency.get_mut(from) {
            list.retain(|x| x != to);
        }
    }
}

impl<L> Default for UndirectedGraph<L>
where
    L: Clone + Eq + Hash + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}
