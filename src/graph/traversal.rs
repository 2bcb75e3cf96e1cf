//! Graph traversal shared by both graph kinds (DFS and BFS).

use std::collections::HashSet;
use std::hash::Hash;

use super::frontier::{Frontier, Queue, Stack};

/// Order in which a traversal explores the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraversalOrder {
    /// Stack discipline: follow one branch as deep as possible.
    DepthFirst,
    /// Queue discipline: finish each distance layer before the next.
    BreadthFirst,
}

impl TraversalOrder {
    /// Return a human-readable name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "dfs",
            Self::BreadthFirst => "bfs",
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Walk from `start` and return vertices in the order they are first seen.
///
/// `neighbors` must return candidates in preference order (smallest first);
/// the frontier turns that into the right pop order. Every popped vertex is
/// expanded, already-visited ones included, and only unvisited neighbors are
/// put back, so a vertex can sit in the frontier several times before its
/// first visit. The walk stops right after popping `end`.
pub fn traverse<V, N>(order: TraversalOrder, start: V, end: Option<&V>, neighbors: N) -> Vec<V>
where
    V: Clone + Eq + Hash,
    N: FnMut(&V) -> Vec<V>,
{
    match order {
        TraversalOrder::DepthFirst => walk(Stack::new(), start, end, neighbors),
        TraversalOrder::BreadthFirst => walk(Queue::new(), start, end, neighbors),
    }
}

fn walk<V, F, N>(mut frontier: F, start: V, end: Option<&V>, mut neighbors: N) -> Vec<V>
where
    V: Clone + Eq + Hash,
    F: Frontier<V>,
    N: FnMut(&V) -> Vec<V>,
{
    let mut visited: HashSet<V> = HashSet::new();
    let mut visited_order: Vec<V> = Vec::new();
    frontier.put(start);

    while let Some(vertex) = frontier.take() {
        if visited.insert(vertex.clone()) {
            visited_order.push(vertex.clone());
        }
        if end == Some(&vertex) {
            log::trace!("traversal reached end vertex after {} visits", visited_order.len());
            break;
        }

        let fresh: Vec<V> = neighbors(&vertex)
            .into_iter()
            .filter(|n| !visited.contains(n))
            .collect();
        frontier.put_preferred(fresh);
    }

    visited_order
}
