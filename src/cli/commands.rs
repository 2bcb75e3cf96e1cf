//! CLI command implementations.

use crate::graph::{
    AdjacencyMatrix, DirectedGraph, SparseAdjacency, TraversalOrder, UndirectedGraph,
    WeightedAdjacency,
};
use crate::types::{Distance, GraphResult, Mutation, VertexId, WeightedEdge};

/// A read-only question asked of a directed graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectedQuery {
    /// Render the adjacency matrix.
    Show,
    /// List vertices.
    Vertices,
    /// List edges.
    Edges,
    /// Check whether a vertex sequence is a walkable path.
    Path(Vec<VertexId>),
    /// DFS or BFS from a start vertex.
    Traverse {
        order: TraversalOrder,
        start: VertexId,
        end: Option<VertexId>,
    },
    /// Cycle detection.
    Cycle,
    /// Shortest distances from a source.
    Dijkstra(VertexId),
}

/// A read-only question asked of an undirected graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UndirectedQuery {
    /// Render the adjacency list.
    Show,
    /// List vertices.
    Vertices,
    /// List edges.
    Edges,
    /// Check whether a label sequence is a walkable path.
    Path(Vec<String>),
    /// DFS or BFS from a start label.
    Traverse {
        order: TraversalOrder,
        start: String,
        end: Option<String>,
    },
    /// Connected-component count.
    Components,
    /// Cycle detection.
    Cycle,
}

/// Build a directed graph from `edges` and answer `query` on stdout.
pub fn cmd_directed(
    edges: Vec<WeightedEdge>,
    sparse: bool,
    query: &DirectedQuery,
    json: bool,
) -> GraphResult<()> {
    let output = if sparse {
        let graph = DirectedGraph::from_edges_in(SparseAdjacency::new(), edges);
        directed_report(&graph, query, json)?
    } else {
        let graph = DirectedGraph::from_edges_in(AdjacencyMatrix::new(), edges);
        directed_report(&graph, query, json)?
    };
    println!("{}", output);
    Ok(())
}

/// Build an undirected graph, drop `removed` vertices, and answer `query`.
pub fn cmd_undirected(
    edges: Vec<(String, String)>,
    removed: &[String],
    query: &UndirectedQuery,
    json: bool,
) -> GraphResult<()> {
    let mut graph = UndirectedGraph::from_edges(edges);
    for label in removed {
        if graph.remove_vertex(label) == Mutation::NotFound {
            log::warn!("cannot remove vertex {:?}: not in graph", label);
        }
    }
    println!("{}", undirected_report(&graph, query, json)?);
    Ok(())
}

/// Answer `query` as text or pretty JSON.
pub fn directed_report<R: WeightedAdjacency>(
    graph: &DirectedGraph<R>,
    query: &DirectedQuery,
    json: bool,
) -> GraphResult<String> {
    let report = match query {
        DirectedQuery::Show => {
            if json {
                let matrix: Vec<Vec<u32>> = (0..graph.vertex_count())
                    .map(|src| {
                        (0..graph.vertex_count())
                            .map(|dst| graph.weight(src, dst).unwrap_or(0))
                            .collect()
                    })
                    .collect();
                pretty(&serde_json::json!({
                    "vertices": graph.vertex_count(),
                    "matrix": matrix,
                }))?
            } else {
                graph.to_string().trim_end().to_string()
            }
        }
        DirectedQuery::Vertices => {
            let vertices = graph.get_vertices();
            if json {
                pretty(&serde_json::json!(vertices))?
            } else {
                join(&vertices)
            }
        }
        DirectedQuery::Edges => {
            let edges = graph.get_edges();
            if json {
                pretty(&serde_json::json!(edges))?
            } else {
                edges
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        DirectedQuery::Path(path) => {
            let valid = graph.is_valid_path(path);
            if json {
                pretty(&serde_json::json!({"path": path, "valid": valid}))?
            } else {
                format!("[{}] {}", join(path), valid)
            }
        }
        DirectedQuery::Traverse { order, start, end } => {
            let visited = graph.traverse(*order, *start, *end);
            if json {
                pretty(&serde_json::json!({
                    "order": order.name(),
                    "start": start,
                    "end": end,
                    "visited": visited,
                }))?
            } else {
                format!("{} from {}: {}", order.name().to_uppercase(), start, join(&visited))
            }
        }
        DirectedQuery::Cycle => {
            let cyclic = graph.has_cycle();
            if json {
                pretty(&serde_json::json!({"has_cycle": cyclic}))?
            } else {
                format!("Has cycle: {}", cyclic)
            }
        }
        DirectedQuery::Dijkstra(src) => {
            let distances: Vec<Distance> = graph.dijkstra(*src);
            if json {
                pretty(&serde_json::json!({"source": src, "distances": distances}))?
            } else {
                format!("DIJKSTRA {}: {}", src, join(&distances))
            }
        }
    };
    Ok(report)
}

/// Answer `query` as text or pretty JSON.
pub fn undirected_report(
    graph: &UndirectedGraph<String>,
    query: &UndirectedQuery,
    json: bool,
) -> GraphResult<String> {
    let report = match query {
        UndirectedQuery::Show => {
            if json {
                let adjacency: serde_json::Map<String, serde_json::Value> = graph
                    .entries()
                    .map(|(v, neighbors)| (v.clone(), serde_json::json!(neighbors)))
                    .collect();
                pretty(&serde_json::Value::Object(adjacency))?
            } else {
                graph.to_string()
            }
        }
        UndirectedQuery::Vertices => {
            let vertices = graph.get_vertices();
            if json {
                pretty(&serde_json::json!(vertices))?
            } else {
                join(&vertices)
            }
        }
        UndirectedQuery::Edges => {
            let edges = graph.get_edges();
            if json {
                pretty(&serde_json::json!(edges))?
            } else {
                edges
                    .iter()
                    .map(|(a, b)| format!("{} - {}", a, b))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
        }
        UndirectedQuery::Path(path) => {
            let valid = graph.is_valid_path(path);
            if json {
                pretty(&serde_json::json!({"path": path, "valid": valid}))?
            } else {
                format!("[{}] {}", join(path), valid)
            }
        }
        UndirectedQuery::Traverse { order, start, end } => {
            let visited = graph.traverse(*order, start, end.as_ref());
            if json {
                pretty(&serde_json::json!({
                    "order": order.name(),
                    "start": start,
                    "end": end,
                    "visited": visited,
                }))?
            } else {
                format!("{} from {}: {}", order.name().to_uppercase(), start, join(&visited))
            }
        }
        UndirectedQuery::Components => {
            let count = graph.count_connected_components();
            if json {
                pretty(&serde_json::json!({"components": count}))?
            } else {
                format!("Connected components: {}", count)
            }
        }
        UndirectedQuery::Cycle => {
            let cyclic = graph.has_cycle();
            if json {
                pretty(&serde_json::json!({"has_cycle": cyclic}))?
            } else {
                format!("Has cycle: {}", cyclic)
            }
        }
    };
    Ok(report)
}

fn pretty(value: &serde_json::Value) -> GraphResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn join<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
