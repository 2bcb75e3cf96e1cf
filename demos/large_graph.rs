//! 100K vertex performance demo.
//!
//! Uses `SparseAdjacency`, since a dense matrix of this size would not fit.

use std::time::Instant;

use simple_graphs::*;

fn main() {
    let vertex_count = 100_000;
    let edges_per_vertex = 3;

    println!("Creating graph with {} vertices...", vertex_count);
    let start = Instant::now();

    let mut edges = Vec::with_capacity(vertex_count * edges_per_vertex);
    for i in 0..vertex_count {
        for j in 1..=edges_per_vertex {
            let target = (i + j * 7) % vertex_count;
            if target != i {
                edges.push(WeightedEdge::new(i, target, (j as Weight) * 2 + 1));
            }
        }
    }

    let graph = DirectedGraph::from_edges_in(SparseAdjacency::new(), edges);
    println!(
        "  Graph built in {:?} ({} vertices, {} edges)",
        start.elapsed(),
        graph.vertex_count(),
        graph.representation().edge_count()
    );

    let start = Instant::now();
    let visited = graph.bfs(0, None);
    println!("  BFS visited {} vertices in {:?}", visited.len(), start.elapsed());

    let start = Instant::now();
    let visited = graph.dfs(0, Some(vertex_count / 2));
    println!(
        "  DFS reached {} after {} visits in {:?}",
        vertex_count / 2,
        visited.len(),
        start.elapsed()
    );

    let start = Instant::now();
    let distances = graph.dijkstra(0);
    let reachable = distances.iter().filter(|d| d.is_reachable()).count();
    let farthest = distances.iter().filter_map(|d| d.finite()).max().unwrap_or(0);
    println!(
        "  Dijkstra reached {} vertices (farthest at {}) in {:?}",
        reachable,
        farthest,
        start.elapsed()
    );
}
