//! Basic build -> mutate -> query flow for both graph kinds.

use simple_graphs::*;

fn main() -> GraphResult<()> {
    // A directed weighted graph from an edge list
    let mut directed = DirectedGraph::from_edges([
        (0, 1, 10),
        (4, 0, 12),
        (1, 4, 15),
        (4, 3, 3),
        (3, 1, 5),
        (2, 1, 23),
        (3, 2, 7),
    ]);
    println!("{}", directed);

    for start in directed.get_vertices() {
        println!(
            "{} DFS: {:?} BFS: {:?}",
            start,
            directed.dfs(start, None),
            directed.bfs(start, None)
        );
    }

    let distances: Vec<String> = directed.dijkstra(0).iter().map(ToString::to_string).collect();
    println!("Shortest distances from 0: [{}]", distances.join(", "));

    // Rejected mutations leave the graph alone and say why
    let outcome = directed.add_edge(2, 2, 5);
    println!("Adding a self-loop: {}", outcome);
    directed.remove_edge(4, 3).into_result()?;
    println!("Has cycle after removing 4 -> 3: {}", directed.has_cycle());

    // An undirected graph over string labels
    let mut undirected = UndirectedGraph::from_edges(
        ["AB", "AC", "BC", "BD", "CD", "CE", "DE"]
            .iter()
            .map(|e| (e[..1].to_string(), e[1..].to_string())),
    );
    println!("{}", undirected);
    println!("DFS from A: {:?}", undirected.dfs(&"A".to_string(), None));

    undirected.remove_vertex(&"D".to_string()).into_result()?;
    println!("After removing D: {}", undirected);
    println!(
        "Components: {}, has cycle: {}",
        undirected.count_connected_components(),
        undirected.has_cycle()
    );

    Ok(())
}
