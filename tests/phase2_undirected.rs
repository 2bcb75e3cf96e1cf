//! Phase 2 tests: undirected labelled graph.

use rand::seq::SliceRandom;
use rand::Rng;

use simple_graphs::graph::UndirectedGraph;
use simple_graphs::types::{GraphError, Mutation};

// ==================== Helper ====================

const SAMPLE_EDGES: [&str; 7] = ["AB", "AC", "BC", "BD", "CD", "CE", "DE"];

const TRAVERSAL_EDGES: [&str; 11] = [
    "AE", "AC", "BE", "CE", "CD", "CB", "BD", "ED", "BH", "QG", "FG",
];

/// Split two-letter edge names such as "AB" into label pairs.
fn pairs(edges: &[&str]) -> Vec<(String, String)> {
    edges
        .iter()
        .map(|e| (e[..1].to_string(), e[1..].to_string()))
        .collect()
}

fn graph_of(edges: &[&str]) -> UndirectedGraph {
    UndirectedGraph::from_edges(pairs(edges))
}

fn s(label: &str) -> String {
    label.to_string()
}

fn labels(text: &str) -> Vec<String> {
    text.chars().map(|c| c.to_string()).collect()
}

fn assert_symmetric(graph: &UndirectedGraph<u8>) {
    for u in graph.get_vertices() {
        assert!(!graph.neighbors(&u).contains(&u), "self-loop on {}", u);
        let mut seen = graph.neighbors(&u).to_vec();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), graph.neighbors(&u).len(), "duplicate neighbor of {}", u);
        for v in graph.neighbors(&u) {
            assert!(graph.neighbors(v).contains(&u), "{} -> {} is one-sided", u, v);
        }
    }
}

// ==================== Vertices and Edges ====================

#[test]
fn test_add_vertex_is_idempotent() {
    let mut graph: UndirectedGraph = UndirectedGraph::new();
    for v in labels("ABCDE") {
        assert_eq!(graph.add_vertex(v), Mutation::Applied);
    }
    assert_eq!(graph.add_vertex(s("A")), Mutation::AlreadyExists);
    assert_eq!(graph.get_vertices(), labels("ABCDE"));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_add_edge_outcomes() {
    let mut graph: UndirectedGraph = UndirectedGraph::new();
    assert_eq!(graph.add_edge(s("A"), s("B")), Mutation::Applied);
    assert_eq!(graph.add_edge(s("B"), s("A")), Mutation::AlreadyExists);
    assert_eq!(graph.add_edge(s("C"), s("C")), Mutation::SelfLoop);

    assert_eq!(graph.get_vertices(), labels("AB"));
    assert_eq!(graph.neighbors(&s("A")), &[s("B")]);
    assert_eq!(graph.neighbors(&s("B")), &[s("A")]);
    assert!(!graph.contains_vertex(&s("C")));
}

#[test]
fn test_duplicate_edge_in_construction() {
    let mut edges = pairs(&SAMPLE_EDGES);
    edges.push((s("B"), s("C")));
    let graph = UndirectedGraph::from_edges(edges);
    assert_eq!(graph.edge_count(), SAMPLE_EDGES.len());
    assert_eq!(graph.neighbors(&s("C")), &labels("ABDE")[..]);
}

#[test]
fn test_remove_edge_outcomes() {
    let mut graph = graph_of(&SAMPLE_EDGES);

    assert_eq!(graph.remove_vertex(&s("DOES NOT EXIST")), Mutation::NotFound);
    assert_eq!(graph.remove_edge(&s("A"), &s("B")), Mutation::Applied);
    assert_eq!(graph.remove_edge(&s("X"), &s("B")), Mutation::NotFound);
    assert_eq!(graph.remove_edge(&s("A"), &s("D")), Mutation::NotFound);
    assert_eq!(graph.remove_edge(&s("A"), &s("A")), Mutation::SelfLoop);

    assert!(!graph.contains_edge(&s("A"), &s("B")));
    assert_eq!(graph.neighbors(&s("A")), &[s("C")]);
    assert_eq!(graph.neighbors(&s("B")), &labels("CD")[..]);
    // Endpoints survive edge removal.
    assert_eq!(graph.vertex_count(), 5);
}

#[test]
fn test_remove_vertex_cascades() {
    let mut graph = graph_of(&SAMPLE_EDGES);
    assert_eq!(graph.remove_vertex(&s("D")), Mutation::Applied);

    assert_eq!(graph.get_vertices(), labels("ABCE"));
    assert_eq!(
        graph.get_edges(),
        vec![(s("A"), s("B")), (s("A"), s("C")), (s("B"), s("C")), (s("C"), s("E"))]
    );
    for other in labels("BCE") {
        assert!(!graph.contains_edge(&s("D"), &other));
        assert!(!graph.neighbors(&other).contains(&s("D")));
    }
}

#[test]
fn test_not_found_into_result() {
    let mut graph = graph_of(&SAMPLE_EDGES);
    match graph.remove_vertex(&s("Z")).into_result() {
        Err(GraphError::NotFound) => {}
        other => panic!("Expected NotFound error, got {:?}", other),
    }
    match graph.add_edge(s("A"), s("B")).into_result() {
        Err(GraphError::AlreadyExists) => {}
        other => panic!("Expected AlreadyExists error, got {:?}", other),
    }
}

#[test]
fn test_get_vertices_and_edges() {
    let empty: UndirectedGraph = UndirectedGraph::new();
    assert!(empty.get_vertices().is_empty());
    assert!(empty.get_edges().is_empty());

    let graph = graph_of(&["AB", "AC", "BC", "BD", "CD", "CE"]);
    assert_eq!(graph.get_vertices(), labels("ABCDE"));
    assert_eq!(
        graph.get_edges(),
        vec![
            (s("A"), s("B")),
            (s("A"), s("C")),
            (s("B"), s("C")),
            (s("B"), s("D")),
            (s("C"), s("D")),
            (s("C"), s("E")),
        ]
    );
}

#[test]
fn test_get_edges_follows_insertion_order() {
    let graph = graph_of(&TRAVERSAL_EDGES);
    assert_eq!(graph.get_vertices(), labels("AECBDHQGF"));
    let edges: Vec<String> = graph
        .get_edges()
        .into_iter()
        .map(|(a, b)| format!("{}{}", a, b))
        .collect();
    assert_eq!(
        edges,
        vec!["AE", "AC", "CE", "CD", "BE", "BC", "BD", "BH", "DE", "GQ", "FG"]
    );
}

// ==================== Paths ====================

#[test]
fn test_is_valid_path() {
    let graph = graph_of(&SAMPLE_EDGES);
    let cases = [
        ("ABC", true),
        ("ADE", false),
        ("ECABDCBE", false),
        ("ACDECB", true),
        ("", true),
        ("D", true),
        ("Z", false),
    ];
    for (path, expected) in cases {
        assert_eq!(graph.is_valid_path(&labels(path)), expected, "path {:?}", path);
    }
}

// ==================== Traversal ====================

#[test]
fn test_dfs_alphabetical() {
    let graph = graph_of(&SAMPLE_EDGES);
    assert_eq!(graph.dfs(&s("A"), None), labels("ABCDE"));
    assert_eq!(graph.bfs(&s("A"), None), labels("ABCDE"));
}

#[test]
fn test_dfs_and_bfs_orders() {
    let graph = graph_of(&TRAVERSAL_EDGES);
    let expected = [
        ("A", "ACBDEH", "ACEBDH"),
        ("B", "BCAEDH", "BCDEHA"),
        ("C", "CAEBDH", "CABDEH"),
        ("D", "DBCAEH", "DBCEHA"),
        ("E", "EACBDH", "EABCDH"),
        ("G", "GFQ", "GFQ"),
        ("H", "HBCAED", "HBCDEA"),
    ];
    for (start, dfs, bfs) in expected {
        assert_eq!(graph.dfs(&s(start), None), labels(dfs), "dfs from {}", start);
        assert_eq!(graph.bfs(&s(start), None), labels(bfs), "bfs from {}", start);
    }
}

#[test]
fn test_traversal_stops_at_end() {
    let graph = graph_of(&TRAVERSAL_EDGES);
    let expected = [
        ("B", "G", "BCAEDH", "BCDEHA"),
        ("C", "E", "CAE", "CABDE"),
        ("D", "D", "D", "D"),
        ("E", "C", "EAC", "EABC"),
        ("G", "B", "GFQ", "GFQ"),
        ("H", "A", "HBCA", "HBCDEA"),
    ];
    for (start, end, dfs, bfs) in expected {
        assert_eq!(graph.dfs(&s(start), Some(&s(end))), labels(dfs));
        assert_eq!(graph.bfs(&s(start), Some(&s(end))), labels(bfs));
    }
}

#[test]
fn test_traversal_from_missing_start() {
    let graph = graph_of(&SAMPLE_EDGES);
    assert!(graph.dfs(&s("Z"), None).is_empty());
    assert!(graph.bfs(&s("Z"), Some(&s("A"))).is_empty());
}

// ==================== Components and Cycles ====================

#[test]
fn test_components_and_cycles_through_mutations() {
    let mut graph = graph_of(&TRAVERSAL_EDGES);
    let steps = [
        ("add QH", 1, true),
        ("remove FG", 2, true),
        ("remove GQ", 3, true),
        ("remove HQ", 4, true),
        ("remove AE", 4, true),
        ("remove CA", 5, true),
        ("remove EB", 5, true),
        ("remove CE", 5, true),
        ("remove DE", 6, true),
        ("remove BC", 6, false),
        ("add EA", 5, false),
        ("add EF", 4, false),
        ("add GQ", 3, false),
        ("add AC", 2, false),
        ("add DQ", 1, false),
        ("add EG", 1, true),
        ("add QH", 1, true),
        ("remove CD", 1, true),
        ("remove BD", 1, false),
        ("remove QG", 2, false),
        ("add FG", 2, true),
        ("remove GE", 2, false),
    ];

    for (step, components, cyclic) in steps {
        let (command, edge) = step.split_once(' ').expect("command and edge");
        let (u, v) = (s(&edge[..1]), s(&edge[1..]));
        if command == "add" {
            graph.add_edge(u, v);
        } else {
            graph.remove_edge(&u, &v);
        }
        assert_eq!(graph.count_connected_components(), components, "after {}", step);
        assert_eq!(graph.has_cycle(), cyclic, "after {}", step);
    }
}

#[test]
fn test_components_of_isolated_vertices() {
    let mut graph: UndirectedGraph = UndirectedGraph::new();
    assert_eq!(graph.count_connected_components(), 0);
    assert!(!graph.has_cycle());

    for v in labels("XYZ") {
        graph.add_vertex(v);
    }
    assert_eq!(graph.count_connected_components(), 3);
    assert!(!graph.has_cycle());
}

#[test]
fn test_triangle_is_smallest_cycle() {
    let mut graph = graph_of(&["AB", "BC"]);
    assert!(!graph.has_cycle());
    graph.add_edge(s("C"), s("A"));
    assert!(graph.has_cycle());
}

// ==================== Invariants ====================

#[test]
fn test_symmetry_under_random_operations() {
    let mut rng = rand::thread_rng();
    let pool: Vec<u8> = (0..10).collect();
    let mut graph: UndirectedGraph<u8> = UndirectedGraph::new();

    for _ in 0..500 {
        let u = *pool.choose(&mut rng).expect("non-empty pool");
        let v = *pool.choose(&mut rng).expect("non-empty pool");
        match rng.gen_range(0..4) {
            0 | 1 => {
                graph.add_edge(u, v);
            }
            2 => {
                graph.remove_edge(&u, &v);
            }
            _ => {
                if rng.gen_bool(0.3) {
                    graph.remove_vertex(&u);
                } else {
                    graph.add_vertex(u);
                }
            }
        }
        assert_symmetric(&graph);
    }

    let edges = graph.get_edges();
    assert_eq!(edges.len(), graph.edge_count());
    assert!(edges.iter().all(|(a, b)| a < b && graph.contains_edge(a, b)));
}

#[test]
fn test_components_match_traversal_reach() {
    let mut rng = rand::thread_rng();
    for _ in 0..20 {
        let mut graph: UndirectedGraph<u8> = UndirectedGraph::new();
        for v in 0..12 {
            graph.add_vertex(v);
        }
        for _ in 0..10 {
            graph.add_edge(rng.gen_range(0..12), rng.gen_range(0..12));
        }

        let mut roots = 0;
        let mut seen = std::collections::HashSet::new();
        for v in graph.get_vertices() {
            if seen.insert(v) {
                roots += 1;
                let reached = graph.bfs(&v, None);
                assert_eq!(reached.len(), graph.dfs(&v, None).len());
                seen.extend(reached);
            }
        }
        assert_eq!(graph.count_connected_components(), roots);

        // A forest has exactly V - C edges; anything more closes a cycle.
        let forest_edges = graph.vertex_count() - roots;
        assert_eq!(graph.has_cycle(), graph.edge_count() > forest_edges);
    }
}

// ==================== Rendering ====================

#[test]
fn test_render_single_line() {
    let empty: UndirectedGraph = UndirectedGraph::new();
    assert_eq!(empty.to_string(), "GRAPH: {}");

    let mut graph = graph_of(&SAMPLE_EDGES);
    assert_eq!(
        graph.to_string(),
        "GRAPH: {A: [B, C], B: [A, C, D], C: [A, B, D, E], D: [B, C, E], E: [C, D]}"
    );
    graph.remove_vertex(&s("D"));
    assert_eq!(
        graph.to_string(),
        "GRAPH: {A: [B, C], B: [A, C], C: [A, B, E], E: [C]}"
    );
}

#[test]
fn test_render_multi_line() {
    let graph = graph_of(&TRAVERSAL_EDGES);
    let expected = "GRAPH: {\n  A: [E, C]\n  E: [A, B, C, D]\n  C: [A, E, D, B]\n  \
                    B: [E, C, D, H]\n  D: [C, B, E]\n  H: [B]\n  Q: [G]\n  G: [Q, F]\n  F: [G]}";
    assert_eq!(graph.to_string(), expected);
}

#[test]
fn test_render_isolated_and_numeric_labels() {
    let mut graph: UndirectedGraph<u32> = UndirectedGraph::new();
    graph.add_vertex(7);
    graph.add_edge(10, 2);
    assert_eq!(graph.to_string(), "GRAPH: {7: [], 10: [2], 2: [10]}");
}
