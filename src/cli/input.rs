//! Edge-list input for the `sgraph` binary: inline specs and JSON files.

use std::path::Path;

use crate::types::{
    GraphError, GraphResult, VertexId, Weight, WeightedEdge, DEFAULT_WEIGHT, MAX_VERTEX_COUNT,
};

/// Parse comma-separated `src:dst[:weight]` triples.
///
/// Blank items are skipped; the weight defaults to 1. Vertices must be below
/// [`MAX_VERTEX_COUNT`]. Weights are not range-checked here, the graph
/// reports invalid ones when they are added.
pub fn parse_directed_edges(spec: &str) -> GraphResult<Vec<WeightedEdge>> {
    spec.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(parse_directed_edge)
        .collect()
}

fn parse_directed_edge(item: &str) -> GraphResult<WeightedEdge> {
    let parts: Vec<&str> = item.split(':').map(str::trim).collect();
    let (src, dst, weight) = match parts.as_slice() {
        [src, dst] => (*src, *dst, None),
        [src, dst, weight] => (*src, *dst, Some(*weight)),
        _ => return Err(GraphError::edge_spec(item, "expected src:dst[:weight]")),
    };

    let src: VertexId = src
        .parse()
        .map_err(|_| GraphError::edge_spec(item, format!("bad source vertex {src:?}")))?;
    let dst: VertexId = dst
        .parse()
        .map_err(|_| GraphError::edge_spec(item, format!("bad destination vertex {dst:?}")))?;
    let weight: Weight = match weight {
        Some(w) => w
            .parse()
            .map_err(|_| GraphError::edge_spec(item, format!("bad weight {w:?}")))?,
        None => DEFAULT_WEIGHT,
    };

    check_vertex_bound(WeightedEdge::new(src, dst, weight), item)
}

fn check_vertex_bound(edge: WeightedEdge, item: &str) -> GraphResult<WeightedEdge> {
    if edge.src.max(edge.dst) >= MAX_VERTEX_COUNT {
        return Err(GraphError::edge_spec(
            item,
            format!("vertex index must be below {MAX_VERTEX_COUNT}"),
        ));
    }
    Ok(edge)
}

/// Parse comma-separated `u:v` label pairs.
pub fn parse_undirected_edges(spec: &str) -> GraphResult<Vec<(String, String)>> {
    spec.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(|item| match item.split(':').map(str::trim).collect::<Vec<_>>()[..] {
            [u, v] if !u.is_empty() && !v.is_empty() => Ok((u.to_string(), v.to_string())),
            _ => Err(GraphError::edge_spec(item, "expected u:v")),
        })
        .collect()
}

/// Read a JSON array of `{"src", "dst", "weight"?}` objects.
///
/// Vertex indices follow the same bound as inline specs.
pub fn read_directed_edges(path: &Path) -> GraphResult<Vec<WeightedEdge>> {
    let data = std::fs::read_to_string(path)?;
    let edges: Vec<WeightedEdge> = serde_json::from_str(&data)?;
    log::debug!("read {} directed edges from {}", edges.len(), path.display());
    edges
        .into_iter()
        .map(|edge| check_vertex_bound(edge, &edge.to_string()))
        .collect()
}

/// Read a JSON array of `["u", "v"]` pairs.
pub fn read_undirected_edges(path: &Path) -> GraphResult<Vec<(String, String)>> {
    let data = std::fs::read_to_string(path)?;
    let edges: Vec<(String, String)> = serde_json::from_str(&data)?;
    log::debug!("read {} undirected edges from {}", edges.len(), path.display());
    Ok(edges)
}

/// Collect directed edges from an inline spec and/or a JSON file.
pub fn load_directed_edges(
    spec: Option<&str>,
    file: Option<&Path>,
) -> GraphResult<Vec<WeightedEdge>> {
    let mut edges = match file {
        Some(path) => read_directed_edges(path)?,
        None => Vec::new(),
    };
    if let Some(spec) = spec {
        edges.extend(parse_directed_edges(spec)?);
    }
    Ok(edges)
}

/// Collect undirected edges from an inline spec and/or a JSON file.
pub fn load_undirected_edges(
    spec: Option<&str>,
    file: Option<&Path>,
) -> GraphResult<Vec<(String, String)>> {
    let mut edges = match file {
        Some(path) => read_undirected_edges(path)?,
        None => Vec::new(),
    };
    if let Some(spec) = spec {
        edges.extend(parse_undirected_edges(spec)?);
    }
    Ok(edges)
}
