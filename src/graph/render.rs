//! Human-readable rendering of both graph kinds.

use std::fmt::{self, Display};
use std::hash::Hash;

use crate::types::RENDER_WRAP_WIDTH;

use super::representation::WeightedAdjacency;
use super::{DirectedGraph, UndirectedGraph};

/// Renders the adjacency matrix as a grid with two-wide cells.
impl<R: WeightedAdjacency> Display for DirectedGraph<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.vertex_count();
        if count == 0 {
            return writeln!(f, "EMPTY GRAPH");
        }

        writeln!(f, "GRAPH ({count} vertices):")?;
        let header: Vec<String> = (0..count).map(|i| format!("{i:2}")).collect();
        writeln!(f, "   |{}", header.join(" "))?;
        writeln!(f, "{}", "-".repeat(count * 3 + 3))?;

        for src in 0..count {
            let cells: Vec<String> = (0..count)
                .map(|dst| format!("{:2}", self.weight(src, dst).unwrap_or(0)))
                .collect();
            writeln!(f, "{src:2} |{}", cells.join(" "))?;
        }
        Ok(())
    }
}

/// Renders `label: [neighbors]` entries, on one line when short enough.
impl<L> Display for UndirectedGraph<L>
where
    L: Clone + Eq + Hash + Ord + Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries: Vec<String> = self
            .entries()
            .map(|(v, neighbors)| {
                let listed: Vec<String> = neighbors.iter().map(ToString::to_string).collect();
                format!("{v}: [{}]", listed.join(", "))
            })
            .collect();

        let multiline = entries.join("\n  ");
        if multiline.len() < RENDER_WRAP_WIDTH {
            write!(f, "GRAPH: {{{}}}", entries.join(", "))
        } else {
            write!(f, "GRAPH: {{\n  {multiline}}}")
        }
    }
}
