//! CLI entry point for the `sgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};

use simple_graphs::cli::commands::{self, DirectedQuery, UndirectedQuery};
use simple_graphs::cli::input;
use simple_graphs::graph::TraversalOrder;
use simple_graphs::types::VertexId;
use simple_graphs::GraphError;

#[derive(Parser)]
#[command(
    name = "sgraph",
    about = "Run graph algorithms over small in-memory graphs"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Directed weighted graph over vertices 0..n
    Directed {
        /// Comma-separated edges, each src:dst[:weight]
        #[arg(long)]
        edges: Option<String>,
        /// JSON file holding [{"src": 0, "dst": 1, "weight": 10}, ...]
        #[arg(long)]
        edges_file: Option<PathBuf>,
        /// Store edges in a sparse map instead of a dense matrix
        #[arg(long)]
        sparse: bool,
        #[command(subcommand)]
        op: DirectedOp,
    },
    /// Undirected graph over string labels
    Undirected {
        /// Comma-separated edges, each u:v
        #[arg(long)]
        edges: Option<String>,
        /// JSON file holding [["A", "B"], ...]
        #[arg(long)]
        edges_file: Option<PathBuf>,
        /// Remove this vertex (and its edges) before running the query
        #[arg(long)]
        remove_vertex: Vec<String>,
        #[command(subcommand)]
        op: UndirectedOp,
    },
}

#[derive(Args)]
struct VertexEndpoints {
    /// Start vertex
    start: VertexId,
    /// Stop once this vertex is visited
    #[arg(long)]
    end: Option<VertexId>,
}

#[derive(Args)]
struct LabelEndpoints {
    /// Start label
    start: String,
    /// Stop once this label is visited
    #[arg(long)]
    end: Option<String>,
}

#[derive(Subcommand)]
enum DirectedOp {
    /// Print the adjacency matrix
    Show,
    /// List vertices
    Vertices,
    /// List edges
    Edges,
    /// Check whether the given vertices form a path
    Path {
        /// Vertices in order
        vertices: Vec<VertexId>,
    },
    /// Depth-first traversal
    Dfs(VertexEndpoints),
    /// Breadth-first traversal
    Bfs(VertexEndpoints),
    /// Report whether the graph has a cycle
    Cycle,
    /// Shortest distances from a source vertex
    Dijkstra {
        /// Source vertex
        src: VertexId,
    },
}

#[derive(Subcommand)]
enum UndirectedOp {
    /// Print the adjacency list
    Show,
    /// List vertices
    Vertices,
    /// List edges
    Edges,
    /// Check whether the given labels form a path
    Path {
        /// Labels in order
        vertices: Vec<String>,
    },
    /// Depth-first traversal
    Dfs(LabelEndpoints),
    /// Breadth-first traversal
    Bfs(LabelEndpoints),
    /// Count connected components
    Components,
    /// Report whether the graph has a cycle
    Cycle,
}

impl From<DirectedOp> for DirectedQuery {
    fn from(op: DirectedOp) -> Self {
        match op {
            DirectedOp::Show => Self::Show,
            DirectedOp::Vertices => Self::Vertices,
            DirectedOp::Edges => Self::Edges,
            DirectedOp::Path { vertices } => Self::Path(vertices),
            DirectedOp::Dfs(VertexEndpoints { start, end }) => Self::Traverse {
                order: TraversalOrder::DepthFirst,
                start,
                end,
            },
            DirectedOp::Bfs(VertexEndpoints { start, end }) => Self::Traverse {
                order: TraversalOrder::BreadthFirst,
                start,
                end,
            },
            DirectedOp::Cycle => Self::Cycle,
            DirectedOp::Dijkstra { src } => Self::Dijkstra(src),
        }
    }
}

impl From<UndirectedOp> for UndirectedQuery {
    fn from(op: UndirectedOp) -> Self {
        match op {
            UndirectedOp::Show => Self::Show,
            UndirectedOp::Vertices => Self::Vertices,
            UndirectedOp::Edges => Self::Edges,
            UndirectedOp::Path { vertices } => Self::Path(vertices),
            UndirectedOp::Dfs(LabelEndpoints { start, end }) => Self::Traverse {
                order: TraversalOrder::DepthFirst,
                start,
                end,
            },
            UndirectedOp::Bfs(LabelEndpoints { start, end }) => Self::Traverse {
                order: TraversalOrder::BreadthFirst,
                start,
                end,
            },
            UndirectedOp::Components => Self::Components,
            UndirectedOp::Cycle => Self::Cycle,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let result = match cli.command {
        Commands::Directed {
            edges,
            edges_file,
            sparse,
            op,
        } => input::load_directed_edges(edges.as_deref(), edges_file.as_deref()).and_then(
            |edges| commands::cmd_directed(edges, sparse, &DirectedQuery::from(op), json),
        ),
        Commands::Undirected {
            edges,
            edges_file,
            remove_vertex,
            op,
        } => input::load_undirected_edges(edges.as_deref(), edges_file.as_deref()).and_then(
            |edges| {
                commands::cmd_undirected(edges, &remove_vertex, &UndirectedQuery::from(op), json)
            },
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::InvalidEdgeSpec { .. } | GraphError::Json(_) => 2,
            _ => 5,
        };
        process::exit(code);
    }
}
