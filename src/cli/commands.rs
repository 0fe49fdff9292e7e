//! CLI command implementations.

use std::path::Path;

use serde::Serialize;

use crate::graph::Graph;
use crate::types::{GraphError, GraphResult};

/// Summary figures printed by `netg info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
    pub self_loops: usize,
    pub max_out_degree: usize,
    pub isolated_nodes: usize,
}

impl GraphStats {
    /// Compute the summary for `graph`.
    pub fn of(graph: &Graph) -> Self {
        let mut in_degree = vec![0usize; graph.size()];
        for (_, to) in graph.edges() {
            in_degree[to] += 1;
        }
        Self {
            nodes: graph.size(),
            edges: graph.edge_count(),
            self_loops: graph.edges().filter(|(a, b)| a == b).count(),
            max_out_degree: graph.nodes().iter().map(Vec::len).max().unwrap_or(0),
            isolated_nodes: graph
                .nodes()
                .iter()
                .zip(&in_degree)
                .filter(|(out, inc)| out.is_empty() && **inc == 0)
                .count(),
        }
    }
}

/// Process exit code for a failed command.
///
/// 1: I/O, 2: malformed input, 3: invalid argument, 4: node index out of range.
pub fn exit_code(err: &GraphError) -> i32 {
    match err {
        GraphError::Io(_) => 1,
        GraphError::Parse { .. } => 2,
        GraphError::InvalidArgument(_) => 3,
        GraphError::IndexOutOfBounds { .. } => 4,
    }
}

/// Display summary statistics for an edge-list file.
pub fn cmd_info(path: &Path, size: usize, delimiter: u8, json: bool) -> GraphResult<()> {
    let graph = Graph::from_csv(path, size, delimiter)?;
    println!("{}", render_info(path, &GraphStats::of(&graph), json));
    Ok(())
}

/// Import an edge-list file and print its adjacency lists as JSON.
pub fn cmd_import(path: &Path, size: usize, delimiter: u8, pretty: bool) -> GraphResult<()> {
    let graph = Graph::from_csv(path, size, delimiter)?;
    println!("{}", render_adjacency(&graph, pretty));
    Ok(())
}

/// Print the fully connected graph with `size` nodes as JSON.
pub fn cmd_complete(size: usize, pretty: bool) -> GraphResult<()> {
    let graph = Graph::fully_connected(size)?;
    println!("{}", render_adjacency(&graph, pretty));
    Ok(())
}

/// Print the neighbors of one node of an imported graph.
pub fn cmd_neighbors(
    path: &Path,
    size: usize,
    delimiter: u8,
    node: usize,
    json: bool,
) -> GraphResult<()> {
    let graph = Graph::from_csv(path, size, delimiter)?;
    println!("{}", render_neighbors(node, graph.neighbors(node)?, json));
    Ok(())
}

/// Output of `netg info`.
pub fn render_info(path: &Path, stats: &GraphStats, json: bool) -> String {
    if json {
        let info = serde_json::json!({
            "file": path.display().to_string(),
            "stats": stats,
        });
        serde_json::to_string_pretty(&info).unwrap_or_default()
    } else {
        format!(
            "File: {}\nNodes: {}\nEdges: {}\nSelf-loops: {}\nMax out-degree: {}\nIsolated nodes: {}",
            path.display(),
            stats.nodes,
            stats.edges,
            stats.self_loops,
            stats.max_out_degree,
            stats.isolated_nodes
        )
    }
}

/// Adjacency lists as JSON, as printed by `netg import` and `netg complete`.
pub fn render_adjacency(graph: &Graph, pretty: bool) -> String {
    let out = if pretty {
        serde_json::to_string_pretty(graph)
    } else {
        serde_json::to_string(graph)
    };
    out.unwrap_or_default()
}

/// Output of `netg neighbors`.
pub fn render_neighbors(node: usize, neighbors: &[usize], json: bool) -> String {
    if json {
        serde_json::json!({"node": node, "neighbors": neighbors}).to_string()
    } else {
        let list: Vec<String> = neighbors.iter().map(usize::to_string).collect();
        format!("Node {}: {}", node, list.join(" "))
    }
}
