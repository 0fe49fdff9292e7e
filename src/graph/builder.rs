//! Generated graphs.

use crate::types::{GraphError, GraphResult, Node};

use super::Graph;

impl Graph {
    /// Create a complete graph with `size` nodes.
    ///
    /// Edges are stored in both directions: for every pair of distinct
    /// nodes `i` and `j`, both `i -> j` and `j -> i` are present. Each node
    /// therefore has `size - 1` neighbors, in ascending order, and no
    /// self-loops.
    ///
    /// Memory grows with `size * (size - 1)`; bounding `size` is up to the
    /// caller. Fails with [`GraphError::InvalidArgument`] only if that
    /// product does not fit in a `usize`.
    ///
    /// # Examples
    /// ```
    /// # use networkg::Graph;
    /// let graph = Graph::fully_connected(3).unwrap();
    /// assert_eq!(graph.nodes(), &[vec![1, 2], vec![0, 2], vec![0, 1]]);
    /// ```
    pub fn fully_connected(size: usize) -> GraphResult<Self> {
        let degree = size.saturating_sub(1);
        let total = size.checked_mul(degree).ok_or_else(|| {
            GraphError::InvalidArgument(format!(
                "Fully connected graph of size {} has too many edges",
                size
            ))
        })?;

        let nodes: Vec<Node> = (0..size)
            .map(|n| {
                let mut neighbors = Vec::with_capacity(degree);
                neighbors.extend((0..size).filter(|&i| i != n));
                neighbors
            })
            .collect();

        log::debug!(
            "Generated fully connected graph: {} nodes, {} edges",
            size,
            total
        );
        Ok(Graph::from_nodes(nodes))
    }
}
