//! Core graph structure — a fixed node set with per-node adjacency lists.

use serde::Serialize;

use crate::types::{EdgeLocation, EdgePair, GraphError, GraphResult, Node};

/// A directed graph represented as an adjacency list.
///
/// Nodes are densely indexed, starting at 0, so a graph with N nodes has the
/// nodes `0, 1, ..., N-1`. The node count is fixed at construction; only
/// edges can be added afterwards. Each edge `(n1, n2)` is stored once, as
/// `n2` in the adjacency entry of `n1`. Duplicate edges and self-loops are
/// kept as inserted.
///
/// # Examples
/// ```
/// # use networkg::Graph;
/// let mut graph = Graph::new(10);
///
/// assert_eq!(10, graph.size());
/// assert!(graph.nodes()[0].is_empty());
///
/// graph.add_edge(0, 9).unwrap();
/// assert_eq!(&[9], graph.neighbors(0).unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    /// Create a graph with `size` nodes and no edges.
    pub fn new(size: usize) -> Self {
        Self {
            nodes: vec![Vec::new(); size],
        }
    }

    /// Wrap adjacency entries that are already known to be in bounds.
    pub(crate) fn from_nodes(nodes: Vec<Node>) -> Self {
        debug_assert!(nodes.iter().flatten().all(|&n| n < nodes.len()));
        Self { nodes }
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored directed edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Vec::len).sum()
    }

    /// All adjacency entries, indexed by node.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Neighbors of `node`, in insertion order.
    pub fn neighbors(&self, node: usize) -> GraphResult<&[usize]> {
        self.check_index(node)?;
        Ok(&self.nodes[node])
    }

    /// Iterate over every stored edge, node by node, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = EdgePair> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .flat_map(|(n1, neighbors)| neighbors.iter().map(move |&n2| (n1, n2)))
    }

    /// Add the edge `n1 -> n2`.
    ///
    /// Fails with [`GraphError::IndexOutOfBounds`] if either endpoint is not
    /// a node of this graph; the graph is left untouched in that case.
    pub fn add_edge(&mut self, n1: usize, n2: usize) -> GraphResult<()> {
        self.check_edge(n1, n2)?;
        self.nodes[n1].push(n2);
        Ok(())
    }

    /// Add several edges at once.
    ///
    /// The whole batch is validated before anything is inserted: either
    /// every edge is added, in order, or none is. The error names the first
    /// offending pair by its zero-based position in `edges`.
    ///
    /// # Examples
    /// ```
    /// # use networkg::Graph;
    /// let mut graph = Graph::new(4);
    /// graph.add_edges([(0, 1), (0, 2), (1, 3)]).unwrap();
    /// assert_eq!(graph.nodes(), &[vec![1, 2], vec![3], vec![], vec![]]);
    ///
    /// assert!(graph.add_edges([(2, 3), (3, 4)]).is_err());
    /// assert!(graph.nodes()[2].is_empty());
    /// ```
    pub fn add_edges(&mut self, edges: impl IntoIterator<Item = EdgePair>) -> GraphResult<()> {
        let edges: Vec<EdgePair> = edges.into_iter().collect();
        for (position, &(n1, n2)) in edges.iter().enumerate() {
            self.check_edge(n1, n2)
                .map_err(|e| e.at(EdgeLocation::Batch(position)))?;
        }
        self.insert_validated(&edges);
        Ok(())
    }

    /// Add edges from a fallible source, such as a host-language iterator.
    ///
    /// Same all-or-nothing policy as [`Graph::add_edges`]. An `Err` item
    /// aborts the batch and is returned as-is after conversion.
    pub fn add_fallible_edges<E>(
        &mut self,
        edges: impl IntoIterator<Item = Result<EdgePair, E>>,
    ) -> GraphResult<()>
    where
        E: Into<GraphError>,
    {
        let edges = edges
            .into_iter()
            .collect::<Result<Vec<_>, E>>()
            .map_err(Into::into)?;
        self.add_edges(edges)
    }

    fn insert_validated(&mut self, edges: &[EdgePair]) {
        // Per-node reservation costs O(size); only worth it for large batches.
        if edges.len() < self.nodes.len() {
            for &(n1, n2) in edges {
                self.nodes[n1].push(n2);
            }
            return;
        }

        let mut added = vec![0usize; self.nodes.len()];
        for &(n1, _) in edges {
            added[n1] += 1;
        }
        for (node, extra) in self.nodes.iter_mut().zip(added) {
            node.reserve(extra);
        }
        for &(n1, n2) in edges {
            self.nodes[n1].push(n2);
        }
    }

    fn check_edge(&self, n1: usize, n2: usize) -> GraphResult<()> {
        self.check_index(n1)?;
        self.check_index(n2)
    }

    fn check_index(&self, index: usize) -> GraphResult<()> {
        if index < self.nodes.len() {
            Ok(())
        } else {
            Err(GraphError::IndexOutOfBounds {
                index,
                size: self.nodes.len(),
                location: None,
            })
        }
    }
}
