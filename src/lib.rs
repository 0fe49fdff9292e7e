//! networkg — an adjacency-list graph construction and storage engine.
//!
//! A [`Graph`] has a fixed number of densely indexed nodes and a growing
//! list of directed edges. Graphs are created empty ([`Graph::new`]),
//! complete ([`Graph::fully_connected`]) or from a delimited edge list
//! ([`Graph::from_csv`], [`Graph::from_reader`]), then extended with
//! [`Graph::add_edge`] and [`Graph::add_edges`].

pub mod cli;
pub mod format;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use format::{parse_delimiter, EdgeListReader};
pub use graph::Graph;
pub use types::{
    checked_size, EdgeLocation, EdgePair, GraphError, GraphResult, Node, DEFAULT_DELIMITER,
};
