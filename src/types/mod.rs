//! Shared types for the networkg library.

pub mod error;

pub use error::{EdgeLocation, GraphError, GraphResult};

/// The adjacency entry of a single node: neighbor indices in insertion order.
pub type Node = Vec<usize>;

/// A transient directed edge `(from, to)`. Edges are never stored as objects.
pub type EdgePair = (usize, usize);

/// Delimiter used by the edge-list reader when none is given.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Convert a signed node count coming from outside the type system.
///
/// Fails with [`GraphError::InvalidArgument`] for negative values.
pub fn checked_size(size: i64) -> GraphResult<usize> {
    usize::try_from(size).map_err(|_| {
        GraphError::InvalidArgument(format!(
            "Graph size must be non-negative, got {}",
            size
        ))
    })
}
