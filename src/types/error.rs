//! Error types for the networkg library.

use std::fmt;

use thiserror::Error;

/// Where an out-of-range edge came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeLocation {
    /// Zero-based index of the pair within an `add_edges` batch.
    Batch(usize),
    /// One-based line number in an imported edge list.
    Line(usize),
}

impl fmt::Display for EdgeLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Batch(i) => write!(f, "at batch position {}", i),
            Self::Line(n) => write!(f, "on line {}", n),
        }
    }
}

/// All errors that can occur while building or mutating a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Malformed construction parameter (negative size, bad delimiter, ...).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An edge endpoint outside `[0, size)`.
    #[error("Node index {index} out of bounds for graph of size {size} (valid range [0, {size})){}", fmt_location(.location))]
    IndexOutOfBounds {
        index: usize,
        size: usize,
        location: Option<EdgeLocation>,
    },

    /// A malformed record in an imported edge list.
    #[error("Parse error on line {line}: {reason} (record: {record:?})")]
    Parse {
        line: usize,
        record: String,
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GraphError {
    /// Attach a batch position or line number to an out-of-bounds error.
    pub(crate) fn at(self, at: EdgeLocation) -> Self {
        match self {
            Self::IndexOutOfBounds { index, size, .. } => Self::IndexOutOfBounds {
                index,
                size,
                location: Some(at),
            },
            other => other,
        }
    }
}

fn fmt_location(location: &Option<EdgeLocation>) -> String {
    match location {
        Some(at) => format!(" {}", at),
        None => String::new(),
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
