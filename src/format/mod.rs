//! Edge-list import.

pub mod reader;

pub use reader::{parse_delimiter, validate_delimiter, EdgeListReader};
