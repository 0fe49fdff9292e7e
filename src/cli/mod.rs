//! Command-line interface support for the `netg` binary.

pub mod commands;
