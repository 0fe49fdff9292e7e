//! Reads delimited edge lists into an in-memory graph.
//!
//! One edge per line, two integer node indices separated by a single
//! delimiter byte. There is no header row. Whitespace around each field is
//! trimmed and blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::graph::Graph;
use crate::types::{EdgeLocation, EdgePair, GraphError, GraphResult};

/// Streaming reader over the records of an edge list.
///
/// Yields `(line, (n1, n2))` one record at a time; lines are numbered from 1.
/// Indices are not bounds-checked here, that is the graph's job.
pub struct EdgeListReader<R> {
    inner: BufReader<R>,
    buf: Vec<u8>,
    line: usize,
    delimiter: char,
    done: bool,
}

impl<R: Read> EdgeListReader<R> {
    /// Wrap `reader`. Fails if `delimiter` cannot separate fields on a line.
    pub fn new(reader: R, delimiter: u8) -> GraphResult<Self> {
        validate_delimiter(delimiter)?;
        Ok(Self {
            inner: BufReader::new(reader),
            buf: Vec::new(),
            line: 0,
            delimiter: delimiter as char,
            done: false,
        })
    }

    /// Parse one non-blank line.
    fn parse_record(&self, text: &str) -> GraphResult<EdgePair> {
        let malformed = |reason: String| GraphError::Parse {
            line: self.line,
            record: text.to_string(),
            reason,
        };

        // Outer whitespace would become empty fields under a ' ' or '\t' delimiter.
        let fields: Vec<&str> = text.trim().split(self.delimiter).collect();
        if fields.len() != 2 {
            return Err(malformed(format!(
                "expected 2 fields, found {}",
                fields.len()
            )));
        }
        let index = |field: &str| -> GraphResult<usize> {
            let field = field.trim();
            field
                .parse::<usize>()
                .map_err(|_| malformed(format!("{:?} is not a node index", field)))
        };
        Ok((index(fields[0])?, index(fields[1])?))
    }
}

impl<R: Read> Iterator for EdgeListReader<R> {
    type Item = GraphResult<(usize, EdgePair)>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.inner.read_until(b'\n', &mut self.buf) {
                Ok(0) => self.done = true,
                Ok(_) => {
                    self.line += 1;
                    let result = match std::str::from_utf8(&self.buf) {
                        Ok(text) => {
                            let text = text.trim_end_matches(['\n', '\r']);
                            if text.trim().is_empty() {
                                continue;
                            }
                            self.parse_record(text)
                        }
                        Err(e) => Err(GraphError::Parse {
                            line: self.line,
                            record: String::from_utf8_lossy(&self.buf).trim_end().to_string(),
                            reason: format!("invalid UTF-8: {}", e),
                        }),
                    };
                    if result.is_err() {
                        self.done = true;
                    }
                    return Some(result.map(|edge| (self.line, edge)));
                }
                Err(e) => {
                    self.done = true;
                    return Some(Err(GraphError::Io(e)));
                }
            }
        }
        None
    }
}

/// Check that `delimiter` is a single ASCII byte that is neither a line
/// break nor a digit.
pub fn validate_delimiter(delimiter: u8) -> GraphResult<()> {
    if delimiter.is_ascii()
        && !delimiter.is_ascii_digit()
        && delimiter != b'\n'
        && delimiter != b'\r'
    {
        Ok(())
    } else {
        Err(GraphError::InvalidArgument(format!(
            "Invalid delimiter: {:?}. Delimiter must be a single ASCII character other than a digit or a line break.",
            delimiter as char
        )))
    }
}

/// Parse a textual delimiter, such as a command-line argument.
pub fn parse_delimiter(s: &str) -> GraphResult<u8> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => {
            let byte = c as u8;
            validate_delimiter(byte)?;
            Ok(byte)
        }
        _ => Err(GraphError::InvalidArgument(format!(
            "Invalid delimiter: {:?}. Delimiter must be a single ASCII character.",
            s
        ))),
    }
}

impl Graph {
    /// Read a graph with `size` nodes from an edge-list file.
    ///
    /// # Examples
    /// ```no_run
    /// # use networkg::Graph;
    /// # fn main() -> networkg::GraphResult<()> {
    /// let graph = Graph::from_csv("graph.csv", 10, b',')?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_csv(path: impl AsRef<Path>, size: usize, delimiter: u8) -> GraphResult<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let graph = Self::from_reader(file, size, delimiter)?;
        log::debug!(
            "Imported {} edges from {} into graph of size {}",
            graph.edge_count(),
            path.display(),
            size
        );
        Ok(graph)
    }

    /// Read a graph with `size` nodes from any edge-list source.
    ///
    /// The import is all-or-nothing: the first malformed record or
    /// out-of-range index aborts it and no graph is returned. Out-of-range
    /// errors carry the offending line as their location.
    pub fn from_reader(reader: impl Read, size: usize, delimiter: u8) -> GraphResult<Self> {
        let mut graph = Graph::new(size);
        for record in EdgeListReader::new(reader, delimiter)? {
            let (line, (n1, n2)) = record?;
            graph
                .add_edge(n1, n2)
                .map_err(|e| e.at(EdgeLocation::Line(line)))?;
        }
        Ok(graph)
    }
}
