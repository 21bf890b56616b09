#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! A parser for plain-text weighted edge lists.
//!
//! Each line holds one edge as three whitespace-separated tokens:
//!
//! ```text
//! <source-label> <target-label> <weight>
//! ```
//!
//! The weight is any finite real number (`2`, `-1.5`, `1e3`). Blank lines are
//! ignored. A line with the wrong number of tokens, or whose weight does not parse
//! as a finite number, is skipped with a warning and recorded in the returned
//! [`Loaded`] report; loading carries on with the next line.
//!
//! Loading fails only when the input cannot be read at all, or when no edge
//! survived and the vertex set is therefore empty.

use crate::error::GraphError;
use crate::graph::Graph;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Why a line of the edge list was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The line did not have exactly three tokens.
    TokenCount(usize),
    /// The weight token is not a finite real number.
    InvalidWeight(String),
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TokenCount(found) => write!(f, "expected 3 tokens, found {found}"),
            Self::InvalidWeight(token) => write!(f, "invalid weight '{token}'"),
        }
    }
}

/// A skipped input line, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number.
    pub line: usize,
    /// What was wrong with it.
    pub reason: SkipReason,
}

/// The result of a successful load.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    /// The parsed graph, never empty.
    pub graph: Graph,
    /// Lines that were ignored, in input order.
    pub skipped: Vec<SkippedLine>,
}

/// Parses one non-blank line into an edge triple.
fn parse_line(line: &str) -> Result<Option<(&str, &str, f64)>, SkipReason> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    match parts.as_slice() {
        [] => Ok(None),
        [source, target, weight] => {
            let weight = weight
                .parse::<f64>()
                .ok()
                .filter(|w| w.is_finite())
                .ok_or_else(|| SkipReason::InvalidWeight((*weight).to_string()))?;
            Ok(Some((*source, *target, weight)))
        }
        other => Err(SkipReason::TokenCount(other.len())),
    }
}

/// Parses an edge list from any `BufRead` source.
///
/// `origin` only labels I/O errors and diagnostics.
///
/// # Errors
///
/// - [`GraphError::Io`] if a line cannot be read (I/O failure, invalid UTF-8).
/// - [`GraphError::Empty`] if no valid edge was found.
pub fn parse_edges<R: BufRead>(reader: R, origin: &Path) -> Result<Loaded, GraphError> {
    let mut triples = Vec::new();
    let mut skipped = Vec::new();

    for (i, line) in reader.lines().enumerate() {
        let line_num = i + 1;
        let line = line.map_err(|source| GraphError::Io {
            path: origin.to_path_buf(),
            source,
        })?;

        match parse_line(&line) {
            Ok(Some((source, target, weight))) => {
                triples.push((source.to_owned(), target.to_owned(), weight));
            }
            Ok(None) => {}
            Err(reason) => {
                tracing::warn!(
                    origin = %origin.display(),
                    line = line_num,
                    "skipping malformed edge line: {reason}"
                );
                skipped.push(SkippedLine {
                    line: line_num,
                    reason,
                });
            }
        }
    }

    let graph = Graph::from_edges(triples);
    if graph.is_empty() {
        return Err(GraphError::Empty);
    }

    tracing::debug!(
        origin = %origin.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        skipped = skipped.len(),
        "graph loaded"
    );

    Ok(Loaded { graph, skipped })
}

/// Parses an edge list held in a string.
///
/// # Errors
///
/// [`GraphError::Empty`] if no valid edge was found.
pub fn parse_str(input: &str) -> Result<Loaded, GraphError> {
    parse_edges(input.as_bytes(), Path::new("<input>"))
}

/// Opens and parses an edge-list file.
///
/// # Errors
///
/// - [`GraphError::Io`] if the file cannot be opened or read.
/// - [`GraphError::Empty`] if no valid edge was found.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Loaded, GraphError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GraphError::Io {
        path: PathBuf::from(path),
        source,
    })?;
    parse_edges(BufReader::new(file), path)
}
