//! Edge-list text input
//!
//! # Format
//!
//! One directed edge per line, two whitespace-separated integers:
//!
//! ```text
//! # comment lines and blank lines are ignored
//! 1 2
//! 1 3   trailing text after the pair is ignored
//! 3 1
//! ```
//!
//! Each id is read as an optional sign followed by digits, and reading stops
//! at the first other character, so `1 2#weight` and `1 2.5` both load as
//! `1 → 2`. Lines that do not start with two integers are skipped silently;
//! only their count is reported. Failing to open or read the source is the one
//! error condition, and it leaves the loading graph empty.

use super::builder::CsrBuilder;
use super::csr::CsrGraph;
use super::index::NodeId;
use crate::error::{GraphError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::time::{Duration, Instant};
use tokio::io::AsyncBufReadExt;
use tracing::{error, info, instrument};

/// Default comment marker
pub const DEFAULT_COMMENT_PREFIX: &str = "#";

/// Edges parsed from a source, plus the number of malformed lines skipped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedEdges {
    /// Edge pairs in source order
    pub edges: Vec<(NodeId, NodeId)>,
    /// Non-comment, non-blank lines that did not parse as an edge
    pub skipped_lines: usize,
}

/// Outcome of a successful load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Distinct nodes
    pub nodes: usize,
    /// Edges (duplicates included)
    pub edges: usize,
    /// Malformed lines skipped
    pub skipped_lines: usize,
    /// Wall time spent reading and building
    pub elapsed: Duration,
}

enum Line {
    Edge(NodeId, NodeId),
    Ignored,
    Malformed,
}

/// Configurable edge-list parser
///
/// # Example
///
/// ```
/// use sparse_graph::{EdgeListReader, NodeId};
///
/// let text = "% header\n1 2\n2 x\n";
/// let parsed = EdgeListReader::new()
///     .comment_prefix("%")
///     .read(text.as_bytes())
///     .unwrap();
///
/// assert_eq!(parsed.edges, vec![(NodeId(1), NodeId(2))]);
/// assert_eq!(parsed.skipped_lines, 1);
/// ```
#[derive(Debug, Clone)]
pub struct EdgeListReader {
    comment_prefix: String,
}

impl EdgeListReader {
    /// Reader with the default `#` comment marker
    #[must_use]
    pub fn new() -> Self {
        Self {
            comment_prefix: DEFAULT_COMMENT_PREFIX.to_string(),
        }
    }

    /// Use a different comment marker (an empty marker disables comments)
    #[must_use]
    pub fn comment_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.comment_prefix = prefix.into();
        self
    }

    /// Parse a single line, `None` for comments, blanks and malformed lines
    #[must_use]
    pub fn parse_line(&self, line: &str) -> Option<(NodeId, NodeId)> {
        match self.classify(line) {
            Line::Edge(src, dst) => Some((src, dst)),
            Line::Ignored | Line::Malformed => None,
        }
    }

    /// Read every edge from a buffered source
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so such lines count
    /// as malformed.
    ///
    /// # Errors
    ///
    /// Returns any I/O error raised by the underlying reader
    pub fn read<R: BufRead>(&self, reader: R) -> io::Result<ParsedEdges> {
        let mut parsed = ParsedEdges::default();

        for segment in reader.split(b'\n') {
            let segment = segment?;
            self.accept(&String::from_utf8_lossy(&segment), &mut parsed);
        }

        Ok(parsed)
    }

    /// Read every edge from a file asynchronously
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be opened or read
    pub async fn read_path_async(&self, path: &Path) -> io::Result<ParsedEdges> {
        let file = tokio::fs::File::open(path).await?;
        let mut segments = tokio::io::BufReader::new(file).split(b'\n');
        let mut parsed = ParsedEdges::default();

        while let Some(segment) = segments.next_segment().await? {
            self.accept(&String::from_utf8_lossy(&segment), &mut parsed);
        }

        Ok(parsed)
    }

    fn accept(&self, line: &str, parsed: &mut ParsedEdges) {
        match self.classify(line) {
            Line::Edge(src, dst) => parsed.edges.push((src, dst)),
            Line::Ignored => {}
            Line::Malformed => parsed.skipped_lines += 1,
        }
    }

    fn classify(&self, line: &str) -> Line {
        if line.trim().is_empty() {
            return Line::Ignored;
        }
        if !self.comment_prefix.is_empty() && line.starts_with(&self.comment_prefix) {
            return Line::Ignored;
        }

        let Some((src, rest)) = leading_int(line) else {
            return Line::Malformed;
        };
        match leading_int(rest) {
            Some((dst, _)) => Line::Edge(NodeId(src), NodeId(dst)),
            None => Line::Malformed,
        }
    }
}

/// Skip leading whitespace, then read `[+-]?[0-9]+`; returns the value and
/// the unread remainder
fn leading_int(input: &str) -> Option<(i64, &str)> {
    let input = input.trim_start();
    let sign = usize::from(input.starts_with(|c: char| c == '+' || c == '-'));
    let digits = input[sign..].bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }

    let (number, rest) = input.split_at(sign + digits);
    number.parse().ok().map(|value| (value, rest))
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one line with the default `#` comment marker
#[must_use]
pub fn parse_edge_line(line: &str) -> Option<(NodeId, NodeId)> {
    EdgeListReader::new().parse_line(line)
}

impl CsrGraph {
    /// Build a graph from an edge-list file
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if the file cannot be opened or read
    #[instrument(level = "debug", skip_all, fields(path = %path.display()))]
    pub fn from_edge_file(path: &Path) -> Result<(Self, LoadSummary)> {
        let started = Instant::now();

        let parsed = File::open(path)
            .and_then(|file| EdgeListReader::new().read(BufReader::new(file)))
            .map_err(|source| GraphError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::finish_load(parsed, started))
    }

    /// Build a graph from an edge-list file using async I/O
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if the file cannot be opened or read
    pub async fn read_edge_list<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let started = Instant::now();

        let parsed = EdgeListReader::new()
            .read_path_async(path)
            .await
            .map_err(|source| {
                error!(path = %path.display(), error = %source, "cannot read edge list");
                GraphError::Io {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        Ok(Self::finish_load(parsed, started).0)
    }

    /// Replace this graph with the contents of an edge-list file
    ///
    /// On failure the graph is reset to the empty state before the error is
    /// returned, so it is always queryable.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if the file cannot be opened or read
    pub fn load_from_path(&mut self, path: &Path) -> Result<LoadSummary> {
        match Self::from_edge_file(path) {
            Ok((graph, summary)) => {
                *self = graph;
                Ok(summary)
            }
            Err(err) => {
                *self = Self::new();
                error!(path = %path.display(), error = %err, "load failed, graph left empty");
                Err(err)
            }
        }
    }

    fn finish_load(parsed: ParsedEdges, started: Instant) -> (Self, LoadSummary) {
        let ParsedEdges {
            edges,
            skipped_lines,
        } = parsed;

        let graph: Self = edges.into_iter().collect::<CsrBuilder>().build();
        let summary = LoadSummary {
            nodes: graph.num_nodes(),
            edges: graph.num_edges(),
            skipped_lines,
            elapsed: started.elapsed(),
        };

        info!(
            nodes = summary.nodes,
            edges = summary.edges,
            skipped_lines,
            elapsed_ms = u64::try_from(summary.elapsed.as_millis()).unwrap_or(u64::MAX),
            memory_bytes = graph.memory_estimate(),
            "edge list loaded into CSR"
        );

        (graph, summary)
    }
}
