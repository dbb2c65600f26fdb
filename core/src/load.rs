//! Edge-list loader.
//!
//! Source format: the first line is an integer vertex-count hint; every
//! following non-blank line is `<from> <to>`, split at the first run of
//! whitespace. Lines are trimmed before parsing. This is the format the
//! site crawler writes, one discovered edge per line in discovery order.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::error::{GraphError, Result};
use crate::graph::{Graph, GraphBuilder};

/// Upper bound on how much the header hint may pre-allocate.
const MAX_HINT_CAPACITY: usize = 1 << 20;

/// What to do when the header's vertex count disagrees with the edge list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HintPolicy {
    /// Treat the header purely as a capacity hint.
    Ignore,
    /// Log a warning and keep the graph.
    #[default]
    Warn,
    /// Fail the load with [`GraphError::HintMismatch`].
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    pub hint_policy: HintPolicy,
}

impl LoadOptions {
    pub fn with_hint_policy(mut self, hint_policy: HintPolicy) -> Self {
        self.hint_policy = hint_policy;
        self
    }
}

/// Load a graph from a file on disk.
pub fn load_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Graph> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GraphError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from(BufReader::new(file), options, Some(path))
}

/// Load a graph from any buffered reader.
pub fn load_reader<R: BufRead>(reader: R, options: &LoadOptions) -> Result<Graph> {
    load_from(reader, options, None)
}

/// Load a graph from an in-memory string.
pub fn parse_str(input: &str, options: &LoadOptions) -> Result<Graph> {
    load_reader(input.as_bytes(), options)
}

fn load_from<R: BufRead>(
    reader: R,
    options: &LoadOptions,
    origin: Option<&Path>,
) -> Result<Graph> {
    let start = Instant::now();
    let io_err = |source: std::io::Error| match origin {
        Some(path) => GraphError::Io {
            path: path.to_path_buf(),
            source,
        },
        None => GraphError::Read { source },
    };

    let mut lines = reader.lines();

    let hint = match lines.next() {
        Some(first) => Some(parse_header(&first.map_err(io_err)?)?),
        None => None,
    };

    let capacity = hint
        .and_then(|h| usize::try_from(h).ok())
        .unwrap_or(0)
        .min(MAX_HINT_CAPACITY);
    let mut builder = GraphBuilder::with_capacity(capacity, capacity);
    if let Some(h) = hint {
        builder.set_vertex_hint(h);
    }

    let mut duplicates = 0usize;
    for (idx, line) in lines.enumerate() {
        let line = line.map_err(io_err)?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Line 1 is the header, so edge lines start at 2.
        let (from, to) = parse_edge(line).ok_or_else(|| GraphError::MalformedEdge {
            line: idx + 2,
            content: line.to_string(),
        })?;
        if !builder.add_edge(from, to) {
            duplicates += 1;
        }
    }

    debug!(
        vertices = builder.node_count(),
        edges = builder.edge_count(),
        duplicates,
        parse_ms = start.elapsed().as_secs_f64() * 1000.0,
        "parsed edge list"
    );

    let graph = builder.build();
    if let Some(declared) = hint {
        check_hint(declared, graph.node_count(), options.hint_policy)?;
    }

    info!(
        vertices = graph.node_count(),
        edges = graph.edge_count(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "graph loaded"
    );
    Ok(graph)
}

fn parse_header(line: &str) -> Result<i64> {
    let value = line.trim();
    value.parse::<i64>().map_err(|_| GraphError::InvalidHeader {
        value: value.to_string(),
    })
}

/// Split a trimmed line at its first whitespace run. The target keeps any
/// interior whitespace that follows.
fn parse_edge(line: &str) -> Option<(&str, &str)> {
    let (from, rest) = line.split_once(char::is_whitespace)?;
    Some((from, rest.trim()))
}

fn check_hint(declared: i64, actual: usize, policy: HintPolicy) -> Result<()> {
    let matches = usize::try_from(declared).is_ok_and(|d| d == actual);
    if matches {
        return Ok(());
    }
    match policy {
        HintPolicy::Ignore => Ok(()),
        HintPolicy::Warn => {
            warn!(declared, actual, "vertex-count header does not match edge list");
            Ok(())
        }
        HintPolicy::Reject => Err(GraphError::HintMismatch { declared, actual }),
    }
}
