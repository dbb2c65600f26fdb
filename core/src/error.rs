use std::path::PathBuf;

/// Errors raised while loading a graph. Queries against a loaded graph never fail.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Reading a graph file failed.
    #[error("failed to read graph file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from an in-memory source or caller-supplied reader failed.
    #[error("failed to read graph input: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    /// The first line is not an integer vertex-count hint.
    #[error("invalid header: expected an integer vertex count, found {value:?}")]
    InvalidHeader { value: String },

    /// An edge line has no whitespace separating its two endpoints.
    #[error("malformed edge on line {line}: {content:?}")]
    MalformedEdge { line: usize, content: String },

    /// The vertex-count hint disagrees with the loaded graph (`HintPolicy::Reject` only).
    #[error("header declares {declared} vertices but the edge list defines {actual}")]
    HintMismatch { declared: i64, actual: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
