//! graph-scc-core: Directed-graph analysis engine.
//!
//! Loads an edge-list file into an immutable adjacency list, partitions it
//! into strongly connected components with Kosaraju's algorithm, and
//! answers out-degree, component-membership and fewest-hops path queries.
//!
//! [`GraphProcessor`] is the usual entry point. The lower-level modules are
//! public for benchmarking and for callers that only need one piece.

mod error;
mod graph;
mod load;
mod processor;
mod scc;
mod transpose;
mod traversal;

pub use error::{GraphError, Result};
pub use graph::{Graph, GraphBuilder, NodeId};
pub use load::{load_path, load_reader, parse_str, HintPolicy, LoadOptions};
pub use processor::GraphProcessor;
pub use scc::{compute_components, finish_order, Components, FinishTime};
pub use transpose::{reverse, ReverseGraph};
pub use traversal::{bfs_tree, out_degree_ranking, shortest_path, BfsTree, DegreeResult};
