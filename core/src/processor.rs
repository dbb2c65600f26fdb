use std::path::Path;

use crate::error::Result;
use crate::graph::Graph;
use crate::load::{load_path, parse_str, LoadOptions};
use crate::scc::{compute_components, Components};
use crate::traversal::{out_degree_ranking, shortest_path};

/// Read-only query surface over a loaded graph and its SCC partition.
///
/// The partition is computed once in the constructor, so a `GraphProcessor`
/// is fully built before any query can run. Nothing is mutated afterwards;
/// share it behind an `Arc` for concurrent readers.
///
/// Vertices that are not in the graph are a normal query outcome: they have
/// out-degree 0, no component, and no paths.
#[derive(Debug, Clone)]
pub struct GraphProcessor {
    graph: Graph,
    components: Components,
}

impl GraphProcessor {
    pub fn new(graph: Graph) -> Self {
        let components = compute_components(&graph);
        Self { graph, components }
    }

    /// Load a graph file and compute its components.
    pub fn from_path(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        Ok(Self::new(load_path(path, options)?))
    }

    /// Parse an in-memory edge list and compute its components.
    pub fn from_edge_list(input: &str, options: &LoadOptions) -> Result<Self> {
        Ok(Self::new(parse_str(input, options)?))
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn components(&self) -> &Components {
        &self.components
    }

    pub fn out_degree(&self, v: &str) -> usize {
        self.graph.out_degree(v)
    }

    /// True iff `u` and `v` are both vertices and lie in the same component.
    pub fn same_component(&self, u: &str, v: &str) -> bool {
        match (self.graph.node_id(u), self.graph.node_id(v)) {
            (Some(a), Some(b)) => self.components.same_component(a, b),
            _ => false,
        }
    }

    /// Every vertex in `v`'s component, `v` included. Empty if `v` is unknown.
    /// Member order is unspecified.
    pub fn component_vertices(&self, v: &str) -> Vec<&str> {
        let Some(index) = self
            .graph
            .node_id(v)
            .and_then(|id| self.components.component_of(id))
        else {
            return Vec::new();
        };
        self.components
            .members(index)
            .iter()
            .map(|&id| self.graph.label(id))
            .collect()
    }

    /// Size of the largest component; 0 for an empty graph.
    pub fn largest_component(&self) -> usize {
        self.components.largest_size()
    }

    pub fn num_components(&self) -> usize {
        self.components.len()
    }

    /// Fewest-hops path from `u` to `v`, inclusive of both. Empty when no
    /// path exists or either vertex is unknown; `[u]` when `u == v`.
    pub fn shortest_path(&self, u: &str, v: &str) -> Vec<&str> {
        let (Some(start), Some(target)) = (self.graph.node_id(u), self.graph.node_id(v)) else {
            return Vec::new();
        };
        shortest_path(&self.graph, start, target)
            .into_iter()
            .map(|id| self.graph.label(id))
            .collect()
    }

    /// Vertex with the most out-neighbors, with its degree. Ties go to the
    /// vertex that appeared first in the input.
    pub fn highest_out_degree(&self) -> Option<(&str, usize)> {
        out_degree_ranking(&self.graph, 1)
            .first()
            .map(|top| (self.graph.label(top.node_id), top.out_degree))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn processor(input: &str) -> GraphProcessor {
        GraphProcessor::from_edge_list(input, &LoadOptions::default()).unwrap()
    }

    fn sorted(mut v: Vec<&str>) -> Vec<&str> {
        v.sort_unstable();
        v
    }

    #[test]
    fn test_three_cycle() {
        let p = processor("3\nA B\nB C\nC A");
        assert_eq!(p.num_components(), 1);
        assert_eq!(p.largest_component(), 3);
        assert_eq!(p.shortest_path("A", "C"), vec!["A", "B", "C"]);
        assert_eq!(sorted(p.component_vertices("B")), vec!["A", "B", "C"]);
        assert!(p.same_component("A", "C"));
    }

    #[test]
    fn test_single_edge() {
        let p = processor("2\nA B");
        assert_eq!(p.num_components(), 2);
        assert_eq!(p.largest_component(), 1);
        assert!(!p.same_component("A", "B"));
        assert_eq!(p.component_vertices("A"), vec!["A"]);
        assert_eq!(p.shortest_path("A", "B"), vec!["A", "B"]);
        assert!(p.shortest_path("B", "A").is_empty());
    }

    #[test]
    fn test_unknown_vertex() {
        let p = processor("2\nA B");
        assert_eq!(p.out_degree("Z"), 0);
        assert!(p.component_vertices("Z").is_empty());
        assert!(!p.same_component("Z", "A"));
        assert!(!p.same_component("Z", "Z"));
        assert!(p.shortest_path("Z", "Z").is_empty());
        assert!(p.shortest_path("A", "Z").is_empty());
    }

    #[test]
    fn test_same_component_reflexive() {
        let p = processor("2\nA B");
        assert!(p.same_component("A", "A"));
    }

    #[test]
    fn test_shortest_path_to_self() {
        let p = processor("2\nA B");
        assert_eq!(p.shortest_path("B", "B"), vec!["B"]);
    }

    #[test]
    fn test_empty_graph() {
        let p = processor("0");
        assert_eq!(p.num_components(), 0);
        assert_eq!(p.largest_component(), 0);
        assert_eq!(p.highest_out_degree(), None);
    }

    #[test]
    fn test_highest_out_degree() {
        let p = processor("4\nA B\nC A\nC B\nC D\nA C");
        assert_eq!(p.highest_out_degree(), Some(("C", 3)));
    }

    #[test]
    fn test_highest_out_degree_tie_goes_to_first_seen() {
        let p = processor("2\nA B\nB A");
        assert_eq!(p.highest_out_degree(), Some(("A", 1)));
    }

    #[test]
    fn test_processor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphProcessor>();
    }
}
