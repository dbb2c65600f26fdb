//! Strongly connected components via Kosaraju's algorithm.
//!
//! Pass 1 runs DFS over the *reverse* graph and records post-order finish
//! times. Pass 2 walks the *original* graph, starting from vertices in
//! decreasing finish time; every DFS tree it grows is one component.
//!
//! Both passes are iterative. Each stack frame is `(vertex, next neighbor
//! position)`, so depth is bounded by heap memory rather than the thread
//! stack. Roots for pass 1 are enumerated in `NodeId` order, which makes
//! the partition and its ordering deterministic for a given input. Callers
//! should still treat component order as unspecified.

use std::time::Instant;

use tracing::debug;

use crate::graph::{Graph, NodeId};
use crate::transpose::{reverse, ReverseGraph};

/// Post-order finish time assigned during pass 1.
pub type FinishTime = usize;

/// A partition of a graph's vertices into strongly connected components.
#[derive(Debug, Clone, Default)]
pub struct Components {
    /// Component member lists, in the order pass 2 discovered them.
    sets: Vec<Vec<NodeId>>,
    /// Component index for each vertex.
    component_of: Vec<usize>,
}

impl Components {
    /// Number of components.
    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Index of the component containing `id`, or None for unknown IDs.
    pub fn component_of(&self, id: NodeId) -> Option<usize> {
        self.component_of.get(id).copied()
    }

    /// Members of component `index`. Out-of-range indices have no members.
    pub fn members(&self, index: usize) -> &[NodeId] {
        self.sets.get(index).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn iter(&self) -> impl Iterator<Item = &[NodeId]> {
        self.sets.iter().map(Vec::as_slice)
    }

    /// Size of the largest component; 0 when there are none.
    pub fn largest_size(&self) -> usize {
        self.sets.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn same_component(&self, a: NodeId, b: NodeId) -> bool {
        match (self.component_of(a), self.component_of(b)) {
            (Some(ca), Some(cb)) => ca == cb,
            _ => false,
        }
    }
}

/// Partition `graph` into strongly connected components.
///
/// Isolated vertices come back as singleton components. Never fails.
pub fn compute_components(graph: &Graph) -> Components {
    let start = Instant::now();

    let reversed = reverse(graph);
    let order = finish_order(graph, &reversed);
    drop(reversed);

    let components = collect_components(graph, &order);

    debug!(
        vertices = graph.node_count(),
        components = components.len(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "computed strongly connected components"
    );
    components
}

/// Pass 1: DFS over the reverse graph from every unvisited vertex, in
/// `NodeId` order. Returns `(vertex, finish_time)` pairs sorted by
/// ascending finish time, which starts at 0 and increases by one per exit.
pub fn finish_order(graph: &Graph, reversed: &ReverseGraph) -> Vec<(NodeId, FinishTime)> {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut stack: Vec<(NodeId, usize)> = Vec::new();
    let mut order: Vec<(NodeId, FinishTime)> = Vec::with_capacity(n);

    for root in graph.node_ids() {
        if visited[root] {
            continue;
        }
        dfs_from(
            root,
            |v| reversed.neighbors_in(v),
            &mut visited,
            &mut stack,
            |v| {
                let time = order.len();
                order.push((v, time));
            },
        );
    }

    order
}

/// Pass 2: walk the original graph from vertices in decreasing finish
/// time. Each walk that starts at an unvisited vertex is a new component.
fn collect_components(graph: &Graph, order: &[(NodeId, FinishTime)]) -> Components {
    let n = graph.node_count();
    let mut visited = vec![false; n];
    let mut stack: Vec<(NodeId, usize)> = Vec::new();
    let mut sets: Vec<Vec<NodeId>> = Vec::new();
    let mut component_of = vec![0usize; n];

    for &(root, _) in order.iter().rev() {
        if visited[root] {
            continue;
        }
        let index = sets.len();
        let mut members = Vec::new();
        dfs_from(
            root,
            |v| graph.neighbors_out(v),
            &mut visited,
            &mut stack,
            |v| {
                component_of[v] = index;
                members.push(v);
            },
        );
        sets.push(members);
    }

    Components { sets, component_of }
}

/// Iterative DFS from `root`, calling `on_exit` for each newly reached
/// vertex once all of its neighbors have been explored.
///
/// `stack` is caller-owned scratch space and is empty again on return.
fn dfs_from<'g, A, F>(
    root: NodeId,
    adjacency: A,
    visited: &mut [bool],
    stack: &mut Vec<(NodeId, usize)>,
    mut on_exit: F,
) where
    A: Fn(NodeId) -> &'g [NodeId],
    F: FnMut(NodeId),
{
    visited[root] = true;
    stack.push((root, 0));

    while let Some(frame) = stack.last_mut() {
        let (v, pos) = *frame;
        let neighbors = adjacency(v);
        if pos < neighbors.len() {
            frame.1 += 1;
            let next = neighbors[pos];
            if !visited[next] {
                visited[next] = true;
                stack.push((next, 0));
            }
        } else {
            stack.pop();
            on_exit(v);
        }
    }
}
