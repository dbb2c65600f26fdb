use std::collections::{HashMap, VecDeque};

use crate::graph::{Graph, NodeId};

/// Parent pointers from a single-source BFS. The root maps to `None`.
pub type BfsTree = HashMap<NodeId, Option<NodeId>>;

/// Out-degree information for a single vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegreeResult {
    pub node_id: NodeId,
    pub label: String,
    pub out_degree: usize,
}

/// Breadth-first search from `start` over out-edges.
///
/// Each reachable vertex records the parent it was first discovered from.
/// BFS dequeues in non-decreasing distance, so first discovery is along a
/// shortest path. Returns an empty tree if `start` is not in the graph.
pub fn bfs_tree(graph: &Graph, start: NodeId) -> BfsTree {
    let mut tree: BfsTree = HashMap::new();
    if start >= graph.node_count() {
        return tree;
    }

    let mut queue: VecDeque<NodeId> = VecDeque::new();
    tree.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &next in graph.neighbors_out(current) {
            if !tree.contains_key(&next) {
                tree.insert(next, Some(current));
                queue.push_back(next);
            }
        }
    }

    tree
}

/// Fewest-hops path from `start` to `target`, both endpoints included.
///
/// Returns an empty path if either vertex is absent or `target` is not
/// reachable, and `[start]` when `start == target`. Among several shortest
/// paths the one chosen follows adjacency insertion order; callers should
/// not rely on which one that is.
pub fn shortest_path(graph: &Graph, start: NodeId, target: NodeId) -> Vec<NodeId> {
    if start >= graph.node_count() || target >= graph.node_count() {
        return Vec::new();
    }
    if start == target {
        return vec![start];
    }

    let tree = bfs_tree(graph, start);
    reconstruct_path(&tree, target)
}

/// Walk parent pointers from `target` back to the root, then reverse.
fn reconstruct_path(tree: &BfsTree, target: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(target);

    while let Some(node) = current {
        match tree.get(&node) {
            Some(&parent) => {
                path.push(node);
                current = parent;
            }
            // Target never discovered.
            None => return Vec::new(),
        }
    }

    path.reverse();
    path
}

/// Rank vertices by out-degree.
///
/// If `top_n` is 0, returns all vertices. Otherwise returns the top N by
/// out-degree (descending). Ties are broken by node ID (ascending).
pub fn out_degree_ranking(graph: &Graph, top_n: usize) -> Vec<DegreeResult> {
    let mut results: Vec<DegreeResult> = graph
        .node_ids()
        .map(|id| DegreeResult {
            node_id: id,
            label: graph.label(id).to_string(),
            out_degree: graph.neighbors_out(id).len(),
        })
        .collect();

    results.sort_by(|a, b| {
        b.out_degree
            .cmp(&a.out_degree)
            .then(a.node_id.cmp(&b.node_id))
    });

    if top_n > 0 && top_n < results.len() {
        results.truncate(top_n);
    }

    results
}
