use crate::graph::{Graph, NodeId};

/// In-adjacency of a [`Graph`]: `incoming[v]` holds every `u` with an edge `u -> v`.
///
/// Only needed while computing components; callers drop it afterwards.
#[derive(Debug, Clone)]
pub struct ReverseGraph {
    incoming: Vec<Vec<NodeId>>,
}

impl ReverseGraph {
    pub fn node_count(&self) -> usize {
        self.incoming.len()
    }

    pub fn neighbors_in(&self, id: NodeId) -> &[NodeId] {
        self.incoming.get(id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Build the transpose of `graph`. Every vertex of `graph` has an entry,
/// including vertices nothing points to.
pub fn reverse(graph: &Graph) -> ReverseGraph {
    let mut incoming: Vec<Vec<NodeId>> = vec![Vec::new(); graph.node_count()];
    for from in graph.node_ids() {
        for &to in graph.neighbors_out(from) {
            incoming[to].push(from);
        }
    }
    ReverseGraph { incoming }
}
