use std::collections::{HashMap, HashSet};
use std::ops::Range;

/// Dense internal vertex identifier, assigned in first-appearance order.
pub type NodeId = usize;

/// Immutable directed graph over string-labelled vertices.
///
/// Labels are interned to dense `NodeId`s so that traversal scratch state
/// can live in flat vectors. Out-adjacency is a set: duplicate edges were
/// collapsed when the graph was built, and neighbor order is the order in
/// which edges were first added.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    outgoing: Vec<Vec<NodeId>>,
    edge_count: usize,
    vertex_hint: Option<i64>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// The vertex-count hint from the source header, if there was one.
    pub fn vertex_hint(&self) -> Option<i64> {
        self.vertex_hint
    }

    /// Resolve a label to its internal ID.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Resolve an internal ID back to its label.
    ///
    /// Panics if `id` was not produced by this graph.
    pub fn label(&self, id: NodeId) -> &str {
        &self.labels[id]
    }

    /// All vertex IDs, in first-appearance order.
    pub fn node_ids(&self) -> Range<NodeId> {
        0..self.labels.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    /// Out-neighbors of a vertex. Unknown IDs have none.
    pub fn neighbors_out(&self, id: NodeId) -> &[NodeId] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct out-neighbors of `label`; 0 if the vertex is unknown.
    pub fn out_degree(&self, label: &str) -> usize {
        self.node_id(label)
            .map_or(0, |id| self.neighbors_out(id).len())
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let label_bytes: usize = self.labels.iter().map(|l| l.capacity()).sum();
        // Each label is stored twice: once in `labels`, once as an index key.
        let labels_mem = label_bytes * 2 + self.labels.len() * (2 * size_of::<String>() + 16);
        let adjacency_mem = self.outgoing.len() * size_of::<Vec<NodeId>>()
            + self.edge_count * size_of::<NodeId>();

        labels_mem + adjacency_mem
    }
}

/// Accumulates vertices and edges, then freezes them into a [`Graph`].
#[derive(Debug, Default)]
pub struct GraphBuilder {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    outgoing: Vec<Vec<NodeId>>,
    seen_edges: HashSet<(NodeId, NodeId)>,
    vertex_hint: Option<i64>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Self {
        Self {
            labels: Vec::with_capacity(node_count),
            index: HashMap::with_capacity(node_count),
            outgoing: Vec::with_capacity(node_count),
            seen_edges: HashSet::with_capacity(edge_count),
            vertex_hint: None,
        }
    }

    pub fn set_vertex_hint(&mut self, hint: i64) {
        self.vertex_hint = Some(hint);
    }

    /// Intern a vertex label, returning its ID. Registers the vertex with an
    /// empty adjacency set on first sight.
    pub fn intern(&mut self, label: &str) -> NodeId {
        if let Some(&id) = self.index.get(label) {
            return id;
        }
        let id = self.labels.len();
        self.labels.push(label.to_string());
        self.index.insert(label.to_string(), id);
        self.outgoing.push(Vec::new());
        id
    }

    /// Add a directed edge between two labels, interning both endpoints.
    /// Returns false if the edge was already present.
    pub fn add_edge(&mut self, from: &str, to: &str) -> bool {
        let from = self.intern(from);
        let to = self.intern(to);
        self.add_edge_ids(from, to)
    }

    /// Add a directed edge between two already-interned vertices.
    pub fn add_edge_ids(&mut self, from: NodeId, to: NodeId) -> bool {
        if !self.seen_edges.insert((from, to)) {
            return false;
        }
        self.outgoing[from].push(to);
        true
    }

    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    pub fn edge_count(&self) -> usize {
        self.seen_edges.len()
    }

    pub fn build(self) -> Graph {
        Graph {
            edge_count: self.seen_edges.len(),
            labels: self.labels,
            index: self.index,
            outgoing: self.outgoing,
            vertex_hint: self.vertex_hint,
        }
    }
}

impl FromIterator<(String, String)> for Graph {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(edges: I) -> Self {
        let mut builder = GraphBuilder::new();
        for (from, to) in edges {
            builder.add_edge(&from, &to);
        }
        builder.build()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for Graph {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(edges: I) -> Self {
        let mut builder = GraphBuilder::new();
        for (from, to) in edges {
            builder.add_edge(from, to);
        }
        builder.build()
    }
}
