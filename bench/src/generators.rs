// ---------------------------------------------------------------------------
// Generators — all O(n) or O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

use graph_scc_core::{Graph, GraphBuilder, NodeId};

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: usize) -> usize {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        ((self.0 >> 33) % max as u64) as usize
    }
}

/// Builder with `node_count` vertices labelled `n0..n{node_count-1}`, so
/// that `NodeId` and label index coincide.
fn labelled(node_count: usize, edge_count: usize) -> GraphBuilder {
    let mut builder = GraphBuilder::with_capacity(node_count, edge_count);
    for i in 0..node_count {
        builder.intern(&format!("n{i}"));
    }
    builder
}

/// One directed ring through every vertex: a single SCC of size n.
///
/// Worst case for DFS depth in both Kosaraju passes.
pub fn gen_cycle(node_count: usize) -> Graph {
    let mut builder = labelled(node_count, node_count);
    for i in 0..node_count {
        builder.add_edge_ids(i, (i + 1) % node_count);
    }
    builder.build()
}

/// L-system fractal tree: every vertex spawns 3 children.
///
/// Acyclic, so every vertex is its own component. Deep paths with
/// exponential width exercise path reconstruction.
pub fn gen_lsystem(node_count: usize) -> Graph {
    let branching = 3;
    let mut builder = labelled(node_count, node_count);

    let mut next_id: NodeId = 1;
    let mut frontier: Vec<NodeId> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                builder.add_edge_ids(parent, next_id);
                next_frontier.push(next_id);
                next_id += 1;
            }
        }
        frontier = next_frontier;
    }

    builder.build()
}

/// Erdos-Renyi: ~4 uniform random out-edges per vertex.
///
/// Above the connectivity threshold, so most vertices fall into one giant
/// component with a scattering of small ones.
pub fn gen_random(node_count: usize) -> Graph {
    let target_edges = node_count * 4;
    let mut builder = labelled(node_count, target_edges);
    let mut rng = FastRng::new(54321);

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            builder.add_edge_ids(from, to);
        }
    }

    builder.build()
}

/// Barbell: two dense random clusters joined by a one-way bridge.
///
/// Each cluster is a ring plus random chords, so it is one component; the
/// bridge vertices are singletons. Paths from A to B squeeze through the bridge,
/// and nothing in B reaches A.
pub fn gen_barbell(node_count: usize) -> Graph {
    let bridge_len = 10;
    let cluster = node_count.saturating_sub(bridge_len) / 2;
    let total = cluster * 2 + bridge_len;
    let mut builder = labelled(total, cluster * 20 + bridge_len);
    let mut rng = FastRng::new(99999);

    let b_start = cluster + bridge_len;
    for offset in [0, b_start] {
        for i in 0..cluster {
            builder.add_edge_ids(offset + i, offset + (i + 1) % cluster);
            for _ in 0..19usize.min(cluster.saturating_sub(1)) {
                let target = rng.next(cluster);
                if target != i {
                    builder.add_edge_ids(offset + i, offset + target);
                }
            }
        }
    }

    // Bridge: last of A -> bridge chain -> first of B
    let mut prev = cluster.saturating_sub(1);
    for id in cluster..b_start {
        builder.add_edge_ids(prev, id);
        prev = id;
    }
    if cluster > 0 {
        builder.add_edge_ids(prev, b_start);
    }

    builder.build()
}

/// Rings of 8 vertices chained forward: ring k links to ring k+1.
///
/// The condensation is a long path, so pass 2 discovers n/8 components
/// of equal size.
pub fn gen_condensed(node_count: usize) -> Graph {
    let ring = 8;
    let rings = node_count / ring;
    let mut builder = labelled(rings * ring, rings * (ring + 1));

    for r in 0..rings {
        let base = r * ring;
        for i in 0..ring {
            builder.add_edge_ids(base + i, base + (i + 1) % ring);
        }
        if r > 0 {
            builder.add_edge_ids(base - 1, base);
        }
    }

    builder.build()
}
