use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use graph_scc_core::{GraphProcessor, HintPolicy, LoadOptions};
use tracing::info;

/// Load `file` and print the summary the crawl analysis needs: size,
/// highest out-degree vertex, component count and largest component.
pub fn run(file: &Path, hint_policy: HintPolicy, path: Option<&(String, String)>) -> Result<()> {
    let options = LoadOptions::default().with_hint_policy(hint_policy);

    let t = Instant::now();
    let processor = GraphProcessor::from_path(file, &options)
        .with_context(|| format!("loading graph from {}", file.display()))?;
    info!(
        file = %file.display(),
        elapsed_ms = t.elapsed().as_secs_f64() * 1000.0,
        "graph ready"
    );

    let graph = processor.graph();
    println!("File:               {}", file.display());
    match graph.vertex_hint() {
        Some(hint) => println!("Declared vertices:  {}", hint),
        None => println!("Declared vertices:  (no header)"),
    }
    println!("Vertices:           {}", graph.node_count());
    println!("Edges:              {}", graph.edge_count());
    match processor.highest_out_degree() {
        Some((label, degree)) => println!("Highest out-degree: {} ({})", label, degree),
        None => println!("Highest out-degree: (empty graph)"),
    }
    println!("Components:         {}", processor.num_components());
    println!("Largest component:  {}", processor.largest_component());

    if let Some((from, to)) = path {
        let steps = processor.shortest_path(from, to);
        println!();
        if steps.is_empty() {
            println!("No path from {} to {}", from, to);
        } else {
            println!("Shortest path ({} hops):", steps.len() - 1);
            for step in steps {
                println!("  {}", step);
            }
        }
    }

    Ok(())
}
