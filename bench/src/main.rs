use std::env;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use graph_scc_core::{Graph, GraphProcessor, HintPolicy};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Full `EnvFilter` directive; overrides everything else.
const LOG_ENV: &str = "GRAPH_SCC_LOG";
/// `json` for JSON lines; anything else (or unset) for compact text.
const LOG_FORMAT_ENV: &str = "GRAPH_SCC_LOG_FORMAT";
/// When set to any value and `LOG_ENV` is unset, raise the crate to debug.
const DEBUG_ENV: &str = "DEBUG";

mod generators;
mod report;

use generators::{gen_barbell, gen_condensed, gen_cycle, gen_lsystem, gen_random};

#[derive(Parser, Debug)]
#[command(
    name = "graph-scc-bench",
    version,
    about = "Benchmark the SCC engine on synthetic graphs, or report on a graph file"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate synthetic topologies and time SCC and path queries on each
    Bench {
        #[arg(long, value_enum, default_value_t = Mode::All)]
        mode: Mode,

        /// Target vertex count per generated graph
        #[arg(long, default_value_t = 1_000_000)]
        nodes: usize,
    },

    /// Load an edge-list file and print its component summary
    Report {
        /// Graph file: vertex-count header, then one `from to` edge per line
        file: PathBuf,

        #[arg(long, value_enum, default_value_t = HintPolicyArg::Warn)]
        hint_policy: HintPolicyArg,

        /// Also print the shortest path from this vertex (requires --to)
        #[arg(long, requires = "to")]
        from: Option<String>,

        #[arg(long, requires = "from")]
        to: Option<String>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Run every generator (default)
    All,
    /// Single directed ring (one giant component, deepest DFS)
    Cycle,
    /// Fractal branching tree (acyclic, all singletons)
    Lsystem,
    /// Erdos-Renyi uniform random edges
    Random,
    /// Two dense clusters connected by a one-way bridge
    Barbell,
    /// Chain of 8-vertex rings; the condensation is one long path
    Condensed,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum HintPolicyArg {
    Ignore,
    Warn,
    Reject,
}

impl From<HintPolicyArg> for HintPolicy {
    fn from(arg: HintPolicyArg) -> Self {
        match arg {
            HintPolicyArg::Ignore => HintPolicy::Ignore,
            HintPolicyArg::Warn => HintPolicy::Warn,
            HintPolicyArg::Reject => HintPolicy::Reject,
        }
    }
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Command::Bench { mode, nodes } => {
            run_bench(mode, nodes);
            Ok(())
        }
        Command::Report {
            file,
            hint_policy,
            from,
            to,
        } => {
            let path = from.zip(to);
            report::run(&file, hint_policy.into(), path.as_ref())
        }
    }
}

fn default_filter(debug: bool) -> &'static str {
    if debug {
        "graph_scc=debug,info"
    } else {
        "graph_scc=info,warn"
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(env::var_os(DEBUG_ENV).is_some())));

    let format = env::var(LOG_FORMAT_ENV).unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry.with(fmt::layer().compact().with_writer(std::io::stderr)).init();
        }
    }
}

fn run_bench(mode: Mode, node_count: usize) {
    println!("graph-scc-bench");
    println!("===============");
    println!();

    let generators: Vec<(&str, fn(usize) -> Graph)> = match mode {
        Mode::Cycle => vec![("Directed ring", gen_cycle)],
        Mode::Lsystem => vec![("L-system tree", gen_lsystem)],
        Mode::Random => vec![("Erdos-Renyi random", gen_random)],
        Mode::Barbell => vec![("Barbell (cluster-bridge-cluster)", gen_barbell)],
        Mode::Condensed => vec![("Condensed ring chain", gen_condensed)],
        Mode::All => vec![
            ("Directed ring", gen_cycle as fn(usize) -> Graph),
            ("L-system tree", gen_lsystem),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (cluster-bridge-cluster)", gen_barbell),
            ("Condensed ring chain", gen_condensed),
        ],
    };

    for (name, generator) in generators {
        run_benchmark(name, generator, node_count);
    }
}

fn run_benchmark(name: &str, generator: fn(usize) -> Graph, node_count: usize) {
    println!("--- {} ---", name);
    println!("Target: {} nodes", node_count);

    let t = Instant::now();
    let graph = generator(node_count);
    let gen_time = t.elapsed();
    println!(
        "Generated in {:.2}s — {} nodes, {} edges, ~{:.0}MB",
        gen_time.as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        graph.memory_usage() as f64 / 1_048_576.0
    );

    if graph.is_empty() {
        println!("(empty graph, nothing to measure)");
        println!();
        return;
    }

    let far_node = graph.label(graph.node_count() - 1).to_string();
    let near_node = graph.label(0).to_string();

    let t = Instant::now();
    let processor = GraphProcessor::new(graph);
    let scc_time = t.elapsed();
    println!(
        "Components: {} (largest {}) in {:.1}ms",
        processor.num_components(),
        processor.largest_component(),
        scc_time.as_secs_f64() * 1000.0
    );

    if let Some((label, degree)) = processor.highest_out_degree() {
        println!("Highest out-degree: {} ({})", label, degree);
    }

    // Shortest path: first node to last node
    let t = Instant::now();
    let path = processor.shortest_path(&near_node, &far_node);
    let elapsed = t.elapsed();
    if path.is_empty() {
        println!(
            "Shortest path {} → {}: no path ({:.1}ms)",
            near_node,
            far_node,
            elapsed.as_secs_f64() * 1000.0
        );
    } else {
        println!(
            "Shortest path {} → {}: {} hops in {:.1}ms",
            near_node,
            far_node,
            path.len() - 1,
            elapsed.as_secs_f64() * 1000.0
        );
    }
    println!();
}
