//! End-to-end queries through the public API, including loading from disk.

use std::io::Write;

use graph_scc_core::{GraphBuilder, GraphError, GraphProcessor, HintPolicy, LoadOptions};
use tempfile::NamedTempFile;

fn processor(input: &str) -> GraphProcessor {
    GraphProcessor::from_edge_list(input, &LoadOptions::default()).unwrap()
}

fn write_graph(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn sorted(mut v: Vec<&str>) -> Vec<&str> {
    v.sort_unstable();
    v
}

#[test]
fn three_cycle_is_one_component() {
    let p = processor("3\nA B\nB C\nC A");
    assert_eq!(p.num_components(), 1);
    assert_eq!(p.largest_component(), 3);
    assert_eq!(p.shortest_path("A", "C"), vec!["A", "B", "C"]);
}

#[test]
fn single_edge_is_two_components() {
    let p = processor("2\nA B");
    assert_eq!(p.num_components(), 2);
    assert_eq!(p.largest_component(), 1);
    assert!(!p.same_component("A", "B"));
}

#[test]
fn long_cycle_is_one_component() {
    let n = 1_000;
    let mut input = format!("{n}\n");
    for i in 0..n {
        input.push_str(&format!("v{} v{}\n", i, (i + 1) % n));
    }
    let p = processor(&input);
    assert_eq!(p.num_components(), 1);
    assert_eq!(p.largest_component(), n);
}

#[test]
fn isolated_vertices_are_singletons() {
    let mut builder = GraphBuilder::new();
    for i in 0..7 {
        builder.intern(&format!("v{i}"));
    }
    let p = GraphProcessor::new(builder.build());
    assert_eq!(p.num_components(), 7);
    assert_eq!(p.largest_component(), 1);
    assert_eq!(p.component_vertices("v3"), vec!["v3"]);
}

#[test]
fn mixed_graph_components() {
    // {A,B,C} cycle, D -> A tail, {E,F} pair, G self-loop.
    let p = processor("7\nA B\nB C\nC A\nD A\nE F\nF E\nG G\nC E");
    assert_eq!(p.num_components(), 4);
    assert_eq!(p.largest_component(), 3);
    assert_eq!(sorted(p.component_vertices("C")), vec!["A", "B", "C"]);
    assert_eq!(sorted(p.component_vertices("F")), vec!["E", "F"]);
    assert_eq!(p.component_vertices("D"), vec!["D"]);
    assert_eq!(p.component_vertices("G"), vec!["G"]);
    assert!(!p.same_component("C", "E"));
    assert_eq!(p.shortest_path("D", "F"), vec!["D", "A", "B", "C", "E", "F"]);
    assert!(p.shortest_path("F", "D").is_empty());
}

#[test]
fn absent_vertices_are_not_errors() {
    let p = processor("3\nA B\nB C\nC A");
    assert_eq!(p.out_degree("nope"), 0);
    assert!(p.component_vertices("nope").is_empty());
    assert!(!p.same_component("nope", "A"));
    assert!(!p.same_component("A", "nope"));
    assert!(p.shortest_path("nope", "A").is_empty());
}

#[test]
fn duplicate_edges_do_not_inflate_degree() {
    let p = processor("2\nA B\nA B\nA   B\nB A");
    assert_eq!(p.out_degree("A"), 1);
    assert_eq!(p.graph().edge_count(), 2);
}

#[test]
fn loads_crawler_output_from_disk() {
    let file = write_graph(
        "4\n/wiki/Computer_Science /wiki/Algorithm\n/wiki/Algorithm /wiki/Graph_theory\n\
         /wiki/Graph_theory /wiki/Computer_Science\n/wiki/Algorithm /wiki/Metamodeling\n",
    );
    let p = GraphProcessor::from_path(file.path(), &LoadOptions::default()).unwrap();
    assert_eq!(p.graph().node_count(), 4);
    assert_eq!(p.out_degree("/wiki/Algorithm"), 2);
    assert!(p.same_component("/wiki/Graph_theory", "/wiki/Computer_Science"));
    assert!(!p.same_component("/wiki/Metamodeling", "/wiki/Algorithm"));
    assert_eq!(p.highest_out_degree(), Some(("/wiki/Algorithm", 2)));
    assert_eq!(
        p.shortest_path("/wiki/Graph_theory", "/wiki/Metamodeling"),
        vec![
            "/wiki/Graph_theory",
            "/wiki/Computer_Science",
            "/wiki/Algorithm",
            "/wiki/Metamodeling"
        ]
    );
}

#[test]
fn bad_header_on_disk_fails() {
    let file = write_graph("lots\nA B\n");
    let err = GraphProcessor::from_path(file.path(), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, GraphError::InvalidHeader { .. }));
}

#[test]
fn malformed_edge_on_disk_fails() {
    let file = write_graph("2\nA B\nAB\n");
    let err = GraphProcessor::from_path(file.path(), &LoadOptions::default()).unwrap_err();
    assert!(matches!(err, GraphError::MalformedEdge { line: 3, .. }));
}

#[test]
fn hint_policy_reject_on_disk() {
    let file = write_graph("10\nA B\n");
    let opts = LoadOptions::default().with_hint_policy(HintPolicy::Reject);
    let err = GraphProcessor::from_path(file.path(), &opts).unwrap_err();
    assert!(matches!(
        err,
        GraphError::HintMismatch {
            declared: 10,
            actual: 2
        }
    ));
    assert!(GraphProcessor::from_path(file.path(), &LoadOptions::default()).is_ok());
}

#[test]
fn missing_file_surfaces_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = GraphProcessor::from_path(dir.path().join("absent.txt"), &LoadOptions::default())
        .unwrap_err();
    assert!(matches!(err, GraphError::Io { .. }));
    assert!(err.to_string().contains("absent.txt"));
}

#[test]
fn processor_can_be_shared_across_threads() {
    let p = std::sync::Arc::new(processor("3\nA B\nB C\nC A"));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let p = std::sync::Arc::clone(&p);
            std::thread::spawn(move || p.shortest_path("B", "A").len())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), 3);
    }
}
