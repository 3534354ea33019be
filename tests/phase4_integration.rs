//! Phase 4 tests: command layer, edge files, larger graphs.

use std::io::Write;

use rand::Rng;
use tempfile::NamedTempFile;

use point_graph::cli::commands::{
    cmd_demo, cmd_run, demo_graph, demo_queries, read_edges_file, write_dump_file, OutputOptions,
    DEMO_POINTS,
};
use point_graph::graph::{PointGraph, RecordingObserver, SilentObserver};
use point_graph::order::{Lexicographic, OrderKind, ReversedDisjunctive};
use point_graph::types::{Edge, GraphError, Point};

#[test]
fn test_demo_graph_dump() {
    let graph = demo_graph(OrderKind::Reversed, SilentObserver);
    assert_eq!(
        graph.render(),
        "Key: (2, 3)\nConnected to: (3, 3) (4, 4) \n"
    );
    let answers: Vec<bool> = demo_queries()
        .into_iter()
        .map(|(_, a, b)| graph.find_(a, b))
        .collect();
    assert_eq!(answers, vec![true, true, false]);
}

#[test]
fn test_demo_commands_succeed() {
    let _ = env_logger::builder().is_test(true).try_init();
    cmd_demo(&OutputOptions::default()).unwrap();
    cmd_demo(&OutputOptions {
        json: true,
        ..OutputOptions::default()
    })
    .unwrap();
}

#[test]
fn test_edges_file_roundtrip() {
    let [p, q, r] = DEMO_POINTS;
    let edges = vec![Edge::new(p, q), Edge::new(q, r)];
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(serde_json::to_string(&edges).unwrap().as_bytes())
        .unwrap();
    let loaded = read_edges_file(file.path()).unwrap();
    assert_eq!(loaded, edges);
}

#[test]
fn test_edges_file_bad_json() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[{\"source\": 1}]").unwrap();
    assert!(matches!(
        read_edges_file(file.path()),
        Err(GraphError::Json(_))
    ));
}

#[test]
fn test_edges_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        read_edges_file(&dir.path().join("missing.json")),
        Err(GraphError::Io(_))
    ));
}

#[test]
fn test_run_writes_dump_file() {
    let [p, q, r] = DEMO_POINTS;
    let out = NamedTempFile::new().unwrap();
    cmd_run(
        &[Edge::new(p, q), Edge::new(p, r)],
        None,
        &[Edge::new(q, r)],
        true,
        Some(out.path()),
        &OutputOptions::default(),
    )
    .unwrap();
    let text = std::fs::read_to_string(out.path()).unwrap();
    assert_eq!(text, "Key: (2, 3)\nConnected to: (3, 3) (4, 4) \n");
}

#[test]
fn test_write_dump_file_empty_graph() {
    let graph = PointGraph::with_parts(OrderKind::Lexicographic, SilentObserver);
    let out = NamedTempFile::new().unwrap();
    write_dump_file(&graph, out.path()).unwrap();
    assert_eq!(
        std::fs::read_to_string(out.path()).unwrap(),
        "Graph is empty, hmm! Care to fill it yet? ;)\n"
    );
}

#[test]
fn test_random_graph_matches_naive_model() {
    let mut rng = rand::thread_rng();
    let mut graph = PointGraph::with_parts(ReversedDisjunctive, RecordingObserver::new());
    let mut model: Vec<(Point, Vec<Point>)> = Vec::new();

    for _ in 0..500 {
        let a = Point::new(rng.gen_range(-5..5), rng.gen_range(-5..5));
        let b = Point::new(rng.gen_range(-5..5), rng.gen_range(-5..5));
        graph.union_(a, b);
        match model.iter_mut().find(|(k, _)| *k == a) {
            Some((_, list)) => list.push(b),
            None => model.push((a, vec![b])),
        }
    }

    assert_eq!(graph.key_count(), model.len());
    assert_eq!(graph.observer().events().len(), model.len());
    for (key, list) in &model {
        assert_eq!(graph.neighbors(key).unwrap(), list.as_slice());
    }
}

#[test]
fn test_lexicographic_store_is_sorted() {
    let mut rng = rand::thread_rng();
    let mut graph = PointGraph::with_parts(Lexicographic, SilentObserver);
    for _ in 0..200 {
        let a = Point::new(rng.gen_range(-20..20), rng.gen_range(-20..20));
        graph.union_(a, a);
    }
    let keys: Vec<Point> = graph.keys().copied().collect();
    let mut sorted = keys.clone();
    sorted.sort_by_key(|p| (p.x, p.y));
    sorted.dedup();
    assert_eq!(keys, sorted);
}
