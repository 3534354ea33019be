//! CLI command implementations.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use serde::Serialize;

use crate::graph::{ConsoleObserver, GraphBuilder, GraphObserver, LogObserver, PointGraph};
use crate::order::OrderKind;
use crate::types::{Edge, GraphResult, Point};

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputOptions {
    /// Emit JSON instead of the console text.
    pub json: bool,
    /// Render answers as `true`/`false` instead of `1`/`0`.
    pub bool_text: bool,
    /// Key ordering for the adjacency store.
    pub order: OrderKind,
}

/// One answered connectivity question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryAnswer {
    pub label: String,
    pub from: Point,
    pub to: Point,
    pub connected: bool,
}

impl QueryAnswer {
    /// `Are <label>? Answer: <0|1>`
    pub fn line(&self, bool_text: bool) -> String {
        format!(
            "Are {}? Answer: {}",
            self.label,
            format_answer(self.connected, bool_text)
        )
    }
}

/// `1`/`0` by default, `true`/`false` on request.
pub fn format_answer(value: bool, bool_text: bool) -> String {
    if bool_text {
        value.to_string()
    } else {
        u8::from(value).to_string()
    }
}

/// The three demonstration points, in `(p, q, r)` order.
pub const DEMO_POINTS: [Point; 3] = [Point::new(2, 3), Point::new(3, 3), Point::new(4, 4)];

/// Build the demonstration graph: `p -> q`, `p -> r`.
pub fn demo_graph<O: GraphObserver>(order: OrderKind, observer: O) -> PointGraph<OrderKind, O> {
    let [p, q, r] = DEMO_POINTS;
    GraphBuilder::new()
        .order(order)
        .observer(observer)
        .edge(p, q)
        .edge(p, r)
        .build()
}

/// The demonstration questions with their labels.
pub fn demo_queries() -> Vec<(String, Point, Point)> {
    let [p, q, r] = DEMO_POINTS;
    vec![
        ("p and q connected".to_string(), p, q),
        ("p and r connected".to_string(), p, r),
        ("q and r connected".to_string(), q, r),
    ]
}

/// Run the fixed demonstration.
pub fn cmd_demo(opts: &OutputOptions) -> GraphResult<()> {
    log::debug!("Running demo with {} ordering", opts.order);
    if opts.json {
        let graph = demo_graph(opts.order, LogObserver);
        let answers = answer_one_hop(&graph, demo_queries(), None);
        print_json_report(&graph, &answers)
    } else {
        let graph = demo_graph(opts.order, ConsoleObserver);
        answer_one_hop(&graph, demo_queries(), Some(opts.bool_text));
        graph.print_graph();
        Ok(())
    }
}

/// Build a graph from edges, answer queries, and dump it.
pub fn cmd_run(
    edges: &[Edge],
    edges_file: Option<&Path>,
    queries: &[Edge],
    transitive: bool,
    output: Option<&Path>,
    opts: &OutputOptions,
) -> GraphResult<()> {
    let mut all_edges = Vec::new();
    if let Some(path) = edges_file {
        all_edges.extend(read_edges_file(path)?);
    }
    all_edges.extend_from_slice(edges);
    log::debug!(
        "Building graph from {} edges ({} ordering)",
        all_edges.len(),
        opts.order
    );

    let labelled: Vec<(String, Point, Point)> = queries
        .iter()
        .map(|q| (format!("{} and {} connected", q.source, q.target), q.source, q.target))
        .collect();

    if opts.json {
        let graph = build_graph(&all_edges, opts.order, LogObserver);
        let answers = if transitive {
            answer_transitive(&graph, labelled, None)
        } else {
            answer_one_hop(&graph, labelled, None)
        };
        if let Some(path) = output {
            write_dump_file(&graph, path)?;
        }
        print_json_report(&graph, &answers)
    } else {
        let graph = build_graph(&all_edges, opts.order, ConsoleObserver);
        if transitive {
            answer_transitive(&graph, labelled, Some(opts.bool_text));
        } else {
            answer_one_hop(&graph, labelled, Some(opts.bool_text));
        }
        match output {
            Some(path) => {
                write_dump_file(&graph, path)?;
                println!("Wrote graph dump to {}", path.display());
            }
            None => graph.print_graph(),
        }
        Ok(())
    }
}

/// Read a JSON array of edges (`[{"source": {"x":..,"y":..}, "target": ..}]`).
pub fn read_edges_file(path: &Path) -> GraphResult<Vec<Edge>> {
    let content = std::fs::read_to_string(path)?;
    let edges: Vec<Edge> = serde_json::from_str(&content)?;
    log::info!("Loaded {} edges from {}", edges.len(), path.display());
    Ok(edges)
}

/// Write the `print_graph` text to a file.
pub fn write_dump_file<O: GraphObserver>(
    graph: &PointGraph<OrderKind, O>,
    path: &Path,
) -> GraphResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    graph.write_dump(&mut out)
}

fn build_graph<O: GraphObserver>(
    edges: &[Edge],
    order: OrderKind,
    observer: O,
) -> PointGraph<OrderKind, O> {
    GraphBuilder::new()
        .order(order)
        .observer(observer)
        .edges(edges.iter().copied())
        .build()
}

/// Answer with `find_`. With `print` set, each line is printed as soon as
/// it is answered so diagnostics stay interleaved.
fn answer_one_hop<O: GraphObserver>(
    graph: &PointGraph<OrderKind, O>,
    queries: Vec<(String, Point, Point)>,
    print: Option<bool>,
) -> Vec<QueryAnswer> {
    answer_with(queries, print, |a, b| graph.find_(a, b))
}

fn answer_transitive<O: GraphObserver>(
    graph: &PointGraph<OrderKind, O>,
    queries: Vec<(String, Point, Point)>,
    print: Option<bool>,
) -> Vec<QueryAnswer> {
    answer_with(queries, print, |a, b| graph.is_connected(&a, &b))
}

fn answer_with<F: Fn(Point, Point) -> bool>(
    queries: Vec<(String, Point, Point)>,
    print: Option<bool>,
    answer: F,
) -> Vec<QueryAnswer> {
    queries
        .into_iter()
        .map(|(label, from, to)| {
            let result = QueryAnswer {
                label,
                from,
                to,
                connected: answer(from, to),
            };
            if let Some(bool_text) = print {
                println!("{}", result.line(bool_text));
            }
            result
        })
        .collect()
}

fn print_json_report<O: GraphObserver>(
    graph: &PointGraph<OrderKind, O>,
    answers: &[QueryAnswer],
) -> GraphResult<()> {
    let report = serde_json::json!({
        "queries": answers,
        "graph": graph.snapshot(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
