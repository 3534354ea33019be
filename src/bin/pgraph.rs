//! CLI entry point for the `pgraph` command-line tool.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use point_graph::cli::{commands, OutputOptions};
use point_graph::order::OrderKind;
use point_graph::types::{Edge, GraphError};

#[derive(Parser)]
#[command(
    name = "pgraph",
    version,
    about = "Directed adjacency-list graph keyed by 2D points"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text", global = true)]
    format: String,

    /// Enable debug logging
    #[arg(long, global = true)]
    verbose: bool,

    /// Print answers as true/false instead of 1/0
    #[arg(long, global = true)]
    bool_text: bool,

    /// Key ordering: reversed (default), forward, or lexicographic
    #[arg(long, default_value = "reversed", global = true)]
    order: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the fixed three-point demonstration (default)
    Demo,
    /// Build a graph from edges and answer queries
    Run {
        /// Directed edge "x,y->x,y" (repeatable)
        #[arg(long = "edge", allow_hyphen_values = true)]
        edges: Vec<String>,
        /// JSON file holding an array of edges
        #[arg(long)]
        edges_file: Option<PathBuf>,
        /// Query "x,y->x,y" (repeatable)
        #[arg(long = "query", allow_hyphen_values = true)]
        queries: Vec<String>,
        /// Follow edges transitively instead of one hop
        #[arg(long)]
        transitive: bool,
        /// Write the graph dump to this file instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
}

fn parse_edges(raw: &[String]) -> Result<Vec<Edge>, GraphError> {
    raw.iter().map(|s| s.parse::<Edge>()).collect()
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let order = match OrderKind::from_name(&cli.order) {
        Some(order) => order,
        None => {
            eprintln!("Invalid order: {}", cli.order);
            process::exit(3);
        }
    };
    let opts = OutputOptions {
        json: cli.format == "json",
        bool_text: cli.bool_text,
        order,
    };

    let result = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => commands::cmd_demo(&opts),
        Commands::Run {
            edges,
            edges_file,
            queries,
            transitive,
            output,
        } => parse_edges(&edges).and_then(|edges| {
            let queries = parse_edges(&queries)?;
            commands::cmd_run(
                &edges,
                edges_file.as_deref(),
                &queries,
                transitive,
                output.as_deref(),
                &opts,
            )
        }),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::Io(_) => 1,
            GraphError::Json(_) => 2,
            GraphError::InvalidPoint(_) | GraphError::InvalidEdge(_) => 3,
            GraphError::KeyNotFound(_) => 4,
        };
        process::exit(code);
    }
}
