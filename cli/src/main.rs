//! Algograph CLI: run graph algorithm requests from the command line
//!
//! Reads a JSON request from a file or stdin and prints the engine's response.

use algograph::{
    Algorithm, AlgorithmRequest, AlgorithmResponse, Distance, Engine, EngineConfig, Payload,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use comfy_table::{ContentArrangement, Table};
use std::io::Read;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "algograph", version, about = "Algograph graph algorithm engine")]
struct Cli {
    /// YAML engine configuration
    #[arg(long, global = true, env = "ALGOGRAPH_CONFIG")]
    config: Option<String>,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single request
    Run {
        /// Request file, `-` for stdin
        #[arg(long, short, default_value = "-")]
        input: String,
    },
    /// Run a JSON array of requests in parallel
    Batch {
        /// Request file, `-` for stdin
        #[arg(long, short, default_value = "-")]
        input: String,
    },
    /// List supported algorithms
    Algorithms,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let result = load_engine(cli.config.as_deref()).and_then(|engine| match &cli.command {
        Commands::Run { input } => run_single(&engine, input, &cli.format),
        Commands::Batch { input } => run_batch(&engine, input),
        Commands::Algorithms => run_list(&cli.format),
    });

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn load_engine(config: Option<&str>) -> anyhow::Result<Engine> {
    let config = match config {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading config {}", path))?,
        None => EngineConfig::default(),
    };
    debug!("Engine config: {:?}", config);
    Ok(Engine::new(config))
}

fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("reading {}", input))
    }
}

fn run_single(engine: &Engine, input: &str, format: &OutputFormat) -> anyhow::Result<()> {
    let request: AlgorithmRequest =
        serde_json::from_str(&read_input(input)?).context("parsing request")?;

    let response = match engine.execute(&request) {
        Ok(response) => response,
        Err(err) => {
            println!("{}", serde_json::to_string_pretty(&err.to_response())?);
            anyhow::bail!(err);
        }
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&response)?),
        OutputFormat::Table => print_table(&response),
    }
    Ok(())
}

fn run_batch(engine: &Engine, input: &str) -> anyhow::Result<()> {
    let requests: Vec<AlgorithmRequest> =
        serde_json::from_str(&read_input(input)?).context("parsing request batch")?;
    debug!("Loaded batch of {} requests from {}", requests.len(), input);

    let results = engine
        .execute_batch(&requests)
        .into_iter()
        .map(|result| match result {
            Ok(response) => serde_json::to_value(response),
            Err(err) => serde_json::to_value(err.to_response()),
        })
        .collect::<Result<Vec<_>, _>>()?;

    println!("{}", serde_json::to_string_pretty(&results)?);
    Ok(())
}

fn run_list(format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            let names: Vec<&str> = Algorithm::all().iter().map(|a| a.name()).collect();
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec!["Name", "Algorithm", "Edges", "Source", "Negative weights"]);
            for algorithm in Algorithm::all() {
                table.add_row(vec![
                    algorithm.name(),
                    algorithm.display_name(),
                    if algorithm.is_directed() { "directed" } else { "undirected" },
                    if algorithm.requires_source() { "required" } else { "optional" },
                    if algorithm.rejects_negative_weights() { "rejected" } else { "allowed" },
                ]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}

fn print_table(response: &AlgorithmResponse) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    match &response.payload {
        Payload::ShortestPaths(p) => {
            table.set_header(vec!["Node", "Distance", "Previous"]);
            for (node, distance) in &p.distances {
                let previous = p
                    .previous
                    .get(node)
                    .copied()
                    .flatten()
                    .map(|v| v.to_string())
                    .unwrap_or_else(|| "-".to_string());
                table.add_row(vec![node.to_string(), format_distance(distance), previous]);
            }
            println!("{}", table);
            if let Some(path) = &p.path {
                println!("Path: {}", format_path(path));
            }
            if p.negative_cycle == Some(true) {
                println!(
                    "Negative cycle reachable from {}; unbounded nodes: {:?}",
                    p.source,
                    p.negative_cycle_nodes.as_deref().unwrap_or_default()
                );
            }
        }
        Payload::AllPairs(p) => {
            let mut header = vec![String::new()];
            header.extend(p.nodes.iter().map(|n| n.to_string()));
            table.set_header(header);
            for (node, row) in p.nodes.iter().zip(&p.distances) {
                let mut cells = vec![node.to_string()];
                cells.extend(row.iter().map(format_distance));
                table.add_row(cells);
            }
            println!("{}", table);
            if let Some(path) = &p.path {
                println!("Path: {}", format_path(path));
            }
            if p.negative_cycle {
                println!("Negative cycle through nodes {:?}", p.negative_cycle_nodes);
            }
        }
        Payload::SpanningTree(p) => {
            table.set_header(vec!["From", "To", "Weight"]);
            for (from, to, weight) in &p.mst {
                table.add_row(vec![from.to_string(), to.to_string(), weight.to_string()]);
            }
            println!("{}", table);
            println!("Total weight: {}", p.total_weight);
            if !p.connected {
                println!(
                    "Graph is disconnected: tree covers {} of {} nodes",
                    p.component_size, response.node_count
                );
            }
        }
    }

    println!(
        "{} on {} nodes / {} edges in {:.3} ms",
        response.algorithm, response.node_count, response.edge_count, response.execution_time
    );
}

fn format_distance(distance: &Distance) -> String {
    match distance {
        Distance::Finite(d) => d.to_string(),
        Distance::Unreachable => "inf".to_string(),
        Distance::Unbounded => "-inf".to_string(),
    }
}

fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}
