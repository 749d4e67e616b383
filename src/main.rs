use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use sparse_graph::{CsrGraph, NodeId, SparseGraph};

#[derive(Parser)]
#[command(
    name = "sparse-graph",
    about = "Load an edge list into CSR form and query it"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print node/edge counts, memory estimate and the max-degree node
    Stats {
        /// Edge-list file (`origin destination` per line)
        file: PathBuf,
    },
    /// Show the node with the most outgoing edges
    Critical {
        file: PathBuf,
        /// Number of neighbors to list
        #[arg(long, default_value_t = 10)]
        limit: usize,
    },
    /// List the out-neighbors of a node
    Neighbors { file: PathBuf, node: i64 },
    /// Breadth-first search up to a maximum depth
    Bfs {
        file: PathBuf,
        start: i64,
        #[arg(long, default_value_t = 2)]
        depth: usize,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Stats { file } => cmd_stats(&file).await,
        Commands::Critical { file, limit } => cmd_critical(&file, limit).await,
        Commands::Neighbors { file, node } => cmd_neighbors(&file, NodeId(node)).await,
        Commands::Bfs { file, start, depth } => cmd_bfs(&file, NodeId(start), depth).await,
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

async fn load(file: &Path) -> Result<CsrGraph> {
    CsrGraph::read_edge_list(file)
        .await
        .with_context(|| format!("failed to load graph from {}", file.display()))
}

async fn cmd_stats(file: &Path) -> Result<()> {
    let graph = load(file).await?;
    let stats = graph.statistics();

    println!("file:            {}", file.display());
    println!("nodes:           {}", stats.nodes);
    println!("edges:           {}", stats.edges);
    println!("memory (MB):     {:.2}", stats.memory_mb());
    match stats.max_degree_node {
        Some(node) => println!("max-degree node: {node} (degree {})", stats.max_degree),
        None => println!("max-degree node: none"),
    }

    Ok(())
}

async fn cmd_critical(file: &Path, limit: usize) -> Result<()> {
    let graph = load(file).await?;

    let Some(node) = graph.node_of_max_degree() else {
        println!("graph has no edges");
        return Ok(());
    };

    let neighbors = graph.neighbors(node);
    let shown: Vec<String> = neighbors.iter().take(limit).map(ToString::to_string).collect();

    println!("node:      {node}");
    println!("degree:    {}", graph.degree(node));
    println!("neighbors: [{}]", shown.join(", "));

    Ok(())
}

async fn cmd_neighbors(file: &Path, node: NodeId) -> Result<()> {
    let graph = load(file).await?;

    for neighbor in SparseGraph::neighbors(&graph, node) {
        println!("{neighbor}");
    }

    Ok(())
}

async fn cmd_bfs(file: &Path, start: NodeId, depth: usize) -> Result<()> {
    if depth < 1 {
        bail!("depth must be >= 1");
    }

    let graph = load(file).await?;
    let result = graph.bfs(start, depth);

    if result.is_empty() {
        println!("node {start} not found");
        return Ok(());
    }

    println!("visited {} nodes:", result.visited.len());
    for node in &result.visited {
        println!("  {node}");
    }
    println!("traversed {} edges:", result.edges.len());
    for (src, dst) in &result.edges {
        println!("  {src} -> {dst}");
    }

    Ok(())
}
