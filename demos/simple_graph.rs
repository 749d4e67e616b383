//! Simple example demonstrating sparse-graph usage
//!
//! Run with: cargo run --example simple_graph

use std::io::Write;

use sparse_graph::{CsrGraph, NodeId, SparseGraph};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("sparse-graph example\n");

    // 1. Write a small edge list with sparse ids
    let path = std::env::temp_dir().join("sparse_graph_example.txt");
    let mut file = std::fs::File::create(&path)?;
    writeln!(file, "# origin destination")?;
    writeln!(file, "100 205")?;
    writeln!(file, "100 310")?;
    writeln!(file, "205 310")?;
    writeln!(file, "310 100")?;
    writeln!(file, "310 4000")?;
    drop(file);

    // 2. Load into CSR
    println!("Loading {}...", path.display());
    let graph = CsrGraph::read_edge_list(&path).await?;
    let stats = graph.statistics();
    println!(
        "  {} nodes, {} edges, ~{} bytes\n",
        stats.nodes, stats.edges, stats.memory_bytes
    );

    // 3. Query through the capability trait
    let graph: &dyn SparseGraph = &graph;

    if let Some(hub) = graph.node_of_max_degree() {
        println!("Max-degree node: {hub} (degree {})", graph.degree(hub));
        println!("  neighbors: {:?}", graph.neighbors(hub));
    }

    println!("Unknown node 7 has degree {}", graph.degree(NodeId(7)));

    // 4. Two-hop BFS
    let (visited, edges) = graph.bfs(NodeId(100), 2).into_parts();
    println!("\nBFS from 100, depth 2:");
    println!("  visited: {visited:?}");
    for (src, dst) in edges {
        println!("  {src} -> {dst}");
    }

    std::fs::remove_file(&path)?;
    println!("\nExample complete!");

    Ok(())
}
