use std::env;
use std::time::{Duration, Instant};

use dijkstra_core::graph::generators::random_graph;
use dijkstra_core::graph::{DirectedGraph, Graph};
use dijkstra_core::{Result, ShortestPathRunner};
use log::info;
use serde::Serialize;

/// One line of the benchmark report
#[derive(Debug, Serialize)]
struct BenchmarkRow {
    vertices: usize,
    edges: usize,
    reachable: usize,
    single_ms: f64,
    parallel_runs: usize,
    parallel_ms: f64,
}

// Function to benchmark a single run on a graph
fn benchmark_single(
    runner: &ShortestPathRunner,
    graph: &DirectedGraph<u64>,
    source: usize,
) -> Result<(Duration, usize)> {
    let start = Instant::now();
    let result = runner.run(graph, source)?;
    let duration = start.elapsed();

    let reachable = result.reachable().count();
    info!("{} reachable vertices in {:?}", reachable, duration);

    Ok((duration, reachable))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Optional seed as the first argument
    let seed = env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);

    let graph_sizes = [1_000, 10_000, 50_000, 100_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 4.0;
    let parallel_runs = 8;

    let runner = ShortestPathRunner::new();
    let mut rows = Vec::new();

    for &size in &graph_sizes {
        info!("generating random graph with {} vertices (seed {})", size, seed);
        let (graph, ids) = random_graph(size, edge_factor, 1_000, seed)?;
        let source = ids[0];

        let (single, reachable) = benchmark_single(&runner, &graph, source)?;

        let sources: Vec<usize> = ids.iter().copied().take(parallel_runs).collect();
        let start = Instant::now();
        runner.run_many(&graph, &sources)?;
        let parallel = start.elapsed();

        rows.push(BenchmarkRow {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            reachable,
            single_ms: single.as_secs_f64() * 1000.0,
            parallel_runs: sources.len(),
            parallel_ms: parallel.as_secs_f64() * 1000.0,
        });
    }

    match serde_json::to_string_pretty(&rows) {
        Ok(report) => println!("{}", report),
        Err(err) => eprintln!("failed to serialize report: {}", err),
    }

    Ok(())
}
