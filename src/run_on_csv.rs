use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::time::Instant;

use planar_ssp::input::{self, IndexBase};
use planar_ssp::Algorithm;

#[derive(Parser, Debug)]
#[command(name = "planar-csv")]
#[command(about = "Build a graph from a vertex CSV (id,x,y) and an edge CSV (u,v) and time repeated SSP runs.", long_about = None)]
struct Cli {
    /// Path to the vertex .csv file
    #[arg(short, long)]
    vertices: String,

    /// Path to the edge .csv file
    #[arg(short, long)]
    edges: String,

    /// Number of runs. Picks a new (deterministic) source index per run (0, 1, 2, 3, ...num_runs).
    #[arg(short, long)]
    num_runs: usize,

    #[arg(short, long, default_value_t = String::from("lazy"))]
    algorithm: String,

    /// Edge endpoints in the file count from 1
    #[arg(long, default_value_t = false)]
    one_based: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let ssp: Algorithm = cli.algorithm.parse()?;
    let base = if cli.one_based { IndexBase::One } else { IndexBase::Zero };

    let graph = input::read_csv_graph(&cli.vertices, &cli.edges, base)
        .with_context(|| format!("loading {} and {}", &cli.vertices, &cli.edges))?;
    info!("Graph: {} vertices, {} edges", graph.len(), graph.edge_count());

    let mut duration_millis = Vec::with_capacity(cli.num_runs);
    for src_idx in 0..cli.num_runs.min(graph.len()) {
        let now = Instant::now();
        let sp = ssp.run(&graph, src_idx)?;
        duration_millis.push(now.elapsed().as_secs_f64() * 1000.0);
        info!("run {}: {} reachable", src_idx, sp.reachable_count());
    }
    println!("{:?}", duration_millis);

    Ok(())
}
