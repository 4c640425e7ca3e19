use anyhow::{anyhow, Context, Result};
use clap::Parser;
use csv::Writer;
use log::info;
use std::time::Instant;

use planar_ssp::input::{self, IndexBase};
use planar_ssp::{Algorithm, Error, Graph, ShortestPaths, VertexIndex};

#[derive(Parser, Debug)]
#[command(name = "planar")]
#[command(about = "Build a graph from a point/edge text file and run Dijkstra from a source vertex.", long_about = None)]
struct Cli {
    /// Path to the graph file (`n m`, then `id x y` per vertex, then `u v` per edge)
    #[arg(short, long)]
    input: String,

    /// Source vertex index
    #[arg(short, long, default_value_t = 0)]
    source: usize,

    /// Source vertex by external id, overrides --source
    #[arg(long)]
    source_id: Option<i64>,

    /// Target vertex index. Prints its distance and path.
    #[arg(short, long)]
    target: Option<usize>,

    /// Target vertex by external id, overrides --target
    #[arg(long)]
    target_id: Option<i64>,

    /// Edge endpoints in the file count from 1
    #[arg(long, default_value_t = false)]
    one_based: bool,

    #[arg(short, long, default_value_t = String::from("lazy"))]
    algorithm: String,

    /// Output CSV (vertex_id, distance). If omitted, prints a summary to stdout.
    #[arg(short, long)]
    out: Option<String>,

    /// Include unreachable vertices in output with infinite distance
    #[arg(long, default_value_t = false)]
    include_unreachable: bool,
}

fn resolve(graph: &Graph, index: Option<usize>, id: Option<i64>, what: &str) -> Result<Option<VertexIndex>> {
    match id {
        Some(id) => graph
            .index_of(id)
            .map(Some)
            .ok_or_else(|| anyhow!("no vertex with id {} for {}", id, what)),
        None => Ok(index),
    }
}

/// Writes `vertex_id,distance` rows sorted by distance. Returns the number of
/// data rows written.
fn write_distance_rows<W: std::io::Write>(
    wtr: &mut Writer<W>,
    graph: &Graph,
    sp: &ShortestPaths,
    include_unreachable: bool,
) -> Result<usize> {
    wtr.write_record(["vertex_id", "distance"])?;
    let mut dist_with_idx: Vec<(usize, f64)> = sp.distances().iter().copied().enumerate().collect();
    dist_with_idx.sort_by(|a, b| a.1.total_cmp(&b.1));
    let mut written = 0usize;
    for (idx, d) in dist_with_idx {
        if d.is_finite() || include_unreachable {
            let val = if d.is_finite() {
                format!("{:.6}", d)
            } else {
                String::from("inf")
            };
            wtr.write_record(&[graph.vertices()[idx].id.to_string(), val])?;
            written += 1;
        }
    }
    wtr.flush()?;
    Ok(written)
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let algorithm: Algorithm = cli.algorithm.parse()?;
    let base = if cli.one_based { IndexBase::One } else { IndexBase::Zero };

    let graph = input::read_graph(&cli.input, base).with_context(|| format!("loading {}", &cli.input))?;
    println!("Graph: {} vertices, {} edges", graph.len(), graph.edge_count());

    let source = resolve(&graph, Some(cli.source), cli.source_id, "source")?.unwrap_or(0);
    let target = resolve(&graph, cli.target, cli.target_id, "target")?;

    if let Some(target) = target {
        let now = Instant::now();
        let result = algorithm.path(&graph, source, target);
        info!("{:?} query {} -> {} took {:?}", algorithm, source, target, now.elapsed());
        match result {
            Ok(path) => {
                println!("{}", path.distance);
                let vertices: Vec<String> = path.vertices.iter().map(|v| v.to_string()).collect();
                println!("{}", vertices.join(" "));
            }
            Err(Error::Unreachable { .. }) => println!("Vertex {} is unreachable from {}", target, source),
            Err(e) => return Err(e.into()),
        }
    }

    if cli.out.is_none() && target.is_some() {
        return Ok(());
    }

    let now = Instant::now();
    let sp = algorithm.run(&graph, source)?;
    info!("{:?} solve from {} took {:?}", algorithm, source, now.elapsed());

    if let Some(out_path) = cli.out {
        let mut wtr = Writer::from_path(&out_path).with_context(|| format!("creating CSV {}", &out_path))?;
        let written = write_distance_rows(&mut wtr, &graph, &sp, cli.include_unreachable)?;
        println!("Wrote distances for {} vertices to {}", written, out_path);
    } else {
        let reachable = sp.reachable_count();
        println!("Vertices: {}", sp.len());
        println!("Reachable from {}: {}", source, reachable);
        if let Some(maxd) = sp.max_distance() {
            println!("Max finite distance: {:.2}", maxd);
        }
    }

    Ok(())
}
