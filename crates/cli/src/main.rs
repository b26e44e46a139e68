use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use poinet::api::{
    compare, triangulate_and_route, triangulate_stepwise, PruneMeasure, RunCfg, SampleMode,
};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod load;
mod provenance;
mod summary;

use provenance::{write_sidecar, Payload};
use summary::{CompareSummary, IterationSummary, RunSummary};

#[derive(Parser)]
#[command(name = "poinet-cli")]
#[command(about = "Planar POI networks on routing graphs")]
struct Cmd {
    /// Log at DEBUG instead of INFO
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

/// Routing graph as two CSV tables.
#[derive(clap::Args)]
struct GraphArgs {
    /// Vertex table with columns id,x,y
    #[arg(long)]
    nodes: PathBuf,
    /// Edge table with columns source,target,weight (vertex ids)
    #[arg(long)]
    edges: PathBuf,
}

#[derive(Subcommand)]
enum Action {
    /// Triangulate the POIs, prune, and route back onto the graph
    Run {
        #[command(flatten)]
        graph: GraphArgs,
        /// POI ids, one per line
        #[arg(long)]
        pois: PathBuf,
        #[arg(long, default_value_t = PruneMeasure::Betweenness)]
        measure: PruneMeasure,
        /// Comma-separated pruning quantiles in [0,1]
        #[arg(long, value_delimiter = ',', default_value = "1.0")]
        quantiles: Vec<f64>,
        /// Comma-separated POI group shares; enables the stepwise variant
        #[arg(long, value_delimiter = ',')]
        percentages: Option<Vec<f64>>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// Independent runs; run `i` replays with index `i`
        #[arg(long, default_value_t = 1)]
        iterations: u64,
        /// JSON summary path
        #[arg(long)]
        out: PathBuf,
        /// Also write routed edges per iteration and quantile as CSV here
        #[arg(long)]
        routed_dir: Option<PathBuf>,
    },
    /// Shortest-path error of graph B against graph A on shared vertices
    Compare {
        #[arg(long)]
        nodes: PathBuf,
        #[arg(long)]
        edges_a: PathBuf,
        #[arg(long)]
        edges_b: PathBuf,
        /// Compare only pairs among these POIs
        #[arg(long, conflicts_with = "fraction")]
        pois: Option<PathBuf>,
        /// Compare floor(n * fraction) sampled pairs
        #[arg(long)]
        fraction: Option<f64>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        /// JSON summary path; stdout when absent
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run {
            graph,
            pois,
            measure,
            quantiles,
            percentages,
            seed,
            iterations,
            out,
            routed_dir,
        } => {
            let cfg = RunCfg {
                prune_quantiles: quantiles,
                prune_measure: measure,
                seed,
                iteration: 0,
            };
            run(RunArgs {
                graph,
                pois,
                cfg,
                percentages,
                iterations,
                out,
                routed_dir,
            })
        }
        Action::Compare {
            nodes,
            edges_a,
            edges_b,
            pois,
            fraction,
            seed,
            out,
        } => compare_graphs(&nodes, &edges_a, &edges_b, pois, fraction, seed, out),
    }
}

struct RunArgs {
    graph: GraphArgs,
    pois: PathBuf,
    cfg: RunCfg,
    percentages: Option<Vec<f64>>,
    iterations: u64,
    out: PathBuf,
    routed_dir: Option<PathBuf>,
}

fn run(args: RunArgs) -> Result<()> {
    let graph = load::read_graph(&args.graph.nodes, &args.graph.edges)?;
    let pois = load::read_pois(&args.pois)?;
    tracing::info!(
        pois = pois.len(),
        measure = %args.cfg.prune_measure,
        quantiles = ?args.cfg.prune_quantiles,
        stepwise = args.percentages.is_some(),
        "run"
    );

    let mut iterations = Vec::new();
    for i in 0..args.iterations {
        let _span = tracing::info_span!("iteration", i).entered();
        let cfg = RunCfg {
            iteration: i,
            ..args.cfg.clone()
        };
        let out = match &args.percentages {
            Some(p) => triangulate_stepwise(&graph, &pois, p, &cfg),
            None => triangulate_and_route(&graph, &pois, &cfg),
        }
        .with_context(|| format!("iteration {i}"))?;
        if let Some(dir) = &args.routed_dir {
            for (q, routed) in cfg.prune_quantiles.iter().zip(&out.routed) {
                load::write_edges(routed, &dir.join(format!("iter{i}_q{q}.csv")))?;
            }
        }
        iterations.push(IterationSummary::new(i, &cfg.prune_quantiles, &out));
    }

    let summary = RunSummary {
        mode: if args.percentages.is_some() {
            "stepwise"
        } else {
            "one-shot"
        },
        measure: args.cfg.prune_measure.to_string(),
        seed: args.cfg.seed,
        pois: pois.len(),
        iterations,
    };
    write_json(&args.out, &summary)?;

    let params = serde_json::json!({
        "measure": args.cfg.prune_measure.as_str(),
        "quantiles": args.cfg.prune_quantiles,
        "percentages": args.percentages,
        "seed": args.cfg.seed,
        "iterations": args.iterations,
    });
    let payload = Payload::new(params).with_inputs([
        args.graph.nodes.clone(),
        args.graph.edges.clone(),
        args.pois.clone(),
    ]);
    let sidecar = write_sidecar(&args.out, payload)?;
    tracing::info!(out = %args.out.display(), provenance = %sidecar.display(), "wrote summary");
    Ok(())
}

fn compare_graphs(
    nodes: &Path,
    edges_a: &Path,
    edges_b: &Path,
    pois: Option<PathBuf>,
    fraction: Option<f64>,
    seed: u64,
    out: Option<PathBuf>,
) -> Result<()> {
    let a = load::read_graph(nodes, edges_a)?;
    let b = load::read_graph(nodes, edges_b)?;
    let (label, mode) = match (&pois, fraction) {
        (Some(path), _) => ("pois", SampleMode::Pois(load::read_pois(path)?)),
        (None, Some(fraction)) => ("fraction", SampleMode::Fraction { fraction, seed }),
        (None, None) => ("all-pairs", SampleMode::AllPairs),
    };
    let summary = CompareSummary::new(label, compare(&a, &b, &mode)?);
    tracing::info!(
        mode = label,
        signed_error = summary.signed_error,
        pairs = summary.pairs_compared,
        "compare"
    );
    match out {
        Some(path) => {
            write_json(&path, &summary)?;
            let params = serde_json::json!({ "mode": label, "fraction": fraction, "seed": seed });
            let mut inputs = vec![nodes.to_path_buf(), edges_a.to_path_buf(), edges_b.to_path_buf()];
            inputs.extend(pois);
            write_sidecar(&path, Payload::new(params).with_inputs(inputs))?;
        }
        None => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}

fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))
}
