//! CSV graph provider: `nodes.csv` (`id,x,y`), `edges.csv`
//! (`source,target,weight`), and a POI list with one id per line.

use std::fs::{self, File};
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use polars::prelude::*;
use poinet::api::{Graph, VertexId};

fn read_csv(path: &Path, columns: &[(&str, DataType)]) -> Result<DataFrame> {
    let exprs: Vec<Expr> = columns
        .iter()
        .map(|(name, dtype)| col(*name).cast(dtype.clone()))
        .collect();
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(1000))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select(exprs)
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    Ok(df)
}

fn missing(path: &Path, column: &str, row: usize) -> anyhow::Error {
    anyhow!("{}: missing `{column}` in row {row}", path.display())
}

/// Build a graph from node and edge tables. Edge endpoints are vertex ids.
pub fn read_graph(nodes: &Path, edges: &Path) -> Result<Graph> {
    let mut graph = Graph::new();

    let df = read_csv(
        nodes,
        &[
            ("id", DataType::UInt64),
            ("x", DataType::Float64),
            ("y", DataType::Float64),
        ],
    )?;
    let (ids, xs, ys) = (
        df.column("id")?.u64()?,
        df.column("x")?.f64()?,
        df.column("y")?.f64()?,
    );
    for (row, ((id, x), y)) in ids.into_iter().zip(xs).zip(ys).enumerate() {
        let id = id.ok_or_else(|| missing(nodes, "id", row))?;
        let x = x.ok_or_else(|| missing(nodes, "x", row))?;
        let y = y.ok_or_else(|| missing(nodes, "y", row))?;
        graph
            .add_vertex(VertexId(id), x, y)
            .with_context(|| format!("{}: row {row}", nodes.display()))?;
    }

    let df = read_csv(
        edges,
        &[
            ("source", DataType::UInt64),
            ("target", DataType::UInt64),
            ("weight", DataType::Float64),
        ],
    )?;
    let (sources, targets, weights) = (
        df.column("source")?.u64()?,
        df.column("target")?.u64()?,
        df.column("weight")?.f64()?,
    );
    for (row, ((s, t), w)) in sources.into_iter().zip(targets).zip(weights).enumerate() {
        let s = s.ok_or_else(|| missing(edges, "source", row))?;
        let t = t.ok_or_else(|| missing(edges, "target", row))?;
        let w = w.ok_or_else(|| missing(edges, "weight", row))?;
        graph
            .add_edge_by_id(VertexId(s), VertexId(t), w)
            .with_context(|| format!("{}: row {row}", edges.display()))?;
    }
    tracing::info!(
        vertices = graph.vcount(),
        edges = graph.ecount(),
        "graph loaded"
    );
    Ok(graph)
}

/// One POI id per line; blank lines and `#` comments are ignored.
pub fn read_pois(path: &Path) -> Result<Vec<VertexId>> {
    let text = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    text.lines()
        .enumerate()
        .map(|(k, line)| (k, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
        .map(|(k, line)| {
            line.parse::<u64>()
                .map(VertexId)
                .with_context(|| format!("{}:{}: bad POI id `{line}`", path.display(), k + 1))
        })
        .collect()
}

/// Write the edges of `graph` as `source,target,weight` (ids, not indices).
pub fn write_edges(graph: &Graph, path: &Path) -> Result<()> {
    let id = |v: usize| graph.vertex(v).id.0;
    let sources: Vec<u64> = graph.edges().iter().map(|e| id(e.source)).collect();
    let targets: Vec<u64> = graph.edges().iter().map(|e| id(e.target)).collect();
    let weights: Vec<f64> = graph.edges().iter().map(|e| e.weight).collect();
    let mut df = df!(
        "source" => sources,
        "target" => targets,
        "weight" => weights
    )?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
