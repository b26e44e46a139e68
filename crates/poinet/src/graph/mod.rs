//! Weighted, planar-embedded graph: arenas, subgraphs, paths, centrality.
//!
//! Purpose
//! - One graph type serves both levels of the model: the full routing network
//!   (owned by the caller, only ever borrowed) and the abstract POI skeleton
//!   (small, cloned per run and grown edge by edge).
//! - Vertex ids are stable; vertex and edge indices are local to one value.
//!
//! Why this design
//! - The id→index map lives inside the graph and is built as vertices are
//!   added, so callers never re-resolve ids by scanning.
//! - Reductions return new graphs; nothing in the crate mutates a graph it
//!   only borrows.

mod centrality;
mod paths;
mod types;

pub use centrality::{closeness, edge_betweenness};
pub use types::{Edge, Graph, Vertex, VertexId};

#[cfg(test)]
mod tests;
