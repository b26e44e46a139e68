//! Planar POI networks carved out of routing graphs.
//!
//! A weighted street graph plus a set of points of interest goes in; a sparse
//! crossing-free "abstract" network over the POIs comes out, pruned by a
//! centrality measure and routed back onto the street graph.
//!
//! Layout
//! - `graph`: arena graph, Dijkstra, edge betweenness and closeness.
//! - `geometry`: segment crossing predicate used by the triangulation.
//! - `pairs`: POI pairs ordered by routing distance.
//! - `triangulate`: greedy triangulation, pruning, routing, orchestrators.
//! - `sampling`: seeded POI pools for the stepwise variant.
//! - `similarity`: shortest-path error between two graphs.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; prefer
//!   `api` or `prelude` re-exports in callers.

pub mod api;
pub mod error;
pub mod geometry;
pub mod graph;
pub mod pairs;
pub mod sampling;
pub mod similarity;
pub mod triangulate;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{Error, Result};
pub use nalgebra::Vector2 as Vec2;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::graph::{Graph, VertexId};
    pub use crate::similarity::{compare, Comparison, SampleMode};
    pub use crate::triangulate::{
        triangulate_and_route, triangulate_stepwise, PruneMeasure, RunCfg, TriangulationOutput,
    };
    pub use nalgebra::Vector2 as Vec2;
}
