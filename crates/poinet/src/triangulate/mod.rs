//! Greedy triangulation of POIs, pruning, and routing.
//!
//! Purpose
//! - Grow a maximal planar graph on the POIs by adding shortest non-crossing
//!   pairs, prune the newest edges by a structural measure, and turn the
//!   surviving abstract edges into a routed subgraph of the full network.
//!
//! Why this design
//! - Two graph levels: the abstract graph holds only POIs and straight-line
//!   edges (for the crossing test), the routed graph is an induced subgraph
//!   of the full network. They never alias.
//! - Pruning is scoped to a provenance set (edges of the newest pass), which
//!   lets stepwise runs accumulate edges without revisiting earlier steps.
//! - Ordering uses routing distance; coordinates are used only for crossings.
//!
//! Layout
//! - `types.rs` (config/results), `build.rs` (builder), `prune.rs`
//!   (strategies), `route.rs` (router), `run.rs` (orchestrators).

mod build;
mod prune;
mod route;
mod run;
mod types;

pub use build::{greedy_triangulation, poi_skeleton};
pub use prune::{prune, quantile, random_keep_count};
pub use route::{route, route_pairs, Routed};
pub use run::{triangulate_and_route, triangulate_stepwise};
pub use types::{
    validate_quantile, PruneCfg, PruneMeasure, RunCfg, TriangulationOutput, TriangulationPass,
};
