//! Aggregation of pairwise Dubins lengths: adjacency matrix and tour cost.
//!
//! Purpose
//! - Feed an external ATSP solver: a dense directed cost matrix with a large
//!   diagonal, and the cost of a given visiting order.
//!
//! Design
//! - Node storage stays outside this crate. Callers provide a
//!   [`NodeGeometry`] lookup for positions and a closure for headings.
//! - Evaluation is map-then-reduce. Pair lengths are independent and may run
//!   on the rayon pool (`CostCfg::parallel`); collection and summation run in
//!   a fixed order, so both modes return identical values and the same error.
//! - Pair failures are never replaced by a default cost. They surface as
//!   [`CostError::Edge`] carrying the pair's indices.

mod lookup;
mod matrix;
mod tour;

pub use lookup::NodeGeometry;
pub use matrix::{
    build_adjacency_matrix, build_adjacency_matrix_with, build_configuration_matrix, CostMatrix,
};
pub use tour::{configuration_tour_cost, tour_cost, tour_cost_with, tour_edge_lengths};
