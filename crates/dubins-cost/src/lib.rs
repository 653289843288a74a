//! Dubins path lengths and ATSP cost aggregation.
//!
//! Layout
//! - `angle`: compass heading ↔ mathematical angle, wrapping into `[0, 2π)`.
//! - `path`: shortest curve-straight-curve length between two configurations.
//! - `cost`: adjacency matrix and tour cost over caller-owned nodes.
//! - `scatter`: seeded node fixtures that respect the separation precondition.
//!
//! Headings are compass-style throughout: 0 along +y, clockwise positive.
//! All operations are pure; diagnostics go through `tracing`.

pub mod angle;
pub mod cfg;
pub mod cost;
pub mod error;
pub mod path;
pub mod scatter;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{CostCfg, MAX_EDGE_COST, SEPARATION_FACTOR};
pub use cost::{
    build_adjacency_matrix, build_adjacency_matrix_with, build_configuration_matrix,
    configuration_tour_cost, tour_cost, tour_cost_with, tour_edge_lengths, CostMatrix,
    NodeGeometry,
};
pub use error::{CostError, DubinsError, EdgeError, ScatterError};
pub use path::{dubins_path_length, family_lengths, shortest_path, TurningCircles};
pub use types::{Configuration, DubinsLength, PathFamily};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::angle::{angle_to_heading, heading_between, heading_to_angle, wrap_angle};
    pub use crate::cost::{
        build_adjacency_matrix, build_configuration_matrix, configuration_tour_cost, tour_cost,
        CostMatrix, NodeGeometry,
    };
    pub use crate::path::{dubins_path_length, shortest_path};
    pub use crate::scatter::{scatter_configurations, ScatterCfg};
    pub use crate::{Configuration, CostCfg, CostError, DubinsError, PathFamily};
    pub use nalgebra::Vector2 as Vec2;
}
