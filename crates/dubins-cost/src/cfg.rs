//! Constants and aggregation settings.
//!
//! Policy
//! - Geometric thresholds are fixed constants; they are part of the path
//!   contract rather than tuning knobs.
//! - Only the aggregation layer (matrix, tour) carries a runtime config.

/// Minimum endpoint separation, in multiples of the turning radius.
pub const SEPARATION_FACTOR: f64 = 3.0;

/// Arc sweeps this close to a full turn are treated as no turn at all.
pub(crate) const SWEEP_EPS: f64 = 1e-9;

/// Diagonal cost of an adjacency matrix; larger than any realizable edge.
pub const MAX_EDGE_COST: f64 = 999_999.0;

/// Settings for matrix and tour aggregation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CostCfg {
    /// Evaluate pairs on the rayon pool. Summation order is unaffected.
    pub parallel: bool,
    /// Value stored on the matrix diagonal.
    pub diagonal_cost: f64,
}

impl Default for CostCfg {
    fn default() -> Self {
        Self {
            parallel: true,
            diagonal_cost: MAX_EDGE_COST,
        }
    }
}

impl CostCfg {
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}
