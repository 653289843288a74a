//! Error types. All of them describe bad input geometry; none are transient.

use thiserror::Error;

use crate::types::PathFamily;

/// Failure of a single-pair path-length evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum DubinsError {
    /// Turning radius is zero, negative, or not finite.
    #[error("turning radius must be positive and finite, got {radius}")]
    InvalidRadius { radius: f64 },
    /// A coordinate or heading is NaN or infinite.
    #[error("configuration contains a non-finite coordinate or heading")]
    NonFinite,
    /// Endpoints are closer than `SEPARATION_FACTOR · r`.
    #[error("endpoints are {distance} apart, below the required {minimum} (3·r)")]
    DistanceTooShort { distance: f64, minimum: f64 },
    /// The crossing-tangent ratio `2r / separation` left `[-1, 1]`.
    #[error("{family} crossing tangent is infeasible: 2r/separation = {ratio}")]
    GeometryInfeasible { family: PathFamily, ratio: f64 },
}

/// A pair failure inside an aggregation, tagged with the pair's positions
/// (matrix row/column or tour indices).
#[derive(Clone, Copy, Debug, PartialEq, Error)]
#[error("edge {from} -> {to}: {source}")]
pub struct EdgeError {
    pub from: usize,
    pub to: usize,
    #[source]
    pub source: DubinsError,
}

/// Failure of a matrix build or tour evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum CostError {
    /// The geometry lookup has no position for the node at this input index.
    #[error("no position for node at index {index}")]
    UnknownNode { index: usize },
    #[error(transparent)]
    Edge(#[from] EdgeError),
}

/// Errors from the scattered-configuration sampler.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ScatterError {
    #[error("invalid scatter params: {reason}")]
    InvalidParams { reason: String },
    /// Rejection sampling ran out of attempts.
    #[error("placed only {placed} of {requested} configurations after {attempts} draws")]
    Exhausted {
        placed: usize,
        requested: usize,
        attempts: usize,
    },
}

impl ScatterError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}
