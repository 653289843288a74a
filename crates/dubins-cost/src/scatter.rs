//! Reproducible scattered configurations for fixtures and benchmarks.
//!
//! Model
//! - Positions uniform in `[0, width] × [0, height]`, headings uniform in
//!   `[0, 2π)`.
//! - A draw closer than `min_separation` to an accepted position is rejected,
//!   so choosing `min_separation ≥ 3·r` yields node sets that satisfy the
//!   path-length distance precondition.
//! - Same `(cfg, seed)` always gives the same sequence.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::ScatterError;
use crate::types::Configuration;

/// Sampler parameters.
#[derive(Clone, Copy, Debug)]
pub struct ScatterCfg {
    pub count: usize,
    pub width: f64,
    pub height: f64,
    pub min_separation: f64,
    /// Total draws allowed before giving up.
    pub max_attempts: usize,
}

impl Default for ScatterCfg {
    fn default() -> Self {
        Self {
            count: 20,
            width: 100.0,
            height: 100.0,
            min_separation: 3.0,
            max_attempts: 100_000,
        }
    }
}

impl ScatterCfg {
    fn validate(&self) -> Result<(), ScatterError> {
        if !(self.width.is_finite() && self.height.is_finite()) {
            return Err(ScatterError::invalid("bounds must be finite"));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(ScatterError::invalid("width and height must be > 0"));
        }
        if !(self.min_separation.is_finite() && self.min_separation >= 0.0) {
            return Err(ScatterError::invalid("min_separation must be finite and >= 0"));
        }
        Ok(())
    }
}

/// Draw `cfg.count` configurations with pairwise separation ≥ `cfg.min_separation`.
pub fn scatter_configurations(
    cfg: &ScatterCfg,
    seed: u64,
) -> Result<Vec<Configuration>, ScatterError> {
    cfg.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut out: Vec<Configuration> = Vec::with_capacity(cfg.count);
    let mut attempts = 0usize;
    while out.len() < cfg.count {
        if attempts >= cfg.max_attempts {
            return Err(ScatterError::Exhausted {
                placed: out.len(),
                requested: cfg.count,
                attempts,
            });
        }
        attempts += 1;
        let p = Vector2::new(rng.gen::<f64>() * cfg.width, rng.gen::<f64>() * cfg.height);
        let heading = rng.gen::<f64>() * TAU;
        if out
            .iter()
            .all(|c| (c.position() - p).norm() >= cfg.min_separation)
        {
            out.push(Configuration::from_position(p, heading));
        }
    }
    tracing::debug!(count = out.len(), attempts, seed, "scattered configurations");
    Ok(out)
}
