//! Dubins cost of an ordered tour.

use rayon::prelude::*;

use crate::cfg::CostCfg;
use crate::error::{CostError, EdgeError};
use crate::path::dubins_path_length;
use crate::types::Configuration;

use super::lookup::{resolve_configurations, NodeGeometry};

/// Length of each tour edge, in tour order.
///
/// Edge `k` runs from `tour[k]` to `tour[k + 1]`; with `close_loop` a final
/// edge returns from the last node to the first. Tours with fewer than two
/// nodes have no edges.
pub fn tour_edge_lengths<N, G, H>(
    tour: &[N],
    geometry: &G,
    heading_of: H,
    r: f64,
    close_loop: bool,
    cost_cfg: &CostCfg,
) -> Result<Vec<f64>, CostError>
where
    G: NodeGeometry<N> + ?Sized,
    H: Fn(&N) -> f64,
{
    if tour.len() < 2 {
        return Ok(Vec::new());
    }
    let configs = resolve_configurations(tour, geometry, &heading_of)?;
    Ok(edge_lengths(&configs, r, close_loop, cost_cfg)?)
}

/// Tour cost with the default [`CostCfg`].
pub fn tour_cost<N, G, H>(
    tour: &[N],
    geometry: &G,
    heading_of: H,
    r: f64,
    close_loop: bool,
) -> Result<f64, CostError>
where
    G: NodeGeometry<N> + ?Sized,
    H: Fn(&N) -> f64,
{
    tour_cost_with(tour, geometry, heading_of, r, close_loop, &CostCfg::default())
}

/// Sum of the tour's edge lengths, added left to right in tour order.
///
/// Returns 0 for tours with fewer than two nodes. Any failing edge aborts the
/// sum with that edge's error.
pub fn tour_cost_with<N, G, H>(
    tour: &[N],
    geometry: &G,
    heading_of: H,
    r: f64,
    close_loop: bool,
    cost_cfg: &CostCfg,
) -> Result<f64, CostError>
where
    G: NodeGeometry<N> + ?Sized,
    H: Fn(&N) -> f64,
{
    let _span = tracing::debug_span!("tour_cost", n = tour.len(), r, close_loop).entered();
    let edges = tour_edge_lengths(tour, geometry, heading_of, r, close_loop, cost_cfg)?;
    let total: f64 = edges.iter().sum();
    tracing::debug!(edges = edges.len(), total, "tour cost");
    Ok(total)
}

/// Tour over a plain list of configurations, visited in slice order.
pub fn configuration_tour_cost(
    configs: &[Configuration],
    r: f64,
    close_loop: bool,
    cost_cfg: &CostCfg,
) -> Result<f64, CostError> {
    let ids: Vec<usize> = (0..configs.len()).collect();
    tour_cost_with(&ids, configs, |&i: &usize| configs[i].heading, r, close_loop, cost_cfg)
}

fn edge_lengths(
    configs: &[Configuration],
    r: f64,
    close_loop: bool,
    cost_cfg: &CostCfg,
) -> Result<Vec<f64>, EdgeError> {
    let m = configs.len();
    let count = if close_loop { m } else { m - 1 };
    let edge = |k: usize| -> Result<f64, EdgeError> {
        let to = (k + 1) % m;
        dubins_path_length(&configs[k], &configs[to], r).map_err(|source| EdgeError {
            from: k,
            to,
            source,
        })
    };
    let lengths: Vec<Result<f64, EdgeError>> = if cost_cfg.parallel {
        (0..count).into_par_iter().map(edge).collect()
    } else {
        (0..count).map(edge).collect()
    };
    lengths.into_iter().collect()
}
