//! Dense all-pairs cost matrix for asymmetric TSP solvers.

use nalgebra::DMatrix;
use rayon::prelude::*;

use crate::cfg::CostCfg;
use crate::error::{CostError, EdgeError};
use crate::path::dubins_path_length;
use crate::types::Configuration;

use super::lookup::{resolve_configurations, NodeGeometry};

/// Square matrix of directed path lengths, indexed in node input order.
///
/// `costs[(i, j)]` is the length from node `i` to node `j`; the diagonal holds
/// `diagonal_cost`. In general `costs[(i, j)] != costs[(j, i)]`.
#[derive(Clone, Debug, PartialEq)]
pub struct CostMatrix<N> {
    nodes: Vec<N>,
    costs: DMatrix<f64>,
    diagonal_cost: f64,
}

impl<N> CostMatrix<N> {
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Cost of row `i` → column `j`. `None` when out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.costs.get((i, j)).copied()
    }

    #[inline]
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.costs
    }

    #[inline]
    pub fn diagonal_cost(&self) -> f64 {
        self.diagonal_cost
    }

    /// Row-major copy, the shape most solver front-ends accept.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.costs
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Largest `|A[i][j] − A[j][i]|` over all pairs; 0 for symmetric matrices.
    pub fn asymmetry(&self) -> f64 {
        let n = self.len();
        let mut worst = 0.0f64;
        for i in 0..n {
            for j in (i + 1)..n {
                worst = worst.max((self.costs[(i, j)] - self.costs[(j, i)]).abs());
            }
        }
        worst
    }
}

impl<N: PartialEq> CostMatrix<N> {
    /// Cost between two node identifiers (first occurrence of each).
    pub fn cost(&self, from: &N, to: &N) -> Option<f64> {
        let i = self.nodes.iter().position(|n| n == from)?;
        let j = self.nodes.iter().position(|n| n == to)?;
        self.get(i, j)
    }
}

/// Build the matrix with the default [`CostCfg`].
pub fn build_adjacency_matrix<N, G, H>(
    nodes: &[N],
    geometry: &G,
    heading_of: H,
    r: f64,
) -> Result<CostMatrix<N>, CostError>
where
    N: Clone,
    G: NodeGeometry<N> + ?Sized,
    H: Fn(&N) -> f64,
{
    build_adjacency_matrix_with(nodes, geometry, heading_of, r, &CostCfg::default())
}

/// Build the `n × n` Dubins cost matrix for `nodes`.
///
/// Every off-diagonal cell is evaluated independently (on the rayon pool when
/// `cost_cfg.parallel`). The first failing pair in row-major order is
/// reported, regardless of evaluation mode.
pub fn build_adjacency_matrix_with<N, G, H>(
    nodes: &[N],
    geometry: &G,
    heading_of: H,
    r: f64,
    cost_cfg: &CostCfg,
) -> Result<CostMatrix<N>, CostError>
where
    N: Clone,
    G: NodeGeometry<N> + ?Sized,
    H: Fn(&N) -> f64,
{
    let _span = tracing::debug_span!("adjacency_matrix", n = nodes.len(), r).entered();
    let configs = resolve_configurations(nodes, geometry, &heading_of)?;
    let costs = pair_costs(&configs, r, cost_cfg)?;
    tracing::debug!(
        n = configs.len(),
        parallel = cost_cfg.parallel,
        "adjacency matrix built"
    );
    Ok(CostMatrix {
        nodes: nodes.to_vec(),
        costs,
        diagonal_cost: cost_cfg.diagonal_cost,
    })
}

/// Matrix over a plain list of configurations; node `i` is `configs[i]`.
pub fn build_configuration_matrix(
    configs: &[Configuration],
    r: f64,
    cost_cfg: &CostCfg,
) -> Result<CostMatrix<usize>, CostError> {
    let ids: Vec<usize> = (0..configs.len()).collect();
    build_adjacency_matrix_with(&ids, configs, |&i: &usize| configs[i].heading, r, cost_cfg)
}

fn pair_costs(
    configs: &[Configuration],
    r: f64,
    cost_cfg: &CostCfg,
) -> Result<DMatrix<f64>, EdgeError> {
    let n = configs.len();
    let cell = |k: usize| -> Result<f64, EdgeError> {
        let (i, j) = (k / n, k % n);
        if i == j {
            return Ok(cost_cfg.diagonal_cost);
        }
        dubins_path_length(&configs[i], &configs[j], r).map_err(|source| EdgeError {
            from: i,
            to: j,
            source,
        })
    };
    let cells: Vec<Result<f64, EdgeError>> = if cost_cfg.parallel {
        (0..n * n).into_par_iter().map(cell).collect()
    } else {
        (0..n * n).map(cell).collect()
    };
    let values = cells.into_iter().collect::<Result<Vec<f64>, EdgeError>>()?;
    Ok(DMatrix::from_row_slice(n, n, &values))
}
