use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

use nalgebra::Vector2;

use crate::error::CostError;
use crate::types::Configuration;

/// Read-only position lookup for opaque node identifiers.
///
/// This is the only capability the aggregation layer needs from a node store;
/// headings are supplied separately by the caller.
pub trait NodeGeometry<N> {
    fn position(&self, node: &N) -> Option<Vector2<f64>>;
}

impl NodeGeometry<usize> for [Vector2<f64>] {
    #[inline]
    fn position(&self, node: &usize) -> Option<Vector2<f64>> {
        self.get(*node).copied()
    }
}

impl NodeGeometry<usize> for Vec<Vector2<f64>> {
    #[inline]
    fn position(&self, node: &usize) -> Option<Vector2<f64>> {
        self.as_slice().position(node)
    }
}

/// Positions of full configurations; their headings are ignored here.
impl NodeGeometry<usize> for [Configuration] {
    #[inline]
    fn position(&self, node: &usize) -> Option<Vector2<f64>> {
        self.get(*node).map(Configuration::position)
    }
}

impl<N: Eq + Hash, S: BuildHasher> NodeGeometry<N> for HashMap<N, Vector2<f64>, S> {
    #[inline]
    fn position(&self, node: &N) -> Option<Vector2<f64>> {
        self.get(node).copied()
    }
}

/// Pair every node with its position and heading, in input order.
pub(crate) fn resolve_configurations<N, G, H>(
    nodes: &[N],
    geometry: &G,
    heading_of: &H,
) -> Result<Vec<Configuration>, CostError>
where
    G: NodeGeometry<N> + ?Sized,
    H: Fn(&N) -> f64,
{
    nodes
        .iter()
        .enumerate()
        .map(|(index, node)| -> Result<Configuration, CostError> {
            let p = geometry
                .position(node)
                .ok_or(CostError::UnknownNode { index })?;
            Ok(Configuration::from_position(p, heading_of(node)))
        })
        .collect()
}
