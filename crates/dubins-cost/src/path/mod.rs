//! Shortest CSC Dubins path length between two configurations.
//!
//! Purpose
//! - Evaluate the four curve-straight-curve families (RSR, RSL, LSR, LSL) and
//!   return the minimum. Only lengths are computed; no segment geometry.
//!
//! Preconditions
//! - `r > 0` and finite; all coordinates and headings finite.
//! - Endpoints at least `SEPARATION_FACTOR · r` apart. Closer pairs are
//!   rejected with `DistanceTooShort`; the CCC families that would cover them
//!   are not implemented.
//! - The crossing families need `2r ≤ center separation`; otherwise the call
//!   fails with `GeometryInfeasible` naming the family.
//!
//! Tracing
//! - Circle centers and candidate lengths are emitted at `trace` level.

mod circles;
mod families;

pub use circles::TurningCircles;

use crate::cfg::SEPARATION_FACTOR;
use crate::error::DubinsError;
use crate::types::{Configuration, DubinsLength, PathFamily};

/// Length of each CSC family, in `PathFamily::ALL` order.
pub fn family_lengths(
    start: &Configuration,
    end: &Configuration,
    r: f64,
) -> Result<[(PathFamily, f64); 4], DubinsError> {
    check_inputs(start, end, r)?;
    let circles = TurningCircles::new(start, end, r);
    tracing::trace!(
        start = %start,
        end = %end,
        r,
        start_right = ?(circles.start_right.x, circles.start_right.y),
        start_left = ?(circles.start_left.x, circles.start_left.y),
        end_right = ?(circles.end_right.x, circles.end_right.y),
        end_left = ?(circles.end_left.x, circles.end_left.y),
        "turning circles"
    );

    let l1 = families::rsr(start, end, &circles, r);
    let l2 = families::rsl(start, end, &circles, r)?;
    let l3 = families::lsr(start, end, &circles, r)?;
    let l4 = families::lsl(start, end, &circles, r);
    tracing::trace!(rsr = l1, rsl = l2, lsr = l3, lsl = l4, "candidate lengths");

    Ok([
        (PathFamily::Rsr, l1),
        (PathFamily::Rsl, l2),
        (PathFamily::Lsr, l3),
        (PathFamily::Lsl, l4),
    ])
}

/// Shortest CSC path: winning family plus its length.
pub fn shortest_path(
    start: &Configuration,
    end: &Configuration,
    r: f64,
) -> Result<DubinsLength, DubinsError> {
    let candidates = family_lengths(start, end, r)?;
    let mut best = candidates[0];
    for cand in &candidates[1..] {
        if cand.1 < best.1 {
            best = *cand;
        }
    }
    Ok(DubinsLength {
        family: best.0,
        length: best.1,
    })
}

/// Shortest CSC path length from `start` to `end` with turning radius `r`.
///
/// Not symmetric: swapping the endpoints generally changes the result.
pub fn dubins_path_length(
    start: &Configuration,
    end: &Configuration,
    r: f64,
) -> Result<f64, DubinsError> {
    shortest_path(start, end, r).map(|best| best.length)
}

fn check_inputs(start: &Configuration, end: &Configuration, r: f64) -> Result<(), DubinsError> {
    if !(r.is_finite() && r > 0.0) {
        return Err(DubinsError::InvalidRadius { radius: r });
    }
    if !(start.is_finite() && end.is_finite()) {
        return Err(DubinsError::NonFinite);
    }
    let distance = start.distance(end);
    let minimum = SEPARATION_FACTOR * r;
    if distance < minimum {
        return Err(DubinsError::DistanceTooShort { distance, minimum });
    }
    Ok(())
}

#[cfg(test)]
mod tests;
