//! Candidate lengths of the four CSC families.
//!
//! Arc sweeps are measured on the *radial* heading: the compass bearing from a
//! circle center to the vehicle. On a right circle the radial heading of a
//! vehicle with heading `h` is `h − π/2`; on a left circle it is `h + π/2`.
//! Each candidate is `straight + r·(start sweep) + r·(end sweep)`.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::angle::{ccw_sweep, cw_sweep, heading_between};
use crate::error::DubinsError;
use crate::types::{Configuration, PathFamily};

use super::circles::TurningCircles;

/// Right arc, outer tangent, right arc.
pub(crate) fn rsr(start: &Configuration, end: &Configuration, c: &TurningCircles, r: f64) -> f64 {
    let x = heading_between(c.start_right, c.end_right);
    let straight = (c.end_right - c.start_right).norm();
    straight
        + r * cw_sweep(start.heading - FRAC_PI_2, x - FRAC_PI_2)
        + r * cw_sweep(x - FRAC_PI_2, end.heading - FRAC_PI_2)
}

/// Right arc, crossing tangent, left arc.
pub(crate) fn rsl(
    start: &Configuration,
    end: &Configuration,
    c: &TurningCircles,
    r: f64,
) -> Result<f64, DubinsError> {
    let sep = (c.end_left - c.start_right).norm();
    let ratio = crossing_ratio(PathFamily::Rsl, sep, r)?;
    let x = heading_between(c.start_right, c.end_left);
    // radial heading of the tangent point on the start circle
    let t = x - FRAC_PI_2 + ratio.asin();
    Ok(crossing_straight(sep, r)
        + r * cw_sweep(start.heading - FRAC_PI_2, t)
        + r * ccw_sweep(t + PI, end.heading + FRAC_PI_2))
}

/// Left arc, crossing tangent, right arc.
pub(crate) fn lsr(
    start: &Configuration,
    end: &Configuration,
    c: &TurningCircles,
    r: f64,
) -> Result<f64, DubinsError> {
    let sep = (c.end_right - c.start_left).norm();
    let ratio = crossing_ratio(PathFamily::Lsr, sep, r)?;
    let x = heading_between(c.start_left, c.end_right);
    let t = x + ratio.acos();
    Ok(crossing_straight(sep, r)
        + r * ccw_sweep(start.heading + FRAC_PI_2, t)
        + r * cw_sweep(t - PI, end.heading - FRAC_PI_2))
}

/// Left arc, outer tangent, left arc.
pub(crate) fn lsl(start: &Configuration, end: &Configuration, c: &TurningCircles, r: f64) -> f64 {
    let x = heading_between(c.start_left, c.end_left);
    let straight = (c.end_left - c.start_left).norm();
    straight
        + r * ccw_sweep(start.heading + FRAC_PI_2, x + FRAC_PI_2)
        + r * ccw_sweep(x + FRAC_PI_2, end.heading + FRAC_PI_2)
}

/// `2r / sep`, rejected when outside the domain of asin/acos.
fn crossing_ratio(family: PathFamily, sep: f64, r: f64) -> Result<f64, DubinsError> {
    let ratio = 2.0 * r / sep;
    if (-1.0..=1.0).contains(&ratio) {
        Ok(ratio)
    } else {
        Err(DubinsError::GeometryInfeasible { family, ratio })
    }
}

/// Length of the crossing tangent between two circles of radius `r`.
#[inline]
fn crossing_straight(sep: f64, r: f64) -> f64 {
    (sep * sep - 4.0 * r * r).max(0.0).sqrt()
}
