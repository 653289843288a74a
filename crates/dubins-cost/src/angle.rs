//! Heading ↔ angle conversions and wrapping.
//!
//! Conventions
//! - A *heading* is compass-style: 0 points along +y, positive is clockwise.
//! - An *angle* is the usual mathematical one: 0 along +x, positive is
//!   counterclockwise. Trigonometric circle constructions use angles.
//! - Wrapped values live in `[0, 2π)`.
//!
//! With these conventions a clockwise (right) turn from heading `a` to heading
//! `b` sweeps `wrap(b − a)`, and a counterclockwise (left) turn sweeps
//! `wrap(a − b)`. See `cw_sweep` / `ccw_sweep`.

use std::f64::consts::{FRAC_PI_2, TAU};

use nalgebra::Vector2;

use crate::cfg::SWEEP_EPS;

/// Compass heading → mathematical angle.
#[inline]
pub fn heading_to_angle(heading: f64) -> f64 {
    FRAC_PI_2 - heading
}

/// Mathematical angle → compass heading. Inverse of [`heading_to_angle`].
#[inline]
pub fn angle_to_heading(angle: f64) -> f64 {
    FRAC_PI_2 - angle
}

/// Wrap any real angle into `[0, 2π)`.
///
/// Idempotent and `2π`-periodic. NaN and infinities come back as NaN.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let w = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if w >= TAU {
        0.0
    } else {
        w
    }
}

/// Compass bearing of the vector `a → b`.
#[inline]
pub fn heading_between(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    let d = b - a;
    d.x.atan2(d.y)
}

/// Unit vector pointing along the mathematical angle `angle`.
#[inline]
pub(crate) fn unit(angle: f64) -> Vector2<f64> {
    Vector2::new(angle.cos(), angle.sin())
}

/// Clockwise sweep from heading `from` to heading `to`, in `[0, 2π)`.
///
/// Both inputs are wrapped first and a full turn is added before the final
/// wrap, so the result is never negative. Sweeps within `SWEEP_EPS` of a full
/// turn collapse to 0.
#[inline]
pub(crate) fn cw_sweep(from: f64, to: f64) -> f64 {
    snap_full_turn(wrap_angle(TAU + wrap_angle(to) - wrap_angle(from)))
}

/// Counterclockwise sweep from heading `from` to heading `to`, in `[0, 2π)`.
#[inline]
pub(crate) fn ccw_sweep(from: f64, to: f64) -> f64 {
    snap_full_turn(wrap_angle(TAU + wrap_angle(from) - wrap_angle(to)))
}

#[inline]
fn snap_full_turn(sweep: f64) -> f64 {
    if TAU - sweep < SWEEP_EPS {
        0.0
    } else {
        sweep
    }
}
