use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector2;

use crate::angle::{heading_to_angle, unit};
use crate::types::Configuration;

/// Centers of the four turning circles of radius `r` tangent to the start and
/// end directions of travel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TurningCircles {
    pub start_right: Vector2<f64>,
    pub start_left: Vector2<f64>,
    pub end_right: Vector2<f64>,
    pub end_left: Vector2<f64>,
}

impl TurningCircles {
    pub fn new(start: &Configuration, end: &Configuration, r: f64) -> Self {
        let alpha = heading_to_angle(start.heading);
        let beta = heading_to_angle(end.heading);
        Self {
            start_right: start.position() + unit(alpha - FRAC_PI_2) * r,
            start_left: start.position() + unit(alpha + FRAC_PI_2) * r,
            end_right: end.position() + unit(beta - FRAC_PI_2) * r,
            end_left: end.position() + unit(beta + FRAC_PI_2) * r,
        }
    }
}
