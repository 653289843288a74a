//! Value types shared by the path core and the aggregation layer.

use std::fmt;

use nalgebra::Vector2;

/// Vehicle state: planar position plus compass heading (radians).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Configuration {
    pub x: f64,
    pub y: f64,
    pub heading: f64,
}

impl Configuration {
    #[inline]
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    #[inline]
    pub fn from_position(p: Vector2<f64>, heading: f64) -> Self {
        Self::new(p.x, p.y, heading)
    }

    #[inline]
    pub fn position(&self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    /// Straight-line distance between the two positions (headings ignored).
    #[inline]
    pub fn distance(&self, other: &Configuration) -> f64 {
        (self.position() - other.position()).norm()
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.heading.is_finite()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}; {})", self.x, self.y, self.heading)
    }
}

/// Curve-straight-curve topology. R = clockwise arc, L = counterclockwise arc.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathFamily {
    Rsr,
    Rsl,
    Lsr,
    Lsl,
}

impl PathFamily {
    /// Evaluation order; ties in length resolve to the earlier family.
    pub const ALL: [PathFamily; 4] = [
        PathFamily::Rsr,
        PathFamily::Rsl,
        PathFamily::Lsr,
        PathFamily::Lsl,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PathFamily::Rsr => "RSR",
            PathFamily::Rsl => "RSL",
            PathFamily::Lsr => "LSR",
            PathFamily::Lsl => "LSL",
        }
    }
}

impl fmt::Display for PathFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Shortest CSC length together with the family that realizes it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DubinsLength {
    pub family: PathFamily,
    pub length: f64,
}
