//! 2D point value type

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::approx_eq;

/// An immutable point in screen space (y grows downward)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to `other`
    pub fn distance(&self, other: Point) -> f64 {
        self.as_dvec2().distance(other.as_dvec2())
    }

    /// Per-axis equality within [`crate::consts::EPSILON`].
    ///
    /// Not transitive: chains of near-equal points can drift apart.
    pub fn approx_eq(&self, other: Point) -> bool {
        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }

    #[inline]
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.as_dvec2()
    }
}
