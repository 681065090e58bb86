//! Per-tick displacement

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::point::Point;

/// Change in position per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity {
    dx: f64,
    dy: f64,
}

impl Velocity {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Build a velocity from a heading in degrees and a speed.
    ///
    /// The angle is measured clockwise from "up" in screen terms, so
    /// `dx = sin(angle) * speed` and `dy = cos(angle) * speed`. A negative
    /// speed points the result the opposite way, which is how paddle bounces
    /// send the ball back upward.
    pub fn from_angle_and_speed(angle_degrees: f64, speed: f64) -> Self {
        let rad = angle_degrees.to_radians();
        Self {
            dx: rad.sin() * speed,
            dy: rad.cos() * speed,
        }
    }

    #[inline]
    pub fn dx(&self) -> f64 {
        self.dx
    }

    #[inline]
    pub fn dy(&self) -> f64 {
        self.dy
    }

    /// Magnitude of the displacement
    pub fn speed(&self) -> f64 {
        self.as_dvec2().length()
    }

    pub fn is_zero(&self) -> bool {
        self.dx == 0.0 && self.dy == 0.0
    }

    /// Translate `p` by one tick of this velocity
    pub fn apply_to_point(&self, p: Point) -> Point {
        Point::from(p.as_dvec2() + self.as_dvec2())
    }

    #[inline]
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.dx, self.dy)
    }
}

impl From<DVec2> for Velocity {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}
