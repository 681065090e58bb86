//! Static blocks: level bricks and arena borders

use serde::{Deserialize, Serialize};

use super::collision::Collidable;
use super::color::Color;
use super::point::Point;
use super::rect::Rectangle;
use super::velocity::Velocity;
use crate::approx_eq;

/// A rectangle that mirrors whatever strikes it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub rect: Rectangle,
    pub color: Color,
}

impl Block {
    pub fn new(rect: Rectangle, color: Color) -> Self {
        Self { rect, color }
    }
}

impl Collidable for Block {
    fn collision_rectangle(&self) -> Rectangle {
        self.rect
    }

    /// Flip the velocity component perpendicular to the struck edge.
    ///
    /// Vertical edges are checked first, then horizontal ones, each on its
    /// own, so a corner hit flips both axes.
    fn hit(&self, collision_point: Point, current_velocity: Velocity) -> Velocity {
        let mut dx = current_velocity.dx();
        let mut dy = current_velocity.dy();
        let (x, y) = (collision_point.x(), collision_point.y());

        if approx_eq(x, self.rect.left()) || approx_eq(x, self.rect.right()) {
            dx = -dx;
        }
        if approx_eq(y, self.rect.top()) || approx_eq(y, self.rect.bottom()) {
            dy = -dy;
        }

        Velocity::new(dx, dy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block() -> Block {
        // x in [100, 150], y in [200, 220]
        Block::new(Rectangle::new(Point::new(100.0, 200.0), 50.0, 20.0), Color::BLUE)
    }

    #[test]
    fn test_vertical_edge_flips_dx() {
        let v = block().hit(Point::new(100.0, 210.0), Velocity::new(5.0, 5.0));
        assert_eq!(v, Velocity::new(-5.0, 5.0));

        let v = block().hit(Point::new(150.0, 210.0), Velocity::new(-5.0, 5.0));
        assert_eq!(v, Velocity::new(5.0, 5.0));
    }

    #[test]
    fn test_horizontal_edge_flips_dy() {
        let v = block().hit(Point::new(120.0, 200.0), Velocity::new(5.0, 5.0));
        assert_eq!(v, Velocity::new(5.0, -5.0));

        let v = block().hit(Point::new(120.0, 220.0), Velocity::new(5.0, -5.0));
        assert_eq!(v, Velocity::new(5.0, 5.0));
    }

    #[test]
    fn test_corner_flips_both() {
        let v = block().hit(Point::new(100.0, 200.0), Velocity::new(5.0, 5.0));
        assert_eq!(v, Velocity::new(-5.0, -5.0));
    }

    #[test]
    fn test_edge_classification_tolerates_rounding() {
        // Accumulated error leaves the point a hair off the boundary
        let v = block().hit(Point::new(100.0 + 1e-9, 210.0), Velocity::new(5.0, 5.0));
        assert_eq!(v, Velocity::new(-5.0, 5.0));
    }

    #[test]
    fn test_interior_point_leaves_velocity() {
        let v = block().hit(Point::new(120.0, 210.0), Velocity::new(5.0, 5.0));
        assert_eq!(v, Velocity::new(5.0, 5.0));
    }
}
