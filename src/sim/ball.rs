//! The ball and its per-tick trajectory advance

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::collision::{Collidable, CollidableId, Collision};
use super::color::Color;
use super::environment::GameEnvironment;
use super::line::Line;
use super::point::Point;
use super::rect::Rectangle;
use super::velocity::Velocity;
use crate::signum_or_zero;

/// What happened to a ball during one advance
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Advance {
    /// Nothing in the way; moved one full step
    Moved,
    /// Struck a collidable, parked short of it and took its rebound velocity
    Bounced {
        collidable: CollidableId,
        point: Point,
    },
    /// Zero velocity; position unchanged
    Stationary,
}

/// A moving ball. The environment it bounces in is borrowed per advance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    center: Point,
    radius: u32,
    pub color: Color,
    velocity: Velocity,
}

impl Ball {
    /// `radius` is raised to at least 1
    pub fn new(center: Point, radius: u32, color: Color) -> Self {
        Self {
            center,
            radius: radius.max(1),
            color,
            velocity: Velocity::default(),
        }
    }

    pub fn with_velocity(mut self, velocity: Velocity) -> Self {
        self.velocity = velocity;
        self
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> u32 {
        self.radius
    }

    #[inline]
    pub fn velocity(&self) -> Velocity {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Velocity) {
        self.velocity = velocity;
    }

    /// Segment from the center to one step ahead, pushed a further radius
    /// along each axis the ball is moving on. A zero velocity component adds
    /// no extension on that axis.
    pub fn trajectory(&self) -> Line {
        let v = self.velocity.as_dvec2();
        let extension = DVec2::new(signum_or_zero(v.x), signum_or_zero(v.y)) * self.radius as f64;
        let end = self.center.as_dvec2() + v + extension;
        Line::new(self.center, Point::from(end))
    }

    /// Advance one tick against `environment`.
    ///
    /// Without a collision the ball moves by its velocity. Otherwise it stops
    /// one radius short of the hit point along the trajectory, asks the struck
    /// collidable for a new velocity, and takes one step with it so the same
    /// contact is not found again next tick.
    pub fn advance<C: Collidable>(&mut self, environment: &GameEnvironment<C>) -> Advance {
        if self.velocity.is_zero() {
            return Advance::Stationary;
        }

        let trajectory = self.trajectory();
        let info = match environment.closest_collision(&trajectory) {
            Collision::Hit(info) => info,
            Collision::Miss | Collision::Degenerate => {
                self.center = self.velocity.apply_to_point(self.center);
                return Advance::Moved;
            }
        };

        let point = info.collision_point();
        let radius = self.radius as f64;

        let distance_to_move = self.center.distance(point) - radius;
        let full_distance = self.center.distance(trajectory.end());
        let fraction = if full_distance > 0.0 {
            (distance_to_move / full_distance).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.center = trajectory.point_at_fraction(fraction);

        if let Some(collidable) = environment.get(info.collidable()) {
            self.velocity = collidable.hit(point, self.velocity);
        }
        self.center = self.velocity.apply_to_point(self.center);

        log::debug!(
            "Ball hit collidable {} at ({:.2}, {:.2}), new velocity ({:.2}, {:.2})",
            info.collidable().index(),
            point.x(),
            point.y(),
            self.velocity.dx(),
            self.velocity.dy()
        );

        Advance::Bounced {
            collidable: info.collidable(),
            point,
        }
    }

    /// Step inside `bounds`, reversing an axis whenever the next position
    /// would come within one radius of the boundary.
    pub fn move_within(&mut self, bounds: &Rectangle) {
        let r = self.radius as f64;
        let next = self.velocity.apply_to_point(self.center);
        let mut dx = self.velocity.dx();
        let mut dy = self.velocity.dy();

        if next.x() > bounds.right() - r || next.x() < bounds.left() + r {
            dx = -dx;
        }
        if next.y() > bounds.bottom() - r || next.y() < bounds.top() + r {
            dy = -dy;
        }

        self.velocity = Velocity::new(dx, dy);
        self.center = self.velocity.apply_to_point(self.center);
    }

    /// Reverse any axis on which the ball already touches the screen edge
    pub fn check_and_reverse(&mut self, width: f64, height: f64) {
        let r = self.radius as f64;
        let (x, y) = (self.center.x(), self.center.y());

        if x - r < 0.0 || x + r >= width {
            self.velocity = Velocity::new(-self.velocity.dx(), self.velocity.dy());
        }
        if y - r <= 0.0 || y + r >= height {
            self.velocity = Velocity::new(self.velocity.dx(), -self.velocity.dy());
        }
    }
}
