//! The player's paddle

use serde::{Deserialize, Serialize};

use super::collision::Collidable;
use super::color::Color;
use super::point::Point;
use super::rect::Rectangle;
use super::velocity::Velocity;
use crate::consts::{EPSILON, PADDLE_REGIONS, PADDLE_STEP};

/// Outgoing heading (degrees) per rebound region, left to right.
/// `None` marks the middle region, which mirrors the incoming velocity.
const REGION_ANGLES: [Option<f64>; PADDLE_REGIONS] =
    [Some(60.0), Some(30.0), None, Some(330.0), Some(300.0)];

/// Horizontal movement requested by the host for one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleInput {
    pub left: bool,
    pub right: bool,
}

/// Player-controlled paddle sliding along a fixed row.
///
/// Its rectangle is replaced wholesale on every move, never edited in place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    rect: Rectangle,
    pub color: Color,
    /// Distance moved per tick
    pub step: f64,
    /// Play-field limits used for wrap-around
    pub border_left: f64,
    pub border_right: f64,
}

impl Paddle {
    pub fn new(rect: Rectangle, color: Color, border_left: f64, border_right: f64) -> Self {
        Self {
            rect,
            color,
            step: PADDLE_STEP,
            border_left,
            border_right,
        }
    }

    #[inline]
    pub fn rect(&self) -> Rectangle {
        self.rect
    }

    pub fn move_left(&mut self) {
        self.rect = self.rect.translated(-self.step, 0.0);
    }

    pub fn move_right(&mut self) {
        self.rect = self.rect.translated(self.step, 0.0);
    }

    /// Apply one tick of input, then wrap around the borders: leaving on one
    /// side puts the paddle flush against the opposite border.
    pub fn time_passed(&mut self, input: PaddleInput) {
        if input.left {
            self.move_left();
        }
        if input.right {
            self.move_right();
        }

        if self.rect.left() < self.border_left {
            self.rect = self.rect.with_left(self.border_right - self.rect.width());
        }
        if self.rect.right() > self.border_right {
            self.rect = self.rect.with_left(self.border_left);
        }
    }

    /// Rebound region (0-based, left to right) containing `x`, or `None`
    /// when `x` is off the paddle face.
    pub fn region_at(&self, x: f64) -> Option<usize> {
        let left = self.rect.left();
        let right = self.rect.right();
        if x < left - EPSILON || x > right + EPSILON {
            return None;
        }

        let width = self.rect.width();
        if width <= EPSILON {
            return Some(PADDLE_REGIONS / 2);
        }

        let region_width = width / PADDLE_REGIONS as f64;
        let offset = (x - left).clamp(0.0, width);
        Some(((offset / region_width).floor() as usize).min(PADDLE_REGIONS - 1))
    }
}

impl Collidable for Paddle {
    fn collision_rectangle(&self) -> Rectangle {
        self.rect
    }

    /// Pick the outgoing direction from where the ball struck the face.
    ///
    /// Outer regions send the ball off at a fixed angle keeping its speed;
    /// the middle region just reverses `dy`.
    fn hit(&self, collision_point: Point, current_velocity: Velocity) -> Velocity {
        let dx = current_velocity.dx();
        let dy = current_velocity.dy();
        let speed = current_velocity.speed();

        match self.region_at(collision_point.x()) {
            Some(region) => match REGION_ANGLES[region] {
                Some(angle) => Velocity::from_angle_and_speed(angle, -speed),
                None => Velocity::new(dx, -dy),
            },
            None => current_velocity,
        }
    }
}
