//! Collision capability and query results
//!
//! Anything a ball can bounce off implements [`Collidable`]. The environment
//! answers trajectory queries with a [`Collision`], which keeps "nothing was
//! hit" apart from "the query itself was degenerate".

use serde::{Deserialize, Serialize};

use super::point::Point;
use super::rect::Rectangle;
use super::velocity::Velocity;

/// A shape that can be struck and decides the rebound velocity
pub trait Collidable {
    /// The axis-aligned shape used for collision detection
    fn collision_rectangle(&self) -> Rectangle;

    /// Velocity after a body moving at `current_velocity` strikes this
    /// shape at `collision_point`
    fn hit(&self, collision_point: Point, current_velocity: Velocity) -> Velocity;
}

impl<T: Collidable + ?Sized> Collidable for Box<T> {
    fn collision_rectangle(&self) -> Rectangle {
        (**self).collision_rectangle()
    }

    fn hit(&self, collision_point: Point, current_velocity: Velocity) -> Velocity {
        (**self).hit(collision_point, current_velocity)
    }
}

/// Handle to a collidable registered in a [`super::GameEnvironment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CollidableId(pub(crate) usize);

impl CollidableId {
    /// Registration index
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Where a trajectory first meets a collidable, and which one
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionInfo {
    point: Point,
    collidable: CollidableId,
}

impl CollisionInfo {
    pub fn new(point: Point, collidable: CollidableId) -> Self {
        Self { point, collidable }
    }

    pub fn collision_point(&self) -> Point {
        self.point
    }

    pub fn collidable(&self) -> CollidableId {
        self.collidable
    }
}

/// Result of a closest-collision query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collision {
    /// The trajectory meets a collidable
    Hit(CollisionInfo),
    /// The trajectory is clear
    Miss,
    /// The trajectory has zero length, so nothing can be hit
    Degenerate,
}

impl Collision {
    pub fn is_hit(&self) -> bool {
        matches!(self, Collision::Hit(_))
    }

    pub fn info(&self) -> Option<CollisionInfo> {
        match self {
            Collision::Hit(info) => Some(*info),
            Collision::Miss | Collision::Degenerate => None,
        }
    }
}
