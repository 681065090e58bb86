//! Tagged union of the collidables a level is built from

use serde::{Deserialize, Serialize};

use super::block::Block;
use super::collision::Collidable;
use super::paddle::Paddle;
use super::point::Point;
use super::rect::Rectangle;
use super::velocity::Velocity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Obstacle {
    Block(Block),
    Paddle(Paddle),
}

impl Obstacle {
    pub fn as_paddle(&self) -> Option<&Paddle> {
        match self {
            Obstacle::Paddle(p) => Some(p),
            Obstacle::Block(_) => None,
        }
    }

    pub fn as_paddle_mut(&mut self) -> Option<&mut Paddle> {
        match self {
            Obstacle::Paddle(p) => Some(p),
            Obstacle::Block(_) => None,
        }
    }
}

impl From<Block> for Obstacle {
    fn from(block: Block) -> Self {
        Obstacle::Block(block)
    }
}

impl From<Paddle> for Obstacle {
    fn from(paddle: Paddle) -> Self {
        Obstacle::Paddle(paddle)
    }
}

impl Collidable for Obstacle {
    fn collision_rectangle(&self) -> Rectangle {
        match self {
            Obstacle::Block(b) => b.collision_rectangle(),
            Obstacle::Paddle(p) => p.collision_rectangle(),
        }
    }

    fn hit(&self, collision_point: Point, current_velocity: Velocity) -> Velocity {
        match self {
            Obstacle::Block(b) => b.hit(collision_point, current_velocity),
            Obstacle::Paddle(p) => p.hit(collision_point, current_velocity),
        }
    }
}
