//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per call to [`tick`]
//! - Seeded RNG only
//! - Stable iteration order (registration order)
//! - No rendering or platform dependencies

pub mod ball;
pub mod block;
pub mod collision;
pub mod color;
pub mod environment;
pub mod line;
pub mod obstacle;
pub mod paddle;
pub mod point;
pub mod rect;
pub mod state;
pub mod tick;
pub mod velocity;

pub use ball::{Advance, Ball};
pub use block::Block;
pub use collision::{Collidable, CollidableId, Collision, CollisionInfo};
pub use color::Color;
pub use environment::GameEnvironment;
pub use line::{Line, LineIntersection, Orientation};
pub use obstacle::Obstacle;
pub use paddle::{Paddle, PaddleInput};
pub use point::Point;
pub use rect::Rectangle;
pub use state::{GameState, Shape};
pub use tick::{Bounce, TickInput, TickReport, tick};
pub use velocity::Velocity;
