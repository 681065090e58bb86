//! Game state and level setup
//!
//! Everything the simulation mutates lives in [`GameState`]; it is plain data
//! and serializes as a whole.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::block::Block;
use super::collision::{Collidable, CollidableId};
use super::color::Color;
use super::environment::GameEnvironment;
use super::obstacle::Obstacle;
use super::paddle::Paddle;
use super::point::Point;
use super::rect::Rectangle;
use super::velocity::Velocity;
use crate::consts::{BLOCK_HEIGHT, BLOCK_LAST_COLUMN, BLOCK_ROWS, BLOCK_WIDTH};
use crate::settings::Settings;

/// A renderable primitive handed to the host each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Circle {
        center: Point,
        radius: u32,
        color: Color,
    },
    Rect {
        rect: Rectangle,
        color: Color,
    },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed the level colors were drawn from
    pub seed: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Borders, blocks and the paddle, in registration order
    pub environment: GameEnvironment<Obstacle>,
    /// Balls in play, advanced in this order every tick
    pub balls: Vec<Ball>,
    /// Handle of the paddle inside `environment`
    pub paddle: CollidableId,
}

impl GameState {
    /// Build the default level described by `settings`
    pub fn new(settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let mut environment: GameEnvironment<Obstacle> = GameEnvironment::new();

        let w = settings.screen_width;
        let h = settings.screen_height;
        let border = settings.border_size;

        // Frame: left, right, top, bottom
        for rect in [
            Rectangle::new(Point::new(0.0, 0.0), border, h),
            Rectangle::new(Point::new(w - border, 0.0), border, h),
            Rectangle::new(Point::new(0.0, 0.0), w, border),
            Rectangle::new(Point::new(0.0, h - border), w, border),
        ] {
            environment.add_collidable(Block::new(rect, Color::GRAY));
        }

        let mut paddle = Paddle::new(
            Rectangle::new(
                Point::new(w / 2.0, h - 2.0 * border),
                settings.paddle_width,
                settings.paddle_height,
            ),
            Color::ORANGE,
            border,
            w - border,
        );
        paddle.step = settings.paddle_step;
        let paddle = environment.add_collidable(paddle);

        // Staircase of bricks, one random color per row
        for row in 0..BLOCK_ROWS {
            let color = Color::random(&mut rng);
            for col in row..=BLOCK_LAST_COLUMN {
                let upper_left = Point::new(
                    BLOCK_WIDTH * col as f64 + 150.0 - border,
                    100.0 + row as f64 * border,
                );
                environment.add_collidable(Block::new(
                    Rectangle::new(upper_left, BLOCK_WIDTH, BLOCK_HEIGHT),
                    color,
                ));
            }
        }

        let balls = (0..settings.ball_count)
            .map(|i| {
                Ball::new(settings.ball_start, settings.ball_radius, Color::WHITE)
                    .with_velocity(Velocity::new(1.0 + i as f64, 3.0))
            })
            .collect::<Vec<_>>();

        log::info!(
            "Level ready: {} collidables, {} balls, seed {}",
            environment.len(),
            balls.len(),
            settings.seed
        );

        Self {
            seed: settings.seed,
            time_ticks: 0,
            environment,
            balls,
            paddle,
        }
    }

    /// The paddle registered at setup
    pub fn paddle(&self) -> Option<&Paddle> {
        self.environment.get(self.paddle).and_then(Obstacle::as_paddle)
    }

    /// Shapes to draw this frame: collidables first, then balls on top
    pub fn draw_list(&self) -> Vec<Shape> {
        let mut shapes = Vec::with_capacity(self.environment.len() + self.balls.len());
        shapes.extend(self.environment.iter().map(|(_, obstacle)| {
            let color = match obstacle {
                Obstacle::Block(b) => b.color,
                Obstacle::Paddle(p) => p.color,
            };
            Shape::Rect {
                rect: obstacle.collision_rectangle(),
                color,
            }
        }));
        shapes.extend(self.balls.iter().map(|ball| Shape::Circle {
            center: ball.center(),
            radius: ball.radius(),
            color: ball.color,
        }));
        shapes
    }
}
