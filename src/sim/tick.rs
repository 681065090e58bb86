//! Fixed simulation tick
//!
//! One call advances the whole game one frame: the paddle moves first, then
//! every ball advances against the updated environment. The two passes never
//! interleave, so no ball sees a paddle halfway through its move.

use serde::{Deserialize, Serialize};

use super::ball::Advance;
use super::collision::CollidableId;
use super::obstacle::Obstacle;
use super::paddle::PaddleInput;
use super::state::GameState;

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub paddle: PaddleInput,
}

/// One ball striking one collidable during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounce {
    pub ball: usize,
    pub collidable: CollidableId,
}

/// What happened during a tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickReport {
    pub bounces: Vec<Bounce>,
    /// Balls that did not move because their velocity is zero
    pub stationary: usize,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) -> TickReport {
    state.time_ticks += 1;

    // Paddle pass
    if let Some(paddle) = state
        .environment
        .get_mut(state.paddle)
        .and_then(Obstacle::as_paddle_mut)
    {
        paddle.time_passed(input.paddle);
    }

    // Ball pass, in registration order
    let mut report = TickReport::default();
    let environment = &state.environment;
    for (index, ball) in state.balls.iter_mut().enumerate() {
        match ball.advance(environment) {
            Advance::Bounced { collidable, .. } => report.bounces.push(Bounce {
                ball: index,
                collidable,
            }),
            Advance::Stationary => report.stationary += 1,
            Advance::Moved => {}
        }
    }

    if !report.bounces.is_empty() {
        log::debug!(
            "Tick {}: {} bounce(s)",
            state.time_ticks,
            report.bounces.len()
        );
    }

    report
}
