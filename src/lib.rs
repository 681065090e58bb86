//! Arkanoid - a breakout-style ball-and-paddle game engine
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, game state, tick)
//! - `settings`: Data-driven game configuration
//!
//! Rendering, input devices and frame pacing belong to the host application,
//! which calls [`sim::tick`] once per simulated frame.

pub mod settings;
pub mod sim;

pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Tolerance for point equality and edge classification (pixels)
    pub const EPSILON: f64 = 1e-6;
    /// Tolerance for the orientation cross product (pixels squared)
    pub const ORIENTATION_EPSILON: f64 = 1e-9;

    /// Arena dimensions
    pub const SCREEN_WIDTH: f64 = 800.0;
    pub const SCREEN_HEIGHT: f64 = 600.0;
    pub const BORDER_SIZE: f64 = 20.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 100.0;
    pub const PADDLE_HEIGHT: f64 = 20.0;
    /// Horizontal distance covered per tick while a key is held
    pub const PADDLE_STEP: f64 = 5.0;
    /// Number of rebound regions across the paddle face
    pub const PADDLE_REGIONS: usize = 5;

    /// Ball defaults
    pub const BALL_RADIUS: u32 = 6;
    pub const BALL_COUNT: usize = 2;

    /// Block defaults
    pub const BLOCK_WIDTH: f64 = 50.0;
    pub const BLOCK_HEIGHT: f64 = 20.0;
    pub const BLOCK_ROWS: usize = 5;
    pub const BLOCK_LAST_COLUMN: usize = 12;

    /// Host frame rate the level speeds are tuned for
    pub const FRAMES_PER_SECOND: u32 = 60;
}

/// Tolerant float comparison used by all geometric classification
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= consts::EPSILON
}

/// Sign of `v` as -1, 0 or 1 (zero and NaN map to 0)
#[inline]
pub fn signum_or_zero(v: f64) -> f64 {
    if v > 0.0 {
        1.0
    } else if v < 0.0 {
        -1.0
    } else {
        0.0
    }
}
