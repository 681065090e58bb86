//! RGB colors carried by game bodies for the host renderer

use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const ORANGE: Color = Color::rgb(255, 200, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Random color drawn from the simulation RNG
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::rgb(rng.random(), rng.random(), rng.random())
    }

    /// Packed `0xRRGGBB`
    pub fn to_u32(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}
