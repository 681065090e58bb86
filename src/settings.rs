//! Game settings
//!
//! Loaded from a JSON file; any field left out takes its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::Point;

/// Level and body dimensions for a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub screen_width: f64,
    pub screen_height: f64,
    /// Thickness of the frame blocks; also the paddle's wrap-around margin
    pub border_size: f64,

    // === Paddle ===
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_step: f64,

    // === Balls ===
    pub ball_radius: u32,
    pub ball_count: usize,
    pub ball_start: Point,

    // === Host ===
    /// Tick rate the host loop should pace at
    pub frames_per_second: u32,
    /// Seed for block row colors
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            border_size: BORDER_SIZE,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_step: PADDLE_STEP,

            ball_radius: BALL_RADIUS,
            ball_count: BALL_COUNT,
            ball_start: Point::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),

            frames_per_second: FRAMES_PER_SECOND,
            seed: 12345,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from `path`, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {}, using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write settings to `path` as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path.as_ref(), json)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_layout() {
        let s = Settings::default();
        assert_eq!((s.screen_width, s.screen_height), (800.0, 600.0));
        assert_eq!(s.border_size, 20.0);
        assert_eq!(s.ball_radius, 6);
        assert_eq!(s.ball_count, 2);
        assert_eq!(s.ball_start, Point::new(400.0, 300.0));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let s = Settings::from_json(r#"{ "ball_count": 5, "seed": 7 }"#).expect("valid json");
        assert_eq!(s.ball_count, 5);
        assert_eq!(s.seed, 7);
        assert_eq!(s.paddle_width, PADDLE_WIDTH);
    }

    #[test]
    fn test_json_roundtrip() {
        let s = Settings {
            paddle_width: 150.0,
            ..Default::default()
        };
        let json = s.to_json().expect("serializes");
        assert_eq!(Settings::from_json(&json).expect("parses"), s);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(Settings::from_json("{ not json").is_err());
    }

    #[test]
    fn test_load_missing_file_falls_back() {
        let s = Settings::load("/nonexistent/arkanoid-settings.json");
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!("arkanoid-settings-{}.json", std::process::id()));
        let s = Settings {
            seed: 99,
            ..Default::default()
        };
        s.save(&path).expect("writes temp file");
        assert_eq!(Settings::load(&path), s);
        let _ = std::fs::remove_file(&path);
    }
}
