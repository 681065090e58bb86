//! Arkanoid headless runner
//!
//! Builds the default level and runs the simulation without a window:
//! `arkanoid [settings.json] [ticks]`. Final ball states are printed as JSON.

use arkanoid::Settings;
use arkanoid::sim::{GameState, TickInput, tick};

const DEFAULT_TICKS: u64 = 600;

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };
    let ticks = match args.next().map(|s| s.parse::<u64>()) {
        Some(Ok(n)) => n,
        Some(Err(e)) => {
            log::warn!("Invalid tick count ({}), running {}", e, DEFAULT_TICKS);
            DEFAULT_TICKS
        }
        None => DEFAULT_TICKS,
    };

    log::info!("Arkanoid (headless) starting: {} ticks", ticks);

    let mut state = GameState::new(&settings);
    let input = TickInput::default();
    let mut bounces = 0usize;

    for _ in 0..ticks {
        let report = tick(&mut state, &input);
        for bounce in &report.bounces {
            log::debug!(
                "tick {}: ball {} bounced off collidable {}",
                state.time_ticks,
                bounce.ball,
                bounce.collidable.index()
            );
        }
        bounces += report.bounces.len();
    }

    log::info!(
        "Finished {} ticks ({:.1}s of play at {} fps), {} bounces",
        state.time_ticks,
        state.time_ticks as f64 / settings.frames_per_second.max(1) as f64,
        settings.frames_per_second,
        bounces
    );

    match serde_json::to_string_pretty(&state.balls) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            log::error!("Failed to serialize ball states: {}", e);
            std::process::exit(1);
        }
    }
}
