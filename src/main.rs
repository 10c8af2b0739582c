//! Neon Drift entry point
//!
//! Headless demo driver. Rendering, audio and real input live in
//! external collaborators; this binary exercises the core at a fixed
//! 60 Hz with scripted intent and reports the run.

use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use neon_drift::Tuning;
use neon_drift::sim::{GameState, TickInput, tick};

/// One minute of play at 60 Hz
const DEMO_TICKS: u64 = 3600;
const FRAME_MS: f64 = 1000.0 / 60.0;

fn main() {
    env_logger::init();
    log::info!("Neon Drift (headless) starting...");

    let tuning = Tuning::load(Path::new("tuning.json"));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0xDEC0DE);
    let mut state = GameState::with_tuning(seed, tuning);
    log::info!("Game initialized with seed: {seed}");

    let mut input = TickInput {
        fire: true,
        ..Default::default()
    };
    for t in 0..DEMO_TICKS {
        // Gentle weave keeps the car sweeping through the lanes
        input.move_left = (t / 120) % 2 == 0;
        input.move_right = !input.move_left;

        tick(&mut state, &input, t as f64 * FRAME_MS);

        for event in &state.events {
            log::debug!("tick {t}: {event:?}");
        }
        if state.game_over {
            log::info!("Run ended after {} ticks", state.tick_count);
            break;
        }
    }

    // Same zero-padded score the HUD shows
    println!(
        "score {:06} | health {:3} | fire level {} | enemies on road {}",
        state.score,
        state.health,
        state.fire_level,
        state.enemies.len()
    );
    if state.game_over {
        println!("game over");
    }
}
