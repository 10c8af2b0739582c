//! Data-driven game balance
//!
//! Every knob a designer reaches for lives here: timing gates,
//! probabilities, damage and score values. Defaults match the shipped
//! balance; a partial JSON file overrides individual fields.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Game balance values, fixed for the lifetime of a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Global depth-advance rate per tick
    pub scroll_speed: f32,
    /// Minimum interval between player volleys
    pub fire_cooldown_ms: f64,
    /// Interval between enemy spawns
    pub enemy_spawn_ms: f64,
    /// Interval between building spawns
    pub building_spawn_ms: f64,
    /// Interval between volleys from a single enemy
    pub enemy_fire_ms: f64,
    /// First-volley stagger applied at spawn, so a fresh pack never
    /// fires in sync
    pub enemy_fire_jitter_ms: f64,
    /// Width of the spawn lane; x offsets are centered on the road
    pub enemy_lane_spread: f32,
    /// Probability that a spawned enemy is a Heavy
    pub heavy_chance: f32,
    /// Probability that a kill drops a powerup
    pub powerup_drop_chance: f32,
    pub scout_damage: i32,
    pub heavy_damage: i32,
    pub kill_score: u64,
    pub powerup_score: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            scroll_speed: 0.02,
            fire_cooldown_ms: 200.0,
            enemy_spawn_ms: 2500.0,
            building_spawn_ms: 1200.0,
            enemy_fire_ms: 2000.0,
            enemy_fire_jitter_ms: 1000.0,
            enemy_lane_spread: 600.0,
            heavy_chance: 0.2,
            powerup_drop_chance: 0.4,
            scout_damage: 20,
            heavy_damage: 40,
            kill_score: 500,
            powerup_score: 1000,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default tuning");
                Self::default()
            }
        }
    }
}
