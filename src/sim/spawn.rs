//! Wall-clock-gated entity creation
//!
//! Each kind spawns on its own named gate, all compared against the
//! single clock reading the driver takes at tick start. Gates re-arm
//! to `now` when they fire (see `gate_ready`), so timing is wall-clock
//! based rather than frame-count based.
//!
//! Powerups are the one creation with no gate here: they drop as a
//! side effect of kills, in the collision pass.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

use super::projection::project;
use super::state::{Building, Enemy, EnemyBullet, EnemyKind, GameState, gate_ready};

/// Run all spawn gates for this tick
pub fn run(state: &mut GameState, now_ms: f64) {
    spawn_enemy(state, now_ms);
    spawn_building(state, now_ms);
    enemy_fire(state, now_ms);
}

fn spawn_enemy(state: &mut GameState, now_ms: f64) {
    if !gate_ready(now_ms, state.cooldowns.last_enemy_ms, state.tuning.enemy_spawn_ms) {
        return;
    }
    let kind = if state.rng.random::<f32>() < state.tuning.heavy_chance {
        EnemyKind::Heavy
    } else {
        EnemyKind::Scout
    };
    state.enemies.push(Enemy {
        z: 0.0,
        x_offset: (state.rng.random::<f32>() - 0.5) * state.tuning.enemy_lane_spread,
        kind,
        health: kind.base_health(),
        // Stagger the first volley so a fresh pack never fires in sync
        last_fire_ms: now_ms + state.rng.random::<f64>() * state.tuning.enemy_fire_jitter_ms,
    });
    state.cooldowns.last_enemy_ms = now_ms;
}

fn spawn_building(state: &mut GameState, now_ms: f64) {
    if !gate_ready(now_ms, state.cooldowns.last_building_ms, state.tuning.building_spawn_ms) {
        return;
    }
    state.buildings.push(Building {
        z: 0.0,
        side: if state.rng.random_bool(0.5) { 1.0 } else { -1.0 },
        // Width 70-130%, height 50-200%; rolled once, never resampled
        w_mult: 0.7 + state.rng.random::<f32>() * 0.6,
        h_mult: 0.5 + state.rng.random::<f32>() * 1.5,
        window_seed: state.rng.random_range(0..10),
    });
    state.cooldowns.last_building_ms = now_ms;
}

/// Volley fire from enemies inside the visible depth band
///
/// The first volley is jittered at spawn; every one after that comes
/// at the fixed interval.
fn enemy_fire(state: &mut GameState, now_ms: f64) {
    for enemy in &mut state.enemies {
        if !gate_ready(now_ms, enemy.last_fire_ms, state.tuning.enemy_fire_ms) {
            continue;
        }
        if enemy.z <= ENEMY_FIRE_BAND.0 || enemy.z >= ENEMY_FIRE_BAND.1 {
            continue;
        }
        let muzzle = project(enemy.z, enemy.x_offset);
        match enemy.kind {
            EnemyKind::Scout => {
                state.enemy_bullets.push(EnemyBullet {
                    pos: muzzle,
                    size: 5.0 * enemy.z,
                    damage: state.tuning.scout_damage,
                });
            }
            EnemyKind::Heavy => {
                // Twin muzzles on the hull edges
                let offset = HEAVY_MUZZLE_OFFSET * enemy.z;
                for dx in [-offset, offset] {
                    state.enemy_bullets.push(EnemyBullet {
                        pos: muzzle + Vec2::new(dx, 0.0),
                        size: 8.0 * enemy.z,
                        damage: state.tuning.heavy_damage,
                    });
                }
            }
        }
        enemy.last_fire_ms = now_ms;
    }
}
