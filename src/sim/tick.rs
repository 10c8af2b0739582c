//! Frame driver
//!
//! One call per rendered frame. Shake decay and the backdrop scroll
//! phase always run; everything else is gameplay and freezes the
//! moment the run ends. Input intent comes in as the latest values the
//! input collaborator saw; the clock comes in as a single monotonic
//! reading the core never takes itself.

use glam::Vec2;

use crate::consts::*;

use super::state::{Bullet, GameEvent, GameState, gate_ready};
use super::{collision, motion, spawn};

/// Input intent for a single tick
///
/// Conflicting signals are not rejected; they apply in a fixed order
/// (absolute position first, then the nudges).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub fire: bool,
    /// Absolute course position from touch dragging
    pub target_x: Option<f32>,
}

/// Advance the world by one frame
///
/// `now_ms` is this tick's monotonic clock reading, sampled once by
/// the scheduling collaborator. All spawn and fire gates compare
/// against it.
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    state.events.clear();

    // Always-running: shake decay and the backdrop phase keep moving
    // even over a frozen game-over scene
    state.shake_intensity *= SHAKE_DECAY;
    if state.shake_intensity < SHAKE_FLOOR {
        state.shake_intensity = 0.0;
    }
    state.grid_offset += state.speed;
    if state.grid_offset > 1.0 {
        state.grid_offset = 0.0;
    }

    if state.game_over {
        return;
    }
    state.tick_count += 1;

    apply_movement(state, input);
    if input.fire && gate_ready(now_ms, state.cooldowns.last_fire_ms, state.tuning.fire_cooldown_ms)
    {
        fire_volley(state);
        state.cooldowns.last_fire_ms = now_ms;
    }

    motion::advance(state);
    spawn::run(state, now_ms);
    collision::resolve(state);

    // Distance survived
    state.score += 1;
}

fn apply_movement(state: &mut GameState, input: &TickInput) {
    if let Some(x) = input.target_x {
        state.player_x = x.clamp(PLAYER_HALF_WIDTH, VIEW_WIDTH - PLAYER_HALF_WIDTH);
    }
    if input.move_left && state.player_x > PLAYER_HALF_WIDTH {
        state.player_x -= PLAYER_MOVE_STEP;
    }
    if input.move_right && state.player_x < VIEW_WIDTH - PLAYER_HALF_WIDTH {
        state.player_x += PLAYER_MOVE_STEP;
    }
}

/// Muzzle pattern by fire level: 1 center shot, 2 side shots, 3 both,
/// 4+ adds two diverging diagonals
fn fire_volley(state: &mut GameState) {
    let x = state.player_x;
    let at = |dx: f32, drift: f32| Bullet {
        pos: Vec2::new(x + dx, MUZZLE_Y),
        size: BULLET_SIZE,
        drift,
    };
    match state.fire_level {
        1 => state.bullets.push(at(0.0, 0.0)),
        2 => state
            .bullets
            .extend([at(-GUN_OFFSET, 0.0), at(GUN_OFFSET, 0.0)]),
        3 => state
            .bullets
            .extend([at(0.0, 0.0), at(-GUN_OFFSET, 0.0), at(GUN_OFFSET, 0.0)]),
        _ => state.bullets.extend([
            at(0.0, 0.0),
            at(-GUN_OFFSET, 0.0),
            at(GUN_OFFSET, 0.0),
            at(-GUN_OFFSET, -DIAGONAL_DRIFT),
            at(GUN_OFFSET, DIAGONAL_DRIFT),
        ]),
    }
    state.events.push(GameEvent::ShotFired);
}
