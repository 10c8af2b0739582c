//! Per-tick motion and aging for every entity collection
//!
//! Pruning is mark-and-compact (`retain` after the move), never a
//! splice mid-iteration; several entities of one kind can die in the
//! same tick without skipping a neighbor.

use crate::consts::*;

use super::state::GameState;

/// Advance every gameplay entity by one tick and prune the expired
///
/// Powerups advance here but their cutoff is checked by the collision
/// pass, after the pickup test; a powerup on the cutoff edge can still
/// be grabbed in the tick it would expire.
pub fn advance(state: &mut GameState) {
    for bullet in &mut state.bullets {
        bullet.pos.y -= BULLET_SPEED;
        bullet.pos.x += bullet.drift;
        bullet.size *= BULLET_SHRINK;
        // Ease toward the vanishing point so shots read as going "into"
        // the road rather than straight up the screen
        bullet.pos.x += (CENTER_X - bullet.pos.x) * BULLET_CONVERGE;
    }
    state
        .bullets
        .retain(|b| b.pos.y >= HORIZON_Y && b.size >= BULLET_MIN_SIZE);

    for eb in &mut state.enemy_bullets {
        eb.pos.y += ENEMY_BULLET_SPEED;
        eb.size *= ENEMY_BULLET_GROWTH;
    }
    state.enemy_bullets.retain(|eb| eb.pos.y <= VIEW_HEIGHT);

    for enemy in &mut state.enemies {
        enemy.z += state.speed / ENEMY_DEPTH_DIVISOR;
    }
    state.enemies.retain(|e| e.z <= DEPTH_CUTOFF);

    for building in &mut state.buildings {
        building.z += state.speed / SCENERY_DEPTH_DIVISOR;
    }
    state.buildings.retain(|b| b.z <= DEPTH_CUTOFF);

    for powerup in &mut state.powerups {
        powerup.z += state.speed / SCENERY_DEPTH_DIVISOR;
    }

    for particle in &mut state.particles {
        particle.pos += particle.vel;
        particle.life -= PARTICLE_FADE;
    }
    state.particles.retain(|p| p.life > 0.0);
}
