//! Collision detection and resolution
//!
//! Runs once per tick, after motion, in a fixed order: player bullets
//! against enemies, powerup pickup, enemy bullets against the player,
//! then the game-over check. The order matters: a pickup and a hit in
//! the same tick must leave the fire level at 1, not 2.
//!
//! Enemy and powerup screen positions are recomputed from the shared
//! projection model here rather than cached at spawn; drawing and
//! colliding must never disagree about where something is.

use glam::Vec2;
use rand::Rng;

use crate::consts::*;

use super::projection::project;
use super::state::{GameState, Powerup};

/// Resolve one tick's collisions and their gameplay consequences
pub fn resolve(state: &mut GameState) {
    bullets_vs_enemies(state);
    collect_powerups(state);
    enemy_bullets_vs_player(state);

    if state.health <= 0 && !state.game_over {
        state.game_over = true;
        log::info!("Game over at score {}", state.score);
    }
}

/// Player bullets against enemy bounding boxes
///
/// A bullet spends itself on the first enemy it overlaps; iteration is
/// newest-enemy-first, and the tie-break among several overlapping
/// enemies is deliberately unspecified.
fn bullets_vs_enemies(state: &mut GameState) {
    let mut i = state.bullets.len();
    while i > 0 {
        i -= 1;
        let shot = state.bullets[i].pos;
        let mut spent = false;

        let mut j = state.enemies.len();
        while j > 0 {
            j -= 1;
            let (z, x_offset) = (state.enemies[j].z, state.enemies[j].x_offset);
            let anchor = project(z, x_offset);
            let half_w = ENEMY_BOX_WIDTH * z / 2.0;
            let height = ENEMY_BOX_HEIGHT * z;
            let overlap = shot.x > anchor.x - half_w
                && shot.x < anchor.x + half_w
                && shot.y > anchor.y - height
                && shot.y < anchor.y;
            if !overlap {
                continue;
            }

            spent = true;
            state.enemies[j].health -= 1;
            let flash_at = Vec2::new(anchor.x, anchor.y - height / 2.0);
            if state.enemies[j].health <= 0 {
                let dead = state.enemies.remove(j);
                state.spawn_burst(flash_at, COLOR_DESTRUCTION);
                state.score += state.tuning.kill_score;
                if state.rng.random::<f32>() < state.tuning.powerup_drop_chance {
                    state.powerups.push(Powerup {
                        z: dead.z,
                        x_offset: dead.x_offset,
                    });
                    log::debug!("Powerup dropped at z {:.2}", dead.z);
                }
            } else {
                state.spawn_burst(flash_at, COLOR_HIT_FLASH);
            }
            break;
        }

        if spent {
            state.bullets.remove(i);
        }
    }
}

/// Powerup pickup, then the deferred cutoff cull
fn collect_powerups(state: &mut GameState) {
    let mut i = state.powerups.len();
    while i > 0 {
        i -= 1;
        let at = project(state.powerups[i].z, state.powerups[i].x_offset);
        let captured = at.y > PICKUP_BAND_TOP
            && at.y < VIEW_HEIGHT
            && (at.x - state.player_x).abs() < PICKUP_LATERAL_RANGE;
        if captured {
            state.powerups.remove(i);
            state.fire_level += 1;
            state.score += state.tuning.powerup_score;
            state.shake_intensity = SHAKE_ON_PICKUP;
            log::debug!("Fire level up to {}", state.fire_level);
        } else if state.powerups[i].z > DEPTH_CUTOFF {
            state.powerups.remove(i);
        }
    }
}

/// Enemy bullets against the fixed player hit-box
fn enemy_bullets_vs_player(state: &mut GameState) {
    let mut i = state.enemy_bullets.len();
    while i > 0 {
        i -= 1;
        let at = state.enemy_bullets[i].pos;
        let hit = at.x > state.player_x - PLAYER_HALF_WIDTH
            && at.x < state.player_x + PLAYER_HALF_WIDTH
            && at.y > MUZZLE_Y
            && at.y < PLAYER_HITBOX_BOTTOM;
        if hit {
            let damage = state.enemy_bullets.remove(i).damage;
            state.health = (state.health - damage).max(0);
            state.shake_intensity = SHAKE_ON_HIT;
            // Any hit strips the accumulated power level
            state.fire_level = 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Bullet, Enemy, EnemyBullet, EnemyKind, GameEvent};

    fn enemy(z: f32, x_offset: f32, kind: EnemyKind) -> Enemy {
        Enemy {
            z,
            x_offset,
            kind,
            health: kind.base_health(),
            last_fire_ms: 0.0,
        }
    }

    fn bullet_at(x: f32, y: f32) -> Bullet {
        Bullet {
            pos: Vec2::new(x, y),
            size: BULLET_SIZE,
            drift: 0.0,
        }
    }

    #[test]
    fn test_scout_kill_scores_and_bursts() {
        let mut state = GameState::new(11);
        state.enemies.push(enemy(0.5, 80.0, EnemyKind::Scout));
        // Anchor projects to (420, 375); box spans x in (400, 440), y in (360, 375)
        state.bullets.push(bullet_at(420.0, 370.0));

        resolve(&mut state);

        assert!(state.enemies.is_empty());
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 500);
        assert_eq!(state.particles.len(), BURST_COUNT);
        assert_eq!(state.events, vec![GameEvent::Explosion]);
        assert_eq!(state.particles[0].color, COLOR_DESTRUCTION);
        // Drop roll is random; at most one powerup comes out of one kill
        assert!(state.powerups.len() <= 1);
        if let Some(p) = state.powerups.first() {
            assert_eq!(p.z, 0.5);
            assert_eq!(p.x_offset, 80.0);
        }
    }

    #[test]
    fn test_heavy_survives_first_hit_with_flash() {
        let mut state = GameState::new(11);
        state.enemies.push(enemy(0.5, 0.0, EnemyKind::Heavy));
        state.bullets.push(bullet_at(400.0, 370.0));

        resolve(&mut state);

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].health, 1);
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 0);
        assert!(state.powerups.is_empty());
        assert_eq!(state.particles[0].color, COLOR_HIT_FLASH);
        assert_eq!(state.events, vec![GameEvent::Explosion]);
    }

    #[test]
    fn test_bullet_misses_outside_box() {
        let mut state = GameState::new(11);
        state.enemies.push(enemy(0.5, 0.0, EnemyKind::Scout));
        // Box spans x in (380, 420), y in (360, 375)
        state.bullets.push(bullet_at(379.0, 370.0));
        state.bullets.push(bullet_at(400.0, 376.0));

        resolve(&mut state);

        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.bullets.len(), 2);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_bullet_spends_itself_on_one_enemy() {
        let mut state = GameState::new(11);
        state.enemies.push(enemy(0.5, 0.0, EnemyKind::Scout));
        state.enemies.push(enemy(0.5, 10.0, EnemyKind::Scout));
        state.bullets.push(bullet_at(400.0, 370.0));

        resolve(&mut state);

        // One kill, one survivor; which one dies is not part of the contract
        assert_eq!(state.enemies.len(), 1);
        assert!(state.bullets.is_empty());
        assert_eq!(state.score, 500);
    }

    #[test]
    fn test_powerup_pickup_in_capture_band() {
        let mut state = GameState::new(3);
        // z=0.9 projects to y ~543, inside the (500, 600) band, centered
        state.powerups.push(Powerup { z: 0.9, x_offset: 0.0 });
        state.fire_level = 1;

        resolve(&mut state);

        assert!(state.powerups.is_empty());
        assert_eq!(state.fire_level, 2);
        assert_eq!(state.score, 1000);
        assert_eq!(state.shake_intensity, SHAKE_ON_PICKUP);
    }

    #[test]
    fn test_powerup_missed_when_too_far_sideways() {
        let mut state = GameState::new(3);
        // Projected x = 400 + 100*0.81 = 481, beyond the 50-unit reach
        state.powerups.push(Powerup { z: 0.9, x_offset: 100.0 });

        resolve(&mut state);

        assert_eq!(state.powerups.len(), 1);
        assert_eq!(state.fire_level, 1);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_powerup_culled_past_cutoff() {
        let mut state = GameState::new(3);
        state.player_x = 100.0; // keep it out of the capture band
        state.powerups.push(Powerup { z: 1.6, x_offset: 200.0 });

        resolve(&mut state);

        assert!(state.powerups.is_empty());
        assert_eq!(state.fire_level, 1);
    }

    #[test]
    fn test_player_hit_drains_health_and_resets_power() {
        let mut state = GameState::new(3);
        state.fire_level = 3;
        state.enemy_bullets.push(EnemyBullet {
            pos: Vec2::new(state.player_x, 540.0),
            size: 4.0,
            damage: 20,
        });

        resolve(&mut state);

        assert!(state.enemy_bullets.is_empty());
        assert_eq!(state.health, 80);
        assert_eq!(state.fire_level, 1);
        assert_eq!(state.shake_intensity, SHAKE_ON_HIT);
        assert!(!state.game_over);
    }

    #[test]
    fn test_health_clamps_at_zero_and_game_ends() {
        let mut state = GameState::new(3);
        state.health = 30;
        state.enemy_bullets.push(EnemyBullet {
            pos: Vec2::new(state.player_x, 540.0),
            size: 6.0,
            damage: 40,
        });

        resolve(&mut state);

        assert_eq!(state.health, 0);
        assert!(state.game_over);
    }

    #[test]
    fn test_pickup_then_hit_same_tick_leaves_level_one() {
        let mut state = GameState::new(3);
        state.powerups.push(Powerup { z: 0.9, x_offset: 0.0 });
        state.enemy_bullets.push(EnemyBullet {
            pos: Vec2::new(state.player_x, 540.0),
            size: 4.0,
            damage: 20,
        });

        resolve(&mut state);

        // The pickup landed (score proves it) but the hit strips it
        assert_eq!(state.score, 1000);
        assert_eq!(state.fire_level, 1);
        assert_eq!(state.health, 80);
    }

    #[test]
    fn test_collision_anchor_matches_spawn_projection() {
        // The muzzle an enemy fires from and the box a bullet checks
        // against must come from the same projection
        let anchor = project(0.42, -150.0);
        assert_eq!(anchor.x, super::super::projection::screen_x(0.42, -150.0, CENTER_X));
        assert_eq!(
            anchor.y,
            super::super::projection::screen_y(0.42, HORIZON_Y, VIEW_HEIGHT)
        );
    }
}
