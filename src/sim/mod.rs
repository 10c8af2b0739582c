//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - One fixed advance per tick
//! - Seeded RNG only
//! - A single clock reading per tick, supplied by the caller
//! - No rendering or platform dependencies

pub mod collision;
pub mod motion;
pub mod projection;
pub mod spawn;
pub mod state;
pub mod tick;

pub use projection::{project, scale, screen_x, screen_y};
pub use state::{
    Building, Bullet, Cooldowns, Enemy, EnemyBullet, EnemyKind, GameEvent, GameState, Particle,
    Powerup, Star,
};
pub use tick::{TickInput, tick};
