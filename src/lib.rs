//! Neon Drift - a synthwave endless driving shooter
//!
//! This crate is the simulation core only. It advances the world one
//! tick per rendered frame, from raw input intent to a render-ready
//! state. Rendering, audio synthesis, input capture and UI text live
//! in external collaborators that read the state after each tick and
//! refresh intent before the next one.
//!
//! Core modules:
//! - `sim`: deterministic simulation (projection, spawning, motion,
//!   collisions, game state)
//! - `tuning`: data-driven game balance

pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Logical course dimensions; the sim works in this fixed view
    pub const VIEW_WIDTH: f32 = 800.0;
    pub const VIEW_HEIGHT: f32 = 600.0;
    /// Vanishing point height; everything depth-based projects below it
    pub const HORIZON_Y: f32 = VIEW_HEIGHT / 2.0;
    pub const CENTER_X: f32 = VIEW_WIDTH / 2.0;

    /// Player car
    pub const PLAYER_HALF_WIDTH: f32 = 40.0;
    pub const PLAYER_MOVE_STEP: f32 = 5.0;
    pub const PLAYER_START_HEALTH: i32 = 100;
    /// Muzzle height for player shots; also the top of the hit-box
    pub const MUZZLE_Y: f32 = VIEW_HEIGHT - 70.0;
    /// Bottom of the player hit-box
    pub const PLAYER_HITBOX_BOTTOM: f32 = VIEW_HEIGHT - 40.0;
    /// Health bar switches to the warning color below this
    pub const LOW_HEALTH_THRESHOLD: i32 = 30;

    /// Player bullets
    pub const BULLET_SPEED: f32 = 8.0;
    pub const BULLET_SIZE: f32 = 6.0;
    pub const BULLET_SHRINK: f32 = 0.98;
    pub const BULLET_CONVERGE: f32 = 0.02;
    pub const BULLET_MIN_SIZE: f32 = 1.0;
    /// Side guns sit this far off the car's centerline
    pub const GUN_OFFSET: f32 = 30.0;
    pub const DIAGONAL_DRIFT: f32 = 3.0;

    /// Enemy bullets
    pub const ENEMY_BULLET_SPEED: f32 = 4.0;
    pub const ENEMY_BULLET_GROWTH: f32 = 1.01;

    /// Depth cutoff shared by every z-based entity
    pub const DEPTH_CUTOFF: f32 = 1.5;
    /// Enemies close at speed/8; scenery scrolls at speed/10
    pub const ENEMY_DEPTH_DIVISOR: f32 = 8.0;
    pub const SCENERY_DEPTH_DIVISOR: f32 = 10.0;

    /// Enemy collision box, scaled by z
    pub const ENEMY_BOX_WIDTH: f32 = 80.0;
    pub const ENEMY_BOX_HEIGHT: f32 = 30.0;
    /// Depth band within which an enemy is close enough to fire
    pub const ENEMY_FIRE_BAND: (f32, f32) = (0.1, 0.7);
    /// Heavy twin muzzles sit this far off center (scaled by z)
    pub const HEAVY_MUZZLE_OFFSET: f32 = 15.0;

    /// Powerup capture band near the bottom of the play field
    pub const PICKUP_BAND_TOP: f32 = VIEW_HEIGHT - 100.0;
    pub const PICKUP_LATERAL_RANGE: f32 = 50.0;

    /// Screen shake
    pub const SHAKE_DECAY: f32 = 0.9;
    pub const SHAKE_FLOOR: f32 = 0.1;
    pub const SHAKE_ON_HIT: f32 = 15.0;
    pub const SHAKE_ON_PICKUP: f32 = 5.0;

    /// Explosion particles
    pub const BURST_COUNT: usize = 15;
    pub const PARTICLE_FADE: f32 = 0.03;
    pub const COLOR_DESTRUCTION: u32 = 0xff4400;
    pub const COLOR_HIT_FLASH: u32 = 0xffffff;

    /// Backdrop stars (renderer-only data, generated once)
    pub const STAR_COUNT: usize = 80;
    pub const STAR_FIELD_HEIGHT: f32 = 300.0;
}
