//! Game state and core simulation types
//!
//! One mutable aggregate owns every entity collection and scalar; the
//! tick driver is the only mutator, collaborators read it afterwards.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::*;
use crate::tuning::Tuning;

/// Discrete triggers for the audio collaborator
///
/// Collected during a tick, cleared at the start of the next one. The
/// core names the moment; sound design belongs to the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    ShotFired,
    Explosion,
}

/// Enemy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnemyKind {
    Scout,
    Heavy,
}

impl EnemyKind {
    /// Hits needed to destroy this kind
    pub fn base_health(self) -> i32 {
        match self {
            EnemyKind::Scout => 1,
            EnemyKind::Heavy => 2,
        }
    }
}

/// A player shot, already in screen space
#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Vec2,
    /// Shrinks each tick to fake receding into the distance
    pub size: f32,
    /// Lateral velocity; only the diagonal shots of a level-4+ volley
    /// carry a nonzero drift
    pub drift: f32,
}

/// An enemy car closing in from the horizon
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub z: f32,
    /// Depth-space lateral offset, projected like everything else
    pub x_offset: f32,
    pub kind: EnemyKind,
    pub health: i32,
    /// Re-armed to the tick clock after each volley; jittered at spawn
    pub last_fire_ms: f64,
}

/// An enemy shot, in screen space, growing as it approaches
#[derive(Debug, Clone, PartialEq)]
pub struct EnemyBullet {
    pub pos: Vec2,
    pub size: f32,
    pub damage: i32,
}

/// Roadside scenery; never collides
///
/// The size multipliers and window seed are rolled once at spawn and
/// passed through untouched so the renderer can draw a stable facade.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub z: f32,
    /// -1.0 = left of the road, +1.0 = right
    pub side: f32,
    pub w_mult: f32,
    pub h_mult: f32,
    pub window_seed: u8,
}

/// A weapon pickup left behind by a destroyed enemy
#[derive(Debug, Clone, PartialEq)]
pub struct Powerup {
    pub z: f32,
    pub x_offset: f32,
}

/// A single explosion particle
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// 1.0 at birth, fades linearly to 0
    pub life: f32,
    /// Packed 0xRRGGBB for the renderer's glow lookup
    pub color: u32,
    pub size: f32,
}

/// A backdrop star, fixed at construction
///
/// Renderer-only data; the core generates the field once and never
/// touches it again.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub pos: Vec2,
    pub size: f32,
    pub blink_offset: f32,
}

/// Named spawn/fire gates, all measured against the tick clock
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Cooldowns {
    pub last_fire_ms: f64,
    pub last_enemy_ms: f64,
    pub last_building_ms: f64,
}

/// Whether a wall-clock gate has elapsed
///
/// A satisfied gate fires once and re-arms to `now`, never to
/// `last + interval`; a stalled frame therefore costs at most one
/// spawn, not a burst of catch-up spawns.
#[inline]
pub fn gate_ready(now_ms: f64, last_ms: f64, interval_ms: f64) -> bool {
    now_ms - last_ms > interval_ms
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Run seed; `reset` reseeds the RNG from it
    pub seed: u64,
    pub tuning: Tuning,
    /// Ticks advanced since start; frozen while game over
    pub tick_count: u64,

    pub player_x: f32,
    pub health: i32,
    pub fire_level: u32,
    pub score: u64,
    /// Global depth-advance rate, constant for the run
    pub speed: f32,
    /// Backdrop scroll phase, wraps at 1; no gameplay effect
    pub grid_offset: f32,
    pub shake_intensity: f32,
    pub game_over: bool,
    pub cooldowns: Cooldowns,

    pub bullets: Vec<Bullet>,
    pub enemies: Vec<Enemy>,
    pub enemy_bullets: Vec<EnemyBullet>,
    pub buildings: Vec<Building>,
    pub powerups: Vec<Powerup>,
    pub particles: Vec<Particle>,
    pub stars: Vec<Star>,

    /// Audio triggers emitted during the last tick
    pub events: Vec<GameEvent>,

    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a fresh run with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    /// Create a fresh run with the given tuning
    pub fn with_tuning(seed: u64, tuning: Tuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                pos: Vec2::new(
                    rng.random::<f32>() * VIEW_WIDTH,
                    rng.random::<f32>() * STAR_FIELD_HEIGHT,
                ),
                size: rng.random::<f32>() * 2.0,
                blink_offset: rng.random::<f32>() * std::f32::consts::TAU,
            })
            .collect();

        Self {
            seed,
            speed: tuning.scroll_speed,
            tuning,
            tick_count: 0,
            player_x: CENTER_X,
            health: PLAYER_START_HEALTH,
            fire_level: 1,
            score: 0,
            grid_offset: 0.0,
            shake_intensity: 0.0,
            game_over: false,
            cooldowns: Cooldowns::default(),
            bullets: Vec::new(),
            enemies: Vec::new(),
            enemy_bullets: Vec::new(),
            buildings: Vec::new(),
            powerups: Vec::new(),
            particles: Vec::new(),
            stars,
            events: Vec::new(),
            rng,
        }
    }

    /// Reinitialize the run in place, returning to Playing
    ///
    /// Every scalar and collection goes back to its start value; the
    /// RNG is reseeded from the original seed.
    pub fn reset(&mut self) {
        *self = Self::with_tuning(self.seed, self.tuning.clone());
    }

    /// Burst of neon particles at a kill/hit point
    pub fn spawn_burst(&mut self, at: Vec2, color: u32) {
        for _ in 0..BURST_COUNT {
            self.particles.push(Particle {
                pos: at,
                vel: Vec2::new(
                    (self.rng.random::<f32>() - 0.5) * 10.0,
                    (self.rng.random::<f32>() - 0.5) * 10.0,
                ),
                life: 1.0,
                color,
                size: self.rng.random::<f32>() * 4.0 + 2.0,
            });
        }
        self.events.push(GameEvent::Explosion);
    }

    /// Whether the health bar should show the warning color
    pub fn low_health(&self) -> bool {
        self.health < LOW_HEALTH_THRESHOLD
    }
}
