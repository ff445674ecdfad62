//! Wave Shooter - simulation core for a top-down arena shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, weapons, collisions, waves)
//! - `settings`: Match configuration loaded before a run starts
//! - `error`: Failure kinds surfaced at match construction

pub mod error;
pub mod settings;
pub mod sim;

pub use error::SimError;
pub use settings::MatchSettings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (updates per second)
    pub const TICK_RATE: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player defaults
    pub const PLAYER_SPEED: f32 = 5.0;
    pub const PLAYER_MAX_HEALTH: i32 = 100;
    pub const PLAYER_SIZE: f32 = 40.0;
    /// Minimum time between player shots
    pub const SHOOT_COOLDOWN_MS: u32 = 500;

    /// Enemy defaults
    pub const ENEMY_SPEED: f32 = 2.0;
    pub const ENEMY_MAX_HEALTH: i32 = 50;
    pub const ENEMY_SIZE: f32 = 30.0;
    /// Enemies fire once this much time has strictly elapsed
    pub const ENEMY_SHOOT_INTERVAL_MS: u32 = 1500;
    /// Minimum distance between a spawn center and any arena edge
    pub const SPAWN_MARGIN: f32 = 50.0;

    /// Projectile defaults
    pub const BULLET_SPEED: f32 = 10.0;
    pub const ENEMY_BULLET_SPEED: f32 = 6.0;
    pub const BULLET_SIZE: f32 = 6.0;

    /// Damage per hit
    pub const PLAYER_BULLET_DAMAGE: i32 = 25;
    pub const ENEMY_BULLET_DAMAGE: i32 = 10;
    pub const CONTACT_DAMAGE: i32 = 1;

    /// Opponents per wave, in order
    pub const WAVES: [u32; 5] = [3, 5, 8, 10, 15];
}

/// Convert a duration in milliseconds to whole simulation ticks (rounded)
#[inline]
pub fn ticks_from_millis(millis: u32, tick_rate: u32) -> u64 {
    (millis as u64 * tick_rate as u64 + 500) / 1000
}

/// Unit direction from `from` toward `to`, or `None` when the points coincide.
///
/// Computed as `delta / |delta|` (a true division, not a reciprocal multiply)
/// so the result is reproducible bit-for-bit across call sites.
#[inline]
pub fn direction_to(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let dist = delta.length();
    if dist > 0.0 && dist.is_finite() {
        Some(delta / dist)
    } else {
        None
    }
}
