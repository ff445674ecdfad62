//! Match settings
//!
//! Fixed at match construction. Loadable from JSON so balance can be tuned
//! without rebuilding; any field missing from the JSON keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SimError;
use crate::ticks_from_millis;

/// Tunable match parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSettings {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Player ===
    /// Pixels per tick along each held axis
    pub player_speed: f32,
    pub player_max_health: i32,
    /// Side length of the player's square bounding box
    pub player_size: f32,
    /// Minimum ticks between two player shots
    pub player_fire_cooldown_ticks: u64,

    // === Enemies ===
    pub enemy_speed: f32,
    pub enemy_max_health: i32,
    pub enemy_size: f32,
    /// Enemies fire once strictly more than this many ticks have passed
    pub enemy_fire_interval_ticks: u64,
    /// Minimum distance from a spawn center to any arena edge
    pub spawn_margin: f32,

    // === Projectiles ===
    pub bullet_speed: f32,
    pub enemy_bullet_speed: f32,
    pub bullet_size: f32,

    // === Damage ===
    /// Damage dealt to an enemy by a player projectile
    pub player_bullet_damage: i32,
    /// Damage dealt to the player by an enemy projectile
    pub enemy_bullet_damage: i32,
    /// Damage dealt to the player per tick of body contact
    pub contact_damage: i32,

    // === Waves ===
    /// Opponent count for each wave, in order
    pub waves: Vec<u32>,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            player_speed: PLAYER_SPEED,
            player_max_health: PLAYER_MAX_HEALTH,
            player_size: PLAYER_SIZE,
            player_fire_cooldown_ticks: ticks_from_millis(SHOOT_COOLDOWN_MS, TICK_RATE),

            enemy_speed: ENEMY_SPEED,
            enemy_max_health: ENEMY_MAX_HEALTH,
            enemy_size: ENEMY_SIZE,
            enemy_fire_interval_ticks: ticks_from_millis(ENEMY_SHOOT_INTERVAL_MS, TICK_RATE),
            spawn_margin: SPAWN_MARGIN,

            bullet_speed: BULLET_SPEED,
            enemy_bullet_speed: ENEMY_BULLET_SPEED,
            bullet_size: BULLET_SIZE,

            player_bullet_damage: PLAYER_BULLET_DAMAGE,
            enemy_bullet_damage: ENEMY_BULLET_DAMAGE,
            contact_damage: CONTACT_DAMAGE,

            waves: WAVES.to_vec(),
        }
    }
}

impl MatchSettings {
    /// Parse settings from JSON text and validate them
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file and validate them
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded match settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), SimError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("player_speed", self.player_speed),
            ("player_size", self.player_size),
            ("enemy_speed", self.enemy_speed),
            ("enemy_size", self.enemy_size),
            ("bullet_speed", self.bullet_speed),
            ("enemy_bullet_speed", self.enemy_bullet_speed),
            ("bullet_size", self.bullet_size),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if !(self.spawn_margin.is_finite() && self.spawn_margin >= 0.0) {
            return Err(invalid(format!(
                "spawn_margin must be non-negative, got {}",
                self.spawn_margin
            )));
        }

        let counts = [
            ("player_max_health", self.player_max_health),
            ("enemy_max_health", self.enemy_max_health),
            ("player_bullet_damage", self.player_bullet_damage),
            ("enemy_bullet_damage", self.enemy_bullet_damage),
            ("contact_damage", self.contact_damage),
        ];
        for (name, value) in counts {
            if value <= 0 {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }

        if self.player_fire_cooldown_ticks == 0 {
            return Err(invalid("player_fire_cooldown_ticks must be positive".into()));
        }
        if self.enemy_fire_interval_ticks == 0 {
            return Err(invalid("enemy_fire_interval_ticks must be positive".into()));
        }

        if self.waves.is_empty() {
            return Err(invalid("waves must not be empty".into()));
        }
        if let Some(index) = self.waves.iter().position(|&count| count == 0) {
            return Err(invalid(format!("wave {index} has no opponents")));
        }

        for (name, size) in [("player_size", self.player_size), ("enemy_size", self.enemy_size)] {
            if size > self.arena_width || size > self.arena_height {
                return Err(invalid(format!("{name} {size} does not fit in the arena")));
            }
        }
        if self.spawn_margin * 2.0 > self.arena_width || self.spawn_margin * 2.0 > self.arena_height {
            return Err(invalid(format!(
                "spawn_margin {} leaves no room to spawn in a {}x{} arena",
                self.spawn_margin, self.arena_width, self.arena_height
            )));
        }

        Ok(())
    }
}

fn invalid(msg: String) -> SimError {
    SimError::InvalidConfiguration(msg)
}
