//! Match state and core simulation types
//!
//! `MatchContext` exclusively owns every entity. Systems receive it by
//! mutable reference; nothing holds entities anywhere else.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::{Aabb, Arena};
use super::wave::{WaveController, spawn_wave};
use crate::error::SimError;
use crate::settings::MatchSettings;

/// Overall match outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    /// Systems execute each tick
    Running,
    /// Final wave cleared with the player alive
    Victory,
    /// Player health reached zero
    Defeat,
}

impl MatchState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MatchState::Running)
    }
}

/// Which side fired a projectile (and therefore which side it can damage)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Team {
    Player,
    Enemy,
}

/// Kind tag exposed to presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyKind {
    Player,
    Enemy,
    PlayerProjectile,
    EnemyProjectile,
}

/// Shared capability of everything that occupies space in the arena
pub trait Body {
    fn pos(&self) -> Vec2;
    fn size(&self) -> Vec2;
    fn kind(&self) -> BodyKind;

    /// Current health, for bodies that have any
    fn health(&self) -> Option<i32> {
        None
    }

    fn bounds(&self) -> Aabb {
        Aabb::from_center(self.pos(), self.size())
    }
}

/// The player-controlled actor
#[derive(Debug, Clone)]
pub struct Player {
    pub pos: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub speed: f32,
    pub fire_cooldown_ticks: u64,
    /// Tick of the last successful shot (match start until the first one)
    pub last_fired_tick: u64,
}

impl Player {
    pub fn new(pos: Vec2, settings: &MatchSettings) -> Self {
        Self {
            pos,
            size: Vec2::splat(settings.player_size),
            health: settings.player_max_health,
            max_health: settings.player_max_health,
            speed: settings.player_speed,
            fire_cooldown_ticks: settings.player_fire_cooldown_ticks,
            last_fired_tick: 0,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Whether the cooldown gate is open at `tick`
    pub fn can_fire(&self, tick: u64) -> bool {
        tick.saturating_sub(self.last_fired_tick) >= self.fire_cooldown_ticks
    }
}

impl Body for Player {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn kind(&self) -> BodyKind {
        BodyKind::Player
    }

    fn health(&self) -> Option<i32> {
        Some(self.health)
    }
}

/// A pursuing, shooting opponent
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    pub pos: Vec2,
    pub size: Vec2,
    pub health: i32,
    pub max_health: i32,
    pub speed: f32,
    pub fire_interval_ticks: u64,
    pub last_fired_tick: u64,
}

impl Enemy {
    /// Full-health enemy whose fire timer starts at `tick`
    pub fn new(id: u32, pos: Vec2, tick: u64, settings: &MatchSettings) -> Self {
        Self {
            id,
            pos,
            size: Vec2::splat(settings.enemy_size),
            health: settings.enemy_max_health,
            max_health: settings.enemy_max_health,
            speed: settings.enemy_speed,
            fire_interval_ticks: settings.enemy_fire_interval_ticks,
            last_fired_tick: tick,
        }
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Interval gate: strictly more than the interval must have elapsed
    pub fn can_fire(&self, tick: u64) -> bool {
        tick.saturating_sub(self.last_fired_tick) > self.fire_interval_ticks
    }
}

impl Body for Enemy {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn kind(&self) -> BodyKind {
        BodyKind::Enemy
    }

    fn health(&self) -> Option<i32> {
        Some(self.health)
    }
}

/// A bullet in flight
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: Vec2,
    pub team: Team,
    /// Health removed from whatever it hits
    pub damage: i32,
}

impl Body for Projectile {
    fn pos(&self) -> Vec2 {
        self.pos
    }

    fn size(&self) -> Vec2 {
        self.size
    }

    fn kind(&self) -> BodyKind {
        match self.team {
            Team::Player => BodyKind::PlayerProjectile,
            Team::Enemy => BodyKind::EnemyProjectile,
        }
    }
}

/// Running totals for the match
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchStats {
    pub player_shots: u32,
    pub enemy_shots: u32,
    /// Player projectiles that hit an enemy
    pub hits: u32,
    pub kills: u32,
    /// Total health the player lost
    pub damage_taken: u32,
}

/// Complete match state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct MatchContext {
    pub settings: MatchSettings,
    pub arena: Arena,
    /// Seed the wave controller was created with
    pub seed: u64,
    /// Simulation tick counter
    pub tick: u64,
    pub state: MatchState,
    pub player: Player,
    pub waves: WaveController,
    /// Live enemies (sorted by id)
    pub enemies: Vec<Enemy>,
    /// Live projectiles (sorted by id)
    pub projectiles: Vec<Projectile>,
    pub stats: MatchStats,
    /// Next entity ID
    next_id: u32,
}

impl MatchContext {
    /// Validate settings, place the player at the arena center and spawn the first wave
    pub fn new(settings: MatchSettings, seed: u64) -> Result<Self, SimError> {
        settings.validate()?;

        let arena = Arena::new(settings.arena_width, settings.arena_height);
        let player = Player::new(
            Vec2::new(arena.width / 2.0, arena.height / 2.0),
            &settings,
        );
        let waves = WaveController::new(settings.waves.clone(), seed);

        let mut ctx = Self {
            settings,
            arena,
            seed,
            tick: 0,
            state: MatchState::Running,
            player,
            waves,
            enemies: Vec::new(),
            projectiles: Vec::new(),
            stats: MatchStats::default(),
            next_id: 1,
        };

        spawn_wave(&mut ctx);

        Ok(ctx)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Ensure collections are sorted by ID for deterministic iteration
    pub fn normalize_order(&mut self) {
        self.enemies.sort_by_key(|e| e.id);
        self.projectiles.sort_by_key(|p| p.id);
    }
}
