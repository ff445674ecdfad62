//! Wave progression and enemy spawning
//!
//! A wave is cleared when no enemies remain alive. Clearing the last wave
//! wins the match; clearing any other wave spawns the next one immediately.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::geom::{Aabb, Arena};
use super::state::{Enemy, MatchContext};
use crate::error::SimError;
use crate::settings::MatchSettings;

/// Result of re-evaluating the wave after collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveOutcome {
    /// Enemies of the current wave are still alive
    InProgress,
    /// The previous wave was cleared and this wave index was spawned
    Advanced(usize),
    /// The final wave was cleared
    Cleared,
}

/// Ordered opponent counts plus the seeded spawn RNG
#[derive(Debug, Clone)]
pub struct WaveController {
    counts: Vec<u32>,
    index: usize,
    rng: Pcg32,
}

impl WaveController {
    pub fn new(counts: Vec<u32>, seed: u64) -> Self {
        Self::with_rng(counts, Pcg32::seed_from_u64(seed))
    }

    /// Use an already-constructed RNG, e.g. one resumed mid-stream
    pub fn with_rng(counts: Vec<u32>, rng: Pcg32) -> Self {
        Self {
            counts,
            index: 0,
            rng,
        }
    }

    /// Current wave index (0-based)
    pub fn wave_index(&self) -> usize {
        self.index
    }

    pub fn wave_count(&self) -> usize {
        self.counts.len()
    }

    pub fn is_final_wave(&self) -> bool {
        self.index + 1 >= self.counts.len()
    }

    /// Opponents in the current wave
    pub fn current_count(&self) -> u32 {
        self.counts.get(self.index).copied().unwrap_or(0)
    }

    /// Pick a spawn center at least `spawn_margin` from every edge.
    ///
    /// If the margin is smaller than half the enemy box the sample can poke
    /// out of the arena; such samples are clamped back inside.
    pub fn sample_spawn(&mut self, arena: &Arena, settings: &MatchSettings) -> Vec2 {
        let margin = settings.spawn_margin;
        let x = self.rng.random_range(margin..=arena.width - margin);
        let y = self.rng.random_range(margin..=arena.height - margin);
        let pos = Vec2::new(x, y);

        let size = Vec2::splat(settings.enemy_size);
        if arena.contains_box(&Aabb::from_center(pos, size)) {
            return pos;
        }

        let clamped = arena.clamp_center(pos, size);
        log::warn!(
            "{}; clamped to ({}, {})",
            SimError::OutOfBoundsSpawn { x, y },
            clamped.x,
            clamped.y
        );
        clamped
    }
}

/// Spawn every enemy of the current wave with fresh timers
pub fn spawn_wave(ctx: &mut MatchContext) {
    let count = ctx.waves.current_count();
    log::info!(
        "Wave {}/{}: spawning {} enemies at tick {}",
        ctx.waves.wave_index() + 1,
        ctx.waves.wave_count(),
        count,
        ctx.tick
    );

    for _ in 0..count {
        let pos = ctx.waves.sample_spawn(&ctx.arena, &ctx.settings);
        let id = ctx.next_entity_id();
        let enemy = Enemy::new(id, pos, ctx.tick, &ctx.settings);
        ctx.enemies.push(enemy);
    }
}

/// Advance to the next wave once the current one has been wiped out
pub fn advance_waves(ctx: &mut MatchContext) -> WaveOutcome {
    if !ctx.enemies.is_empty() {
        return WaveOutcome::InProgress;
    }

    if ctx.waves.is_final_wave() {
        log::info!("Final wave cleared at tick {}", ctx.tick);
        return WaveOutcome::Cleared;
    }

    ctx.waves.index += 1;
    spawn_wave(ctx);
    WaveOutcome::Advanced(ctx.waves.index)
}
