//! Read-only view of the match for presentation layers

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Body, BodyKind, MatchContext, MatchState, MatchStats};

/// Player ID in snapshots (entity IDs start at 1)
pub const PLAYER_ID: u32 = 0;

/// One drawable body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodySnapshot {
    pub id: u32,
    pub kind: BodyKind,
    /// Center of the bounding box
    pub pos: Vec2,
    pub size: Vec2,
    /// Health clamped to zero for display; None for projectiles
    pub health: Option<i32>,
}

impl BodySnapshot {
    fn of<B: Body>(id: u32, body: &B) -> Self {
        Self {
            id,
            kind: body.kind(),
            pos: body.pos(),
            size: body.size(),
            health: body.health().map(|h| h.max(0)),
        }
    }
}

/// Everything a renderer needs after a tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Seed the match was created with (replays need it)
    pub seed: u64,
    pub tick: u64,
    pub state: MatchState,
    /// Current wave (1-based)
    pub wave: usize,
    pub wave_count: usize,
    pub enemies_left: usize,
    pub player: BodySnapshot,
    pub enemies: Vec<BodySnapshot>,
    pub projectiles: Vec<BodySnapshot>,
    pub stats: MatchStats,
}

impl MatchContext {
    /// Capture the current match for drawing
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.seed,
            tick: self.tick,
            state: self.state,
            wave: self.waves.wave_index() + 1,
            wave_count: self.waves.wave_count(),
            enemies_left: self.enemies.len(),
            player: BodySnapshot::of(PLAYER_ID, &self.player),
            enemies: self
                .enemies
                .iter()
                .map(|e| BodySnapshot::of(e.id, e))
                .collect(),
            projectiles: self
                .projectiles
                .iter()
                .map(|p| BodySnapshot::of(p.id, p))
                .collect(),
            stats: self.stats.clone(),
        }
    }
}
