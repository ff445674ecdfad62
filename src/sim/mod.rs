//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` per step)
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod geom;
pub mod movement;
pub mod projectile;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod wave;
pub mod weapon;

pub use autopilot::autopilot_input;
pub use collision::{CollisionReport, resolve_collisions};
pub use geom::{Aabb, Arena};
pub use snapshot::{BodySnapshot, Snapshot};
pub use state::{
    Body, BodyKind, Enemy, MatchContext, MatchState, MatchStats, Player, Projectile, Team,
};
pub use tick::{TickInput, tick};
pub use wave::{WaveController, WaveOutcome};
