//! Projectile spawning and flight
//!
//! Projectiles fly in a straight line at constant velocity and vanish the
//! tick their center leaves the arena.

use glam::Vec2;

use super::geom::Arena;
use super::state::{MatchContext, Projectile, Team};
use crate::direction_to;
use crate::error::SimError;

/// Velocity of a shot from `origin` toward `target`: `(T - O) / |T - O| * speed`
pub fn aimed_velocity(origin: Vec2, target: Vec2, speed: f32) -> Result<Vec2, SimError> {
    let dir = direction_to(origin, target).ok_or(SimError::DegenerateDirection)?;
    Ok(dir * speed)
}

/// Create a projectile for `team` at `origin` aimed at `target`.
///
/// Returns the new projectile's ID. Nothing is spawned when the aim is
/// degenerate.
pub fn spawn_projectile(
    ctx: &mut MatchContext,
    origin: Vec2,
    target: Vec2,
    team: Team,
) -> Result<u32, SimError> {
    let (speed, damage) = match team {
        Team::Player => (ctx.settings.bullet_speed, ctx.settings.player_bullet_damage),
        Team::Enemy => (ctx.settings.enemy_bullet_speed, ctx.settings.enemy_bullet_damage),
    };
    let vel = aimed_velocity(origin, target, speed)?;

    let id = ctx.next_entity_id();
    ctx.projectiles.push(Projectile {
        id,
        pos: origin,
        vel,
        size: Vec2::splat(ctx.settings.bullet_size),
        team,
        damage,
    });
    Ok(id)
}

/// Integrate every projectile one tick and drop those that left the arena
pub fn update_projectiles(projectiles: &mut Vec<Projectile>, arena: &Arena) {
    for projectile in projectiles.iter_mut() {
        projectile.pos += projectile.vel;
    }
    projectiles.retain(|p| arena.contains(p.pos));
}
