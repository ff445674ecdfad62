//! Collision detection and damage
//!
//! Runs in a fixed order each tick:
//! 1. player projectiles vs enemies
//! 2. enemy projectiles vs the player
//! 3. player body vs enemy bodies (contact damage)
//!
//! Removal is two-phase: hits are marked during a pass and the collections are
//! compacted afterwards, so nothing is removed while it is being iterated.

use super::state::{Body, MatchContext, Team};

/// What happened during one collision pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollisionReport {
    /// Player projectiles that struck an enemy
    pub hits: u32,
    /// Enemies brought to zero health
    pub kills: u32,
    /// Enemy projectiles that struck the player
    pub player_hits: u32,
    /// Whether the player touched at least one enemy
    pub contact: bool,
    /// Total health the player lost this pass
    pub player_damage: i32,
}

/// Resolve every overlap for the current tick and apply damage
pub fn resolve_collisions(ctx: &mut MatchContext) -> CollisionReport {
    let mut report = CollisionReport::default();

    // --- Player projectiles vs enemies ---
    let mut spent = vec![false; ctx.projectiles.len()];
    for (i, projectile) in ctx.projectiles.iter().enumerate() {
        if projectile.team != Team::Player {
            continue;
        }
        let bounds = projectile.bounds();

        // First live enemy in ID order takes the hit; the projectile is spent
        let Some(enemy) = ctx
            .enemies
            .iter_mut()
            .find(|e| !e.is_dead() && e.bounds().overlaps(&bounds))
        else {
            continue;
        };

        enemy.health -= projectile.damage;
        spent[i] = true;
        report.hits += 1;
        if enemy.is_dead() {
            report.kills += 1;
            log::debug!("Enemy {} destroyed at tick {}", enemy.id, ctx.tick);
        }
    }
    compact_projectiles(ctx, &spent);
    ctx.enemies.retain(|e| !e.is_dead());

    // --- Enemy projectiles vs player ---
    let player_bounds = ctx.player.bounds();
    let mut spent = vec![false; ctx.projectiles.len()];
    for (i, projectile) in ctx.projectiles.iter().enumerate() {
        if projectile.team == Team::Enemy && projectile.bounds().overlaps(&player_bounds) {
            spent[i] = true;
            report.player_hits += 1;
            report.player_damage += projectile.damage;
        }
    }
    compact_projectiles(ctx, &spent);

    // --- Body contact: one tick of damage no matter how many enemies touch ---
    report.contact = ctx
        .enemies
        .iter()
        .any(|e| e.bounds().overlaps(&player_bounds));
    if report.contact {
        report.player_damage += ctx.settings.contact_damage;
    }

    ctx.player.health -= report.player_damage;

    ctx.stats.hits += report.hits;
    ctx.stats.kills += report.kills;
    ctx.stats.damage_taken += report.player_damage.max(0) as u32;

    report
}

/// Drop projectiles whose `spent` flag is set
fn compact_projectiles(ctx: &mut MatchContext, spent: &[bool]) {
    let mut index = 0;
    ctx.projectiles.retain(|_| {
        let keep = !spent[index];
        index += 1;
        keep
    });
}
