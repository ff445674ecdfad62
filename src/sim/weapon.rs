//! Fire gates for the player and enemies

use glam::Vec2;

use super::projectile::spawn_projectile;
use super::state::{MatchContext, Team};

/// Fire the player's weapon if requested and off cooldown.
///
/// Requests inside the cooldown window are dropped, not queued. A rejected
/// shot (aim on the player's own center) leaves the cooldown untouched.
pub fn fire_player(ctx: &mut MatchContext, fire: bool, aim: Vec2) {
    if !fire || !ctx.player.can_fire(ctx.tick) {
        return;
    }

    let origin = ctx.player.pos;
    match spawn_projectile(ctx, origin, aim, Team::Player) {
        Ok(_) => {
            ctx.player.last_fired_tick = ctx.tick;
            ctx.stats.player_shots += 1;
        }
        Err(e) => log::debug!("Player shot dropped at tick {}: {}", ctx.tick, e),
    }
}

/// Let every enemy whose interval has elapsed shoot at the player
pub fn fire_enemies(ctx: &mut MatchContext) {
    let target = ctx.player.pos;
    let tick = ctx.tick;

    for i in 0..ctx.enemies.len() {
        if !ctx.enemies[i].can_fire(tick) {
            continue;
        }

        let origin = ctx.enemies[i].pos;
        match spawn_projectile(ctx, origin, target, Team::Enemy) {
            Ok(_) => {
                ctx.enemies[i].last_fired_tick = tick;
                ctx.stats.enemy_shots += 1;
            }
            Err(e) => log::debug!(
                "Enemy {} shot dropped at tick {}: {}",
                ctx.enemies[i].id,
                tick,
                e
            ),
        }
    }
}
