//! Demo/idle mode: generates input that plays the match
//!
//! Aims at the nearest enemy and keeps firing, backs away from enemies that
//! get close and circles them otherwise. Stays off the walls so it does not
//! pin itself in a corner.

use glam::Vec2;

use super::state::MatchContext;
use super::tick::TickInput;

/// Enemies closer than this are retreated from instead of circled
const KEEP_AWAY: f32 = 160.0;
/// Distance from a wall at which the autopilot heads back toward the middle
const WALL_BUFFER: f32 = 60.0;

/// Build the input for the next tick
pub fn autopilot_input(ctx: &MatchContext) -> TickInput {
    let player = ctx.player.pos;

    let Some(nearest) = ctx
        .enemies
        .iter()
        .min_by(|a, b| {
            a.pos
                .distance_squared(player)
                .partial_cmp(&b.pos.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    else {
        return TickInput::default();
    };

    let away = player - nearest.pos;
    let mut steer = if away.length() < KEEP_AWAY {
        away
    } else {
        // Circle, switching direction every few seconds for variety
        let flip = if (ctx.tick / 240) % 2 == 0 { 1.0 } else { -1.0 };
        Vec2::new(-away.y, away.x) * flip
    };

    let center = Vec2::new(ctx.arena.width / 2.0, ctx.arena.height / 2.0);
    if player.x < WALL_BUFFER || player.x > ctx.arena.width - WALL_BUFFER {
        steer.x = center.x - player.x;
    }
    if player.y < WALL_BUFFER || player.y > ctx.arena.height - WALL_BUFFER {
        steer.y = center.y - player.y;
    }

    TickInput {
        move_dir: Vec2::new(held(steer.x), held(steer.y)),
        fire: true,
        aim: nearest.pos,
    }
}

/// Quantize a steering component into a held key (-1, 0 or +1)
fn held(value: f32) -> f32 {
    if value > 0.5 {
        1.0
    } else if value < -0.5 {
        -1.0
    } else {
        0.0
    }
}
