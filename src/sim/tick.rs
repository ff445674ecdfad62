//! Fixed timestep simulation tick
//!
//! Core loop that advances the match deterministically. Phases run in a
//! fixed order: movement, weapons, projectiles, collisions, defeat check,
//! wave progression.

use glam::Vec2;

use super::collision::resolve_collisions;
use super::movement::{move_player, pursue};
use super::projectile::update_projectiles;
use super::state::{MatchContext, MatchState};
use super::wave::{WaveOutcome, advance_waves};
use super::weapon::{fire_enemies, fire_player};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement axes, each -1, 0 or +1
    pub move_dir: Vec2,
    /// Fire button held
    pub fire: bool,
    /// Aim point in arena coordinates (mouse position)
    pub aim: Vec2,
}

/// Advance the match by one tick and return the resulting state.
///
/// Does nothing once the match is over.
pub fn tick(ctx: &mut MatchContext, input: &TickInput) -> MatchState {
    if ctx.state.is_terminal() {
        return ctx.state;
    }

    ctx.tick += 1;

    // Movement & AI
    move_player(&mut ctx.player, input.move_dir, &ctx.arena);
    pursue(&mut ctx.enemies, ctx.player.pos);

    // Weapons
    fire_player(ctx, input.fire, input.aim);
    fire_enemies(ctx);

    // Projectile flight
    update_projectiles(&mut ctx.projectiles, &ctx.arena);

    // Collisions and damage
    resolve_collisions(ctx);

    // Defeat wins ties with a simultaneous wave clear
    if ctx.player.is_dead() {
        ctx.state = MatchState::Defeat;
        log::info!(
            "Defeat at tick {} on wave {}",
            ctx.tick,
            ctx.waves.wave_index() + 1
        );
        return ctx.state;
    }

    if advance_waves(ctx) == WaveOutcome::Cleared {
        ctx.state = MatchState::Victory;
        log::info!(
            "Victory at tick {} with {} health left",
            ctx.tick,
            ctx.player.health
        );
    }

    // Ensure deterministic ordering
    ctx.normalize_order();

    ctx.state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MatchSettings;
    use crate::sim::projectile::spawn_projectile;
    use crate::sim::state::{Enemy, Team};

    fn single_enemy_match(waves: Vec<u32>, enemy_pos: Vec2) -> MatchContext {
        let settings = MatchSettings {
            waves,
            ..Default::default()
        };
        let mut ctx = MatchContext::new(settings, 21).unwrap();
        ctx.enemies.clear();
        let id = ctx.next_entity_id();
        let settings = ctx.settings.clone();
        ctx.enemies.push(Enemy::new(id, enemy_pos, 0, &settings));
        ctx
    }

    #[test]
    fn test_terminal_state_stops_ticking() {
        let mut ctx = MatchContext::new(MatchSettings::default(), 1).unwrap();
        ctx.state = MatchState::Defeat;
        let before = ctx.player.pos;
        let input = TickInput {
            move_dir: Vec2::new(1.0, 0.0),
            ..Default::default()
        };
        assert_eq!(tick(&mut ctx, &input), MatchState::Defeat);
        assert_eq!(ctx.tick, 0);
        assert_eq!(ctx.player.pos, before);
    }

    #[test]
    fn test_contact_for_five_ticks() {
        let mut ctx = MatchContext::new(MatchSettings::default(), 3).unwrap();
        ctx.enemies.truncate(1);
        ctx.enemies[0].pos = ctx.player.pos;
        ctx.enemies[0].speed = 0.0;

        for _ in 0..5 {
            assert_eq!(tick(&mut ctx, &TickInput::default()), MatchState::Running);
        }
        assert_eq!(ctx.player.health, 95);
        assert!(ctx.projectiles.is_empty());
    }

    #[test]
    fn test_defeat_has_priority_over_victory() {
        let mut ctx = single_enemy_match(vec![1], Vec2::new(100.0, 100.0));
        ctx.enemies[0].health = 1;
        ctx.player.health = 1;
        let player_pos = ctx.player.pos;

        // A player projectile about to hit the last enemy, and an enemy
        // projectile about to hit the player, in the same tick
        spawn_projectile(
            &mut ctx,
            Vec2::new(100.0, 80.0),
            Vec2::new(100.0, 200.0),
            Team::Player,
        )
        .unwrap();
        spawn_projectile(
            &mut ctx,
            player_pos + Vec2::new(0.0, -25.0),
            player_pos,
            Team::Enemy,
        )
        .unwrap();

        assert_eq!(tick(&mut ctx, &TickInput::default()), MatchState::Defeat);
        assert!(ctx.enemies.is_empty());
    }

    #[test]
    fn test_fire_on_first_tick_is_dropped() {
        let mut ctx = single_enemy_match(vec![1], Vec2::new(100.0, 100.0));
        let input = TickInput {
            fire: true,
            aim: Vec2::new(100.0, 100.0),
            ..Default::default()
        };

        tick(&mut ctx, &input);
        assert!(ctx.projectiles.is_empty());
        assert_eq!(ctx.stats.player_shots, 0);

        // Held fire: the first shot leaves on tick 30
        while ctx.tick < 29 {
            tick(&mut ctx, &input);
        }
        assert!(ctx.projectiles.is_empty());
        tick(&mut ctx, &input);
        assert_eq!(ctx.stats.player_shots, 1);
        assert_eq!(ctx.player.last_fired_tick, 30);
    }

    #[test]
    fn test_determinism() {
        // Two matches with the same seed and inputs stay identical
        let mut a = MatchContext::new(MatchSettings::default(), 99999).unwrap();
        let mut b = MatchContext::new(MatchSettings::default(), 99999).unwrap();

        let inputs = [
            TickInput {
                move_dir: Vec2::new(1.0, 0.0),
                fire: true,
                aim: Vec2::new(10.0, 10.0),
            },
            TickInput {
                move_dir: Vec2::new(0.0, -1.0),
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..100 {
            for input in &inputs {
                tick(&mut a, input);
                tick(&mut b, input);
            }
        }

        assert_eq!(a.tick, b.tick);
        assert_eq!(a.player.pos, b.player.pos);
        assert_eq!(a.player.health, b.player.health);
        let pa: Vec<Vec2> = a.projectiles.iter().map(|p| p.pos).collect();
        let pb: Vec<Vec2> = b.projectiles.iter().map(|p| p.pos).collect();
        assert_eq!(pa, pb);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn player_box_stays_in_arena(
                seed in 0u64..1000,
                moves in proptest::collection::vec((-1i8..=1, -1i8..=1), 1..200)
            ) {
                let mut ctx = MatchContext::new(MatchSettings::default(), seed).unwrap();
                for &(x, y) in &moves {
                    let input = TickInput {
                        move_dir: Vec2::new(x as f32, y as f32),
                        ..Default::default()
                    };
                    tick(&mut ctx, &input);
                    let half = ctx.player.size / 2.0;
                    prop_assert!(ctx.player.pos.x - half.x >= 0.0);
                    prop_assert!(ctx.player.pos.y - half.y >= 0.0);
                    prop_assert!(ctx.player.pos.x + half.x <= ctx.arena.width);
                    prop_assert!(ctx.player.pos.y + half.y <= ctx.arena.height);
                }
            }
        }
    }
}
