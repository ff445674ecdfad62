//! Player steering and enemy pursuit

use glam::Vec2;

use super::geom::Arena;
use super::state::{Enemy, Player};
use crate::direction_to;

/// Move the player by the held axes, then clamp the box into the arena.
///
/// Axes are applied independently, so a diagonal moves `speed` along both.
pub fn move_player(player: &mut Player, intent: Vec2, arena: &Arena) {
    let intent = Vec2::new(axis(intent.x), axis(intent.y));
    let moved = player.pos + intent * player.speed;
    player.pos = arena.clamp_center(moved, player.size);
}

/// Step every enemy straight toward the player's position
pub fn pursue(enemies: &mut [Enemy], target: Vec2) {
    for enemy in enemies {
        // Standing on the target: hold still this tick
        if let Some(dir) = direction_to(enemy.pos, target) {
            enemy.pos += dir * enemy.speed;
        }
    }
}

fn axis(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::MatchSettings;

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(Vec2::new(x, y), &MatchSettings::default())
    }

    #[test]
    fn test_diagonal_is_not_normalized() {
        let arena = Arena::new(800.0, 600.0);
        let mut player = player_at(400.0, 300.0);
        move_player(&mut player, Vec2::new(1.0, -1.0), &arena);
        assert_eq!(player.pos, Vec2::new(405.0, 295.0));
    }

    #[test]
    fn test_intent_is_reduced_to_unit_axes() {
        let arena = Arena::new(800.0, 600.0);
        let mut player = player_at(400.0, 300.0);
        move_player(&mut player, Vec2::new(3.0, 0.2), &arena);
        assert_eq!(player.pos, Vec2::new(405.0, 305.0));
    }

    #[test]
    fn test_player_clamped_at_edges() {
        let arena = Arena::new(800.0, 600.0);
        let mut player = player_at(22.0, 578.0);
        move_player(&mut player, Vec2::new(-1.0, 1.0), &arena);
        assert_eq!(player.pos, Vec2::new(20.0, 580.0));
    }

    #[test]
    fn test_repeated_intent_moves_linearly() {
        let arena = Arena::new(800.0, 600.0);
        let mut player = player_at(400.0, 300.0);
        for _ in 0..10 {
            move_player(&mut player, Vec2::new(1.0, 0.0), &arena);
        }
        assert_eq!(player.pos, Vec2::new(450.0, 300.0));
    }

    #[test]
    fn test_pursuit_moves_toward_target() {
        let settings = MatchSettings::default();
        let mut enemies = vec![Enemy::new(1, Vec2::new(100.0, 300.0), 0, &settings)];
        pursue(&mut enemies, Vec2::new(400.0, 300.0));
        assert_eq!(enemies[0].pos, Vec2::new(102.0, 300.0));
    }

    #[test]
    fn test_pursuit_at_zero_distance_holds_still() {
        let settings = MatchSettings::default();
        let target = Vec2::new(250.0, 250.0);
        let mut enemies = vec![Enemy::new(1, target, 0, &settings)];
        pursue(&mut enemies, target);
        assert_eq!(enemies[0].pos, target);
        assert!(enemies[0].pos.is_finite());
    }
}
