//! The player's ship

use glam::Vec3;

use super::tick::Controls;
use super::transform::Transform;
use crate::consts::*;

/// Player ship; only its x position ever changes during play
#[derive(Debug, Clone)]
pub struct Player {
    pub transform: Transform,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            transform: Transform::uniform(PLAYER_SCALE),
        }
    }
}

impl Player {
    #[inline]
    pub fn position(&self) -> Vec3 {
        self.transform.position
    }

    /// Back to the lane centre
    pub fn reset(&mut self) {
        self.transform.position = Vec3::ZERO;
        self.transform.update_matrix();
    }
}

/// Steer left/right by a fixed step, then clamp to the lane
pub fn update_player(player: &mut Player, controls: &Controls) {
    let x = &mut player.transform.position.x;
    if controls.right {
        *x += PLAYER_STEP;
    }
    if controls.left {
        *x -= PLAYER_STEP;
    }
    *x = x.clamp(-PLAYER_LIMIT_X, PLAYER_LIMIT_X);

    player.transform.update_matrix();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn right() -> Controls {
        Controls {
            right: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_player_moves_one_step() {
        let mut player = Player::default();
        update_player(&mut player, &right());
        assert!((player.position().x - 0.1).abs() < 1e-6);
        assert_eq!(player.position().z, 0.0);
        assert_eq!(player.position().y, 0.0);
    }

    #[test]
    fn test_player_clamped_at_right_edge() {
        let mut player = Player::default();
        for _ in 0..100 {
            update_player(&mut player, &right());
        }
        assert_eq!(player.position().x, PLAYER_LIMIT_X);
    }

    #[test]
    fn test_player_clamped_at_left_edge() {
        let mut player = Player::default();
        let left = Controls {
            left: true,
            ..Default::default()
        };
        for _ in 0..100 {
            update_player(&mut player, &left);
        }
        assert_eq!(player.position().x, -PLAYER_LIMIT_X);
    }

    #[test]
    fn test_both_directions_cancel() {
        let mut player = Player::default();
        let both = Controls {
            left: true,
            right: true,
            ..Default::default()
        };
        update_player(&mut player, &both);
        assert!(player.position().x.abs() < 1e-6);
    }
}
