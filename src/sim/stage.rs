//! Scrolling floor under the lane (cosmetic)

use glam::Vec3;

use super::transform::Transform;
use crate::consts::*;

/// Floor tiles laid end to end along z
#[derive(Debug, Clone)]
pub struct Stage {
    pub tiles: [Transform; STAGE_TILES],
}

impl Default for Stage {
    fn default() -> Self {
        Self {
            tiles: std::array::from_fn(|i| {
                let mut tile = Transform::with_scale(Vec3::new(4.5, 1.0, 1.0));
                tile.position = Vec3::new(0.0, STAGE_Y, 2.0 * i as f32 + STAGE_NEAR_Z);
                tile.update_matrix();
                tile
            }),
        }
    }
}

impl Stage {
    /// Slide every tile toward the camera, wrapping the nearest to the far end
    pub fn scroll(&mut self) {
        for tile in &mut self.tiles {
            tile.position.z -= STAGE_SCROLL;
            if tile.position.z < STAGE_NEAR_Z {
                tile.position.z += STAGE_LENGTH;
            }
            tile.update_matrix();
        }
    }
}
