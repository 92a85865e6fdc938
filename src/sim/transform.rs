//! Position / rotation / scale with a cached world matrix

use glam::{EulerRot, Mat4, Quat, Vec3};

/// Entity transform
///
/// `position`, `rotation` (Euler radians) and `scale` are the source of
/// truth. `world` is a projection of them, refreshed by [`Transform::update_matrix`]
/// once per tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: Vec3,
    world: Mat4,
}

impl Default for Transform {
    fn default() -> Self {
        Self::with_scale(Vec3::ONE)
    }
}

impl Transform {
    pub fn with_scale(scale: Vec3) -> Self {
        let mut t = Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale,
            world: Mat4::IDENTITY,
        };
        t.update_matrix();
        t
    }

    pub fn uniform(scale: f32) -> Self {
        Self::with_scale(Vec3::splat(scale))
    }

    /// Recompute the world matrix: scale, then roll (z), pitch (x), yaw (y), then translate
    pub fn update_matrix(&mut self) {
        let rotation = Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        );
        self.world = Mat4::from_scale_rotation_translation(self.scale, rotation, self.position);
    }

    /// World matrix as of the last `update_matrix` call
    #[inline]
    pub fn world(&self) -> &Mat4 {
        &self.world
    }
}
