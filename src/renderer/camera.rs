//! Fixed chase camera behind the ship

use glam::{Mat4, Vec3};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// View + projection parameters passed with every model draw
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view (radians)
    pub fov_y: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 1.0, -6.0),
            target: Vec3::new(0.0, 1.0, 0.0),
            up: Vec3::Y,
            fov_y: 45f32.to_radians(),
            aspect: SCREEN_WIDTH / SCREEN_HEIGHT,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Camera {
    /// Left-handed view matrix (+z into the screen)
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_lh(self.eye, self.target, self.up)
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_lh(self.fov_y, self.aspect, self.near, self.far)
    }
}
