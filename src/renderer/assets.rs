//! Textures and meshes requested from the host renderer at startup

use crate::platform::{AssetError, ModelHandle, Renderer, TextureHandle};

/// Handles for everything the draw pass uses
#[derive(Debug, Clone, Copy)]
pub struct Assets {
    pub background: TextureHandle,
    pub stage: TextureHandle,
    pub player: TextureHandle,
    pub beam: TextureHandle,
    pub enemy: TextureHandle,
    pub title: TextureHandle,
    pub enter: TextureHandle,
    pub game_over: TextureHandle,
    /// Every entity is drawn with the same unit cube
    pub cube: ModelHandle,
}

impl Assets {
    pub fn load<R: Renderer>(renderer: &mut R) -> Result<Self, AssetError> {
        let assets = Self {
            background: renderer.load_texture("bg.jpg")?,
            stage: renderer.load_texture("stage.jpg")?,
            player: renderer.load_texture("player.png")?,
            beam: renderer.load_texture("beam.png")?,
            enemy: renderer.load_texture("enemy.png")?,
            title: renderer.load_texture("title.png")?,
            enter: renderer.load_texture("enter.png")?,
            game_over: renderer.load_texture("gameover.png")?,
            cube: renderer.create_model(),
        };
        log::debug!("Loaded textures and cube model");
        Ok(assets)
    }
}
