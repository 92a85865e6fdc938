//! Platform abstraction layer
//!
//! The host engine provides these capabilities; the game only talks to them
//! through the traits below:
//! - Input (level and edge key state)
//! - Audio (clip loading and voice playback)
//! - Rendering (sprite and model passes)
//! - Text overlay (HUD)

use glam::{Mat4, Vec2};
use thiserror::Error;

use crate::renderer::Camera;

/// Texture loaded by the host renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Mesh created by the host renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelHandle(pub u32);

/// Loaded wave data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClipHandle(pub u32);

/// A playing (or finished) instance of a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VoiceHandle(pub u32);

/// Failure to load an asset at startup
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("asset not found: {path}")]
    Missing { path: String },
}

/// Buttons the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Left,
    Right,
    Fire,
    Confirm,
}

/// Keyboard (or pad) state for the current frame
pub trait Input {
    /// Held down this frame
    fn is_pressed(&self, button: Button) -> bool;
    /// Went from up to down this frame
    fn was_pressed_this_frame(&self, button: Button) -> bool;
}

/// Wave playback
pub trait AudioPlayer {
    fn load(&mut self, path: &str) -> Result<ClipHandle, AssetError>;
    /// Start a voice; `volume` is 0..=1
    fn play(&mut self, clip: ClipHandle, looping: bool, volume: f32) -> VoiceHandle;
    /// Stopping a finished voice is a no-op
    fn stop(&mut self, voice: VoiceHandle);
}

/// Draw layers, in the order a frame submits them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    /// Full-screen backdrop sprites
    Background,
    /// Depth-tested models
    World,
    /// Overlay sprites and HUD
    Foreground,
}

/// Sprite and model submission
pub trait Renderer {
    fn load_texture(&mut self, path: &str) -> Result<TextureHandle, AssetError>;
    /// Unit cube mesh
    fn create_model(&mut self) -> ModelHandle;

    fn begin_pass(&mut self, layer: Layer);
    fn end_pass(&mut self, layer: Layer);
    /// Reset depth so the world draws over the background
    fn clear_depth(&mut self);

    /// Top-left anchored, in screen pixels
    fn draw_sprite(&mut self, texture: TextureHandle, position: Vec2);
    fn draw_model(&mut self, model: ModelHandle, world: &Mat4, camera: &Camera, texture: TextureHandle);
}

/// Debug-text style overlay, flushed by the host in the foreground pass
pub trait TextOverlay {
    fn print(&mut self, text: &str, x: f32, y: f32, size: f32);
}

/// The host collaborators, handed to the game at construction
#[derive(Debug, Default)]
pub struct Services<I, A, R, T> {
    pub input: I,
    pub audio: A,
    pub renderer: R,
    pub text: T,
}

impl<I, A, R, T> Services<I, A, R, T> {
    pub fn new(input: I, audio: A, renderer: R, text: T) -> Self {
        Self {
            input,
            audio,
            renderer,
            text,
        }
    }
}
