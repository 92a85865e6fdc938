//! Recording stand-ins for the host collaborators

#![allow(dead_code)]

use std::collections::HashSet;

use glam::{Mat4, Vec2, Vec3};

use beam_runner::platform::{
    AssetError, AudioPlayer, Button, ClipHandle, Input, Layer, ModelHandle, Renderer, Services,
    TextOverlay, TextureHandle, VoiceHandle,
};
use beam_runner::renderer::Camera;
use beam_runner::sim::ScriptedRandom;
use beam_runner::{Game, Settings};

#[derive(Debug, Default)]
pub struct ScriptedInput {
    pub held: HashSet<Button>,
    pub pressed: HashSet<Button>,
}

impl ScriptedInput {
    pub fn press(&mut self, button: Button) {
        self.pressed.insert(button);
    }

    pub fn hold(&mut self, button: Button) {
        self.held.insert(button);
    }

    /// Forget edge presses (held buttons stay down)
    pub fn end_frame(&mut self) {
        self.pressed.clear();
    }
}

impl Input for ScriptedInput {
    fn is_pressed(&self, button: Button) -> bool {
        self.held.contains(&button) || self.pressed.contains(&button)
    }

    fn was_pressed_this_frame(&self, button: Button) -> bool {
        self.pressed.contains(&button)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AudioCall {
    Play { path: String, looping: bool },
    Stop(VoiceHandle),
}

#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub paths: Vec<String>,
    pub calls: Vec<AudioCall>,
    pub missing: Option<String>,
    next_voice: u32,
}

impl RecordingAudio {
    /// Paths started since the log was last cleared
    pub fn played(&self) -> Vec<(String, bool)> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                AudioCall::Play { path, looping } => Some((path.clone(), *looping)),
                AudioCall::Stop(_) => None,
            })
            .collect()
    }

    pub fn stops(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, AudioCall::Stop(_)))
            .count()
    }
}

impl AudioPlayer for RecordingAudio {
    fn load(&mut self, path: &str) -> Result<ClipHandle, AssetError> {
        if self.missing.as_deref() == Some(path) {
            return Err(AssetError::Missing { path: path.into() });
        }
        self.paths.push(path.into());
        Ok(ClipHandle(self.paths.len() as u32 - 1))
    }

    fn play(&mut self, clip: ClipHandle, looping: bool, _volume: f32) -> VoiceHandle {
        let path = self.paths[clip.0 as usize].clone();
        self.calls.push(AudioCall::Play { path, looping });
        self.next_voice += 1;
        VoiceHandle(self.next_voice)
    }

    fn stop(&mut self, voice: VoiceHandle) {
        self.calls.push(AudioCall::Stop(voice));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Begin(Layer),
    End(Layer),
    ClearDepth,
    Sprite(String),
    Model { texture: String, at: Vec3 },
}

#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub textures: Vec<String>,
    pub calls: Vec<DrawCall>,
}

impl RecordingRenderer {
    pub fn models_with(&self, texture: &str) -> Vec<Vec3> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Model { texture: t, at } if t == texture => Some(*at),
                _ => None,
            })
            .collect()
    }

    pub fn sprites(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::Sprite(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn load_texture(&mut self, path: &str) -> Result<TextureHandle, AssetError> {
        self.textures.push(path.into());
        Ok(TextureHandle(self.textures.len() as u32 - 1))
    }

    fn create_model(&mut self) -> ModelHandle {
        ModelHandle(0)
    }

    fn begin_pass(&mut self, layer: Layer) {
        self.calls.push(DrawCall::Begin(layer));
    }

    fn end_pass(&mut self, layer: Layer) {
        self.calls.push(DrawCall::End(layer));
    }

    fn clear_depth(&mut self) {
        self.calls.push(DrawCall::ClearDepth);
    }

    fn draw_sprite(&mut self, texture: TextureHandle, _position: Vec2) {
        self.calls
            .push(DrawCall::Sprite(self.textures[texture.0 as usize].clone()));
    }

    fn draw_model(&mut self, _model: ModelHandle, world: &Mat4, _camera: &Camera, texture: TextureHandle) {
        self.calls.push(DrawCall::Model {
            texture: self.textures[texture.0 as usize].clone(),
            at: world.w_axis.truncate(),
        });
    }
}

#[derive(Debug, Default)]
pub struct RecordingText {
    pub lines: Vec<String>,
}

impl TextOverlay for RecordingText {
    fn print(&mut self, text: &str, _x: f32, _y: f32, _size: f32) {
        self.lines.push(text.into());
    }
}

pub type TestGame = Game<ScriptedInput, RecordingAudio, RecordingRenderer, RecordingText, ScriptedRandom>;

pub fn services() -> Services<ScriptedInput, RecordingAudio, RecordingRenderer, RecordingText> {
    Services::default()
}

pub fn game(rng: ScriptedRandom) -> TestGame {
    Game::new(services(), rng, Settings::default()).expect("mock assets always load")
}

/// Press a button for exactly one frame
pub fn tap(game: &mut TestGame, button: Button) {
    game.services_mut().input.press(button);
    game.update();
    game.services_mut().input.end_frame();
}

/// Run frames with the current held buttons
pub fn idle(game: &mut TestGame, frames: usize) {
    for _ in 0..frames {
        game.update();
        game.services_mut().input.end_frame();
    }
}
