//! Beam Runner entry point
//!
//! Runs the game headless: the host collaborators log what they are asked
//! to do and an autopilot plays a few rounds.

use glam::{Mat4, Vec2};

use beam_runner::platform::{
    AssetError, AudioPlayer, Button, ClipHandle, Input, Layer, ModelHandle, Renderer, Services,
    TextOverlay, TextureHandle, VoiceHandle,
};
use beam_runner::renderer::Camera;
use beam_runner::sim::PcgRandom;
use beam_runner::{Game, SceneMode, Settings};

/// Frames to simulate (one minute at 60 fps)
const DEMO_FRAMES: u64 = 60 * 60;

/// Scripted pilot: holds fire, weaves across the lane, presses confirm on menus
#[derive(Default)]
struct Autopilot {
    frame: u64,
    mode: SceneMode,
}

impl Autopilot {
    fn observe(&mut self, frame: u64, mode: SceneMode) {
        self.frame = frame;
        self.mode = mode;
    }
}

impl Input for Autopilot {
    fn is_pressed(&self, button: Button) -> bool {
        let sweep = (self.frame / 90) % 2 == 0;
        match button {
            Button::Fire => true,
            Button::Left => sweep,
            Button::Right => !sweep,
            Button::Confirm => self.was_pressed_this_frame(button),
        }
    }

    fn was_pressed_this_frame(&self, button: Button) -> bool {
        // Linger on menus for a second before confirming
        button == Button::Confirm && self.mode != SceneMode::GamePlay && self.frame % 60 == 59
    }
}

/// Hands out sequential handles and logs every request
#[derive(Default)]
struct HeadlessAudio {
    clips: u32,
    voices: u32,
}

impl AudioPlayer for HeadlessAudio {
    fn load(&mut self, path: &str) -> Result<ClipHandle, AssetError> {
        self.clips += 1;
        log::trace!("load clip {path} -> {}", self.clips);
        Ok(ClipHandle(self.clips))
    }

    fn play(&mut self, clip: ClipHandle, looping: bool, volume: f32) -> VoiceHandle {
        self.voices += 1;
        log::trace!("play {clip:?} loop={looping} vol={volume:.2}");
        VoiceHandle(self.voices)
    }

    fn stop(&mut self, voice: VoiceHandle) {
        log::trace!("stop {voice:?}");
    }
}

#[derive(Default)]
struct HeadlessRenderer {
    textures: u32,
    models: u32,
    draws: u64,
}

impl Renderer for HeadlessRenderer {
    fn load_texture(&mut self, path: &str) -> Result<TextureHandle, AssetError> {
        self.textures += 1;
        log::trace!("load texture {path} -> {}", self.textures);
        Ok(TextureHandle(self.textures))
    }

    fn create_model(&mut self) -> ModelHandle {
        self.models += 1;
        ModelHandle(self.models)
    }

    fn begin_pass(&mut self, layer: Layer) {
        log::trace!("begin {layer:?}");
    }

    fn end_pass(&mut self, layer: Layer) {
        log::trace!("end {layer:?}");
    }

    fn clear_depth(&mut self) {}

    fn draw_sprite(&mut self, texture: TextureHandle, position: Vec2) {
        self.draws += 1;
        log::trace!("sprite {texture:?} at {position}");
    }

    fn draw_model(&mut self, model: ModelHandle, world: &Mat4, _camera: &Camera, texture: TextureHandle) {
        self.draws += 1;
        log::trace!("model {model:?} {texture:?} at {}", world.w_axis.truncate());
    }
}

struct HeadlessText;

impl TextOverlay for HeadlessText {
    fn print(&mut self, text: &str, x: f32, y: f32, _size: f32) {
        log::trace!("text '{text}' at ({x}, {y})");
    }
}

fn main() {
    env_logger::init();
    log::info!("Beam Runner (headless) starting...");

    let settings_path =
        std::env::var("BEAM_RUNNER_SETTINGS").unwrap_or_else(|_| "settings.json".to_string());
    let settings = Settings::load_or_default(&settings_path);

    let rng = match settings.seed {
        Some(seed) => PcgRandom::new(seed),
        None => PcgRandom::from_entropy(),
    };
    log::info!("Run seed: {}", rng.seed());

    let services = Services::new(
        Autopilot::default(),
        HeadlessAudio::default(),
        HeadlessRenderer::default(),
        HeadlessText,
    );
    let mut game = match Game::new(services, rng, settings) {
        Ok(game) => game,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    let mut rounds = 0;
    let mut best = 0;
    for frame in 0..DEMO_FRAMES {
        let mode = game.scene().mode();
        game.services_mut().input.observe(frame, mode);

        let outcome = game.run_frame();
        if outcome.transition.is_some_and(|t| t.to == SceneMode::GameOver) {
            rounds += 1;
            best = best.max(game.scene().state().score);
        }
    }

    let state = game.scene().state();
    log::info!(
        "Finished {DEMO_FRAMES} frames in {:?}: {rounds} rounds lost, best score {best}, current score {} life {}, {} draw calls",
        game.scene().mode(),
        state.score,
        state.life,
        game.services().renderer.draws,
    );
}
