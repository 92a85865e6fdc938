//! Top-level game: one `update` and one `draw` per frame
//!
//! Owns the host services, the random source and the scene. Gameplay never
//! looks anything up globally; it only sees what was passed to `Game::new`.

use thiserror::Error;

use crate::audio::{SoundBank, SoundEffect};
use crate::platform::{AssetError, AudioPlayer, Button, Input, Renderer, Services, TextOverlay};
use crate::renderer::{self, Assets, Camera};
use crate::scene::{FrameOutcome, Scene, Transition, Trigger};
use crate::settings::Settings;
use crate::sim::{Controls, GameState, RandomSource};

/// Startup failures
#[derive(Error, Debug)]
pub enum GameError {
    #[error("failed to load assets: {0}")]
    Asset(#[from] AssetError),
}

/// Sample the buttons the simulation cares about
pub fn read_controls<I: Input>(input: &I) -> Controls {
    Controls {
        left: input.is_pressed(Button::Left),
        right: input.is_pressed(Button::Right),
        fire: input.is_pressed(Button::Fire),
        confirm: input.was_pressed_this_frame(Button::Confirm),
    }
}

/// Game instance holding all state
pub struct Game<I, A, R, T, G> {
    services: Services<I, A, R, T>,
    rng: G,
    settings: Settings,
    scene: Scene,
    sounds: SoundBank,
    assets: Assets,
    camera: Camera,
}

impl<I, A, R, T, G> Game<I, A, R, T, G>
where
    I: Input,
    A: AudioPlayer,
    R: Renderer,
    T: TextOverlay,
    G: RandomSource,
{
    /// Load assets and start the title music
    pub fn new(mut services: Services<I, A, R, T>, rng: G, settings: Settings) -> Result<Self, GameError> {
        let assets = Assets::load(&mut services.renderer)?;
        let mut sounds = SoundBank::load(&mut services.audio)?;

        let scene = Scene::new();
        sounds.switch_music(
            &mut services.audio,
            scene.mode().music(),
            settings.effective_music_volume(),
        );

        log::info!("Game ready in {:?}", scene.mode());
        Ok(Self {
            services,
            rng,
            settings,
            scene,
            sounds,
            assets,
            camera: Camera::default(),
        })
    }

    /// Advance one frame: scene update, sound effects, BGM swap on transition
    pub fn update(&mut self) -> FrameOutcome {
        let controls = read_controls(&self.services.input);
        let outcome = self.scene.update(&controls, &mut self.rng);

        let sfx_volume = self.settings.effective_sfx_volume();
        for effect in outcome.events.iter().filter_map(SoundEffect::for_event) {
            self.sounds.play_effect(&mut self.services.audio, effect, sfx_volume);
        }

        if let Some(transition) = outcome.transition {
            self.enter(transition);
        }

        outcome
    }

    /// Fire a scene trigger outside the frame update; music follows the
    /// transition exactly as it does in `update`
    pub fn apply(&mut self, trigger: Trigger) -> Option<Transition> {
        let transition = self.scene.apply(trigger)?;
        self.enter(transition);
        Some(transition)
    }

    /// Stop the previous scene's BGM and start the new one
    fn enter(&mut self, transition: Transition) {
        self.sounds.switch_music(
            &mut self.services.audio,
            transition.to.music(),
            self.settings.effective_music_volume(),
        );
    }

    /// Submit the current frame to the host renderer
    pub fn draw(&mut self) {
        renderer::draw_frame(
            &self.scene,
            &self.assets,
            &self.camera,
            self.settings.show_hud,
            &mut self.services.renderer,
            &mut self.services.text,
        );
    }

    /// `update` then `draw`
    pub fn run_frame(&mut self) -> FrameOutcome {
        let outcome = self.update();
        self.draw();
        outcome
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Gameplay state only; the scene mode changes through `update` or `apply`
    pub fn state_mut(&mut self) -> &mut GameState {
        self.scene.state_mut()
    }

    pub fn sounds(&self) -> &SoundBank {
        &self.sounds
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn services(&self) -> &Services<I, A, R, T> {
        &self.services
    }

    pub fn services_mut(&mut self) -> &mut Services<I, A, R, T> {
        &mut self.services
    }
}
