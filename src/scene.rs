//! Title / GamePlay / GameOver scene state machine
//!
//! ```text
//! Title --confirm--> GamePlay --life hits 0--> GameOver --confirm--> Title
//! ```
//!
//! Transitions are checked once per frame, after the mode's own update, and
//! take effect immediately.

use crate::audio::Music;
use crate::consts::BLINK_PERIOD;
use crate::sim::{Controls, GameEvent, GameState, RandomSource, tick};

/// Current scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneMode {
    #[default]
    Title,
    GamePlay,
    GameOver,
}

/// What can move the scene along
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Confirm pressed this frame
    Confirm,
    /// Player life reached zero
    Defeated,
}

impl SceneMode {
    /// Transition table; `None` means the trigger is ignored in this mode
    pub fn next(self, trigger: Trigger) -> Option<SceneMode> {
        match (self, trigger) {
            (SceneMode::Title, Trigger::Confirm) => Some(SceneMode::GamePlay),
            (SceneMode::GamePlay, Trigger::Defeated) => Some(SceneMode::GameOver),
            (SceneMode::GameOver, Trigger::Confirm) => Some(SceneMode::Title),
            _ => None,
        }
    }

    /// BGM that plays while in this mode
    pub fn music(self) -> Music {
        match self {
            SceneMode::Title => Music::Title,
            SceneMode::GamePlay => Music::GamePlay,
            SceneMode::GameOver => Music::GameOver,
        }
    }
}

/// A completed mode change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: SceneMode,
    pub to: SceneMode,
}

/// Result of one scene update
#[derive(Debug, Clone, Default)]
pub struct FrameOutcome {
    pub events: Vec<GameEvent>,
    pub transition: Option<Transition>,
}

/// Scene state: mode, gameplay state and a cosmetic frame counter
#[derive(Debug, Clone, Default)]
pub struct Scene {
    mode: SceneMode,
    state: GameState,
    frame: u64,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start directly in a given mode (gameplay state is left fresh)
    pub fn starting_in(mode: SceneMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[inline]
    pub fn mode(&self) -> SceneMode {
        self.mode
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// "Press enter" prompt visibility for the current frame
    pub fn blink_visible(&self) -> bool {
        self.frame % BLINK_PERIOD >= BLINK_PERIOD / 2
    }

    /// Run the active mode for one frame, then check for a transition
    pub(crate) fn update<R: RandomSource>(&mut self, controls: &Controls, rng: &mut R) -> FrameOutcome {
        self.frame += 1;

        let mut outcome = FrameOutcome::default();
        let trigger = match self.mode {
            SceneMode::Title | SceneMode::GameOver => controls.confirm.then_some(Trigger::Confirm),
            SceneMode::GamePlay => {
                outcome.events = tick(&mut self.state, controls, rng);
                self.state.is_defeated().then_some(Trigger::Defeated)
            }
        };

        outcome.transition = trigger.and_then(|t| self.apply(t));
        outcome
    }

    /// Take a transition if the table allows it, running its entry action
    pub(crate) fn apply(&mut self, trigger: Trigger) -> Option<Transition> {
        let from = self.mode;
        let to = from.next(trigger)?;

        if to == SceneMode::GamePlay {
            self.state.reset();
        }
        self.mode = to;

        match to {
            SceneMode::GameOver => log::info!(
                "Game over: score {} after {} ticks",
                self.state.score,
                self.state.time_ticks
            ),
            _ => log::info!("Scene {from:?} -> {to:?}"),
        }
        Some(Transition { from, to })
    }
}
