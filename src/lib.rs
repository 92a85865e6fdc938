//! Beam Runner - a 2.5D lane shooter
//!
//! Core modules:
//! - `sim`: Deterministic simulation (pools, movement, collisions, game state)
//! - `scene`: Title / GamePlay / GameOver state machine
//! - `platform`: Capability traits for the host engine (input, audio, drawing, text)
//! - `audio`: Clip table and background music switching
//! - `renderer`: Order-dependent draw pass over the capability traits
//! - `game`: Wires everything together for one update + one draw per frame
//! - `settings`: Player preferences loaded from JSON

pub mod audio;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod scene;
pub mod settings;
pub mod sim;

pub use game::{Game, GameError};
pub use scene::{Scene, SceneMode};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Slots in the beam pool and in the enemy pool
    pub const POOL_CAPACITY: usize = 10;

    /// Player starting lives
    pub const START_LIFE: u32 = 3;

    /// Player horizontal movement per tick
    pub const PLAYER_STEP: f32 = 0.1;
    /// Player x is clamped to [-PLAYER_LIMIT_X, PLAYER_LIMIT_X]
    pub const PLAYER_LIMIT_X: f32 = 4.0;

    /// Beam forward speed per tick
    pub const BEAM_SPEED: f32 = 0.3;
    /// Beam spin around x per tick (radians, cosmetic)
    pub const BEAM_SPIN: f32 = 0.1;
    /// Beam is released once z exceeds this
    pub const BEAM_FAR_Z: f32 = 40.0;
    /// Cooldown counter wraps to 0 after exceeding this (11 ticks between shots)
    pub const BEAM_COOLDOWN_MAX: u32 = 10;

    /// One spawn roll in ENEMY_SPAWN_ODDS succeeds
    pub const ENEMY_SPAWN_ODDS: i32 = 10;
    /// Enemy spawn depth
    pub const ENEMY_SPAWN_Z: f32 = 40.0;
    /// Number of 0.1 steps across the spawn lane [-4, 4]
    pub const ENEMY_SPAWN_STEPS: i32 = 81;
    /// Enemy approach speed per tick (toward camera)
    pub const ENEMY_SPEED: f32 = 0.2;
    /// Enemy horizontal drift per tick
    pub const ENEMY_DRIFT: f32 = 0.2;
    /// Enemy spin around x per tick (radians, cosmetic)
    pub const ENEMY_SPIN: f32 = -0.1;
    /// Drift direction is forced back once |x| exceeds this
    pub const ENEMY_BOUNCE_X: f32 = 5.0;
    /// Enemy is released once z drops below this
    pub const ENEMY_NEAR_Z: f32 = -5.0;

    /// Per-axis collision threshold (|dx| and |dz| must both be below it)
    pub const HIT_EXTENT: f32 = 1.0;

    /// Wreck initial upward speed
    pub const WRECK_JUMP: f32 = 1.0;
    /// Wreck upward speed loss per tick
    pub const WRECK_GRAVITY: f32 = 0.1;
    /// Wreck horizontal drift as a multiple of the enemy's drift
    pub const WRECK_DRIFT_SCALE: f32 = 4.0;
    /// Wreck spin rate range (radians per tick)
    pub const WRECK_MAX_SPIN: f32 = 0.3;
    /// Wreck is released once y drops below this
    pub const WRECK_FLOOR_Y: f32 = -3.0;

    /// Stage floor tiles
    pub const STAGE_TILES: usize = 20;
    pub const STAGE_Y: f32 = -1.5;
    pub const STAGE_SCROLL: f32 = 0.1;
    /// Tiles wrap forward by STAGE_LENGTH once z drops below STAGE_NEAR_Z
    pub const STAGE_LENGTH: f32 = 40.0;
    pub const STAGE_NEAR_Z: f32 = -5.0;

    /// Entity model scales
    pub const PLAYER_SCALE: f32 = 0.5;
    pub const BEAM_SCALE: f32 = 0.3;
    pub const ENEMY_SCALE: f32 = 0.5;

    /// "Press enter" blink period in frames (visible in the second half)
    pub const BLINK_PERIOD: u64 = 40;

    /// Screen layout (pixels)
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;
    pub const ENTER_SPRITE_POS: (f32, f32) = (400.0, 500.0);
    pub const SCORE_TEXT_POS: (f32, f32) = (200.0, 10.0);
    pub const LIFE_TEXT_POS: (f32, f32) = (900.0, 10.0);
    pub const HUD_TEXT_SIZE: f32 = 2.0;
}
