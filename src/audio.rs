//! Background music and sound effects
//!
//! Clips are loaded once through the host `AudioPlayer`; one BGM voice plays
//! at a time and is swapped whenever the scene changes.

use crate::platform::{AssetError, AudioPlayer, ClipHandle, VoiceHandle};
use crate::sim::GameEvent;

/// Background music tracks, one per scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Music {
    Title,
    GamePlay,
    GameOver,
}

impl Music {
    pub const ALL: [Music; 3] = [Music::Title, Music::GamePlay, Music::GameOver];

    pub fn path(self) -> &'static str {
        match self {
            Music::Title => "audio/title_bgm.wav",
            Music::GamePlay => "audio/gameplay_bgm.wav",
            Music::GameOver => "audio/gameover_bgm.wav",
        }
    }
}

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Beam destroyed an enemy
    EnemyHit,
    /// Enemy rammed the player
    PlayerHit,
}

impl SoundEffect {
    pub const ALL: [SoundEffect; 2] = [SoundEffect::EnemyHit, SoundEffect::PlayerHit];

    pub fn path(self) -> &'static str {
        match self {
            SoundEffect::EnemyHit => "audio/enemy_hit.wav",
            SoundEffect::PlayerHit => "audio/player_hit.wav",
        }
    }

    /// Effect for a gameplay event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::EnemyHit { .. } => Some(SoundEffect::EnemyHit),
            GameEvent::PlayerHit { .. } => Some(SoundEffect::PlayerHit),
            GameEvent::BeamFired | GameEvent::EnemySpawned { .. } => None,
        }
    }
}

/// Loaded clips plus the currently playing BGM voice
#[derive(Debug)]
pub struct SoundBank {
    music: [ClipHandle; 3],
    effects: [ClipHandle; 2],
    bgm: Option<VoiceHandle>,
}

impl SoundBank {
    /// Load every clip; the first failure aborts
    pub fn load<A: AudioPlayer>(audio: &mut A) -> Result<Self, AssetError> {
        let mut music = [ClipHandle(0); 3];
        for (slot, track) in music.iter_mut().zip(Music::ALL) {
            *slot = audio.load(track.path())?;
        }
        let mut effects = [ClipHandle(0); 2];
        for (slot, effect) in effects.iter_mut().zip(SoundEffect::ALL) {
            *slot = audio.load(effect.path())?;
        }
        Ok(Self {
            music,
            effects,
            bgm: None,
        })
    }

    pub fn music_clip(&self, track: Music) -> ClipHandle {
        self.music[track as usize]
    }

    pub fn effect_clip(&self, effect: SoundEffect) -> ClipHandle {
        self.effects[effect as usize]
    }

    /// Voice of the BGM currently playing
    pub fn bgm_voice(&self) -> Option<VoiceHandle> {
        self.bgm
    }

    /// Stop the current BGM and loop `track` in its place
    pub fn switch_music<A: AudioPlayer>(&mut self, audio: &mut A, track: Music, volume: f32) {
        if let Some(voice) = self.bgm.take() {
            audio.stop(voice);
        }
        self.bgm = Some(audio.play(self.music_clip(track), true, volume));
    }

    /// Fire-and-forget effect
    pub fn play_effect<A: AudioPlayer>(&self, audio: &mut A, effect: SoundEffect, volume: f32) {
        audio.play(self.effect_clip(effect), false, volume);
    }
}
