//! Game state and core simulation types
//!
//! Everything the gameplay tick reads or writes lives here. The draw pass
//! only ever sees it through a shared reference.

use super::beam::{Beam, BeamCooldown};
use super::enemy::{Enemy, Wreck};
use super::player::Player;
use super::pool::{EntityPool, SlotIndex};
use super::stage::Stage;
use super::transform::Transform;
use crate::consts::*;

pub type BeamPool = EntityPool<Beam, POOL_CAPACITY>;
pub type EnemyPool = EntityPool<Enemy, POOL_CAPACITY>;
pub type WreckPool = EntityPool<Wreck, POOL_CAPACITY>;

/// Things that happened during a tick, for audio and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A beam left the ship
    BeamFired,
    /// A new enemy entered the far end of the lane
    EnemySpawned { slot: SlotIndex },
    /// An enemy rammed the player
    PlayerHit { enemy: SlotIndex },
    /// A beam destroyed an enemy
    EnemyHit { beam: SlotIndex, enemy: SlotIndex },
}

/// Complete gameplay state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Player lives, never below zero
    pub life: u32,
    /// Score, only ever goes up during a run
    pub score: u32,
    /// Gameplay ticks since the run started
    pub time_ticks: u64,
    pub player: Player,
    pub beams: BeamPool,
    pub beam_cooldown: BeamCooldown,
    pub enemies: EnemyPool,
    /// Knock-out effects (not gameplay-affecting)
    pub wrecks: WreckPool,
    /// Scrolling floor (not gameplay-affecting)
    pub stage: Stage,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    pub fn new() -> Self {
        Self {
            life: START_LIFE,
            score: 0,
            time_ticks: 0,
            player: Player::default(),
            beams: EntityPool::new(Transform::uniform(BEAM_SCALE)),
            beam_cooldown: BeamCooldown::default(),
            enemies: EntityPool::new(Transform::uniform(ENEMY_SCALE)),
            wrecks: EntityPool::new(Transform::uniform(ENEMY_SCALE)),
            stage: Stage::default(),
        }
    }

    /// Fresh run: full lives, zero score, empty pools, ship back in the centre
    pub fn reset(&mut self) {
        self.life = START_LIFE;
        self.score = 0;
        self.time_ticks = 0;
        self.player.reset();
        self.beams.clear();
        self.beam_cooldown.reset();
        self.enemies.clear();
        self.wrecks.clear();
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.life == 0
    }
}
