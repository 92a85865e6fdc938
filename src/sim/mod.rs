//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per frame
//! - Randomness only through an injected `RandomSource`
//! - Stable iteration order (by slot index)
//! - No rendering, audio or platform dependencies

pub mod beam;
pub mod collision;
pub mod enemy;
pub mod player;
pub mod pool;
pub mod rng;
pub mod stage;
pub mod state;
pub mod tick;
pub mod transform;

pub use beam::{Beam, BeamCooldown};
pub use collision::{box_overlap, collide_beams_enemies, collide_player_enemies, resolve_collisions};
pub use enemy::{Enemy, Wreck};
pub use player::Player;
pub use pool::{ActiveCursor, EntityPool, Slot, SlotIndex};
pub use rng::{PcgRandom, RandomSource, ScriptedRandom};
pub use stage::Stage;
pub use state::{BeamPool, EnemyPool, GameEvent, GameState, WreckPool};
pub use tick::{Controls, tick};
pub use transform::Transform;
