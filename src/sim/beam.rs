//! Player beams: spawn on fire with a cooldown, fly straight ahead

use glam::Vec3;

use super::player::Player;
use super::state::{BeamPool, GameEvent};
use crate::consts::*;

/// Beam payload (beams carry nothing beyond their transform)
#[derive(Debug, Clone, Copy, Default)]
pub struct Beam;

/// Fire-rate limiter.
///
/// Zero means ready. Firing sets it to 1; while non-zero it counts up each
/// tick and wraps back to 0 after passing `BEAM_COOLDOWN_MAX`, so shots are
/// at least `BEAM_COOLDOWN_MAX + 1` ticks apart regardless of key repeat.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BeamCooldown(u32);

impl BeamCooldown {
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.0 == 0
    }

    pub fn start(&mut self) {
        self.0 = 1;
    }

    pub fn advance(&mut self) {
        if self.0 > 0 {
            self.0 += 1;
            if self.0 > BEAM_COOLDOWN_MAX {
                self.0 = 0;
            }
        }
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

/// Advance live beams, then try to fire a new one
pub fn update_beams(
    beams: &mut BeamPool,
    cooldown: &mut BeamCooldown,
    player: &Player,
    fire: bool,
    events: &mut Vec<GameEvent>,
) {
    move_beams(beams);

    if cooldown.is_ready() {
        if fire && spawn_beam(beams, player).is_some() {
            cooldown.start();
            events.push(GameEvent::BeamFired);
        }
    } else {
        cooldown.advance();
    }

    for slot in beams.slots_mut() {
        slot.transform.update_matrix();
    }
}

fn move_beams(beams: &mut BeamPool) {
    for (_, slot) in beams.iter_active_mut() {
        slot.transform.position.z += BEAM_SPEED;
        slot.transform.rotation.x += BEAM_SPIN;
        if slot.transform.position.z > BEAM_FAR_Z {
            slot.active = false;
        }
    }
}

/// Launch from the player's (x, z); `None` when the pool is full
fn spawn_beam(beams: &mut BeamPool, player: &Player) -> Option<usize> {
    let index = beams.try_acquire()?;
    let origin = player.position();
    if let Some(slot) = beams.get_mut(index) {
        slot.transform.position.x = origin.x;
        slot.transform.position.z = origin.z;
        slot.transform.rotation = Vec3::ZERO;
    }
    log::debug!("beam {index} fired at x={:.1}", origin.x);
    Some(index)
}
