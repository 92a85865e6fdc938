//! Incoming enemies and their knock-out wrecks

use glam::Vec3;

use super::rng::RandomSource;
use super::state::{EnemyPool, GameEvent, WreckPool};
use super::transform::Transform;
use crate::consts::*;

/// Enemy payload: signed horizontal drift per tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Enemy {
    pub drift: f32,
}

/// Cosmetic remains of a shot-down enemy
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Wreck {
    /// Vertical speed, decays every tick
    pub jump: f32,
    /// Horizontal speed
    pub drift: f32,
    /// Spin around x per tick
    pub spin: f32,
}

/// Advance live enemies, then roll for a new one
pub fn update_enemies<R: RandomSource>(
    enemies: &mut EnemyPool,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    move_enemies(enemies);
    if let Some(index) = spawn_enemy(enemies, rng) {
        events.push(GameEvent::EnemySpawned { slot: index });
    }

    for slot in enemies.slots_mut() {
        slot.transform.update_matrix();
    }
}

fn move_enemies(enemies: &mut EnemyPool) {
    for (_, slot) in enemies.iter_active_mut() {
        let pos = &mut slot.transform.position;
        pos.z -= ENEMY_SPEED;
        pos.x += slot.data.drift;

        // Forced direction, not a reflection: x may overshoot for a tick
        if pos.x > ENEMY_BOUNCE_X {
            slot.data.drift = -ENEMY_DRIFT;
        }
        if pos.x < -ENEMY_BOUNCE_X {
            slot.data.drift = ENEMY_DRIFT;
        }

        slot.transform.rotation.x += ENEMY_SPIN;

        if slot.transform.position.z < ENEMY_NEAR_Z {
            slot.active = false;
        }
    }
}

/// One-in-`ENEMY_SPAWN_ODDS` roll; on success take the lowest free slot at the far end of the lane
pub fn spawn_enemy<R: RandomSource>(enemies: &mut EnemyPool, rng: &mut R) -> Option<usize> {
    if rng.uniform_int(0..ENEMY_SPAWN_ODDS) != 0 {
        return None;
    }
    let index = enemies.try_acquire()?;

    let x = rng.uniform_int(0..ENEMY_SPAWN_STEPS) as f32 * 0.1 - PLAYER_LIMIT_X;
    let drift = if rng.uniform_int(0..2) == 0 {
        ENEMY_DRIFT
    } else {
        -ENEMY_DRIFT
    };

    let slot = enemies.get_mut(index)?;
    slot.transform.position.x = x;
    slot.transform.position.y = 0.0;
    slot.transform.position.z = ENEMY_SPAWN_Z;
    slot.transform.rotation = Vec3::ZERO;
    slot.data = Enemy { drift };

    log::debug!("enemy {index} spawned at x={x:.1} drift={drift:+.1}");
    Some(index)
}

/// Start a wreck where an enemy was destroyed; dropped silently when the pool is full
pub fn spawn_wreck<R: RandomSource>(
    wrecks: &mut WreckPool,
    from: &Transform,
    drift: f32,
    rng: &mut R,
) {
    let Some(index) = wrecks.try_acquire() else {
        return;
    };
    if let Some(slot) = wrecks.get_mut(index) {
        slot.transform.position = from.position;
        slot.transform.rotation = from.rotation;
        slot.data = Wreck {
            jump: WRECK_JUMP,
            drift,
            spin: rng.uniform_float(-WRECK_MAX_SPIN..WRECK_MAX_SPIN),
        };
    }
}

/// Arc wrecks up and away, release them once they fall below the floor
pub fn update_wrecks(wrecks: &mut WreckPool) {
    for (_, slot) in wrecks.iter_active_mut() {
        let pos = &mut slot.transform.position;
        pos.y += slot.data.jump;
        pos.x += slot.data.drift * WRECK_DRIFT_SCALE;
        slot.data.jump -= WRECK_GRAVITY;
        slot.transform.rotation.x += slot.data.spin;

        if slot.transform.position.y < WRECK_FLOOR_Y {
            slot.active = false;
        }
    }

    for slot in wrecks.slots_mut() {
        slot.transform.update_matrix();
    }
}
