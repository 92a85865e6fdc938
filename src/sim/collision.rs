//! Hit detection between the player, beams and enemies
//!
//! Hits use a per-axis box test on x and z: two entities touch when both
//! `|dx|` and `|dz|` are under `HIT_EXTENT`. This is not a radius test; a
//! pair far apart on one axis never hits no matter how close on the other.

use glam::Vec3;

use super::enemy::spawn_wreck;
use super::rng::RandomSource;
use super::state::{GameEvent, GameState};
use crate::consts::HIT_EXTENT;

/// Per-axis overlap on x and z (y is ignored)
#[inline]
pub fn box_overlap(a: Vec3, b: Vec3) -> bool {
    (a.x - b.x).abs() < HIT_EXTENT && (a.z - b.z).abs() < HIT_EXTENT
}

/// Enemies that reach the player are removed and cost one life each
pub fn collide_player_enemies(state: &mut GameState, events: &mut Vec<GameEvent>) {
    let player = state.player.position();

    let mut enemies = state.enemies.cursor();
    while let Some(e) = enemies.next_in(&state.enemies) {
        let Some(enemy) = state.enemies.get(e) else {
            continue;
        };
        if box_overlap(player, enemy.transform.position) {
            state.enemies.release(e);
            state.life = state.life.saturating_sub(1);
            log::debug!("player hit by enemy {e}, life {}", state.life);
            events.push(GameEvent::PlayerHit { enemy: e });
        }
    }
}

/// Each beam can destroy at most one enemy and each enemy absorbs at most
/// one beam. For a given enemy the lowest-index live beam wins.
pub fn collide_beams_enemies<R: RandomSource>(
    state: &mut GameState,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    let mut enemies = state.enemies.cursor();
    while let Some(e) = enemies.next_in(&state.enemies) {
        let Some(enemy) = state.enemies.get(e) else {
            continue;
        };
        let enemy_transform = enemy.transform;
        let enemy_drift = enemy.data.drift;

        // Beams consumed earlier in this sweep are already inactive here
        let mut beams = state.beams.cursor();
        while let Some(b) = beams.next_in(&state.beams) {
            let Some(beam) = state.beams.get(b) else {
                continue;
            };
            if box_overlap(beam.transform.position, enemy_transform.position) {
                state.beams.release(b);
                state.enemies.release(e);
                state.score += 1;
                spawn_wreck(&mut state.wrecks, &enemy_transform, enemy_drift, rng);
                log::debug!("beam {b} destroyed enemy {e}, score {}", state.score);
                events.push(GameEvent::EnemyHit { beam: b, enemy: e });
                break;
            }
        }
    }
}

/// Player sweep first, then beams
pub fn resolve_collisions<R: RandomSource>(
    state: &mut GameState,
    rng: &mut R,
    events: &mut Vec<GameEvent>,
) {
    collide_player_enemies(state, events);
    collide_beams_enemies(state, rng, events);
}
