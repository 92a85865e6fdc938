//! Fixed-order gameplay tick
//!
//! player -> beams -> enemies -> collisions. Collisions must see the
//! positions produced earlier in the same tick, so the order is fixed.

use super::beam::update_beams;
use super::collision::resolve_collisions;
use super::enemy::{update_enemies, update_wrecks};
use super::player::update_player;
use super::rng::RandomSource;
use super::state::{GameEvent, GameState};

/// Control snapshot for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    /// Steer left (held)
    pub left: bool,
    /// Steer right (held)
    pub right: bool,
    /// Fire beams (held)
    pub fire: bool,
    /// Confirm (pressed this frame)
    pub confirm: bool,
}

/// Advance gameplay by one tick and report what happened
pub fn tick<R: RandomSource>(
    state: &mut GameState,
    controls: &Controls,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    state.time_ticks += 1;

    update_player(&mut state.player, controls);
    update_beams(
        &mut state.beams,
        &mut state.beam_cooldown,
        &state.player,
        controls.fire,
        &mut events,
    );
    update_enemies(&mut state.enemies, rng, &mut events);
    update_wrecks(&mut state.wrecks);

    resolve_collisions(state, rng, &mut events);

    state.stage.scroll();

    events
}
