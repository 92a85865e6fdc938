//! Full Title -> GamePlay -> GameOver -> Title loop through the public `Game`

mod support;

use beam_runner::consts::START_LIFE;
use beam_runner::platform::{AssetError, Button};
use beam_runner::scene::{Transition, Trigger};
use beam_runner::sim::{GameEvent, ScriptedRandom};
use beam_runner::{Game, GameError, SceneMode, Settings};

use support::*;

const TITLE: &str = "audio/title_bgm.wav";
const GAMEPLAY: &str = "audio/gameplay_bgm.wav";
const GAMEOVER: &str = "audio/gameover_bgm.wav";

#[test]
fn test_title_music_starts_with_game() {
    let game = game(ScriptedRandom::default());
    assert_eq!(game.scene().mode(), SceneMode::Title);
    let audio = &game.services().audio;
    assert_eq!(audio.played(), vec![(TITLE.to_string(), true)]);
    assert!(game.sounds().bgm_voice().is_some());
}

#[test]
fn test_held_confirm_is_not_an_edge() {
    let mut game = game(ScriptedRandom::default());
    game.services_mut().input.hold(Button::Confirm);
    idle(&mut game, 5);
    assert_eq!(game.scene().mode(), SceneMode::Title);
}

#[test]
fn test_full_scene_cycle_swaps_music() {
    let mut game = game(ScriptedRandom::default());

    tap(&mut game, Button::Confirm);
    assert_eq!(game.scene().mode(), SceneMode::GamePlay);
    let state = game.scene().state();
    assert_eq!(state.score, 0);
    assert_eq!(state.life, START_LIFE);
    assert_eq!(state.beams.active_count(), 0);
    assert_eq!(state.enemies.active_count(), 0);

    // Park enemies on the player until the last life is gone
    let mut rounds = 0;
    while game.scene().mode() == SceneMode::GamePlay {
        let enemies = &mut game.state_mut().enemies;
        let e = enemies.try_acquire().unwrap();
        enemies.get_mut(e).unwrap().transform.position.z = 0.5;
        let outcome = game.update();
        assert!(outcome.events.iter().any(|e| matches!(e, GameEvent::PlayerHit { .. })));
        rounds += 1;
    }
    assert_eq!(rounds, START_LIFE);
    assert_eq!(game.scene().mode(), SceneMode::GameOver);
    assert_eq!(game.scene().state().life, 0);

    tap(&mut game, Button::Confirm);
    assert_eq!(game.scene().mode(), SceneMode::Title);

    let audio = &game.services().audio;
    let music: Vec<_> = audio
        .played()
        .into_iter()
        .filter(|(_, looping)| *looping)
        .map(|(path, _)| path)
        .collect();
    assert_eq!(music, vec![TITLE, GAMEPLAY, GAMEOVER, TITLE]);
    // One stop per transition
    assert_eq!(audio.stops(), 3);

    let hits = audio
        .played()
        .into_iter()
        .filter(|(path, _)| path == "audio/player_hit.wav")
        .count();
    assert_eq!(hits, START_LIFE as usize);
}

#[test]
fn test_direct_trigger_swaps_music() {
    let mut game = game(ScriptedRandom::default());
    let stops = game.services().audio.stops();

    let transition = game.apply(Trigger::Confirm);
    assert_eq!(
        transition,
        Some(Transition {
            from: SceneMode::Title,
            to: SceneMode::GamePlay
        })
    );
    assert_eq!(game.scene().mode(), SceneMode::GamePlay);
    let audio = &game.services().audio;
    assert_eq!(audio.stops(), stops + 1);
    assert_eq!(audio.played().last(), Some(&(GAMEPLAY.to_string(), true)));

    // Not in the table for GamePlay: nothing changes, music keeps playing
    assert_eq!(game.apply(Trigger::Confirm), None);
    assert_eq!(game.scene().mode(), SceneMode::GamePlay);
    assert_eq!(game.services().audio.stops(), stops + 1);
}

#[test]
fn test_enemy_hit_plays_effect() {
    let mut game = game(ScriptedRandom::default());
    tap(&mut game, Button::Confirm);

    // Enemy well ahead of the player, a beam just short of it
    let state = game.state_mut();
    let e = state.enemies.try_acquire().unwrap();
    state.enemies.get_mut(e).unwrap().transform.position.z = 10.0;
    let b = state.beams.try_acquire().unwrap();
    state.beams.get_mut(b).unwrap().transform.position.z = 9.9;

    let outcome = game.update();
    assert_eq!(outcome.events, vec![GameEvent::EnemyHit { beam: b, enemy: e }]);
    assert_eq!(game.scene().state().score, 1);
    let last = game.services().audio.played().pop().unwrap();
    assert_eq!(last, ("audio/enemy_hit.wav".to_string(), false));
}

#[test]
fn test_missing_asset_aborts_startup() {
    let mut services = services();
    services.audio.missing = Some(GAMEOVER.to_string());
    let result = Game::new(services, ScriptedRandom::default(), Settings::default());
    assert!(matches!(
        result,
        Err(GameError::Asset(AssetError::Missing { ref path })) if path == GAMEOVER
    ));
}

#[test]
fn test_fire_held_through_gameplay_respects_pool() {
    let mut game = game(ScriptedRandom::default());
    tap(&mut game, Button::Confirm);
    game.services_mut().input.hold(Button::Fire);

    let mut fired = 0;
    let mut saw_full = false;
    for _ in 0..400 {
        let outcome = game.update();
        fired += outcome
            .events
            .iter()
            .filter(|e| **e == GameEvent::BeamFired)
            .count();
        let live = game.scene().state().beams.active_count();
        assert!(live <= 10);
        saw_full |= live == 10;
    }
    // A beam lives 134 ticks, so at one shot per 11 ticks the pool fills
    // and later shots wait for a free slot
    assert!(saw_full);
    assert_eq!(fired, 30);
}
