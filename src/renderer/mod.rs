//! Frame drawing over the host `Renderer`
//!
//! Background sprites, then depth reset, then world models, then foreground
//! sprites and HUD text. Drawing only reads the scene.

pub mod assets;
pub mod camera;

pub use assets::Assets;
pub use camera::Camera;

use glam::Vec2;

use crate::consts::*;
use crate::platform::{Layer, Renderer, TextOverlay};
use crate::scene::{Scene, SceneMode};
use crate::sim::GameState;

/// Draw one frame of `scene`
pub fn draw_frame<R: Renderer, T: TextOverlay>(
    scene: &Scene,
    assets: &Assets,
    camera: &Camera,
    show_hud: bool,
    renderer: &mut R,
    text: &mut T,
) {
    let mode = scene.mode();
    let in_world = mode != SceneMode::Title;

    renderer.begin_pass(Layer::Background);
    if in_world {
        renderer.draw_sprite(assets.background, Vec2::ZERO);
    }
    renderer.end_pass(Layer::Background);
    renderer.clear_depth();

    renderer.begin_pass(Layer::World);
    if in_world {
        draw_world(scene.state(), assets, camera, renderer);
    }
    renderer.end_pass(Layer::World);

    renderer.begin_pass(Layer::Foreground);
    match mode {
        SceneMode::Title => {
            renderer.draw_sprite(assets.title, Vec2::ZERO);
            draw_prompt(scene, assets, renderer);
        }
        SceneMode::GamePlay => {
            if show_hud {
                draw_hud(scene.state(), text);
            }
        }
        SceneMode::GameOver => {
            if show_hud {
                draw_hud(scene.state(), text);
            }
            renderer.draw_sprite(assets.game_over, Vec2::ZERO);
            draw_prompt(scene, assets, renderer);
        }
    }
    renderer.end_pass(Layer::Foreground);
}

fn draw_world<R: Renderer>(state: &GameState, assets: &Assets, camera: &Camera, renderer: &mut R) {
    for tile in &state.stage.tiles {
        renderer.draw_model(assets.cube, tile.world(), camera, assets.stage);
    }

    renderer.draw_model(assets.cube, state.player.transform.world(), camera, assets.player);

    for (_, beam) in state.beams.iter_active() {
        renderer.draw_model(assets.cube, beam.transform.world(), camera, assets.beam);
    }
    for (_, enemy) in state.enemies.iter_active() {
        renderer.draw_model(assets.cube, enemy.transform.world(), camera, assets.enemy);
    }
    for (_, wreck) in state.wrecks.iter_active() {
        renderer.draw_model(assets.cube, wreck.transform.world(), camera, assets.enemy);
    }
}

fn draw_prompt<R: Renderer>(scene: &Scene, assets: &Assets, renderer: &mut R) {
    if scene.blink_visible() {
        let (x, y) = ENTER_SPRITE_POS;
        renderer.draw_sprite(assets.enter, Vec2::new(x, y));
    }
}

fn draw_hud<T: TextOverlay>(state: &GameState, text: &mut T) {
    let (x, y) = SCORE_TEXT_POS;
    text.print(&format!("SCORE {}", state.score), x, y, HUD_TEXT_SIZE);
    let (x, y) = LIFE_TEXT_POS;
    text.print(&format!("LIFE {}", state.life), x, y, HUD_TEXT_SIZE);
}
