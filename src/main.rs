use sdl2::image::LoadTexture;
use sdl2::render::Texture;
use std::path::PathBuf;
use std::time::{Duration, Instant};

mod collision;
mod config;
mod game;
mod input_system;
mod kinematics;
mod obstacle;
mod player;
mod render;
mod sprite;
mod timer;

use config::GameConfig;
use game::GameController;
use input_system::{InputSystem, KeyBindings};
use render::DrawSurface;

const WINDOW_TITLE: &str = "Dino Runner - Enter to start, Space to jump";

/// Wait between loop iterations when no frame is scheduled, or vsync is off
const IDLE_WAIT: Duration = Duration::new(0, 1_000_000_000u32 / 60);

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Optional config path as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = GameConfig::load(config_path.as_deref())?;
    let bindings = KeyBindings::from_config(&config.controls)?;

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;
    let _image_context =
        sdl2::image::init(sdl2::image::InitFlag::PNG | sdl2::image::InitFlag::JPG)?;

    let width = config.playfield.width;
    let height = config.playfield.height;
    let window = video_subsystem
        .window(WINDOW_TITLE, width, height)
        .position_centered()
        .build()
        .map_err(|e| e.to_string())?;

    // Vsync ties the frame schedule to the display refresh
    let mut canvas_builder = window.into_canvas();
    if config.display.vsync {
        canvas_builder = canvas_builder.present_vsync();
    }
    let mut canvas = canvas_builder.build().map_err(|e| e.to_string())?;
    canvas
        .set_logical_size(width, height)
        .map_err(|e| e.to_string())?;

    let texture_creator = canvas.texture_creator();
    let mut event_pump = sdl_context.event_pump()?;
    let input = InputSystem::new(bindings);
    let mut game: GameController<Texture> = GameController::new(&config);

    DrawSurface::<Texture>::clear(&mut canvas)?;

    // A missing sprite isn't fatal; the character just never gets drawn
    match texture_creator.load_texture(&config.display.sprite_path) {
        Ok(texture) => game.on_sprite_loaded(&mut canvas, texture)?,
        Err(e) => log::warn!(
            "Failed to load sprite {}: {}",
            config.display.sprite_path,
            e
        ),
    }
    canvas.present();

    log::info!("Dino Runner ready ({}x{})", width, height);
    log::info!(
        "Controls: {:?} start, {:?} jump, {:?} quit",
        bindings.start,
        bindings.jump,
        bindings.quit
    );

    let mut last_update = Instant::now();

    'running: loop {
        for action in input.poll_events(&mut event_pump) {
            if !game.handle_action(action) {
                break 'running;
            }
        }

        let now = Instant::now();
        game.advance_time(now - last_update);
        last_update = now;

        if game.frame_scheduled() {
            game.run_frame(&mut canvas)?;
            canvas.present();
            if !config.display.vsync {
                std::thread::sleep(IDLE_WAIT);
            }
        } else {
            std::thread::sleep(IDLE_WAIT);
        }
    }

    log::info!("Exiting (last run lasted {} frames)", game.frames_survived());
    game.shutdown();
    Ok(())
}
