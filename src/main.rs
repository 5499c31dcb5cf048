//! Swipe Deck entry point
//!
//! Runs a scripted headless session on the software surface: open the menu,
//! press Play, wait out town generation, then swipe the card right.

use std::error::Error;
use std::process::ExitCode;

use glam::Vec2;
use swipe_deck::consts::CARD_SIZE;
use swipe_deck::modes::{CARD_BACKGROUND, ModeId};
use swipe_deck::platform::{FrameLimiter, InputEvent, ScriptedInput};
use swipe_deck::renderer::{Image, PixmapSurface};
use swipe_deck::{Game, GameError, GameSettings};

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Swipe Deck (native) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            let mut source = err.source();
            while let Some(cause) = source {
                log::error!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), GameError> {
    let settings = match std::env::args().nth(1) {
        Some(path) => GameSettings::load(path)?,
        None => {
            log::info!("Using default settings");
            GameSettings::default()
        }
    };

    let mut display = PixmapSurface::new(settings.window_width, settings.window_height)?;
    let mut input = demo_script(&settings);
    let mut game = Game::new(settings, ModeId::MainMenu)?;

    let card = Image::card_face(CARD_SIZE as u32, CARD_SIZE as u32)?;
    game.context_mut().insert_image(CARD_BACKGROUND, card);

    game.run(&mut FrameLimiter::new(), &mut input, &mut display)?;
    log::info!("Presented {} frames", display.frames_presented());
    Ok(())
}

/// Click Play, then swipe right once the decision screen is up
fn demo_script(settings: &GameSettings) -> ScriptedInput {
    let fps = settings.fps.max(1) as u64;
    let w = settings.window_width as f32;
    let h = settings.window_height as f32;
    let play = (w / 2.0, (h / 2.0).floor() + 32.0);
    let card = swipe_deck::rest_position(Vec2::new(w, h));

    // Generation ends after `generation_seconds`; leave a second of slack
    let swipe_at = fps * (settings.generation_seconds.ceil() as u64 + 2);
    ScriptedInput::new()
        .at(fps / 2, InputEvent::down(play.0, play.1))
        .at(fps / 2, InputEvent::up(play.0, play.1))
        .at(swipe_at, InputEvent::down(card.x, card.y))
        .at(swipe_at + 1, InputEvent::moved(card.x + 60.0, card.y))
        .at(swipe_at + 2, InputEvent::moved(card.x + 130.0, card.y))
        .at(swipe_at + 3, InputEvent::up(card.x + 130.0, card.y))
        .at(swipe_at + fps, InputEvent::Quit)
}
