//! Screen modes
//!
//! Exactly one [`Mode`] is active at a time. Modes never call each other: they
//! post a [`ModeId`] into [`Signals`] and the game loop swaps modes between
//! frames.

pub mod decision;
pub mod generating;
pub mod main_menu;
pub mod widgets;

pub use decision::DecisionMode;
pub use generating::GeneratingTownMode;
pub use main_menu::MainMenuMode;

use std::collections::HashMap;

use glam::Vec2;

use crate::error::GameError;
use crate::platform::InputEvent;
use crate::renderer::{Color, Image, Surface};
use crate::settings::GameSettings;

/// Background used by modes that do not pick their own
pub const DEFAULT_BACKGROUND: Color = Color::rgb(250, 250, 250);

/// Name of the card background in the image table
pub const CARD_BACKGROUND: &str = "card-bg";

/// Identifies a mode the loop can construct. This is the payload of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeId {
    MainMenu,
    GeneratingTown,
    Decision,
}

impl ModeId {
    /// Construct the mode from the shared context
    pub fn build(self, ctx: &ModeContext) -> Result<Box<dyn Mode>, GameError> {
        let mode: Box<dyn Mode> = match self {
            ModeId::MainMenu => Box::new(MainMenuMode::new(ctx)),
            ModeId::GeneratingTown => Box::new(GeneratingTownMode::new(ctx)),
            ModeId::Decision => Box::new(DecisionMode::new(ctx).map_err(|reason| {
                GameError::MalformedTransition {
                    mode: self,
                    reason: Box::new(reason),
                }
            })?),
        };
        Ok(mode)
    }
}

/// One exclusive full-screen state
pub trait Mode {
    fn id(&self) -> ModeId;

    /// Color the loop clears to before [`Mode::render`]
    fn background(&self) -> Color {
        DEFAULT_BACKGROUND
    }

    /// Advance by `elapsed` seconds
    fn tick(&mut self, elapsed: f32, signals: &mut Signals);

    fn handle_event(&mut self, event: &InputEvent, signals: &mut Signals);

    fn render(&self, surface: &mut dyn Surface);

    /// Called once right before the mode is replaced
    fn exit(&mut self) {}
}

/// Requests a mode makes of the loop during a frame.
///
/// The transition slot holds one value per frame: the first request wins and
/// later ones in the same frame are dropped.
#[derive(Debug, Default, Clone)]
pub struct Signals {
    transition: Option<ModeId>,
    quit: bool,
}

impl Signals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to activate `next` after this frame
    pub fn post_transition(&mut self, next: ModeId) {
        match self.transition {
            Some(pending) => {
                log::warn!("Transition to {next:?} dropped, {pending:?} already pending");
            }
            None => {
                log::debug!("Transition to {next:?} posted");
                self.transition = Some(next);
            }
        }
    }

    /// Ask the loop to stop after this frame
    pub fn request_quit(&mut self) {
        log::info!("Quit requested");
        self.quit = true;
    }

    pub fn pending_transition(&self) -> Option<ModeId> {
        self.transition
    }

    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    pub(crate) fn take_transition(&mut self) -> Option<ModeId> {
        self.transition.take()
    }
}

/// Dependencies handed to a mode when it is constructed
#[derive(Debug, Clone, Default)]
pub struct ModeContext {
    pub settings: GameSettings,
    pub images: HashMap<String, Image>,
}

impl ModeContext {
    pub fn new(settings: GameSettings) -> Self {
        Self {
            settings,
            images: HashMap::new(),
        }
    }

    pub fn screen_size(&self) -> Vec2 {
        self.settings.window_size()
    }

    pub fn insert_image(&mut self, name: impl Into<String>, image: Image) {
        self.images.insert(name.into(), image);
    }

    pub fn image(&self, name: &str) -> Result<&Image, GameError> {
        self.images
            .get(name)
            .ok_or_else(|| GameError::MissingImage(name.to_string()))
    }
}
