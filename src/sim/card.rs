//! Card entity
//!
//! A card is one decision: a prompt the player swipes right to accept or left
//! to reject. The owning mode drives the drag lifecycle; the card itself only
//! moves, springs back and tilts.

use std::fmt;
use std::rc::Rc;

use glam::Vec2;

use super::motion::{spring_return, tilt_angle};
use crate::consts::*;
use crate::renderer::{Image, Rect};

/// What happens when a card is accepted or rejected.
///
/// Game consequences plug in here; the default only logs the decision.
pub trait CardHooks {
    fn on_accept(&mut self, prompt: &str);
    fn on_reject(&mut self, prompt: &str);
}

/// Default hooks: log the decision and do nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct LogHooks;

impl CardHooks for LogHooks {
    fn on_accept(&mut self, prompt: &str) {
        log::info!("Card accepted: {prompt:?}");
    }

    fn on_reject(&mut self, prompt: &str) {
        log::info!("Card rejected: {prompt:?}");
    }
}

/// A draggable decision card
pub struct Card {
    /// Current center point
    pub position: Vec2,
    /// Where the card relaxes to when released
    rest: Vec2,
    dragged: bool,
    /// Degrees, derived from the offset to rest every tick
    tilt: i32,
    /// Spring-return speed (units/second)
    return_speed: f32,
    image: Rc<Image>,
    prompt_text: String,
    accept_label: String,
    reject_label: String,
    hooks: Box<dyn CardHooks>,
}

impl Card {
    /// Create a card resting at `rest`. The image is scaled to the card size.
    pub fn new(image: &Image, rest: Vec2, prompt_text: impl Into<String>) -> Self {
        Self {
            position: rest,
            rest,
            dragged: false,
            tilt: 0,
            return_speed: RETURN_SPEED,
            image: Rc::new(image.scaled(CARD_SIZE as u32, CARD_SIZE as u32)),
            prompt_text: prompt_text.into(),
            accept_label: "yes".to_string(),
            reject_label: "no".to_string(),
            hooks: Box::new(LogHooks),
        }
    }

    pub fn with_labels(mut self, accept: impl Into<String>, reject: impl Into<String>) -> Self {
        self.accept_label = accept.into();
        self.reject_label = reject.into();
        self
    }

    pub fn with_hooks(mut self, hooks: impl CardHooks + 'static) -> Self {
        self.hooks = Box::new(hooks);
        self
    }

    pub fn with_return_speed(mut self, speed: f32) -> Self {
        self.return_speed = speed;
        self
    }

    pub fn rest_position(&self) -> Vec2 {
        self.rest
    }

    pub fn is_dragged(&self) -> bool {
        self.dragged
    }

    pub fn tilt(&self) -> i32 {
        self.tilt
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn prompt_text(&self) -> &str {
        &self.prompt_text
    }

    pub fn accept_label(&self) -> &str {
        &self.accept_label
    }

    pub fn reject_label(&self) -> &str {
        &self.reject_label
    }

    /// Unrotated bounds centered on the current position
    pub fn bounds(&self) -> Rect {
        self.image.rect_centered_at(self.position)
    }

    /// Start dragging if `pointer` is on the card. Returns whether a drag began.
    pub fn begin_drag(&mut self, pointer: Vec2) -> bool {
        let hit = self.bounds().contains(pointer);
        if hit {
            self.dragged = true;
        }
        hit
    }

    /// Translate by the pointer motion since the last sample. No-op unless dragged.
    /// Cards may leave the screen.
    pub fn drag_to(&mut self, delta: Vec2) {
        if self.dragged {
            self.position += delta;
        }
    }

    pub fn end_drag(&mut self) {
        self.dragged = false;
    }

    /// Advance one frame: spring back when released, then recompute the tilt
    pub fn tick(&mut self, elapsed: f32) {
        if !self.dragged {
            self.position = spring_return(self.position, self.rest, elapsed, self.return_speed);
        }
        self.tilt = tilt_angle(self.position, self.rest);
    }

    pub fn on_accept(&mut self) {
        self.hooks.on_accept(&self.prompt_text);
    }

    pub fn on_reject(&mut self) {
        self.hooks.on_reject(&self.prompt_text);
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Card")
            .field("position", &self.position)
            .field("rest", &self.rest)
            .field("dragged", &self.dragged)
            .field("tilt", &self.tilt)
            .field("prompt_text", &self.prompt_text)
            .finish_non_exhaustive()
    }
}
