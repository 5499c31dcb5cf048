//! Minimal widgets for the menu screens

use glam::Vec2;

use crate::platform::{InputEvent, PointerButton};
use crate::renderer::{Color, Rect, Surface};

const BUTTON_FILL: Color = Color::rgb(69, 73, 78);
const BUTTON_PRESSED: Color = Color::rgb(43, 46, 49);
const BAR_TRACK: Color = Color::rgb(35, 48, 48);
const BAR_FILL: Color = Color::rgb(0, 180, 90);

/// A push button that fires on release over the button it was pressed on
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pressed: bool,
}

impl Button {
    pub fn new(rect: Rect, label: impl Into<String>) -> Self {
        Self {
            rect,
            label: label.into(),
            pressed: false,
        }
    }

    /// Feed an event; returns true when the button was clicked
    pub fn handle_event(&mut self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown {
                pos,
                button: PointerButton::Primary,
            } => {
                self.pressed = self.rect.contains(pos);
                false
            }
            InputEvent::PointerUp { pos, .. } => {
                let clicked = self.pressed && self.rect.contains(pos);
                self.pressed = false;
                clicked
            }
            _ => false,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        let fill = if self.pressed { BUTTON_PRESSED } else { BUTTON_FILL };
        surface.fill_rect(self.rect, fill);
        surface.draw_text(&self.label, self.rect, Color::WHITE);
    }
}

/// Horizontal progress bar, 0-100
#[derive(Debug, Clone)]
pub struct ProgressBar {
    pub rect: Rect,
    progress: f32,
}

impl ProgressBar {
    pub fn new(rect: Rect) -> Self {
        Self { rect, progress: 0.0 }
    }

    pub fn set_progress(&mut self, percent: f32) {
        self.progress = percent.clamp(0.0, 100.0);
    }

    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        surface.fill_rect(self.rect, BAR_TRACK);
        let filled = Vec2::new(self.rect.w * self.progress / 100.0, self.rect.h);
        if filled.x > 0.0 {
            surface.fill_rect(Rect::new(self.rect.x, self.rect.y, filled.x, filled.y), BAR_FILL);
        }
        surface.draw_text(&format!("{:.0}%", self.progress), self.rect, Color::WHITE);
    }
}
