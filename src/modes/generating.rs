//! "Generating Town..." screen
//!
//! The only time-driven transition: once the accumulated frame time reaches the
//! configured duration, the decision screen is requested exactly once.

use super::widgets::ProgressBar;
use super::{Mode, ModeContext, ModeId, Signals};
use crate::platform::InputEvent;
use crate::renderer::{Color, Rect, Surface};

const BACKGROUND: Color = Color::rgb(74, 99, 99);
const LABEL: &str = "Generating Town...";

pub struct GeneratingTownMode {
    elapsed: f32,
    duration: f32,
    posted: bool,
    label_rect: Rect,
    progress_bar: ProgressBar,
}

impl GeneratingTownMode {
    pub fn new(ctx: &ModeContext) -> Self {
        let screen = ctx.screen_size();
        let center_y = (screen.y / 2.0).floor();
        Self {
            elapsed: 0.0,
            duration: ctx.settings.generation_seconds,
            posted: false,
            label_rect: Rect::new(0.0, center_y - 32.0, screen.x, 32.0),
            progress_bar: ProgressBar::new(Rect::new(20.0, center_y, screen.x - 40.0, 32.0)),
        }
    }

    /// Seconds accumulated so far
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Progress in percent, 0-100
    pub fn progress(&self) -> f32 {
        self.progress_bar.progress()
    }
}

impl Mode for GeneratingTownMode {
    fn id(&self) -> ModeId {
        ModeId::GeneratingTown
    }

    fn background(&self) -> Color {
        BACKGROUND
    }

    fn tick(&mut self, elapsed: f32, signals: &mut Signals) {
        self.elapsed += elapsed.max(0.0);
        let percent = if self.duration > 0.0 {
            100.0 * self.elapsed / self.duration
        } else {
            100.0
        };
        self.progress_bar.set_progress(percent);

        if !self.posted && self.elapsed >= self.duration {
            log::info!("Town generated after {:.2}s", self.elapsed);
            self.posted = true;
            signals.post_transition(ModeId::Decision);
        }
    }

    fn handle_event(&mut self, _event: &InputEvent, _signals: &mut Signals) {}

    fn render(&self, surface: &mut dyn Surface) {
        surface.draw_text(LABEL, self.label_rect, Color::WHITE);
        self.progress_bar.render(surface);
    }
}
