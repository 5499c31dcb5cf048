//! Main menu: Play or Exit

use super::widgets::Button;
use super::{Mode, ModeContext, ModeId, Signals};
use crate::platform::InputEvent;
use crate::renderer::{Color, Rect, Surface};

const BACKGROUND: Color = Color::rgb(224, 197, 123);
const BUTTON_HEIGHT: f32 = 64.0;
const BUTTON_GAP: f32 = 12.0;
const SIDE_MARGIN: f32 = 60.0;

pub struct MainMenuMode {
    play: Button,
    exit: Button,
}

impl MainMenuMode {
    pub fn new(ctx: &ModeContext) -> Self {
        let screen = ctx.screen_size();
        let center_y = (screen.y / 2.0).floor();
        let width = screen.x - SIDE_MARGIN * 2.0;
        Self {
            play: Button::new(Rect::new(SIDE_MARGIN, center_y, width, BUTTON_HEIGHT), "Play"),
            exit: Button::new(
                Rect::new(SIDE_MARGIN, center_y + BUTTON_HEIGHT + BUTTON_GAP, width, BUTTON_HEIGHT),
                "Exit",
            ),
        }
    }

    pub fn play_button(&self) -> &Button {
        &self.play
    }

    pub fn exit_button(&self) -> &Button {
        &self.exit
    }
}

impl Mode for MainMenuMode {
    fn id(&self) -> ModeId {
        ModeId::MainMenu
    }

    fn background(&self) -> Color {
        BACKGROUND
    }

    fn tick(&mut self, _elapsed: f32, _signals: &mut Signals) {}

    fn handle_event(&mut self, event: &InputEvent, signals: &mut Signals) {
        if self.play.handle_event(event) {
            signals.post_transition(ModeId::GeneratingTown);
        }
        if self.exit.handle_event(event) {
            signals.request_quit();
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.play.render(surface);
        self.exit.render(surface);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::GameSettings;

    fn menu() -> MainMenuMode {
        MainMenuMode::new(&ModeContext::new(GameSettings::default()))
    }

    fn click(mode: &mut MainMenuMode, signals: &mut Signals, x: f32, y: f32) {
        mode.handle_event(&InputEvent::down(x, y), signals);
        mode.handle_event(&InputEvent::up(x, y), signals);
    }

    #[test]
    fn test_layout_matches_window() {
        let menu = menu();
        assert_eq!(menu.play_button().rect, Rect::new(60.0, 360.0, 360.0, 64.0));
        assert_eq!(menu.exit_button().rect.y, 436.0);
    }

    #[test]
    fn test_play_posts_generating_transition() {
        let mut menu = menu();
        let mut signals = Signals::new();
        click(&mut menu, &mut signals, 240.0, 392.0);
        assert_eq!(signals.pending_transition(), Some(ModeId::GeneratingTown));
        assert!(!signals.quit_requested());
    }

    #[test]
    fn test_exit_requests_quit() {
        let mut menu = menu();
        let mut signals = Signals::new();
        click(&mut menu, &mut signals, 240.0, 470.0);
        assert!(signals.quit_requested());
        assert_eq!(signals.pending_transition(), None);
    }

    #[test]
    fn test_click_on_background_does_nothing() {
        let mut menu = menu();
        let mut signals = Signals::new();
        click(&mut menu, &mut signals, 10.0, 10.0);
        assert_eq!(signals.pending_transition(), None);
        assert!(!signals.quit_requested());
    }
}
