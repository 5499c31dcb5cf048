//! Mode orchestrator
//!
//! Each frame: render the active mode, tick it, feed it the queued input, and
//! only then apply any transition it posted. A mode is never called again
//! after its replacement has been built.

use crate::error::GameError;
use crate::modes::{Mode, ModeContext, ModeId, Signals};
use crate::platform::{EventSource, FrameClock, InputEvent};
use crate::renderer::Display;
use crate::settings::GameSettings;

/// Owns the active mode and the context every mode is built from
pub struct Game {
    ctx: ModeContext,
    mode: Box<dyn Mode>,
    signals: Signals,
    running: bool,
    frames: u64,
}

impl Game {
    /// Build the game with `initial` as the first active mode
    pub fn new(settings: GameSettings, initial: ModeId) -> Result<Self, GameError> {
        let ctx = ModeContext::new(settings);
        let mode = initial.build(&ctx)?;
        Ok(Self::with_mode(ctx, mode))
    }

    /// Start from an already constructed mode
    pub fn with_mode(ctx: ModeContext, mode: Box<dyn Mode>) -> Self {
        log::info!("Activated {:?}", mode.id());
        Self {
            ctx,
            mode,
            signals: Signals::new(),
            running: true,
            frames: 0,
        }
    }

    pub fn context(&self) -> &ModeContext {
        &self.ctx
    }

    /// Images and settings can be filled in before the first mode that needs them
    pub fn context_mut(&mut self) -> &mut ModeContext {
        &mut self.ctx
    }

    pub fn active_mode(&self) -> ModeId {
        self.mode.id()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one frame. `events` are the inputs that arrived since the last frame.
    pub fn frame<D: Display>(
        &mut self,
        elapsed: f32,
        events: impl IntoIterator<Item = InputEvent>,
        display: &mut D,
    ) -> Result<(), GameError> {
        display.clear(self.mode.background());
        self.mode.render(display);
        display.present();

        self.mode.tick(elapsed, &mut self.signals);

        for event in events {
            self.mode.handle_event(&event, &mut self.signals);
            if event == InputEvent::Quit {
                log::info!("Quit event received");
                self.running = false;
            }
        }
        if self.signals.quit_requested() {
            self.running = false;
        }

        self.frames += 1;

        let next = self.signals.take_transition();
        if !self.running {
            return Ok(());
        }
        if let Some(next) = next {
            self.switch_to(next)?;
        }
        Ok(())
    }

    /// Drive frames until a quit request or a fatal transition
    pub fn run<C, E, D>(&mut self, clock: &mut C, events: &mut E, display: &mut D) -> Result<(), GameError>
    where
        C: FrameClock,
        E: EventSource,
        D: Display,
    {
        self.running = true;
        while self.running {
            let elapsed = clock.tick(self.ctx.settings.fps);
            if let Err(err) = self.frame(elapsed, events.drain(), display) {
                self.running = false;
                return Err(err);
            }
        }
        log::info!("Game loop stopped after {} frames", self.frames);
        Ok(())
    }

    fn switch_to(&mut self, next: ModeId) -> Result<(), GameError> {
        let mode = next.build(&self.ctx)?;
        self.mode.exit();
        log::info!("Switching {:?} -> {:?}", self.mode.id(), next);
        self.mode = mode;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::modes::CARD_BACKGROUND;
    use crate::platform::{FixedClock, ScriptedInput};
    use crate::renderer::recording::RecordingSurface;
    use crate::renderer::{Color, Image, Surface};

    const DT: f32 = 1.0 / 60.0;
    const NO_EVENTS: [InputEvent; 0] = [];

    type CallLog = Rc<RefCell<Vec<&'static str>>>;

    /// Mode that logs every call and asks for the main menu on its first tick
    struct ProbeMode {
        calls: CallLog,
    }

    impl Mode for ProbeMode {
        fn id(&self) -> ModeId {
            ModeId::GeneratingTown
        }

        fn tick(&mut self, _elapsed: f32, signals: &mut Signals) {
            self.calls.borrow_mut().push("tick");
            signals.post_transition(ModeId::MainMenu);
        }

        fn handle_event(&mut self, _event: &InputEvent, _signals: &mut Signals) {
            self.calls.borrow_mut().push("event");
        }

        fn render(&self, _surface: &mut dyn Surface) {
            self.calls.borrow_mut().push("render");
        }

        fn exit(&mut self) {
            self.calls.borrow_mut().push("exit");
        }
    }

    fn game_with_card(initial: ModeId) -> Game {
        let mut game = Game::new(GameSettings::default(), initial).unwrap();
        game.context_mut()
            .insert_image(CARD_BACKGROUND, Image::solid(8, 8, Color::WHITE).unwrap());
        game
    }

    #[test]
    fn test_swap_happens_after_event_drain() {
        let calls = CallLog::default();
        let probe = ProbeMode { calls: calls.clone() };
        let mut game = Game::with_mode(ModeContext::default(), Box::new(probe));
        let mut surface = RecordingSurface::new(480.0, 720.0);

        game.frame(DT, [InputEvent::moved(1.0, 1.0)], &mut surface).unwrap();
        assert_eq!(game.active_mode(), ModeId::MainMenu);

        // Later frames never reach the replaced mode
        game.frame(DT, [InputEvent::moved(2.0, 2.0)], &mut surface).unwrap();
        game.frame(DT, NO_EVENTS, &mut surface).unwrap();
        assert_eq!(*calls.borrow(), vec!["render", "tick", "event", "exit"]);
    }

    #[test]
    fn test_menu_to_generating_to_decision() {
        let mut game = game_with_card(ModeId::MainMenu);
        let mut surface = RecordingSurface::new(480.0, 720.0);

        game.frame(DT, [InputEvent::down(240.0, 392.0), InputEvent::up(240.0, 392.0)], &mut surface)
            .unwrap();
        assert_eq!(game.active_mode(), ModeId::GeneratingTown);

        game.frame(5.0, NO_EVENTS, &mut surface).unwrap();
        assert_eq!(game.active_mode(), ModeId::GeneratingTown);
        game.frame(5.0, NO_EVENTS, &mut surface).unwrap();
        assert_eq!(game.active_mode(), ModeId::Decision);
        assert_eq!(surface.presented, 3);
    }

    #[test]
    fn test_frame_clears_to_mode_background() {
        let mut game = game_with_card(ModeId::GeneratingTown);
        let mut surface = RecordingSurface::new(480.0, 720.0);
        game.frame(DT, NO_EVENTS, &mut surface).unwrap();
        assert_eq!(
            surface.fills()[0],
            (crate::renderer::Rect::new(0.0, 0.0, 480.0, 720.0), Color::rgb(74, 99, 99))
        );
    }

    #[test]
    fn test_quit_event_stops_loop() {
        let mut game = game_with_card(ModeId::MainMenu);
        let mut surface = RecordingSurface::new(480.0, 720.0);
        game.frame(DT, [InputEvent::Quit], &mut surface).unwrap();
        assert!(!game.is_running());
    }

    #[test]
    fn test_missing_image_is_fatal_on_transition() {
        let mut game = Game::new(GameSettings::default(), ModeId::GeneratingTown).unwrap();
        let mut surface = RecordingSurface::new(480.0, 720.0);
        let err = game.frame(10.0, NO_EVENTS, &mut surface).unwrap_err();
        assert!(matches!(err, GameError::MalformedTransition { mode: ModeId::Decision, .. }));
        assert_eq!(game.active_mode(), ModeId::GeneratingTown);
    }

    #[test]
    fn test_run_scripted_session() {
        let mut game = game_with_card(ModeId::MainMenu);
        let mut clock = FixedClock::new(0.5);
        let mut input = ScriptedInput::new()
            .at(1, InputEvent::down(240.0, 392.0))
            .at(1, InputEvent::up(240.0, 392.0))
            // 20 frames of 0.5s finish generating
            .at(25, InputEvent::down(240.0, 410.0))
            .at(25, InputEvent::moved(400.0, 410.0))
            .at(26, InputEvent::up(400.0, 410.0))
            .at(30, InputEvent::Quit);
        let mut surface = RecordingSurface::new(480.0, 720.0);

        game.run(&mut clock, &mut input, &mut surface).unwrap();
        assert_eq!(game.frames(), 31);
        assert_eq!(game.active_mode(), ModeId::Decision);
        assert!(input.is_finished());
    }

    #[test]
    fn test_exit_button_quits_run() {
        let mut game = game_with_card(ModeId::MainMenu);
        let mut input = ScriptedInput::new()
            .at(0, InputEvent::down(240.0, 470.0))
            .at(0, InputEvent::up(240.0, 470.0));
        let mut surface = RecordingSurface::new(480.0, 720.0);

        game.run(&mut FixedClock::new(DT), &mut input, &mut surface).unwrap();
        assert_eq!(game.frames(), 1);
        assert_eq!(game.active_mode(), ModeId::MainMenu);
    }
}
