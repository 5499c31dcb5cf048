//! Pointer input events and their sources

use std::collections::VecDeque;

use glam::Vec2;

/// Which pointer button an event refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
    Other(u8),
}

/// A raw input event from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    PointerDown { pos: Vec2, button: PointerButton },
    PointerMove { pos: Vec2 },
    PointerUp { pos: Vec2, button: PointerButton },
    /// Window closed or the host asked the game to stop
    Quit,
}

impl InputEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self::PointerDown {
            pos: Vec2::new(x, y),
            button: PointerButton::Primary,
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::PointerMove { pos: Vec2::new(x, y) }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::PointerUp {
            pos: Vec2::new(x, y),
            button: PointerButton::Primary,
        }
    }
}

/// Supplies the events that arrived since the previous frame
pub trait EventSource {
    fn drain(&mut self) -> Vec<InputEvent>;
}

/// Replays a fixed list of events, each at a given frame number.
///
/// Drives the headless binary and tests where no window exists.
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    script: VecDeque<(u64, InputEvent)>,
    frame: u64,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `event` for `frame`. Frames must be added in non-decreasing order.
    pub fn at(mut self, frame: u64, event: InputEvent) -> Self {
        debug_assert!(self.script.back().is_none_or(|(f, _)| *f <= frame));
        self.script.push_back((frame, event));
        self
    }

    pub fn is_finished(&self) -> bool {
        self.script.is_empty()
    }
}

impl EventSource for ScriptedInput {
    fn drain(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();
        while let Some((frame, _)) = self.script.front() {
            if *frame > self.frame {
                break;
            }
            if let Some((_, event)) = self.script.pop_front() {
                events.push(event);
            }
        }
        self.frame += 1;
        events
    }
}
