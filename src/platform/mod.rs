//! Platform abstraction layer
//!
//! Handles the host-specific edges of the loop:
//! - Time/ticks (frame limiter)
//! - Input events

pub mod input;
pub mod time;

pub use input::{EventSource, InputEvent, PointerButton, ScriptedInput};
pub use time::{FixedClock, FrameClock, FrameLimiter};
