//! Card simulation
//!
//! Motion and card state only. Nothing here draws; modes own input
//! interpretation and the renderer owns drawing.

pub mod card;
pub mod motion;

pub use card::{Card, CardHooks, LogHooks};
pub use motion::{spring_return, tilt_angle};
