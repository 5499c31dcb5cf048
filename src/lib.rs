//! Swipe Deck - a card decision prototype
//!
//! Core modules:
//! - `sim`: Card physics (spring return, tilt) and the card entity
//! - `renderer`: Drawable surface abstraction, images, card collection drawing
//! - `modes`: Screen modes and the transition signal they post
//! - `game`: Frame loop that drives the active mode and swaps modes between frames
//! - `platform`: Frame clock and input event sources
//! - `settings`: Data-driven configuration

pub mod error;
pub mod game;
pub mod modes;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::GameError;
pub use game::Game;
pub use settings::GameSettings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Default window dimensions
    pub const WINDOW_WIDTH: u32 = 480;
    pub const WINDOW_HEIGHT: u32 = 720;
    /// Target frame rate of the loop
    pub const FPS: u32 = 60;

    /// Largest tilt a card can show, in degrees
    pub const MAX_TILT: f32 = 15.0;
    /// Distance from rest at which the tilt reaches MAX_TILT
    pub const TILT_FULL_DISTANCE: f32 = 50.0;
    /// Below this distance a released card snaps onto its rest position
    pub const SNAP_EPSILON: f32 = 3.0;
    /// Spring-return speed (units/second)
    pub const RETURN_SPEED: f32 = 600.0;

    /// Cards are square
    pub const CARD_SIZE: f32 = 380.0;
    /// Rest position sits this far below the screen center
    pub const REST_OFFSET_Y: f32 = 50.0;
    /// Width of the accept/reject bands at the screen edges
    pub const THRESHOLD_WIDTH: f32 = 125.0;

    /// How long the town "generates" before the decision screen opens (seconds)
    pub const GENERATION_SECONDS: f32 = 10.0;
}

/// Sign of a value as -1, 0 or +1
#[inline]
pub fn sign(value: f32) -> f32 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Default rest position for a card on a screen of the given size
#[inline]
pub fn rest_position(screen: Vec2) -> Vec2 {
    Vec2::new(
        (screen.x / 2.0).floor(),
        (screen.y / 2.0).floor() + consts::REST_OFFSET_Y,
    )
}
