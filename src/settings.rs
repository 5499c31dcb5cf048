//! Game settings
//!
//! Read once at startup from an optional JSON file. Every field has a default,
//! so a partial file only overrides what it names.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Window, loop and tuning settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    // === Window ===
    pub window_width: u32,
    pub window_height: u32,
    pub title: String,

    // === Loop ===
    /// Target frames per second
    pub fps: u32,

    // === Tuning ===
    /// Width of the accept/reject bands at the screen edges
    pub threshold_width: f32,
    /// Spring-return speed of a released card (units/second)
    pub return_speed: f32,
    /// Seconds the generating screen stays up
    pub generation_seconds: f32,

    // === Debug ===
    /// Draw the swipe threshold bands
    pub show_debug: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            title: "Swipe Deck".to_string(),

            fps: FPS,

            threshold_width: THRESHOLD_WIDTH,
            return_speed: RETURN_SPEED,
            generation_seconds: GENERATION_SECONDS,

            show_debug: false,
        }
    }
}

impl GameSettings {
    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GameError::SettingsRead {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| GameError::Settings {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Window size as a vector
    pub fn window_size(&self) -> Vec2 {
        Vec2::new(self.window_width as f32, self.window_height as f32)
    }
}
