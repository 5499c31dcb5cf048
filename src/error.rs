//! Error types
//!
//! Pointer-down outside a card is not an error (it is ignored), and the motion
//! model is total, so everything here is either configuration or construction.

use std::path::PathBuf;

use crate::modes::ModeId;

/// Errors surfaced by the game loop and its collaborators
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// A transition named a mode that could not be built from the context.
    /// This is a programming error, and the loop stops on it.
    #[error("cannot activate mode {mode:?}: {reason}")]
    MalformedTransition {
        mode: ModeId,
        #[source]
        reason: Box<GameError>,
    },

    #[error("image \"{0}\" is not loaded")]
    MissingImage(String),

    #[error("failed to read settings from {path}")]
    SettingsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in {path}")]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to allocate a {width}x{height} surface")]
    Surface { width: u32, height: u32 },
}
