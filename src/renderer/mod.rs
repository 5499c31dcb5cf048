//! Rendering
//!
//! Modes draw through the [`Surface`] trait. [`PixmapSurface`] is the software
//! implementation used by the native binary.

pub mod cards;
pub mod image;
pub mod pixmap_surface;
pub mod surface;

#[cfg(test)]
pub(crate) mod recording;

pub use cards::CardCollection;
pub use image::Image;
pub use pixmap_surface::PixmapSurface;
pub use surface::{Color, Display, Rect, Surface};
