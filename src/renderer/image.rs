//! Decoded images and the transforms cards need
//!
//! Loading from disk is the platform's job; images here are built in memory
//! or handed over as a [`Pixmap`].

use std::fmt;

use glam::Vec2;
use tiny_skia::{FilterQuality, Paint, Pixmap, PixmapPaint, Rect as SkiaRect, Transform};

use super::surface::{Color, Rect};
use crate::error::GameError;

/// An RGBA image
#[derive(Clone)]
pub struct Image {
    pixmap: Pixmap,
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

impl Image {
    pub fn from_pixmap(pixmap: Pixmap) -> Self {
        Self { pixmap }
    }

    /// A single-color image
    pub fn solid(width: u32, height: u32, color: Color) -> Result<Self, GameError> {
        let mut pixmap = Pixmap::new(width, height).ok_or(GameError::Surface { width, height })?;
        pixmap.fill(color.to_skia());
        Ok(Self { pixmap })
    }

    /// Plain card face: light grey with a darker frame
    pub fn card_face(width: u32, height: u32) -> Result<Self, GameError> {
        let mut image = Self::solid(width, height, Color::rgb(120, 104, 86))?;
        let border = (width.min(height) as f32 * 0.04).max(1.0);
        if let Some(inner) = SkiaRect::from_xywh(
            border,
            border,
            width as f32 - border * 2.0,
            height as f32 - border * 2.0,
        ) {
            let mut paint = Paint::default();
            paint.set_color(Color::rgb(173, 173, 173).to_skia());
            image.pixmap.fill_rect(inner, &paint, Transform::identity(), None);
        }
        Ok(image)
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width() as f32, self.height() as f32)
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Rectangle of this image's size centered on `center`
    pub fn rect_centered_at(&self, center: Vec2) -> Rect {
        Rect::from_center(center, self.size())
    }

    /// Resample to `width` x `height`
    pub fn scaled(&self, width: u32, height: u32) -> Image {
        if width == self.width() && height == self.height() {
            return self.clone();
        }
        let Some(mut out) = Pixmap::new(width.max(1), height.max(1)) else {
            return self.clone();
        };
        let transform = Transform::from_scale(
            out.width() as f32 / self.width() as f32,
            out.height() as f32 / self.height() as f32,
        );
        out.draw_pixmap(0, 0, self.pixmap.as_ref(), &smooth_paint(), transform, None);
        Image { pixmap: out }
    }

    /// Rotate counter-clockwise by `degrees` about the image center.
    ///
    /// The result is sized to the rotated bounding box, so centering it where
    /// the source image was centered keeps the perceived center in place.
    pub fn rotated(&self, degrees: f32) -> Image {
        if degrees == 0.0 {
            return self.clone();
        }
        let (w, h) = (self.width() as f32, self.height() as f32);
        let (sin, cos) = degrees.to_radians().sin_cos();
        let out_w = (w * cos.abs() + h * sin.abs()).ceil() as u32;
        let out_h = (w * sin.abs() + h * cos.abs()).ceil() as u32;
        let Some(mut out) = Pixmap::new(out_w.max(1), out_h.max(1)) else {
            return self.clone();
        };

        // Screen y points down, so a counter-clockwise turn is a negative skia angle
        let transform = Transform::from_translate(out.width() as f32 / 2.0, out.height() as f32 / 2.0)
            .pre_concat(Transform::from_rotate(-degrees))
            .pre_concat(Transform::from_translate(-w / 2.0, -h / 2.0));
        out.draw_pixmap(0, 0, self.pixmap.as_ref(), &smooth_paint(), transform, None);
        Image { pixmap: out }
    }
}

fn smooth_paint() -> PixmapPaint {
    PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    }
}
