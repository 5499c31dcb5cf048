//! Software surface backed by a tiny-skia pixmap
//!
//! Used for headless runs. Glyph rendering belongs to a windowing backend, so
//! text requests are accepted and skipped here.

use glam::Vec2;
use tiny_skia::{Paint, Pixmap, PixmapPaint, Rect as SkiaRect, Transform};

use super::image::Image;
use super::surface::{Color, Display, Rect, Surface};
use crate::error::GameError;

/// An in-memory framebuffer
pub struct PixmapSurface {
    frame: Pixmap,
    frames_presented: u64,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, GameError> {
        let frame = Pixmap::new(width, height).ok_or(GameError::Surface { width, height })?;
        Ok(Self {
            frame,
            frames_presented: 0,
        })
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn frame(&self) -> &Pixmap {
        &self.frame
    }
}

impl Surface for PixmapSurface {
    fn size(&self) -> Vec2 {
        Vec2::new(self.frame.width() as f32, self.frame.height() as f32)
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(rect) = SkiaRect::from_xywh(rect.x, rect.y, rect.w, rect.h) else {
            return;
        };
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = false;
        self.frame.fill_rect(rect, &paint, Transform::identity(), None);
    }

    fn blit(&mut self, image: &Image, dest: Rect) -> Rect {
        let (x, y) = (dest.x.round(), dest.y.round());
        self.frame.draw_pixmap(
            x as i32,
            y as i32,
            image.pixmap().as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
        Rect::new(x, y, image.width() as f32, image.height() as f32)
    }

    fn draw_text(&mut self, text: &str, area: Rect, _color: Color) {
        log::trace!("Skipping text {text:?} at {area:?}");
    }
}

impl Display for PixmapSurface {
    fn present(&mut self) {
        self.frames_presented += 1;
    }
}
