//! Drawable surface abstraction
//!
//! Modes draw through [`Surface`] so the same code runs against a window
//! backend, the software [`PixmapSurface`](super::PixmapSurface) or a recorder
//! in tests.

use glam::Vec2;

use super::image::Image;

/// Axis-aligned rectangle in screen space (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self::new(center.x - size.x / 2.0, center.y - size.y / 2.0, size.x, size.y)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    /// Half-open containment: left/top edges are inside, right/bottom are not
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub(crate) fn to_skia(self) -> tiny_skia::Color {
        tiny_skia::Color::from_rgba8(self.r, self.g, self.b, self.a)
    }
}

/// Something frames are drawn onto
pub trait Surface {
    /// Current size in pixels
    fn size(&self) -> Vec2;

    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Draw `image` with its top-left corner at `dest`. Returns the region touched.
    fn blit(&mut self, image: &Image, dest: Rect) -> Rect;

    /// Draw word-wrapped text inside `area`
    fn draw_text(&mut self, text: &str, area: Rect, color: Color);

    /// Fill the whole surface
    fn clear(&mut self, color: Color) {
        let size = self.size();
        self.fill_rect(Rect::new(0.0, 0.0, size.x, size.y), color);
    }
}

/// A surface whose frames are shown to the player
pub trait Display: Surface {
    /// Make the frame drawn so far visible
    fn present(&mut self);
}
