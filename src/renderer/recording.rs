//! Surface that records draw calls instead of rasterizing them

use glam::Vec2;

use super::image::Image;
use super::surface::{Color, Display, Rect, Surface};

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum DrawOp {
    Fill { rect: Rect, color: Color },
    Blit { dest: Rect, size: Vec2 },
    Text { text: String, area: Rect },
}

pub(crate) struct RecordingSurface {
    pub size: Vec2,
    pub ops: Vec<DrawOp>,
    pub presented: u32,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            ops: Vec::new(),
            presented: 0,
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn blits(&self) -> Vec<(Rect, Vec2)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Blit { dest, size } => Some((*dest, *size)),
                _ => None,
            })
            .collect()
    }

    pub fn fills(&self) -> Vec<(Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Fill { rect, color } => Some((*rect, *color)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::Fill { rect, color });
    }

    fn blit(&mut self, image: &Image, dest: Rect) -> Rect {
        self.ops.push(DrawOp::Blit {
            dest,
            size: image.size(),
        });
        Rect::new(dest.x, dest.y, image.size().x, image.size().y)
    }

    fn draw_text(&mut self, text: &str, area: Rect, _color: Color) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            area,
        });
    }
}

impl Display for RecordingSurface {
    fn present(&mut self) {
        self.presented += 1;
    }
}
