//! Card collection: the ordered stack of cards on screen

use super::surface::{Rect, Surface};
use crate::sim::Card;

/// Cards in draw order; later cards are drawn on top
#[derive(Debug, Default)]
pub struct CardCollection {
    cards: Vec<Card>,
}

impl CardCollection {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The card drawn last, which is the one the player can grab
    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut Card> {
        self.cards.last_mut()
    }

    /// Advance every card by one frame
    pub fn tick(&mut self, elapsed: f32) {
        for card in &mut self.cards {
            card.tick(elapsed);
        }
    }

    /// Draw all cards and return the regions touched.
    ///
    /// Tilted cards are drawn from a rotated copy centered on the card position,
    /// so the card pivots around its own center.
    pub fn draw(&self, surface: &mut dyn Surface) -> Vec<Rect> {
        let mut touched = Vec::with_capacity(self.cards.len());
        for card in &self.cards {
            let image = card.image();
            let rect = if card.tilt() == 0 {
                surface.blit(image, image.rect_centered_at(card.position))
            } else {
                let rotated = image.rotated(card.tilt() as f32);
                surface.blit(&rotated, rotated.rect_centered_at(card.position))
            };
            touched.push(rect);
        }
        touched
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::recording::RecordingSurface;
    use crate::renderer::{Color, Image};
    use glam::Vec2;

    fn card_at(offset: Vec2) -> Card {
        let image = Image::solid(8, 8, Color::WHITE).unwrap();
        let mut card = Card::new(&image, Vec2::new(240.0, 410.0), "prompt");
        card.begin_drag(card.position);
        card.drag_to(offset);
        card.tick(0.0);
        card
    }

    #[test]
    fn test_untilted_card_blits_at_bounds() {
        let mut cards = CardCollection::new();
        cards.push(card_at(Vec2::ZERO));
        let mut surface = RecordingSurface::new(480.0, 720.0);

        let touched = cards.draw(&mut surface);
        assert_eq!(touched, vec![Rect::new(50.0, 220.0, 380.0, 380.0)]);
        assert_eq!(surface.blits()[0].1, Vec2::splat(380.0));
    }

    #[test]
    fn test_tilted_card_stays_centered() {
        let mut cards = CardCollection::new();
        cards.push(card_at(Vec2::new(120.0, 0.0)));
        let mut surface = RecordingSurface::new(480.0, 720.0);

        cards.draw(&mut surface);
        let (dest, size) = surface.blits()[0];
        assert!(size.x > 380.0);
        let center = Rect::new(dest.x, dest.y, size.x, size.y).center();
        assert!((center - Vec2::new(360.0, 410.0)).length() < 0.001);
    }

    #[test]
    fn test_draw_order_follows_list_order() {
        let mut cards = CardCollection::new();
        cards.push(card_at(Vec2::new(0.0, -10.0)));
        cards.push(card_at(Vec2::new(0.0, 10.0)));
        let mut surface = RecordingSurface::new(480.0, 720.0);

        let touched = cards.draw(&mut surface);
        assert_eq!(touched.len(), 2);
        assert!(touched[0].y < touched[1].y);
        assert_eq!(cards.top().map(|c| c.position.y), Some(420.0));
    }
}
