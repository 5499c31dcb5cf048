//! Decision screen: drag the card right to accept, left to reject
//!
//! Drag lifecycle is `Idle -> Dragging -> Idle`. Releasing with the card center
//! past the right threshold accepts, past the left threshold rejects; anything
//! in between lets the card spring back.

use glam::Vec2;

use super::{CARD_BACKGROUND, Mode, ModeContext, ModeId, Signals};
use crate::error::GameError;
use crate::platform::{InputEvent, PointerButton};
use crate::renderer::{CardCollection, Color, Rect, Surface};
use crate::sim::{Card, CardHooks, LogHooks};

const BACKGROUND: Color = Color::rgb(224, 197, 123);
const BAR_COLOR: Color = Color::rgb(54, 26, 19);
const DEBUG_BAND: Color = Color::rgba(0, 255, 0, 20);
const TOP_BAR_HEIGHT: f32 = 120.0;
const BOTTOM_BAR_HEIGHT: f32 = 100.0;
const LABEL_BOX_Y: f32 = 200.0;
const LABEL_BOX_HEIGHT: f32 = 32.0;
const LINE_HEIGHT: f32 = 32.0;

const PROMPT: &str = "Will you help me eliminate the enemy? Or will you die at my feet?";
const CHARACTER_LINE: &str = "Character Name (Age: #)";
const DATE_LINE: &str = "February 10, 2023";

/// Where the player's pointer is in the drag lifecycle
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    Idle,
    /// Holding the top card; `anchor` is the last sampled pointer position
    Dragging { anchor: Vec2 },
}

/// Outcome of releasing a card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

pub struct DecisionMode {
    cards: CardCollection,
    drag: DragState,
    hovering_left: bool,
    hovering_right: bool,
    left_threshold: f32,
    right_threshold: f32,
    screen: Vec2,
    show_debug: bool,
}

impl DecisionMode {
    pub fn new(ctx: &ModeContext) -> Result<Self, GameError> {
        Self::with_hooks(ctx, LogHooks)
    }

    /// Build the screen with custom accept/reject hooks on its card
    pub fn with_hooks(ctx: &ModeContext, hooks: impl CardHooks + 'static) -> Result<Self, GameError> {
        let screen = ctx.screen_size();
        let settings = &ctx.settings;
        let card = Card::new(ctx.image(CARD_BACKGROUND)?, crate::rest_position(screen), PROMPT)
            .with_return_speed(settings.return_speed)
            .with_hooks(hooks);

        let mut cards = CardCollection::new();
        cards.push(card);

        Ok(Self {
            cards,
            drag: DragState::Idle,
            hovering_left: false,
            hovering_right: false,
            left_threshold: settings.threshold_width,
            right_threshold: screen.x - settings.threshold_width,
            screen,
            show_debug: settings.show_debug,
        })
    }

    pub fn card(&self) -> Option<&Card> {
        self.cards.top()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn hovering_left(&self) -> bool {
        self.hovering_left
    }

    pub fn hovering_right(&self) -> bool {
        self.hovering_right
    }

    pub fn thresholds(&self) -> (f32, f32) {
        (self.left_threshold, self.right_threshold)
    }

    fn pointer_down(&mut self, pos: Vec2) {
        let Some(card) = self.cards.top_mut() else {
            return;
        };
        if card.begin_drag(pos) {
            self.drag = DragState::Dragging { anchor: pos };
        }
    }

    fn pointer_move(&mut self, pos: Vec2) {
        let DragState::Dragging { anchor } = self.drag else {
            return;
        };
        let Some(card) = self.cards.top_mut() else {
            return;
        };
        card.drag_to(pos - anchor);
        self.drag = DragState::Dragging { anchor: pos };

        let x = card.position.x;
        self.hovering_right = x > self.right_threshold;
        self.hovering_left = x < self.left_threshold;
    }

    fn pointer_up(&mut self) -> Option<Decision> {
        if self.drag == DragState::Idle {
            return None;
        }
        self.drag = DragState::Idle;
        self.hovering_left = false;
        self.hovering_right = false;

        let card = self.cards.top_mut()?;
        card.end_drag();
        let x = card.position.x;
        if x > self.right_threshold {
            card.on_accept();
            Some(Decision::Accept)
        } else if x < self.left_threshold {
            card.on_reject();
            Some(Decision::Reject)
        } else {
            None
        }
    }

    fn draw_chrome(&self, surface: &mut dyn Surface) {
        let (w, h) = (self.screen.x, self.screen.y);
        surface.fill_rect(Rect::new(0.0, 0.0, w, TOP_BAR_HEIGHT), BAR_COLOR);
        surface.fill_rect(Rect::new(0.0, h - BOTTOM_BAR_HEIGHT, w, BOTTOM_BAR_HEIGHT), BAR_COLOR);

        surface.draw_text(CHARACTER_LINE, Rect::new(10.0, h - 90.0, w - 10.0, LINE_HEIGHT), Color::WHITE);
        surface.draw_text(DATE_LINE, Rect::new(10.0, h - 58.0, w - 10.0, LINE_HEIGHT), Color::WHITE);

        if self.show_debug {
            surface.fill_rect(Rect::new(0.0, 0.0, self.left_threshold, h), DEBUG_BAND);
            surface.fill_rect(
                Rect::new(self.right_threshold, 0.0, w - self.right_threshold, h),
                DEBUG_BAND,
            );
        }

        if let Some(card) = self.cards.top() {
            let prompt_area = Rect::new(20.0, TOP_BAR_HEIGHT + 10.0, w - 40.0, 64.0);
            surface.draw_text(card.prompt_text(), prompt_area, Color::BLACK);
        }
    }

    fn draw_labels(&self, surface: &mut dyn Surface) {
        let Some(card) = self.cards.top() else {
            return;
        };
        let box_w = (self.screen.x / 4.0).floor();
        if self.hovering_right {
            let area = Rect::new(self.screen.x - box_w, LABEL_BOX_Y, box_w, LABEL_BOX_HEIGHT);
            surface.fill_rect(area, Color::BLACK);
            surface.draw_text(card.accept_label(), area, Color::WHITE);
        }
        if self.hovering_left {
            let area = Rect::new(0.0, LABEL_BOX_Y, box_w, LABEL_BOX_HEIGHT);
            surface.fill_rect(area, Color::BLACK);
            surface.draw_text(card.reject_label(), area, Color::WHITE);
        }
    }
}

impl Mode for DecisionMode {
    fn id(&self) -> ModeId {
        ModeId::Decision
    }

    fn background(&self) -> Color {
        BACKGROUND
    }

    fn tick(&mut self, elapsed: f32, _signals: &mut Signals) {
        self.cards.tick(elapsed);
    }

    fn handle_event(&mut self, event: &InputEvent, _signals: &mut Signals) {
        match *event {
            InputEvent::PointerDown {
                pos,
                button: PointerButton::Primary,
            } => self.pointer_down(pos),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::PointerUp { .. } => {
                if let Some(decision) = self.pointer_up() {
                    log::debug!("Card released: {decision:?}");
                }
            }
            _ => {}
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        self.draw_chrome(surface);
        self.cards.draw(surface);
        self.draw_labels(surface);
    }
}
