use raylib::prelude::*;

use carousel::constants::*;
use carousel::{DisplaySurface, ScrollBehavior};

use crate::card::Card;

/// Horizontal strip of pages, one viewport wide each.
pub struct Track {
    viewport: Rectangle,

    offset: f32,
    start_offset: f32,
    target_offset: f32,

    animation_timer: f32,
    is_animating: bool,
}

impl Track {
    pub fn new(viewport: Rectangle) -> Self {
        Self {
            viewport,
            offset: 0.0,
            start_offset: 0.0,
            target_offset: 0.0,
            animation_timer: 0.0,
            is_animating: false,
        }
    }

    /// Moves the track to a new viewport, keeping the scroll position on the
    /// same fraction of a page.
    pub fn set_viewport(&mut self, viewport: Rectangle) {
        if self.viewport.width > 0.0 {
            let ratio = viewport.width / self.viewport.width;
            self.offset *= ratio;
            self.start_offset *= ratio;
            self.target_offset *= ratio;
        }
        self.viewport = viewport;
    }

    pub fn contains(&self, point: Vector2) -> bool {
        self.viewport.check_collision_point_rec(point)
    }

    pub fn update(&mut self, dt: f32) {
        if !self.is_animating {
            return;
        }
        self.animation_timer += dt;
        let t = (self.animation_timer / SCROLL_DURATION).min(1.0);
        let t = 1.0 - (1.0 - t).powi(3); // easeOutCubic

        self.offset = raylib::core::math::lerp(self.start_offset, self.target_offset, t);

        if self.animation_timer >= SCROLL_DURATION {
            self.is_animating = false;
            self.offset = self.target_offset;
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, cards: &[Card]) {
        let width = self.viewport.width;
        for (i, card) in cards.iter().enumerate() {
            let page_x = self.viewport.x + i as f32 * width - self.offset;
            // Only pages overlapping the viewport
            if page_x + width <= self.viewport.x || page_x >= self.viewport.x + width {
                continue;
            }
            let page = Rectangle::new(page_x, self.viewport.y, width, self.viewport.height);
            card.draw(d, page);
        }
    }
}

impl DisplaySurface for Track {
    fn scroll_to_offset(&mut self, offset: f32, behavior: ScrollBehavior) {
        match behavior {
            ScrollBehavior::Instant => {
                self.offset = offset;
                self.target_offset = offset;
                self.is_animating = false;
            }
            ScrollBehavior::Smooth => {
                self.start_offset = self.offset;
                self.target_offset = offset;
                self.animation_timer = 0.0;
                self.is_animating = true;
            }
        }
    }

    fn viewport_width(&self) -> f32 {
        self.viewport.width
    }
}
