use raylib::prelude::*;

use carousel::constants::NAV_BUTTON_SIZE;

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum NavAction {
    Previous,
    Next,
}

/// Previous/next buttons at the left and right edges of the track.
pub struct NavButtons {
    previous: Rectangle,
    next: Rectangle,
}

impl NavButtons {
    pub fn new(track: Rectangle) -> Self {
        let empty = Rectangle::new(0.0, 0.0, 0.0, 0.0);
        let mut buttons = Self { previous: empty, next: empty };
        buttons.layout(track);
        buttons
    }

    pub fn layout(&mut self, track: Rectangle) {
        let y = track.y + (track.height - NAV_BUTTON_SIZE) * 0.5;
        let margin = NAV_BUTTON_SIZE * 0.25;
        self.previous = Rectangle::new(track.x + margin, y, NAV_BUTTON_SIZE, NAV_BUTTON_SIZE);
        self.next = Rectangle::new(
            track.x + track.width - margin - NAV_BUTTON_SIZE,
            y,
            NAV_BUTTON_SIZE,
            NAV_BUTTON_SIZE,
        );
    }

    pub fn hit_test(&self, point: Vector2) -> Option<NavAction> {
        if self.previous.check_collision_point_rec(point) {
            Some(NavAction::Previous)
        } else if self.next.check_collision_point_rec(point) {
            Some(NavAction::Next)
        } else {
            None
        }
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        let fill = Color::new(0, 0, 0, 120);
        let font_size = (NAV_BUTTON_SIZE * 0.6) as i32;
        for (rect, label) in [(self.previous, "<"), (self.next, ">")] {
            d.draw_rectangle_rec(rect, fill);
            d.draw_text(
                label,
                (rect.x + rect.width * 0.35) as i32,
                (rect.y + (rect.height - font_size as f32) * 0.5) as i32,
                font_size,
                Color::RAYWHITE,
            );
        }
    }
}
