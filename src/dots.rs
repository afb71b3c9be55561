use raylib::prelude::*;

use carousel::IndicatorSet;
use carousel::constants::*;

/// Row of indicator dots centered in a bar under the track.
pub struct Dots {
    bar: Rectangle,
    markers: Vec<bool>,
    centers: Vec<Vector2>,
}

impl Dots {
    pub fn new(bar: Rectangle) -> Self {
        Self { bar, markers: Vec::new(), centers: Vec::new() }
    }

    pub fn layout(&mut self, bar: Rectangle) {
        self.bar = bar;
        let count = self.markers.len();
        let row_width = count.saturating_sub(1) as f32 * DOT_SPACING;
        let first_x = bar.x + (bar.width - row_width) * 0.5;
        let y = bar.y + bar.height * 0.5;
        self.centers = (0..count)
            .map(|i| Vector2::new(first_x + i as f32 * DOT_SPACING, y))
            .collect();
    }

    /// Index of the dot under `point`, if any.
    pub fn hit_test(&self, point: Vector2) -> Option<usize> {
        let reach = DOT_SPACING * 0.5;
        self.centers.iter().position(|center| {
            let dx = center.x - point.x;
            let dy = center.y - point.y;
            dx * dx + dy * dy <= reach * reach
        })
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle) {
        for (center, active) in self.centers.iter().zip(&self.markers) {
            if *active {
                d.draw_circle_v(*center, DOT_RADIUS, Color::RAYWHITE);
            } else {
                d.draw_circle_lines(center.x as i32, center.y as i32, DOT_RADIUS, Color::GRAY);
            }
        }
    }
}

impl IndicatorSet for Dots {
    fn build(&mut self, count: usize) {
        self.markers = vec![false; count];
        self.layout(self.bar);
    }

    fn set_active(&mut self, index: usize) {
        for (i, marker) in self.markers.iter_mut().enumerate() {
            *marker = i == index;
        }
    }
}
