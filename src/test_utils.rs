//! Recording doubles for the carousel collaborators.

use crate::surface::{DisplaySurface, IndicatorSet, ScrollBehavior};

#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub width: f32,
    pub scrolls: Vec<(f32, ScrollBehavior)>,
}

impl RecordingSurface {
    pub fn new(width: f32) -> Self {
        Self { width, scrolls: Vec::new() }
    }

    pub fn last(&self) -> Option<(f32, ScrollBehavior)> {
        self.scrolls.last().copied()
    }
}

impl DisplaySurface for RecordingSurface {
    fn scroll_to_offset(&mut self, offset: f32, behavior: ScrollBehavior) {
        self.scrolls.push((offset, behavior));
    }

    fn viewport_width(&self) -> f32 {
        self.width
    }
}

#[derive(Debug, Default)]
pub struct RecordingIndicators {
    pub markers: Vec<bool>,
    pub builds: usize,
}

impl RecordingIndicators {
    /// Indices of every active marker.
    pub fn active(&self) -> Vec<usize> {
        self.markers
            .iter()
            .enumerate()
            .filter_map(|(i, active)| active.then_some(i))
            .collect()
    }
}

impl IndicatorSet for RecordingIndicators {
    fn build(&mut self, count: usize) {
        self.markers = vec![false; count];
        self.builds += 1;
    }

    fn set_active(&mut self, index: usize) {
        for (i, marker) in self.markers.iter_mut().enumerate() {
            *marker = i == index;
        }
    }
}
