use std::time::Duration;

use tracing::{debug, info};

use crate::config::AdvanceInterval;
use crate::state::PlaybackState;
use crate::surface::{DisplaySurface, IndicatorSet, ScrollBehavior};
use crate::timer::IntervalTimer;

/// Cyclic paged carousel controller.
///
/// Owns the current page index and the auto-advance timer. Every navigation
/// goes through [`Carousel::go_to`], which keeps the display surface and the
/// indicator set in step with the index.
pub struct Carousel<D: DisplaySurface, I: IndicatorSet> {
    surface: D,
    indicators: I,

    page_count: usize,
    current_index: usize,

    interval: AdvanceInterval,
    timer: Option<IntervalTimer>,
}

impl<D: DisplaySurface, I: IndicatorSet> Carousel<D, I> {
    pub fn new(surface: D, indicators: I, interval: AdvanceInterval) -> Self {
        Self {
            surface,
            indicators,
            page_count: 0,
            current_index: 0,
            interval,
            timer: None,
        }
    }

    /// Mounts `page_count` pages: builds the indicators, shows page 0 and
    /// starts auto-advance. Does nothing for zero pages.
    pub fn initialize(&mut self, page_count: usize) {
        if page_count == 0 {
            debug!("carousel: initialize with no pages ignored");
            return;
        }
        if page_count != self.page_count {
            self.indicators.build(page_count);
        }
        self.page_count = page_count;
        self.current_index = 0;
        self.indicators.set_active(0);
        self.surface.scroll_to_offset(0.0, ScrollBehavior::Instant);
        info!(
            "carousel: initialized pages={} interval={:?}",
            page_count,
            self.interval.as_duration()
        );
        self.start_auto_advance();
    }

    /// Shows the page at `target`, wrapping negative and overflowing values
    /// around the page count.
    pub fn go_to(&mut self, target: isize) {
        if self.page_count == 0 {
            return;
        }
        let normalized = target.rem_euclid(self.page_count as isize) as usize;
        self.current_index = normalized;
        let offset = normalized as f32 * self.surface.viewport_width();
        self.surface.scroll_to_offset(offset, ScrollBehavior::Smooth);
        self.indicators.set_active(normalized);
        debug!("carousel: go_to target={} index={} offset={}", target, normalized, offset);
    }

    pub fn next(&mut self) {
        self.go_to(self.current_index as isize + 1);
    }

    pub fn previous(&mut self) {
        self.go_to(self.current_index as isize - 1);
    }

    /// Starts the repeating timer. Any running timer is cancelled first, so
    /// the countdown always restarts from zero.
    pub fn start_auto_advance(&mut self) {
        if self.page_count == 0 {
            return;
        }
        self.stop_auto_advance();
        self.timer = Some(IntervalTimer::new(self.interval.as_duration()));
        debug!("carousel: auto-advance started");
    }

    pub fn stop_auto_advance(&mut self) {
        if self.timer.take().is_some() {
            debug!("carousel: auto-advance stopped");
        }
    }

    /// Re-issues the current page so the offset follows a new viewport width.
    pub fn on_resize(&mut self) {
        self.go_to(self.current_index as isize);
    }

    pub fn pointer_enter(&mut self) {
        self.stop_auto_advance();
    }

    pub fn pointer_leave(&mut self) {
        self.start_auto_advance();
    }

    /// Delivers elapsed time to the auto-advance timer, advancing one page per
    /// completed interval.
    pub fn tick(&mut self, dt: Duration) {
        let fired = match self.timer.as_mut() {
            Some(timer) => timer.tick(dt),
            None => return,
        };
        if fired == 0 {
            return;
        }
        // n calls to next() land on the same page as one jump of n mod pages
        let steps = fired as usize % self.page_count;
        self.go_to(self.current_index as isize + steps as isize);
    }

    pub fn state(&self) -> PlaybackState {
        if self.timer.is_some() { PlaybackState::Auto } else { PlaybackState::Paused }
    }

    /// `None` until the carousel has been initialized with at least one page.
    pub fn current_index(&self) -> Option<usize> {
        (self.page_count > 0).then_some(self.current_index)
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn interval(&self) -> AdvanceInterval {
        self.interval
    }

    /// Time accumulated toward the next auto-advance, if running.
    pub fn pending(&self) -> Option<Duration> {
        self.timer.as_ref().map(IntervalTimer::elapsed)
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Mutable access for the host, e.g. to feed a new viewport before
    /// calling [`Carousel::on_resize`]. Must not be used to move the surface
    /// away from the current page.
    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn indicators(&self) -> &I {
        &self.indicators
    }

    pub fn indicators_mut(&mut self) -> &mut I {
        &mut self.indicators
    }
}

impl<D: DisplaySurface, I: IndicatorSet> Drop for Carousel<D, I> {
    fn drop(&mut self) {
        self.stop_auto_advance();
    }
}
