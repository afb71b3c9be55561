use crate::carousel::Carousel;
use crate::surface::{DisplaySurface, IndicatorSet};

/// Turns sampled pointer positions into enter/leave edges on the track.
///
/// A pointer outside the window never counts as over the track, even when
/// its last known position lies inside it.
#[derive(Debug, Default)]
pub struct HoverTracker {
    hovering: bool,
}

impl HoverTracker {
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn update<D: DisplaySurface, I: IndicatorSet>(
        &mut self,
        carousel: &mut Carousel<D, I>,
        cursor_on_screen: bool,
        inside_track: bool,
    ) {
        let over = cursor_on_screen && inside_track;
        if over == self.hovering {
            return;
        }
        self.hovering = over;
        if over {
            carousel.pointer_enter();
        } else {
            carousel.pointer_leave();
        }
    }
}
