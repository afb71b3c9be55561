/// How the display surface should reach a new offset.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ScrollBehavior {
    /// Animate from the current offset to the target.
    Smooth,
    /// Jump straight to the target.
    Instant,
}

/// The viewport the pages are rendered into. The carousel only commands its
/// position; it never reads the offset back.
pub trait DisplaySurface {
    fn scroll_to_offset(&mut self, offset: f32, behavior: ScrollBehavior);
    fn viewport_width(&self) -> f32;
}

/// The row of per-page markers. Exactly one marker is active after every
/// navigation.
pub trait IndicatorSet {
    fn build(&mut self, count: usize);
    fn set_active(&mut self, index: usize);
}
