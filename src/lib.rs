//! Cyclic paged carousel: a single authoritative page index with wraparound
//! navigation, dot indicators, hover pause and a cancellable auto-advance timer.

pub mod cards;
pub mod carousel;
pub mod config;
pub mod constants;
pub mod error;
pub mod hover;
pub mod state;
pub mod surface;
pub mod timer;

#[cfg(test)]
pub(crate) mod test_utils;

pub use carousel::Carousel;
pub use config::{AdvanceInterval, Cli, Settings};
pub use error::CarouselError;
pub use hover::HoverTracker;
pub use state::PlaybackState;
pub use surface::{DisplaySurface, IndicatorSet, ScrollBehavior};
pub use timer::IntervalTimer;
