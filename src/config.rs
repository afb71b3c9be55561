//! Command line options and the validated settings derived from them.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use crate::constants::*;
use crate::error::CarouselError;

/// Auto-advance interval. Always strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceInterval(Duration);

impl AdvanceInterval {
    pub fn from_millis(ms: u64) -> Result<Self, CarouselError> {
        if ms == 0 {
            return Err(CarouselError::InvalidInterval);
        }
        Ok(Self(Duration::from_millis(ms)))
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for AdvanceInterval {
    fn default() -> Self {
        Self(Duration::from_millis(ADVANCE_INTERVAL_MS))
    }
}

#[derive(Debug, Parser)]
#[command(name = "carousel", about = "Cycle through a directory of cards with auto-advance and hover pause")]
pub struct Cli {
    /// Directory holding the card images
    #[arg(value_name = "CARDS_DIR")]
    pub cards_dir: PathBuf,

    /// Time each card stays on screen before advancing
    #[arg(long, value_name = "MS", default_value_t = ADVANCE_INTERVAL_MS)]
    pub interval_ms: u64,

    /// Initial window width
    #[arg(long, value_name = "PX", default_value_t = WINDOW_WIDTH)]
    pub width: u32,

    /// Initial window height
    #[arg(long, value_name = "PX", default_value_t = WINDOW_HEIGHT)]
    pub height: u32,

    /// Target frame rate
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Shuffle the card order
    #[arg(long)]
    pub shuffle: bool,

    /// Do not auto-advance until the pointer leaves the track
    #[arg(long)]
    pub start_paused: bool,
}

/// Runtime settings after validation.
#[derive(Debug, Clone)]
pub struct Settings {
    pub cards_dir: PathBuf,
    pub interval: AdvanceInterval,
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub shuffle: bool,
    pub start_paused: bool,
}

impl Cli {
    pub fn settings(&self) -> Result<Settings, CarouselError> {
        let interval = AdvanceInterval::from_millis(self.interval_ms)?;
        if self.width == 0 || self.height == 0 {
            return Err(CarouselError::InvalidWindowSize { width: self.width, height: self.height });
        }
        Ok(Settings {
            cards_dir: self.cards_dir.clone(),
            interval,
            width: self.width,
            height: self.height,
            // 0 would mean "unlimited" to raylib; keep the default instead
            fps: if self.fps == 0 { FPS } else { self.fps },
            shuffle: self.shuffle,
            start_paused: self.start_paused,
        })
    }
}
