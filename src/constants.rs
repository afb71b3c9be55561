pub const WINDOW_WIDTH: u32 = 1280;           // Default window width
pub const WINDOW_HEIGHT: u32 = 720;           // Default window height
pub const FPS: u32 = 60;                      // Default frames per second

pub const ADVANCE_INTERVAL_MS: u64 = 4000;    // Time each card stays before auto-advance (milliseconds)
pub const SCROLL_DURATION: f32 = 0.5;         // Duration of the smooth scroll between cards (seconds)

pub const DOT_BAR_HEIGHT: f32 = 48.0;         // Height of the indicator row under the track
pub const DOT_RADIUS: f32 = 6.0;              // Radius of one indicator dot
pub const DOT_SPACING: f32 = 24.0;            // Distance between dot centers
pub const NAV_BUTTON_SIZE: f32 = 48.0;        // Side length of the prev/next buttons
pub const CARD_MARGIN: f32 = 0.9;             // Fraction of the page a card may fill
