//! Application-wide constants.
//!
//! Centralizes magic numbers and configuration values for maintainability.
//! Geometry is modeled in pixels with a fixed cell size, so the layout
//! breakpoints and thresholds carry over from the site design unchanged.

use std::time::Duration;

/// Event polling timeout - balances responsiveness with CPU usage.
pub const POLL_TIMEOUT: Duration = Duration::from_millis(100);

/// Assumed width of one terminal cell in pixels.
pub const CELL_PX: u16 = 8;

/// Assumed height of one terminal row in pixels.
pub const ROW_PX: u16 = 16;

/// Viewport width breakpoints, in pixels.
pub mod breakpoints {
    /// Four cards visible at or above this width.
    pub const DESKTOP: u16 = 1200;
    /// Three cards visible at or above this width.
    pub const TABLET: u16 = 768;
    /// Two cards visible at or above this width; one below.
    pub const MOBILE: u16 = 480;
}

/// Carousel geometry and timing.
pub mod carousel {
    use std::time::Duration;

    /// Card width in pixels.
    pub const CARD_WIDTH: u16 = 320;
    /// Gap between cards in pixels.
    pub const CARD_GAP: u16 = 32;
    /// Card height in terminal rows.
    pub const CARD_ROWS: u16 = 7;
    /// Auto-advance interval.
    pub const AUTO_ADVANCE: Duration = Duration::from_secs(4);
    /// Minimum horizontal drag distance, in pixels, to register a swipe.
    pub const SWIPE_THRESHOLD: u16 = 50;
    /// Number of position indicator segments.
    pub const INDICATOR_SEGMENTS: usize = 3;
}

/// Page scroll and reveal behavior.
pub mod scroll {
    use std::time::Duration;

    /// Scroll depth, in pixels, past which the header renders elevated.
    pub const HEADER_ELEVATION: u16 = 100;
    /// Bottom margin, in pixels, subtracted from the visible band before
    /// a block counts as scrolled into view.
    pub const REVEAL_MARGIN: u16 = 50;
    /// Rows moved per scroll key / wheel notch.
    pub const STEP_ROWS: u16 = 2;
    /// Debounce window for terminal resize events.
    pub const RESIZE_DEBOUNCE: Duration = Duration::from_millis(250);
}

/// Contact form limits and timing.
pub mod form {
    use std::time::Duration;

    /// Name length bounds.
    pub const NAME_MIN: usize = 2;
    pub const NAME_MAX: usize = 50;
    /// Maximum email length.
    pub const EMAIL_MAX: usize = 100;
    /// Phone length bounds.
    pub const PHONE_MIN: usize = 9;
    pub const PHONE_MAX: usize = 20;
    /// Message length bounds.
    pub const MESSAGE_MIN: usize = 10;
    pub const MESSAGE_MAX: usize = 500;
    /// Remaining-character counts at which the counter changes tone.
    pub const COUNTER_WARNING: usize = 50;
    pub const COUNTER_DANGER: usize = 20;
    /// Simulated network delay between submit and the success banner.
    pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
    /// How long a form banner stays on screen.
    pub const BANNER_TTL: Duration = Duration::from_secs(5);
    /// Random bytes behind the submission token.
    pub const TOKEN_BYTES: usize = 24;
}

/// Glyph capability probe.
pub mod icons {
    use std::time::Duration;

    /// Delay after startup before probing the terminal's glyph support.
    pub const PROBE_DELAY: Duration = Duration::from_millis(500);
}

/// Layout dimensions for the main UI structure.
pub mod layout {
    /// Brand header height in rows.
    pub const HEADER_HEIGHT: u16 = 4;
    /// Commands bar height.
    pub const COMMANDS_BAR_HEIGHT: u16 = 3;
    /// Status bar height.
    pub const STATUS_BAR_HEIGHT: u16 = 1;
}

/// Dialog dimensions (percentages of screen size).
pub mod dialog {
    /// Product modal width percentage.
    pub const MODAL_WIDTH: u16 = 60;
    /// Product modal height percentage.
    pub const MODAL_HEIGHT: u16 = 70;
    /// Nav menu width percentage.
    pub const MENU_WIDTH: u16 = 40;
    /// Nav menu height percentage.
    pub const MENU_HEIGHT: u16 = 50;
    /// Help overlay width percentage.
    pub const HELP_WIDTH: u16 = 65;
    /// Help overlay height percentage.
    pub const HELP_HEIGHT: u16 = 75;
}
