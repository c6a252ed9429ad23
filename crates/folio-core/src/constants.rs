// Carousel and page tuning constants shared by the controller and the web frontend.

// Layout
pub const COMPACT_BREAKPOINT_PX: f64 = 768.0; // widths at or below this are Compact
pub const DEFAULT_CARD_GAP_PX: f64 = 32.0; // 2rem, used when the row gap can't be read
pub const WIDE_TRAILING_MARGIN_PX: f64 = 100.0; // extra travel so the last card clears the edge

// Scroll mapping
pub const SCROLL_ACCEL_SPAN: f64 = 0.7; // fraction of the pinned section that completes the traverse

// Gestures
pub const AXIS_DEAD_ZONE_PX: f64 = 10.0; // movement before a touch picks an axis
pub const SWIPE_THRESHOLD_PX: f64 = 50.0; // horizontal travel that advances one card
pub const EDGE_RESISTANCE: f64 = 0.3; // share of out-of-range drag that is applied
pub const MAX_OVERSCROLL_PX: f64 = 120.0; // hard cap on elastic overshoot

// Animation
pub const SNAP_DURATION_MS: f64 = 400.0;

// Typewriter cadence (milliseconds)
pub const TYPE_DELAY_BASE_MS: f64 = 80.0;
pub const TYPE_DELAY_JITTER_MS: f64 = 50.0;
pub const DELETE_DELAY_MS: f64 = 30.0;
pub const HOLD_TYPED_MS: f64 = 2000.0;
pub const HOLD_DELETED_MS: f64 = 500.0;
pub const TYPEWRITER_START_DELAY_MS: f64 = 1000.0;

// Clock refresh
pub const CLOCK_REFRESH_MS: i32 = 1000;

// Persisted preference
pub const THEME_STORAGE_KEY: &str = "theme";
