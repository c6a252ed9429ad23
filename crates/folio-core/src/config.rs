//! Carousel tuning.
//!
//! Defaults come from `constants.rs`. A page can override any subset through
//! a JSON object (camelCase keys); missing keys keep their default.

use crate::constants::*;
use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    pub breakpoint_px: f64,
    pub card_gap_px: f64,
    pub dead_zone_px: f64,
    pub swipe_threshold_px: f64,
    pub edge_resistance: f64,
    pub max_overscroll_px: f64,
    pub scroll_accel_span: f64,
    pub wide_margin_px: f64,
    pub snap_duration_ms: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: COMPACT_BREAKPOINT_PX,
            card_gap_px: DEFAULT_CARD_GAP_PX,
            dead_zone_px: AXIS_DEAD_ZONE_PX,
            swipe_threshold_px: SWIPE_THRESHOLD_PX,
            edge_resistance: EDGE_RESISTANCE,
            max_overscroll_px: MAX_OVERSCROLL_PX,
            scroll_accel_span: SCROLL_ACCEL_SPAN,
            wide_margin_px: WIDE_TRAILING_MARGIN_PX,
            snap_duration_ms: SNAP_DURATION_MS,
        }
    }
}

impl CarouselConfig {
    /// Parse an override object and validate the merged result.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let non_negative = [
            ("breakpointPx", self.breakpoint_px),
            ("cardGapPx", self.card_gap_px),
            ("deadZonePx", self.dead_zone_px),
            ("swipeThresholdPx", self.swipe_threshold_px),
            ("maxOverscrollPx", self.max_overscroll_px),
            ("wideMarginPx", self.wide_margin_px),
            ("snapDurationMs", self.snap_duration_ms),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::OutOfRange {
                    field,
                    rule: "a finite number >= 0",
                    value,
                });
            }
        }
        if !(0.0..=1.0).contains(&self.edge_resistance) {
            return Err(ConfigError::OutOfRange {
                field: "edgeResistance",
                rule: "within [0, 1]",
                value: self.edge_resistance,
            });
        }
        // zero would make the progress remap divide by zero
        if !(self.scroll_accel_span > 0.0 && self.scroll_accel_span <= 1.0) {
            return Err(ConfigError::OutOfRange {
                field: "scrollAccelSpan",
                rule: "within (0, 1]",
                value: self.scroll_accel_span,
            });
        }
        Ok(())
    }
}
