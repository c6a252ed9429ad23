//! Measured geometry of the card row and its pinned section.
//!
//! Everything here is a snapshot taken from layout; nothing is configured.
//! The helpers guard their divisions so a hidden or empty row yields zeros
//! instead of NaN.

use crate::error::CarouselError;

/// Layout regime, picked by a fixed viewport-width threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportClass {
    Compact,
    Wide,
}

impl ViewportClass {
    pub fn from_width(viewport_width: f64, breakpoint_px: f64) -> Self {
        if viewport_width <= breakpoint_px {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }
}

/// Card row measurements.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub card_count: usize,
    pub card_width: f64,
    pub gap: f64,
    /// Full scrollable width of the row.
    pub content_width: f64,
    pub viewport_width: f64,
}

impl Layout {
    pub fn new(
        card_count: usize,
        card_width: f64,
        gap: f64,
        content_width: f64,
        viewport_width: f64,
    ) -> Result<Self, CarouselError> {
        if card_count == 0 {
            return Err(CarouselError::ZeroCards);
        }
        Ok(Self {
            card_count,
            card_width: finite_or_zero(card_width).max(0.0),
            gap: finite_or_zero(gap).max(0.0),
            content_width: finite_or_zero(content_width).max(0.0),
            viewport_width: finite_or_zero(viewport_width).max(0.0),
        })
    }

    /// Distance between the leading edges of two neighbouring cards.
    #[inline]
    pub fn stride(&self) -> f64 {
        self.card_width + self.gap
    }

    #[inline]
    pub fn last_index(&self) -> usize {
        self.card_count.saturating_sub(1)
    }

    /// Offset that puts card `index` at the leading edge.
    #[inline]
    pub fn snap_offset(&self, index: usize) -> f64 {
        -(index.min(self.last_index()) as f64) * self.stride()
    }

    /// Most negative resting offset in Compact mode.
    #[inline]
    pub fn min_offset(&self) -> f64 {
        self.snap_offset(self.last_index())
    }

    /// Card whose snap offset is closest to `offset`.
    pub fn nearest_index(&self, offset: f64) -> usize {
        let stride = self.stride();
        if stride <= 0.0 || !offset.is_finite() {
            return 0;
        }
        let index = (-offset / stride).round();
        if index <= 0.0 {
            0
        } else {
            (index as usize).min(self.last_index())
        }
    }

    /// Horizontal travel available in Wide mode. Never negative, so a row
    /// narrower than the viewport simply doesn't move.
    pub fn wide_max_scroll(&self, trailing_margin: f64) -> f64 {
        (self.content_width - self.viewport_width + trailing_margin).max(0.0)
    }
}

/// The pinned section's box relative to the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
    /// Distance from the viewport top to the section top; negative once scrolled past.
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScrollPhase {
    Before,
    /// Raw progress through the scrollable range, in `[0, 1]`.
    Within(f64),
    After,
}

impl SectionBox {
    /// Vertical distance over which the section stays pinned.
    pub fn scroll_range(&self) -> Result<f64, CarouselError> {
        let range = self.height - self.viewport_height;
        if range.is_finite() && range > 0.0 {
            Ok(range)
        } else {
            Err(CarouselError::DegenerateViewport {
                section_px: self.height,
                viewport_px: self.viewport_height,
            })
        }
    }

    pub fn phase(&self) -> Result<ScrollPhase, CarouselError> {
        if self.top > 0.0 {
            return Ok(ScrollPhase::Before);
        }
        let range = self.scroll_range()?;
        if self.top < -range {
            return Ok(ScrollPhase::After);
        }
        Ok(ScrollPhase::Within((self.top.abs() / range).clamp(0.0, 1.0)))
    }
}

/// Remap raw progress so the full traverse finishes within the first `span`
/// of the section.
#[inline]
pub fn accelerated_progress(raw: f64, span: f64) -> f64 {
    if span <= 0.0 {
        return if raw > 0.0 { 1.0 } else { 0.0 };
    }
    (raw / span).clamp(0.0, 1.0)
}

#[inline]
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
