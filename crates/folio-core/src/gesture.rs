// Touch gesture state for the Compact carousel.

/// Per-gesture axis decision. Leaves `Unknown` at most once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisLock {
    #[default]
    Unknown,
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
    pub start_x: f64,
    pub start_y: f64,
    pub base_offset: f64,
    pub axis: AxisLock,
}

impl Drag {
    pub fn new(start_x: f64, start_y: f64, base_offset: f64) -> Self {
        Self {
            start_x,
            start_y,
            base_offset,
            axis: AxisLock::Unknown,
        }
    }

    /// Decide the axis once movement leaves the dead zone; later calls return
    /// the decision unchanged.
    pub fn lock_axis(&mut self, x: f64, y: f64, dead_zone: f64) -> AxisLock {
        if self.axis == AxisLock::Unknown {
            let dx = (x - self.start_x).abs();
            let dy = (y - self.start_y).abs();
            if dx > dead_zone || dy > dead_zone {
                self.axis = if dx > dy {
                    AxisLock::Horizontal
                } else {
                    AxisLock::Vertical
                };
                log::debug!("[carousel] axis locked {:?} (dx={:.1} dy={:.1})", self.axis, dx, dy);
            }
        }
        self.axis
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(Drag),
}

impl DragState {
    #[inline]
    pub fn is_dragging(&self) -> bool {
        matches!(self, DragState::Dragging(_))
    }
}

/// Apply elastic resistance to the part of `candidate` outside `[min, max]`.
///
/// Continuous in `candidate`; the overshoot never exceeds `max_overscroll`.
#[inline]
pub fn elastic_offset(
    candidate: f64,
    min: f64,
    max: f64,
    resistance: f64,
    max_overscroll: f64,
) -> f64 {
    if candidate > max {
        max + ((candidate - max) * resistance).min(max_overscroll)
    } else if candidate < min {
        min - ((min - candidate) * resistance).min(max_overscroll)
    } else {
        candidate
    }
}
