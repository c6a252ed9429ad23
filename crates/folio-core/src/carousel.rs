//! Horizontal project carousel controller.
//!
//! A single owner holds all carousel state. Input arrives through the
//! per-event methods or through [`CarouselController::dispatch`]; output goes
//! to a [`CarouselHost`], which the web frontend backs with the DOM and the
//! tests back with a recording fake.
//!
//! Wide viewports map vertical progress through the pinned section onto the
//! row offset. Compact viewports ignore scroll and move card by card, driven
//! by swipes and dot clicks.

use crate::config::CarouselConfig;
use crate::easing::Tween;
use crate::error::CarouselError;
use crate::geometry::{accelerated_progress, Layout, ScrollPhase, SectionBox, ViewportClass};
use crate::gesture::{elastic_offset, AxisLock, Drag, DragState};

/// Geometry queries and render writes the controller needs from its host.
pub trait CarouselHost {
    fn viewport_width(&self) -> f64;
    /// Measure the card row. Fails with `MissingElement` or `ZeroCards`.
    fn measure(&self) -> Result<Layout, CarouselError>;
    /// Box of the pinned section relative to the viewport.
    fn section(&self) -> Result<SectionBox, CarouselError>;
    fn set_offset(&mut self, offset_px: f64);
    /// Mark `index` as the only active dot.
    fn set_active_dot(&mut self, index: usize);
    fn set_helper_visible(&mut self, visible: bool);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselInput {
    Scroll,
    Resize,
    GoTo(usize),
    TouchStart { x: f64, y: f64 },
    TouchMove { x: f64, y: f64 },
    TouchEnd { x: f64 },
    TouchCancel,
    Frame { now_ms: f64 },
}

/// What the host should do with the originating event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Response {
    pub prevent_default: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Initiator {
    User,
    Program,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CarouselState {
    pub active_index: usize,
    pub offset: f64,
    pub drag: DragState,
    pub helper_dismissed: bool,
}

pub struct CarouselController<H: CarouselHost> {
    host: H,
    config: CarouselConfig,
    state: CarouselState,
    class: ViewportClass,
    layout: Option<Layout>,
    section: Option<SectionBox>,
    tween: Option<Tween>,
    scroll_pending: bool,
    resize_deferred: bool,
}

impl<H: CarouselHost> CarouselController<H> {
    /// Measure the host and anchor the row for the current viewport class.
    pub fn mount(host: H, config: CarouselConfig) -> Self {
        let class = ViewportClass::from_width(host.viewport_width(), config.breakpoint_px);
        let mut controller = Self {
            host,
            config,
            state: CarouselState::default(),
            class,
            layout: None,
            section: None,
            tween: None,
            scroll_pending: false,
            resize_deferred: false,
        };
        controller.layout = controller.measure_layout();
        controller.reanchor();
        log::info!(
            "[carousel] mounted: mode={:?} cards={}",
            class,
            controller.layout.map(|l| l.card_count).unwrap_or(0)
        );
        controller
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn class(&self) -> ViewportClass {
        self.class
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Target of the running snap animation, if any.
    pub fn animation_target(&self) -> Option<f64> {
        self.tween.map(|t| t.to)
    }

    /// Single entry point for every input. Returns whether the source event
    /// should have its default action suppressed.
    pub fn dispatch(&mut self, input: CarouselInput) -> Response {
        match input {
            CarouselInput::Scroll => self.request_scroll(),
            CarouselInput::Resize => self.on_resize(),
            CarouselInput::GoTo(index) => self.go_to_index(index),
            CarouselInput::TouchStart { x, y } => self.on_touch_start(x, y),
            CarouselInput::TouchMove { x, y } => return self.on_touch_move(x, y),
            CarouselInput::TouchEnd { x } => self.on_touch_end(x),
            CarouselInput::TouchCancel => self.on_touch_cancel(),
            CarouselInput::Frame { now_ms } => self.tick(now_ms),
        }
        Response::default()
    }

    /// Note that the page scrolled; the work happens on the next `tick`.
    pub fn request_scroll(&mut self) {
        self.scroll_pending = true;
    }

    /// Per-frame step: apply at most one pending scroll, then advance the snap
    /// animation.
    pub fn tick(&mut self, now_ms: f64) {
        if std::mem::take(&mut self.scroll_pending) {
            self.on_scroll();
        }
        if let Some(tween) = self.tween.as_mut() {
            let value = tween.sample(now_ms);
            let finished = tween.is_finished(now_ms);
            if finished {
                self.tween = None;
            }
            self.write_offset(value);
        }
    }

    pub fn on_scroll(&mut self) {
        if self.class != ViewportClass::Wide {
            return;
        }
        self.apply_scroll();
    }

    pub fn on_resize(&mut self) {
        if self.state.drag.is_dragging() {
            // keep the gesture's math on the old measurement
            self.resize_deferred = true;
            return;
        }
        self.remeasure();
        self.reanchor();
    }

    /// User-initiated jump to card `index` (dot click, swipe). A gesture in
    /// flight is dropped so the snap owns the offset.
    pub fn go_to_index(&mut self, index: usize) {
        self.end_drag();
        self.snap_to(index, Initiator::User);
    }

    pub fn on_touch_start(&mut self, x: f64, y: f64) {
        if self.class != ViewportClass::Compact || self.layout.is_none() {
            return;
        }
        // a new gesture supersedes any running snap
        self.tween = None;
        self.state.drag = DragState::Dragging(Drag::new(x, y, self.state.offset));
    }

    pub fn on_touch_move(&mut self, x: f64, y: f64) -> Response {
        let dead_zone = self.config.dead_zone_px;
        let (axis, start_x, base_offset) = match &mut self.state.drag {
            DragState::Dragging(drag) => (
                drag.lock_axis(x, y, dead_zone),
                drag.start_x,
                drag.base_offset,
            ),
            DragState::Idle => return Response::default(),
        };
        if axis != AxisLock::Horizontal {
            return Response::default();
        }
        let Some(layout) = self.layout else {
            return Response::default();
        };
        let offset = elastic_offset(
            base_offset + (x - start_x),
            layout.min_offset(),
            0.0,
            self.config.edge_resistance,
            self.config.max_overscroll_px,
        );
        self.write_offset(offset);
        Response {
            prevent_default: true,
        }
    }

    pub fn on_touch_end(&mut self, x: f64) {
        let Some(drag) = self.end_drag() else {
            return;
        };
        let active = self.state.active_index;
        match drag.axis {
            AxisLock::Horizontal => {
                let swipe = x - drag.start_x;
                let threshold = self.config.swipe_threshold_px;
                let target = if swipe < -threshold {
                    active + 1
                } else if swipe > threshold {
                    active.saturating_sub(1)
                } else {
                    active
                };
                log::debug!("[carousel] swipe {:.1}px: {} -> {}", swipe, active, target);
                self.snap_to(target, Initiator::User);
            }
            AxisLock::Unknown | AxisLock::Vertical => {
                // the gesture may have interrupted a snap; settle quietly
                if let Some(layout) = self.layout {
                    if (self.state.offset - layout.snap_offset(active)).abs() > f64::EPSILON {
                        self.snap_to(active, Initiator::Program);
                    }
                }
            }
        }
    }

    /// System-aborted gesture: back to the active card without counting as
    /// user navigation.
    pub fn on_touch_cancel(&mut self) {
        if self.end_drag().is_some() {
            self.snap_to(self.state.active_index, Initiator::Program);
        }
    }

    /// Clear the drag and apply a resize deferred during it. Returns the drag
    /// only when the gesture should still resolve in the same mode.
    fn end_drag(&mut self) -> Option<Drag> {
        let DragState::Dragging(drag) = std::mem::take(&mut self.state.drag) else {
            return None;
        };
        if std::mem::take(&mut self.resize_deferred) && self.remeasure() {
            self.reanchor();
            return None;
        }
        Some(drag)
    }

    fn snap_to(&mut self, index: usize, initiator: Initiator) {
        if self.class != ViewportClass::Compact {
            return;
        }
        let Some(layout) = self.layout else {
            return;
        };
        let index = index.min(layout.last_index());
        self.state.active_index = index;
        self.host.set_active_dot(index);
        self.tween = Some(Tween::new(
            self.state.offset,
            layout.snap_offset(index),
            self.config.snap_duration_ms,
        ));
        if initiator == Initiator::User && !self.state.helper_dismissed {
            self.state.helper_dismissed = true;
            self.host.set_helper_visible(false);
            log::info!("[carousel] scroll helper dismissed");
        }
    }

    /// Refresh viewport class and layout. Returns true when the class changed.
    fn remeasure(&mut self) -> bool {
        let class = ViewportClass::from_width(self.host.viewport_width(), self.config.breakpoint_px);
        self.layout = self.measure_layout();
        if class == self.class {
            return false;
        }
        log::info!("[carousel] mode {:?} -> {:?}", self.class, class);
        self.class = class;
        self.state.drag = DragState::Idle;
        if class == ViewportClass::Compact {
            if let Some(layout) = self.layout {
                self.state.active_index = layout.nearest_index(self.state.offset);
            }
        }
        true
    }

    /// Put the row at the resting position for the current mode, dropping any
    /// running animation. Never dismisses the helper.
    fn reanchor(&mut self) {
        self.tween = None;
        match self.class {
            ViewportClass::Compact => {
                let Some(layout) = self.layout else {
                    return;
                };
                self.state.active_index = self.state.active_index.min(layout.last_index());
                self.write_offset(layout.snap_offset(self.state.active_index));
                self.host.set_active_dot(self.state.active_index);
            }
            ViewportClass::Wide => self.apply_scroll(),
        }
    }

    fn apply_scroll(&mut self) {
        match self.host.section() {
            Ok(section) => self.section = Some(section),
            Err(e) => log::debug!("[carousel] section unavailable: {}", e),
        }
        let (Some(section), Some(layout)) = (self.section, self.layout) else {
            return;
        };
        let max_scroll = layout.wide_max_scroll(self.config.wide_margin_px);
        let offset = match section.phase() {
            Ok(ScrollPhase::Before) => 0.0,
            Ok(ScrollPhase::Within(raw)) => {
                -accelerated_progress(raw, self.config.scroll_accel_span) * max_scroll
            }
            Ok(ScrollPhase::After) => -max_scroll,
            Err(e) => {
                log::debug!("[carousel] {}", e);
                0.0
            }
        };
        self.write_offset(offset);
    }

    fn measure_layout(&self) -> Option<Layout> {
        match self.host.measure() {
            Ok(layout) => Some(layout),
            Err(e) => {
                log::debug!("[carousel] measure skipped: {}", e);
                None
            }
        }
    }

    fn write_offset(&mut self, offset: f64) {
        self.state.offset = offset;
        self.host.set_offset(offset);
    }
}
