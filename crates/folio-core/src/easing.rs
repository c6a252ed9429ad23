/// Decelerating curve for card snaps; close to `cubic-bezier(.25,.46,.45,.94)`.
#[inline]
pub fn ease_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// A single offset animation.
///
/// The start time is latched by the first `sample` call, so a tween created
/// from an input handler begins on the next frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub from: f64,
    pub to: f64,
    pub duration_ms: f64,
    start_ms: Option<f64>,
}

impl Tween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            duration_ms,
            start_ms: None,
        }
    }

    fn elapsed_fraction(&mut self, now_ms: f64) -> f64 {
        let start = *self.start_ms.get_or_insert(now_ms);
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - start) / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Value at `now_ms`; exactly `to` once the duration has elapsed.
    pub fn sample(&mut self, now_ms: f64) -> f64 {
        let t = self.elapsed_fraction(now_ms);
        if t >= 1.0 {
            return self.to;
        }
        self.from + (self.to - self.from) * ease_out_quad(t)
    }

    pub fn is_finished(&mut self, now_ms: f64) -> bool {
        self.elapsed_fraction(now_ms) >= 1.0
    }
}
