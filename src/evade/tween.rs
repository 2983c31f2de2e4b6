//! Time-based position tween with ease-out-quad easing

use glam::Vec2;

/// Ease-out-quadratic: fast start, gentle settle. Input clamped to [0, 1].
#[inline]
pub fn ease_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// An in-flight jump from one position to another, driven by wall-clock
/// milliseconds so a rAF callback can sample it each frame.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    pub from: Vec2,
    pub to: Vec2,
    pub start_ms: f64,
    pub duration_ms: f64,
}

impl Tween {
    pub fn new(from: Vec2, to: Vec2, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
        }
    }

    /// Position at `now_ms` and whether the tween has finished.
    pub fn sample(&self, now_ms: f64) -> (Vec2, bool) {
        let t = if self.duration_ms > 0.0 {
            (((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)) as f32
        } else {
            1.0
        };
        let eased = ease_out_quad(t);
        (self.from.lerp(self.to, eased), t >= 1.0)
    }
}
