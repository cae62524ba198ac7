//! Animation primitives: easing functions and retargetable tweens.
//!
//! The frame renderer consumes already-resolved progress and color values;
//! these types are the host-side collaborator that produces them over time.

use dusk_types::color::{Color, lerp_color};

/// Standard easing functions.
///
/// Input `t` is clamped to `[0.0, 1.0]`. Output is the eased value.
pub mod easing {
    /// Linear easing (no acceleration).
    pub fn linear(t: f32) -> f32 {
        t.clamp(0.0, 1.0)
    }

    /// Quadratic ease-in-out (slow start and end).
    pub fn ease_in_out_quad(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t < 0.5 {
            2.0 * t * t
        } else {
            -1.0 + (4.0 - 2.0 * t) * t
        }
    }

    /// Cubic ease-out (fast start, slow settle).
    pub fn ease_out_cubic(t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        let t1 = t - 1.0;
        t1 * t1 * t1 + 1.0
    }
}

/// A running animation that interpolates between two values.
///
/// Unlike a fire-and-forget tween, the target can be replaced mid-flight
/// with [`Tween::retarget`]; the value stays continuous and the animation
/// restarts from wherever it currently is.
#[derive(Debug, Clone)]
pub struct Tween {
    start: f32,
    end: f32,
    duration_ms: u32,
    elapsed_ms: u32,
    easing: fn(f32) -> f32,
}

impl Tween {
    /// Create a new tween animation.
    pub fn new(start: f32, end: f32, duration_ms: u32, easing: fn(f32) -> f32) -> Self {
        Self {
            start,
            end,
            duration_ms,
            elapsed_ms: 0,
            easing,
        }
    }

    /// Create a tween already settled at `value`.
    pub fn settled(value: f32, duration_ms: u32, easing: fn(f32) -> f32) -> Self {
        Self {
            start: value,
            end: value,
            duration_ms,
            elapsed_ms: duration_ms,
            easing,
        }
    }

    /// Advance by `dt_ms` and return the current interpolated value.
    pub fn tick(&mut self, dt_ms: u32) -> f32 {
        self.elapsed_ms = (self.elapsed_ms + dt_ms).min(self.duration_ms);
        self.value()
    }

    /// Current value without advancing time.
    pub fn value(&self) -> f32 {
        let t = if self.duration_ms > 0 {
            self.elapsed_ms as f32 / self.duration_ms as f32
        } else {
            1.0
        };
        let eased = (self.easing)(t);
        self.start + (self.end - self.start) * eased
    }

    /// The value the tween is heading toward.
    pub fn target(&self) -> f32 {
        self.end
    }

    /// Redirect the animation toward a new target, starting from the
    /// current value.
    pub fn retarget(&mut self, end: f32) {
        self.start = self.value();
        self.end = end;
        self.elapsed_ms = 0;
    }

    /// Check if the animation has completed.
    pub fn is_finished(&self) -> bool {
        self.elapsed_ms >= self.duration_ms
    }
}

/// Tween between two colors over time.
#[derive(Debug, Clone)]
pub struct ColorTween {
    start: Color,
    end: Color,
    tween: Tween,
}

impl ColorTween {
    /// Create a new color tween animation.
    pub fn new(start: Color, end: Color, duration_ms: u32, easing: fn(f32) -> f32) -> Self {
        Self {
            start,
            end,
            tween: Tween::new(0.0, 1.0, duration_ms, easing),
        }
    }

    /// Create a color tween already settled at `color`.
    pub fn settled(color: Color, duration_ms: u32, easing: fn(f32) -> f32) -> Self {
        Self {
            start: color,
            end: color,
            tween: Tween::settled(1.0, duration_ms, easing),
        }
    }

    /// Advance by `dt_ms` and return the current interpolated color.
    pub fn tick(&mut self, dt_ms: u32) -> Color {
        let t = self.tween.tick(dt_ms);
        lerp_color(self.start, self.end, t)
    }

    /// Current color without advancing time.
    pub fn value(&self) -> Color {
        lerp_color(self.start, self.end, self.tween.value())
    }

    /// Redirect toward a new color, starting from the current color.
    pub fn retarget(&mut self, end: Color) {
        self.start = self.value();
        self.end = end;
        self.tween = Tween::new(0.0, 1.0, self.tween.duration_ms, self.tween.easing);
    }

    /// Check if the animation has completed.
    pub fn is_finished(&self) -> bool {
        self.tween.is_finished()
    }
}
