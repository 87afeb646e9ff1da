#![forbid(unsafe_code)]

//! Tick-driven animation primitives.
//!
//! Every animated quantity in the overlay (overlay opacity, caption fade,
//! affordance entrances, the cutout morph) is a [`Fade`] advanced by the
//! host's `tick(dt)`. Nothing reads a wall clock: deltas come in, an eased
//! progress in [0.0, 1.0] comes out, and completion is observable the tick
//! after the accumulated time crosses the duration.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use coachlight_core::animation::{Animation, Fade, ease_out};
//!
//! let mut fade = Fade::new(Duration::from_millis(300)).easing(ease_out);
//! fade.tick(Duration::from_millis(150));
//! assert!(fade.value() > 0.5); // ease-out runs ahead of linear
//! fade.tick(Duration::from_millis(150));
//! assert!(fade.is_complete());
//! assert_eq!(fade.value(), 1.0);
//! ```
//!
//! # Invariants
//!
//! - `value()` is always in [0.0, 1.0]
//! - progress is monotonic between `reset()` calls
//! - a zero-duration animation is complete from construction and reports
//!   `value() == 1.0`; observers that react to completion inside their own
//!   tick still see it no earlier than that tick
//!
//! # Failure Modes
//!
//! - Arbitrarily large deltas saturate at the duration; they never wrap.

use std::time::Duration;

// ============================================================================
// Easing
// ============================================================================

/// An easing function mapping linear progress to eased progress.
pub type EasingFn = fn(f32) -> f32;

/// Linear interpolation (identity).
pub fn linear(t: f32) -> f32 {
    t
}

/// Cubic ease-in: slow start, fast end.
pub fn ease_in(t: f32) -> f32 {
    t * t * t
}

/// Cubic ease-out: fast start, slow end.
pub fn ease_out(t: f32) -> f32 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Cubic ease-in-out: smooth S-curve.
pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let inv = -2.0 * t + 2.0;
        1.0 - inv * inv * inv / 2.0
    }
}

// ============================================================================
// Animation Trait
// ============================================================================

/// A time-driven value in [0.0, 1.0].
pub trait Animation {
    /// Advance by the given delta.
    fn tick(&mut self, dt: Duration);

    /// Current eased value in [0.0, 1.0].
    fn value(&self) -> f32;

    /// Whether the animation has run its full duration.
    fn is_complete(&self) -> bool;

    /// Rewind to the start.
    fn reset(&mut self);
}

// ============================================================================
// Fade
// ============================================================================

/// A single 0 → 1 ramp over a fixed duration with an easing curve.
#[derive(Debug, Clone)]
pub struct Fade {
    duration: Duration,
    elapsed: Duration,
    easing: EasingFn,
}

impl Fade {
    /// Create a linear fade over `duration`.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            easing: linear,
        }
    }

    /// Set the easing curve.
    #[must_use]
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Create a fade that is already complete (`value() == 1.0`).
    pub fn completed(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: duration,
            easing: linear,
        }
    }

    /// Total duration.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Linear progress in [0.0, 1.0] before easing.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }
}

impl Animation for Fade {
    fn tick(&mut self, dt: Duration) {
        // Saturate at the duration so progress() never needs a clamp pass
        // over stale large values.
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    fn value(&self) -> f32 {
        (self.easing)(self.progress()).clamp(0.0, 1.0)
    }

    fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }
}

// ============================================================================
// Delayed
// ============================================================================

/// An animation that waits out a dead-time offset before its inner
/// animation starts consuming ticks.
///
/// During the offset `value()` is 0.0. A delta spanning the boundary is
/// split; the remainder advances the inner animation in the same tick.
#[derive(Debug, Clone)]
pub struct Delayed<A> {
    offset: Duration,
    waited: Duration,
    inner: A,
}

/// Delay `inner` by `offset`.
pub fn delay<A: Animation>(offset: Duration, inner: A) -> Delayed<A> {
    Delayed {
        offset,
        waited: Duration::ZERO,
        inner,
    }
}

impl<A: Animation> Delayed<A> {
    /// The wrapped animation.
    pub fn inner(&self) -> &A {
        &self.inner
    }
}

impl<A: Animation> Animation for Delayed<A> {
    fn tick(&mut self, dt: Duration) {
        let mut dt = dt;
        if self.waited < self.offset {
            let remaining = self.offset - self.waited;
            if dt < remaining {
                self.waited = self.waited.saturating_add(dt);
                return;
            }
            self.waited = self.offset;
            dt -= remaining;
        }
        self.inner.tick(dt);
    }

    fn value(&self) -> f32 {
        if self.waited < self.offset {
            0.0
        } else {
            self.inner.value()
        }
    }

    fn is_complete(&self) -> bool {
        self.waited >= self.offset && self.inner.is_complete()
    }

    fn reset(&mut self) {
        self.waited = Duration::ZERO;
        self.inner.reset();
    }
}

// ============================================================================
// Tests
// ============================================================================
