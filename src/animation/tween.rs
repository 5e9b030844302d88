//! Fixed-duration eased tweens.

use crate::scene::Transform;
use crate::util::easing::EasingFunction;

/// A normalized clock running from 0 to 1 over a fixed duration.
///
/// Drives the synthetic progress used for scroll resynchronization, and
/// the time base of [`TransformTween`].
#[derive(Debug, Clone)]
pub struct Tween {
    elapsed: f32,
    duration: f32,
    easing: EasingFunction,
}

impl Tween {
    /// Start a tween at elapsed time zero.
    pub fn new(duration: f32, easing: EasingFunction) -> Self {
        Self {
            elapsed: 0.0,
            duration: duration.max(0.0),
            easing,
        }
    }

    /// Advance by `dt` seconds.
    pub fn advance(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Raw progress in [0, 1]. A zero-length tween is always complete.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).min(1.0)
    }

    /// Eased progress.
    pub fn eased(&self) -> f32 {
        self.easing.evaluate(self.progress())
    }

    /// Whether the tween has run its full duration.
    pub fn is_done(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Interpolate a scalar at the current eased progress.
    pub fn sample(&self, from: f32, to: f32) -> f32 {
        if self.is_done() {
            return to;
        }
        from + (to - from) * self.eased()
    }
}

/// Eased motion between two transforms with a retargetable end.
#[derive(Debug, Clone)]
pub struct TransformTween {
    from: Transform,
    to: Transform,
    clock: Tween,
}

impl TransformTween {
    /// Tween from `from` to `to` over `duration` seconds.
    pub fn new(from: Transform, to: Transform, duration: f32, easing: EasingFunction) -> Self {
        Self {
            from,
            to,
            clock: Tween::new(duration, easing),
        }
    }

    /// Replace the destination without restarting the clock.
    pub fn retarget(&mut self, to: Transform) {
        self.to = to;
    }

    /// Destination transform.
    pub fn target(&self) -> Transform {
        self.to
    }

    /// Advance and return the interpolated transform.
    pub fn advance(&mut self, dt: f32) -> Transform {
        self.clock.advance(dt);
        self.current()
    }

    /// Interpolated transform at the current time.
    pub fn current(&self) -> Transform {
        if self.clock.is_done() {
            return self.to;
        }
        self.from.lerp(&self.to, self.clock.eased())
    }

    /// Whether the destination has been reached.
    pub fn is_done(&self) -> bool {
        self.clock.is_done()
    }
}
