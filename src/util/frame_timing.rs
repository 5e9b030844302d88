//! Frame pacing: a capped delta source for hosts without their own clock.

use web_time::{Duration, Instant};

/// Per-tick delta source with a smoothed FPS readout.
///
/// Hosts call [`FrameClock::tick`] once per rendered frame and feed the
/// returned delta into the scene. Deltas are capped so a stalled tab does
/// not fast-forward every animation in one frame.
pub struct FrameClock {
    /// Last frame timestamp
    last_frame: Instant,
    /// Largest delta handed out, in seconds
    max_delta: f32,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock that never reports a delta above `max_delta`.
    pub fn new(max_delta: Duration) -> Self {
        Self {
            last_frame: Instant::now(),
            max_delta: max_delta.as_secs_f32(),
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Advance to now and return the capped delta in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = self.record(now.duration_since(self.last_frame));
        self.last_frame = now;
        dt
    }

    /// Fold one raw frame duration into the FPS average and return the
    /// capped delta in seconds.
    fn record(&mut self, elapsed: Duration) -> f32 {
        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        frame_time.min(self.max_delta)
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(Duration::from_millis(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_stall_is_capped() {
        let mut clock = FrameClock::new(Duration::from_millis(50));
        let dt = clock.record(Duration::from_secs(3));
        assert!((dt - 0.05).abs() < 1e-6);
    }

    #[test]
    fn fps_drifts_toward_frame_rate() {
        let mut clock = FrameClock::default();
        for _ in 0..400 {
            let _ = clock.record(Duration::from_millis(20));
        }
        assert!((clock.fps() - 50.0).abs() < 1.0);
    }
}
