//! Playback cursor for one of a book's intrinsic page-turn clips.
//!
//! A [`ClipPlayer`] advances time by a frame delta and clamps at a limit
//! that depends on the semantic mode ([`ClipMode`]). Clamping snaps the
//! cursor to the exact limit and pauses, so a large frame delta never
//! overshoots.

/// Semantic playback profile of a page-turn clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipMode {
    /// Click-driven open/close.
    Click,
    /// Hover preview.
    Hover,
}

/// Signed playback direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the forward limit.
    Forward,
    /// Toward time zero.
    Reverse,
}

impl Direction {
    fn sign(self) -> f32 {
        match self {
            Self::Forward => 1.0,
            Self::Reverse => -1.0,
        }
    }
}

/// Result of advancing a clip by one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipProgress {
    /// Still moving toward its limit.
    Playing,
    /// Paused exactly at the limit of its current direction.
    Settled,
}

/// One playable clip binding.
#[derive(Debug, Clone)]
pub struct ClipPlayer {
    name: String,
    original_duration: f32,
    time: f32,
    rate: f32,
    paused: bool,
}

impl ClipPlayer {
    /// Create a paused player at time zero.
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            original_duration: duration.max(0.0),
            time: 0.0,
            rate: 1.0,
            paused: true,
        }
    }

    /// Clip name as reported by the asset loader.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Duration captured at load time.
    pub fn original_duration(&self) -> f32 {
        self.original_duration
    }

    /// Current playback cursor in seconds.
    pub fn time(&self) -> f32 {
        self.time
    }

    /// Signed playback rate (negative while reversing).
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Whether the cursor is frozen.
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Unpause and set the rate sign from `direction`, keeping `speed` as
    /// the magnitude. Playback continues from the current time.
    pub fn play(&mut self, direction: Direction, speed: f32) {
        self.rate = direction.sign() * speed.abs();
        self.paused = false;
    }

    /// Freeze at an exact time.
    pub fn pause_at(&mut self, time: f32) {
        self.time = time.clamp(0.0, self.original_duration);
        self.paused = true;
    }

    /// Forward clamp for a fraction of the original duration.
    pub fn forward_limit(&self, fraction: f32) -> f32 {
        fraction * self.original_duration
    }

    /// Advance by `dt` seconds and clamp against `forward_limit` (when
    /// playing forward) or zero (when reversing).
    pub fn advance(&mut self, dt: f32, forward_limit: f32) -> ClipProgress {
        if !self.paused {
            self.time += dt * self.rate;
        }

        if self.rate > 0.0 && self.time >= forward_limit {
            self.pause_at(forward_limit);
            return ClipProgress::Settled;
        }
        if self.rate < 0.0 && self.time <= 0.0 {
            self.pause_at(0.0);
            return ClipProgress::Settled;
        }
        ClipProgress::Playing
    }
}
