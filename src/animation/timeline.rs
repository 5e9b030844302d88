//! Reversible open/close timeline for one book.
//!
//! The timeline is built once per book (on its first interaction) and
//! reused in both directions. All tracks are anchored at time zero and run
//! concurrently:
//!
//! 1. face-on: the owner's Z-rotation blends to 0 (`rotate_secs`)
//! 2. center: the owner's position blends to the centered spot
//!    (`center_secs`)
//! 3. push: every other book's X blends to an off-stage value
//!    (`push_secs`, the longest)
//!
//! Tracks hold no start values. They yield eased weights that the scene
//! applies on top of each book's resting transform, so a timeline never
//! goes stale when the rest moves.

use glam::Vec3;

use crate::options::TimelineOptions;
use crate::scene::Transform;
use crate::util::easing::EasingFunction;

/// What a track animates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackChannel {
    /// Owner's Z-rotation toward 0.
    FaceOn,
    /// Owner's position toward the centered spot.
    Center,
    /// Another book's X toward an off-stage value.
    Push {
        /// Displaced book index.
        book: usize,
        /// Off-stage X.
        x: f32,
    },
}

/// One concurrently-running track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Track {
    /// Animated channel.
    pub channel: TrackChannel,
    /// Track length in seconds, starting at the shared anchor.
    pub duration: f32,
}

/// Outcome of advancing the timeline one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineProgress {
    /// Between the ends.
    Running,
    /// Paused and snapped at progress 1.
    AtEnd,
    /// Paused and snapped at progress 0.
    AtStart,
}

/// Reusable forward (open) / backward (close) transform animation.
#[derive(Debug, Clone)]
pub struct OpenCloseTimeline {
    owner: usize,
    book_count: usize,
    tracks: Vec<Track>,
    center: Vec3,
    easing: EasingFunction,
    total: f32,
    time: f32,
    rate: f32,
    paused: bool,
}

impl OpenCloseTimeline {
    /// Lay out the tracks for opening book `owner` among `book_count`
    /// slots. Slots without a loaded book still get a push track; the scene
    /// ignores it.
    pub fn build(owner: usize, book_count: usize, options: &TimelineOptions) -> Self {
        let mut tracks = Vec::with_capacity(book_count + 1);
        tracks.push(Track {
            channel: TrackChannel::FaceOn,
            duration: options.rotate_secs,
        });
        tracks.push(Track {
            channel: TrackChannel::Center,
            duration: options.center_secs,
        });

        let mut timeline = Self {
            owner,
            book_count: 0,
            tracks,
            center: Vec3::from_array(options.center),
            easing: options.easing,
            total: 0.0,
            time: 0.0,
            rate: 0.0,
            paused: true,
        };
        timeline.grow(book_count, options);
        timeline
    }

    /// Add push tracks for slots appended since the timeline was built.
    /// Existing tracks and the playback position are kept.
    pub fn grow(&mut self, book_count: usize, options: &TimelineOptions) {
        for book in (self.book_count..book_count).filter(|&b| b != self.owner) {
            let x = if book < self.owner {
                options.offstage_x.abs()
            } else {
                -options.offstage_x.abs()
            };
            self.tracks.push(Track {
                channel: TrackChannel::Push { book, x },
                duration: options.push_secs,
            });
        }
        self.book_count = self.book_count.max(book_count);
        self.total = self
            .tracks
            .iter()
            .map(|t| t.duration)
            .fold(0.0_f32, f32::max);
    }

    /// Book this timeline opens.
    pub fn owner(&self) -> usize {
        self.owner
    }

    /// Slots the push tracks cover.
    pub fn book_count(&self) -> usize {
        self.book_count
    }

    /// Track layout.
    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Normalized position in [0, 1].
    pub fn progress(&self) -> f32 {
        if self.total <= 0.0 {
            return if self.time > 0.0 || self.rate > 0.0 { 1.0 } else { 0.0 };
        }
        (self.time / self.total).clamp(0.0, 1.0)
    }

    /// Whether the timeline rests at progress 0 and affects nothing.
    pub fn is_idle(&self) -> bool {
        self.paused && self.progress() <= 0.0
    }

    /// Signed playback rate.
    pub fn rate(&self) -> f32 {
        self.rate
    }

    /// Play toward progress 1 from the current position.
    pub fn play_forward(&mut self, rate: f32) {
        self.rate = rate.abs();
        self.paused = false;
    }

    /// Play toward progress 0 from the current position.
    pub fn play_reverse(&mut self, rate: f32) {
        self.rate = -rate.abs();
        self.paused = false;
    }

    /// Advance by `dt` seconds, snapping and pausing at either end.
    pub fn advance(&mut self, dt: f32) -> TimelineProgress {
        if !self.paused {
            self.time += dt * self.rate;
        }
        if self.rate > 0.0 && self.time >= self.total {
            self.time = self.total;
            self.paused = true;
            return TimelineProgress::AtEnd;
        }
        if self.rate < 0.0 && self.time <= 0.0 {
            self.time = 0.0;
            self.paused = true;
            return TimelineProgress::AtStart;
        }
        TimelineProgress::Running
    }

    /// Eased completion of one track at the current time.
    fn weight(&self, track: &Track) -> f32 {
        if track.duration <= 0.0 {
            return if self.progress() > 0.0 { 1.0 } else { 0.0 };
        }
        self.easing.evaluate(self.time / track.duration)
    }

    /// Apply the owner's face-on and center tracks to its resting
    /// transform.
    pub fn apply_own(&self, rest: Transform) -> Transform {
        let mut out = rest;
        for track in &self.tracks {
            let w = self.weight(track);
            match track.channel {
                TrackChannel::FaceOn => {
                    out.rotation.z = rest.rotation.z * (1.0 - w);
                }
                TrackChannel::Center => {
                    out.position = rest.position.lerp(self.center, w);
                }
                TrackChannel::Push { .. } => {}
            }
        }
        out
    }

    /// Apply this timeline's push track for `book`, if any.
    pub fn apply_push(&self, book: usize, transform: Transform) -> Transform {
        let mut out = transform;
        for track in &self.tracks {
            if let TrackChannel::Push { book: b, x } = track.channel {
                if b == book {
                    let w = self.weight(track);
                    out.position.x += (x - out.position.x) * w;
                }
            }
        }
        out
    }
}
