//! One book on the shelf: transforms, page-turn clips, and its
//! interaction state.

use futures::channel::oneshot;

use super::transform::Transform;
use crate::animation::{
    ClipMode, ClipPlayer, ClipProgress, Direction, OpenCloseTimeline,
    TimelineProgress, TransformTween,
};
use crate::options::Options;

/// Hover preview phase of a closed book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverPhase {
    /// Clips at time zero.
    #[default]
    Rest,
    /// Turning toward the hover fraction.
    Rising,
    /// Held at the hover fraction.
    Raised,
    /// Turning back to zero.
    Falling,
}

/// Interaction state of a loaded book.
///
/// Hover only exists while closed, so a hovering open book cannot be
/// represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookState {
    /// Resting on its orbit; may be previewing a hover.
    Closed(HoverPhase),
    /// Click-forward in flight.
    Opening,
    /// Clips at the open fraction and timeline at progress 1.
    Open,
    /// Click-reverse in flight.
    Closing,
}

impl BookState {
    /// Closed, regardless of hover phase.
    pub fn is_closed(self) -> bool {
        matches!(self, Self::Closed(_))
    }
}

/// Which driver currently shapes a book's displayed transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformDriver {
    /// Resting on its orbit.
    Orbit,
    /// An open/close timeline is displacing it.
    Timeline,
    /// A resettle tween is carrying it back onto its orbit.
    Tween,
}

/// Terminal state reached during `Book::advance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Settled {
    Opened,
    Closed,
}

/// A loaded book.
#[derive(Debug)]
pub struct Book {
    index: usize,
    name: String,
    transform: Transform,
    rest: Transform,
    original: Transform,
    clips: Vec<ClipPlayer>,
    state: BookState,
    timeline: Option<OpenCloseTimeline>,
    resettle: Option<TransformTween>,
    settle_waiters: Vec<oneshot::Sender<()>>,
}

impl Book {
    /// A closed book at `original` with paused clips.
    pub fn new(
        index: usize,
        name: impl Into<String>,
        original: Transform,
        clips: Vec<ClipPlayer>,
    ) -> Self {
        Self {
            index,
            name: name.into(),
            transform: original,
            rest: original,
            original,
            clips,
            state: BookState::Closed(HoverPhase::Rest),
            timeline: None,
            resettle: None,
            settle_waiters: Vec::new(),
        }
    }

    /// Slot index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Displayed transform for the current frame.
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Resting transform, owned by orbit placement or a resettle tween.
    pub fn rest(&self) -> Transform {
        self.rest
    }

    /// Transform captured at load time.
    pub fn original_transform(&self) -> Transform {
        self.original
    }

    /// Page-turn clips.
    pub fn clips(&self) -> &[ClipPlayer] {
        &self.clips
    }

    /// Current interaction state.
    pub fn state(&self) -> BookState {
        self.state
    }

    /// The open/close timeline, once built.
    pub fn timeline(&self) -> Option<&OpenCloseTimeline> {
        self.timeline.as_ref()
    }

    /// Whether a resettle tween is moving the resting transform.
    pub fn is_resettling(&self) -> bool {
        self.resettle.is_some()
    }

    /// Fully open.
    pub fn is_open(&self) -> bool {
        self.state == BookState::Open
    }

    /// A click-driven open or close is in flight.
    pub fn is_click_playing(&self) -> bool {
        matches!(self.state, BookState::Opening | BookState::Closing)
    }

    /// A hover preview is in flight.
    pub fn is_hover_playing(&self) -> bool {
        matches!(
            self.state,
            BookState::Closed(HoverPhase::Rising | HoverPhase::Falling)
        )
    }

    /// Driver of the book's own transform. Pushes from other books'
    /// timelines are only visible at the scene level.
    pub fn driver(&self) -> TransformDriver {
        if self.active_timeline().is_some() {
            TransformDriver::Timeline
        } else if self.resettle.is_some() {
            TransformDriver::Tween
        } else {
            TransformDriver::Orbit
        }
    }

    /// Whether the book's timeline currently displaces anything.
    pub(crate) fn active_timeline(&self) -> Option<&OpenCloseTimeline> {
        self.timeline.as_ref().filter(|t| !t.is_idle())
    }

    pub(crate) fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// Move the resting transform, retargeting a running resettle tween
    /// instead of fighting it.
    pub(crate) fn place_rest(&mut self, rest: Transform) {
        match self.resettle.as_mut() {
            Some(tween) => tween.retarget(rest),
            None => self.rest = rest,
        }
    }

    /// Tween the resting transform to `target`. A no-op when already there.
    pub(crate) fn resettle_to(&mut self, target: Transform, options: &Options) {
        if self.rest.approx_eq(&target, 1e-5) {
            self.resettle = None;
            return;
        }
        self.resettle = Some(TransformTween::new(
            self.rest,
            target,
            options.scroll.resettle_secs,
            options.scroll.easing,
        ));
    }

    /// Start opening. Lazily builds the timeline on first use.
    ///
    /// Returns `false` when nothing started: no clips, or already
    /// opening/open.
    pub(crate) fn begin_open(&mut self, slot_count: usize, options: &Options) -> bool {
        if self.clips.is_empty() {
            return false;
        }
        match self.state {
            BookState::Opening | BookState::Open => return false,
            BookState::Closed(_) => {}
            BookState::Closing => {
                // The book will not close after all; receivers see Canceled.
                self.settle_waiters.clear();
            }
        }

        for clip in &mut self.clips {
            clip.play(Direction::Forward, options.playback.clip_rate);
        }
        let index = self.index;
        let timeline = self
            .timeline
            .get_or_insert_with(|| OpenCloseTimeline::build(index, slot_count, &options.timeline));
        timeline.grow(slot_count, &options.timeline);
        timeline.play_forward(options.timeline.forward_rate);
        self.state = BookState::Opening;
        true
    }

    /// Extend an already built timeline to push books in slots appended
    /// after it was laid out.
    pub(crate) fn grow_timeline(&mut self, slot_count: usize, options: &Options) {
        if let Some(timeline) = self.timeline.as_mut() {
            timeline.grow(slot_count, &options.timeline);
        }
    }

    /// Start closing, registering `waiter` to fire once the book is fully
    /// closed. A book that is already closed fires it immediately.
    pub(crate) fn begin_close(
        &mut self,
        waiter: Option<oneshot::Sender<()>>,
        options: &Options,
    ) {
        match self.state {
            BookState::Closed(_) => {
                if let Some(tx) = waiter {
                    let _ = tx.send(());
                }
                return;
            }
            BookState::Opening | BookState::Open => {
                for clip in &mut self.clips {
                    clip.play(Direction::Reverse, options.playback.clip_rate);
                }
                if let Some(timeline) = self.timeline.as_mut() {
                    timeline.play_reverse(options.timeline.reverse_rate);
                }
                self.state = BookState::Closing;
            }
            BookState::Closing => {}
        }
        self.settle_waiters.extend(waiter);
    }

    /// Aim the hover preview up or down. Ignored unless closed.
    pub(crate) fn set_hover(&mut self, raised: bool, options: &Options) {
        let BookState::Closed(phase) = self.state else {
            return;
        };
        if self.clips.is_empty() {
            return;
        }
        let next = match (raised, phase) {
            (true, HoverPhase::Rest | HoverPhase::Falling) => HoverPhase::Rising,
            (false, HoverPhase::Raised | HoverPhase::Rising) => HoverPhase::Falling,
            _ => return,
        };
        let direction = if raised {
            Direction::Forward
        } else {
            Direction::Reverse
        };
        for clip in &mut self.clips {
            clip.play(direction, options.playback.clip_rate);
        }
        self.state = BookState::Closed(next);
    }

    /// Advance clips, the timeline, and the resettle tween by `dt`.
    ///
    /// Returns the terminal state reached this frame, if any. Reaching
    /// `Closed` fires every pending settle waiter exactly once.
    pub(crate) fn advance(&mut self, dt: f32, options: &Options) -> Option<Settled> {
        if let Some(tween) = self.resettle.as_mut() {
            self.rest = tween.advance(dt);
            if tween.is_done() {
                self.resettle = None;
            }
        }

        match self.state {
            BookState::Opening => {
                let clips_done = self.advance_clips(dt, ClipMode::Click, options);
                let timeline_done = self.advance_timeline(dt) != TimelineProgress::Running;
                if clips_done && timeline_done {
                    self.state = BookState::Open;
                    return Some(Settled::Opened);
                }
            }
            BookState::Closing => {
                let clips_done = self.advance_clips(dt, ClipMode::Click, options);
                let timeline_done = self.advance_timeline(dt) != TimelineProgress::Running;
                if clips_done && timeline_done {
                    self.state = BookState::Closed(HoverPhase::Rest);
                    for tx in self.settle_waiters.drain(..) {
                        let _ = tx.send(());
                    }
                    return Some(Settled::Closed);
                }
            }
            BookState::Closed(HoverPhase::Rising) => {
                if self.advance_clips(dt, ClipMode::Hover, options) {
                    self.state = BookState::Closed(HoverPhase::Raised);
                }
            }
            BookState::Closed(HoverPhase::Falling) => {
                if self.advance_clips(dt, ClipMode::Hover, options) {
                    self.state = BookState::Closed(HoverPhase::Rest);
                }
            }
            BookState::Open | BookState::Closed(HoverPhase::Rest | HoverPhase::Raised) => {}
        }
        None
    }

    /// Advance every clip (no short-circuit) and report whether all of
    /// them sit at their limit.
    fn advance_clips(&mut self, dt: f32, mode: ClipMode, options: &Options) -> bool {
        let fraction = options.playback.fraction(mode);
        let mut all_settled = true;
        for clip in &mut self.clips {
            let limit = clip.forward_limit(fraction);
            if clip.advance(dt, limit) == ClipProgress::Playing {
                all_settled = false;
            }
        }
        all_settled
    }

    fn advance_timeline(&mut self, dt: f32) -> TimelineProgress {
        match self.timeline.as_mut() {
            Some(timeline) => timeline.advance(dt),
            None => TimelineProgress::AtStart,
        }
    }
}
