//! Scroll driver seam.
//!
//! The scene never reads the page directly. A [`ScrollDriver`] maps the
//! host's scroll offset to progress, can be switched off while a recovery
//! is in flight, and accepts programmatic scrolls for resynchronization.
//! [`PinnedScroll`] is an in-memory driver used by the demo binary and the
//! tests; the `web` feature adds one backed by the browser window.

use crate::input::ShelfEvent;

/// Offsets spanned by the pinned section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBounds {
    /// Offset at progress 0.
    pub start: f32,
    /// Offset at progress 1.
    pub end: f32,
}

impl ScrollBounds {
    /// Bounds from `start` to `end`.
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Offset that corresponds to `progress` (clamped to [0, 1]).
    pub fn offset_for(&self, progress: f32) -> f32 {
        self.start + (self.end - self.start) * progress.clamp(0.0, 1.0)
    }

    /// Progress at `offset`, clamped. Degenerate bounds report 0.
    pub fn progress_at(&self, offset: f32) -> f32 {
        let span = self.end - self.start;
        if span.abs() <= f32::EPSILON {
            return 0.0;
        }
        ((offset - self.start) / span).clamp(0.0, 1.0)
    }
}

/// Host-side scroll control used by the scene.
pub trait ScrollDriver {
    /// Enable or disable progress reporting.
    fn set_enabled(&mut self, enabled: bool);

    /// Whether progress is currently reported.
    fn is_enabled(&self) -> bool;

    /// Offsets spanned by the pinned section.
    fn bounds(&self) -> ScrollBounds;

    /// Current scroll offset.
    fn offset(&self) -> f32;

    /// Programmatically move to `offset`.
    fn scroll_to(&mut self, offset: f32);
}

/// In-memory scroll driver.
///
/// Offsets move through [`scroll_to`](ScrollDriver::scroll_to) or
/// [`scroll_by`](Self::scroll_by); [`drain_events`](Self::drain_events)
/// turns the movement since the last drain into [`ShelfEvent`]s, the way
/// a page's scroll observer would.
#[derive(Debug, Clone)]
pub struct PinnedScroll {
    bounds: ScrollBounds,
    offset: f32,
    enabled: bool,
    reported: Option<f32>,
}

impl PinnedScroll {
    /// Driver at `bounds.start`, enabled.
    pub fn new(bounds: ScrollBounds) -> Self {
        Self {
            bounds,
            offset: bounds.start,
            enabled: true,
            reported: None,
        }
    }

    /// Move by a relative amount, as a wheel or touch gesture would.
    pub fn scroll_by(&mut self, delta: f32) {
        self.offset += delta;
    }

    /// Progress at the current offset.
    pub fn progress(&self) -> f32 {
        self.bounds.progress_at(self.offset)
    }

    /// Events for the movement since the last drain.
    ///
    /// Nothing is reported while disabled; the next drain after
    /// re-enabling catches up. Crossing back above `bounds.start` from
    /// inside the section emits [`ShelfEvent::LeaveBack`] after the final
    /// progress.
    pub fn drain_events(&mut self) -> Vec<ShelfEvent> {
        if !self.enabled || self.reported == Some(self.offset) {
            return Vec::new();
        }
        let was_inside = self.reported.is_some_and(|o| o >= self.bounds.start);
        self.reported = Some(self.offset);

        let mut events = vec![ShelfEvent::Scroll {
            progress: self.progress(),
        }];
        if was_inside && self.offset < self.bounds.start {
            events.push(ShelfEvent::LeaveBack);
        }
        events
    }
}

impl ScrollDriver for PinnedScroll {
    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn bounds(&self) -> ScrollBounds {
        self.bounds
    }

    fn offset(&self) -> f32 {
        self.offset
    }

    fn scroll_to(&mut self, offset: f32) {
        self.offset = offset;
    }
}
