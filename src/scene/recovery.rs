//! Scroll-reversal recovery.
//!
//! Scrolling back up while a book is open closes everything before the
//! orbit resumes:
//!
//! 1. remember the reported progress and suspend the scroll driver
//! 2. close all books and wait for the shared close-all handle
//! 3. re-enable the driver, tween every book's rest onto its orbit at the
//!    remembered progress, and tween the scroll offset to match it with a
//!    synthetic eased progress
//! 4. once both settle, return to idle
//!
//! Orbit placement and interaction stay suppressed throughout.

use super::close_all::{self, CloseAll};
use super::ShelfScene;
use crate::animation::Tween;
use crate::scroll::ScrollDriver;

/// Global coordination state of the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coordination {
    /// Scroll placement and interaction run normally.
    Idle,
    /// A scroll-reversal recovery is in flight.
    ClosingAllForScroll,
}

enum Phase {
    Closing(CloseAll),
    Resyncing { from: f32, to: f32, clock: Tween },
}

pub(super) struct Recovery {
    target: f32,
    phase: Phase,
}

impl<S: ScrollDriver> ShelfScene<S> {
    /// Current coordination state.
    pub fn coordination(&self) -> Coordination {
        if self.recovery.is_some() {
            Coordination::ClosingAllForScroll
        } else {
            Coordination::Idle
        }
    }

    /// Whether a scroll-reversal recovery is in flight.
    pub fn is_recovering(&self) -> bool {
        self.recovery.is_some()
    }

    /// Progress the running recovery will resume at.
    pub fn recovery_target(&self) -> Option<f32> {
        self.recovery.as_ref().map(|r| r.target)
    }

    pub(super) fn begin_recovery(&mut self, target: f32) {
        log::debug!("scroll reversed to {target:.3}; closing all books before resuming");
        self.scroll.set_enabled(false);
        self.interaction_enabled = false;
        self.set_hovered(None);
        let handle = self.close_all();
        self.recovery = Some(Recovery {
            target,
            phase: Phase::Closing(handle),
        });
    }

    pub(super) fn advance_recovery(&mut self, dt: f32) {
        let Some(mut recovery) = self.recovery.take() else {
            return;
        };
        match &mut recovery.phase {
            Phase::Closing(handle) => {
                if close_all::poll_settled(handle).is_some() {
                    recovery.phase = self.start_resync(recovery.target);
                }
            }
            Phase::Resyncing { from, to, clock } => {
                clock.advance(dt);
                self.scroll.scroll_to(clock.sample(*from, *to));
                if clock.is_done() && !self.any_resettling() {
                    self.finish_recovery(recovery.target);
                    return;
                }
            }
        }
        self.recovery = Some(recovery);
    }

    fn start_resync(&mut self, target: f32) -> Phase {
        self.scroll.set_enabled(true);
        for index in 0..self.slots.len() {
            self.resettle(index, target);
        }
        let from = self.scroll.offset();
        let to = self.scroll.bounds().offset_for(target);
        log::debug!("books closed; resyncing scroll {from:.1} -> {to:.1}");
        Phase::Resyncing {
            from,
            to,
            clock: Tween::new(self.options.scroll.resync_secs, self.options.scroll.easing),
        }
    }

    fn finish_recovery(&mut self, target: f32) {
        log::debug!("recovery complete at progress {target:.3}");
        self.progress = target;
        self.camera.follow_progress(target);
        self.interaction_enabled = target >= 1.0;
    }
}
