//! Authoritative shelf scene: book slots, orbit placement, pointer
//! routing, and close-all coordination.
//!
//! [`ShelfScene`] is the only writer of book state. Hosts feed it
//! [`ShelfEvent`]s as they arrive and call [`ShelfScene::tick`] once per
//! frame. Each tick advances clips and timelines, resolves settle signals,
//! drives any scroll recovery, and then composes every book's displayed
//! transform from its resting transform plus the active timelines.

mod book;
mod close_all;
pub mod orbit;
mod recovery;
mod transform;

pub use book::{Book, BookState, HoverPhase, TransformDriver};
pub use close_all::CloseAll;
use futures::channel::oneshot;
use glam::Vec2;
pub use orbit::{place, OrbitPose};
pub use recovery::Coordination;
pub use transform::Transform;

use self::book::Settled;
use self::recovery::Recovery;
use crate::animation::ClipPlayer;
use crate::assets::LoadedBook;
use crate::camera::Camera;
use crate::error::FolioError;
use crate::input::{InteractionRouter, ShelfEvent};
use crate::options::Options;
use crate::scroll::ScrollDriver;

// ---------------------------------------------------------------------------
// Slots
// ---------------------------------------------------------------------------

/// Load state of one book slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// Nothing requested.
    Empty,
    /// Load in flight.
    Loading,
    /// Book loaded and clickable.
    Ready,
    /// Load failed; the slot stays empty for good.
    Failed,
}

#[derive(Debug)]
enum Slot {
    Empty,
    Loading,
    Ready(Book),
    Failed,
}

impl Slot {
    fn book(&self) -> Option<&Book> {
        match self {
            Self::Ready(book) => Some(book),
            _ => None,
        }
    }

    fn state(&self) -> SlotState {
        match self {
            Self::Empty => SlotState::Empty,
            Self::Loading => SlotState::Loading,
            Self::Ready(_) => SlotState::Ready,
            Self::Failed => SlotState::Failed,
        }
    }
}

/// Outcome of a settled load batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    /// Slots holding a book.
    pub ready: usize,
    /// Slots whose load failed.
    pub failed: usize,
}

fn fire(signal: Option<oneshot::Sender<()>>) {
    if let Some(tx) = signal {
        let _ = tx.send(());
    }
}

// ---------------------------------------------------------------------------
// ShelfScene
// ---------------------------------------------------------------------------

/// The shelf state machine.
pub struct ShelfScene<S> {
    options: Options,
    slots: Vec<Slot>,
    router: InteractionRouter,
    camera: Camera,
    viewport: Vec2,
    scroll: S,
    progress: f32,
    interaction_enabled: bool,
    close_all: Option<CloseAll>,
    recovery: Option<Recovery>,
}

impl<S: ScrollDriver> ShelfScene<S> {
    /// Empty scene with no slots. The camera starts at its configured
    /// start X until the first scroll update.
    pub fn new(options: Options, scroll: S, viewport: Vec2) -> Self {
        let aspect = if viewport.y > 0.0 {
            viewport.x / viewport.y
        } else {
            1.0
        };
        let camera = Camera::new(&options.camera, aspect);
        Self {
            options,
            slots: Vec::new(),
            router: InteractionRouter::new(),
            camera,
            viewport,
            scroll,
            progress: 0.0,
            interaction_enabled: false,
            close_all: None,
            recovery: None,
        }
    }

    // -- Loading --

    /// Mark `count` slots as loading.
    pub fn begin_loading(&mut self, count: usize) {
        log::debug!("awaiting {count} books");
        self.grow_slots(count);
        for slot in &mut self.slots {
            if matches!(slot, Slot::Empty) {
                *slot = Slot::Loading;
            }
        }
    }

    /// Settle slot `index` with a load result.
    ///
    /// A loaded book is placed on its orbit at the current progress and its
    /// click surfaces are registered. A failure leaves the slot empty.
    pub fn install_book(&mut self, index: usize, result: Result<LoadedBook, FolioError>) {
        self.grow_slots(index + 1);
        match result {
            Ok(loaded) => {
                let clips = loaded
                    .clips
                    .iter()
                    .map(|c| ClipPlayer::new(c.name.as_str(), c.duration))
                    .collect();
                let mut book = Book::new(index, loaded.name, loaded.transform, clips);
                if let Some(pose) = place(&self.options.orbit, self.progress, index) {
                    book.place_rest(pose.apply_to(book.rest()));
                }
                book.set_transform(book.rest());
                self.router.register(index, &loaded.surfaces);
                log::debug!(
                    "book {index} ready: '{}' with {} clips",
                    book.name(),
                    book.clips().len()
                );
                self.slots[index] = Slot::Ready(book);
            }
            Err(e) => {
                log::warn!("book {index} unavailable: {e}");
                self.router.unregister(index);
                self.slots[index] = Slot::Failed;
            }
        }
        self.compose();
        if let Some(summary) = self.load_summary() {
            log::info!(
                "all loads settled: {} ready, {} failed",
                summary.ready,
                summary.failed
            );
        }
    }

    /// Install a whole batch in slot order.
    pub fn install_batch(
        &mut self,
        results: Vec<Result<LoadedBook, FolioError>>,
    ) -> LoadSummary {
        self.begin_loading(results.len());
        for (index, result) in results.into_iter().enumerate() {
            self.install_book(index, result);
        }
        self.load_summary().unwrap_or_default()
    }

    /// Ready/failed counts once no slot is still loading.
    pub fn load_summary(&self) -> Option<LoadSummary> {
        let mut summary = LoadSummary::default();
        for slot in &self.slots {
            match slot {
                Slot::Loading => return None,
                Slot::Ready(_) => summary.ready += 1,
                Slot::Failed => summary.failed += 1,
                Slot::Empty => {}
            }
        }
        Some(summary)
    }

    // -- Events --

    /// Dispatch one host event.
    pub fn handle_event(&mut self, event: ShelfEvent) {
        match event {
            ShelfEvent::Scroll { progress } => self.on_scroll(progress),
            ShelfEvent::LeaveBack => self.on_leave_back(),
            ShelfEvent::Click { x, y } => self.on_click(Vec2::new(x, y)),
            ShelfEvent::PointerMoved { x, y } => {
                self.on_pointer_move(Vec2::new(x, y));
            }
            ShelfEvent::PointerLeft => self.on_pointer_leave(),
            ShelfEvent::Resize { width, height } => self.resize(width, height),
        }
    }

    /// Scroll progress update from the driver.
    ///
    /// Outside a recovery, a decrease while a book is open or opening
    /// starts the close-and-resume sequence (when enabled). Otherwise every
    /// closed book is placed on its orbit; books mid-interaction keep
    /// their frozen rest.
    pub fn on_scroll(&mut self, progress: f32) {
        let progress = progress.clamp(0.0, 1.0);
        let previous = std::mem::replace(&mut self.progress, progress);
        self.camera.follow_progress(progress);

        if self.recovery.is_some() {
            return;
        }
        if progress < previous && self.options.scroll.resume_on_reverse && self.any_engaged() {
            self.begin_recovery(progress);
            return;
        }

        self.interaction_enabled = progress >= 1.0;
        self.place_closed_books(progress);
        self.compose();
    }

    /// The page scrolled above the pinned section: close everything.
    pub fn on_leave_back(&mut self) {
        log::debug!("left the pinned section; closing all books");
        self.interaction_enabled = false;
        self.set_hovered(None);
        let _ = self.close_all();
    }

    /// Click at `pointer` (pixels).
    pub fn on_click(&mut self, pointer: Vec2) {
        if !self.accepts_interaction() {
            log::trace!("click ignored: interaction gated");
            return;
        }
        if let Some(index) = self.pick(pointer) {
            self.click_book(index);
        }
    }

    /// Route a click that already resolved to book `index`, for hosts that
    /// do their own picking. Gated like [`on_click`](Self::on_click).
    ///
    /// Toggles the book; if that starts opening it, every other open or
    /// opening book is closed.
    pub fn click_book(&mut self, index: usize) {
        if !self.accepts_interaction() {
            log::trace!("click on book {index} ignored: interaction gated");
            return;
        }
        let was_closed = self.book(index).is_some_and(|b| b.state().is_closed());
        self.toggle(index, None);
        let now_opening = self
            .book(index)
            .is_some_and(|b| b.state() == BookState::Opening);
        if !(was_closed && now_opening) {
            return;
        }

        let others: Vec<usize> = self
            .books()
            .filter(|b| b.index() != index)
            .filter(|b| matches!(b.state(), BookState::Open | BookState::Opening))
            .map(Book::index)
            .collect();
        for other in others {
            log::debug!("book {index} opened; closing book {other}");
            self.close(other, None);
        }
    }

    /// Pointer moved to `pointer` (pixels).
    pub fn on_pointer_move(&mut self, pointer: Vec2) {
        let hit = if self.accepts_interaction() {
            self.pick(pointer)
        } else {
            None
        };
        self.set_hovered(hit);
    }

    /// Pointer left the viewport.
    pub fn on_pointer_leave(&mut self) {
        self.set_hovered(None);
    }

    /// Viewport resized.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
        self.camera.resize(width, height);
    }

    // -- Book operations --

    /// Open a closed or opening book, or close an open or closing one.
    ///
    /// `on_settled` fires once the book is fully closed. It is only kept
    /// when this call closes; on the opening path it is dropped and its
    /// receiver observes cancellation. Empty slots and books without clips
    /// fire it at once.
    pub fn toggle(&mut self, index: usize, on_settled: Option<oneshot::Sender<()>>) {
        let Some(book) = self.book(index) else {
            log::debug!("toggle on empty slot {index}");
            fire(on_settled);
            return;
        };
        if book.clips().is_empty() {
            fire(on_settled);
            return;
        }
        match book.state() {
            BookState::Closed(_) | BookState::Opening => self.open(index),
            BookState::Open | BookState::Closing => self.close(index, on_settled),
        }
    }

    /// Start opening book `index`.
    ///
    /// This is the unrouted path: it is not gated and does not close other
    /// books. Hosts routing user clicks should use
    /// [`click_book`](Self::click_book). Opening a book that a pending
    /// close-all is closing drops it from that close-all, which then
    /// resolves without counting it.
    pub fn open(&mut self, index: usize) {
        let slot_count = self.slots.len();
        let Some(Slot::Ready(book)) = self.slots.get_mut(index) else {
            return;
        };
        if book.begin_open(slot_count, &self.options) {
            log::debug!("book {index} opening");
            if self.router.hovered() == Some(index) {
                let _ = self.router.set_hovered(None);
            }
        }
    }

    /// Start closing book `index`; `on_settled` fires once it is closed.
    pub fn close(&mut self, index: usize, on_settled: Option<oneshot::Sender<()>>) {
        let Some(Slot::Ready(book)) = self.slots.get_mut(index) else {
            fire(on_settled);
            return;
        };
        if !book.state().is_closed() {
            log::debug!("book {index} closing");
        }
        book.begin_close(on_settled, &self.options);
    }

    /// Close every book that is not already closed.
    ///
    /// Returns a shared handle resolving to the number of books that
    /// settled. While one is pending, every call returns that same handle.
    /// With nothing to close the handle is already resolved and is not
    /// retained.
    pub fn close_all(&mut self) -> CloseAll {
        if let Some(handle) = &self.close_all {
            log::trace!("close-all already pending");
            return handle.clone();
        }

        let engaged: Vec<usize> = self
            .books()
            .filter(|b| !b.state().is_closed())
            .map(Book::index)
            .collect();
        let mut signals = Vec::with_capacity(engaged.len());
        for index in engaged {
            let (tx, rx) = oneshot::channel();
            self.close(index, Some(tx));
            signals.push(rx);
        }

        log::debug!("close-all over {} books", signals.len());
        let pending = !signals.is_empty();
        let handle = close_all::aggregate(signals);
        if pending {
            self.close_all = Some(handle.clone());
        }
        handle
    }

    // -- Frame --

    /// Advance the scene by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        let mut closed = Vec::new();
        for slot in &mut self.slots {
            let Slot::Ready(book) = slot else {
                continue;
            };
            match book.advance(dt, &self.options) {
                Some(Settled::Opened) => log::debug!("book {} open", book.index()),
                Some(Settled::Closed) => {
                    log::debug!("book {} closed", book.index());
                    closed.push(book.index());
                }
                None => {}
            }
        }

        // A recovery resettles every book itself.
        if self.recovery.is_none() {
            for index in closed {
                self.resettle(index, self.progress);
            }
        }

        if let Some(count) = self.close_all.as_ref().and_then(close_all::poll_settled) {
            log::debug!("close-all settled after {count} books");
            self.close_all = None;
        }
        self.advance_recovery(dt);
        self.compose();
    }

    // -- Accessors --

    /// Active options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Book in slot `index`, if loaded.
    pub fn book(&self, index: usize) -> Option<&Book> {
        self.slots.get(index).and_then(Slot::book)
    }

    /// Loaded books in slot order.
    pub fn books(&self) -> impl Iterator<Item = &Book> + '_ {
        self.slots.iter().filter_map(Slot::book)
    }

    /// Number of slots, loaded or not.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Load state of slot `index`.
    pub fn slot_state(&self, index: usize) -> Option<SlotState> {
        self.slots.get(index).map(Slot::state)
    }

    /// Which driver shapes book `index`'s displayed transform, including
    /// pushes from other books' timelines.
    pub fn driver(&self, index: usize) -> Option<TransformDriver> {
        let book = self.book(index)?;
        let pushed = self
            .books()
            .any(|other| other.index() != index && other.active_timeline().is_some());
        Some(if pushed {
            TransformDriver::Timeline
        } else {
            book.driver()
        })
    }

    /// Camera following the scroll progress.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Viewport size in pixels.
    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Pointer router with the registered click surfaces.
    pub fn router(&self) -> &InteractionRouter {
        &self.router
    }

    /// Hovered book, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.router.hovered()
    }

    /// The scroll driver.
    pub fn scroll_driver(&self) -> &S {
        &self.scroll
    }

    /// The scroll driver, mutably.
    pub fn scroll_driver_mut(&mut self) -> &mut S {
        &mut self.scroll
    }

    /// Last observed scroll progress.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Whether the scroll has reached the bottom of the pinned section.
    pub fn interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    /// Whether clicks and hovers are currently routed.
    pub fn accepts_interaction(&self) -> bool {
        self.interaction_enabled && self.recovery.is_none() && self.close_all.is_none()
    }

    /// Whether a close-all is pending.
    pub fn is_closing_all(&self) -> bool {
        self.close_all.is_some()
    }

    // -- Internals --

    /// Append empty slots up to `count`. Built timelines are extended so
    /// they push the new slots too.
    fn grow_slots(&mut self, count: usize) {
        if count <= self.slots.len() {
            return;
        }
        self.slots.resize_with(count, || Slot::Empty);
        for slot in &mut self.slots {
            if let Slot::Ready(book) = slot {
                book.grow_timeline(count, &self.options);
            }
        }
    }

    fn any_engaged(&self) -> bool {
        self.books()
            .any(|b| matches!(b.state(), BookState::Open | BookState::Opening))
    }

    fn pick(&self, pointer: Vec2) -> Option<usize> {
        self.router
            .pick_at(&self.camera, pointer, self.viewport, |i| {
                self.book(i).map(Book::transform)
            })
    }

    fn set_hovered(&mut self, next: Option<usize>) {
        let previous = self.router.set_hovered(next);
        if previous == next {
            return;
        }
        if let Some(Slot::Ready(book)) = previous.and_then(|i| self.slots.get_mut(i)) {
            book.set_hover(false, &self.options);
        }
        if let Some(Slot::Ready(book)) = next.and_then(|i| self.slots.get_mut(i)) {
            book.set_hover(true, &self.options);
        }
    }

    fn place_closed_books(&mut self, progress: f32) {
        for slot in &mut self.slots {
            let Slot::Ready(book) = slot else {
                continue;
            };
            if !book.state().is_closed() {
                continue;
            }
            if let Some(pose) = place(&self.options.orbit, progress, book.index()) {
                book.place_rest(pose.apply_to(book.rest()));
            }
        }
    }

    /// Tween book `index`'s rest onto its orbit at `progress`.
    fn resettle(&mut self, index: usize, progress: f32) {
        let Some(Slot::Ready(book)) = self.slots.get_mut(index) else {
            return;
        };
        if let Some(pose) = place(&self.options.orbit, progress, index) {
            let target = pose.apply_to(book.rest());
            book.resettle_to(target, &self.options);
        }
    }

    fn any_resettling(&self) -> bool {
        self.books().any(Book::is_resettling)
    }

    fn composed_transform(&self, index: usize) -> Option<Transform> {
        let book = self.book(index)?;
        let mut transform = book.rest();
        if let Some(timeline) = book.active_timeline() {
            transform = timeline.apply_own(transform);
        }
        for other in self.books().filter(|b| b.index() != index) {
            if let Some(timeline) = other.active_timeline() {
                transform = timeline.apply_push(index, transform);
            }
        }
        Some(transform)
    }

    /// Recompute every displayed transform.
    fn compose(&mut self) {
        let composed: Vec<Option<Transform>> = (0..self.slots.len())
            .map(|i| self.composed_transform(i))
            .collect();
        for (slot, transform) in self.slots.iter_mut().zip(composed) {
            if let (Slot::Ready(book), Some(transform)) = (slot, transform) {
                book.set_transform(transform);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::FutureExt;

    use super::*;
    use crate::assets::ClipInfo;
    use crate::input::ClickSurface;
    use crate::scroll::{PinnedScroll, ScrollBounds};

    const DT: f32 = 1.0 / 60.0;

    fn loaded(id: &str, clips: &[f32]) -> LoadedBook {
        LoadedBook {
            id: id.to_owned(),
            name: id.to_owned(),
            transform: Transform::IDENTITY,
            clips: clips
                .iter()
                .map(|d| ClipInfo {
                    name: "PageTurn".to_owned(),
                    duration: *d,
                })
                .collect(),
            surfaces: vec![ClickSurface::centered(0.35)],
        }
    }

    fn scene(books: usize) -> ShelfScene<PinnedScroll> {
        let mut scene = ShelfScene::new(
            Options::default(),
            PinnedScroll::new(ScrollBounds::new(0.0, 2000.0)),
            Vec2::new(1600.0, 900.0),
        );
        let results = (0..books).map(|i| Ok(loaded(&format!("b{i}"), &[1.0]))).collect();
        let _ = scene.install_batch(results);
        scene
    }

    fn run(scene: &mut ShelfScene<PinnedScroll>, seconds: f32) {
        for _ in 0..(seconds / DT) as usize {
            scene.tick(DT);
        }
    }

    #[test]
    fn failed_slots_are_inert() {
        let mut scene = ShelfScene::new(
            Options::default(),
            PinnedScroll::new(ScrollBounds::new(0.0, 1.0)),
            Vec2::new(800.0, 600.0),
        );
        let summary = scene.install_batch(vec![
            Ok(loaded("a", &[1.0])),
            Err(FolioError::asset_load("b", "404")),
        ]);
        assert_eq!(summary, LoadSummary { ready: 1, failed: 1 });
        assert_eq!(scene.slot_state(1), Some(SlotState::Failed));

        let (tx, rx) = oneshot::channel();
        scene.toggle(1, Some(tx));
        assert_eq!(rx.now_or_never(), Some(Ok(())));
        scene.toggle(7, None);
        assert!(scene.book(1).is_none());
    }

    #[test]
    fn partial_install_keeps_summary_pending() {
        let mut scene = scene(0);
        scene.begin_loading(2);
        scene.install_book(0, Ok(loaded("a", &[1.0])));
        assert_eq!(scene.load_summary(), None);
        scene.install_book(1, Ok(loaded("b", &[1.0])));
        assert_eq!(scene.load_summary(), Some(LoadSummary { ready: 2, failed: 0 }));
    }

    #[test]
    fn zero_clip_book_toggle_fires_at_once() {
        let mut scene = scene(0);
        let _ = scene.install_batch(vec![Ok(loaded("bare", &[]))]);
        let (tx, rx) = oneshot::channel();
        scene.toggle(0, Some(tx));
        assert_eq!(rx.now_or_never(), Some(Ok(())));
        assert!(scene.book(0).unwrap().state().is_closed());
    }

    #[test]
    fn close_all_with_nothing_open_resolves_and_is_not_retained() {
        let mut scene = scene(3);
        let handle = scene.close_all();
        assert_eq!(handle.now_or_never(), Some(0));
        assert!(!scene.is_closing_all());
    }

    #[test]
    fn reentrant_close_all_shares_one_handle() {
        let mut scene = scene(3);
        scene.open(0);
        scene.open(2);
        run(&mut scene, 2.0);

        let first = scene.close_all();
        let second = scene.close_all();
        assert!(scene.is_closing_all());
        assert_eq!(first.clone().now_or_never(), None);
        run(&mut scene, 2.0);
        assert_eq!(first.now_or_never(), Some(2));
        assert_eq!(second.now_or_never(), Some(2));
        assert!(!scene.is_closing_all());
    }

    #[test]
    fn reopening_during_close_all_is_not_counted() {
        let mut scene = scene(3);
        scene.open(0);
        scene.open(2);
        run(&mut scene, 2.0);

        let handle = scene.close_all();
        scene.tick(DT);
        scene.open(2);
        run(&mut scene, 2.0);
        assert_eq!(handle.now_or_never(), Some(1));
        assert!(!scene.is_closing_all());
        assert!(scene.book(0).unwrap().state().is_closed());
        assert!(scene.book(2).unwrap().is_open());
    }

    #[test]
    fn slots_added_later_are_pushed_by_an_open_book() {
        let mut scene = scene(2);
        scene.open(0);
        run(&mut scene, 2.0);
        assert!(scene.book(0).unwrap().is_open());

        scene.install_book(2, Ok(loaded("late", &[1.0])));
        assert_eq!(scene.book(0).unwrap().timeline().unwrap().book_count(), 3);
        let late = scene.book(2).unwrap().transform();
        assert!((late.position.x + 7.0).abs() < 1e-4);
        assert_eq!(scene.driver(2), Some(TransformDriver::Timeline));
    }

    #[test]
    fn opening_settle_signal_is_cancelled() {
        let mut scene = scene(1);
        let (tx, rx) = oneshot::channel();
        scene.toggle(0, Some(tx));
        assert_eq!(scene.book(0).unwrap().state(), BookState::Opening);
        assert!(matches!(rx.now_or_never(), Some(Err(_))));
    }

    #[test]
    fn driver_reflects_timelines_and_resettle() {
        let mut scene = scene(2);
        assert_eq!(scene.driver(1), Some(TransformDriver::Orbit));
        scene.open(0);
        scene.tick(DT);
        assert_eq!(scene.driver(0), Some(TransformDriver::Timeline));
        assert_eq!(scene.driver(1), Some(TransformDriver::Timeline));
        run(&mut scene, 2.0);

        // Scrolling while book 0 is open leaves its rest stale.
        scene.on_scroll(0.5);
        scene.close(0, None);
        run(&mut scene, 1.0);
        assert!(scene.book(0).unwrap().state().is_closed());
        assert_eq!(scene.driver(0), Some(TransformDriver::Tween));
        run(&mut scene, 1.0);
        assert_eq!(scene.driver(0), Some(TransformDriver::Orbit));
        let expected = place(&scene.options().orbit, 0.5, 0).unwrap();
        let t = scene.book(0).unwrap().transform();
        assert!((t.position.x - expected.x).abs() < 1e-4);
    }

    #[test]
    fn hover_is_cleared_when_gated() {
        let mut scene = scene(1);
        scene.on_scroll(1.0);
        let center = scene.book(0).unwrap().transform().position;
        let pixel = scene.camera().project(center, scene.viewport()).unwrap();
        scene.on_pointer_move(pixel);
        assert_eq!(scene.hovered(), Some(0));
        run(&mut scene, 1.0);
        assert_eq!(
            scene.book(0).unwrap().state(),
            BookState::Closed(HoverPhase::Raised)
        );

        scene.on_leave_back();
        assert_eq!(scene.hovered(), None);
        assert_eq!(
            scene.book(0).unwrap().state(),
            BookState::Closed(HoverPhase::Falling)
        );
    }
}
