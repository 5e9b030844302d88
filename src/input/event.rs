/// Platform-agnostic shelf events.
///
/// Hosts translate scroll-driver callbacks and pointer/window events into
/// these and feed them to [`ShelfScene::handle_event`](crate::scene::ShelfScene::handle_event).
///
/// # Example
///
/// ```ignore
/// scene.handle_event(ShelfEvent::Click { x: 412.0, y: 300.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShelfEvent {
    /// The scroll driver reported a new normalized progress.
    Scroll {
        /// Progress in [0, 1].
        progress: f32,
    },
    /// The page scrolled back above the pinned section's start.
    LeaveBack,
    /// Primary pointer click.
    Click {
        /// Horizontal position in pixels from the viewport's left edge.
        x: f32,
        /// Vertical position in pixels from the viewport's top edge.
        y: f32,
    },
    /// Pointer moved over the viewport.
    PointerMoved {
        /// Horizontal position in pixels.
        x: f32,
        /// Vertical position in pixels.
        y: f32,
    },
    /// Pointer left the viewport.
    PointerLeft,
    /// Viewport resized.
    Resize {
        /// New width in pixels.
        width: f32,
        /// New height in pixels.
        height: f32,
    },
}
