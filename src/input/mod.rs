//! Input handling: the shelf event vocabulary and pointer hit testing.

/// Platform-agnostic shelf events.
pub mod event;
/// Pointer-to-book routing.
pub mod router;

pub use event::ShelfEvent;
pub use router::{ClickSurface, InteractionRouter};
