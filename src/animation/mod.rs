//! Animation primitives: clip playback, tweens, and the open/close
//! timeline.

pub mod clip;
pub mod timeline;
pub mod tween;

pub use clip::{ClipMode, ClipPlayer, ClipProgress, Direction};
pub use timeline::{OpenCloseTimeline, TimelineProgress, Track, TrackChannel};
pub use tween::{TransformTween, Tween};
