use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Open/Close Timeline", inline)]
#[serde(default)]
/// Track layout and playback rates for the per-book open/close timeline.
pub struct TimelineOptions {
    /// Seconds to rotate the opened book face-on (Z-rotation to 0).
    #[schemars(range(min = 0.05, max = 5.0))]
    pub rotate_secs: f32,
    /// Seconds to move the opened book to the centered position.
    #[schemars(range(min = 0.05, max = 5.0))]
    pub center_secs: f32,
    /// Seconds to push every other book off-stage.
    #[schemars(range(min = 0.05, max = 5.0))]
    pub push_secs: f32,
    /// Centered position of an open book.
    #[schemars(skip)]
    pub center: [f32; 3],
    /// Off-stage X magnitude for displaced books.
    pub offstage_x: f32,
    /// Playback rate while opening.
    pub forward_rate: f32,
    /// Playback rate while closing (faster than opening).
    pub reverse_rate: f32,
    /// Easing applied to every track.
    pub easing: EasingFunction,
}

impl Default for TimelineOptions {
    fn default() -> Self {
        Self {
            rotate_secs: 0.5,
            center_secs: 1.0,
            push_secs: 1.2,
            center: [0.0, 0.0, 2.5],
            offstage_x: 7.0,
            forward_rate: 1.0,
            reverse_rate: 2.0,
            easing: EasingFunction::QuadraticOut,
        }
    }
}
