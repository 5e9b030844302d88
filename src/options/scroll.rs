use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::easing::EasingFunction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scroll", inline)]
#[serde(default)]
/// Scroll-reversal recovery behavior.
pub struct ScrollOptions {
    /// Close open books and resume scroll as soon as progress decreases.
    /// When false, books close only after scrolling above the trigger start.
    #[schemars(title = "Resume On Reverse")]
    pub resume_on_reverse: bool,
    /// Seconds to move books from their post-close spot to the orbit.
    #[schemars(range(min = 0.05, max = 5.0))]
    pub resettle_secs: f32,
    /// Seconds to move the scroll offset back to the captured progress.
    #[schemars(range(min = 0.05, max = 5.0))]
    pub resync_secs: f32,
    /// Easing for resettle and resync motion.
    pub easing: EasingFunction,
}

impl Default for ScrollOptions {
    fn default() -> Self {
        Self {
            resume_on_reverse: true,
            resettle_secs: 0.5,
            resync_secs: 0.8,
            easing: EasingFunction::QuadraticInOut,
        }
    }
}
