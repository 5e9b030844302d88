use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Camera projection and scroll-coupling parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    #[schemars(title = "Field of View", range(min = 20.0, max = 90.0))]
    pub fovy: f32,
    /// Near clipping plane distance.
    #[schemars(skip)]
    pub znear: f32,
    /// Far clipping plane distance.
    #[schemars(skip)]
    pub zfar: f32,
    /// Eye distance from the shelf plane (world Z).
    #[schemars(title = "Eye Depth", range(min = 1.0, max = 30.0))]
    pub eye_z: f32,
    /// Camera X at progress 0; the camera sits at `base_x - progress`.
    pub base_x: f32,
    /// Camera X before the first scroll update arrives.
    pub start_x: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 45.0,
            znear: 0.1,
            zfar: 100.0,
            eye_z: 6.0,
            base_x: 1.4,
            start_x: 1.0,
        }
    }
}
