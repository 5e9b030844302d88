use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One book's elliptical path.
///
/// X and Y angles interpolate between independent bounds, so the path is
/// not a regular parametric ellipse: `x = cx + rx·cos(ax)`,
/// `y = cy + ry·sin(ay)` with `ax` and `ay` each lerped by progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct OrbitPath {
    /// Ellipse center `[cx, cy]`.
    pub center: [f32; 2],
    /// Ellipse radii `[rx, ry]`.
    pub radius: [f32; 2],
    /// X-angle `[start, end]` in degrees.
    pub angle_x: [f32; 2],
    /// Y-angle `[start, end]` in degrees.
    pub angle_y: [f32; 2],
    /// Z-rotation at progress 0, in degrees.
    pub base_rot_z: f32,
}

impl Default for OrbitPath {
    fn default() -> Self {
        Self {
            center: [0.0, 0.0],
            radius: [1.0, 1.0],
            angle_x: [0.0, 90.0],
            angle_y: [0.0, 90.0],
            base_rot_z: 0.0,
        }
    }
}

impl OrbitPath {
    fn new(
        center: [f32; 2],
        radius: [f32; 2],
        angle_x: [f32; 2],
        angle_y: [f32; 2],
        base_rot_z: f32,
    ) -> Self {
        Self {
            center,
            radius,
            angle_x,
            angle_y,
            base_rot_z,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Orbit", inline)]
#[serde(default)]
/// Scroll-driven orbital placement parameters.
pub struct OrbitOptions {
    /// Per-index paths. Books beyond the list reuse paths cyclically.
    pub paths: Vec<OrbitPath>,
    /// X-rotation reached at progress 1, in degrees (starts at 0).
    #[schemars(title = "Tilt", range(min = 0.0, max = 180.0))]
    pub rot_x_end: f32,
    /// Constant part of the Z-rotation sweep, in degrees.
    pub rot_z_sweep: f32,
    /// Per-index part of the Z-rotation sweep, in degrees.
    pub rot_z_sweep_step: f32,
}

impl Default for OrbitOptions {
    fn default() -> Self {
        Self {
            paths: vec![
                OrbitPath::new([-1.2, 0.0], [1.2, 1.5], [90.0, 180.0], [90.0, 0.0], 12.0),
                OrbitPath::new([-0.4, 0.0], [0.4, 0.8], [0.0, 180.0], [90.0, 180.0], 6.0),
                OrbitPath::new([0.4, 0.0], [0.4, 0.8], [180.0, 0.0], [270.0, 360.0], -6.0),
                OrbitPath::new([1.2, 0.0], [1.2, 1.5], [90.0, 0.0], [270.0, 360.0], -12.0),
            ],
            rot_x_end: 90.0,
            rot_z_sweep: -28.0,
            rot_z_sweep_step: -20.0,
        }
    }
}
