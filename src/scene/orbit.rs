//! Scroll-progress to resting-pose mapping.
//!
//! [`place`] is pure: it is used for live per-scroll placement and for
//! precomputing where books must land after a close-all.

use glam::Vec3;

use super::transform::Transform;
use crate::options::OrbitOptions;

/// Orbit output for one book. Z is left to the book's own depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitPose {
    /// World X.
    pub x: f32,
    /// World Y.
    pub y: f32,
    /// Euler rotation in radians.
    pub rotation: Vec3,
}

impl OrbitPose {
    /// Apply to a transform, keeping its Z.
    pub fn apply_to(&self, transform: Transform) -> Transform {
        Transform {
            position: Vec3::new(self.x, self.y, transform.position.z),
            rotation: self.rotation,
        }
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Resting pose of book `index` at scroll `progress`.
///
/// Progress is clamped to [0, 1]. Returns `None` only when no paths are
/// configured.
pub fn place(options: &OrbitOptions, progress: f32, index: usize) -> Option<OrbitPose> {
    if options.paths.is_empty() {
        return None;
    }
    let path = &options.paths[index % options.paths.len()];
    let p = progress.clamp(0.0, 1.0);

    let ax = lerp(path.angle_x[0], path.angle_x[1], p).to_radians();
    let ay = lerp(path.angle_y[0], path.angle_y[1], p).to_radians();
    let x = path.center[0] + path.radius[0] * ax.cos();
    let y = path.center[1] + path.radius[1] * ay.sin();

    let sweep = options.rot_z_sweep + options.rot_z_sweep_step * index as f32;
    let rot_x = lerp(0.0, options.rot_x_end, p).to_radians();
    let rot_z = (path.base_rot_z + sweep * p).to_radians();

    Some(OrbitPose {
        x,
        y,
        rotation: Vec3::new(rot_x, 0.0, rot_z),
    })
}
