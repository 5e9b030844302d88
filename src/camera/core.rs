use glam::{Mat4, Vec2, Vec3, Vec4};

use crate::options::CameraOptions;

/// Perspective camera looking down -Z at the shelf plane.
///
/// Its X position is coupled to scroll progress: `base_x - progress`.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    base_x: f32,
}

/// A world-space ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Unit direction.
    pub dir: Vec3,
}

impl Camera {
    /// Camera at `start_x` for a viewport of the given aspect.
    pub fn new(options: &CameraOptions, aspect: f32) -> Self {
        let eye = Vec3::new(options.start_x, 0.0, options.eye_z);
        Self {
            eye,
            target: Vec3::new(options.start_x, 0.0, 0.0),
            up: Vec3::Y,
            aspect,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
            base_x: options.base_x,
        }
    }

    /// Slide along X to follow scroll progress.
    pub fn follow_progress(&mut self, progress: f32) {
        let x = self.base_x - progress;
        self.eye.x = x;
        self.target.x = x;
    }

    /// Recompute the aspect after a viewport resize.
    pub fn resize(&mut self, width: f32, height: f32) {
        if width > 0.0 && height > 0.0 {
            self.aspect = width / height;
        }
    }

    /// Build the combined view-projection matrix.
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Convert a pointer position (pixels, origin top-left) to a world ray.
    pub fn screen_to_ray(&self, pointer: Vec2, viewport: Vec2) -> Ray {
        // Convert to NDC (-1 to 1), y flipped for screen coordinates
        let ndc_x = (pointer.x / viewport.x) * 2.0 - 1.0;
        let ndc_y = 1.0 - (pointer.y / viewport.y) * 2.0;

        let inv_view_proj = self.build_matrix().inverse();

        // perspective_rh uses a [0,1] depth range
        let world_near = inv_view_proj * Vec4::new(ndc_x, ndc_y, 0.0, 1.0);
        let world_far = inv_view_proj * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);

        let origin = world_near.truncate() / world_near.w;
        let far = world_far.truncate() / world_far.w;

        Ray {
            origin,
            dir: (far - origin).normalize(),
        }
    }

    /// Project a world point to pointer coordinates (pixels, origin
    /// top-left). Returns `None` for points behind the camera.
    pub fn project(&self, world: Vec3, viewport: Vec2) -> Option<Vec2> {
        let clip = self.build_matrix() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.truncate() / clip.w;
        Some(Vec2::new(
            (ndc.x + 1.0) * 0.5 * viewport.x,
            (1.0 - ndc.y) * 0.5 * viewport.y,
        ))
    }
}

impl Ray {
    /// Distance along the ray to a sphere, or `None` if it misses.
    /// Starting inside the sphere reports the exit distance.
    pub fn hit_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let oc = self.origin - center;
        let a = self.dir.dot(self.dir);
        let b = 2.0 * oc.dot(self.dir);
        let c = oc.dot(oc) - radius * radius;
        let discriminant = b * b - 4.0 * a * c;

        if discriminant < 0.0 {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2.0 * a);
        if t > 0.0 {
            return Some(t);
        }
        let t2 = (-b + discriminant.sqrt()) / (2.0 * a);
        (t2 > 0.0).then_some(t2)
    }
}
