use glam::{EulerRot, Quat, Vec3};

/// Position plus XYZ Euler rotation (radians) of one book.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    /// World-space position.
    pub position: Vec3,
    /// Euler rotation in radians, applied in X, Y, Z order.
    pub rotation: Vec3,
}

impl Transform {
    /// Identity transform at the origin.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Vec3::ZERO,
    };

    /// Transform from position and Euler rotation.
    pub fn new(position: Vec3, rotation: Vec3) -> Self {
        Self { position, rotation }
    }

    /// Rotation as a quaternion.
    pub fn quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::XYZ,
            self.rotation.x,
            self.rotation.y,
            self.rotation.z,
        )
    }

    /// Map a point from book-local space into world space.
    pub fn apply(&self, local: Vec3) -> Vec3 {
        self.position + self.quat() * local
    }

    /// Component-wise linear interpolation.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            rotation: self.rotation.lerp(other.rotation, t),
        }
    }

    /// Whether every component is within `eps` of `other`.
    pub fn approx_eq(&self, other: &Self, eps: f32) -> bool {
        self.position.abs_diff_eq(other.position, eps)
            && self.rotation.abs_diff_eq(other.rotation, eps)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}
