//! Scroll-coupled perspective camera and picking rays.

/// Camera struct, ray casting, and projection.
pub mod core;

pub use self::core::{Camera, Ray};
