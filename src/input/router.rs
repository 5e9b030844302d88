//! Pointer-to-book hit testing.
//!
//! Each book registers one or more spherical click surfaces in its local
//! space. A pointer position is cast through the camera and tested against
//! every surface; the nearest hit wins.

use glam::{Vec2, Vec3};

use crate::camera::{Camera, Ray};
use crate::scene::Transform;

/// A pickable sphere attached to a book.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClickSurface {
    /// Center in the book's local space.
    pub offset: Vec3,
    /// Radius in world units.
    pub radius: f32,
}

impl ClickSurface {
    /// Surface centered on the book.
    pub const fn centered(radius: f32) -> Self {
        Self {
            offset: Vec3::ZERO,
            radius,
        }
    }
}

/// Maps pointer positions to book indices and tracks the hovered book.
#[derive(Debug, Default)]
pub struct InteractionRouter {
    surfaces: Vec<(usize, ClickSurface)>,
    hovered: Option<usize>,
}

impl InteractionRouter {
    /// Empty router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register click surfaces for `book`, replacing earlier ones.
    pub fn register(&mut self, book: usize, surfaces: &[ClickSurface]) {
        self.unregister(book);
        self.surfaces.extend(surfaces.iter().map(|s| (book, *s)));
    }

    /// Drop every surface of `book`.
    pub fn unregister(&mut self, book: usize) {
        self.surfaces.retain(|(b, _)| *b != book);
        if self.hovered == Some(book) {
            self.hovered = None;
        }
    }

    /// Total registered surfaces.
    pub fn registered_count(&self) -> usize {
        self.surfaces.len()
    }

    /// Surfaces registered for one book.
    pub fn surfaces_for(&self, book: usize) -> impl Iterator<Item = &ClickSurface> + '_ {
        self.surfaces
            .iter()
            .filter(move |(b, _)| *b == book)
            .map(|(_, s)| s)
    }

    /// Currently hovered book.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Replace the hovered book, returning the previous one.
    pub(crate) fn set_hovered(&mut self, book: Option<usize>) -> Option<usize> {
        std::mem::replace(&mut self.hovered, book)
    }

    /// Nearest book hit by `ray`. `transform_of` supplies each book's
    /// displayed transform; books it returns `None` for are skipped.
    pub fn pick<F>(&self, ray: &Ray, transform_of: F) -> Option<usize>
    where
        F: Fn(usize) -> Option<Transform>,
    {
        let mut best: Option<(usize, f32)> = None;
        for (book, surface) in &self.surfaces {
            let Some(transform) = transform_of(*book) else {
                continue;
            };
            let center = transform.apply(surface.offset);
            if let Some(t) = ray.hit_sphere(center, surface.radius) {
                if best.map_or(true, |(_, bt)| t < bt) {
                    best = Some((*book, t));
                }
            }
        }
        best.map(|(book, _)| book)
    }

    /// Cast `pointer` (pixels) through `camera` and pick. An empty
    /// viewport never hits.
    pub fn pick_at<F>(
        &self,
        camera: &Camera,
        pointer: Vec2,
        viewport: Vec2,
        transform_of: F,
    ) -> Option<usize>
    where
        F: Fn(usize) -> Option<Transform>,
    {
        if viewport.x <= 0.0 || viewport.y <= 0.0 {
            return None;
        }
        let ray = camera.screen_to_ray(pointer, viewport);
        self.pick(&ray, transform_of)
    }
}
