//! Camera for ray generation.

use crate::Ray;
use halo_math::Vec3;

/// Pinhole camera looking through a fixed rectangular viewport.
///
/// `start` is the upper-left corner of the viewport; `horizontal` spans it
/// left to right and `vertical` spans it top to bottom, so `(u, v) = (0, 0)`
/// maps to the top-left of the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    origin: Vec3,
    start: Vec3,
    horizontal: Vec3,
    vertical: Vec3,
}

impl Camera {
    /// Create a camera from its eye point and viewport corner/basis vectors.
    pub fn new(origin: Vec3, start: Vec3, horizontal: Vec3, vertical: Vec3) -> Self {
        Self {
            origin,
            start,
            horizontal,
            vertical,
        }
    }

    /// Create a camera looking down -Z at an axis-aligned viewport
    /// `focal_distance` in front of the eye.
    pub fn from_viewport(
        origin: Vec3,
        viewport_width: f32,
        viewport_height: f32,
        focal_distance: f32,
    ) -> Self {
        let horizontal = Vec3::new(viewport_width, 0.0, 0.0);
        let vertical = Vec3::new(0.0, -viewport_height, 0.0);
        let forward = Vec3::new(0.0, 0.0, -focal_distance);
        let start = origin + forward - horizontal / 2.0 - vertical / 2.0;

        Self::new(origin, start, horizontal, vertical)
    }

    /// Generate the primary ray through normalized plane coordinates (u, v).
    pub fn get_ray(&self, u: f32, v: f32) -> Ray {
        let pixel_sample = self.start + u * self.horizontal + v * self.vertical;
        Ray::new(self.origin, pixel_sample - self.origin)
    }

    pub fn origin(&self) -> Vec3 {
        self.origin
    }
}

impl Default for Camera {
    /// Eye at the origin, 4x2 viewport one unit down -Z.
    fn default() -> Self {
        Self::from_viewport(Vec3::ZERO, 4.0, 2.0, 1.0)
    }
}
