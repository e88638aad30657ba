//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Ray,
};
use halo_math::{Interval, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    center: Vec3,
    radius: f32,
}

impl Sphere {
    /// Create a new sphere. Negative radii are clamped to zero.
    pub fn new(center: Vec3, radius: f32) -> Self {
        if radius < 0.0 {
            log::warn!("Sphere at {} has negative radius {}, clamping to 0", center, radius);
        }

        Self {
            center,
            radius: radius.max(0.0),
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        // A point has no surface to hit and no normal to report
        if self.radius == 0.0 {
            return None;
        }

        let diff = ray.origin() - self.center;
        let a = ray.direction().length_squared();
        let b = 2.0 * diff.dot(ray.direction());
        let c = diff.length_squared() - self.radius * self.radius;

        // A grazing ray (delta == 0) counts as a miss
        let delta = b * b - 4.0 * a * c;
        if delta <= 0.0 {
            return None;
        }

        let sqrtd = delta.sqrt();

        // Near root first; if it lies before the interval, try the back face
        let mut root = (-b - sqrtd) / (2.0 * a);
        if root < ray_t.min {
            root = (-b + sqrtd) / (2.0 * a);
        }
        if !ray_t.surrounds(root) {
            return None;
        }

        let p = ray.at(root);
        Some(HitRecord {
            t: root,
            p,
            normal: (p - self.center) / self.radius,
        })
    }
}
