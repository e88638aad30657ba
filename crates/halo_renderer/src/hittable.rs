//! Hittable trait and HitRecord for ray-object intersection.

use crate::Ray;
use halo_math::{Interval, Vec3};

/// Record of a ray-object intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Point of intersection
    pub p: Vec3,
    /// Outward unit normal at `p`
    pub normal: Vec3,
}

/// Trait for objects that can be hit by rays.
pub trait Hittable: Send + Sync {
    /// Test if a ray hits this object strictly inside `ray_t`.
    ///
    /// `None` is a miss, which is an ordinary outcome rather than a failure.
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord>;
}

/// How a [`HittableList`] picks among the hits of its members.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitSelection {
    /// Test every member and report the closest hit.
    #[default]
    Nearest,
    /// Walk members from last inserted to first and report the first hit,
    /// whether or not it is the closest.
    ReverseFirst,
}

/// A list of hittable objects.
pub struct HittableList {
    objects: Vec<Box<dyn Hittable>>,
    selection: HitSelection,
}

impl HittableList {
    /// Create a new empty hittable list.
    pub fn new() -> Self {
        Self::with_selection(HitSelection::default())
    }

    /// Create an empty list with an explicit hit selection rule.
    pub fn with_selection(selection: HitSelection) -> Self {
        Self {
            objects: Vec::new(),
            selection,
        }
    }

    /// Add an object to the list.
    pub fn add(&mut self, object: Box<dyn Hittable>) {
        self.objects.push(object);
    }

    /// Clear all objects from the list.
    pub fn clear(&mut self) {
        self.objects.clear();
    }

    /// Get the number of objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn selection(&self) -> HitSelection {
        self.selection
    }
}

impl Default for HittableList {
    fn default() -> Self {
        Self::new()
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord> {
        match self.selection {
            HitSelection::Nearest => {
                let mut closest: Option<HitRecord> = None;

                for object in &self.objects {
                    let interval = closest.map_or(ray_t, |rec| ray_t.with_max(rec.t));
                    if let Some(rec) = object.hit(ray, interval) {
                        closest = Some(rec);
                    }
                }

                closest
            }
            HitSelection::ReverseFirst => self
                .objects
                .iter()
                .rev()
                .find_map(|object| object.hit(ray, ray_t)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sphere;

    fn overlapping(selection: HitSelection) -> HittableList {
        let mut list = HittableList::with_selection(selection);
        // A is nearer to the origin, B sits behind it and overlaps it.
        list.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5)));
        list.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.5), 0.5)));
        list
    }

    fn forward_ray() -> Ray {
        Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0))
    }

    #[test]
    fn test_reverse_first_reports_last_inserted() {
        let list = overlapping(HitSelection::ReverseFirst);
        let rec = list
            .hit(&forward_ray(), Interval::new(0.01, f32::INFINITY))
            .expect("both spheres are in range");

        // B's near surface is at t = 1.0, A's at t = 0.5
        assert!((rec.t - 1.0).abs() < 1e-4, "got t = {}", rec.t);
    }

    #[test]
    fn test_nearest_reports_closest() {
        let list = overlapping(HitSelection::Nearest);
        let rec = list
            .hit(&forward_ray(), Interval::new(0.01, f32::INFINITY))
            .expect("both spheres are in range");

        assert!((rec.t - 0.5).abs() < 1e-4, "got t = {}", rec.t);
    }

    #[test]
    fn test_nearest_is_independent_of_insertion_order() {
        let mut list = HittableList::new();
        list.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.5), 0.5)));
        list.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5)));

        let rec = list
            .hit(&forward_ray(), Interval::new(0.01, f32::INFINITY))
            .unwrap();
        assert!((rec.t - 0.5).abs() < 1e-4);
    }

    #[test]
    fn test_empty_list_misses() {
        let list = HittableList::new();
        assert!(list.is_empty());
        assert!(list.hit(&forward_ray(), Interval::new(0.01, f32::INFINITY)).is_none());
    }

    #[test]
    fn test_list_miss() {
        for selection in [HitSelection::Nearest, HitSelection::ReverseFirst] {
            let list = overlapping(selection);
            let ray = Ray::new(Vec3::ZERO, Vec3::Y);
            assert!(list.hit(&ray, Interval::new(0.01, f32::INFINITY)).is_none());
        }
    }

    #[test]
    fn test_clear() {
        let mut list = overlapping(HitSelection::Nearest);
        assert_eq!(list.len(), 2);
        list.clear();
        assert!(list.is_empty());
    }
}
