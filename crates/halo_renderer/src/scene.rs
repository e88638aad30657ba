//! Built-in scenes.

use crate::{HitSelection, HittableList, Sphere, Vec3};

/// Ground sphere plus one small sphere resting on it, one unit down -Z.
///
/// The ground is inserted first; with [`HitSelection::ReverseFirst`] the
/// small sphere is therefore tested first.
pub fn reference_scene() -> HittableList {
    reference_scene_with(HitSelection::default())
}

/// [`reference_scene`] with an explicit hit selection rule.
pub fn reference_scene_with(selection: HitSelection) -> HittableList {
    let mut world = HittableList::with_selection(selection);
    world.add(Box::new(Sphere::new(Vec3::new(0.0, -100.5, -1.0), 100.0)));
    world.add(Box::new(Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5)));
    world
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Hittable, Interval, Ray};

    #[test]
    fn test_reference_scene_contents() {
        let world = reference_scene();
        assert_eq!(world.len(), 2);
        assert_eq!(world.selection(), HitSelection::Nearest);
    }

    #[test]
    fn test_selection_rules_agree_on_primary_rays() {
        let nearest = reference_scene_with(HitSelection::Nearest);
        let reverse = reference_scene_with(HitSelection::ReverseFirst);
        let interval = Interval::new(0.01, f32::INFINITY);

        for direction in [
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::new(0.2, -0.3, -1.0),
            Vec3::new(0.0, -1.0, -1.0),
            Vec3::new(-1.5, 0.8, -1.0),
        ] {
            let ray = Ray::new(Vec3::ZERO, direction);
            assert_eq!(nearest.hit(&ray, interval), reverse.hit(&ray, interval));
        }
    }

    #[test]
    fn test_ground_below_small_sphere() {
        let world = reference_scene();
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -0.2));

        let rec = world.hit(&ray, Interval::new(0.01, f32::INFINITY)).unwrap();
        assert!(rec.normal.y > 0.99);
    }
}
