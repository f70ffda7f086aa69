//! Hittable trait and HitRecord for ray-object intersection.

use crate::MaterialId;
use lumen_math::{Ray, Vec3};

/// Record of a ray-object intersection.
///
/// The default value means "no hit": `t` is infinite so any real hit is
/// closer, and `did_hit` is false.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Point of intersection
    pub point: Vec3,
    /// Unit surface normal at the intersection
    pub normal: Vec3,
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Index into the scene's material list
    pub material: MaterialId,
    pub did_hit: bool,
}

impl Default for HitRecord {
    fn default() -> Self {
        Self {
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            t: f32::INFINITY,
            material: 0,
            did_hit: false,
        }
    }
}

impl HitRecord {
    /// Fill in a successful hit at parameter `t` along `ray`.
    pub(crate) fn record(ray: &Ray, t: f32, normal: Vec3, material: MaterialId) -> Self {
        Self {
            point: ray.at(t),
            normal,
            t,
            material,
            did_hit: true,
        }
    }
}

/// Trait for objects that can be hit by rays.
///
/// Both methods share one intersection algorithm per primitive; `does_hit`
/// skips building the record and may stop at the first qualifying hit.
pub trait Hittable: Send + Sync {
    /// Test if the ray hits this object within the ray's bounds.
    ///
    /// Returns true if hit, and overwrites `rec` with the hit.
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool;

    /// Test if the ray hits this object anywhere within the ray's bounds.
    fn does_hit(&self, ray: &Ray) -> bool;
}

/// Keep the closest hit of `objects` in `closest`.
pub(crate) fn closest_in<T: Hittable>(objects: &[T], ray: &Ray, closest: &mut HitRecord) {
    for object in objects {
        let mut candidate = HitRecord::default();
        if object.hit(ray, &mut candidate) && candidate.t < closest.t {
            *closest = candidate;
        }
    }
}

/// Returns true as soon as one of `objects` is hit.
pub(crate) fn any_in<T: Hittable>(objects: &[T], ray: &Ray) -> bool {
    objects.iter().any(|object| object.does_hit(ray))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_no_hit() {
        let rec = HitRecord::default();

        assert!(!rec.did_hit);
        assert_eq!(rec.t, f32::INFINITY);
        assert_eq!(rec.material, 0);
    }

    #[test]
    fn test_record_fills_point() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let rec = HitRecord::record(&ray, 2.0, Vec3::NEG_Z, 3);

        assert!(rec.did_hit);
        assert_eq!(rec.point, Vec3::new(0.0, 0.0, 2.0));
        assert_eq!(rec.material, 3);
    }
}
