//! Infinite plane primitive.

use crate::hittable::{HitRecord, Hittable};
use crate::MaterialId;
use lumen_math::{Ray, Vec3};

/// An infinite plane through `origin` with unit `normal`.
///
/// The normal is reported as given; which side is "front" is up to the
/// scene author.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material: MaterialId,
}

impl Plane {
    pub fn new(origin: Vec3, normal: Vec3, material: MaterialId) -> Self {
        Self {
            origin,
            normal,
            material,
        }
    }

    fn intersect(&self, ray: &Ray) -> Option<f32> {
        // A parallel ray divides by zero; the resulting inf/NaN fails the
        // bounds check.
        let t = (self.origin - ray.origin).dot(self.normal) / ray.direction.dot(self.normal);
        ray.bounds.surrounds(t).then_some(t)
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some(t) = self.intersect(ray) else {
            return false;
        };

        *rec = HitRecord::record(ray, t, self.normal, self.material);
        true
    }

    fn does_hit(&self, ray: &Ray) -> bool {
        self.intersect(ray).is_some()
    }
}
