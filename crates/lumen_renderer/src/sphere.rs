//! Sphere primitive for ray tracing.

use crate::hittable::{HitRecord, Hittable};
use crate::MaterialId;
use lumen_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub material: MaterialId,
}

impl Sphere {
    /// Create a new sphere. `radius` must be positive.
    pub fn new(origin: Vec3, radius: f32, material: MaterialId) -> Self {
        Self {
            origin,
            radius,
            material,
        }
    }

    /// Distance to the first valid intersection.
    ///
    /// Uses the half-b form of the quadratic with a unit-length direction.
    /// When the near root falls before the ray's minimum (origin inside the
    /// sphere) the far root is used instead.
    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let oc = ray.origin - self.origin;
        let b = ray.direction.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = b * b - c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        let mut t = -b - sqrtd;
        if t < ray.min() {
            t = -b + sqrtd;
        }

        ray.bounds.contains(t).then_some(t)
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some(t) = self.intersect(ray) else {
            return false;
        };

        let point = ray.at(t);
        let normal = (point - self.origin) / self.radius;
        *rec = HitRecord::record(ray, t, normal, self.material);
        true
    }

    fn does_hit(&self, ray: &Ray) -> bool {
        self.intersect(ray).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_distance_and_normal() {
        let center = Vec3::new(1.0, 2.0, 30.0);
        let sphere = Sphere::new(center, 5.0, 2);
        let origin = Vec3::new(-4.0, 6.0, -10.0);
        let ray = Ray::new(origin, (center - origin).normalize());

        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, &mut rec));

        let expected = (origin - center).length() - 5.0;
        assert!((rec.t - expected).abs() < 0.001);
        assert!(rec.did_hit);
        assert_eq!(rec.material, 2);

        // Normal is the unit vector from the center to the hit point
        let radial = (rec.point - center).normalize();
        assert!((rec.normal - radial).length() < 0.001);
        assert!((rec.normal.length() - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -1.0), 0.5, 0);

        // Ray pointing away from sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let mut rec = HitRecord::default();

        assert!(!sphere.hit(&ray, &mut rec));
        assert!(!rec.did_hit);
        assert!(!sphere.does_hit(&ray));
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert!(!sphere.does_hit(&ray));
    }

    #[test]
    fn test_sphere_origin_inside_returns_exit() {
        let sphere = Sphere::new(Vec3::ZERO, 2.0, 0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        let mut rec = HitRecord::default();
        assert!(sphere.hit(&ray, &mut rec));
        assert!((rec.t - 2.0).abs() < 0.001);
        assert!((rec.normal - Vec3::X).length() < 0.001);
    }

    #[test]
    fn test_sphere_respects_max_bound() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0, 0);

        let short = Ray::with_bounds(Vec3::ZERO, Vec3::Z, Ray::DEFAULT_MIN, 5.0);
        assert!(!sphere.does_hit(&short));

        let long = Ray::with_bounds(Vec3::ZERO, Vec3::Z, Ray::DEFAULT_MIN, 9.5);
        assert!(sphere.does_hit(&long));
    }

    #[test]
    fn test_sphere_tangent_is_miss() {
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 5.0), 1.0, 0);
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Z);

        assert!(!sphere.does_hit(&ray));
    }
}
