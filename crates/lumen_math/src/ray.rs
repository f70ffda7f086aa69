use crate::{Interval, Vec3};

/// A ray in 3D space with origin, unit direction, and parametric bounds.
///
/// Only hits with `t` inside `bounds` count as intersections. The default
/// lower bound keeps secondary rays from hitting the surface they start on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub bounds: Interval,
}

impl Ray {
    /// Default minimum hit distance.
    pub const DEFAULT_MIN: f32 = 0.0001;

    /// Default maximum hit distance.
    pub const DEFAULT_MAX: f32 = f32::MAX;

    /// Create a new ray with the default bounds `[0.0001, f32::MAX]`.
    ///
    /// `direction` is expected to be normalized.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self::with_bounds(origin, direction, Self::DEFAULT_MIN, Self::DEFAULT_MAX)
    }

    /// Create a ray with explicit `[min, max]` bounds.
    pub fn with_bounds(origin: Vec3, direction: Vec3, min: f32, max: f32) -> Self {
        Self {
            origin,
            direction,
            bounds: Interval::new(min, max),
        }
    }

    /// Lower parametric bound.
    #[inline]
    pub fn min(&self) -> f32 {
        self.bounds.min
    }

    /// Upper parametric bound.
    #[inline]
    pub fn max(&self) -> f32 {
        self.bounds.max
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_creation() {
        let origin = Vec3::new(1.0, 2.0, 3.0);
        let direction = Vec3::new(0.0, 1.0, 0.0);
        let ray = Ray::new(origin, direction);

        assert_eq!(ray.origin, origin);
        assert_eq!(ray.direction, direction);
        assert_eq!(ray.min(), Ray::DEFAULT_MIN);
        assert_eq!(ray.max(), f32::MAX);
    }

    #[test]
    fn test_ray_with_bounds() {
        let ray = Ray::with_bounds(Vec3::ZERO, Vec3::X, 0.0, 5.0);

        assert_eq!(ray.min(), 0.0);
        assert_eq!(ray.max(), 5.0);
        assert!(ray.bounds.contains(5.0));
        assert!(!ray.bounds.contains(5.1));
    }

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);

        assert_eq!(ray.at(0.0), Vec3::ZERO);
        assert_eq!(ray.at(1.0), Vec3::X);
        assert_eq!(ray.at(2.0), Vec3::new(2.0, 0.0, 0.0));
        assert_eq!(ray.at(-1.0), Vec3::new(-1.0, 0.0, 0.0));
    }
}
