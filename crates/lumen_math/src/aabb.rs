use crate::{Ray, Vec3};

/// Axis-Aligned Bounding Box used to reject rays before a mesh scan.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Thin axes are widened to at least this extent.
    const MIN_EXTENT: f32 = 0.0001;

    /// Create an AABB from two corner points (in any order).
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        let mut aabb = Self {
            min: a.min(b),
            max: a.max(b),
        };
        aabb.pad_to_minimums();
        aabb
    }

    /// Smallest AABB enclosing every point. Returns [`Aabb::EMPTY`] for no points.
    pub fn enclosing<'a>(points: impl IntoIterator<Item = &'a Vec3>) -> Self {
        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        let mut any = false;

        for p in points {
            min = min.min(*p);
            max = max.max(*p);
            any = true;
        }

        if !any {
            return Self::EMPTY;
        }
        Self::from_points(min, max)
    }

    /// Returns true if the box contains no points.
    pub fn is_empty(&self) -> bool {
        self.min.cmpgt(self.max).any()
    }

    /// The 8 corners of the box.
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.min, self.max);
        [
            Vec3::new(lo.x, lo.y, lo.z),
            Vec3::new(hi.x, lo.y, lo.z),
            Vec3::new(lo.x, hi.y, lo.z),
            Vec3::new(hi.x, hi.y, lo.z),
            Vec3::new(lo.x, lo.y, hi.z),
            Vec3::new(hi.x, lo.y, hi.z),
            Vec3::new(lo.x, hi.y, hi.z),
            Vec3::new(hi.x, hi.y, hi.z),
        ]
    }

    /// Slab test: does the ray's line pass through the box ahead of its origin?
    ///
    /// Intersects the per-axis `[(min - o) / d, (max - o) / d]` intervals. The
    /// ray is rejected when the result is empty or lies entirely behind the
    /// origin. The ray's own `[min, max]` bounds are not consulted.
    ///
    /// A ray parallel to an axis that starts exactly on one of that axis's
    /// faces gives `0 * inf = NaN` there; such an axis does not limit `t`.
    pub fn hit(&self, ray: &Ray) -> bool {
        let inv_dir = ray.direction.recip();
        let t1 = (self.min - ray.origin) * inv_dir;
        let t2 = (self.max - ray.origin) * inv_dir;

        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let (near, far) = (t1[axis], t2[axis]);
            if near.is_nan() || far.is_nan() {
                continue;
            }
            t_min = t_min.max(near.min(far));
            t_max = t_max.min(near.max(far));
        }

        !(t_max < 0.0 || t_max < t_min)
    }

    /// Pad axes to avoid zero-width AABBs (flat meshes).
    fn pad_to_minimums(&mut self) {
        let half = Self::MIN_EXTENT / 2.0;
        for axis in 0..3 {
            if self.max[axis] - self.min[axis] < Self::MIN_EXTENT {
                self.min[axis] -= half;
                self.max[axis] += half;
            }
        }
    }

    /// An empty box (contains nothing).
    pub const EMPTY: Aabb = Aabb {
        min: Vec3::splat(f32::INFINITY),
        max: Vec3::splat(f32::NEG_INFINITY),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_from_points() {
        let aabb = Aabb::from_points(Vec3::new(10.0, 0.0, 10.0), Vec3::new(0.0, 10.0, 0.0));

        assert_eq!(aabb.min, Vec3::ZERO);
        assert_eq!(aabb.max, Vec3::splat(10.0));
    }

    #[test]
    fn test_aabb_enclosing() {
        let points = [
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(-1.0, 4.0, 0.0),
            Vec3::new(0.5, 0.0, 7.0),
        ];
        let aabb = Aabb::enclosing(&points);

        assert_eq!(aabb.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(aabb.max, Vec3::new(1.0, 4.0, 7.0));
        assert!(Aabb::enclosing(&[] as &[Vec3]).is_empty());
    }

    #[test]
    fn test_aabb_flat_is_padded() {
        let aabb = Aabb::from_points(Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, 1.0, 0.0));

        assert!(aabb.max.z > aabb.min.z);
        assert!((aabb.max.z - aabb.min.z - 0.0001).abs() < 1e-6);
    }

    #[test]
    fn test_aabb_hit() {
        let aabb = Aabb::from_points(Vec3::splat(-1.0), Vec3::splat(1.0));

        // Ray pointing at center
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::Z);
        assert!(aabb.hit(&ray));

        // Ray pointing away
        let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::NEG_Z);
        assert!(!aabb.hit(&ray));

        // Ray missing the box
        let ray = Ray::new(Vec3::new(10.0, 0.0, 0.0), Vec3::Z);
        assert!(!aabb.hit(&ray));

        // Origin inside the box
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.6, 0.0, 0.8));
        assert!(aabb.hit(&ray));
    }

    #[test]
    fn test_aabb_hit_parallel_on_face() {
        let aabb = Aabb::from_points(Vec3::ZERO, Vec3::ONE);

        // Runs along the x = 0 face
        let ray = Ray::new(Vec3::new(0.0, 0.5, -1.0), Vec3::Z);
        assert!(aabb.hit(&ray));

        // Runs along the y = 1 face
        let ray = Ray::new(Vec3::new(0.5, 1.0, -1.0), Vec3::Z);
        assert!(aabb.hit(&ray));

        // Along an edge, both x and y on faces
        let ray = Ray::new(Vec3::new(1.0, 0.0, -1.0), Vec3::Z);
        assert!(aabb.hit(&ray));

        // Parallel but just outside
        let ray = Ray::new(Vec3::new(-0.01, 0.5, -1.0), Vec3::Z);
        assert!(!aabb.hit(&ray));

        // On the face but pointing away
        let ray = Ray::new(Vec3::new(0.0, 0.5, -1.0), Vec3::NEG_Z);
        assert!(!aabb.hit(&ray));
    }
}
