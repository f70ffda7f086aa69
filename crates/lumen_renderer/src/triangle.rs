//! Single triangle primitive with face culling.
//!
//! Standalone triangles use a plane intersection followed by an edge test.
//! Mesh triangles use Möller-Trumbore instead (see `mesh.rs`); both apply
//! the same [`CullMode`] rule.

use crate::hittable::{HitRecord, Hittable};
use crate::MaterialId;
use lumen_math::{Ray, Vec3};
use serde::{Deserialize, Serialize};

/// Which face of a triangle rays are allowed to hit.
///
/// The front face is the one the normal points out of: a ray hits the front
/// face when `dot(normal, direction) < 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CullMode {
    /// Both faces are hit.
    #[default]
    None,
    /// Front-facing hits are rejected.
    FrontFace,
    /// Back-facing hits are rejected.
    BackFace,
}

impl CullMode {
    /// Does this mode reject a hit whose `dot(normal, direction)` is `facing`?
    #[inline]
    pub fn culls(self, facing: f32) -> bool {
        match self {
            CullMode::None => false,
            CullMode::FrontFace => facing < 0.0,
            CullMode::BackFace => facing > 0.0,
        }
    }
}

/// A triangle primitive.
///
/// Vertices wind clockwise when seen from the front face; the normal is
/// `normalize((v1 - v0) x (v2 - v0))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Pre-computed face normal (unit length)
    pub normal: Vec3,
    pub cull_mode: CullMode,
    pub material: MaterialId,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, cull_mode: CullMode, material: MaterialId) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();
        Self {
            v0,
            v1,
            v2,
            normal,
            cull_mode,
            material,
        }
    }

    fn intersect(&self, ray: &Ray) -> Option<f32> {
        let facing = self.normal.dot(ray.direction);

        // Ray is parallel to triangle
        if facing.abs() < f32::EPSILON {
            return None;
        }
        if self.cull_mode.culls(facing) {
            return None;
        }

        let t = (self.v0 - ray.origin).dot(self.normal) / facing;
        if !ray.bounds.contains(t) {
            return None;
        }

        let point = ray.at(t);
        let edges = [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)];
        let inside = edges
            .iter()
            .all(|&(start, end)| (end - start).cross(point - start).dot(self.normal) >= 0.0);

        inside.then_some(t)
    }
}

impl Hittable for Triangle {
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
