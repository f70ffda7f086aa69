//! Indexed triangle mesh with a model transform.
//!
//! Positions and face normals are stored in model space. World-space copies
//! and the world AABB are cached and only refreshed by
//! [`TriangleMesh::update_transforms`], so a mesh must be updated after any
//! transform change and before it is rendered.

use crate::hittable::{HitRecord, Hittable};
use crate::{CullMode, MaterialId, Triangle};
use lumen_math::{Aabb, Mat4Ext, Ray, Transform, Vec3};

/// A triangle mesh tested with a single bounding box and a linear scan.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    /// Model-space vertex positions
    positions: Vec<Vec3>,
    /// Model-space face normals, one per triangle
    normals: Vec<Vec3>,
    /// Triangle indices (every 3 indices form a triangle)
    indices: Vec<u32>,
    pub cull_mode: CullMode,
    pub material: MaterialId,
    transform: Transform,
    /// Model-space bounds
    bounds: Aabb,

    transformed_positions: Vec<Vec3>,
    transformed_normals: Vec<Vec3>,
    transformed_bounds: Aabb,
    /// Set when the transform or geometry changed since the last update
    stale: bool,
}

impl TriangleMesh {
    /// Create an empty mesh; fill it with [`TriangleMesh::append_triangle`].
    pub fn new(cull_mode: CullMode, material: MaterialId) -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            cull_mode,
            material,
            transform: Transform::default(),
            bounds: Aabb::EMPTY,
            transformed_positions: Vec::new(),
            transformed_normals: Vec::new(),
            transformed_bounds: Aabb::EMPTY,
            stale: false,
        }
    }

    /// Create a mesh from positions and index triples.
    ///
    /// Face normals are derived from the winding; degenerate triangles
    /// produce NaN normals. The world-space caches are ready to use.
    pub fn from_indexed(
        positions: Vec<Vec3>,
        indices: Vec<u32>,
        cull_mode: CullMode,
        material: MaterialId,
    ) -> Self {
        let mut mesh = Self {
            positions,
            indices,
            ..Self::new(cull_mode, material)
        };
        mesh.calculate_normals();
        mesh.update_bounds();
        mesh.update_transforms();
        mesh
    }

    /// Append a triangle's vertices, indices and normal.
    ///
    /// Cull mode and material of the triangle are ignored; the mesh's own
    /// apply.
    pub fn append_triangle(&mut self, triangle: &Triangle) {
        let start = self.positions.len() as u32;

        self.positions
            .extend_from_slice(&[triangle.v0, triangle.v1, triangle.v2]);
        self.indices.extend_from_slice(&[start, start + 1, start + 2]);
        self.normals.push(triangle.normal);

        self.update_bounds();
        self.stale = true;
    }

    /// Recompute one face normal per index triple from the winding.
    pub fn calculate_normals(&mut self) {
        self.normals = self
            .indices
            .chunks_exact(3)
            .map(|tri| {
                let v0 = self.positions[tri[0] as usize];
                let v1 = self.positions[tri[1] as usize];
                let v2 = self.positions[tri[2] as usize];
                (v1 - v0).cross(v2 - v0).normalize()
            })
            .collect();
        self.stale = true;
    }

    /// Move the mesh by `offset` on top of its current translation.
    pub fn translate(&mut self, offset: Vec3) {
        self.transform.translate(offset);
        self.stale = true;
    }

    /// Rotate the mesh around the Y axis by `angle` radians on top of its
    /// current rotation.
    pub fn rotate_y(&mut self, angle: f32) {
        self.transform.rotate_y(angle);
        self.stale = true;
    }

    /// Replace the mesh rotation with a yaw of `angle` radians.
    pub fn set_rotation_y(&mut self, angle: f32) {
        self.transform.set_rotation_y(angle);
        self.stale = true;
    }

    /// Multiply the mesh scale component-wise.
    pub fn scale(&mut self, factor: Vec3) {
        self.transform.scale_by(factor);
        self.stale = true;
    }

    /// Recompute world-space positions, normals and bounds from the
    /// current transform.
    pub fn update_transforms(&mut self) {
        let matrix = self.transform.to_matrix();

        self.transformed_positions.clear();
        self.transformed_positions
            .extend(self.positions.iter().map(|&p| matrix.transform_point3(p)));

        self.transformed_normals.clear();
        self.transformed_normals
            .extend(self.normals.iter().map(|&n| matrix.transform_normal(n)));

        self.transformed_bounds = matrix.transform_aabb(&self.bounds);
        self.stale = false;
    }

    fn update_bounds(&mut self) {
        self.bounds = Aabb::enclosing(&self.positions);
    }

    pub fn transform(&self) -> &Transform {
        &self.transform
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn transformed_positions(&self) -> &[Vec3] {
        &self.transformed_positions
    }

    pub fn transformed_normals(&self) -> &[Vec3] {
        &self.transformed_normals
    }

    pub fn transformed_bounds(&self) -> &Aabb {
        &self.transformed_bounds
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Möller-Trumbore against one world-space index triple.
    ///
    /// Returns the distance and both edges so the caller can derive the
    /// normal of the closest triangle only.
    fn intersect_triangle(&self, ray: &Ray, tri: &[u32]) -> Option<(f32, Vec3, Vec3)> {
        let v0 = self.transformed_positions[tri[0] as usize];
        let v1 = self.transformed_positions[tri[1] as usize];
        let v2 = self.transformed_positions[tri[2] as usize];

        let edge1 = v1 - v0;
        let edge2 = v2 - v0;

        let h = ray.direction.cross(edge2);
        let a = edge1.dot(h);

        // a = -dot(edge1 x edge2, direction), so -a is the standalone
        // triangle's facing term.
        if self.cull_mode.culls(-a) {
            return None;
        }

        let f = 1.0 / a;
        let s = ray.origin - v0;
        let u = f * s.dot(h);
        if !(0.0..=1.0).contains(&u) {
            return None;
        }

        let q = s.cross(edge1);
        let v = f * ray.direction.dot(q);
        if v < 0.0 || u + v > 1.0 {
            return None;
        }

        let t = f * edge2.dot(q);
        ray.bounds.contains(t).then_some((t, edge1, edge2))
    }
}

impl Hittable for TriangleMesh {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        debug_assert!(!self.stale, "mesh queried before update_transforms");

        if !self.transformed_bounds.hit(ray) {
            return false;
        }

        let closest = self
            .indices
            .chunks_exact(3)
            .filter_map(|tri| self.intersect_triangle(ray, tri))
            .min_by(|a, b| a.0.total_cmp(&b.0));

        let Some((t, edge1, edge2)) = closest else {
            return false;
        };

        let normal = edge1.cross(edge2).normalize();
        *rec = HitRecord::record(ray, t, normal, self.material);
        true
    }

    fn does_hit(&self, ray: &Ray) -> bool {
        debug_assert!(!self.stale, "mesh queried before update_transforms");

        self.transformed_bounds.hit(ray)
            && self
                .indices
                .chunks_exact(3)
                .any(|tri| self.intersect_triangle(ray, tri).is_some())
    }
}
