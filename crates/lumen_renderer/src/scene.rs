//! Scene container: geometry, lights, materials and the camera.

use crate::hittable::{any_in, closest_in};
use crate::{Camera, Color, HitRecord, Light, Material, MaterialId, Plane, Sphere, Triangle, TriangleMesh};
use lumen_math::{Ray, Vec3};

/// Everything needed to render a frame.
///
/// Primitives are stored in one list per kind. Material 0 is always present
/// and is the fallback solid red material.
#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    camera: Camera,
    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    triangles: Vec<Triangle>,
    meshes: Vec<TriangleMesh>,
    lights: Vec<Light>,
    materials: Vec<Material>,
}

impl Scene {
    /// Create an empty scene with a default camera and material 0.
    pub fn new() -> Self {
        Self::with_name("Untitled")
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            camera: Camera::default(),
            spheres: Vec::new(),
            planes: Vec::new(),
            triangles: Vec::new(),
            meshes: Vec::new(),
            lights: Vec::new(),
            materials: vec![Material::default()],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn add_sphere(&mut self, origin: Vec3, radius: f32, material: MaterialId) -> &mut Sphere {
        push_last(&mut self.spheres, Sphere::new(origin, radius, material))
    }

    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material: MaterialId) -> &mut Plane {
        push_last(&mut self.planes, Plane::new(origin, normal, material))
    }

    pub fn add_triangle(&mut self, triangle: Triangle) -> &mut Triangle {
        push_last(&mut self.triangles, triangle)
    }

    /// Add a mesh, bringing its world-space data up to date first.
    pub fn add_triangle_mesh(&mut self, mut mesh: TriangleMesh) -> &mut TriangleMesh {
        mesh.update_transforms();
        log::debug!(
            "Scene '{}': added mesh with {} triangles",
            self.name,
            mesh.triangle_count()
        );
        push_last(&mut self.meshes, mesh)
    }

    pub fn add_point_light(&mut self, origin: Vec3, intensity: f32, color: Color) -> &mut Light {
        push_last(&mut self.lights, Light::point(origin, intensity, color))
    }

    pub fn add_directional_light(&mut self, direction: Vec3, intensity: f32, color: Color) -> &mut Light {
        push_last(&mut self.lights, Light::directional(direction, intensity, color))
    }

    /// Register a material and return its index.
    pub fn add_material(&mut self, material: Material) -> MaterialId {
        self.materials.push(material);
        self.materials.len() - 1
    }

    /// Closest hit over every primitive in the scene.
    ///
    /// Returns a record with `did_hit == false` when nothing is hit.
    pub fn closest_hit(&self, ray: &Ray) -> HitRecord {
        let mut closest = HitRecord::default();

        closest_in(&self.spheres, ray, &mut closest);
        closest_in(&self.planes, ray, &mut closest);
        closest_in(&self.triangles, ray, &mut closest);
        closest_in(&self.meshes, ray, &mut closest);

        closest
    }

    /// True if anything is hit within the ray's bounds. Stops at the first hit.
    pub fn does_hit(&self, ray: &Ray) -> bool {
        any_in(&self.spheres, ray)
            || any_in(&self.planes, ray)
            || any_in(&self.triangles, ray)
            || any_in(&self.meshes, ray)
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn meshes(&self) -> &[TriangleMesh] {
        &self.meshes
    }

    /// Mutable access for animation. Call `update_transforms` on any mesh
    /// whose transform changes before rendering.
    pub fn meshes_mut(&mut self) -> &mut [TriangleMesh] {
        &mut self.meshes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// Look up a material.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by [`Scene::add_material`] (or is not 0).
    pub fn material(&self, id: MaterialId) -> &Material {
        &self.materials[id]
    }

    /// Total number of primitives, counting each mesh triangle.
    pub fn primitive_count(&self) -> usize {
        self.spheres.len()
            + self.planes.len()
            + self.triangles.len()
            + self.meshes.iter().map(TriangleMesh::triangle_count).sum::<usize>()
    }
}

/// Push `item` and return a reference to it.
fn push_last<T>(items: &mut Vec<T>, item: T) -> &mut T {
    items.push(item);
    let last = items.len() - 1;
    &mut items[last]
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{colors, CullMode};

    fn mixed_scene() -> Scene {
        let mut scene = Scene::new();
        let gray = scene.add_material(Material::lambert(colors::GRAY, 1.0));
        let blue = scene.add_material(Material::solid_color(colors::BLUE));

        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, gray);
        scene.add_plane(Vec3::new(0.0, -1.0, 0.0), Vec3::Y, gray);
        scene.add_triangle(Triangle::new(
            Vec3::new(2.0, 0.0, 3.0),
            Vec3::new(4.0, 0.0, 3.0),
            Vec3::new(3.0, 2.0, 3.0),
            CullMode::None,
            blue,
        ));

        let mut mesh = TriangleMesh::from_indexed(
            vec![
                Vec3::new(-4.0, 0.0, 4.0),
                Vec3::new(-2.0, 0.0, 4.0),
                Vec3::new(-3.0, 2.0, 4.0),
            ],
            vec![0, 1, 2],
            CullMode::None,
            blue,
        );
        mesh.translate(Vec3::new(0.0, 0.0, 1.0));
        scene.add_triangle_mesh(mesh);
        scene
    }

    #[test]
    fn test_empty_scene() {
        let scene = Scene::default();
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);

        assert_eq!(scene.materials().len(), 1);
        assert_eq!(*scene.material(0), Material::default());
        assert!(!scene.closest_hit(&ray).did_hit);
        assert!(!scene.does_hit(&ray));
    }

    #[test]
    fn test_add_material_returns_index() {
        let mut scene = Scene::new();

        assert_eq!(scene.add_material(Material::solid_color(colors::GREEN)), 1);
        assert_eq!(scene.add_material(Material::solid_color(colors::BLUE)), 2);
        assert_eq!(*scene.material(2), Material::solid_color(colors::BLUE));
    }

    #[test]
    fn test_closest_hit_picks_nearest() {
        let mut scene = Scene::new();
        scene.add_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0, 0);
        scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, 0);
        scene.add_plane(Vec3::new(0.0, 0.0, 20.0), Vec3::NEG_Z, 0);

        let rec = scene.closest_hit(&Ray::new(Vec3::ZERO, Vec3::Z));

        assert!(rec.did_hit);
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!((rec.normal - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_closest_hit_across_kinds() {
        let scene = mixed_scene();

        let rec = scene.closest_hit(&Ray::new(Vec3::new(3.0, 0.5, 0.0), Vec3::Z));
        assert!(rec.did_hit);
        assert!((rec.t - 3.0).abs() < 1e-5);
        assert_eq!(rec.material, 2);

        // Mesh was moved from z=4 to z=5
        let rec = scene.closest_hit(&Ray::new(Vec3::new(-3.0, 0.5, 0.0), Vec3::Z));
        assert!((rec.t - 5.0).abs() < 1e-5);

        let rec = scene.closest_hit(&Ray::new(Vec3::new(0.0, 3.0, 0.0), Vec3::NEG_Y));
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert_eq!(rec.material, 1);
    }

    #[test]
    fn test_does_hit_agrees_with_closest_hit() {
        let scene = mixed_scene();
        let origins = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(3.0, 0.5, 0.0),
            Vec3::new(-3.0, 0.5, 0.0),
            Vec3::new(0.0, 5.0, 0.0),
        ];
        let directions = [
            Vec3::Z,
            Vec3::NEG_Z,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::X,
            Vec3::new(0.3, -0.2, 1.0).normalize(),
            Vec3::new(-0.5, 0.1, 1.0).normalize(),
        ];

        for origin in origins {
            for direction in directions {
                let ray = Ray::new(origin, direction);
                assert_eq!(
                    scene.does_hit(&ray),
                    scene.closest_hit(&ray).did_hit,
                    "origin {origin:?} direction {direction:?}"
                );
            }
        }
    }

    #[test]
    fn test_does_hit_respects_ray_max() {
        let mut scene = Scene::new();
        scene.add_sphere(Vec3::new(0.0, 0.0, 10.0), 1.0, 0);

        assert!(!scene.does_hit(&Ray::with_bounds(Vec3::ZERO, Vec3::Z, 0.0001, 5.0)));
        assert!(scene.does_hit(&Ray::with_bounds(Vec3::ZERO, Vec3::Z, 0.0001, 15.0)));
    }

    #[test]
    fn test_lights_and_counts() {
        let mut scene = mixed_scene();
        scene.add_point_light(Vec3::new(0.0, 5.0, 0.0), 10.0, colors::WHITE);
        scene.add_directional_light(Vec3::new(0.0, -2.0, 0.0), 1.0, colors::WHITE);

        assert_eq!(scene.lights().len(), 2);
        assert_eq!(scene.primitive_count(), 4);
    }
}
