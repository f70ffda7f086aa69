//! Built-in demo scenes.
//!
//! Every scene except [`solid_spheres`] shares the same room: five planes
//! forming a 10 x 10 box open towards the camera at (0, 3, -9).

use crate::{colors, Camera, Color, CullMode, Material, MaterialId, MeshResult, Scene, Triangle, TriangleMesh};
use lumen_math::Vec3;
use std::f32::consts::TAU;
use std::path::Path;

/// Camera placement shared by the room scenes.
const ROOM_CAMERA: Vec3 = Vec3::new(0.0, 3.0, -9.0);

/// Two large solid spheres inside a colored box, seen from the origin.
pub fn solid_spheres() -> Scene {
    let mut scene = Scene::with_name("Solid Spheres");

    let red: MaterialId = 0;
    let blue = scene.add_material(Material::solid_color(colors::BLUE));
    let yellow = scene.add_material(Material::solid_color(colors::YELLOW));
    let green = scene.add_material(Material::solid_color(colors::GREEN));
    let magenta = scene.add_material(Material::solid_color(colors::MAGENTA));

    scene.add_sphere(Vec3::new(-25.0, 0.0, 100.0), 50.0, red);
    scene.add_sphere(Vec3::new(25.0, 0.0, 100.0), 50.0, blue);

    scene.add_plane(Vec3::new(-75.0, 0.0, 0.0), Vec3::X, green);
    scene.add_plane(Vec3::new(75.0, 0.0, 0.0), Vec3::NEG_X, green);
    scene.add_plane(Vec3::new(0.0, -75.0, 0.0), Vec3::Y, yellow);
    scene.add_plane(Vec3::new(0.0, 75.0, 0.0), Vec3::NEG_Y, yellow);
    scene.add_plane(Vec3::new(0.0, 0.0, 125.0), Vec3::NEG_Z, magenta);

    scene
}

/// Solid-colored spheres in a solid-colored room with one white light.
pub fn primitives() -> Scene {
    let mut scene = Scene::with_name("Primitives");
    *scene.camera_mut() = Camera::new(ROOM_CAMERA, 45.0);

    let red: MaterialId = 0;
    let blue = scene.add_material(Material::solid_color(colors::BLUE));
    let yellow = scene.add_material(Material::solid_color(colors::YELLOW));
    let green = scene.add_material(Material::solid_color(colors::GREEN));
    let magenta = scene.add_material(Material::solid_color(colors::MAGENTA));

    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, green);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X, green);
    scene.add_plane(Vec3::ZERO, Vec3::Y, yellow);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, yellow);
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, magenta);

    for (i, x) in [-1.75, 0.0, 1.75].into_iter().enumerate() {
        let (bottom, top) = if i % 2 == 0 { (red, blue) } else { (blue, red) };
        scene.add_sphere(Vec3::new(x, 1.0, 0.0), 0.75, bottom);
        scene.add_sphere(Vec3::new(x, 3.0, 0.0), 0.75, top);
    }

    scene.add_point_light(Vec3::new(0.0, 5.0, -5.0), 70.0, colors::WHITE);
    scene
}

/// Rough to smooth metal (bottom row) and plastic (top row) spheres.
pub fn lit_spheres() -> Scene {
    let mut scene = Scene::with_name("Lit Spheres");
    *scene.camera_mut() = Camera::new(ROOM_CAMERA, 45.0);

    let walls = scene.add_material(Material::lambert(Color::new(0.49, 0.57, 0.57), 1.0));
    add_room(&mut scene, walls);
    add_sphere_grid(&mut scene);
    add_three_point_lights(&mut scene);

    scene
}

/// Sphere grid plus three single-triangle meshes, one per cull mode
/// (back, front, none from left to right).
pub fn reference() -> Scene {
    let mut scene = Scene::with_name("Reference");
    *scene.camera_mut() = Camera::new(ROOM_CAMERA, 45.0);

    let walls = scene.add_material(Material::lambert(Color::new(0.49, 0.57, 0.57), 1.0));
    let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));
    add_room(&mut scene, walls);
    add_sphere_grid(&mut scene);

    // Clockwise as seen from the camera
    let base = Triangle::new(
        Vec3::new(-0.75, 1.5, 0.0),
        Vec3::new(0.75, 0.0, 0.0),
        Vec3::new(-0.75, 0.0, 0.0),
        CullMode::None,
        white,
    );

    for (cull_mode, x) in [
        (CullMode::BackFace, -1.75),
        (CullMode::FrontFace, 0.0),
        (CullMode::None, 1.75),
    ] {
        let mut mesh = TriangleMesh::new(cull_mode, white);
        mesh.append_triangle(&base);
        mesh.translate(Vec3::new(x, 4.5, 0.0));
        scene.add_triangle_mesh(mesh);
    }

    add_three_point_lights(&mut scene);
    scene
}

/// An OBJ model, scaled by two and back-face culled, standing in the room.
pub fn obj_showcase(path: impl AsRef<Path>) -> MeshResult<Scene> {
    let mut scene = Scene::with_name("OBJ Showcase");
    *scene.camera_mut() = Camera::new(ROOM_CAMERA, 45.0);

    let walls = scene.add_material(Material::lambert(Color::new(0.49, 0.57, 0.57), 1.0));
    let white = scene.add_material(Material::lambert(colors::WHITE, 1.0));
    add_room(&mut scene, walls);

    let mut mesh = TriangleMesh::from_obj(path, CullMode::BackFace, white)?;
    mesh.scale(Vec3::splat(2.0));
    scene.add_triangle_mesh(mesh);

    add_three_point_lights(&mut scene);
    Ok(scene)
}

/// Spin every mesh around its Y axis for time `total_seconds`.
///
/// The yaw swings between -PI and PI following `cos(t + 1)`.
pub fn animate(scene: &mut Scene, total_seconds: f32) {
    let yaw = (total_seconds + 1.0).cos() / 2.0 * TAU;

    for mesh in scene.meshes_mut() {
        mesh.set_rotation_y(yaw);
        mesh.update_transforms();
    }
}

fn add_room(scene: &mut Scene, material: MaterialId) {
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, material);
    scene.add_plane(Vec3::ZERO, Vec3::Y, material);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, material);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X, material);
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, material);
}

fn add_sphere_grid(scene: &mut Scene) {
    let silver = Color::new(0.972, 0.960, 0.915);
    let plastic = Color::splat(0.75);

    for (x, roughness) in [(-1.75, 1.0), (0.0, 0.6), (1.75, 0.1)] {
        let metal = scene.add_material(Material::cook_torrance(silver, 1.0, roughness));
        let dielectric = scene.add_material(Material::cook_torrance(plastic, 0.0, roughness));

        scene.add_sphere(Vec3::new(x, 1.0, 0.0), 0.75, metal);
        scene.add_sphere(Vec3::new(x, 3.0, 0.0), 0.75, dielectric);
    }
}

fn add_three_point_lights(scene: &mut Scene) {
    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45));
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, Color::new(0.34, 0.47, 0.68));
}
