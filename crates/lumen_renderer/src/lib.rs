//! Lumen renderer - CPU ray tracing with direct lighting.
//!
//! Casts one primary ray per pixel into a scene of spheres, planes,
//! triangles and triangle meshes, then shades the closest hit with every
//! light in the scene (optionally shadowed). Single bounce only.

mod brdf;
mod camera;
mod hittable;
mod light;
mod material;
mod mesh;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub mod demo;
pub mod obj;
pub mod output;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable};
pub use light::Light;
pub use material::{colors, Color, Material, MaterialId};
pub use mesh::TriangleMesh;
pub use obj::{MeshError, MeshResult};
pub use output::{OutputError, OutputResult};
pub use plane::Plane;
pub use renderer::{
    max_to_one, pack_color, primary_ray, shade_hit, LightingMode, RenderConfig, Renderer,
    SHADOW_OFFSET,
};
pub use scene::Scene;
pub use sphere::Sphere;
pub use triangle::{CullMode, Triangle};

/// Re-export common math types from lumen_math
pub use lumen_math::{Aabb, Mat4, Ray, Transform, Vec3};
