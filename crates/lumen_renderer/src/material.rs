//! Surface materials.

use crate::{brdf, HitRecord};
use lumen_math::Vec3;

/// Color type alias (linear RGB, typically 0-1)
pub type Color = Vec3;

/// Index of a material in the scene's material list.
pub type MaterialId = usize;

/// Named colors for scene setup.
pub mod colors {
    use super::Color;

    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);
}

/// How a surface reflects light arriving from a light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Material {
    /// Constant color, independent of lighting geometry.
    SolidColor { color: Color },
    /// Ideal diffuse reflector.
    Lambert {
        albedo: Color,
        /// Diffuse reflectance coefficient in [0, 1]
        diffuse_reflectance: f32,
    },
    /// Microfacet model with a metalness workflow.
    CookTorrance {
        /// Base color for dielectrics, reflectance for metals
        albedo: Color,
        /// 0 = dielectric, 1 = metal
        metalness: f32,
        /// (0, 1], smaller is smoother
        roughness: f32,
    },
}

impl Material {
    pub fn solid_color(color: Color) -> Self {
        Material::SolidColor { color }
    }

    pub fn lambert(albedo: Color, diffuse_reflectance: f32) -> Self {
        Material::Lambert {
            albedo,
            diffuse_reflectance,
        }
    }

    /// Roughness of exactly 0 is not supported.
    pub fn cook_torrance(albedo: Color, metalness: f32, roughness: f32) -> Self {
        Material::CookTorrance {
            albedo,
            metalness: metalness.clamp(0.0, 1.0),
            roughness,
        }
    }

    /// Evaluate the BRDF at a hit.
    ///
    /// `light_dir` points from the hit towards the light, `view_dir` from the
    /// hit towards the viewer; both are unit length.
    pub fn shade(&self, hit: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color {
        match *self {
            Material::SolidColor { color } => color,
            Material::Lambert {
                albedo,
                diffuse_reflectance,
            } => brdf::lambert(diffuse_reflectance, albedo),
            Material::CookTorrance {
                albedo,
                metalness,
                roughness,
            } => brdf::cook_torrance(hit.normal, light_dir, view_dir, albedo, metalness, roughness),
        }
    }
}

impl Default for Material {
    /// The scene's reserved material 0: solid red.
    fn default() -> Self {
        Material::solid_color(colors::RED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn hit_facing_up() -> HitRecord {
        HitRecord {
            normal: Vec3::Y,
            did_hit: true,
            t: 1.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_solid_color_ignores_geometry() {
        let material = Material::solid_color(colors::BLUE);
        let hit = hit_facing_up();

        assert_eq!(material.shade(&hit, Vec3::Y, Vec3::Y), colors::BLUE);
        assert_eq!(material.shade(&hit, Vec3::NEG_Y, Vec3::X), colors::BLUE);
    }

    #[test]
    fn test_lambert_shade() {
        let material = Material::lambert(Color::new(0.49, 0.57, 0.57), 1.0);
        let c = material.shade(&hit_facing_up(), Vec3::Y, Vec3::X);

        assert!((c - Color::new(0.49, 0.57, 0.57) / PI).length() < 1e-6);
    }

    #[test]
    fn test_cook_torrance_shade_uses_normal() {
        let material = Material::cook_torrance(Color::new(0.972, 0.960, 0.915), 1.0, 0.6);
        let l = Vec3::new(0.0, 0.8, 0.6);
        let v = Vec3::new(0.0, 0.8, -0.6);

        let lit = material.shade(&hit_facing_up(), l, v);
        let expected = brdf::cook_torrance(Vec3::Y, l, v, Color::new(0.972, 0.960, 0.915), 1.0, 0.6);
        assert!((lit - expected).length() < 1e-6);
        assert!(lit.min_element() > 0.0);
    }

    #[test]
    fn test_default_material_is_red() {
        assert_eq!(Material::default(), Material::solid_color(colors::RED));
    }
}
