//! BRDF building blocks for the Lambert and Cook-Torrance materials.
//!
//! Cook-Torrance uses Schlick's Fresnel, the GGX (Trowbridge-Reitz)
//! distribution and Smith's masking with the Schlick-GGX approximation.
//! Roughness is the artist value; the distribution works with
//! `alpha = roughness^2`.

use crate::Color;
use lumen_math::Vec3;
use std::f32::consts::PI;

/// Keeps denominators away from zero at grazing angles.
const MIN_DOT: f32 = 1e-4;

/// Base reflectance of a typical dielectric.
pub const DIELECTRIC_F0: f32 = 0.04;

/// Lambert diffuse: `albedo * kd / PI`.
#[inline]
pub fn lambert(kd: f32, albedo: Color) -> Color {
    albedo * kd / PI
}

/// Lambert diffuse with a per-channel reflectance.
#[inline]
pub fn lambert_tinted(kd: Color, albedo: Color) -> Color {
    kd * albedo / PI
}

/// Schlick's approximation of the Fresnel term.
///
/// `h` is the half vector, `v` the view direction, `f0` the reflectance at
/// normal incidence.
pub fn fresnel_schlick(h: Vec3, v: Vec3, f0: Color) -> Color {
    let cos_theta = h.dot(v).clamp(0.0, 1.0);
    f0 + (Color::ONE - f0) * (1.0 - cos_theta).powi(5)
}

/// GGX / Trowbridge-Reitz normal distribution.
pub fn normal_distribution_ggx(n: Vec3, h: Vec3, roughness: f32) -> f32 {
    let alpha = roughness * roughness;
    let alpha_sq = alpha * alpha;
    let n_dot_h = n.dot(h).max(0.0);

    let denom = n_dot_h * n_dot_h * (alpha_sq - 1.0) + 1.0;
    alpha_sq / (PI * denom * denom)
}

/// Schlick-GGX masking for a single direction `v`.
pub fn geometry_schlick_ggx(n: Vec3, v: Vec3, roughness: f32) -> f32 {
    let alpha = roughness * roughness;
    let k = (alpha + 1.0) * (alpha + 1.0) / 8.0;
    let n_dot_v = n.dot(v).max(0.0);

    n_dot_v / (n_dot_v * (1.0 - k) + k)
}

/// Smith's method: masking towards the viewer times shadowing towards the
/// light.
pub fn geometry_smith(n: Vec3, v: Vec3, l: Vec3, roughness: f32) -> f32 {
    geometry_schlick_ggx(n, v, roughness) * geometry_schlick_ggx(n, l, roughness)
}

/// Full Cook-Torrance BRDF: diffuse plus specular.
///
/// `l` points from the surface towards the light, `v` towards the viewer.
/// Metals (`metalness = 1`) take their reflectance from `albedo` and have no
/// diffuse lobe.
pub fn cook_torrance(
    n: Vec3,
    l: Vec3,
    v: Vec3,
    albedo: Color,
    metalness: f32,
    roughness: f32,
) -> Color {
    let f0 = Color::splat(DIELECTRIC_F0).lerp(albedo, metalness);
    let h = (v + l).normalize();

    let f = fresnel_schlick(h, v, f0);
    let d = normal_distribution_ggx(n, h, roughness);
    let g = geometry_smith(n, v, l, roughness);

    let n_dot_v = n.dot(v).max(MIN_DOT);
    let n_dot_l = n.dot(l).max(MIN_DOT);
    let specular = f * (d * g / (4.0 * n_dot_v * n_dot_l));

    let kd = (Color::ONE - f) * (1.0 - metalness);
    lambert_tinted(kd, albedo) + specular
}
