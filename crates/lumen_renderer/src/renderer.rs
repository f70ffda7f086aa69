//! Direct-lighting renderer.
//!
//! One primary ray per pixel, shaded with every light in the scene. The
//! pixel loop runs on rayon's pool; each pixel owns one slot of the output
//! buffer, so no synchronization is needed.

use crate::output::{self, OutputResult};
use crate::{colors, Camera, Color, HitRecord, Scene};
use lumen_math::{Mat4, Ray, Vec3};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;

/// Offset along the surface normal for shadow ray origins.
pub const SHADOW_OFFSET: f32 = 0.0001;

/// Which terms of the lighting equation are shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingMode {
    /// Cosine of the incidence angle only
    ObservedArea,
    /// Incoming light only
    Radiance,
    /// Material BRDF only
    Brdf,
    /// Radiance * BRDF * cosine
    #[default]
    Combined,
}

impl LightingMode {
    /// The next mode in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            LightingMode::ObservedArea => LightingMode::Radiance,
            LightingMode::Radiance => LightingMode::Brdf,
            LightingMode::Brdf => LightingMode::Combined,
            LightingMode::Combined => LightingMode::ObservedArea,
        }
    }
}

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub lighting_mode: LightingMode,
    /// Occluded lights contribute nothing when enabled
    pub shadows_enabled: bool,
    /// Shade pixels on the rayon thread pool
    pub parallel: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lighting_mode: LightingMode::default(),
            shadows_enabled: true,
            parallel: true,
        }
    }
}

impl RenderConfig {
    pub fn toggle_shadows(&mut self) {
        self.shadows_enabled = !self.shadows_enabled;
    }

    pub fn cycle_lighting_mode(&mut self) {
        self.lighting_mode = self.lighting_mode.next();
    }
}

/// Build the primary ray through the center of pixel (`px`, `py`).
///
/// Pixel (0, 0) is the top-left corner of the image.
pub fn primary_ray(
    camera: &Camera,
    camera_to_world: &Mat4,
    px: u32,
    py: u32,
    width: u32,
    height: u32,
) -> Ray {
    let aspect_ratio = width as f32 / height as f32;
    let fov = camera.fov_value();

    let x = (2.0 * ((px as f32 + 0.5) / width as f32) - 1.0) * aspect_ratio * fov;
    let y = (1.0 - 2.0 * ((py as f32 + 0.5) / height as f32)) * fov;

    let direction = camera_to_world.transform_vector3(Vec3::new(x, y, 1.0)).normalize();
    Ray::new(camera.origin, direction)
}

/// Sum the contribution of every unoccluded light at `hit`.
///
/// The result is linear and unclamped. `hit` must come from
/// [`Scene::closest_hit`] for `ray`.
pub fn shade_hit(scene: &Scene, ray: &Ray, hit: &HitRecord, config: &RenderConfig) -> Color {
    let material = scene.material(hit.material);
    let view_dir = -ray.direction;
    let mut color = Color::ZERO;

    for light in scene.lights() {
        let light_dir = light.direction_to_light(hit.point).normalize();

        if config.shadows_enabled {
            let shadow_ray = Ray::with_bounds(
                hit.point + hit.normal * SHADOW_OFFSET,
                light_dir,
                Ray::DEFAULT_MIN,
                light.distance(hit.point),
            );
            if scene.does_hit(&shadow_ray) {
                continue;
            }
        }

        let cos_theta = hit.normal.dot(light_dir).max(0.0);

        color += match config.lighting_mode {
            LightingMode::ObservedArea => colors::WHITE * cos_theta,
            LightingMode::Radiance => light.radiance(hit.point),
            LightingMode::Brdf => material.shade(hit, light_dir, view_dir),
            LightingMode::Combined => {
                light.radiance(hit.point) * material.shade(hit, light_dir, view_dir) * cos_theta
            }
        };
    }

    color
}

/// Scale `color` down so its largest channel is at most 1, keeping hue.
#[inline]
pub fn max_to_one(color: Color) -> Color {
    let max = color.max_element();
    if max > 1.0 {
        color / max
    } else {
        color
    }
}

/// Pack a color as `0x00RRGGBB`, clamping each channel to [0, 1].
pub fn pack_color(color: Color) -> u32 {
    let r = (color.x.clamp(0.0, 1.0) * 255.0) as u8;
    let g = (color.y.clamp(0.0, 1.0) * 255.0) as u8;
    let b = (color.z.clamp(0.0, 1.0) * 255.0) as u8;
    (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Owns the output buffer and renders scenes into it.
#[derive(Debug, Clone)]
pub struct Renderer {
    width: u32,
    height: u32,
    /// Row-major packed `0x00RRGGBB` pixels
    pixels: Vec<u32>,
    config: RenderConfig,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self::with_config(width, height, RenderConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: RenderConfig) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
            config,
        }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RenderConfig {
        &mut self.config
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Render one frame of `scene` into the pixel buffer.
    ///
    /// Pixels whose primary ray misses everything are black.
    pub fn render(&mut self, scene: &Scene) {
        let start = Instant::now();

        let camera = scene.camera();
        let camera_to_world = camera.camera_to_world();
        let (width, height) = (self.width, self.height);
        let config = self.config;

        let shade_pixel = |index: usize| -> u32 {
            let px = (index % width as usize) as u32;
            let py = (index / width as usize) as u32;
            let ray = primary_ray(camera, &camera_to_world, px, py, width, height);

            let hit = scene.closest_hit(&ray);
            if !hit.did_hit {
                return 0;
            }
            pack_color(max_to_one(shade_hit(scene, &ray, &hit, &config)))
        };

        if config.parallel {
            self.pixels
                .par_iter_mut()
                .enumerate()
                .for_each(|(index, pixel)| *pixel = shade_pixel(index));
        } else {
            self.pixels
                .iter_mut()
                .enumerate()
                .for_each(|(index, pixel)| *pixel = shade_pixel(index));
        }

        log::debug!(
            "Rendered '{}' at {}x{} in {:.2?} ({:?}, shadows {})",
            scene.name(),
            width,
            height,
            start.elapsed(),
            config.lighting_mode,
            if config.shadows_enabled { "on" } else { "off" }
        );
    }

    /// Write the current pixel buffer to an image file.
    pub fn save(&self, path: impl AsRef<Path>) -> OutputResult<()> {
        output::save_pixels(path, self.width, self.height, &self.pixels)
    }
}
