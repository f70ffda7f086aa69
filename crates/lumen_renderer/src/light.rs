//! Point and directional lights.

use crate::Color;
use lumen_math::Vec3;

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Omnidirectional light with inverse-square falloff.
    Point {
        origin: Vec3,
        /// Radiant power, must be positive
        intensity: f32,
        color: Color,
    },
    /// Light arriving from infinitely far away along `direction`.
    Directional {
        /// Unit direction the light travels in
        direction: Vec3,
        intensity: f32,
        color: Color,
    },
}

impl Light {
    pub fn point(origin: Vec3, intensity: f32, color: Color) -> Self {
        Light::Point {
            origin,
            intensity,
            color,
        }
    }

    /// `direction` is normalized on construction.
    pub fn directional(direction: Vec3, intensity: f32, color: Color) -> Self {
        Light::Directional {
            direction: direction.normalize(),
            intensity,
            color,
        }
    }

    /// Vector from `target` towards the light.
    ///
    /// Not normalized for point lights: its length is the distance to the
    /// light. Unit length for directional lights.
    pub fn direction_to_light(&self, target: Vec3) -> Vec3 {
        match *self {
            Light::Point { origin, .. } => origin - target,
            Light::Directional { direction, .. } => -direction,
        }
    }

    /// Distance from `target` to the light; infinite for directional lights.
    pub fn distance(&self, target: Vec3) -> f32 {
        match *self {
            Light::Point { origin, .. } => origin.distance(target),
            Light::Directional { .. } => f32::INFINITY,
        }
    }

    /// Incident radiance at `target`, ignoring occlusion.
    pub fn radiance(&self, target: Vec3) -> Color {
        match *self {
            Light::Point {
                origin,
                intensity,
                color,
            } => color * (intensity / origin.distance_squared(target)),
            Light::Directional {
                intensity, color, ..
            } => color * intensity,
        }
    }
}
