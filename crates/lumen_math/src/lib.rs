// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod aabb;
mod interval;
mod ray;
mod transform;

pub use aabb::Aabb;
pub use interval::Interval;
pub use ray::Ray;
pub use transform::{Mat4Ext, Transform};

/// Degrees to radians conversion factor.
pub const TO_RADIANS: f32 = std::f32::consts::PI / 180.0;
