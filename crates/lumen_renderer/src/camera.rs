//! Pinhole camera state.
//!
//! The camera looks down its `forward` axis with +Y as world up. Its basis
//! is rebuilt from `forward` whenever a camera-to-world matrix is produced,
//! so only `forward` needs to be kept current by orientation changes.

use lumen_math::{Mat4, Vec3, TO_RADIANS};

/// Camera for generating primary rays.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin: Vec3,

    /// Full field of view angle in degrees
    fov_angle: f32,
    /// tan(fov_angle / 2), scales the image plane
    fov_value: f32,

    pub forward: Vec3,
    pub up: Vec3,
    pub right: Vec3,

    /// Accumulated rotation around X, radians
    total_pitch: f32,
    /// Accumulated rotation around Y, radians
    total_yaw: f32,
}

impl Camera {
    pub const DEFAULT_FOV: f32 = 45.0;
    pub const MIN_FOV: f32 = 10.0;
    pub const MAX_FOV: f32 = 179.0;

    /// Pitch is limited short of straight up/down so the basis stays valid.
    const MAX_PITCH: f32 = 89.0 * TO_RADIANS;

    /// Create a camera at `origin` looking down +Z.
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        Self {
            origin,
            fov_angle,
            fov_value: Self::fov_tangent(fov_angle),
            forward: Vec3::Z,
            up: Vec3::Y,
            right: Vec3::X,
            total_pitch: 0.0,
            total_yaw: 0.0,
        }
    }

    fn fov_tangent(fov_angle: f32) -> f32 {
        (fov_angle * TO_RADIANS / 2.0).tan()
    }

    pub fn fov_angle(&self) -> f32 {
        self.fov_angle
    }

    /// tan(fov / 2), always in sync with [`Camera::fov_angle`].
    pub fn fov_value(&self) -> f32 {
        self.fov_value
    }

    /// Set the field of view in degrees, clamped to `[MIN_FOV, MAX_FOV]`.
    pub fn set_fov(&mut self, fov_angle: f32) {
        self.fov_angle = fov_angle.clamp(Self::MIN_FOV, Self::MAX_FOV);
        self.fov_value = Self::fov_tangent(self.fov_angle);
    }

    /// Right and up vectors re-orthonormalized from `forward`.
    pub fn basis(&self) -> (Vec3, Vec3) {
        let right = Vec3::Y.cross(self.forward).normalize();
        let up = self.forward.cross(right).normalize();
        (right, up)
    }

    /// Refresh the stored `right`/`up` from `forward`.
    pub fn update_basis(&mut self) {
        (self.right, self.up) = self.basis();
    }

    /// Camera-to-world matrix: columns are right, up, forward and origin.
    ///
    /// Transforms the camera-space direction `(x, y, 1)` to
    /// `x * right + y * up + forward`.
    pub fn camera_to_world(&self) -> Mat4 {
        let (right, up) = self.basis();
        Mat4::from_cols(
            right.extend(0.0),
            up.extend(0.0),
            self.forward.extend(0.0),
            self.origin.extend(1.0),
        )
    }

    /// Move along the camera axes: `x` along right, `y` along world up,
    /// `z` along forward.
    pub fn translate(&mut self, offset: Vec3) {
        let (right, _) = self.basis();
        self.origin += right * offset.x + Vec3::Y * offset.y + self.forward * offset.z;
    }

    /// Add yaw (around Y) and pitch (around X), in radians, and rebuild the
    /// orientation from the accumulated angles.
    pub fn rotate(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.total_yaw += yaw_delta;
        self.total_pitch = (self.total_pitch + pitch_delta).clamp(-Self::MAX_PITCH, Self::MAX_PITCH);

        let rotation = Mat4::from_rotation_y(self.total_yaw) * Mat4::from_rotation_x(self.total_pitch);
        self.forward = rotation.transform_vector3(Vec3::Z).normalize();
        self.update_basis();
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Self::DEFAULT_FOV)
    }
}
