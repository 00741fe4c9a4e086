use glam::{EulerRot, Mat4, Quat, Vec3};

use crate::animation::spec::Property;

/// Spatial state of a scene target.
///
/// Position and rotation are both stored as [`Vec3`]: rotation is
/// (pitch, yaw, roll) Euler angles in radians, applied in YXZ order
/// (yaw, then pitch, then roll — the usual camera convention, forward
/// along -Z).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    /// (pitch, yaw, roll) in radians.
    pub rotation: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
        }
    }

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// Reads the given animatable property.
    #[inline]
    #[must_use]
    pub fn get(&self, property: Property) -> Vec3 {
        match property {
            Property::Position => self.position,
            Property::Rotation => self.rotation,
        }
    }

    /// Writes the given animatable property.
    #[inline]
    pub fn set(&mut self, property: Property, value: Vec3) {
        match property {
            Property::Position => self.position = value,
            Property::Rotation => self.rotation = value,
        }
    }

    /// Rotates so the local -Z axis points from `position` toward `point`.
    ///
    /// Roll is reset to zero. A degenerate direction (point at or nearly
    /// at the current position) leaves the rotation unchanged.
    pub fn look_at(&mut self, point: Vec3) {
        let dir = point - self.position;
        let len = dir.length();
        if len < 1e-6 {
            return;
        }
        let d = dir / len;
        let pitch = d.y.clamp(-1.0, 1.0).asin();
        let yaw = (-d.x).atan2(-d.z);
        self.rotation = Vec3::new(pitch, yaw, 0.0);
    }

    /// Rotation as a quaternion (YXZ Euler order).
    #[must_use]
    pub fn rotation_quat(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.rotation.y,
            self.rotation.x,
            self.rotation.z,
        )
    }

    /// World matrix of this transform (no scale in scope).
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation_quat(), self.position)
    }

    /// Unit vector along the local -Z axis.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation_quat() * Vec3::NEG_Z
    }
}
