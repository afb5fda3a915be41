//! Camera pose for flight-style motion
//!
//! Coordinate convention: Z is up, the camera's local +Y axis is forward and
//! +X is right. Heading/pitch/roll are intrinsic rotations about the local Z,
//! X and Y axes in that order.

use glam::EulerRot;

use crate::core::types::{Mat4, Quat, Vec3};

/// Camera with position and orientation
pub struct Camera {
    /// World position
    pub position: Vec3,
    /// Rotation as a unit quaternion
    pub rotation: Quat,
}

impl Camera {
    /// Create a new camera at the given position, facing along +Y
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            rotation: Quat::IDENTITY,
        }
    }

    /// Build a rotation from heading/pitch/roll angles in radians
    pub fn hpr_quat(heading: f32, pitch: f32, roll: f32) -> Quat {
        Quat::from_euler(EulerRot::ZXY, heading, pitch, roll)
    }

    /// Get forward direction (positive Y in camera space)
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// Get right direction (positive X in camera space)
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::X
    }

    /// Get up direction (positive Z in camera space)
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    /// Translate along the camera's own axes
    pub fn translate_local(&mut self, offset: Vec3) {
        self.position += self.rotation * offset;
    }

    /// Compose a rotation in the camera's own frame (right-multiply) and
    /// renormalize to keep repeated composition from drifting off unit length
    pub fn rotate_local(&mut self, delta: Quat) {
        self.rotation = (self.rotation * delta).normalize();
    }

    /// Get heading/pitch/roll angles in radians
    pub fn hpr(&self) -> (f32, f32, f32) {
        self.rotation.to_euler(EulerRot::ZXY)
    }

    /// Get view matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        let rotation_matrix = Mat4::from_quat(self.rotation.conjugate());
        let translation_matrix = Mat4::from_translation(-self.position);
        rotation_matrix * translation_matrix
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_directions() {
        let camera = Camera::default();

        let forward = camera.forward();
        assert!((forward.y - 1.0).abs() < 0.001);

        let right = camera.right();
        assert!((right.x - 1.0).abs() < 0.001);

        let up = camera.up();
        assert!((up.z - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_heading_left_turns_toward_negative_x() {
        let mut camera = Camera::default();
        camera.rotate_local(Camera::hpr_quat(FRAC_PI_2, 0.0, 0.0));

        let forward = camera.forward();
        assert!((forward.x - (-1.0)).abs() < 0.001);
        assert!(forward.y.abs() < 0.001);
    }

    #[test]
    fn test_rotation_composes_in_camera_frame() {
        // Turn left 90 degrees, then pitch up 90 degrees. Pitch is about the
        // camera's own X axis, so the nose ends up pointing straight up; a
        // world-frame X rotation would have left forward in the horizontal
        // plane.
        let mut camera = Camera::default();
        camera.rotate_local(Camera::hpr_quat(FRAC_PI_2, 0.0, 0.0));
        camera.rotate_local(Camera::hpr_quat(0.0, FRAC_PI_2, 0.0));

        let forward = camera.forward();
        assert!((forward.z - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_translate_local_follows_orientation() {
        let mut camera = Camera::default();
        camera.rotate_local(Camera::hpr_quat(FRAC_PI_2, 0.0, 0.0));
        camera.translate_local(Vec3::Y * 10.0);

        assert!((camera.position.x - (-10.0)).abs() < 0.001);
        assert!(camera.position.y.abs() < 0.001);
    }

    #[test]
    fn test_hpr_round_trip() {
        let camera = Camera {
            position: Vec3::ZERO,
            rotation: Camera::hpr_quat(0.3, 0.2, 0.1),
        };

        let (h, p, r) = camera.hpr();
        assert!((h - 0.3).abs() < 0.001);
        assert!((p - 0.2).abs() < 0.001);
        assert!((r - 0.1).abs() < 0.001);
    }

    #[test]
    fn test_rotation_stays_normalized() {
        let mut camera = Camera::default();
        for _ in 0..10_000 {
            camera.rotate_local(Camera::hpr_quat(0.01, 0.02, -0.015));
        }
        assert!((camera.rotation.length() - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_view_matrix_translation() {
        let mut camera = Camera::default();
        camera.position = Vec3::new(10.0, 0.0, 0.0);

        let view = camera.view_matrix();
        let origin_in_camera = view.transform_point3(Vec3::ZERO);
        assert!((origin_in_camera.x - (-10.0)).abs() < 0.001);
    }
}
