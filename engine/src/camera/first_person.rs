//! First-Person Camera
//!
//! Mouse movement rotates the camera directly, with no smoothing: the
//! cursor is captured at the center of the window, so raw deltas map
//! straight to yaw/pitch. Pitch is clamped to just under +/-90 degrees to
//! keep the view matrix well-defined.
//!
//! The camera owns no position logic of its own; the simulation parks the
//! eye on top of the player every frame.

use glam::{Mat4, Vec3};

use crate::camera::raycast::Ray;

/// Mouse sensitivity in radians per pixel.
pub const MOUSE_SENSITIVITY: f32 = 0.002;

/// Pitch limit in radians (+/-89 degrees).
const PITCH_LIMIT: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// First-person camera: orientation accumulation plus projection settings.
#[derive(Clone, Debug)]
pub struct FirstPersonCamera {
    /// Eye position in world space.
    pub eye: Vec3,
    /// Horizontal angle in radians; unrestricted, wraps around.
    pub yaw: f32,
    /// Vertical angle in radians; clamped to +/-89 degrees.
    pub pitch: f32,
    /// Mouse sensitivity in radians per pixel.
    pub sensitivity: f32,
    /// Vertical field of view in radians.
    pub fov_y: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clip distance.
    pub z_near: f32,
    /// Far clip distance.
    pub z_far: f32,
}

impl FirstPersonCamera {
    /// Create a camera for the given viewport size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            eye: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            sensitivity: MOUSE_SENSITIVITY,
            fov_y: 45.0_f32.to_radians(),
            aspect: width as f32 / height as f32,
            z_near: 0.1,
            z_far: 1000.0,
        }
    }

    /// Apply a raw mouse delta in pixels.
    ///
    /// Moving the mouse right increases yaw (look right); moving it down
    /// decreases pitch (look down). Standard FPS convention.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.sensitivity;
        self.pitch = (self.pitch - dy * self.sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// The normalized look direction.
    ///
    /// Coordinate convention: +X right, +Y up, -Z forward; at yaw 0 and
    /// pitch 0 the camera looks toward -Z.
    pub fn forward(&self) -> Vec3 {
        Vec3::new(
            self.yaw.sin() * self.pitch.cos(),
            self.pitch.sin(),
            -self.yaw.cos() * self.pitch.cos(),
        )
        .normalize()
    }

    /// The camera's right direction on the horizontal plane.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize()
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Combined view-projection matrix for rendering.
    pub fn view_proj(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.eye + self.forward(), Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov_y, self.aspect, self.z_near, self.z_far);
        proj * view
    }

    /// The picking ray through the center of the screen: origin at the eye,
    /// direction along the view.
    pub fn center_ray(&self) -> Ray {
        Ray::new(self.eye, self.forward())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let camera = FirstPersonCamera::new(800, 600);
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
        assert!((camera.sensitivity - MOUSE_SENSITIVITY).abs() < 1e-6);
        assert!((camera.aspect - 800.0 / 600.0).abs() < 1e-6);
        assert!((camera.fov_y - 45.0_f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn test_forward_at_rest_is_negative_z() {
        let camera = FirstPersonCamera::new(800, 600);
        let forward = camera.forward();
        assert!(forward.x.abs() < 1e-5);
        assert!(forward.y.abs() < 1e-5);
        assert!((forward.z + 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_mouse_delta_turns_camera() {
        let mut camera = FirstPersonCamera::new(800, 600);
        camera.apply_mouse_delta(100.0, 0.0);
        assert!((camera.yaw - 0.2).abs() < 1e-5);
        assert_eq!(camera.pitch, 0.0);

        camera.apply_mouse_delta(0.0, 100.0);
        assert!((camera.pitch + 0.2).abs() < 1e-5, "down = look down");
    }

    #[test]
    fn test_pitch_clamped_to_89_degrees() {
        let mut camera = FirstPersonCamera::new(800, 600);
        camera.apply_mouse_delta(0.0, -1.0e6);
        assert!((camera.pitch - PITCH_LIMIT).abs() < 1e-5);
        camera.apply_mouse_delta(0.0, 1.0e6);
        assert!((camera.pitch + PITCH_LIMIT).abs() < 1e-5);
    }

    #[test]
    fn test_direction_vectors_orthonormal() {
        let mut camera = FirstPersonCamera::new(800, 600);
        camera.apply_mouse_delta(123.0, -45.0);
        let forward = camera.forward();
        let right = camera.right();
        assert!((forward.length() - 1.0).abs() < 1e-5);
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!(forward.dot(right).abs() < 1e-5);
        assert_eq!(right.y, 0.0, "right stays on the horizontal plane");
    }

    #[test]
    fn test_center_ray_matches_view() {
        let mut camera = FirstPersonCamera::new(800, 600);
        camera.eye = Vec3::new(1.0, 2.0, 3.0);
        camera.apply_mouse_delta(80.0, 25.0);
        let ray = camera.center_ray();
        assert_eq!(ray.origin, camera.eye);
        assert!((ray.dir - camera.forward()).length() < 1e-5);
    }
}
