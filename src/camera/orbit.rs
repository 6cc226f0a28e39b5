//! Spherical-coordinate orbit camera.
//!
//! Yaw and pitch in degrees plus a zoom distance around a fixed target.
//! The spherical parameterization maps 2D drag deltas directly onto
//! yaw/pitch and cannot gimbal-lock as long as pitch stays short of the
//! ±90° poles, which is why the pitch clamp sits at ±85°.

use glam::{Mat4, Vec3};

use crate::options::CameraOptions;

/// Default yaw in degrees.
pub const DEFAULT_YAW: f32 = 35.0;
/// Default pitch in degrees.
pub const DEFAULT_PITCH: f32 = -15.0;
/// Default orbit distance.
pub const DEFAULT_DISTANCE: f32 = 18.0;

/// Orbit camera state: yaw/pitch/distance around a fixed world target.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    yaw: f32,
    pitch: f32,
    distance: f32,
    target: Vec3,

    drag_sensitivity: f32,
    zoom_step: f32,
    min_distance: f32,
    max_distance: f32,
    pitch_limit: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::new(&CameraOptions::default())
    }
}

impl OrbitCamera {
    /// Create a camera at the default pose, orbiting the origin, with the
    /// given sensitivities and clamp bounds.
    #[must_use]
    pub fn new(opts: &CameraOptions) -> Self {
        Self {
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            distance: DEFAULT_DISTANCE,
            target: Vec3::ZERO,
            drag_sensitivity: opts.drag_sensitivity,
            zoom_step: opts.zoom_step,
            min_distance: opts.min_distance,
            max_distance: opts.max_distance,
            pitch_limit: opts.pitch_limit,
        }
    }

    /// Re-read sensitivities and clamp bounds from options (pose is kept,
    /// but re-clamped against the new bounds).
    pub fn apply_options(&mut self, opts: &CameraOptions) {
        self.drag_sensitivity = opts.drag_sensitivity;
        self.zoom_step = opts.zoom_step;
        self.min_distance = opts.min_distance;
        self.max_distance = opts.max_distance;
        self.pitch_limit = opts.pitch_limit;
        self.pitch = self.pitch.clamp(-self.pitch_limit, self.pitch_limit);
        self.distance =
            self.distance.clamp(self.min_distance, self.max_distance);
    }

    /// Orbit in response to a mouse drag. Deltas are in pixels; yaw wraps
    /// mod 360, pitch clamps.
    pub fn apply_drag(&mut self, delta_x: f32, delta_y: f32) {
        self.yaw =
            (self.yaw + delta_x * self.drag_sensitivity).rem_euclid(360.0);
        self.pitch = (self.pitch + delta_y * self.drag_sensitivity)
            .clamp(-self.pitch_limit, self.pitch_limit);
    }

    /// Zoom in response to a wheel notch (positive delta moves closer).
    pub fn apply_zoom(&mut self, delta: f32) {
        self.distance = (self.distance - delta * self.zoom_step)
            .clamp(self.min_distance, self.max_distance);
    }

    /// Restore yaw, pitch, and distance to their startup defaults.
    pub fn reset(&mut self) {
        self.yaw = DEFAULT_YAW;
        self.pitch = DEFAULT_PITCH;
        self.distance = DEFAULT_DISTANCE;
    }

    /// Current yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Current pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current orbit distance.
    #[must_use]
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// The fixed look-at target.
    #[must_use]
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Eye position derived from the spherical coordinates.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        let dir = Vec3::new(
            pitch.cos() * yaw.sin(),
            pitch.sin(),
            pitch.cos() * yaw.cos(),
        );
        self.target + dir * self.distance
    }

    /// View matrix placing the viewer at [`Self::eye`] looking at the
    /// target with +Y up. Valid (non-degenerate) for every reachable
    /// pitch because the clamp stays short of ±90°.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pitch_stays_clamped_under_any_drag() {
        let mut cam = OrbitCamera::default();
        for _ in 0..1000 {
            cam.apply_drag(3.0, 40.0);
        }
        assert!(cam.pitch() <= 85.0);
        for _ in 0..1000 {
            cam.apply_drag(-3.0, -40.0);
        }
        assert!(cam.pitch() >= -85.0);
    }

    #[test]
    fn distance_stays_clamped_under_any_zoom() {
        let mut cam = OrbitCamera::default();
        for _ in 0..500 {
            cam.apply_zoom(5.0);
        }
        assert_eq!(cam.distance(), 3.5);
        for _ in 0..500 {
            cam.apply_zoom(-5.0);
        }
        assert_eq!(cam.distance(), 80.0);
    }

    #[test]
    fn reset_restores_exact_defaults() {
        let mut cam = OrbitCamera::default();
        cam.apply_drag(123.0, -456.0);
        cam.apply_zoom(-17.0);
        cam.reset();
        assert_eq!(cam.yaw(), DEFAULT_YAW);
        assert_eq!(cam.pitch(), DEFAULT_PITCH);
        assert_eq!(cam.distance(), DEFAULT_DISTANCE);
    }

    #[test]
    fn yaw_wraps_instead_of_growing() {
        let mut cam = OrbitCamera::default();
        for _ in 0..100 {
            cam.apply_drag(50.0, 0.0);
        }
        assert!(cam.yaw() >= 0.0 && cam.yaw() < 360.0);
    }

    #[test]
    fn view_matrix_valid_at_pitch_extremes() {
        let mut cam = OrbitCamera::default();
        for _ in 0..1000 {
            cam.apply_drag(0.0, 40.0);
        }
        let view = cam.view_matrix();
        assert!(view.is_finite());
        // A valid rigid view transform has determinant 1
        assert!((view.determinant() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn eye_sits_at_distance_from_target() {
        let cam = OrbitCamera::default();
        let d = (cam.eye() - cam.target()).length();
        assert!((d - DEFAULT_DISTANCE).abs() < 1e-4);
    }
}
