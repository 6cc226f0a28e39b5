use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera projection and orbit control parameters.
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Orbit sensitivity in degrees per pixel of drag.
    pub drag_sensitivity: f32,
    /// Distance change per wheel notch.
    pub zoom_step: f32,
    /// Closest allowed orbit distance.
    pub min_distance: f32,
    /// Farthest allowed orbit distance.
    pub max_distance: f32,
    /// Pitch clamp in degrees, kept strictly short of the ±90° poles.
    pub pitch_limit: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 60.0,
            znear: 0.1,
            zfar: 200.0,
            drag_sensitivity: 0.3,
            zoom_step: 1.0,
            min_distance: 3.5,
            max_distance: 80.0,
            pitch_limit: 85.0,
        }
    }
}
