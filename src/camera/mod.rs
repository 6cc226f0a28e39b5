//! Camera system for orbiting the black hole.
//!
//! Provides the pure orbit state (yaw/pitch/distance with clamping), the
//! perspective camera it drives, and the GPU uniform plumbing.

/// Core camera struct and GPU uniform types.
pub mod core;
/// Spherical-coordinate orbit camera state.
pub mod orbit;
/// GPU buffer and bind group for the camera uniform.
pub mod rig;

pub use self::core::{Camera, CameraUniform};
pub use orbit::OrbitCamera;
pub use rig::CameraRig;
