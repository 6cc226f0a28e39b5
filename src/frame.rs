//! Per-frame render parameter assembly.
//!
//! The composer owns no state: every frame it reads the orbit camera and
//! scene state and produces the full set of values the rendering backend
//! needs. It performs no clamping — that is already guaranteed by the
//! components it reads — and recomputes even when nothing changed, since
//! the backend is stateless between frames.

use glam::{Mat4, Vec3};

use crate::camera::OrbitCamera;
use crate::lens::LensParameters;
use crate::options::CameraOptions;
use crate::scene::SceneState;

/// Everything the rendering backend needs for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// View matrix from the orbit camera.
    pub view: Mat4,
    /// Perspective projection matrix.
    pub projection: Mat4,
    /// Lens bundle for the post-process pass.
    pub lens: LensParameters,
    /// Whether the space-time grid is drawn this frame.
    pub grid_visible: bool,
}

/// Stateless assembler of [`FrameParams`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameComposer;

impl FrameComposer {
    /// Compose the render parameters for the current frame.
    #[must_use]
    pub fn compose(
        camera: &OrbitCamera,
        state: &SceneState,
        opts: &CameraOptions,
        aspect: f32,
    ) -> FrameParams {
        let projection = Mat4::perspective_rh(
            opts.fovy.to_radians(),
            aspect,
            opts.znear,
            opts.zfar,
        );

        FrameParams {
            view: camera.view_matrix(),
            projection,
            lens: LensParameters {
                center: Vec3::ZERO,
                strength: state.lens_strength(),
                radius: state.lens_radius(),
                enabled: state.lensing_enabled(),
            },
            grid_visible: state.grid_visible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lens_parameters_mirror_scene_state() {
        let camera = OrbitCamera::default();
        let mut state = SceneState::default();
        state.toggle_lensing();
        state.increase_radius();

        let params = FrameComposer::compose(
            &camera,
            &state,
            &CameraOptions::default(),
            1.6,
        );
        assert!(!params.lens.enabled);
        assert_eq!(params.lens.strength, state.lens_strength());
        assert_eq!(params.lens.radius, state.lens_radius());
        assert_eq!(params.lens.center, Vec3::ZERO);
    }

    #[test]
    fn grid_flag_is_copied() {
        let camera = OrbitCamera::default();
        let mut state = SceneState::default();
        let opts = CameraOptions::default();
        assert!(FrameComposer::compose(&camera, &state, &opts, 1.0)
            .grid_visible);
        state.toggle_grid();
        assert!(!FrameComposer::compose(&camera, &state, &opts, 1.0)
            .grid_visible);
    }

    #[test]
    fn view_matches_camera_and_recomputes_identically() {
        let camera = OrbitCamera::default();
        let state = SceneState::default();
        let opts = CameraOptions::default();
        let a = FrameComposer::compose(&camera, &state, &opts, 1.6);
        let b = FrameComposer::compose(&camera, &state, &opts, 1.6);
        assert_eq!(a.view, camera.view_matrix());
        assert_eq!(a, b);
    }

    #[test]
    fn projection_is_finite_perspective() {
        let camera = OrbitCamera::default();
        let state = SceneState::default();
        let params = FrameComposer::compose(
            &camera,
            &state,
            &CameraOptions::default(),
            1280.0 / 800.0,
        );
        assert!(params.projection.is_finite());
        // Perspective matrices have w-coupling on the z column
        assert_eq!(params.projection.col(2).w, -1.0);
    }
}
