//! Render passes for the black hole scene.
//!
//! The scene passes (grid, bodies, starfield) draw into the lens pass's
//! offscreen target; the lens pass warps that image onto the swapchain
//! and the overlay pass blends the horizon disc and glow on top.

/// Star spheres and accretion disk.
pub mod bodies;
/// Space-time grid lines.
pub mod grid;
/// Screen-space lensing post-process.
pub mod lens_pass;
/// Horizon disc and glow overlay.
pub mod overlay;
/// Background starfield points.
pub mod starfield;

pub use bodies::BodiesRenderer;
pub use grid::GridRenderer;
pub use lens_pass::LensPass;
pub use overlay::OverlayPass;
pub use starfield::StarfieldRenderer;

/// Standard depth-stencil state used by all scene pipelines.
#[must_use]
pub fn depth_stencil_state() -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: wgpu::TextureFormat::Depth32Float,
        depth_write_enabled: true,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}
