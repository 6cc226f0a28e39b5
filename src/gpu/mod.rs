//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization shared by all render
//! passes.

/// wgpu device, surface, and queue initialization.
pub mod render_context;

pub use render_context::{RenderContext, RenderContextError};
