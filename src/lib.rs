// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Graphics-math allowances
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::multiple_crate_versions)]

//! Interactive 3D black hole visualization built on wgpu.
//!
//! Umbra renders a space-time grid, a handful of luminous bodies, and a
//! static starfield around a black hole at the origin, then warps the whole
//! image with a screen-space gravitational lensing pass. An orbit camera and
//! a small set of keyboard toggles drive the scene.
//!
//! # Key entry points
//!
//! - [`lens::LensModel`] - the lens displacement falloff
//! - [`camera::OrbitCamera`] - yaw/pitch/distance orbit camera
//! - [`scene::SceneState`] - toggles and stepped lens parameters
//! - [`frame::FrameComposer`] - per-frame render parameter assembly
//! - [`engine::UmbraEngine`] - the rendering engine (GPU side)
//! - [`options::Options`] - runtime configuration with TOML presets
//!
//! # Architecture
//!
//! The core (camera, lens model, scene state, frame composer) is pure,
//! synchronous math with no GPU dependency, exercised directly by unit
//! tests. Each frame the engine feeds input-driven state through the frame
//! composer and runs three GPU passes: scene geometry into an offscreen
//! color target, a fullscreen lensing warp, and a glow/horizon overlay.

pub mod camera;
pub mod engine;
pub mod frame;
pub mod gpu;
pub mod input;
pub mod lens;
pub mod options;
pub mod renderer;
pub mod scene;
pub mod util;

mod error;
#[cfg(feature = "viewer")]
mod viewer;

pub use engine::{UmbraCommand, UmbraEngine};
pub use error::UmbraError;
pub use input::{InputEvent, InputProcessor, MouseButton};
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
