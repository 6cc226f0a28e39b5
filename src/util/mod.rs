//! Shared utilities for the rendering engine.

pub mod frame_timing;

pub use frame_timing::FrameTiming;
