//! The rendering engine and its command vocabulary.

/// Commands consumers pass to [`UmbraEngine::execute`].
pub mod command;
mod core;

pub use command::UmbraCommand;
pub use core::UmbraEngine;
