//! The engine's complete interactive vocabulary.
//!
//! Every user-facing operation — whether triggered by a key press, mouse
//! gesture, or programmatic call — is represented as an `UmbraCommand`.
//! Consumers construct commands and pass them to
//! [`UmbraEngine::execute`](super::UmbraEngine::execute).

use glam::Vec2;

/// A discrete or parameterized operation the engine can perform.
///
/// This is the single, centralized description of what the engine can do
/// interactively. The engine never cares *how* a command was triggered —
/// keyboard, mouse, and API all look identical:
///
/// ```ignore
/// engine.execute(UmbraCommand::ToggleLensing);
/// engine.execute(UmbraCommand::Zoom { delta: 1.0 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UmbraCommand {
    // ── Camera ──────────────────────────────────────────────────────
    /// Rotate the orbit camera by `delta` pixels of mouse movement.
    RotateCamera {
        /// Horizontal and vertical drag delta.
        delta: Vec2,
    },

    /// Zoom the camera (positive = zoom in, negative = zoom out).
    Zoom {
        /// Scroll amount in wheel lines.
        delta: f32,
    },

    /// Restore the orbit camera to its startup pose.
    ResetCamera,

    // ── Scene toggles ───────────────────────────────────────────────
    /// Show or hide the space-time grid.
    ToggleGrid,

    /// Enable or disable the gravitational lensing pass.
    ToggleLensing,

    // ── Lens tuning ─────────────────────────────────────────────────
    /// Step the lens strength up by its configured increment.
    IncreaseLensStrength,

    /// Step the lens strength down by its configured increment.
    DecreaseLensStrength,

    /// Step the lens influence radius up by its configured increment.
    IncreaseLensRadius,

    /// Step the lens influence radius down by its configured increment.
    DecreaseLensRadius,

    // ── Session ─────────────────────────────────────────────────────
    /// Request a clean shutdown of the session.
    Quit,
}
