use serde::{Deserialize, Serialize};

use crate::engine::UmbraCommand;

/// Discrete actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// toggle_grid = ["KeyG"]
/// quit = ["Escape", "KeyQ"]
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// End the session (exit code 0).
    Quit,
    /// Restore the orbit camera to its startup pose.
    ResetCamera,
    /// Show/hide the space-time grid.
    ToggleGrid,
    /// Enable/disable the lensing pass.
    ToggleLensing,
    /// Step lens strength up.
    IncreaseLensStrength,
    /// Step lens strength down.
    DecreaseLensStrength,
    /// Step lens radius up.
    IncreaseLensRadius,
    /// Step lens radius down.
    DecreaseLensRadius,
}

impl KeyAction {
    /// Convert to the corresponding parameterless [`UmbraCommand`].
    #[must_use]
    pub fn to_command(self) -> UmbraCommand {
        match self {
            Self::Quit => UmbraCommand::Quit,
            Self::ResetCamera => UmbraCommand::ResetCamera,
            Self::ToggleGrid => UmbraCommand::ToggleGrid,
            Self::ToggleLensing => UmbraCommand::ToggleLensing,
            Self::IncreaseLensStrength => UmbraCommand::IncreaseLensStrength,
            Self::DecreaseLensStrength => UmbraCommand::DecreaseLensStrength,
            Self::IncreaseLensRadius => UmbraCommand::IncreaseLensRadius,
            Self::DecreaseLensRadius => UmbraCommand::DecreaseLensRadius,
        }
    }
}
