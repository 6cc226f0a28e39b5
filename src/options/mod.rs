//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera projection and sensitivities, lens
//! defaults and clamp bounds, display toggles, keybindings) are
//! consolidated here. Options serialize to/from TOML so a view preset can
//! be loaded at startup or saved from a running session.

mod camera;
mod display;
mod keybindings;
mod lens;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use keybindings::KeybindingOptions;
pub use lens::LensOptions;
use serde::{Deserialize, Serialize};

use crate::error::UmbraError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[lens]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and control parameters.
    pub camera: CameraOptions,
    /// Lensing defaults, step sizes, and clamps.
    pub lens: LensOptions,
    /// Display toggles and scene dressing.
    pub display: DisplayOptions,
    /// Keyboard binding options.
    pub keybindings: KeybindingOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UmbraError::Io`] if the file cannot be read and
    /// [`UmbraError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, UmbraError> {
        let content = std::fs::read_to_string(path).map_err(UmbraError::Io)?;
        let mut opts: Self = toml::from_str(&content)
            .map_err(|e| UmbraError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`UmbraError::OptionsParse`] if serialization fails and
    /// [`UmbraError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), UmbraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| UmbraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(UmbraError::Io)?;
        }
        std::fs::write(path, content).map_err(UmbraError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let mut parsed: Options = toml::from_str(&toml_str).unwrap();
        parsed.keybindings.rebuild_reverse_map();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[lens]
strength = 0.4
";
        let opts: Options = toml::from_str(toml_str).unwrap();
        assert_eq!(opts.lens.strength, 0.4);
        // Everything else should be default
        assert_eq!(opts.lens.radius, 0.55);
        assert_eq!(opts.camera.fovy, 60.0);
        assert!(opts.display.show_grid);
    }

    #[test]
    fn keybinding_lookup() {
        let opts = Options::default();
        assert_eq!(
            opts.keybindings.lookup("KeyG"),
            Some(KeyAction::ToggleGrid)
        );
        assert_eq!(opts.keybindings.lookup("Escape"), Some(KeyAction::Quit));
        assert_eq!(opts.keybindings.lookup("KeyQ"), Some(KeyAction::Quit));
        assert_eq!(
            opts.keybindings.lookup("NumpadAdd"),
            Some(KeyAction::IncreaseLensStrength)
        );
        assert_eq!(opts.keybindings.lookup("KeyZ"), None);
    }

    #[test]
    fn clamp_bounds_are_ordered() {
        let lens = LensOptions::default();
        assert!(lens.min_radius < lens.max_radius);
        assert!(lens.strength <= lens.max_strength);
        let cam = CameraOptions::default();
        assert!(cam.min_distance < cam.max_distance);
        assert!(cam.pitch_limit < 90.0);
    }
}
