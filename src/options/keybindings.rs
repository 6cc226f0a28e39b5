use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
///
/// Key strings use the `winit::keyboard::KeyCode` debug format (`"KeyG"`,
/// `"Escape"`, `"BracketLeft"`). An action may carry several bindings, so
/// `Escape` and `Q` can both quit and `+` works on the numpad too.
pub struct KeybindingOptions {
    /// Maps action → key strings (e.g. `ToggleGrid` → `["KeyG"]`).
    pub bindings: HashMap<KeyAction, Vec<String>>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        let bindings = HashMap::from([
            (KeyAction::Quit, vec!["Escape".into(), "KeyQ".into()]),
            (KeyAction::ResetCamera, vec!["KeyR".into()]),
            (KeyAction::ToggleGrid, vec!["KeyG".into()]),
            (KeyAction::ToggleLensing, vec!["KeyL".into()]),
            (
                KeyAction::IncreaseLensStrength,
                vec!["Equal".into(), "NumpadAdd".into()],
            ),
            (
                KeyAction::DecreaseLensStrength,
                vec!["Minus".into(), "NumpadSubtract".into()],
            ),
            (KeyAction::DecreaseLensRadius, vec!["BracketLeft".into()]),
            (KeyAction::IncreaseLensRadius, vec!["BracketRight".into()]),
        ]);

        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }
}

impl KeybindingOptions {
    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, keys) in &self.bindings {
            for key in keys {
                let _ = self.key_to_action.insert(key.clone(), *action);
            }
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
