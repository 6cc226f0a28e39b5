//! Converts raw platform events into engine commands.
//!
//! The `InputProcessor` owns all transient input state (cursor tracking,
//! drag detection) and the key-binding map. It is the only thing that sits
//! between raw window events and the engine's
//! [`execute`](crate::UmbraEngine::execute) method.

use glam::Vec2;

use super::event::{InputEvent, MouseButton};
use crate::engine::UmbraCommand;
use crate::options::KeybindingOptions;

/// Converts raw window events into [`UmbraCommand`]s.
///
/// # Usage
///
/// ```ignore
/// // In the event loop:
/// if let Some(cmd) = input_processor.handle_event(event) {
///     engine.execute(cmd);
/// }
///
/// if let Some(cmd) = input_processor.handle_key_press("KeyG") {
///     engine.execute(cmd);
/// }
/// ```
pub struct InputProcessor {
    /// Last cursor position in physical pixels.
    cursor_pos: Option<Vec2>,
    /// Whether the primary mouse button is currently held.
    mouse_pressed: bool,
    /// Key string → action mapping.
    key_bindings: KeybindingOptions,
}

impl InputProcessor {
    /// Create a new processor with default key bindings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor_pos: None,
            mouse_pressed: false,
            key_bindings: KeybindingOptions::default(),
        }
    }

    /// Create a processor with custom key bindings.
    #[must_use]
    pub fn with_key_bindings(key_bindings: KeybindingOptions) -> Self {
        Self {
            key_bindings,
            ..Self::new()
        }
    }

    /// Whether the primary mouse button is pressed.
    #[must_use]
    pub fn mouse_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Read-only access to the key bindings.
    #[must_use]
    pub fn key_bindings(&self) -> &KeybindingOptions {
        &self.key_bindings
    }

    /// Look up a key press and return the corresponding command, if bound.
    #[must_use]
    pub fn handle_key_press(&self, key: &str) -> Option<UmbraCommand> {
        self.key_bindings.lookup(key).map(|a| a.to_command())
    }

    /// Process a raw input event and return zero or one commands.
    pub fn handle_event(&mut self, event: InputEvent) -> Option<UmbraCommand> {
        match event {
            InputEvent::CursorMoved { x, y } => self.handle_cursor_moved(x, y),
            InputEvent::MouseButton { button, pressed } => {
                if button == MouseButton::Left {
                    self.mouse_pressed = pressed;
                }
                None
            }
            InputEvent::Scroll { delta } => {
                Some(UmbraCommand::Zoom { delta })
            }
        }
    }

    /// Cursor moved — compute the delta and orbit while dragging.
    fn handle_cursor_moved(&mut self, x: f32, y: f32) -> Option<UmbraCommand> {
        let pos = Vec2::new(x, y);
        let delta = self.cursor_pos.map(|last| pos - last);
        self.cursor_pos = Some(pos);

        // The first motion event after startup has no reference point
        let delta = delta?;
        if self.mouse_pressed && delta != Vec2::ZERO {
            return Some(UmbraCommand::RotateCamera { delta });
        }
        None
    }
}

impl Default for InputProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: true,
        }
    }

    fn release() -> InputEvent {
        InputEvent::MouseButton {
            button: MouseButton::Left,
            pressed: false,
        }
    }

    #[test]
    fn drag_rotates_only_while_pressed() {
        let mut p = InputProcessor::new();
        // Establish a reference position, no button held
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 10.0, y: 10.0 }),
            None
        );
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 20.0, y: 10.0 }),
            None
        );

        let _ = p.handle_event(press());
        let cmd = p.handle_event(InputEvent::CursorMoved { x: 25.0, y: 13.0 });
        assert_eq!(
            cmd,
            Some(UmbraCommand::RotateCamera {
                delta: Vec2::new(5.0, 3.0)
            })
        );

        let _ = p.handle_event(release());
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 30.0, y: 13.0 }),
            None
        );
    }

    #[test]
    fn first_motion_produces_no_command() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(press());
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 5.0, y: 5.0 }),
            None
        );
    }

    #[test]
    fn scroll_zooms() {
        let mut p = InputProcessor::new();
        assert_eq!(
            p.handle_event(InputEvent::Scroll { delta: 2.0 }),
            Some(UmbraCommand::Zoom { delta: 2.0 })
        );
    }

    #[test]
    fn right_button_does_not_start_a_drag() {
        let mut p = InputProcessor::new();
        let _ = p.handle_event(InputEvent::CursorMoved { x: 0.0, y: 0.0 });
        let _ = p.handle_event(InputEvent::MouseButton {
            button: MouseButton::Right,
            pressed: true,
        });
        assert_eq!(
            p.handle_event(InputEvent::CursorMoved { x: 9.0, y: 9.0 }),
            None
        );
    }

    #[test]
    fn key_presses_map_to_commands() {
        let p = InputProcessor::new();
        assert_eq!(
            p.handle_key_press("KeyL"),
            Some(UmbraCommand::ToggleLensing)
        );
        assert_eq!(p.handle_key_press("KeyQ"), Some(UmbraCommand::Quit));
        assert_eq!(
            p.handle_key_press("BracketRight"),
            Some(UmbraCommand::IncreaseLensRadius)
        );
        assert_eq!(p.handle_key_press("KeyZ"), None);
    }
}
