//! winit event handling
//!
//! Folds window events into the [`PlatformState`] snapshot.

use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::keyboard::scancode_from_keycode;
use super::{FingerState, MAX_FINGERS, PlatformState, mouse_button};

impl PlatformState {
    /// Apply a window event. Events that carry no input are ignored.
    pub fn handle_window_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    self.handle_key(key, event.state);
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.handle_mouse_button(*button, *state);
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.handle_cursor(position.x, position.y);
            }
            WindowEvent::Touch(touch) => {
                self.handle_touch(touch.id, touch.phase, touch.location.x, touch.location.y);
            }
            WindowEvent::Focused(false) => {
                self.release_all();
            }
            _ => {}
        }
    }

    /// Update a key from a winit physical key code.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) {
        match scancode_from_keycode(key) {
            Some(scancode) => self.set_key(scancode, state.is_pressed()),
            None => tracing::trace!("Ignoring unmapped key {:?}", key),
        }
    }

    /// Update a mouse button from a winit button.
    pub fn handle_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        let index = match button {
            MouseButton::Left => mouse_button::LEFT,
            MouseButton::Middle => mouse_button::MIDDLE,
            MouseButton::Right => mouse_button::RIGHT,
            MouseButton::Back => mouse_button::X1,
            MouseButton::Forward => mouse_button::X2,
            MouseButton::Other(_) => return,
        };
        self.set_mouse_button(index, state.is_pressed());
    }

    /// Update the cursor position (window pixels).
    pub fn handle_cursor(&mut self, x: f64, y: f64) {
        self.mouse.x = x as i32;
        self.mouse.y = y as i32;
    }

    /// Update a touch point. Finger ids are folded into the fixed slot table.
    pub fn handle_touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) {
        let slot = (id % MAX_FINGERS as u64) as usize;
        let down = matches!(phase, TouchPhase::Started | TouchPhase::Moved);
        self.touch.fingers[slot] = FingerState {
            down,
            x: x as i32,
            y: y as i32,
        };
    }
}
