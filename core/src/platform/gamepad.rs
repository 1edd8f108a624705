//! Gamepad snapshot via gilrs
//!
//! Only the first connected gamepad drives the joystick snapshot. When it
//! disconnects, the next still-connected pad takes over.

use framekey_shared::HatPos;
use gilrs::{Axis, Button, Gilrs};

use super::JoystickState;

/// Axis slots, in the order scripts and key maps refer to them.
const AXES: [Axis; 6] = [
    Axis::LeftStickX,
    Axis::LeftStickY,
    Axis::LeftZ,
    Axis::RightStickX,
    Axis::RightStickY,
    Axis::RightZ,
];

/// Button slots, in the order scripts and key maps refer to them.
const BUTTONS: [Button; 11] = [
    Button::South,
    Button::East,
    Button::West,
    Button::North,
    Button::LeftTrigger,
    Button::RightTrigger,
    Button::Select,
    Button::Start,
    Button::Mode,
    Button::LeftThumb,
    Button::RightThumb,
];

pub struct GamepadPoller {
    /// Gilrs context (None if initialization failed)
    gilrs: Option<Gilrs>,
    active: Option<gilrs::GamepadId>,
}

impl GamepadPoller {
    pub fn new() -> Self {
        let gilrs = match Gilrs::new() {
            Ok(g) => Some(g),
            Err(e) => {
                tracing::warn!(
                    "Failed to initialize gamepad support: {}. Gamepads will not be available.",
                    e
                );
                None
            }
        };

        let mut poller = Self {
            gilrs,
            active: None,
        };
        poller.active = poller.first_connected();
        poller
    }

    /// Whether a gamepad is currently feeding the snapshot.
    pub fn is_connected(&self) -> bool {
        self.active.is_some()
    }

    /// Drain gamepad events and refresh the joystick snapshot.
    pub fn poll(&mut self, joystick: &mut JoystickState) {
        let Some(gilrs) = self.gilrs.as_mut() else {
            return;
        };

        let mut lost_active = false;
        while let Some(event) = gilrs.next_event() {
            match event.event {
                gilrs::EventType::Connected => {
                    if self.active.is_none() {
                        self.active = Some(event.id);
                        tracing::info!("Gamepad {} connected", event.id);
                    } else {
                        tracing::info!("Gamepad {} connected (inactive)", event.id);
                    }
                }
                gilrs::EventType::Disconnected => {
                    if self.active == Some(event.id) {
                        tracing::info!("Gamepad {} disconnected", event.id);
                        self.active = None;
                        lost_active = true;
                    }
                }
                _ => {}
            }
        }

        if lost_active {
            *joystick = JoystickState::default();
            self.active = self.first_connected();
        }

        if let (Some(gilrs), Some(id)) = (self.gilrs.as_ref(), self.active) {
            read_gamepad(&gilrs.gamepad(id), joystick);
        }
    }

    fn first_connected(&self) -> Option<gilrs::GamepadId> {
        let gilrs = self.gilrs.as_ref()?;
        gilrs
            .gamepads()
            .find(|(_, pad)| pad.is_connected())
            .map(|(id, _)| id)
    }
}

impl Default for GamepadPoller {
    fn default() -> Self {
        Self::new()
    }
}

/// Copy a gamepad's state into the joystick snapshot.
fn read_gamepad(gamepad: &gilrs::Gamepad<'_>, joystick: &mut JoystickState) {
    for (slot, axis) in AXES.into_iter().enumerate() {
        let value = gamepad.value(axis);
        // Snapshot Y axes grow downwards
        let value = match axis {
            Axis::LeftStickY | Axis::RightStickY => -value,
            _ => value,
        };
        joystick.axes[slot] = axis_to_i16(value);
    }

    for (slot, button) in BUTTONS.into_iter().enumerate() {
        joystick.buttons[slot] = gamepad.is_pressed(button);
    }

    let mut hat = HatPos::empty();
    hat.set(HatPos::UP, gamepad.is_pressed(Button::DPadUp));
    hat.set(HatPos::RIGHT, gamepad.is_pressed(Button::DPadRight));
    hat.set(HatPos::DOWN, gamepad.is_pressed(Button::DPadDown));
    hat.set(HatPos::LEFT, gamepad.is_pressed(Button::DPadLeft));
    joystick.hats[0] = hat;
}

/// Scale a normalized axis value to the signed 16-bit range.
fn axis_to_i16(value: f32) -> i16 {
    (value.clamp(-1.0, 1.0) * f32::from(i16::MAX)).round() as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_scaling() {
        assert_eq!(axis_to_i16(0.0), 0);
        assert_eq!(axis_to_i16(1.0), i16::MAX);
        assert_eq!(axis_to_i16(-1.0), -i16::MAX);
        assert_eq!(axis_to_i16(2.5), i16::MAX);
        assert_eq!(axis_to_i16(0.5), 16384);
    }
}
