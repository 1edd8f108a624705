//! Platform input snapshot
//!
//! [`PlatformState`] is the live device state the event source keeps up to
//! date between frames. The input core copies what it needs from it once per
//! frame; nothing here knows about logical buttons.

mod events;
#[cfg(feature = "gamepad")]
mod gamepad;
mod keyboard;

#[cfg(feature = "gamepad")]
pub use gamepad::GamepadPoller;
pub use keyboard::scancode_from_keycode;

use framekey_shared::{HatPos, SCANCODE_COUNT, Scancode};

/// Maximum number of tracked touch points.
pub const MAX_FINGERS: usize = 10;

/// Number of axis/hat/button slots per joystick.
pub const JOY_SLOTS: usize = 256;

/// Mouse button indices into [`MouseState::buttons`].
pub mod mouse_button {
    pub const LEFT: u8 = 1;
    pub const MIDDLE: u8 = 2;
    pub const RIGHT: u8 = 3;
    pub const X1: u8 = 4;
    pub const X2: u8 = 5;
}

/// Mouse buttons and absolute cursor position in window pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseState {
    pub buttons: [bool; 8],
    pub x: i32,
    pub y: i32,
}

impl MouseState {
    pub fn is_down(&self, button: u8) -> bool {
        self.buttons.get(button as usize).copied().unwrap_or(false)
    }
}

/// Joystick snapshot (first connected pad).
#[derive(Debug, Clone)]
pub struct JoystickState {
    /// Axis values, full signed 16-bit range
    pub axes: [i16; JOY_SLOTS],
    pub hats: [HatPos; JOY_SLOTS],
    pub buttons: [bool; JOY_SLOTS],
}

impl Default for JoystickState {
    fn default() -> Self {
        Self {
            axes: [0; JOY_SLOTS],
            hats: [HatPos::empty(); JOY_SLOTS],
            buttons: [false; JOY_SLOTS],
        }
    }
}

/// A single touch point in window pixels.
#[derive(Debug, Clone, Copy, Default)]
pub struct FingerState {
    pub down: bool,
    pub x: i32,
    pub y: i32,
}

/// Touch points, used as a mouse fallback on touch-only platforms.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchState {
    pub fingers: [FingerState; MAX_FINGERS],
    /// Set by the windowing layer when a real mouse is in use.
    pub ignore_mouse: bool,
}

impl TouchState {
    /// First finger currently touching, in slot order.
    pub fn first_down(&self) -> Option<&FingerState> {
        self.fingers.iter().find(|f| f.down)
    }
}

/// Everything the event source knows about the devices right now.
#[derive(Debug, Clone)]
pub struct PlatformState {
    pub keys: [bool; SCANCODE_COUNT],
    pub mouse: MouseState,
    pub joystick: JoystickState,
    pub touch: TouchState,
}

impl Default for PlatformState {
    fn default() -> Self {
        Self {
            keys: [false; SCANCODE_COUNT],
            mouse: MouseState::default(),
            joystick: JoystickState::default(),
            touch: TouchState::default(),
        }
    }
}

impl PlatformState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a key is down. Out-of-range scancodes are never down.
    pub fn key_down(&self, scancode: Scancode) -> bool {
        self.keys.get(scancode.index()).copied().unwrap_or(false)
    }

    /// Set a key's state. Out-of-range scancodes are ignored.
    pub fn set_key(&mut self, scancode: Scancode, down: bool) {
        if let Some(slot) = self.keys.get_mut(scancode.index()) {
            *slot = down;
        }
    }

    pub fn set_mouse_button(&mut self, button: u8, down: bool) {
        if let Some(slot) = self.mouse.buttons.get_mut(button as usize) {
            *slot = down;
        }
    }

    /// Release every key and mouse button (e.g. on focus loss).
    pub fn release_all(&mut self) {
        self.keys = [false; SCANCODE_COUNT];
        self.mouse.buttons = [false; 8];
    }
}

/// Maps window coordinates to the game's logical resolution.
///
/// Maintained by the windowing layer: `offset` is where the game image
/// starts inside the window, `ratio` is logical pixels per window pixel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    pub offset_x: i32,
    pub offset_y: i32,
    pub ratio_x: f64,
    pub ratio_y: f64,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self {
            offset_x: 0,
            offset_y: 0,
            ratio_x: 1.0,
            ratio_y: 1.0,
        }
    }
}

impl ScreenTransform {
    pub fn apply(&self, x: i32, y: i32) -> (i32, i32) {
        (
            (f64::from(x - self.offset_x) * self.ratio_x) as i32,
            (f64::from(y - self.offset_y) * self.ratio_y) as i32,
        )
    }
}
