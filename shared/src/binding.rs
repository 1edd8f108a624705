//! Binding descriptions
//!
//! A binding description pairs a physical source with the logical button
//! it drives. Descriptions are what the configuration layer stores and what
//! gets posted to the input core when the user rebinds keys; the core
//! turns them into live bindings on its next frame.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::button::ButtonCode;
use crate::scancode::Scancode;

/// Which half of a joystick axis a binding reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisDir {
    Negative,
    Positive,
}

bitflags! {
    /// Joystick hat position bits.
    ///
    /// A diagonal hat reports two bits at once.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct HatPos: u8 {
        const UP = 0x01;
        const RIGHT = 0x02;
        const DOWN = 0x04;
        const LEFT = 0x08;
    }
}

/// Physical input source of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceDesc {
    /// Placeholder for an unreadable entry. Skipped on rebuild.
    Invalid,
    /// Keyboard key.
    Key(Scancode),
    /// One direction of a joystick axis.
    JoyAxis { axis: u8, dir: AxisDir },
    /// Joystick hat position(s).
    JoyHat { hat: u8, pos: HatPos },
    /// Joystick button.
    JoyButton(u8),
}

/// A (source, target) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingDesc {
    pub target: ButtonCode,
    pub source: SourceDesc,
}

impl BindingDesc {
    pub const fn new(source: SourceDesc, target: ButtonCode) -> Self {
        Self { target, source }
    }

    pub const fn key(scancode: Scancode, target: ButtonCode) -> Self {
        Self::new(SourceDesc::Key(scancode), target)
    }

    pub const fn joy_axis(axis: u8, dir: AxisDir, target: ButtonCode) -> Self {
        Self::new(SourceDesc::JoyAxis { axis, dir }, target)
    }

    pub const fn joy_hat(hat: u8, pos: HatPos, target: ButtonCode) -> Self {
        Self::new(SourceDesc::JoyHat { hat, pos }, target)
    }

    pub const fn joy_button(button: u8, target: ButtonCode) -> Self {
        Self::new(SourceDesc::JoyButton(button), target)
    }
}
