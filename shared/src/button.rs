//! Logical button codes
//!
//! Button codes are the abstract identifiers scripts query. Their numeric
//! values are fixed: scripted content compares against them directly, and
//! the direction values double as numpad-layout directions (2 = down,
//! 4 = left, 6 = right, 8 = up).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

/// Logical button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum ButtonCode {
    /// No button. Bindings targeting it are inert.
    #[default]
    None = 0,

    Down = 2,
    Left = 4,
    Right = 6,
    Up = 8,

    A = 11,
    B = 12,
    C = 13,
    X = 14,
    Y = 15,
    Z = 16,
    L = 17,
    R = 18,

    Shift = 21,
    Ctrl = 22,
    Alt = 23,

    F5 = 25,
    F6 = 26,
    F7 = 27,
    F8 = 28,
    F9 = 29,

    // Non-standard extensions
    MouseLeft = 38,
    MouseMiddle = 39,
    MouseRight = 40,
}

impl ButtonCode {
    /// Every button except `None`, in ascending numeric order.
    pub const ALL: [ButtonCode; 23] = [
        ButtonCode::Down,
        ButtonCode::Left,
        ButtonCode::Right,
        ButtonCode::Up,
        ButtonCode::A,
        ButtonCode::B,
        ButtonCode::C,
        ButtonCode::X,
        ButtonCode::Y,
        ButtonCode::Z,
        ButtonCode::L,
        ButtonCode::R,
        ButtonCode::Shift,
        ButtonCode::Ctrl,
        ButtonCode::Alt,
        ButtonCode::F5,
        ButtonCode::F6,
        ButtonCode::F7,
        ButtonCode::F8,
        ButtonCode::F9,
        ButtonCode::MouseLeft,
        ButtonCode::MouseMiddle,
        ButtonCode::MouseRight,
    ];

    /// The four cardinal directions in resolver scan order.
    pub const DIRECTIONS: [ButtonCode; 4] = [
        ButtonCode::Down,
        ButtonCode::Left,
        ButtonCode::Right,
        ButtonCode::Up,
    ];

    /// Whether key maps may target this button. Modifiers, function keys
    /// and mouse buttons only come from the fixed bindings.
    pub const fn is_rebindable(self) -> bool {
        matches!(
            self,
            ButtonCode::Down
                | ButtonCode::Left
                | ButtonCode::Right
                | ButtonCode::Up
                | ButtonCode::A
                | ButtonCode::B
                | ButtonCode::C
                | ButtonCode::X
                | ButtonCode::Y
                | ButtonCode::Z
                | ButtonCode::L
                | ButtonCode::R
        )
    }

    /// Numeric value as seen by scripts.
    pub const fn value(self) -> i32 {
        self as i32
    }

    /// Look up a button by its numeric value.
    pub fn from_value(value: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.value() == value)
    }

    /// Canonical name, as used in binding files.
    pub const fn name(self) -> &'static str {
        match self {
            ButtonCode::None => "None",
            ButtonCode::Down => "Down",
            ButtonCode::Left => "Left",
            ButtonCode::Right => "Right",
            ButtonCode::Up => "Up",
            ButtonCode::A => "A",
            ButtonCode::B => "B",
            ButtonCode::C => "C",
            ButtonCode::X => "X",
            ButtonCode::Y => "Y",
            ButtonCode::Z => "Z",
            ButtonCode::L => "L",
            ButtonCode::R => "R",
            ButtonCode::Shift => "Shift",
            ButtonCode::Ctrl => "Ctrl",
            ButtonCode::Alt => "Alt",
            ButtonCode::F5 => "F5",
            ButtonCode::F6 => "F6",
            ButtonCode::F7 => "F7",
            ButtonCode::F8 => "F8",
            ButtonCode::F9 => "F9",
            ButtonCode::MouseLeft => "MouseLeft",
            ButtonCode::MouseMiddle => "MouseMiddle",
            ButtonCode::MouseRight => "MouseRight",
        }
    }
}

impl fmt::Display for ButtonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonCode {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "None" {
            return Ok(ButtonCode::None);
        }
        Self::ALL
            .into_iter()
            .find(|b| b.name() == s)
            .ok_or_else(|| ParseNameError::UnknownButton(s.to_string()))
    }
}

impl Serialize for ButtonCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

/// Unknown names deserialize to `None` instead of failing, so one bad
/// entry in a key map only disables that entry.
impl<'de> Deserialize<'de> for ButtonCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(s.parse().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_match_legacy_numbering() {
        assert_eq!(ButtonCode::None.value(), 0);
        assert_eq!(ButtonCode::Down.value(), 2);
        assert_eq!(ButtonCode::Up.value(), 8);
        assert_eq!(ButtonCode::A.value(), 11);
        assert_eq!(ButtonCode::Shift.value(), 21);
        assert_eq!(ButtonCode::F9.value(), 29);
        assert_eq!(ButtonCode::MouseRight.value(), 40);
    }

    #[test]
    fn test_rebindable_targets() {
        let rebindable: Vec<_> = ButtonCode::ALL
            .into_iter()
            .filter(|b| b.is_rebindable())
            .collect();
        assert_eq!(rebindable.len(), 12);
        assert_eq!(rebindable.first(), Some(&ButtonCode::Down));
        assert_eq!(rebindable.last(), Some(&ButtonCode::R));
        assert!(!ButtonCode::None.is_rebindable());
        assert!(!ButtonCode::Shift.is_rebindable());
        assert!(!ButtonCode::MouseLeft.is_rebindable());
    }

    #[test]
    fn test_from_value() {
        assert_eq!(ButtonCode::from_value(13), Some(ButtonCode::C));
        assert_eq!(ButtonCode::from_value(39), Some(ButtonCode::MouseMiddle));
        assert_eq!(ButtonCode::from_value(3), None);
        assert_eq!(ButtonCode::from_value(-1), None);
        assert_eq!(ButtonCode::from_value(0), None);
    }

    #[test]
    fn test_parse_all_names() {
        for button in ButtonCode::ALL {
            assert_eq!(button.name().parse::<ButtonCode>().ok(), Some(button));
        }
        assert!("Start".parse::<ButtonCode>().is_err());
        assert!("left".parse::<ButtonCode>().is_err());
    }
}
