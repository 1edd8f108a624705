//! Physical key scancodes
//!
//! Scancodes follow the USB HID keyboard usage numbering, so they stay
//! stable across keyboard layouts. The raw state buffers are indexed
//! directly by scancode value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseNameError;

/// Number of scancode slots in a raw keyboard snapshot.
pub const SCANCODE_COUNT: usize = 512;

/// A physical key position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Scancode(pub u16);

macro_rules! scancodes {
    ($($ident:ident = $value:literal, $name:literal;)*) => {
        impl Scancode {
            $(pub const $ident: Scancode = Scancode($value);)*
        }

        /// Named scancodes, used for (de)serialization.
        const NAMED: &[(Scancode, &str)] = &[$((Scancode($value), $name),)*];
    };
}

scancodes! {
    UNKNOWN = 0, "Unknown";

    A = 4, "A";
    B = 5, "B";
    C = 6, "C";
    D = 7, "D";
    E = 8, "E";
    F = 9, "F";
    G = 10, "G";
    H = 11, "H";
    I = 12, "I";
    J = 13, "J";
    K = 14, "K";
    L = 15, "L";
    M = 16, "M";
    N = 17, "N";
    O = 18, "O";
    P = 19, "P";
    Q = 20, "Q";
    R = 21, "R";
    S = 22, "S";
    T = 23, "T";
    U = 24, "U";
    V = 25, "V";
    W = 26, "W";
    X = 27, "X";
    Y = 28, "Y";
    Z = 29, "Z";

    DIGIT_1 = 30, "1";
    DIGIT_2 = 31, "2";
    DIGIT_3 = 32, "3";
    DIGIT_4 = 33, "4";
    DIGIT_5 = 34, "5";
    DIGIT_6 = 35, "6";
    DIGIT_7 = 36, "7";
    DIGIT_8 = 37, "8";
    DIGIT_9 = 38, "9";
    DIGIT_0 = 39, "0";

    RETURN = 40, "Return";
    ESCAPE = 41, "Escape";
    BACKSPACE = 42, "Backspace";
    TAB = 43, "Tab";
    SPACE = 44, "Space";
    MINUS = 45, "Minus";
    EQUALS = 46, "Equals";
    LEFT_BRACKET = 47, "LeftBracket";
    RIGHT_BRACKET = 48, "RightBracket";
    BACKSLASH = 49, "Backslash";
    SEMICOLON = 51, "Semicolon";
    APOSTROPHE = 52, "Apostrophe";
    GRAVE = 53, "Grave";
    COMMA = 54, "Comma";
    PERIOD = 55, "Period";
    SLASH = 56, "Slash";
    CAPS_LOCK = 57, "CapsLock";

    F1 = 58, "F1";
    F2 = 59, "F2";
    F3 = 60, "F3";
    F4 = 61, "F4";
    F5 = 62, "F5";
    F6 = 63, "F6";
    F7 = 64, "F7";
    F8 = 65, "F8";
    F9 = 66, "F9";
    F10 = 67, "F10";
    F11 = 68, "F11";
    F12 = 69, "F12";

    PRINT_SCREEN = 70, "PrintScreen";
    SCROLL_LOCK = 71, "ScrollLock";
    PAUSE = 72, "Pause";
    INSERT = 73, "Insert";
    HOME = 74, "Home";
    PAGE_UP = 75, "PageUp";
    DELETE = 76, "Delete";
    END = 77, "End";
    PAGE_DOWN = 78, "PageDown";
    RIGHT = 79, "Right";
    LEFT = 80, "Left";
    DOWN = 81, "Down";
    UP = 82, "Up";

    NUM_LOCK_CLEAR = 83, "NumLockClear";
    KP_DIVIDE = 84, "KpDivide";
    KP_MULTIPLY = 85, "KpMultiply";
    KP_MINUS = 86, "KpMinus";
    KP_PLUS = 87, "KpPlus";
    KP_ENTER = 88, "KpEnter";
    KP_1 = 89, "Kp1";
    KP_2 = 90, "Kp2";
    KP_3 = 91, "Kp3";
    KP_4 = 92, "Kp4";
    KP_5 = 93, "Kp5";
    KP_6 = 94, "Kp6";
    KP_7 = 95, "Kp7";
    KP_8 = 96, "Kp8";
    KP_9 = 97, "Kp9";
    KP_0 = 98, "Kp0";
    KP_PERIOD = 99, "KpPeriod";

    NON_US_BACKSLASH = 100, "NonUsBackslash";
    APPLICATION = 101, "Application";
    KP_EQUALS = 103, "KpEquals";

    F13 = 104, "F13";
    F14 = 105, "F14";
    F15 = 106, "F15";
    F16 = 107, "F16";
    F17 = 108, "F17";
    F18 = 109, "F18";
    F19 = 110, "F19";
    F20 = 111, "F20";
    F21 = 112, "F21";
    F22 = 113, "F22";
    F23 = 114, "F23";
    F24 = 115, "F24";

    EXECUTE = 116, "Execute";
    HELP = 117, "Help";
    MENU = 118, "Menu";
    SELECT = 119, "Select";
    MUTE = 127, "Mute";
    VOLUME_UP = 128, "VolumeUp";
    VOLUME_DOWN = 129, "VolumeDown";

    CANCEL = 155, "Cancel";
    CLEAR = 156, "Clear";
    CRSEL = 163, "CrSel";
    EXSEL = 164, "ExSel";

    KP_DECIMAL = 220, "KpDecimal";

    LCTRL = 224, "LCtrl";
    LSHIFT = 225, "LShift";
    LALT = 226, "LAlt";
    LGUI = 227, "LGui";
    RCTRL = 228, "RCtrl";
    RSHIFT = 229, "RShift";
    RALT = 230, "RAlt";
    RGUI = 231, "RGui";

    AUDIO_NEXT = 258, "AudioNext";
    AUDIO_PREV = 259, "AudioPrev";
    AUDIO_STOP = 260, "AudioStop";
    AUDIO_PLAY = 261, "AudioPlay";
    AUDIO_MUTE = 262, "AudioMute";
    MEDIA_SELECT = 263, "MediaSelect";
    MAIL = 265, "Mail";
    AC_SEARCH = 268, "AcSearch";
    AC_HOME = 269, "AcHome";
    AC_BACK = 270, "AcBack";
    AC_FORWARD = 271, "AcForward";
    AC_STOP = 272, "AcStop";
    AC_REFRESH = 273, "AcRefresh";
    SLEEP = 282, "Sleep";
}

impl Scancode {
    /// Index into a raw snapshot. Always `< SCANCODE_COUNT` for valid codes.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this scancode fits in a raw snapshot.
    pub const fn is_valid(self) -> bool {
        (self.0 as usize) < SCANCODE_COUNT
    }

    /// Human-readable name, if this scancode has one.
    pub fn name(self) -> Option<&'static str> {
        NAMED
            .iter()
            .find(|(code, _)| *code == self)
            .map(|(_, name)| *name)
    }

    /// Look up a scancode by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(code, _)| *code)
    }
}

impl fmt::Display for Scancode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "Scancode({})", self.0),
        }
    }
}

impl FromStr for Scancode {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ParseNameError::UnknownScancode(s.to_string()))
    }
}

/// Named scancodes serialize as their name, unnamed ones as the raw number.
impl Serialize for Scancode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self.name() {
            Some(name) => serializer.serialize_str(name),
            None => serializer.serialize_u16(self.0),
        }
    }
}

impl<'de> Deserialize<'de> for Scancode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct ScancodeVisitor;

        impl serde::de::Visitor<'_> for ScancodeVisitor {
            type Value = Scancode;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a key name or a scancode number")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Scancode, E> {
                Scancode::from_name(v)
                    .ok_or_else(|| E::custom(format!("Unknown key name: '{}'", v)))
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Scancode, E> {
                if v < SCANCODE_COUNT as u64 {
                    Ok(Scancode(v as u16))
                } else {
                    Err(E::custom(format!("scancode {} out of range", v)))
                }
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Scancode, E> {
                if v < 0 {
                    return Err(E::custom(format!("scancode {} out of range", v)));
                }
                self.visit_u64(v as u64)
            }
        }

        deserializer.deserialize_any(ScancodeVisitor)
    }
}
