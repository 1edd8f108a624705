//! Windows-style virtual-key codes
//!
//! Scripts written against the Win32 keyboard API query keys by virtual-key
//! code. Most codes name a physical key and are answered from the raw
//! scancode buffers; the generic modifier and mouse codes are answered from
//! the logical buttons instead.

use framekey_shared::{ButtonCode, Scancode};

use crate::platform::{PlatformState, mouse_button};

/// Value reported for a held key by the async query.
pub const KEY_DOWN: u16 = 0x8000;

/// Per-key value written into a keyboard state dump.
pub const KEY_STATE_DOWN: u8 = 0x80;

/// What a virtual-key code refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VirtualKey {
    /// Answered from a logical button.
    Logical(ButtonCode),
    /// Answered from the raw scancode buffers.
    Raw(Scancode),
}

/// Resolve a virtual-key code. Unmapped codes return `None`.
pub fn resolve_vkey(vkey: i32) -> Option<VirtualKey> {
    let logical = match vkey {
        0x01 => Some(ButtonCode::MouseLeft),
        0x02 => Some(ButtonCode::MouseRight),
        0x04 => Some(ButtonCode::MouseMiddle),
        0x10 => Some(ButtonCode::Shift),
        0x11 => Some(ButtonCode::Ctrl),
        0x12 => Some(ButtonCode::Alt),
        _ => None,
    };
    match logical {
        Some(button) => Some(VirtualKey::Logical(button)),
        None => scancode_for_vkey(vkey).map(VirtualKey::Raw),
    }
}

/// Physical key named by a virtual-key code.
pub fn scancode_for_vkey(vkey: i32) -> Option<Scancode> {
    let scancode = match vkey {
        0x03 => Scancode::CANCEL,
        0x08 => Scancode::BACKSPACE,
        0x09 => Scancode::TAB,
        0x0c => Scancode::CLEAR,
        0x0d => Scancode::RETURN,
        0x13 => Scancode::PAUSE,
        0x14 => Scancode::CAPS_LOCK,
        0x1b => Scancode::ESCAPE,
        0x20 => Scancode::SPACE,
        0x21 => Scancode::PAGE_UP,
        0x22 => Scancode::PAGE_DOWN,
        0x23 => Scancode::END,
        0x24 => Scancode::HOME,
        0x25 => Scancode::LEFT,
        0x26 => Scancode::UP,
        0x27 => Scancode::RIGHT,
        0x28 => Scancode::DOWN,
        0x29 => Scancode::SELECT,
        0x2b => Scancode::EXECUTE,
        0x2c => Scancode::PRINT_SCREEN,
        0x2d => Scancode::INSERT,
        0x2e => Scancode::DELETE,
        0x2f => Scancode::HELP,
        // '0' is last in the scancode row, '1'..'9' are contiguous
        0x30 => Scancode::DIGIT_0,
        0x31..=0x39 => Scancode(Scancode::DIGIT_1.0 + (vkey - 0x31) as u16),
        0x41..=0x5a => Scancode(Scancode::A.0 + (vkey - 0x41) as u16),
        0x5b => Scancode::LGUI,
        0x5c => Scancode::RGUI,
        0x5d => Scancode::APPLICATION,
        0x5f => Scancode::SLEEP,
        0x60 => Scancode::KP_0,
        0x61..=0x69 => Scancode(Scancode::KP_1.0 + (vkey - 0x61) as u16),
        0x6a => Scancode::KP_MULTIPLY,
        0x6b => Scancode::KP_PLUS,
        // Separator key
        0x6c => Scancode::RETURN,
        0x6d => Scancode::KP_MINUS,
        0x6e => Scancode::KP_DECIMAL,
        0x6f => Scancode::KP_DIVIDE,
        0x70..=0x7b => Scancode(Scancode::F1.0 + (vkey - 0x70) as u16),
        0x7c..=0x87 => Scancode(Scancode::F13.0 + (vkey - 0x7c) as u16),
        0x90 => Scancode::NUM_LOCK_CLEAR,
        0x91 => Scancode::SCROLL_LOCK,
        0xa0 => Scancode::LSHIFT,
        0xa1 => Scancode::RSHIFT,
        0xa2 => Scancode::LCTRL,
        0xa3 => Scancode::RCTRL,
        0xa4 => Scancode::LALT,
        0xa5 => Scancode::RALT,
        0xa6 => Scancode::AC_BACK,
        0xa7 => Scancode::AC_FORWARD,
        0xa8 => Scancode::AC_REFRESH,
        0xa9 => Scancode::AC_STOP,
        0xaa => Scancode::AC_SEARCH,
        0xac => Scancode::AC_HOME,
        0xad => Scancode::AUDIO_MUTE,
        0xae => Scancode::VOLUME_DOWN,
        0xaf => Scancode::VOLUME_UP,
        0xb0 => Scancode::AUDIO_NEXT,
        0xb1 => Scancode::AUDIO_PREV,
        0xb2 => Scancode::AUDIO_STOP,
        0xb3 => Scancode::AUDIO_PLAY,
        0xb4 => Scancode::MAIL,
        0xb5 => Scancode::MEDIA_SELECT,
        0xba => Scancode::SEMICOLON,
        0xbb => Scancode::EQUALS,
        0xbc => Scancode::COMMA,
        0xbd => Scancode::MINUS,
        0xbe => Scancode::PERIOD,
        0xbf => Scancode::SLASH,
        0xc0 => Scancode::GRAVE,
        0xdb => Scancode::LEFT_BRACKET,
        0xdc => Scancode::BACKSLASH,
        0xdd => Scancode::RIGHT_BRACKET,
        0xde => Scancode::APOSTROPHE,
        0xf7 => Scancode::CRSEL,
        0xf8 => Scancode::EXSEL,
        0xfa => Scancode::AUDIO_PLAY,
        0xfe => Scancode::CLEAR,
        _ => return None,
    };
    Some(scancode)
}

/// Live state of a virtual key, bypassing the per-frame buffers.
///
/// Returns [`KEY_DOWN`] when held and 0 otherwise. The generic modifier
/// codes accept either side.
pub fn async_key_state(platform: &PlatformState, vkey: i32) -> u16 {
    let down = match vkey {
        0x10 => platform.key_down(Scancode::LSHIFT) || platform.key_down(Scancode::RSHIFT),
        0x11 => platform.key_down(Scancode::LCTRL) || platform.key_down(Scancode::RCTRL),
        0x12 => platform.key_down(Scancode::LALT) || platform.key_down(Scancode::RALT),
        0x01 => platform.mouse.is_down(mouse_button::LEFT),
        0x02 => platform.mouse.is_down(mouse_button::RIGHT),
        0x04 => platform.mouse.is_down(mouse_button::MIDDLE),
        _ => scancode_for_vkey(vkey).is_some_and(|sc| platform.key_down(sc)),
    };
    if down { KEY_DOWN } else { 0 }
}

/// Snapshot of every virtual key in Win32 keyboard-state layout.
///
/// Entry 0 is never written.
pub fn keyboard_state(platform: &PlatformState) -> [u8; 256] {
    let mut state = [0u8; 256];
    for (vkey, slot) in (0i32..).zip(state.iter_mut()).skip(1) {
        if async_key_state(platform, vkey) != 0 {
            *slot = KEY_STATE_DOWN;
        }
    }
    state
}
