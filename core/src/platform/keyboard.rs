//! winit key code translation

use framekey_shared::Scancode;
use winit::keyboard::KeyCode;

/// Translate a winit physical key into a scancode.
///
/// Returns `None` for keys the raw snapshot has no slot for.
pub fn scancode_from_keycode(key: KeyCode) -> Option<Scancode> {
    let code = match key {
        // Letters
        KeyCode::KeyA => Scancode::A,
        KeyCode::KeyB => Scancode::B,
        KeyCode::KeyC => Scancode::C,
        KeyCode::KeyD => Scancode::D,
        KeyCode::KeyE => Scancode::E,
        KeyCode::KeyF => Scancode::F,
        KeyCode::KeyG => Scancode::G,
        KeyCode::KeyH => Scancode::H,
        KeyCode::KeyI => Scancode::I,
        KeyCode::KeyJ => Scancode::J,
        KeyCode::KeyK => Scancode::K,
        KeyCode::KeyL => Scancode::L,
        KeyCode::KeyM => Scancode::M,
        KeyCode::KeyN => Scancode::N,
        KeyCode::KeyO => Scancode::O,
        KeyCode::KeyP => Scancode::P,
        KeyCode::KeyQ => Scancode::Q,
        KeyCode::KeyR => Scancode::R,
        KeyCode::KeyS => Scancode::S,
        KeyCode::KeyT => Scancode::T,
        KeyCode::KeyU => Scancode::U,
        KeyCode::KeyV => Scancode::V,
        KeyCode::KeyW => Scancode::W,
        KeyCode::KeyX => Scancode::X,
        KeyCode::KeyY => Scancode::Y,
        KeyCode::KeyZ => Scancode::Z,

        // Numbers
        KeyCode::Digit1 => Scancode::DIGIT_1,
        KeyCode::Digit2 => Scancode::DIGIT_2,
        KeyCode::Digit3 => Scancode::DIGIT_3,
        KeyCode::Digit4 => Scancode::DIGIT_4,
        KeyCode::Digit5 => Scancode::DIGIT_5,
        KeyCode::Digit6 => Scancode::DIGIT_6,
        KeyCode::Digit7 => Scancode::DIGIT_7,
        KeyCode::Digit8 => Scancode::DIGIT_8,
        KeyCode::Digit9 => Scancode::DIGIT_9,
        KeyCode::Digit0 => Scancode::DIGIT_0,

        // Special keys
        KeyCode::Enter => Scancode::RETURN,
        KeyCode::Escape => Scancode::ESCAPE,
        KeyCode::Backspace => Scancode::BACKSPACE,
        KeyCode::Tab => Scancode::TAB,
        KeyCode::Space => Scancode::SPACE,
        KeyCode::CapsLock => Scancode::CAPS_LOCK,
        KeyCode::PrintScreen => Scancode::PRINT_SCREEN,
        KeyCode::ScrollLock => Scancode::SCROLL_LOCK,
        KeyCode::Pause => Scancode::PAUSE,
        KeyCode::Insert => Scancode::INSERT,
        KeyCode::Home => Scancode::HOME,
        KeyCode::PageUp => Scancode::PAGE_UP,
        KeyCode::Delete => Scancode::DELETE,
        KeyCode::End => Scancode::END,
        KeyCode::PageDown => Scancode::PAGE_DOWN,
        KeyCode::ContextMenu => Scancode::APPLICATION,
        KeyCode::Help => Scancode::HELP,

        // Punctuation
        KeyCode::Minus => Scancode::MINUS,
        KeyCode::Equal => Scancode::EQUALS,
        KeyCode::BracketLeft => Scancode::LEFT_BRACKET,
        KeyCode::BracketRight => Scancode::RIGHT_BRACKET,
        KeyCode::Backslash => Scancode::BACKSLASH,
        KeyCode::IntlBackslash => Scancode::NON_US_BACKSLASH,
        KeyCode::Semicolon => Scancode::SEMICOLON,
        KeyCode::Quote => Scancode::APOSTROPHE,
        KeyCode::Backquote => Scancode::GRAVE,
        KeyCode::Comma => Scancode::COMMA,
        KeyCode::Period => Scancode::PERIOD,
        KeyCode::Slash => Scancode::SLASH,

        // Arrow keys
        KeyCode::ArrowRight => Scancode::RIGHT,
        KeyCode::ArrowLeft => Scancode::LEFT,
        KeyCode::ArrowDown => Scancode::DOWN,
        KeyCode::ArrowUp => Scancode::UP,

        // Function keys
        KeyCode::F1 => Scancode::F1,
        KeyCode::F2 => Scancode::F2,
        KeyCode::F3 => Scancode::F3,
        KeyCode::F4 => Scancode::F4,
        KeyCode::F5 => Scancode::F5,
        KeyCode::F6 => Scancode::F6,
        KeyCode::F7 => Scancode::F7,
        KeyCode::F8 => Scancode::F8,
        KeyCode::F9 => Scancode::F9,
        KeyCode::F10 => Scancode::F10,
        KeyCode::F11 => Scancode::F11,
        KeyCode::F12 => Scancode::F12,
        KeyCode::F13 => Scancode::F13,
        KeyCode::F14 => Scancode::F14,
        KeyCode::F15 => Scancode::F15,
        KeyCode::F16 => Scancode::F16,
        KeyCode::F17 => Scancode::F17,
        KeyCode::F18 => Scancode::F18,
        KeyCode::F19 => Scancode::F19,
        KeyCode::F20 => Scancode::F20,
        KeyCode::F21 => Scancode::F21,
        KeyCode::F22 => Scancode::F22,
        KeyCode::F23 => Scancode::F23,
        KeyCode::F24 => Scancode::F24,

        // Numpad
        KeyCode::NumLock => Scancode::NUM_LOCK_CLEAR,
        KeyCode::NumpadDivide => Scancode::KP_DIVIDE,
        KeyCode::NumpadMultiply => Scancode::KP_MULTIPLY,
        KeyCode::NumpadSubtract => Scancode::KP_MINUS,
        KeyCode::NumpadAdd => Scancode::KP_PLUS,
        KeyCode::NumpadEnter => Scancode::KP_ENTER,
        KeyCode::Numpad1 => Scancode::KP_1,
        KeyCode::Numpad2 => Scancode::KP_2,
        KeyCode::Numpad3 => Scancode::KP_3,
        KeyCode::Numpad4 => Scancode::KP_4,
        KeyCode::Numpad5 => Scancode::KP_5,
        KeyCode::Numpad6 => Scancode::KP_6,
        KeyCode::Numpad7 => Scancode::KP_7,
        KeyCode::Numpad8 => Scancode::KP_8,
        KeyCode::Numpad9 => Scancode::KP_9,
        KeyCode::Numpad0 => Scancode::KP_0,
        KeyCode::NumpadDecimal => Scancode::KP_PERIOD,
        KeyCode::NumpadEqual => Scancode::KP_EQUALS,

        // Modifiers
        KeyCode::ControlLeft => Scancode::LCTRL,
        KeyCode::ShiftLeft => Scancode::LSHIFT,
        KeyCode::AltLeft => Scancode::LALT,
        KeyCode::SuperLeft => Scancode::LGUI,
        KeyCode::ControlRight => Scancode::RCTRL,
        KeyCode::ShiftRight => Scancode::RSHIFT,
        KeyCode::AltRight => Scancode::RALT,
        KeyCode::SuperRight => Scancode::RGUI,

        // Media and browser keys
        KeyCode::AudioVolumeMute => Scancode::AUDIO_MUTE,
        KeyCode::AudioVolumeUp => Scancode::VOLUME_UP,
        KeyCode::AudioVolumeDown => Scancode::VOLUME_DOWN,
        KeyCode::MediaTrackNext => Scancode::AUDIO_NEXT,
        KeyCode::MediaTrackPrevious => Scancode::AUDIO_PREV,
        KeyCode::MediaStop => Scancode::AUDIO_STOP,
        KeyCode::MediaPlayPause => Scancode::AUDIO_PLAY,
        KeyCode::MediaSelect => Scancode::MEDIA_SELECT,
        KeyCode::LaunchMail => Scancode::MAIL,
        KeyCode::BrowserSearch => Scancode::AC_SEARCH,
        KeyCode::BrowserHome => Scancode::AC_HOME,
        KeyCode::BrowserBack => Scancode::AC_BACK,
        KeyCode::BrowserForward => Scancode::AC_FORWARD,
        KeyCode::BrowserStop => Scancode::AC_STOP,
        KeyCode::BrowserRefresh => Scancode::AC_REFRESH,
        KeyCode::Sleep => Scancode::SLEEP,

        _ => return None,
    };
    Some(code)
}
