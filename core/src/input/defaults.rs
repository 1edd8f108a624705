//! Default binding set
//!
//! Used whenever the user has not saved a key map of their own. Version 1
//! content expects Z on A and C on C; later versions moved confirm to Z.

use framekey_shared::{AxisDir, BindingDesc, ButtonCode, HatPos, Scancode, TargetVersion};

const KEYBOARD: [(Scancode, ButtonCode); 17] = [
    (Scancode::LEFT, ButtonCode::Left),
    (Scancode::RIGHT, ButtonCode::Right),
    (Scancode::UP, ButtonCode::Up),
    (Scancode::DOWN, ButtonCode::Down),
    (Scancode::SPACE, ButtonCode::C),
    (Scancode::RETURN, ButtonCode::C),
    (Scancode::ESCAPE, ButtonCode::B),
    (Scancode::KP_0, ButtonCode::B),
    (Scancode::LSHIFT, ButtonCode::A),
    (Scancode::X, ButtonCode::B),
    (Scancode::D, ButtonCode::Z),
    (Scancode::Q, ButtonCode::L),
    (Scancode::W, ButtonCode::R),
    (Scancode::V, ButtonCode::None),
    (Scancode::B, ButtonCode::None),
    (Scancode::A, ButtonCode::X),
    (Scancode::S, ButtonCode::Y),
];

const KEYBOARD_V1: [(Scancode, ButtonCode); 2] =
    [(Scancode::Z, ButtonCode::A), (Scancode::C, ButtonCode::C)];

const KEYBOARD_V2: [(Scancode, ButtonCode); 2] =
    [(Scancode::Z, ButtonCode::C), (Scancode::C, ButtonCode::None)];

/// Joystick button index → target.
const JOY_BUTTONS: [ButtonCode; 10] = [
    ButtonCode::A,
    ButtonCode::B,
    ButtonCode::C,
    ButtonCode::X,
    ButtonCode::Y,
    ButtonCode::Z,
    ButtonCode::L,
    ButtonCode::R,
    ButtonCode::None,
    ButtonCode::None,
];

const JOY_AXES: [(u8, AxisDir, ButtonCode); 4] = [
    (0, AxisDir::Negative, ButtonCode::Left),
    (0, AxisDir::Positive, ButtonCode::Right),
    (1, AxisDir::Negative, ButtonCode::Up),
    (1, AxisDir::Positive, ButtonCode::Down),
];

const JOY_HAT: [(HatPos, ButtonCode); 4] = [
    (HatPos::LEFT, ButtonCode::Left),
    (HatPos::RIGHT, ButtonCode::Right),
    (HatPos::UP, ButtonCode::Up),
    (HatPos::DOWN, ButtonCode::Down),
];

/// Default bindings for a target version.
///
/// Entries targeting `None` are kept so a key map written from this list
/// shows the deliberately unbound keys.
pub fn default_bindings(version: TargetVersion) -> Vec<BindingDesc> {
    let extra = if version.is_legacy() {
        &KEYBOARD_V1
    } else {
        &KEYBOARD_V2
    };

    let keys = KEYBOARD
        .iter()
        .chain(extra.iter())
        .map(|&(scancode, target)| BindingDesc::key(scancode, target));

    let buttons = (0u8..)
        .zip(JOY_BUTTONS)
        .map(|(index, target)| BindingDesc::joy_button(index, target));

    let axes = JOY_AXES
        .iter()
        .map(|&(axis, dir, target)| BindingDesc::joy_axis(axis, dir, target));

    let hats = JOY_HAT
        .iter()
        .map(|&(pos, target)| BindingDesc::joy_hat(0, pos, target));

    keys.chain(buttons).chain(axes).chain(hats).collect()
}
