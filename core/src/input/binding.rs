//! Live bindings and the binding table
//!
//! A binding ties one physical source to a logical button. The table keeps
//! them in evaluation order: static keyboard bindings, mouse bindings, then
//! the rebindable keyboard, joystick-axis, joystick-hat and joystick-button
//! lists. Evaluation order decides which newly pressed button becomes the
//! repeat candidate, so it is part of the observable behavior.

use framekey_shared::{AxisDir, BindingDesc, ButtonCode, HatPos, Scancode, SourceDesc};

use crate::platform::{PlatformState, mouse_button};

/// Default joystick axis dead zone.
pub const DEFAULT_AXIS_THRESHOLD: i32 = 0x4000;

/// Settings that affect how sources are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceOptions {
    /// Axis magnitude an axis binding must exceed to be active.
    pub axis_threshold: i32,
    /// Let any touching finger hold the left mouse button.
    pub touch_emulates_mouse: bool,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self {
            axis_threshold: DEFAULT_AXIS_THRESHOLD,
            touch_emulates_mouse: false,
        }
    }
}

/// Physical side of a live binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingSource {
    Keyboard(Scancode),
    /// Mouse button index (see [`mouse_button`])
    Mouse(u8),
    JoyAxis { axis: u8, dir: AxisDir },
    JoyHat { hat: u8, pos: HatPos },
    JoyButton(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub source: BindingSource,
    pub target: ButtonCode,
}

impl Binding {
    pub const fn new(source: BindingSource, target: ButtonCode) -> Self {
        Self { source, target }
    }

    /// Whether the source is held in the given snapshot.
    pub fn is_active(&self, platform: &PlatformState, options: &SourceOptions) -> bool {
        match self.source {
            BindingSource::Keyboard(scancode) => key_active(platform, scancode),
            BindingSource::Mouse(button) => {
                if platform.mouse.is_down(button) {
                    return true;
                }
                button == mouse_button::LEFT
                    && options.touch_emulates_mouse
                    && !platform.touch.ignore_mouse
                    && platform.touch.first_down().is_some()
            }
            BindingSource::JoyAxis { axis, dir } => {
                let value = i32::from(platform.joystick.axes[axis as usize]);
                match dir {
                    AxisDir::Negative => value < -options.axis_threshold,
                    AxisDir::Positive => value > options.axis_threshold,
                }
            }
            BindingSource::JoyHat { hat, pos } => {
                platform.joystick.hats[hat as usize].intersects(pos)
            }
            BindingSource::JoyButton(button) => platform.joystick.buttons[button as usize],
        }
    }

    /// Whether holding the source can start an auto-repeat cycle.
    pub fn is_repeatable(&self) -> bool {
        match self.source {
            BindingSource::Keyboard(scancode) => {
                (Scancode::A..=Scancode::DIGIT_0).contains(&scancode)
                    || (Scancode::RIGHT..=Scancode::UP).contains(&scancode)
                    || (Scancode::F1..=Scancode::F12).contains(&scancode)
            }
            BindingSource::Mouse(_) => false,
            BindingSource::JoyAxis { .. }
            | BindingSource::JoyHat { .. }
            | BindingSource::JoyButton(_) => true,
        }
    }
}

/// Either shift key holds an LShift binding; keypad Enter holds a Return
/// binding.
fn key_active(platform: &PlatformState, scancode: Scancode) -> bool {
    match scancode {
        Scancode::LSHIFT => {
            platform.key_down(Scancode::LSHIFT) || platform.key_down(Scancode::RSHIFT)
        }
        Scancode::RETURN => {
            platform.key_down(Scancode::RETURN) || platform.key_down(Scancode::KP_ENTER)
        }
        _ => platform.key_down(scancode),
    }
}

const STATIC_KEYS: [Binding; 11] = [
    Binding::new(BindingSource::Keyboard(Scancode::LSHIFT), ButtonCode::Shift),
    Binding::new(BindingSource::Keyboard(Scancode::RSHIFT), ButtonCode::Shift),
    Binding::new(BindingSource::Keyboard(Scancode::LCTRL), ButtonCode::Ctrl),
    Binding::new(BindingSource::Keyboard(Scancode::RCTRL), ButtonCode::Ctrl),
    Binding::new(BindingSource::Keyboard(Scancode::LALT), ButtonCode::Alt),
    Binding::new(BindingSource::Keyboard(Scancode::RALT), ButtonCode::Alt),
    Binding::new(BindingSource::Keyboard(Scancode::F5), ButtonCode::F5),
    Binding::new(BindingSource::Keyboard(Scancode::F6), ButtonCode::F6),
    Binding::new(BindingSource::Keyboard(Scancode::F7), ButtonCode::F7),
    Binding::new(BindingSource::Keyboard(Scancode::F8), ButtonCode::F8),
    Binding::new(BindingSource::Keyboard(Scancode::F9), ButtonCode::F9),
];

const MOUSE_BUTTONS: [Binding; 3] = [
    Binding::new(BindingSource::Mouse(mouse_button::LEFT), ButtonCode::MouseLeft),
    Binding::new(BindingSource::Mouse(mouse_button::MIDDLE), ButtonCode::MouseMiddle),
    Binding::new(BindingSource::Mouse(mouse_button::RIGHT), ButtonCode::MouseRight),
];

/// All bindings in evaluation order.
#[derive(Debug, Clone, Default)]
pub struct BindingTable {
    keys: Vec<Binding>,
    axes: Vec<Binding>,
    hats: Vec<Binding>,
    buttons: Vec<Binding>,
}

impl BindingTable {
    /// Table holding only the fixed bindings.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_descs(descs: &[BindingDesc]) -> Self {
        let mut table = Self::new();
        table.rebuild(descs);
        table
    }

    /// Replace every rebindable binding.
    ///
    /// Entries targeting `None` or a fixed-only button, and entries with an
    /// unusable source, are skipped; the rest keep their relative order.
    pub fn rebuild(&mut self, descs: &[BindingDesc]) {
        self.keys.clear();
        self.axes.clear();
        self.hats.clear();
        self.buttons.clear();

        let mut dropped = 0usize;
        for desc in descs {
            if desc.target == ButtonCode::None {
                tracing::debug!("Dropping binding {:?}: no target", desc.source);
                dropped += 1;
                continue;
            }

            let target = desc.target;
            if !target.is_rebindable() {
                tracing::debug!(
                    "Dropping binding {:?}: {} is not rebindable",
                    desc.source,
                    target
                );
                dropped += 1;
                continue;
            }
            match desc.source {
                SourceDesc::Invalid => {
                    tracing::debug!("Dropping binding for {}: invalid source", target);
                    dropped += 1;
                }
                SourceDesc::Key(scancode) if !scancode.is_valid() => {
                    tracing::debug!(
                        "Dropping binding for {}: scancode {} out of range",
                        target,
                        scancode.0
                    );
                    dropped += 1;
                }
                SourceDesc::Key(scancode) => self
                    .keys
                    .push(Binding::new(BindingSource::Keyboard(scancode), target)),
                SourceDesc::JoyAxis { axis, dir } => self
                    .axes
                    .push(Binding::new(BindingSource::JoyAxis { axis, dir }, target)),
                SourceDesc::JoyHat { hat, pos } => self
                    .hats
                    .push(Binding::new(BindingSource::JoyHat { hat, pos }, target)),
                SourceDesc::JoyButton(button) => self
                    .buttons
                    .push(Binding::new(BindingSource::JoyButton(button), target)),
            }
        }

        tracing::debug!(
            "Rebuilt bindings: {} keyboard, {} axis, {} hat, {} button ({} dropped)",
            self.keys.len(),
            self.axes.len(),
            self.hats.len(),
            self.buttons.len(),
            dropped
        );
    }

    /// Every binding, fixed ones first, in evaluation order.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        STATIC_KEYS
            .iter()
            .chain(MOUSE_BUTTONS.iter())
            .chain(self.keys.iter())
            .chain(self.axes.iter())
            .chain(self.hats.iter())
            .chain(self.buttons.iter())
    }

    /// Rebindable bindings only, in evaluation order.
    pub fn rebindable(&self) -> impl Iterator<Item = &Binding> {
        self.keys
            .iter()
            .chain(self.axes.iter())
            .chain(self.hats.iter())
            .chain(self.buttons.iter())
    }

    pub fn len(&self) -> usize {
        STATIC_KEYS.len()
            + MOUSE_BUTTONS.len()
            + self.keys.len()
            + self.axes.len()
            + self.hats.len()
            + self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rebuild_skips_none_targets() {
        let table = BindingTable::from_descs(&[
            BindingDesc::key(Scancode::A, ButtonCode::A),
            BindingDesc::key(Scancode::X, ButtonCode::None),
        ]);

        let rebindable: Vec<_> = table.rebindable().copied().collect();
        assert_eq!(
            rebindable,
            vec![Binding::new(BindingSource::Keyboard(Scancode::A), ButtonCode::A)]
        );
    }

    #[test]
    fn test_rebuild_skips_invalid_sources() {
        let table = BindingTable::from_descs(&[
            BindingDesc::new(SourceDesc::Invalid, ButtonCode::B),
            BindingDesc::key(Scancode(9000), ButtonCode::C),
            BindingDesc::joy_button(3, ButtonCode::X),
        ]);
        assert_eq!(table.rebindable().count(), 1);
    }

    #[test]
    fn test_rebuild_skips_fixed_only_targets() {
        let table = BindingTable::from_descs(&[
            BindingDesc::key(Scancode::Q, ButtonCode::Shift),
            BindingDesc::key(Scancode::W, ButtonCode::F5),
            BindingDesc::joy_button(1, ButtonCode::MouseLeft),
            BindingDesc::key(Scancode::E, ButtonCode::Z),
        ]);

        let targets: Vec<_> = table.rebindable().map(|b| b.target).collect();
        assert_eq!(targets, vec![ButtonCode::Z]);
    }

    #[test]
    fn test_rebuild_replaces_previous_bindings() {
        let mut table = BindingTable::from_descs(&[BindingDesc::key(Scancode::Q, ButtonCode::L)]);
        table.rebuild(&[BindingDesc::key(Scancode::W, ButtonCode::R)]);

        let targets: Vec<_> = table.rebindable().map(|b| b.target).collect();
        assert_eq!(targets, vec![ButtonCode::R]);
    }

    #[test]
    fn test_evaluation_order() {
        // Descriptions arrive interleaved; the table groups them by kind
        let table = BindingTable::from_descs(&[
            BindingDesc::joy_button(0, ButtonCode::A),
            BindingDesc::joy_hat(0, HatPos::LEFT, ButtonCode::Left),
            BindingDesc::joy_axis(0, AxisDir::Negative, ButtonCode::Left),
            BindingDesc::key(Scancode::Z, ButtonCode::C),
        ]);

        let sources: Vec<_> = table.iter().map(|b| b.source).collect();
        assert_eq!(sources.len(), table.len());
        assert_eq!(sources[0], BindingSource::Keyboard(Scancode::LSHIFT));
        assert_eq!(sources[11], BindingSource::Mouse(mouse_button::LEFT));
        assert_eq!(
            &sources[14..],
            &[
                BindingSource::Keyboard(Scancode::Z),
                BindingSource::JoyAxis {
                    axis: 0,
                    dir: AxisDir::Negative
                },
                BindingSource::JoyHat {
                    hat: 0,
                    pos: HatPos::LEFT
                },
                BindingSource::JoyButton(0),
            ]
        );
    }

    #[test]
    fn test_shift_and_return_aliases() {
        let options = SourceOptions::default();
        let shift = Binding::new(BindingSource::Keyboard(Scancode::LSHIFT), ButtonCode::A);
        let enter = Binding::new(BindingSource::Keyboard(Scancode::RETURN), ButtonCode::C);
        let rshift = Binding::new(BindingSource::Keyboard(Scancode::RSHIFT), ButtonCode::Shift);

        let mut platform = PlatformState::new();
        platform.set_key(Scancode::RSHIFT, true);
        platform.set_key(Scancode::KP_ENTER, true);
        assert!(shift.is_active(&platform, &options));
        assert!(enter.is_active(&platform, &options));

        // The alias only goes one way
        platform.set_key(Scancode::RSHIFT, false);
        platform.set_key(Scancode::LSHIFT, true);
        assert!(!rshift.is_active(&platform, &options));
    }

    #[test]
    fn test_axis_threshold() {
        let options = SourceOptions::default();
        let left = Binding::new(
            BindingSource::JoyAxis {
                axis: 0,
                dir: AxisDir::Negative,
            },
            ButtonCode::Left,
        );
        let right = Binding::new(
            BindingSource::JoyAxis {
                axis: 0,
                dir: AxisDir::Positive,
            },
            ButtonCode::Right,
        );

        let mut platform = PlatformState::new();
        platform.joystick.axes[0] = -0x4000;
        assert!(!left.is_active(&platform, &options));
        platform.joystick.axes[0] = -0x4001;
        assert!(left.is_active(&platform, &options));
        assert!(!right.is_active(&platform, &options));
        platform.joystick.axes[0] = 0x4001;
        assert!(right.is_active(&platform, &options));
    }

    #[test]
    fn test_diagonal_hat_activates_both_directions() {
        let options = SourceOptions::default();
        let up = Binding::new(
            BindingSource::JoyHat {
                hat: 0,
                pos: HatPos::UP,
            },
            ButtonCode::Up,
        );
        let left = Binding::new(
            BindingSource::JoyHat {
                hat: 0,
                pos: HatPos::LEFT,
            },
            ButtonCode::Left,
        );

        let mut platform = PlatformState::new();
        platform.joystick.hats[0] = HatPos::UP | HatPos::LEFT;
        assert!(up.is_active(&platform, &options));
        assert!(left.is_active(&platform, &options));
    }

    #[test]
    fn test_touch_emulates_left_mouse() {
        let left = MOUSE_BUTTONS[0];
        let right = MOUSE_BUTTONS[2];
        let mut platform = PlatformState::new();
        platform.touch.fingers[4].down = true;

        let off = SourceOptions::default();
        let on = SourceOptions {
            touch_emulates_mouse: true,
            ..SourceOptions::default()
        };
        assert!(!left.is_active(&platform, &off));
        assert!(left.is_active(&platform, &on));
        assert!(!right.is_active(&platform, &on));

        platform.touch.ignore_mouse = true;
        assert!(!left.is_active(&platform, &on));
    }

    #[test]
    fn test_repeatable_sources() {
        let key = |sc| Binding::new(BindingSource::Keyboard(sc), ButtonCode::C);
        assert!(key(Scancode::A).is_repeatable());
        assert!(key(Scancode::DIGIT_0).is_repeatable());
        assert!(key(Scancode::UP).is_repeatable());
        assert!(key(Scancode::F12).is_repeatable());
        assert!(!key(Scancode::RETURN).is_repeatable());
        assert!(!key(Scancode::SPACE).is_repeatable());
        assert!(!key(Scancode::LSHIFT).is_repeatable());
        assert!(!MOUSE_BUTTONS[0].is_repeatable());
        assert!(Binding::new(BindingSource::JoyButton(0), ButtonCode::A).is_repeatable());
    }
}
