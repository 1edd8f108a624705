//! Per-frame input poller

use framekey_shared::{BindingDesc, ButtonCode, TargetVersion};

use super::binding::{BindingTable, SourceOptions};
use super::direction::{Dir4, Dir8, resolve_dir8};
use super::raw::RawStates;
use super::repeat::{RawRepeat, RepeatPolicy, RepeatTimer};
use super::state::{ButtonState, StateBuffers};
use super::vkey::{VirtualKey, resolve_vkey};
use crate::config::InputConfig;
use crate::mailbox::BindingMailbox;
use crate::platform::{PlatformState, ScreenTransform};

/// Frame-stepped input state.
///
/// All state changes happen in [`Input::update`], called once per frame
/// with the latest platform snapshot. Every query in between reads the
/// result of the last update.
pub struct Input {
    version: TargetVersion,
    policy: RepeatPolicy,
    options: SourceOptions,

    bindings: BindingTable,
    /// Pending rebind requests, applied at the start of the next update
    mailbox: BindingMailbox,

    states: StateBuffers,
    raw: RawStates,
    raw_repeat: RawRepeat,
    repeat: RepeatTimer,

    dir4: Dir4,
    dir8: Dir8,

    /// Pointer position in window pixels, captured on update
    pointer: (i32, i32),
    transform: ScreenTransform,
}

impl Input {
    pub fn new(config: &InputConfig) -> Self {
        Self::with_mailbox(config, BindingMailbox::new())
    }

    /// Create an input core that takes rebind requests from `mailbox`.
    pub fn with_mailbox(config: &InputConfig, mailbox: BindingMailbox) -> Self {
        let version = config.target_version;
        let bindings = BindingTable::from_descs(&config.effective_bindings());
        tracing::debug!(
            "Input core ready: target version {}, {} bindings",
            version.0,
            bindings.len()
        );

        Self {
            version,
            policy: RepeatPolicy::for_version(version),
            options: config.source_options(),
            bindings,
            mailbox,
            states: StateBuffers::new(),
            raw: RawStates::default(),
            raw_repeat: RawRepeat::default(),
            repeat: RepeatTimer::default(),
            dir4: Dir4::default(),
            dir8: Dir8::None,
            pointer: (0, 0),
            transform: ScreenTransform::default(),
        }
    }

    /// Handle for posting rebind requests from elsewhere.
    pub fn mailbox(&self) -> BindingMailbox {
        self.mailbox.clone()
    }

    /// Replace the rebindable bindings right away.
    pub fn rebind(&mut self, descs: &[BindingDesc]) {
        self.bindings.rebuild(descs);
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn target_version(&self) -> TargetVersion {
        self.version
    }

    pub fn set_screen_transform(&mut self, transform: ScreenTransform) {
        self.transform = transform;
    }

    /// Advance one frame.
    pub fn update(&mut self, platform: &PlatformState) {
        if let Some(descs) = self.mailbox.take() {
            tracing::debug!("Applying {} posted binding descriptions", descs.len());
            self.bindings.rebuild(&descs);
        }

        self.states.swap();
        self.states.clear();
        self.raw.swap();

        let candidate = self.poll_bindings(platform);

        let states = &self.states;
        let pressed = |button| states.get(button).pressed;
        self.dir4.update(pressed);
        self.dir8 = resolve_dir8(pressed);

        self.raw.capture(&platform.keys);
        self.raw_repeat.observe(self.raw.first_held());

        self.pointer = match platform.touch.first_down() {
            Some(finger) if self.options.touch_emulates_mouse && !platform.touch.ignore_mouse => {
                (finger.x, finger.y)
            }
            _ => (platform.mouse.x, platform.mouse.y),
        };

        self.advance_repeat(candidate);
    }

    /// Evaluate every binding into the current buffer.
    ///
    /// Returns the first newly pressed repeatable button, if any.
    fn poll_bindings(&mut self, platform: &PlatformState) -> ButtonCode {
        let mut candidate = ButtonCode::None;

        for binding in self.bindings.iter() {
            if !binding.is_active(platform, &self.options) || binding.target == ButtonCode::None {
                continue;
            }

            let was_pressed = self.states.previous(binding.target).pressed;
            let state = self.states.get_mut(binding.target);
            state.pressed = true;
            if !was_pressed {
                state.triggered = true;
            }

            if candidate == ButtonCode::None
                && self.repeat.repeating() != binding.target
                && !was_pressed
            {
                if binding.is_repeatable() {
                    candidate = binding.target;
                } else {
                    // A fresh press that cannot repeat still ends the current cycle
                    self.repeat.stop();
                }
            }
        }

        candidate
    }

    fn advance_repeat(&mut self, candidate: ButtonCode) {
        if candidate != ButtonCode::None && candidate != self.repeat.repeating() {
            tracing::trace!("Repeat cycle started for {}", candidate);
            self.repeat.start(candidate);
            self.states.get_mut(candidate).repeated = true;
            return;
        }

        let repeating = self.repeat.repeating();
        if self.states.get(repeating).pressed {
            let count = self.repeat.tick();
            if self.policy.fires(count) {
                self.states.get_mut(repeating).repeated = true;
            }
        } else {
            self.repeat.stop();
        }
    }

    /// State of a logical button.
    pub fn state(&self, button: ButtonCode) -> ButtonState {
        self.states.get(button)
    }

    pub fn is_pressed(&self, code: i32) -> bool {
        self.states.get_checked(code).pressed
    }

    pub fn is_triggered(&self, code: i32) -> bool {
        self.states.get_checked(code).triggered
    }

    pub fn is_repeated(&self, code: i32) -> bool {
        self.states.get_checked(code).repeated
    }

    /// State of a key addressed by virtual-key code.
    ///
    /// Physical keys read the raw scancode buffers; the generic modifier
    /// and mouse codes read the matching logical button. Unmapped codes
    /// are never pressed.
    pub fn extended_state(&self, vkey: i32) -> ButtonState {
        match resolve_vkey(vkey) {
            Some(VirtualKey::Logical(button)) => self.states.get(button),
            Some(VirtualKey::Raw(scancode)) => ButtonState {
                pressed: self.raw.pressed(scancode),
                triggered: self.raw.triggered(scancode),
                repeated: self.raw_repeat.fires(scancode, &self.policy),
            },
            None => ButtonState::default(),
        }
    }

    pub fn is_pressed_ex(&self, vkey: i32) -> bool {
        self.extended_state(vkey).pressed
    }

    pub fn is_triggered_ex(&self, vkey: i32) -> bool {
        self.extended_state(vkey).triggered
    }

    pub fn is_repeated_ex(&self, vkey: i32) -> bool {
        self.extended_state(vkey).repeated
    }

    /// 4-way direction: 0, 2, 4, 6 or 8.
    pub fn dir4_value(&self) -> i32 {
        self.dir4.active().value()
    }

    /// 8-way direction in numpad layout, 0 when neutral.
    pub fn dir8_value(&self) -> i32 {
        self.dir8.value()
    }

    pub fn dir4(&self) -> ButtonCode {
        self.dir4.active()
    }

    pub fn dir8(&self) -> Dir8 {
        self.dir8
    }

    /// Button currently in an auto-repeat cycle.
    pub fn repeating(&self) -> ButtonCode {
        self.repeat.repeating()
    }

    /// Pointer position in logical screen coordinates.
    pub fn cursor_pos(&self) -> (i32, i32) {
        self.transform.apply(self.pointer.0, self.pointer.1)
    }

    pub fn mouse_x(&self) -> i32 {
        self.cursor_pos().0
    }

    pub fn mouse_y(&self) -> i32 {
        self.cursor_pos().1
    }
}
