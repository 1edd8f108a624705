//! Auto-repeat timing
//!
//! A held button "repeats" on a fixed frame schedule. The schedule depends
//! on the target version and is shared by the logical button tracker and
//! the raw scancode tracker.

use framekey_shared::{ButtonCode, Scancode, TargetVersion};

/// Frame schedule on which a held button repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepeatPolicy {
    /// First frame count that may fire
    pub delay: u32,
    /// Fire every `interval` frames once past the delay
    pub interval: u32,
}

impl RepeatPolicy {
    pub const LEGACY: RepeatPolicy = RepeatPolicy {
        delay: 15,
        interval: 4,
    };

    pub const MODERN: RepeatPolicy = RepeatPolicy {
        delay: 23,
        interval: 6,
    };

    pub const fn for_version(version: TargetVersion) -> Self {
        if version.is_legacy() {
            Self::LEGACY
        } else {
            Self::MODERN
        }
    }

    /// Whether a button held for `count` frames past its first repeat
    /// fires this frame.
    pub const fn fires(&self, count: u32) -> bool {
        count >= self.delay && (count + 1) % self.interval == 0
    }
}

/// Tracks the one logical button currently in an auto-repeat cycle.
#[derive(Debug, Clone, Copy, Default)]
pub struct RepeatTimer {
    repeating: ButtonCode,
    count: u32,
}

impl RepeatTimer {
    pub fn repeating(&self) -> ButtonCode {
        self.repeating
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Start a new cycle for `button`.
    pub fn start(&mut self, button: ButtonCode) {
        self.repeating = button;
        self.count = 0;
    }

    /// Advance the running cycle by one held frame; returns the new count.
    pub fn tick(&mut self) -> u32 {
        self.count = self.count.wrapping_add(1);
        self.count
    }

    /// Stop the running cycle.
    pub fn stop(&mut self) {
        self.repeating = ButtonCode::None;
    }
}

/// Single-slot repeat tracker for raw scancodes.
///
/// Only one scancode is tracked at a time: the lowest one held across two
/// consecutive frames. Holding several keys means they compete for the
/// slot whenever the lowest held key changes. Frames where nothing is held
/// leave the slot and its count untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawRepeat {
    tracked: Option<Scancode>,
    count: u32,
}

impl RawRepeat {
    pub fn tracked(&self) -> Option<Scancode> {
        self.tracked
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Feed this frame's "held in both frames" scan result.
    pub fn observe(&mut self, held: Option<Scancode>) {
        match held {
            Some(scancode) if self.tracked == Some(scancode) => {
                self.count = self.count.wrapping_add(1);
            }
            Some(scancode) => {
                self.tracked = Some(scancode);
                self.count = 0;
            }
            None => {}
        }
    }

    /// Whether `scancode` repeats this frame under `policy`.
    pub fn fires(&self, scancode: Scancode, policy: &RepeatPolicy) -> bool {
        self.tracked == Some(scancode) && policy.fires(self.count)
    }
}
