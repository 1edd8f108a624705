//! Shared test utilities for integration and unit tests

use framekey_shared::{ButtonCode, Scancode, TargetVersion};

use crate::config::InputConfig;
use crate::input::Input;
use crate::platform::PlatformState;

/// Steps an [`Input`] through scripted frames.
///
/// The platform snapshot persists between frames, so a key pressed once
/// stays held until released.
pub struct FrameDriver {
    pub platform: PlatformState,
    pub input: Input,
}

impl FrameDriver {
    /// Driver with the default key map for `version`.
    pub fn new(version: TargetVersion) -> Self {
        Self::with_config(InputConfig {
            target_version: version,
            ..InputConfig::default()
        })
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            platform: PlatformState::new(),
            input: Input::new(&config),
        }
    }

    pub fn press(&mut self, scancode: Scancode) -> &mut Self {
        self.platform.set_key(scancode, true);
        self
    }

    pub fn release(&mut self, scancode: Scancode) -> &mut Self {
        self.platform.set_key(scancode, false);
        self
    }

    /// Run one update and return the result.
    pub fn frame(&mut self) -> &Input {
        self.input.update(&self.platform);
        &self.input
    }

    /// Run `count` updates.
    pub fn frames(&mut self, count: usize) -> &Input {
        for _ in 0..count {
            self.input.update(&self.platform);
        }
        &self.input
    }

    /// Run `count` updates and return the frame indices on which `button`
    /// reported a repeat.
    pub fn repeat_frames(&mut self, button: ButtonCode, count: usize) -> Vec<usize> {
        (0..count)
            .filter(|_| {
                self.input.update(&self.platform);
                self.input.state(button).repeated
            })
            .collect()
    }

    /// Like [`Self::repeat_frames`] for the extended query of `vkey`.
    pub fn repeat_frames_ex(&mut self, vkey: i32, count: usize) -> Vec<usize> {
        (0..count)
            .filter(|_| {
                self.input.update(&self.platform);
                self.input.is_repeated_ex(vkey)
            })
            .collect()
    }
}
