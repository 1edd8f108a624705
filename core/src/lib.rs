//! Framekey Core - frame-stepped input polling
//!
//! This crate turns raw device state into the small set of logical buttons
//! scripted game content queries, with press/trigger/repeat edges and
//! derived 4-way and 8-way directions.
//!
//! # Architecture
//!
//! - [`PlatformState`] - Live device snapshot kept up to date by the event source
//! - [`Input`] - Per-frame poller: bindings, button states, repeat, directions
//! - [`BindingMailbox`] - Single-slot channel for rebind requests from other threads
//! - [`InputConfig`] - Persistent settings and key map (input.toml)

pub mod config;
pub mod input;
#[cfg(test)]
mod integration;
pub mod mailbox;
pub mod platform;
#[cfg(test)]
pub mod test_utils;

pub use config::{ConfigError, InputConfig};
pub use input::{
    ButtonState, Dir8, Input, RepeatPolicy, async_key_state, default_bindings, keyboard_state,
};
pub use mailbox::{BindingMailbox, Mailbox};
pub use platform::{PlatformState, ScreenTransform};

#[cfg(feature = "gamepad")]
pub use platform::GamepadPoller;

// Re-export shared types for convenience
pub use framekey_shared::{
    AxisDir, BindingDesc, ButtonCode, HatPos, Scancode, SourceDesc, TargetVersion,
};
