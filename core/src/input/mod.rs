//! Logical input: bindings, button states, auto-repeat and directions

mod binding;
mod defaults;
mod direction;
mod poller;
mod raw;
mod repeat;
mod state;
mod vkey;


pub use binding::{Binding, BindingSource, BindingTable, DEFAULT_AXIS_THRESHOLD, SourceOptions};
pub use defaults::default_bindings;
pub use direction::{Dir4, Dir8, resolve_dir8};
pub use poller::Input;
pub use repeat::{RawRepeat, RepeatPolicy, RepeatTimer};
pub use state::{BUTTON_SLOTS, ButtonState, StateBuffers};
pub use vkey::{
    KEY_DOWN, KEY_STATE_DOWN, VirtualKey, async_key_state, keyboard_state, resolve_vkey,
    scancode_for_vkey,
};
