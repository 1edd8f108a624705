//! Shared types for the framekey input core.
//!
//! These are the plain data types that cross component boundaries: the
//! event source writes scancodes, the configuration layer stores binding
//! descriptions, and scripts query logical button codes.

pub mod binding;
pub mod button;
pub mod error;
pub mod scancode;
pub mod version;

pub use binding::{AxisDir, BindingDesc, HatPos, SourceDesc};
pub use button::ButtonCode;
pub use error::ParseNameError;
pub use scancode::{SCANCODE_COUNT, Scancode};
pub use version::TargetVersion;
