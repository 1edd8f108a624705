//! Target script version

use serde::{Deserialize, Serialize};

/// Script runtime generation the core emulates.
///
/// Scripted content written for version 1 expects faster key repeat and a
/// different default key map than content for versions 2 and 3. It is
/// chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TargetVersion(pub u8);

impl TargetVersion {
    pub const V1: TargetVersion = TargetVersion(1);
    pub const V2: TargetVersion = TargetVersion(2);
    pub const V3: TargetVersion = TargetVersion(3);

    /// Version 1 behavior (everything below 2).
    pub const fn is_legacy(self) -> bool {
        self.0 < 2
    }
}

impl Default for TargetVersion {
    fn default() -> Self {
        Self::V1
    }
}
