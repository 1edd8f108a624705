//! Error types for name lookups

/// Failure to resolve a human-readable name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNameError {
    #[error("unknown button name '{0}'")]
    UnknownButton(String),

    #[error("unknown key name '{0}'")]
    UnknownScancode(String),
}
