//! Error types for board registry operations.

/// Errors that can occur while looking up boards or interpreting their
/// driver package constraints.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Board identifier is not a registry key.
    #[error("board not found: '{board_id}'")]
    NotFound {
        /// The raw identifier that was looked up.
        board_id: String,
    },

    /// Platform group name is not known.
    #[error("unknown platform group: '{name}'")]
    UnknownGroup {
        /// The raw group name.
        name: String,
    },

    /// Version constraint is not a well-formed caret range.
    #[error("invalid version constraint '{constraint}': {detail}")]
    InvalidConstraint {
        /// The constraint text.
        constraint: String,
        /// Why it was rejected.
        detail: String,
    },
}

/// Result type for board registry operations.
pub type Result<T> = std::result::Result<T, BoardError>;
