//! Configuration error types.

/// Errors that terminate the configuration phase.
///
/// None of these are recoverable inside the recipe: there is no fallback
/// board and no default platform. The caller fixes the selection and
/// re-invokes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Platform discriminator is not "micromod".
    #[error(
        "invalid platform '{given}': this package cannot be used unless the platform is set to 'micromod'"
    )]
    InvalidPlatform {
        /// The raw platform value.
        given: String,
    },

    /// Board identifier is not in the registry.
    #[error("MicroMod board '{given}' not supported")]
    UnsupportedBoard {
        /// The raw board value.
        given: String,
    },

    /// Compiler standard setting could not be read.
    #[error("invalid compiler.cppstd '{given}'")]
    InvalidCppStd {
        /// The raw setting value.
        given: String,
    },

    /// Compiler standard is older than the drivers require.
    #[error("compiler.cppstd '{given}' is too old: at least C++{minimum} is required")]
    CppStdTooOld {
        /// The raw setting value.
        given: String,
        /// Minimum supported standard.
        minimum: u32,
    },
}

impl ConfigError {
    /// Name of the selection field that caused the failure.
    pub fn field(&self) -> &'static str {
        match self {
            ConfigError::InvalidPlatform { .. } => "platform",
            ConfigError::UnsupportedBoard { .. } => "micromod_board",
            ConfigError::InvalidCppStd { .. } | ConfigError::CppStdTooOld { .. } => {
                "compiler.cppstd"
            }
        }
    }

    /// The raw offending value.
    pub fn given(&self) -> &str {
        match self {
            ConfigError::InvalidPlatform { given }
            | ConfigError::UnsupportedBoard { given }
            | ConfigError::InvalidCppStd { given }
            | ConfigError::CppStdTooOld { given, .. } => given,
        }
    }
}

/// Errors loading a selection profile.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
