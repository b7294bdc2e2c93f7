//! The caller's raw, unvalidated configuration choice.
//!
//! A selection is built once per invocation with its defaults supplied at
//! construction. It can be read from a TOML profile shaped like a package
//! manager profile:
//!
//! ```toml
//! [options]
//! platform = "micromod"
//! micromod_board = "mod-lpc40-v5"
//!
//! [settings]
//! cppstd = "20"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::ProfileError;

/// Default for every unset option.
pub const UNSPECIFIED: &str = "unspecified";

/// Raw platform and board choice for one configuration pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Profile", into = "Profile")]
pub struct Selection {
    platform_kind: String,
    board_id: String,
    cppstd: Option<String>,
}

impl Selection {
    /// Build a selection from explicit platform and board values.
    pub fn new(platform_kind: impl Into<String>, board_id: impl Into<String>) -> Self {
        Self {
            platform_kind: platform_kind.into(),
            board_id: board_id.into(),
            cppstd: None,
        }
    }

    /// Replace the platform discriminator.
    pub fn with_platform(self, platform_kind: impl Into<String>) -> Self {
        Self {
            platform_kind: platform_kind.into(),
            ..self
        }
    }

    /// Replace the board identifier.
    pub fn with_board(self, board_id: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            ..self
        }
    }

    /// Set the compiler language standard (e.g., "20", "gnu23").
    pub fn with_cppstd(self, cppstd: impl Into<String>) -> Self {
        Self {
            cppstd: Some(cppstd.into()),
            ..self
        }
    }

    /// Platform discriminator.
    pub fn platform_kind(&self) -> &str {
        &self.platform_kind
    }

    /// Board identifier.
    pub fn board_id(&self) -> &str {
        &self.board_id
    }

    /// Compiler language standard, if the caller set one.
    pub fn cppstd(&self) -> Option<&str> {
        self.cppstd.as_deref()
    }

    /// Parse a selection from a TOML profile string.
    pub fn from_toml(s: &str) -> Result<Self, ProfileError> {
        Ok(toml::from_str(s)?)
    }

    /// Serialize the selection as a TOML profile.
    pub fn to_toml(&self) -> Result<String, ProfileError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for Selection {
    fn default() -> Self {
        Self::new(UNSPECIFIED, UNSPECIFIED)
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct Profile {
    #[serde(default)]
    options: ProfileOptions,
    #[serde(default)]
    settings: ProfileSettings,
}

#[derive(Debug, Serialize, Deserialize)]
struct ProfileOptions {
    #[serde(default = "unspecified")]
    platform: String,
    #[serde(default = "unspecified")]
    micromod_board: String,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self {
            platform: unspecified(),
            micromod_board: unspecified(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ProfileSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cppstd: Option<String>,
}

fn unspecified() -> String {
    UNSPECIFIED.to_string()
}

impl From<Profile> for Selection {
    fn from(p: Profile) -> Self {
        Self {
            platform_kind: p.options.platform,
            board_id: p.options.micromod_board,
            cppstd: p.settings.cppstd,
        }
    }
}

impl From<Selection> for Profile {
    fn from(s: Selection) -> Self {
        Self {
            options: ProfileOptions {
                platform: s.platform_kind,
                micromod_board: s.board_id,
            },
            settings: ProfileSettings { cppstd: s.cppstd },
        }
    }
}
