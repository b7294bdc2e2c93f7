//! Fail-fast validation of a selection.
//!
//! Rules run in order and stop at the first failure:
//! 1. platform must be "micromod"
//! 2. board must be a registry key
//! 3. compiler standard, when set, must be C++20 or newer

use std::fmt;

use micromod_boards::{Board, BoardRegistry};
use tracing::{debug, warn};

use crate::error::{ConfigError, Result};
use crate::selection::Selection;

/// The only platform discriminator this package accepts.
pub const REQUIRED_PLATFORM: &str = "micromod";

/// Oldest C++ standard the drivers compile under.
pub const MIN_CPPSTD: u32 = 20;

/// A board identifier that passed validation.
///
/// Only [`validate`] constructs one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidatedBoard(Board);

impl ValidatedBoard {
    /// The board identifier.
    pub fn as_str(&self) -> &'static str {
        self.0.id()
    }

    /// The board variant.
    pub fn board(&self) -> Board {
        self.0
    }
}

impl fmt::Display for ValidatedBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validate a selection against the board registry.
pub fn validate(selection: &Selection) -> Result<ValidatedBoard> {
    let result = check(BoardRegistry::global(), selection);
    match &result {
        Ok(board) => debug!(board = %board, "selection validated"),
        Err(e) => warn!(field = e.field(), given = e.given(), "selection rejected: {e}"),
    }
    result
}

fn check(registry: &BoardRegistry, selection: &Selection) -> Result<ValidatedBoard> {
    let platform = selection.platform_kind();
    if platform != REQUIRED_PLATFORM {
        return Err(ConfigError::InvalidPlatform {
            given: platform.to_string(),
        });
    }

    let board_id = selection.board_id();
    let board = registry
        .lookup(board_id)
        .map_err(|_| ConfigError::UnsupportedBoard {
            given: board_id.to_string(),
        })?
        .board;

    if let Some(cppstd) = selection.cppstd() {
        check_cppstd(cppstd)?;
    }

    Ok(ValidatedBoard(board))
}

/// Check a compiler standard setting such as "20", "gnu20" or "23".
pub fn check_cppstd(cppstd: &str) -> Result<()> {
    let digits = cppstd.strip_prefix("gnu").unwrap_or(cppstd);
    let year: u32 = match digits {
        "98" => 1998,
        "03" => 2003,
        "11" => 2011,
        "14" => 2014,
        "17" => 2017,
        "20" => 2020,
        "23" => 2023,
        "26" => 2026,
        _ => {
            return Err(ConfigError::InvalidCppStd {
                given: cppstd.to_string(),
            })
        }
    };
    if year < MIN_CPPSTD + 2000 {
        return Err(ConfigError::CppStdTooOld {
            given: cppstd.to_string(),
            minimum: MIN_CPPSTD,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_known_board() {
        let s = Selection::new("micromod", "mod-lpc40-v5");
        let v = validate(&s).unwrap();
        assert_eq!(v.as_str(), "mod-lpc40-v5");
        assert_eq!(v.board(), Board::ModLpc40V5);
    }

    #[test]
    fn unknown_board_is_unsupported() {
        let s = Selection::new("micromod", "unknown-board");
        assert_eq!(
            validate(&s).unwrap_err(),
            ConfigError::UnsupportedBoard {
                given: "unknown-board".into()
            }
        );
    }

    #[test]
    fn sentinel_board_is_unsupported() {
        let s = Selection::default().with_platform("micromod");
        assert_eq!(
            validate(&s).unwrap_err(),
            ConfigError::UnsupportedBoard {
                given: "unspecified".into()
            }
        );
    }

    #[test]
    fn platform_checked_before_board() {
        let s = Selection::new("unspecified", "mod-lpc40-v5");
        assert_eq!(
            validate(&s).unwrap_err(),
            ConfigError::InvalidPlatform {
                given: "unspecified".into()
            }
        );

        let both_bad = Selection::new("arduino", "unknown-board");
        assert!(matches!(
            validate(&both_bad),
            Err(ConfigError::InvalidPlatform { .. })
        ));
    }

    #[test]
    fn platform_is_case_sensitive() {
        let s = Selection::new("MicroMod", "mod-lpc40-v5");
        assert_eq!(validate(&s).unwrap_err().given(), "MicroMod");
    }

    #[test]
    fn cppstd_gate() {
        assert!(check_cppstd("20").is_ok());
        assert!(check_cppstd("gnu20").is_ok());
        assert!(check_cppstd("23").is_ok());
        assert!(matches!(
            check_cppstd("17"),
            Err(ConfigError::CppStdTooOld { minimum: 20, .. })
        ));
        assert!(check_cppstd("98").is_err());
        assert!(check_cppstd("gnu11").is_err());
        assert!(matches!(
            check_cppstd("c++20"),
            Err(ConfigError::InvalidCppStd { .. })
        ));
        assert!(check_cppstd("26").is_ok());
        assert!(check_cppstd("gnu26").is_ok());
        assert!(matches!(
            check_cppstd("03"),
            Err(ConfigError::CppStdTooOld { .. })
        ));
    }

    #[test]
    fn cppstd_rejects_malformed_numbers() {
        for given in ["2020", "+20", "gnu+20", "120", "gnu2017", "3", "gnu", ""] {
            assert_eq!(
                check_cppstd(given),
                Err(ConfigError::InvalidCppStd {
                    given: given.to_string()
                }),
                "{given:?}"
            );
        }
    }

    #[test]
    fn cppstd_checked_after_board() {
        let s = Selection::new("micromod", "nope").with_cppstd("14");
        assert!(matches!(
            validate(&s),
            Err(ConfigError::UnsupportedBoard { .. })
        ));

        let s = Selection::new("micromod", "mod-stm32f1-v4").with_cppstd("14");
        assert_eq!(validate(&s).unwrap_err().field(), "compiler.cppstd");
    }

    #[test]
    fn error_messages_embed_raw_value() {
        let e = ConfigError::UnsupportedBoard {
            given: "mod-esp32".into(),
        };
        assert_eq!(e.to_string(), "MicroMod board 'mod-esp32' not supported");
        let e = ConfigError::InvalidPlatform {
            given: "lpc40".into(),
        };
        assert!(e.to_string().contains("'lpc40'"));
    }
}
