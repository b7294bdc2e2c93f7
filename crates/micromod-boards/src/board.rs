//! Supported MicroMod boards and the platform driver groups they resolve to.
//!
//! Boards map many-to-one onto platform groups: every processor board built
//! around an ARM Cortex-M microcontroller is served by the same
//! `libhal-arm-mcu` driver package. Package data lives on the group, never on
//! the individual board.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::constraint::VersionConstraint;
use crate::error::BoardError;

/// A MicroMod processor board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Board {
    /// SparkFun MicroMod LPC4078 processor board, revision 5.
    #[serde(rename = "mod-lpc40-v5")]
    ModLpc40V5,
    /// SparkFun MicroMod STM32F103 processor board, revision 4.
    #[serde(rename = "mod-stm32f1-v4")]
    ModStm32f1V4,
    /// SparkFun MicroMod STM32F103 processor board, revision 5.
    #[serde(rename = "mod-stm32f1-v5")]
    ModStm32f1V5,
}

impl Board {
    /// Every supported board, in identifier order.
    pub const ALL: [Board; 3] = [Board::ModLpc40V5, Board::ModStm32f1V4, Board::ModStm32f1V5];

    /// The board identifier as selected by the user.
    pub fn id(self) -> &'static str {
        match self {
            Board::ModLpc40V5 => "mod-lpc40-v5",
            Board::ModStm32f1V4 => "mod-stm32f1-v4",
            Board::ModStm32f1V5 => "mod-stm32f1-v5",
        }
    }

    /// The driver group this board's microcontroller belongs to.
    pub fn platform_group(self) -> PlatformGroup {
        match self {
            Board::ModLpc40V5 | Board::ModStm32f1V4 | Board::ModStm32f1V5 => PlatformGroup::ArmMcu,
        }
    }

    /// Microcontroller part on the board.
    pub fn mcu(self) -> &'static str {
        match self {
            Board::ModLpc40V5 => "lpc4078",
            Board::ModStm32f1V4 | Board::ModStm32f1V5 => "stm32f103c8",
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.id())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Exact, case-sensitive match on the board identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::ALL
            .into_iter()
            .find(|b| b.id() == s)
            .ok_or_else(|| BoardError::NotFound {
                board_id: s.to_string(),
            })
    }
}

/// A platform driver package grouping shared by one or more boards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlatformGroup {
    /// ARM Cortex-M microcontrollers (LPC40xx, STM32F1xx, ...).
    ArmMcu,
}

impl PlatformGroup {
    /// Every known group.
    pub const ALL: [PlatformGroup; 1] = [PlatformGroup::ArmMcu];

    /// Group name as passed to the native build.
    pub fn name(self) -> &'static str {
        match self {
            PlatformGroup::ArmMcu => "arm-mcu",
        }
    }

    /// Minimum compatible driver package for the group.
    pub fn package_name(self) -> &'static str {
        match self {
            PlatformGroup::ArmMcu => "libhal-arm-mcu",
        }
    }

    /// Version range of the driver package.
    pub fn version_constraint(self) -> VersionConstraint {
        match self {
            PlatformGroup::ArmMcu => VersionConstraint::from_static("^1.4.0"),
        }
    }

    /// Whether consumers need the driver package's headers at compile time.
    ///
    /// Always true: the MicroMod interface returns driver types by reference.
    pub fn transitive_headers(self) -> bool {
        match self {
            PlatformGroup::ArmMcu => true,
        }
    }

    /// Boards that resolve to this group.
    pub fn boards(self) -> impl Iterator<Item = Board> {
        Board::ALL
            .into_iter()
            .filter(move |b| b.platform_group() == self)
    }
}

impl fmt::Display for PlatformGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for PlatformGroup {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlatformGroup::ALL
            .into_iter()
            .find(|g| g.name() == s)
            .ok_or_else(|| BoardError::UnknownGroup {
                name: s.to_string(),
            })
    }
}
