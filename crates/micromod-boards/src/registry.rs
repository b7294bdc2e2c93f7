//! The board registry: board identifier to driver descriptor.
//!
//! The registry is built once per process from the closed [`Board`] table and
//! never mutated afterwards, so it can be read from any thread without
//! synchronization.

use std::collections::BTreeMap;
use std::sync::OnceLock;

use serde::Serialize;

use crate::board::{Board, PlatformGroup};
use crate::constraint::VersionConstraint;
use crate::error::{BoardError, Result};

/// Revision of the board table. Tracks the recipe version it ships with.
pub const REGISTRY_REVISION: &str = "0.3.0";

/// Everything the build needs to know about one board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct BoardDescriptor {
    /// The board variant.
    #[serde(skip)]
    pub board: Board,
    /// Registry key.
    pub board_id: String,
    /// Driver grouping the board resolves to (e.g., "arm-mcu").
    pub platform_group: String,
    /// Driver package providing the group.
    pub package_name: String,
    /// Acceptable versions of `package_name`.
    pub version_constraint: VersionConstraint,
    /// Consumers need compile-time access to the driver package's headers.
    pub transitive_header_exposure: bool,
}

impl BoardDescriptor {
    /// Build the descriptor for a board from its group's package data.
    pub fn for_board(board: Board) -> Self {
        let group = board.platform_group();
        Self {
            board,
            board_id: board.id().to_string(),
            platform_group: group.name().to_string(),
            package_name: group.package_name().to_string(),
            version_constraint: group.version_constraint(),
            transitive_header_exposure: group.transitive_headers(),
        }
    }
}

/// Immutable map of all supported boards.
#[derive(Debug, Clone)]
pub struct BoardRegistry {
    entries: BTreeMap<&'static str, BoardDescriptor>,
}

static GLOBAL: OnceLock<BoardRegistry> = OnceLock::new();

impl BoardRegistry {
    /// Build a registry from the built-in board table.
    pub fn builtin() -> Self {
        let entries = Board::ALL
            .into_iter()
            .map(|b| (b.id(), BoardDescriptor::for_board(b)))
            .collect();
        Self { entries }
    }

    /// The process-wide registry, initialized on first use.
    pub fn global() -> &'static BoardRegistry {
        GLOBAL.get_or_init(Self::builtin)
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, board_id: &str) -> Result<&BoardDescriptor> {
        self.entries
            .get(board_id)
            .ok_or_else(|| BoardError::NotFound {
                board_id: board_id.to_string(),
            })
    }

    /// Descriptor of a known board variant.
    pub fn get(&self, board: Board) -> &BoardDescriptor {
        // builtin() inserts every Board
        &self.entries[board.id()]
    }

    /// Whether `board_id` is a registry key.
    pub fn contains(&self, board_id: &str) -> bool {
        self.entries.contains_key(board_id)
    }

    /// All descriptors in board-id order.
    pub fn boards(&self) -> impl Iterator<Item = &BoardDescriptor> {
        self.entries.values()
    }

    /// Descriptors of the boards that resolve to `group`.
    pub fn boards_in_group(&self, group: PlatformGroup) -> Vec<&BoardDescriptor> {
        self.entries
            .values()
            .filter(|d| d.platform_group == group.name())
            .collect()
    }

    /// Number of boards.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry has no boards.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
