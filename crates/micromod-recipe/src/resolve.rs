//! Board resolution.

use micromod_boards::{BoardDescriptor, BoardRegistry};
use tracing::debug;

use crate::validate::ValidatedBoard;

/// Resolve a validated board to its registry descriptor.
///
/// Pure: no platform check is repeated, and the same board always yields
/// the same descriptor.
pub fn resolve(board: &ValidatedBoard) -> &'static BoardDescriptor {
    let descriptor = BoardRegistry::global().get(board.board());
    debug!(
        board = %board,
        platform_group = %descriptor.platform_group,
        "board resolved"
    );
    descriptor
}
