//! Gravity placement. Every cell set during play goes through [`apply_move`].

use super::{Board, Coord, Player};
use crate::error::BoardError;

/// Lowest empty row in `column`, or `None` if the column is full.
///
/// Scans from the bottom row upward. A column outside the board has no
/// landing row either.
pub fn find_landing_row(board: &Board, column: usize) -> Option<usize> {
    if column >= board.width() {
        return None;
    }
    (0..board.height())
        .rev()
        .find(|&row| matches!(board.get(row, column), Ok(cell) if cell.is_empty()))
}

/// Drop a piece for `player` into `column`.
///
/// Returns the coordinate where it landed, or `Ok(None)` when the column is
/// full and the move must be rejected. A column outside the board is
/// [`BoardError::ColumnOutOfRange`].
pub fn apply_move(
    board: &mut Board,
    column: usize,
    player: Player,
) -> Result<Option<Coord>, BoardError> {
    if column >= board.width() {
        return Err(BoardError::ColumnOutOfRange {
            col: column,
            width: board.width(),
        });
    }

    let Some(row) = find_landing_row(board, column) else {
        return Ok(None);
    };
    board.set(row, column, player)?;
    Ok(Some(Coord::new(row, column)))
}
