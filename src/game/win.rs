//! Four-in-a-row and tie detection.

use super::{Board, Cell, Coord, Player};

/// Number of same-owner cells needed to win.
const RUN: usize = 4;

/// Scan directions as (row step, col step): right, down, down-right, down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// The four cells of a winning run, starting at its anchor.
pub type WinningLine = [Coord; RUN];

/// First run of four cells owned by `player`, in scan order.
///
/// Every cell is tried as the anchor of a run in each direction, so each line
/// is seen once per direction from its top (or left) end.
pub fn find_win(board: &Board, player: Player) -> Option<WinningLine> {
    let target = player.to_cell();

    for row in 0..board.height() {
        for col in 0..board.width() {
            for &(dr, dc) in &DIRECTIONS {
                if let Some(line) = run_from(board, row, col, dr, dc, target) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// Does `player` own any four-in-a-row?
pub fn has_win(board: &Board, player: Player) -> bool {
    find_win(board, player).is_some()
}

/// Check only the lines through `at` for a run of the owner of `at`.
///
/// Equivalent to [`has_win`] for the piece just placed at `at` when the board
/// held no win before that placement.
pub fn has_win_through(board: &Board, at: Coord) -> bool {
    let cell = match board.get(at.row, at.col) {
        Ok(cell) if !cell.is_empty() => cell,
        _ => return false,
    };

    let (row, col) = (at.row as isize, at.col as isize);
    DIRECTIONS.iter().any(|&(dr, dc)| {
        let count = 1
            + count_matching(board, row, col, dr, dc, cell)
            + count_matching(board, row, col, -dr, -dc, cell);
        count >= RUN
    })
}

/// A full board on which neither player has a run.
pub fn is_tie(board: &Board) -> bool {
    board.is_full() && !has_win(board, Player::One) && !has_win(board, Player::Two)
}

fn run_from(
    board: &Board,
    row: usize,
    col: usize,
    dr: isize,
    dc: isize,
    target: Cell,
) -> Option<WinningLine> {
    let mut line = [Coord::new(row, col); RUN];
    for (step, slot) in line.iter_mut().enumerate() {
        let r = row as isize + dr * step as isize;
        let c = col as isize + dc * step as isize;
        if board.cell_at(r, c) != Some(target) {
            return None;
        }
        *slot = Coord::new(r as usize, c as usize);
    }
    Some(line)
}

/// Consecutive cells equal to `cell` walking away from (row, col), exclusive.
fn count_matching(
    board: &Board,
    row: isize,
    col: isize,
    dr: isize,
    dc: isize,
    cell: Cell,
) -> usize {
    let mut count = 0;
    let (mut r, mut c) = (row + dr, col + dc);
    while board.cell_at(r, c) == Some(cell) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}
