//! Win detection: one run-length detector applied to every line orientation
//! of the board.

use super::board::{Board, Cell};
use super::player::Player;

/// Scan the board for a `run_length`-in-a-row and report its owner.
///
/// Orientations are checked in a fixed order (rows, then columns, then
/// down-right diagonals, then down-left diagonals) and the first winner
/// found is returned, so hand-built boards holding more than one qualifying
/// run still scan deterministically. Pure: the board is never mutated and
/// repeated calls yield the same answer.
///
/// `run_length` is expected to be at least 1; [`GameState`](super::GameState)
/// guarantees this for every board it owns.
pub fn scan(board: &Board, run_length: usize) -> Option<Player> {
    scan_rows(board, run_length)
        .or_else(|| scan_cols(board, run_length))
        .or_else(|| scan_down_right(board, run_length))
        .or_else(|| scan_down_left(board, run_length))
}

/// Run the detector over one line of cells.
///
/// An empty cell resets the run; a different piece restarts it at length 1.
fn scan_line<I>(cells: I, run_length: usize) -> Option<Player>
where
    I: Iterator<Item = Cell>,
{
    let mut current = Cell::Empty;
    let mut run = 0;

    for cell in cells {
        match cell.player() {
            None => run = 0,
            Some(player) => {
                run = if cell == current { run + 1 } else { 1 };
                if run >= run_length {
                    return Some(player);
                }
            }
        }
        current = cell;
    }

    None
}

fn scan_rows(board: &Board, run_length: usize) -> Option<Player> {
    (0..board.rows()).find_map(|row| {
        scan_line((0..board.cols()).map(|col| board.at(row, col)), run_length)
    })
}

fn scan_cols(board: &Board, run_length: usize) -> Option<Player> {
    (0..board.cols()).find_map(|col| {
        scan_line((0..board.rows()).map(|row| board.at(row, col)), run_length)
    })
}

/// Diagonals stepping (+1, +1), enumerated from the left column and the
/// top row.
fn scan_down_right(board: &Board, run_length: usize) -> Option<Player> {
    let left = (0..board.rows()).map(|row| (row, 0));
    let top = (1..board.cols()).map(|col| (0, col));
    left.chain(top)
        .find_map(|start| scan_line(walk(board, start, 1), run_length))
}

/// Diagonals stepping (+1, -1), enumerated from the top row and the right
/// column.
fn scan_down_left(board: &Board, run_length: usize) -> Option<Player> {
    let top = (0..board.cols()).map(|col| (0, col));
    let right = (1..board.rows()).map(|row| (row, board.cols() - 1));
    top.chain(right)
        .find_map(|start| scan_line(walk(board, start, -1), run_length))
}

/// Walk a diagonal from `start`, descending one row per step and moving
/// `col_step` columns, until the walk leaves the board.
fn walk(board: &Board, start: (usize, usize), col_step: isize) -> impl Iterator<Item = Cell> + '_ {
    std::iter::successors(Some(start), move |&(row, col)| {
        let row = row + 1;
        let col = col as isize + col_step;
        (row < board.rows() && col >= 0 && col < board.cols() as isize)
            .then_some((row, col as usize))
    })
    .map(|(row, col)| board.at(row, col))
}
