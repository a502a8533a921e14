//! Column drops and the gravity settle pass.

use super::board::{Board, Cell};
use super::player::Player;

/// Result of a drop attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropResult {
    /// The piece came to rest in `row` of the target column.
    Placed { row: usize },
    /// The column had no room; the board was left untouched.
    ColumnFull,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DropError {
    #[error("column {column} is outside the playable range 1..={cols}")]
    InvalidColumn { column: usize, cols: usize },
}

/// Drop a piece for `player` into a 1-based `column`.
///
/// The piece is written into the topmost row of the column and the board is
/// then settled so that every piece rests on the lowest open cell of its
/// column. A column whose topmost cell is already occupied is full; it is
/// reported without touching the board, so callers can let the same player
/// retry.
pub fn drop_piece(
    board: &mut Board,
    column: usize,
    player: Player,
) -> Result<DropResult, DropError> {
    if column < 1 || column > board.cols() {
        return Err(DropError::InvalidColumn {
            column,
            cols: board.cols(),
        });
    }
    let col = column - 1;

    if board.is_column_full(col) {
        return Ok(DropResult::ColumnFull);
    }

    board.put(0, col, player.cell());
    settle(board);

    // The new piece is now the topmost occupied cell of its column.
    for row in 0..board.rows() {
        if board.at(row, col) != Cell::Empty {
            return Ok(DropResult::Placed { row });
        }
    }

    unreachable!("a piece was just placed in column {column}");
}

/// Settle every column so that no piece sits above an empty cell.
///
/// One bottom-up sweep per column is enough: each occupied cell moves
/// straight to the lowest slot still open below it, so a whole chain of
/// floating pieces collapses in a single pass.
pub(crate) fn settle(board: &mut Board) {
    for col in 0..board.cols() {
        let mut open = board.rows() - 1;
        for row in (0..board.rows()).rev() {
            let cell = board.at(row, col);
            if cell != Cell::Empty {
                if row != open {
                    board.put(open, col, cell);
                    board.put(row, col, Cell::Empty);
                }
                open = open.saturating_sub(1);
            }
        }
    }
}
