use super::player::Player;

/// Default board height used by the standard game.
pub const DEFAULT_ROWS: usize = 6;
/// Default board width used by the standard game.
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside a {rows}x{cols} board")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("board rows must be non-empty and all of the same length")]
    InvalidShape,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Build a board from explicit rows of cells. Row 0 is the top.
    ///
    /// Fails with `InvalidShape` if the input is empty or ragged.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if height == 0 || width == 0 || rows.iter().any(|row| row.len() != width) {
            return Err(BoardError::InvalidShape);
        }
        Ok(Board {
            rows: height,
            cols: width,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Board height.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Board width.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `rows - 1` is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.bounds(row, col)?;
        Ok(self.cells[row * self.cols + col])
    }

    /// Set the cell at a specific position, same bounds contract as [`get`](Self::get).
    pub fn set(&mut self, row: usize, col: usize, value: Cell) -> Result<(), BoardError> {
        self.bounds(row, col)?;
        self.cells[row * self.cols + col] = value;
        Ok(())
    }

    /// Check if the board is completely full.
    ///
    /// True iff no cell anywhere is `Empty`. A draw is decided on this, not
    /// on the top row alone.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Check if a column (0-based) has no room left.
    pub(crate) fn is_column_full(&self, col: usize) -> bool {
        self.at(0, col) != Cell::Empty
    }

    fn bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.rows || col >= self.cols {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    // Unchecked accessors for the gravity and scan loops, whose indices are
    // bounds-safe by construction.
    pub(crate) fn at(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col]
    }

    pub(crate) fn put(&mut self, row: usize, col: usize, value: Cell) {
        debug_assert!(row < self.rows && col < self.cols);
        self.cells[row * self.cols + col] = value;
    }
}

impl Default for Board {
    /// The standard 6x7 board.
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(DEFAULT_ROWS, DEFAULT_COLS);
        for row in 0..DEFAULT_ROWS {
            for col in 0..DEFAULT_COLS {
                assert_eq!(board.get(row, col), Ok(Cell::Empty));
            }
        }
    }

    #[test]
    fn test_default_board_dimensions() {
        let board = Board::default();
        assert_eq!(board.rows(), 6);
        assert_eq!(board.cols(), 7);
    }

    #[test]
    fn test_set_then_get() {
        let mut board = Board::new(6, 7);
        board.set(5, 3, Cell::One).unwrap();
        assert_eq!(board.get(5, 3), Ok(Cell::One));
        assert_eq!(board.get(4, 3), Ok(Cell::Empty));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let board = Board::new(6, 7);
        assert_eq!(
            board.get(6, 0),
            Err(BoardError::OutOfBounds {
                row: 6,
                col: 0,
                rows: 6,
                cols: 7
            })
        );
        assert_eq!(
            board.get(0, 7),
            Err(BoardError::OutOfBounds {
                row: 0,
                col: 7,
                rows: 6,
                cols: 7
            })
        );
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut board = Board::new(2, 2);
        assert!(board.set(2, 0, Cell::Two).is_err());
        assert!(board.set(0, 2, Cell::Two).is_err());
    }

    #[test]
    fn test_is_full_requires_every_cell() {
        let mut board = Board::new(2, 2);
        assert!(!board.is_full());

        // A full top row alone must not count as a full board.
        board.set(0, 0, Cell::One).unwrap();
        board.set(0, 1, Cell::Two).unwrap();
        assert!(!board.is_full());

        board.set(1, 0, Cell::Two).unwrap();
        board.set(1, 1, Cell::One).unwrap();
        assert!(board.is_full());
    }

    #[test]
    fn test_from_rows() {
        let board = Board::from_rows(&[
            vec![Cell::Empty, Cell::Empty],
            vec![Cell::One, Cell::Two],
        ])
        .unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 2);
        assert_eq!(board.get(1, 0), Ok(Cell::One));
        assert_eq!(board.get(1, 1), Ok(Cell::Two));
    }

    #[test]
    fn test_from_rows_rejects_empty_and_ragged() {
        assert_eq!(Board::from_rows(&[]), Err(BoardError::InvalidShape));
        assert_eq!(Board::from_rows(&[vec![]]), Err(BoardError::InvalidShape));
        assert_eq!(
            Board::from_rows(&[vec![Cell::Empty], vec![Cell::Empty, Cell::One]]),
            Err(BoardError::InvalidShape)
        );
    }

    #[test]
    fn test_cell_player() {
        assert_eq!(Cell::Empty.player(), None);
        assert_eq!(Cell::One.player(), Some(Player::One));
        assert_eq!(Cell::Two.player(), Some(Player::Two));
    }

    #[test]
    fn test_error_display() {
        let err = BoardError::OutOfBounds {
            row: 9,
            col: 1,
            rows: 6,
            cols: 7,
        };
        assert_eq!(err.to_string(), "cell (9, 1) is outside a 6x7 board");
    }
}
