use crate::config::GameConfig;

use super::board::{Board, DEFAULT_COLS, DEFAULT_ROWS};
use super::gravity::{self, DropError, DropResult};
use super::player::Player;
use super::scan::scan;

/// Default run length required to win the standard game.
pub const DEFAULT_CONNECT: usize = 4;

/// Per-move report emitted by [`GameState::apply_move`].
///
/// Computed fresh from the board after every move; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    /// The piece was placed and the game continues with the other player.
    InProgress,
    /// The move completed a winning run.
    Win(Player),
    /// The move filled the last cell with no winner.
    Draw,
    /// The column had no room; the same player should pick another column.
    ColumnFull { column: usize },
}

/// Where the state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress { turn: Player },
    Won(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is outside the playable range 1..={cols}")]
    InvalidColumn { column: usize, cols: usize },

    #[error("the game is already over")]
    GameAlreadyOver,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewGameError {
    #[error("a {rows}x{cols} board playing to {connect} in a row is unwinnable or degenerate")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        connect: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    connect: usize,
    status: Status,
}

impl GameState {
    /// Start a game on a `rows` x `cols` board playing to `connect` in a
    /// row. Player 1 opens.
    ///
    /// Fails with `InvalidDimensions` if no orientation could ever fit a
    /// winning run (`rows` and `cols` both shorter than `connect`), or if
    /// any parameter is zero.
    pub fn new(rows: usize, cols: usize, connect: usize) -> Result<Self, NewGameError> {
        Self::new_with_first_player(rows, cols, connect, Player::One)
    }

    /// Start a game with an explicit opening player, e.g. one seated with
    /// [`Player::random`].
    pub fn new_with_first_player(
        rows: usize,
        cols: usize,
        connect: usize,
        first: Player,
    ) -> Result<Self, NewGameError> {
        if rows == 0 || cols == 0 || connect == 0 || (rows < connect && cols < connect) {
            return Err(NewGameError::InvalidDimensions {
                rows,
                cols,
                connect,
            });
        }
        Ok(GameState {
            board: Board::new(rows, cols),
            connect,
            status: Status::InProgress { turn: first },
        })
    }

    /// Start a game from a configuration.
    pub fn with_config(config: &GameConfig) -> Result<Self, NewGameError> {
        Self::new(config.rows, config.cols, config.connect)
    }

    /// Start the standard 6x7, connect-4 game.
    pub fn standard() -> Self {
        GameState {
            board: Board::new(DEFAULT_ROWS, DEFAULT_COLS),
            connect: DEFAULT_CONNECT,
            status: Status::InProgress { turn: Player::One },
        }
    }

    /// Get reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The run length required to win.
    pub fn connect(&self) -> usize {
        self.connect
    }

    /// Current state-machine position.
    pub fn status(&self) -> Status {
        self.status
    }

    /// The player to move, or `None` once the game has concluded.
    pub fn current_player(&self) -> Option<Player> {
        match self.status {
            Status::InProgress { turn } => Some(turn),
            Status::Won(_) | Status::Draw => None,
        }
    }

    /// Check if the game is over
    pub fn is_terminal(&self) -> bool {
        !matches!(self.status, Status::InProgress { .. })
    }

    /// 1-based columns that still have room; empty once the game is over.
    pub fn legal_moves(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        (0..self.board.cols())
            .filter(|&col| !self.board.is_column_full(col))
            .map(|col| col + 1)
            .collect()
    }

    /// Apply a move and return the successor state (immutable).
    pub fn apply_move(&self, column: usize) -> Result<(GameState, GameOutcome), MoveError> {
        let mut next = self.clone();
        let outcome = next.apply_move_mut(column)?;
        Ok((next, outcome))
    }

    /// Apply a move in place.
    ///
    /// A full column is a recoverable outcome, not an error: the state is
    /// left untouched and the same player picks another column. The turn
    /// flips only when a piece was actually placed and the game continues.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<GameOutcome, MoveError> {
        let turn = match self.status {
            Status::InProgress { turn } => turn,
            Status::Won(_) | Status::Draw => return Err(MoveError::GameAlreadyOver),
        };

        let dropped = gravity::drop_piece(&mut self.board, column, turn).map_err(
            |DropError::InvalidColumn { column, cols }| MoveError::InvalidColumn { column, cols },
        )?;
        match dropped {
            DropResult::ColumnFull => return Ok(GameOutcome::ColumnFull { column }),
            DropResult::Placed { .. } => {}
        }

        if let Some(winner) = scan(&self.board, self.connect) {
            self.status = Status::Won(winner);
            Ok(GameOutcome::Win(winner))
        } else if self.board.is_full() {
            self.status = Status::Draw;
            Ok(GameOutcome::Draw)
        } else {
            self.status = Status::InProgress { turn: turn.other() };
            Ok(GameOutcome::InProgress)
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}
