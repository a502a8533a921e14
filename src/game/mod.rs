//! Core connect-N game logic: board representation, gravity compression,
//! run scanning, and the game state machine with immutable transitions.

mod board;
mod gravity;
mod player;
mod scan;
mod state;

pub use board::{Board, BoardError, Cell, DEFAULT_COLS, DEFAULT_ROWS};
pub use gravity::{drop_piece, DropError, DropResult};
pub use player::Player;
pub use scan::scan;
pub use state::{
    GameOutcome, GameState, MoveError, NewGameError, Status, DEFAULT_CONNECT,
};
