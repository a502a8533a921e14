//! # Connect-N
//!
//! A turn-based, gravity-affected grid game engine: a generalized Connect
//! Four over configurable board dimensions and run lengths. The engine owns
//! board state, move legality, and win/draw detection; rendering and
//! session handling belong to the caller.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, gravity compression, run scanning,
//!   state machine
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//!
//! ## Example
//!
//! ```
//! use connect_n::game::{GameOutcome, GameState};
//!
//! let mut game = GameState::standard();
//! assert_eq!(game.apply_move_mut(4), Ok(GameOutcome::InProgress));
//! ```

pub mod config;
pub mod error;
pub mod game;
