//! Core Connect Four game logic: board representation, player types, and the
//! game session state machine. Free of any UI dependency; the presentation
//! layer hooks in through [`GameObserver`].

mod board;
mod observer;
mod player;
mod state;

pub use board::{Board, BoardError, Cell, MoveError, CONNECT, DEFAULT_COLS, DEFAULT_ROWS};
pub use observer::GameObserver;
pub use player::Player;
pub use state::{GameOutcome, GameState, PlacedPiece};
