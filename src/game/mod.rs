//! Core game logic for 2048
//!
//! This module contains the grid transformation engine and the game-flow
//! state machine, without any I/O or rendering dependencies. The same
//! controller drives both interactive and automatic play.

pub mod action;
pub mod controller;
pub mod grid;
pub mod merge;
pub mod score;
pub mod state;
pub mod view;

// Re-export commonly used types
pub use action::{Direction, InputAction};
pub use controller::GameController;
pub use grid::{BASE_TILE, Grid, WIN_TILE};
pub use merge::MoveResult;
pub use score::{BestScoreCallback, ScoreTracker};
pub use state::GameState;
pub use view::{CELLS, Cells, IndexedView, SIZE};
