//! Term 2048 - the sliding-tile puzzle in the terminal
//!
//! This library provides:
//! - Core game logic: grid moves and the game-flow state machine (game module)
//! - Keyboard mapping to game inputs (input module)
//! - Text and TUI rendering (render module)
//! - Best-score storage (persistence module)
//! - Interactive and automatic play (modes module)

pub mod config;
pub mod game;
pub mod input;
pub mod modes;
pub mod persistence;
pub mod render;
