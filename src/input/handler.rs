use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Direction, InputAction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Input for the game controller
    Game(InputAction),
    /// Leave immediately, skipping the quit confirmation
    ForceQuit,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::ForceQuit;
        }

        KeyAction::Game(Self::map_key(key.code))
    }

    fn map_key(code: KeyCode) -> InputAction {
        match code {
            // Movement - Arrow keys
            KeyCode::Up => Direction::Up.into(),
            KeyCode::Down => Direction::Down.into(),
            KeyCode::Left => Direction::Left.into(),
            KeyCode::Right => Direction::Right.into(),

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Direction::Up.into(),
            KeyCode::Char('s') | KeyCode::Char('S') => Direction::Down.into(),
            KeyCode::Char('a') | KeyCode::Char('A') => Direction::Left.into(),
            KeyCode::Char('d') | KeyCode::Char('D') => Direction::Right.into(),

            // Requests
            KeyCode::Char('r') | KeyCode::Char('R') => InputAction::RequestRestart,
            KeyCode::Char('q') | KeyCode::Char('Q') => InputAction::RequestQuit,

            // Answers
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                InputAction::ConfirmRequest
            }
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => InputAction::CancelRequest,

            _ => InputAction::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
