use std::fmt;

/// Phase of the game flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Accepting moves
    #[default]
    Playing,
    /// The winning tile was reached; waiting for play-again / quit
    Won,
    /// No move is left; waiting for play-again / quit
    Lost,
    /// Restart requested; waiting for confirmation
    ConfirmRestart,
    /// Quit requested; waiting for confirmation
    ConfirmQuit,
    /// Terminal state
    Quit,
}

impl GameState {
    /// Whether the game flow has ended for good
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Quit)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::Playing => "Playing",
            GameState::Won => "Won",
            GameState::Lost => "Lost",
            GameState::ConfirmRestart => "ConfirmRestart",
            GameState::ConfirmQuit => "ConfirmQuit",
            GameState::Quit => "Quit",
        };
        f.write_str(name)
    }
}
