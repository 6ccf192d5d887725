/// Direction a move shifts the tiles toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order the cycle policy tries them
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Down,
        Direction::Right,
        Direction::Up,
    ];
}

/// Abstract input understood by the game controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputAction {
    /// No mapped action (unknown key)
    #[default]
    None,
    /// Shift and merge the grid in a direction
    Move(Direction),
    /// Ask to start a new game
    RequestRestart,
    /// Ask to leave the game
    RequestQuit,
    /// Answer "yes" to the pending question
    ConfirmRequest,
    /// Answer "no" to the pending question
    CancelRequest,
}

impl From<Direction> for InputAction {
    fn from(direction: Direction) -> Self {
        InputAction::Move(direction)
    }
}
