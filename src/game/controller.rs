use log::{debug, info, warn};

use super::{
    action::{Direction, InputAction},
    grid::Grid,
    merge::MoveResult,
    score::{BestScoreCallback, ScoreTracker},
    state::GameState,
};

/// Tiles placed on an empty grid when a game starts
pub const OPENING_TILES: usize = 2;

/// Tiles placed after every move that changed the grid
pub const TILES_PER_MOVE: usize = 2;

/// Turn-based game flow: owns the grid and the scores and advances the
/// [`GameState`] one input at a time
pub struct GameController {
    grid: Grid,
    state: GameState,
    scores: ScoreTracker,
    last_move: MoveResult,
    rng: rand::rngs::ThreadRng,
}

impl GameController {
    /// Create a controller and start the first game
    ///
    /// `on_best_score` runs synchronously after any move that raises the
    /// best score.
    pub fn new(best_score: u32, on_best_score: BestScoreCallback) -> Self {
        let mut controller = Self::with_grid(
            Grid::new(),
            ScoreTracker::with_callback(best_score, on_best_score),
        );
        controller.start_new_game();
        controller
    }

    /// Create a controller in `Playing` on a known board, without spawning
    pub fn with_grid(grid: Grid, scores: ScoreTracker) -> Self {
        Self {
            grid,
            state: GameState::Playing,
            scores,
            last_move: MoveResult::NONE,
            rng: rand::thread_rng(),
        }
    }

    /// Clear the board, place the opening tiles and zero the running score
    pub fn start_new_game(&mut self) {
        self.grid.reset();
        for _ in 0..OPENING_TILES {
            self.grid.try_add_random_tile(&mut self.rng);
        }
        self.scores.reset();
        self.last_move = MoveResult::NONE;
        self.state = GameState::Playing;
        info!("new game started (best score {})", self.scores.best());
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.scores.score()
    }

    pub fn best_score(&self) -> u32 {
        self.scores.best()
    }

    /// Result of the most recent move in this game
    pub fn last_move(&self) -> MoveResult {
        self.last_move
    }

    /// Process one input and return the resulting state
    pub fn handle_input(&mut self, input: InputAction) -> GameState {
        if input == InputAction::None {
            return self.state;
        }

        let next = match self.state {
            GameState::Playing => self.handle_playing(input),
            GameState::Won | GameState::Lost => self.handle_end_game(input),
            GameState::ConfirmRestart => self.handle_confirm_restart(input),
            GameState::ConfirmQuit => self.handle_confirm_quit(input),
            GameState::Quit => {
                warn!("input {:?} received after quit; ignoring", input);
                GameState::Quit
            }
        };

        if next != self.state {
            info!("state {} -> {}", self.state, next);
        }
        self.state = next;
        next
    }

    fn handle_playing(&mut self, input: InputAction) -> GameState {
        match input {
            InputAction::Move(direction) => self.play_move(direction),
            InputAction::RequestRestart => GameState::ConfirmRestart,
            InputAction::RequestQuit => GameState::ConfirmQuit,
            InputAction::ConfirmRequest | InputAction::CancelRequest | InputAction::None => {
                GameState::Playing
            }
        }
    }

    /// Move, score, then check for a win before spawning; the deadlock check
    /// runs on the board with the new tiles in place
    fn play_move(&mut self, direction: Direction) -> GameState {
        let result = self.grid.apply_move(direction);
        debug!(
            "move {:?}: moved={} gained={}",
            direction, result.has_moved, result.score_gained
        );
        self.last_move = result;
        self.scores.add(result.score_gained);

        if self.grid.has_max_value() {
            return GameState::Won;
        }

        if result.has_moved {
            for _ in 0..TILES_PER_MOVE {
                self.grid.try_add_random_tile(&mut self.rng);
            }
        }

        if self.grid.can_make_move() {
            GameState::Playing
        } else {
            GameState::Lost
        }
    }

    fn handle_end_game(&mut self, input: InputAction) -> GameState {
        match input {
            InputAction::ConfirmRequest => {
                self.start_new_game();
                GameState::Playing
            }
            InputAction::CancelRequest => GameState::Quit,
            _ => self.state,
        }
    }

    fn handle_confirm_restart(&mut self, input: InputAction) -> GameState {
        match input {
            InputAction::ConfirmRequest => {
                self.start_new_game();
                GameState::Playing
            }
            InputAction::CancelRequest => GameState::Playing,
            _ => GameState::ConfirmRestart,
        }
    }

    fn handle_confirm_quit(&mut self, input: InputAction) -> GameState {
        match input {
            InputAction::ConfirmRequest => GameState::Quit,
            InputAction::CancelRequest => GameState::Playing,
            _ => GameState::ConfirmQuit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::grid::WIN_TILE;
    use crate::game::view::CELLS;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tiles(grid: &Grid) -> usize {
        CELLS - grid.empty_count()
    }

    fn controller_on(cells: [u32; CELLS]) -> GameController {
        GameController::with_grid(Grid::from_cells(cells), ScoreTracker::new(0))
    }

    #[rustfmt::skip]
    const DEADLOCKED: [u32; CELLS] = [
        2, 4, 8, 2,
        4, 8, 2, 4,
        8, 16, 4, 8,
        16, 32, 8, 64,
    ];

    #[test]
    fn test_new_game_has_two_tiles() {
        let controller = GameController::new(0, Box::new(|_| {}));
        assert_eq!(controller.state(), GameState::Playing);
        assert_eq!(controller.score(), 0);
        assert_eq!(tiles(controller.grid()), OPENING_TILES);
    }

    #[test]
    fn test_move_spawns_two_tiles() {
        #[rustfmt::skip]
        let mut controller = controller_on([
            2, 0, 0, 0,
            0, 2, 0, 0,
            0, 0, 2, 0,
            0, 0, 0, 2,
        ]);

        let state = controller.handle_input(InputAction::Move(Direction::Up));

        assert_eq!(state, GameState::Playing);
        assert_eq!(&controller.grid().cells()[..4], &[2, 2, 2, 2]);
        assert_eq!(tiles(controller.grid()), 4 + TILES_PER_MOVE);
        assert!(controller.last_move().has_moved);
        assert_eq!(controller.score(), 0);
    }

    #[test]
    fn test_noop_move_does_not_spawn() {
        let mut cells = [0; CELLS];
        cells[0] = 2;
        let mut controller = controller_on(cells);

        controller.handle_input(InputAction::Move(Direction::Up));
        controller.handle_input(InputAction::Move(Direction::Left));

        assert_eq!(controller.state(), GameState::Playing);
        assert_eq!(controller.grid().cells(), &cells);
        assert!(!controller.last_move().has_moved);
    }

    #[test]
    fn test_merge_adds_score() {
        let mut cells = [0; CELLS];
        cells[0] = 4;
        cells[1] = 4;
        let mut controller = controller_on(cells);

        controller.handle_input(InputAction::Move(Direction::Right));

        assert_eq!(controller.score(), 8);
        assert_eq!(controller.best_score(), 8);
        assert_eq!(controller.grid().cells()[3], 8);
    }

    #[test]
    fn test_reaching_win_tile_wins_without_spawning() {
        let mut cells = [0; CELLS];
        cells[0] = 1024;
        cells[1] = 1024;
        let mut controller = controller_on(cells);

        let state = controller.handle_input(InputAction::Move(Direction::Right));

        assert_eq!(state, GameState::Won);
        assert_eq!(controller.grid().cells()[3], WIN_TILE);
        assert_eq!(tiles(controller.grid()), 1);
        assert_eq!(controller.score(), WIN_TILE);
    }

    #[test]
    fn test_deadlocked_board_is_lost_on_next_move() {
        let mut controller = controller_on(DEADLOCKED);
        assert!(!controller.grid().can_make_move());

        let state = controller.handle_input(InputAction::Move(Direction::Down));

        assert_eq!(state, GameState::Lost);
        assert_eq!(controller.grid().cells(), &DEADLOCKED);
    }

    #[test]
    fn test_spawn_that_fills_board_loses() {
        #[rustfmt::skip]
        let mut controller = controller_on([
            0, 4, 8, 16,
            8, 16, 32, 64,
            0, 16, 32, 64,
            32, 64, 128, 256,
        ]);

        let state = controller.handle_input(InputAction::Move(Direction::Left));

        #[rustfmt::skip]
        let expected = [
            4, 8, 16, 2,
            8, 16, 32, 64,
            16, 32, 64, 2,
            32, 64, 128, 256,
        ];
        assert_eq!(controller.grid().cells(), &expected);
        assert_eq!(state, GameState::Lost);
    }

    #[test]
    fn test_moves_ignored_outside_playing() {
        let mut cells = [0; CELLS];
        cells[0] = 2;
        let mut controller = controller_on(cells);

        controller.handle_input(InputAction::RequestQuit);
        controller.handle_input(InputAction::Move(Direction::Right));

        assert_eq!(controller.state(), GameState::ConfirmQuit);
        assert_eq!(controller.grid().cells(), &cells);
    }

    #[test]
    fn test_quit_confirmation() {
        let mut controller = controller_on([0; CELLS]);

        assert_eq!(
            controller.handle_input(InputAction::RequestQuit),
            GameState::ConfirmQuit
        );
        assert_eq!(
            controller.handle_input(InputAction::CancelRequest),
            GameState::Playing
        );
        controller.handle_input(InputAction::RequestQuit);
        assert_eq!(
            controller.handle_input(InputAction::ConfirmRequest),
            GameState::Quit
        );

        // Terminal: nothing moves it out of Quit
        for input in [
            InputAction::ConfirmRequest,
            InputAction::CancelRequest,
            InputAction::RequestRestart,
            InputAction::Move(Direction::Up),
        ] {
            assert_eq!(controller.handle_input(input), GameState::Quit);
        }
    }

    #[test]
    fn test_restart_confirmation() {
        let mut cells = [0; CELLS];
        cells[0] = 4;
        cells[1] = 4;
        let mut controller = controller_on(cells);
        controller.handle_input(InputAction::Move(Direction::Left));
        assert_eq!(controller.score(), 8);

        assert_eq!(
            controller.handle_input(InputAction::RequestRestart),
            GameState::ConfirmRestart
        );
        assert_eq!(
            controller.handle_input(InputAction::CancelRequest),
            GameState::Playing
        );
        assert_eq!(controller.score(), 8);

        controller.handle_input(InputAction::RequestRestart);
        assert_eq!(
            controller.handle_input(InputAction::ConfirmRequest),
            GameState::Playing
        );
        assert_eq!(controller.score(), 0);
        assert_eq!(controller.best_score(), 8);
        assert_eq!(tiles(controller.grid()), OPENING_TILES);
    }

    #[test]
    fn test_end_game_answers() {
        let mut controller = controller_on(DEADLOCKED);
        controller.handle_input(InputAction::Move(Direction::Up));
        assert_eq!(controller.state(), GameState::Lost);

        // Unrelated input keeps waiting
        assert_eq!(
            controller.handle_input(InputAction::RequestRestart),
            GameState::Lost
        );
        assert_eq!(
            controller.handle_input(InputAction::ConfirmRequest),
            GameState::Playing
        );
        assert_eq!(tiles(controller.grid()), OPENING_TILES);

        let mut controller = controller_on(DEADLOCKED);
        controller.handle_input(InputAction::Move(Direction::Up));
        assert_eq!(
            controller.handle_input(InputAction::CancelRequest),
            GameState::Quit
        );
    }

    #[test]
    fn test_none_input_is_noop() {
        let mut controller = controller_on([0; CELLS]);
        controller.handle_input(InputAction::RequestRestart);
        assert_eq!(
            controller.handle_input(InputAction::None),
            GameState::ConfirmRestart
        );
    }

    #[test]
    fn test_best_score_callback_fires_per_raising_move() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let scores = ScoreTracker::with_callback(4, Box::new(move |b| sink.borrow_mut().push(b)));

        #[rustfmt::skip]
        let cells = [
            2, 2, 0, 0,
            4, 4, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ];
        let mut controller = GameController::with_grid(Grid::from_cells(cells), scores);

        // Two merges in one move: one notification with the total
        controller.handle_input(InputAction::Move(Direction::Left));
        assert_eq!(*calls.borrow(), vec![12]);
        assert_eq!(controller.best_score(), 12);
    }
}
