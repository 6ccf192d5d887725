use log::debug;
use rand::Rng;

use super::action::Direction;
use super::merge::{self, MoveResult};
use super::view::{CELLS, COLUMNS_FORWARD, Cells, ROWS_FORWARD, SIZE};

/// Value of every spawned tile
pub const BASE_TILE: u32 = 2;

/// Tile value that wins the game
pub const WIN_TILE: u32 = 2048;

/// The 4x4 board, stored row-major
///
/// Every cell is 0 (empty) or a power of two no smaller than [`BASE_TILE`].
/// Cells only change through [`Grid::apply_move`] and
/// [`Grid::try_add_random_tile`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    cells: Cells,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from known cell values (row-major)
    pub fn from_cells(cells: Cells) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    /// Clear every cell; spawning the opening tiles is up to the caller
    pub fn reset(&mut self) {
        self.cells = [0; CELLS];
    }

    /// Place a base tile on a uniformly chosen empty cell
    ///
    /// Returns `false` when the grid is full.
    pub fn try_add_random_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        let empty: Vec<usize> = self
            .cells
            .iter()
            .enumerate()
            .filter(|(_, v)| **v == 0)
            .map(|(i, _)| i)
            .collect();

        if empty.is_empty() {
            return false;
        }

        let idx = empty[rng.gen_range(0..empty.len())];
        self.cells[idx] = BASE_TILE;
        debug!("added tile {} at cell {}", BASE_TILE, idx);
        true
    }

    /// Whether the winning tile is on the board
    pub fn has_max_value(&self) -> bool {
        self.cells.contains(&WIN_TILE)
    }

    /// Whether any move can still change the board
    ///
    /// True if a cell is empty, or two neighbouring cells in a row or column
    /// hold the same value.
    pub fn can_make_move(&self) -> bool {
        ROWS_FORWARD
            .iter()
            .chain(COLUMNS_FORWARD.iter())
            .any(|line| {
                (0..SIZE - 1).any(|pos| {
                    let a = self.cells[line[pos]];
                    let b = self.cells[line[pos + 1]];
                    a == 0 || b == 0 || a == b
                })
            })
    }

    /// Shift and merge every line toward `direction`
    pub fn apply_move(&mut self, direction: Direction) -> MoveResult {
        merge::apply_move(&mut self.cells, direction)
    }

    pub fn move_up(&mut self) -> MoveResult {
        self.apply_move(Direction::Up)
    }

    pub fn move_down(&mut self) -> MoveResult {
        self.apply_move(Direction::Down)
    }

    pub fn move_left(&mut self) -> MoveResult {
        self.apply_move(Direction::Left)
    }

    pub fn move_right(&mut self) -> MoveResult {
        self.apply_move(Direction::Right)
    }

    /// Largest tile on the board (0 when empty)
    pub fn max_tile(&self) -> u32 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|v| **v == 0).count()
    }
}
