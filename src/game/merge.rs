//! Shift-and-merge algorithm shared by all four move directions

use std::ops::AddAssign;

use super::action::Direction;
use super::view::{
    COLUMNS_FORWARD, COLUMNS_REVERSED, Cells, IndexedView, PermutationTable, ROWS_FORWARD,
    ROWS_REVERSED,
};

/// Outcome of shifting one line or the whole grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    /// Whether any cell changed value
    pub has_moved: bool,
    /// Sum of the tiles created by merges during this move
    pub score_gained: u32,
}

impl MoveResult {
    /// A move that changed nothing
    pub const NONE: MoveResult = MoveResult {
        has_moved: false,
        score_gained: 0,
    };
}

impl AddAssign for MoveResult {
    fn add_assign(&mut self, other: MoveResult) {
        self.has_moved |= other.has_moved;
        self.score_gained += other.score_gained;
    }
}

/// Shift and merge one line toward position 3
///
/// Runs a merge pass then a compaction pass. The merge pass scans from the
/// far end inward, pairing each non-empty cell with the previous non-empty
/// cell seen; after a pair merges the scan continues from the emptied cell,
/// so a tile takes part in at most one merge per move.
pub fn shift_and_merge(view: &mut IndexedView<'_>) -> MoveResult {
    let mut result = MoveResult::NONE;
    let far = view.len() - 1;

    let mut last_not_zero = far;
    for i in (0..far).rev() {
        if view[i] == 0 {
            continue;
        }

        if view[i] == view[last_not_zero] {
            view[last_not_zero] *= 2;
            view[i] = 0;
            result.score_gained += view[last_not_zero];
            result.has_moved = true;
        }

        last_not_zero = i;
    }

    // `last_zero` is the next free slot counted from the far end
    let mut last_zero = far;
    for i in (0..=far).rev() {
        if view[i] == 0 {
            continue;
        }

        if i != last_zero {
            view[last_zero] = view[i];
            view[i] = 0;
            result.has_moved = true;
        }

        last_zero = last_zero.saturating_sub(1);
    }

    result
}

/// Permutation table whose "far end" lies in `direction`
pub fn table_for(direction: Direction) -> &'static PermutationTable {
    match direction {
        Direction::Right => &ROWS_FORWARD,
        Direction::Left => &ROWS_REVERSED,
        Direction::Down => &COLUMNS_FORWARD,
        Direction::Up => &COLUMNS_REVERSED,
    }
}

/// Apply a move to every line of the grid
pub fn apply_move(cells: &mut Cells, direction: Direction) -> MoveResult {
    let mut total = MoveResult::NONE;
    for line in table_for(direction) {
        let mut view = IndexedView::new(cells, line);
        total += shift_and_merge(&mut view);
    }
    total
}
