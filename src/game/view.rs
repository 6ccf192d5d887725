//! Index-remapped views over the flat grid
//!
//! A move is always computed as "shift toward position 3" on a four-cell
//! line. Which cells make up a line, and in which order, is decided by one of
//! four permutation tables, so a single routine serves rows, columns and both
//! of their reversals.

use std::ops::{Index, IndexMut};

/// Width and height of the board
pub const SIZE: usize = 4;

/// Number of cells in the board
pub const CELLS: usize = SIZE * SIZE;

/// Row-major cell storage
pub type Cells = [u32; CELLS];

/// Underlying cell indices of one line, in iteration order
pub type LineIndices = [usize; SIZE];

/// One line per row (or column) of the board
pub type PermutationTable = [LineIndices; SIZE];

/// Rows, left to right: 0-3, 4-7, 8-11, 12-15
pub const ROWS_FORWARD: PermutationTable = build_table(false, false);

/// Rows, right to left: 3-0, 7-4, 11-8, 15-12
pub const ROWS_REVERSED: PermutationTable = build_table(false, true);

/// Columns, top to bottom: 0,4,8,12 / 1,5,9,13 / ...
pub const COLUMNS_FORWARD: PermutationTable = build_table(true, false);

/// Columns, bottom to top: 12,8,4,0 / 13,9,5,1 / ...
pub const COLUMNS_REVERSED: PermutationTable = build_table(true, true);

const fn build_table(columns: bool, reversed: bool) -> PermutationTable {
    let mut table = [[0; SIZE]; SIZE];
    let mut line = 0;
    while line < SIZE {
        let mut pos = 0;
        while pos < SIZE {
            let step = if reversed { SIZE - 1 - pos } else { pos };
            table[line][pos] = if columns {
                step * SIZE + line
            } else {
                line * SIZE + step
            };
            pos += 1;
        }
        line += 1;
    }
    table
}

/// Mutable four-cell window into the grid
///
/// `view[i]` reads and writes `cells[indices[i]]`. The view borrows the grid
/// for the duration of a single line operation and is never stored. Indexing
/// outside `0..4` panics; callers only ever index with loop counters bounded
/// by [`SIZE`].
pub struct IndexedView<'a> {
    cells: &'a mut Cells,
    indices: &'a LineIndices,
}

impl<'a> IndexedView<'a> {
    pub fn new(cells: &'a mut Cells, indices: &'a LineIndices) -> Self {
        Self { cells, indices }
    }

    /// Number of positions in the view (always 4)
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// A view is never empty; provided alongside `len`
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Values in view order
    pub fn to_array(&self) -> [u32; SIZE] {
        let mut out = [0; SIZE];
        for (pos, slot) in out.iter_mut().enumerate() {
            *slot = self[pos];
        }
        out
    }
}

impl Index<usize> for IndexedView<'_> {
    type Output = u32;

    fn index(&self, pos: usize) -> &u32 {
        &self.cells[self.indices[pos]]
    }
}

impl IndexMut<usize> for IndexedView<'_> {
    fn index_mut(&mut self, pos: usize) -> &mut u32 {
        &mut self.cells[self.indices[pos]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered() -> Cells {
        let mut cells = [0; CELLS];
        for (i, c) in cells.iter_mut().enumerate() {
            *c = (i as u32 + 1) * 10;
        }
        cells
    }

    #[test]
    fn test_forward_order() {
        let mut cells = numbered();
        let indices = [0, 1, 2, 3];
        let mut view = IndexedView::new(&mut cells, &indices);

        assert_eq!(view.len(), 4);
        assert_eq!(view.to_array(), [10, 20, 30, 40]);

        view[0] = 100;
        assert_eq!(cells[0], 100);
    }

    #[test]
    fn test_reversed_order() {
        let mut cells = numbered();
        let indices = [3, 2, 1, 0];
        let mut view = IndexedView::new(&mut cells, &indices);

        assert_eq!(view.to_array(), [40, 30, 20, 10]);

        view[0] = 100;
        assert_eq!(cells[3], 100);
        assert_eq!(cells[0], 10);
    }

    #[test]
    fn test_arbitrary_order() {
        let mut cells = numbered();
        let indices = [15, 0, 9, 6];
        let mut view = IndexedView::new(&mut cells, &indices);

        assert_eq!(view[0], 160);
        assert_eq!(view[1], 10);
        assert_eq!(view[2], 100);
        assert_eq!(view[3], 70);

        view[2] = 1;
        assert_eq!(cells[9], 1);
    }

    #[test]
    fn test_row_tables() {
        assert_eq!(
            ROWS_FORWARD,
            [[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]]
        );
        assert_eq!(
            ROWS_REVERSED,
            [[3, 2, 1, 0], [7, 6, 5, 4], [11, 10, 9, 8], [15, 14, 13, 12]]
        );
    }

    #[test]
    fn test_column_tables() {
        assert_eq!(
            COLUMNS_FORWARD,
            [[0, 4, 8, 12], [1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15]]
        );
        assert_eq!(
            COLUMNS_REVERSED,
            [[12, 8, 4, 0], [13, 9, 5, 1], [14, 10, 6, 2], [15, 11, 7, 3]]
        );
    }

    #[test]
    fn test_each_table_covers_every_cell_once() {
        for table in [ROWS_FORWARD, ROWS_REVERSED, COLUMNS_FORWARD, COLUMNS_REVERSED] {
            let mut seen = [false; CELLS];
            for idx in table.iter().flatten() {
                assert!(!seen[*idx]);
                seen[*idx] = true;
            }
            assert!(seen.iter().all(|s| *s));
        }
    }
}
