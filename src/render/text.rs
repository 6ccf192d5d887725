//! Plain-text board layout
//!
//! ```text
//! |----|----|----|----|
//! |   2|   0|   0|   4|
//! |----|----|----|----|
//! ...
//! ```

use std::fmt::{self, Write};

use crate::game::{Cells, Grid, SIZE};

/// Separator line drawn above every row and after the last one
pub const SEPARATOR: &str = "|----|----|----|----|";

/// Width of a cell between the `|` delimiters
pub const CELL_WIDTH: usize = 4;

/// Lay out the cells as a 4x4 matrix, values right-aligned
pub fn matrix_string(cells: &Cells) -> String {
    let mut out = String::with_capacity((SEPARATOR.len() + 1) * (2 * SIZE + 1));
    for row in cells.chunks(SIZE) {
        out.push_str(SEPARATOR);
        out.push('\n');
        for value in row {
            // Writing into a String cannot fail
            let _ = write!(out, "|{:>width$}", value, width = CELL_WIDTH);
        }
        out.push_str("|\n");
    }
    out.push_str(SEPARATOR);
    out.push('\n');
    out
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&matrix_string(self.cells()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::CELLS;

    const NUMBERED: &str = "|----|----|----|----|\n\
                            |   1|   2|   3|   4|\n\
                            |----|----|----|----|\n\
                            |   5|   6|   7|   8|\n\
                            |----|----|----|----|\n\
                            |   9|  10|  11|  12|\n\
                            |----|----|----|----|\n\
                            |  13|  14|  15|  16|\n\
                            |----|----|----|----|\n";

    fn numbered() -> Cells {
        let mut cells = [0; CELLS];
        for (i, c) in cells.iter_mut().enumerate() {
            *c = i as u32 + 1;
        }
        cells
    }

    #[test]
    fn test_matrix_string() {
        assert_eq!(matrix_string(&numbered()), NUMBERED);
    }

    #[test]
    fn test_grid_display() {
        assert_eq!(Grid::from_cells(numbered()).to_string(), NUMBERED);
    }

    #[test]
    fn test_wide_values_keep_alignment() {
        let mut cells = [0; CELLS];
        cells[0] = 2048;
        cells[3] = 8;
        let text = matrix_string(&cells);
        let first_row = text.lines().nth(1).unwrap_or_default();
        assert_eq!(first_row, "|2048|   0|   0|   8|");
        assert_eq!(text.lines().count(), 2 * SIZE + 1);
    }
}
