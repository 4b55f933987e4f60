//! Completion checking for a filled board.

use crate::{DigitSet, Grid, House};

/// Returns whether `grid` is a completed, rule-satisfying sudoku.
///
/// A grid is complete iff it has exactly 9 rows of exactly 9 cells
/// (ragged or undersized grids are incomplete by definition) and every
/// row, column, and 3×3 box contains each digit 1-9, counting a cell's
/// [effective digit](crate::Cell::effective_digit): the entered digit,
/// falling back to the given.
///
/// This is an all-or-nothing check: no partial validity, no conflict
/// reporting.
///
/// # Examples
///
/// ```
/// use penmark_core::{Grid, is_complete};
///
/// // The empty grid has no rows at all.
/// assert!(!is_complete(&Grid::new()));
/// ```
#[must_use]
pub fn is_complete(grid: &Grid) -> bool {
    if grid.row_count() != 9 {
        return false;
    }
    if (0..9).any(|row| grid.column_count(row) != 9) {
        return false;
    }
    House::ALL.iter().all(|house| {
        let digits: DigitSet = house
            .positions()
            .filter_map(|pos| grid.get(pos).effective_digit())
            .collect();
        digits == DigitSet::FULL
    })
}
