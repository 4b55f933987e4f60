//! Immutable sparse grid of cells with structural sharing.

use std::sync::Arc;

use crate::{Cell, Position};

#[expect(clippy::cast_possible_truncation)]
const fn to_index(coordinate: u32) -> usize {
    // u32 coordinates fit usize on every supported target.
    coordinate as usize
}

#[expect(clippy::cast_possible_truncation)]
const fn to_coordinate(index: usize) -> u32 {
    // Row/column indices originate from u32 coordinates.
    index as u32
}

/// An immutable 2-D sparse sequence of [`Cell`]s.
///
/// A grid is a value: every mutation returns a new grid and leaves the
/// receiver untouched. Rows are reference-counted and copied on write, so
/// an edit costs the touched row plus one row-pointer table, not the whole
/// board, and a history of snapshots shares all unchanged rows.
///
/// The grid is ragged and grows on demand. Rows and columns beyond the
/// current bounds read as [`Cell::EMPTY`] and are materialized only when
/// first written; nothing is pre-allocated to 9×9.
///
/// Equality is structural (a materialized-but-empty cell counts), which is
/// exactly what undo snapshots and memoized derived results need.
///
/// # Examples
///
/// ```
/// use penmark_core::{Cell, Digit, Grid, Position};
///
/// let empty = Grid::new();
/// let grid = empty.set(
///     Position::new(4, 2),
///     Cell::EMPTY.with_given(Some(Digit::D7)),
/// );
///
/// // Reads outside the materialized area never fail.
/// assert_eq!(grid.get(Position::new(100, 100)), Cell::EMPTY);
/// assert_eq!(grid.get(Position::new(4, 2)).given(), Some(Digit::D7));
///
/// // The receiver is unchanged.
/// assert_eq!(empty, Grid::new());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Arc<Vec<Cell>>>,
}

impl Grid {
    /// Creates a grid with no materialized cells.
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Returns the cell at `pos`, or [`Cell::EMPTY`] outside the
    /// materialized bounds. Never errors.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.rows
            .get(to_index(pos.row()))
            .and_then(|row| row.get(to_index(pos.column())))
            .copied()
            .unwrap_or(Cell::EMPTY)
    }

    /// Returns a new grid with the cell at `pos` replaced.
    ///
    /// Rows and columns up to `pos` are materialized as empty cells as
    /// needed.
    #[must_use]
    pub fn set(&self, pos: Position, cell: Cell) -> Self {
        let mut grid = self.clone();
        grid.set_in_place(pos, cell);
        grid
    }

    /// Applies `derive` to each of `positions` against this grid as a
    /// single base, returning one new grid with all positions updated.
    ///
    /// Every derived cell is computed from the *pre-edit* cell at its own
    /// position, never from an intermediate edit of the same batch. This
    /// is what makes a pencil-mark toggle across a multi-cell selection
    /// add the mark where it is absent and remove it where it is present,
    /// each cell deciding from its own prior state.
    #[must_use]
    pub fn set_many<I, F>(&self, positions: I, derive: F) -> Self
    where
        I: IntoIterator<Item = Position>,
        F: Fn(Cell) -> Cell,
    {
        let mut grid = self.clone();
        for pos in positions {
            grid.set_in_place(pos, derive(self.get(pos)));
        }
        grid
    }

    /// Returns the number of materialized rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of materialized cells in `row`, or 0 for a row
    /// that does not exist.
    #[must_use]
    pub fn column_count(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, |cells| cells.len())
    }

    /// Returns an iterator over all materialized cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().map(move |(column, &cell)| {
                (Position::new(to_coordinate(row), to_coordinate(column)), cell)
            })
        })
    }

    fn set_in_place(&mut self, pos: Position, cell: Cell) {
        let row_index = to_index(pos.row());
        let column_index = to_index(pos.column());
        if self.rows.len() <= row_index {
            self.rows.resize_with(row_index + 1, || Arc::new(Vec::new()));
        }
        let row = Arc::make_mut(&mut self.rows[row_index]);
        if row.len() <= column_index {
            row.resize(column_index + 1, Cell::EMPTY);
        }
        row[column_index] = cell;
    }
}

impl FromIterator<(Position, Cell)> for Grid {
    fn from_iter<I: IntoIterator<Item = (Position, Cell)>>(iter: I) -> Self {
        let mut grid = Self::new();
        for (pos, cell) in iter {
            grid.set_in_place(pos, cell);
        }
        grid
    }
}
