//! Grid position coordinates.

/// The logical side length of a sudoku grid.
///
/// Cursor wraparound is always computed modulo this value, regardless of
/// how far a sparse [`Grid`](crate::Grid) has actually grown.
pub const GRID_SIZE: u32 = 9;

/// A `(row, column)` pair of non-negative coordinates.
///
/// Rows and columns are zero-based. Positions are not bounded to the 9×9
/// board: grids are sparse and grow on demand, so any non-negative pair is
/// addressable.
///
/// # Examples
///
/// ```
/// use penmark_core::{GRID_SIZE, Position};
///
/// let pos = Position::new(0, 0);
/// assert_eq!(pos.to_string(), "R0C0");
///
/// // Relative movement wraps around the logical board.
/// let wrapped = pos.offset_wrapping(-1, 0, GRID_SIZE);
/// assert_eq!(wrapped, Position::new(8, 0));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, derive_more::Display,
)]
#[display("R{row}C{column}")]
pub struct Position {
    row: u32,
    column: u32,
}

impl Position {
    /// Creates a position from zero-based row and column coordinates.
    #[must_use]
    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// Returns the zero-based row coordinate.
    #[must_use]
    pub const fn row(self) -> u32 {
        self.row
    }

    /// Returns the zero-based column coordinate.
    #[must_use]
    pub const fn column(self) -> u32 {
        self.column
    }

    /// Offsets this position by the given deltas, wrapping modulo `modulus`.
    ///
    /// `rem_euclid` keeps the result non-negative for any delta magnitude,
    /// not just single steps, so held-down arrow keys and scripted jumps
    /// behave alike.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn offset_wrapping(self, row_delta: i32, column_delta: i32, modulus: u32) -> Self {
        let modulus = i64::from(modulus);
        // rem_euclid of a u32 modulus always fits back into u32.
        let wrap = |coordinate: u32, delta: i32| {
            (i64::from(coordinate) + i64::from(delta)).rem_euclid(modulus) as u32
        };
        Self {
            row: wrap(self.row, row_delta),
            column: wrap(self.column, column_delta),
        }
    }
}
