//! Rows, columns, and boxes of the standard 9×9 board.

use crate::Position;

/// A sudoku house: one row, column, or 3×3 box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its zero-based row coordinate (0-8).
    Row {
        /// Row coordinate (0-8).
        row: u32,
    },
    /// A column identified by its zero-based column coordinate (0-8).
    Column {
        /// Column coordinate (0-8).
        column: u32,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to
    /// bottom).
    Box {
        /// Box index (0-8).
        index: u32,
    },
}

impl House {
    /// All 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u32 };
            all[i + 9] = Self::Column { column: i as u32 };
            all[i + 18] = Self::Box { index: i as u32 };
            i += 1;
        }
        all
    };

    /// Converts a cell index within the house (0-8) into an absolute
    /// [`Position`].
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    pub fn position_from_cell_index(self, i: u32) -> Position {
        assert!(i < 9);
        match self {
            Self::Row { row } => Position::new(row, i),
            Self::Column { column } => Position::new(i, column),
            Self::Box { index } => {
                Position::new(3 * (index / 3) + i / 3, 3 * (index % 3) + i % 3)
            }
        }
    }

    /// Returns the nine positions contained in this house.
    pub fn positions(self) -> impl Iterator<Item = Position> {
        (0..9).map(move |i| self.position_from_cell_index(i))
    }
}
