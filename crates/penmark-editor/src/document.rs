//! Projection to and from the persisted puzzle document.
//!
//! The surrounding application stores a puzzle as a flat list of
//! `{row, column, givenDigit}` triples: only the given cells, nothing
//! else. This module projects a grid down to that shape and seeds a grid
//! back from it. We are strict in what we send and flexible in what we
//! receive: the wire digit is a raw `u8`, validated on conversion.

use penmark_core::{Cell, Digit, Grid, Position};
use serde::{Deserialize, Serialize};

/// One given cell in the persisted document shape.
///
/// Serializes as `{"row": r, "column": c, "givenDigit": d}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GivenCell {
    /// Zero-based row coordinate.
    pub row: u32,
    /// Zero-based column coordinate.
    pub column: u32,
    /// The given digit, nominally 1-9 but unvalidated on the wire.
    pub given_digit: u8,
}

impl GivenCell {
    /// Creates a triple from a position and a validated digit.
    #[must_use]
    pub const fn new(pos: Position, digit: Digit) -> Self {
        Self {
            row: pos.row(),
            column: pos.column(),
            given_digit: digit.value(),
        }
    }

    /// Returns the grid position this triple addresses.
    #[must_use]
    pub const fn position(self) -> Position {
        Position::new(self.row, self.column)
    }

    /// Returns the digit, or `None` when the wire value is out of range.
    #[must_use]
    pub const fn digit(self) -> Option<Digit> {
        Digit::try_from_value(self.given_digit)
    }
}

/// An error found while converting a persisted document into a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum DocumentError {
    /// A triple carried a digit outside 1-9.
    #[display("invalid given digit: {value}")]
    InvalidDigit {
        /// The offending wire value.
        value: u8,
    },
}

/// Projects `grid` down to its given cells as document triples.
///
/// Cells without a given digit (entered digits, pencil marks, empties)
/// are not part of the document.
#[must_use]
pub fn given_cells(grid: &Grid) -> Vec<GivenCell> {
    grid.iter()
        .filter_map(|(pos, cell)| cell.given().map(|digit| GivenCell::new(pos, digit)))
        .collect()
}

/// Builds a grid holding exactly the given cells named by `cells`.
///
/// # Errors
///
/// Returns [`DocumentError::InvalidDigit`] if any triple carries a digit
/// outside 1-9. Callers that prefer to drop bad triples instead can
/// filter on [`GivenCell::digit`] first.
pub fn grid_from_given_cells(cells: &[GivenCell]) -> Result<Grid, DocumentError> {
    cells
        .iter()
        .map(|given| {
            let digit = given.digit().ok_or(DocumentError::InvalidDigit {
                value: given.given_digit,
            })?;
            Ok((given.position(), Cell::EMPTY.with_given(Some(digit))))
        })
        .collect()
}
