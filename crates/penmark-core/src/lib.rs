//! Core value types for the Penmark sudoku editor.
//!
//! This crate holds the pure data model the editor state machine is built
//! on. Everything here is a value: no I/O, no interior mutability, no
//! session state.
//!
//! # Overview
//!
//! - [`digit`]: type-safe sudoku digits 1-9
//! - [`digit_set`]: ordered unique digit sets (the pencil-mark
//!   representation)
//! - [`position`]: `(row, column)` coordinates and wraparound arithmetic
//! - [`cell`]: the four-facet cell value (given, entered, corner and
//!   centre pencil marks)
//! - [`grid`]: the immutable sparse grid with copy-on-write rows
//! - [`house`]: rows, columns, and boxes of the 9×9 board
//! - [`check`]: the all-or-nothing completion check
//!
//! # Examples
//!
//! ```
//! use penmark_core::{Cell, Digit, Grid, PencilKind, Position};
//!
//! let grid = Grid::new()
//!     .set(Position::new(0, 0), Cell::EMPTY.with_given(Some(Digit::D5)));
//!
//! // Batch edits derive every cell from the same base grid.
//! let grid = grid.set_many(
//!     [Position::new(0, 0), Position::new(1, 1)],
//!     |cell| cell.toggled_pencil(PencilKind::Centre, Digit::D3),
//! );
//!
//! // The given cell shielded itself; the empty cell took the mark.
//! assert!(grid.get(Position::new(0, 0)).centre_pencils().is_empty());
//! assert!(grid.get(Position::new(1, 1)).centre_pencils().contains(Digit::D3));
//! ```

pub mod cell;
pub mod check;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;

pub use self::{
    cell::{Cell, PencilKind},
    check::is_complete,
    digit::Digit,
    digit_set::DigitSet,
    grid::Grid,
    house::House,
    position::{GRID_SIZE, Position},
};
