//! Puzzle state controller for the Penmark sudoku editor.
//!
//! This crate is the state machine behind an interactive sudoku editor:
//! it owns the grid, the interpretation of editing and navigation
//! actions, multi-cell selection with an always-included cursor, and a
//! linear undo history of grid snapshots. Rendering, persistence
//! transport, and authentication are collaborators: they hand an initial
//! grid (or document triples) in, read grid/selection/cursor out, and
//! take the given-cell projection back for storage.
//!
//! # Overview
//!
//! - [`action`]: the tagged-union action vocabulary and clear-retain
//!   flags
//! - [`state`]: [`EditorState`] and the pure `apply` transition
//! - [`history`]: the append-only undo chain
//! - [`selection`]: the duplicate-free multi-cell selection
//! - [`mode`] and [`input`]: the edit mode and the toolkit-neutral
//!   keyboard adapter
//! - [`document`]: projection to and from `{row, column, givenDigit}`
//!   persistence triples
//!
//! # Examples
//!
//! ```
//! use penmark_core::{Digit, Position};
//! use penmark_editor::{EditAction, EditorState, SelectAction};
//!
//! let mut state = EditorState::new();
//!
//! // Shift+arrow walk: select (0,0) and (0,1), cursor on (0,2).
//! for _ in 0..2 {
//!     state.dispatch(
//!         SelectAction::MoveCursor {
//!             row_delta: 0,
//!             column_delta: 1,
//!             extend_selection: true,
//!             preserve_selection: false,
//!         }
//!         .into(),
//!     );
//! }
//!
//! // One keystroke pencils a 4 into all three cells at once.
//! state.dispatch(
//!     EditAction::TogglePencilMark {
//!         kind: penmark_core::PencilKind::Corner,
//!         digit: Digit::D4,
//!     }
//!     .into(),
//! );
//! assert!(
//!     state
//!         .grid()
//!         .get(Position::new(0, 1))
//!         .corner_pencils()
//!         .contains(Digit::D4)
//! );
//! ```

pub mod action;
pub mod document;
pub mod history;
pub mod input;
pub mod mode;
pub mod selection;
pub mod state;

pub use self::{
    action::{Action, EditAction, HistoryAction, RetainSet, SelectAction},
    document::{DocumentError, GivenCell, given_cells, grid_from_given_cells},
    history::History,
    input::{InputEffect, Key, Modifiers, translate},
    mode::EditMode,
    selection::Selection,
    state::EditorState,
};
