//! The controller's action vocabulary.

use penmark_core::{Digit, PencilKind, Position};

use crate::document::GivenCell;

bitflags::bitflags! {
    /// The cell facets kept by [`EditAction::ClearCell`].
    ///
    /// An empty set is a bare clear: every facet is dropped. Input
    /// adapters typically retain everything except the facet the current
    /// edit mode writes, so Backspace erases only what the user is
    /// currently entering.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RetainSet: u8 {
        /// Keep the entered digit.
        const ENTERED = 1;
        /// Keep the corner pencil-mark set.
        const CORNER_PENCILS = 1 << 1;
        /// Keep the centre pencil-mark set.
        const CENTRE_PENCILS = 1 << 2;
        /// Keep the given digit.
        const GIVENS = 1 << 3;
    }
}

/// One dispatchable controller action.
///
/// Every action is a total transition: there is no failing variant, and
/// per-cell preconditions (a given digit shielding a cell, undo at the
/// initial snapshot) degrade to no-ops rather than errors.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum Action {
    /// Grid-editing actions; each records one history snapshot.
    Edit(EditAction),
    /// Cursor and selection actions; these never touch grid or history.
    Select(SelectAction),
    /// History actions.
    History(HistoryAction),
}

/// Actions that produce a new grid snapshot.
///
/// All of these apply to every cell of the effective selection
/// (selection ∪ cursor), deciding each cell from its own pre-edit state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditAction {
    /// Sets the entered digit, discarding pencil marks. Cells holding a
    /// given digit are left untouched.
    EnterDigit(Digit),
    /// Replaces the entire cell with just a given digit, unconditionally.
    EnterGiven(Digit),
    /// Flips membership of a digit in the corner or centre pencil set.
    /// Cells holding a given or entered digit are left untouched.
    TogglePencilMark {
        /// Which pencil slot to toggle.
        kind: PencilKind,
        /// The digit whose membership is flipped.
        digit: Digit,
    },
    /// Rebuilds each cell keeping only the facets named in `retain`.
    ClearCell {
        /// The facets to keep.
        retain: RetainSet,
    },
    /// Overlays given-digit cells from persisted document triples,
    /// optionally clearing the grid first. Triples with out-of-range
    /// digits are skipped.
    LoadGivens {
        /// The document triples to seed.
        cells: Vec<GivenCell>,
        /// Whether to start from an empty grid instead of the current one.
        clear_existing: bool,
    },
}

/// Cursor and selection actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectAction {
    /// Moves the cursor relative to its current position, wrapping around
    /// the logical 9×9 board.
    MoveCursor {
        /// Rows to move by; negative is up.
        row_delta: i32,
        /// Columns to move by; negative is left.
        column_delta: i32,
        /// Adds the old cursor position to the selection before moving,
        /// growing a selection trail.
        extend_selection: bool,
        /// Leaves the selection untouched instead of clearing it. Only
        /// consulted when `extend_selection` is false.
        preserve_selection: bool,
    },
    /// Places the cursor at an absolute position, without wraparound.
    SetCursor {
        /// The new cursor position.
        position: Position,
        /// Adds the old cursor position to the selection before moving.
        extend_selection: bool,
    },
    /// Replaces the selection, or toggle-merges into it.
    UpdateSelection {
        /// The incoming positions.
        positions: Vec<Position>,
        /// When true, existing members colliding with `positions` are
        /// removed and the incoming positions appended; when false the
        /// selection is replaced outright.
        extend: bool,
    },
}

/// History actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction {
    /// Drops the latest grid snapshot, unless it is the only one.
    /// Selection and cursor are unaffected.
    Undo,
}
