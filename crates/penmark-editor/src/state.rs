//! The puzzle state controller.

use penmark_core::{Cell, GRID_SIZE, Grid, Position, is_complete};

use crate::{
    action::{Action, EditAction, HistoryAction, RetainSet, SelectAction},
    document::{self, DocumentError, GivenCell},
    history::History,
    selection::Selection,
};

/// The complete state of one editing session: undo history, selection,
/// and cursor.
///
/// The controller is a pure state machine. [`apply`] is the single
/// transition function (total, non-panicking, value-to-value) and every
/// read the rendering layer needs goes through the accessors. There is no
/// interior mutability and no locking; callers serialize dispatches (one
/// UI event loop, or one mutex around read-compute-store when hosted on
/// multiple threads).
///
/// # Examples
///
/// ```
/// use penmark_core::{Digit, Position};
/// use penmark_editor::{EditAction, EditorState, HistoryAction, SelectAction};
///
/// let mut state = EditorState::new();
/// state.dispatch(
///     SelectAction::SetCursor {
///         position: Position::new(1, 2),
///         extend_selection: false,
///     }
///     .into(),
/// );
/// state.dispatch(EditAction::EnterGiven(Digit::D7).into());
/// assert_eq!(state.grid().get(Position::new(1, 2)).given(), Some(Digit::D7));
///
/// // Undo affects only the grid, never navigation state.
/// state.dispatch(HistoryAction::Undo.into());
/// assert_eq!(state.cursor(), Position::new(1, 2));
/// ```
///
/// [`apply`]: Self::apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorState {
    history: History,
    selection: Selection,
    cursor: Position,
}

impl EditorState {
    /// Creates a session over an empty grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session over `initial`, such as a grid of puzzle givens
    /// loaded from storage.
    #[must_use]
    pub fn with_grid(initial: Grid) -> Self {
        Self {
            history: History::new(initial),
            selection: Selection::default(),
            cursor: Position::default(),
        }
    }

    /// Creates a session seeded from persisted document triples.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentError::InvalidDigit`] if a triple carries a digit
    /// outside 1-9.
    pub fn from_document(cells: &[GivenCell]) -> Result<Self, DocumentError> {
        Ok(Self::with_grid(document::grid_from_given_cells(cells)?))
    }

    /// Returns the current grid: the latest history snapshot.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        self.history.current()
    }

    /// Returns the undo history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the explicit selection, without the cursor.
    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Returns the selection with the cursor unioned in, as most-recently
    /// added.
    ///
    /// This is the true edit-target set of every edit action, and the set
    /// the rendering layer should highlight: the cursor is always an
    /// implicit target even when the user never extended the selection
    /// over it. Using this one accessor everywhere keeps edit targeting
    /// and highlighting from drifting apart.
    #[must_use]
    pub fn effective_selection(&self) -> Selection {
        let mut effective = self.selection.clone();
        effective.insert_last(self.cursor);
        effective
    }

    /// Returns whether the current grid is a completed sudoku.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        is_complete(self.grid())
    }

    /// Applies one action, returning the successor state.
    ///
    /// Total by design: no action fails, and per-cell preconditions
    /// (givens shielding cells, undo at the initial snapshot) degrade to
    /// no-ops. Edit actions batch over the effective selection against a
    /// single base snapshot and record exactly one history entry;
    /// navigation actions never touch grid or history.
    #[must_use]
    pub fn apply(mut self, action: Action) -> Self {
        match action {
            Action::Edit(edit) => self.apply_edit(edit),
            Action::Select(select) => self.apply_select(select),
            Action::History(HistoryAction::Undo) => self.apply_undo(),
        }
        self
    }

    /// Applies one action in place. Equivalent to `*self =
    /// self.apply(action)`.
    pub fn dispatch(&mut self, action: Action) {
        *self = std::mem::take(self).apply(action);
    }

    fn apply_edit(&mut self, action: EditAction) {
        log::debug!("edit: {action:?}");
        let new_grid = match action {
            EditAction::EnterDigit(digit) => self.edit_targets(|cell| {
                if cell.given().is_some() {
                    cell
                } else {
                    // A full replacement of the non-given facets: entering
                    // a digit discards the cell's pencil state.
                    Cell::EMPTY.with_entered(Some(digit))
                }
            }),
            EditAction::EnterGiven(digit) => {
                self.edit_targets(|_| Cell::EMPTY.with_given(Some(digit)))
            }
            EditAction::TogglePencilMark { kind, digit } => {
                self.edit_targets(|cell| cell.toggled_pencil(kind, digit))
            }
            EditAction::ClearCell { retain } => self.edit_targets(|cell| {
                let mut kept = Cell::EMPTY;
                if retain.contains(RetainSet::ENTERED) {
                    kept = kept.with_entered(cell.entered());
                }
                if retain.contains(RetainSet::CORNER_PENCILS) {
                    kept = kept.with_corner_pencils(cell.corner_pencils());
                }
                if retain.contains(RetainSet::CENTRE_PENCILS) {
                    kept = kept.with_centre_pencils(cell.centre_pencils());
                }
                if retain.contains(RetainSet::GIVENS) {
                    kept = kept.with_given(cell.given());
                }
                kept
            }),
            EditAction::LoadGivens {
                cells,
                clear_existing,
            } => {
                let base = if clear_existing {
                    Grid::new()
                } else {
                    self.grid().clone()
                };
                cells.iter().fold(base, |grid, given| match given.digit() {
                    Some(digit) => {
                        grid.set(given.position(), Cell::EMPTY.with_given(Some(digit)))
                    }
                    None => {
                        log::warn!(
                            "skipping document cell {} with invalid digit {}",
                            given.position(),
                            given.given_digit
                        );
                        grid
                    }
                })
            }
        };
        self.history.record(new_grid);
    }

    /// Batches `derive` over the effective selection against the current
    /// grid as a single base.
    fn edit_targets<F>(&self, derive: F) -> Grid
    where
        F: Fn(Cell) -> Cell,
    {
        self.grid().set_many(self.effective_selection(), derive)
    }

    fn apply_select(&mut self, action: SelectAction) {
        log::trace!("select: {action:?}");
        match action {
            SelectAction::MoveCursor {
                row_delta,
                column_delta,
                extend_selection,
                preserve_selection,
            } => {
                let target =
                    self.cursor
                        .offset_wrapping(row_delta, column_delta, GRID_SIZE);
                self.leave_cursor(extend_selection, preserve_selection);
                self.cursor = target;
            }
            SelectAction::SetCursor {
                position,
                extend_selection,
            } => {
                self.leave_cursor(extend_selection, false);
                self.cursor = position;
            }
            SelectAction::UpdateSelection { positions, extend } => {
                self.selection.merge(positions, extend);
            }
        }
    }

    /// Applies the extend/clear rule when the cursor moves away: extending
    /// banks the *old* cursor position into the selection, which is how a
    /// shift+arrow walk leaves a trail of selected cells behind it.
    fn leave_cursor(&mut self, extend_selection: bool, preserve_selection: bool) {
        if extend_selection {
            self.selection.insert_last(self.cursor);
        } else if !preserve_selection {
            self.selection.clear();
        }
    }

    fn apply_undo(&mut self) {
        if !self.history.undo() {
            log::debug!("undo at initial snapshot ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use penmark_core::{Digit, DigitSet, PencilKind};
    use proptest::prelude::*;

    use super::*;

    fn set_cursor(state: &mut EditorState, row: u32, column: u32) {
        state.dispatch(
            SelectAction::SetCursor {
                position: Position::new(row, column),
                extend_selection: false,
            }
            .into(),
        );
    }

    fn move_cursor(state: &mut EditorState, row_delta: i32, column_delta: i32) {
        state.dispatch(
            SelectAction::MoveCursor {
                row_delta,
                column_delta,
                extend_selection: false,
                preserve_selection: false,
            }
            .into(),
        );
    }

    #[test]
    fn test_example_scenario() {
        // Empty 0-row grid; a given at (1, 2), an entered digit at (2, 8),
        // then one undo.
        let mut state = EditorState::new();
        set_cursor(&mut state, 1, 2);
        state.dispatch(EditAction::EnterGiven(Digit::D7).into());
        assert_eq!(
            state.grid().get(Position::new(1, 2)),
            Cell::EMPTY.with_given(Some(Digit::D7))
        );

        set_cursor(&mut state, 2, 8);
        state.dispatch(EditAction::EnterDigit(Digit::D1).into());
        assert_eq!(
            state.grid().get(Position::new(2, 8)),
            Cell::EMPTY.with_entered(Some(Digit::D1))
        );

        state.dispatch(HistoryAction::Undo.into());
        assert_eq!(state.grid().get(Position::new(2, 8)), Cell::EMPTY);
        assert_eq!(state.grid().get(Position::new(1, 2)).given(), Some(Digit::D7));
        assert!(!state.is_solved());
    }

    #[test]
    fn test_enter_digit_discards_pencil_state() {
        let mut state = EditorState::new();
        state.dispatch(
            EditAction::TogglePencilMark {
                kind: PencilKind::Corner,
                digit: Digit::D3,
            }
            .into(),
        );
        state.dispatch(EditAction::EnterDigit(Digit::D5).into());

        let cell = state.grid().get(Position::new(0, 0));
        assert_eq!(cell.entered(), Some(Digit::D5));
        assert!(cell.corner_pencils().is_empty());
    }

    #[test]
    fn test_enter_digit_never_touches_givens() {
        let mut state = EditorState::new();
        state.dispatch(EditAction::EnterGiven(Digit::D9).into());

        // Select the given cell and an empty neighbour together.
        state.dispatch(
            SelectAction::UpdateSelection {
                positions: vec![Position::new(0, 0), Position::new(0, 1)],
                extend: false,
            }
            .into(),
        );
        set_cursor_preserving(&mut state, 0, 1);
        state.dispatch(EditAction::EnterDigit(Digit::D2).into());

        let given = state.grid().get(Position::new(0, 0));
        assert_eq!(given.given(), Some(Digit::D9));
        assert_eq!(given.entered(), None);
        assert_eq!(
            state.grid().get(Position::new(0, 1)).entered(),
            Some(Digit::D2)
        );
    }

    /// Moves the cursor without disturbing the selection, the ctrl+arrow
    /// path.
    fn set_cursor_preserving(state: &mut EditorState, row: u32, column: u32) {
        let (cursor_row, cursor_column) = (state.cursor().row(), state.cursor().column());
        state.dispatch(
            SelectAction::MoveCursor {
                row_delta: i32::try_from(row).unwrap() - i32::try_from(cursor_row).unwrap(),
                column_delta: i32::try_from(column).unwrap()
                    - i32::try_from(cursor_column).unwrap(),
                extend_selection: false,
                preserve_selection: true,
            }
            .into(),
        );
    }

    #[test]
    fn test_enter_given_replaces_entire_cell() {
        let mut state = EditorState::new();
        state.dispatch(EditAction::EnterDigit(Digit::D4).into());
        state.dispatch(
            EditAction::TogglePencilMark {
                kind: PencilKind::Centre,
                digit: Digit::D6,
            }
            .into(),
        );
        state.dispatch(EditAction::EnterGiven(Digit::D8).into());

        assert_eq!(
            state.grid().get(Position::new(0, 0)),
            Cell::EMPTY.with_given(Some(Digit::D8))
        );
    }

    #[test]
    fn test_toggle_pencil_mark_batch_independence() {
        let mut state = EditorState::new();
        // Give (0, 0) a centre 5 first.
        state.dispatch(
            EditAction::TogglePencilMark {
                kind: PencilKind::Centre,
                digit: Digit::D5,
            }
            .into(),
        );

        // Select both cells and toggle centre 5 in one dispatch.
        state.dispatch(
            SelectAction::UpdateSelection {
                positions: vec![Position::new(0, 0)],
                extend: false,
            }
            .into(),
        );
        set_cursor_preserving(&mut state, 0, 1);
        state.dispatch(
            EditAction::TogglePencilMark {
                kind: PencilKind::Centre,
                digit: Digit::D5,
            }
            .into(),
        );

        let first = state.grid().get(Position::new(0, 0));
        let second = state.grid().get(Position::new(0, 1));
        assert!(!first.centre_pencils().contains(Digit::D5));
        assert!(second.centre_pencils().contains(Digit::D5));
    }

    #[test]
    fn test_clear_cell_keeps_retained_facets() {
        let mut state = EditorState::new();
        state.dispatch(
            EditAction::TogglePencilMark {
                kind: PencilKind::Corner,
                digit: Digit::D1,
            }
            .into(),
        );
        state.dispatch(
            EditAction::TogglePencilMark {
                kind: PencilKind::Centre,
                digit: Digit::D2,
            }
            .into(),
        );
        state.dispatch(
            EditAction::ClearCell {
                retain: RetainSet::CENTRE_PENCILS,
            }
            .into(),
        );

        let cell = state.grid().get(Position::new(0, 0));
        assert!(cell.corner_pencils().is_empty());
        assert_eq!(cell.centre_pencils(), DigitSet::EMPTY.toggled(Digit::D2));
    }

    #[test]
    fn test_bare_clear_drops_a_given_when_not_retained() {
        let mut state = EditorState::new();
        state.dispatch(EditAction::EnterGiven(Digit::D3).into());

        state.dispatch(
            EditAction::ClearCell {
                retain: RetainSet::GIVENS,
            }
            .into(),
        );
        assert_eq!(state.grid().get(Position::new(0, 0)).given(), Some(Digit::D3));

        state.dispatch(
            EditAction::ClearCell {
                retain: RetainSet::empty(),
            }
            .into(),
        );
        assert_eq!(state.grid().get(Position::new(0, 0)), Cell::EMPTY);
    }

    #[test]
    fn test_cursor_wraparound() {
        let mut state = EditorState::new();
        move_cursor(&mut state, -1, 0);
        assert_eq!(state.cursor(), Position::new(8, 0));

        set_cursor(&mut state, 8, 8);
        move_cursor(&mut state, 1, 1);
        assert_eq!(state.cursor(), Position::new(0, 0));
    }

    #[test]
    fn test_extend_banks_the_old_cursor() {
        let mut state = EditorState::new();
        set_cursor(&mut state, 3, 3);
        state.dispatch(
            SelectAction::MoveCursor {
                row_delta: 0,
                column_delta: 1,
                extend_selection: true,
                preserve_selection: false,
            }
            .into(),
        );

        assert_eq!(state.cursor(), Position::new(3, 4));
        assert!(state.selection().contains(Position::new(3, 3)));
        assert!(!state.selection().contains(Position::new(3, 4)));

        // The new cursor is still an edit target through the implicit
        // union.
        let effective = state.effective_selection();
        assert!(effective.contains(Position::new(3, 4)));
        assert_eq!(effective.len(), 2);
    }

    #[test]
    fn test_plain_move_clears_and_preserve_keeps_selection() {
        let mut state = EditorState::new();
        state.dispatch(
            SelectAction::UpdateSelection {
                positions: vec![Position::new(5, 5)],
                extend: false,
            }
            .into(),
        );

        state.dispatch(
            SelectAction::MoveCursor {
                row_delta: 1,
                column_delta: 0,
                extend_selection: false,
                preserve_selection: true,
            }
            .into(),
        );
        assert!(state.selection().contains(Position::new(5, 5)));

        move_cursor(&mut state, 1, 0);
        assert!(state.selection().is_empty());
    }

    #[test]
    fn test_update_selection_extend_toggles_membership() {
        let mut state = EditorState::new();
        state.dispatch(
            SelectAction::UpdateSelection {
                positions: vec![Position::new(1, 1)],
                extend: false,
            }
            .into(),
        );

        state.dispatch(
            SelectAction::UpdateSelection {
                positions: vec![Position::new(1, 1)],
                extend: true,
            }
            .into(),
        );
        assert_eq!(state.selection().len(), 1);

        state.dispatch(
            SelectAction::UpdateSelection {
                positions: vec![Position::new(2, 2)],
                extend: true,
            }
            .into(),
        );
        assert!(state.selection().contains(Position::new(1, 1)));
        assert!(state.selection().contains(Position::new(2, 2)));
    }

    #[test]
    fn test_navigation_records_no_history() {
        let mut state = EditorState::new();
        set_cursor(&mut state, 4, 4);
        move_cursor(&mut state, 1, 1);
        state.dispatch(
            SelectAction::UpdateSelection {
                positions: vec![Position::new(0, 0)],
                extend: true,
            }
            .into(),
        );
        assert_eq!(state.history().len(), 1);
    }

    #[test]
    fn test_undo_leaves_navigation_state_alone() {
        let mut state = EditorState::new();
        set_cursor(&mut state, 2, 2);
        state.dispatch(EditAction::EnterDigit(Digit::D1).into());
        state.dispatch(
            SelectAction::UpdateSelection {
                positions: vec![Position::new(6, 6)],
                extend: true,
            }
            .into(),
        );

        state.dispatch(HistoryAction::Undo.into());
        assert_eq!(state.cursor(), Position::new(2, 2));
        assert!(state.selection().contains(Position::new(6, 6)));
    }

    #[test]
    fn test_edits_record_even_when_every_cell_is_shielded() {
        let mut state = EditorState::new();
        state.dispatch(EditAction::EnterGiven(Digit::D5).into());
        let before = state.history().len();

        // The lone target is a given; the grid content cannot change, but
        // the edit still appends a snapshot.
        state.dispatch(EditAction::EnterDigit(Digit::D1).into());
        assert_eq!(state.history().len(), before + 1);
        assert_eq!(state.grid().get(Position::new(0, 0)).given(), Some(Digit::D5));
    }

    #[test]
    fn test_load_givens_overlays_or_replaces() {
        let mut state = EditorState::new();
        state.dispatch(EditAction::EnterDigit(Digit::D2).into());

        let cells = vec![GivenCell::new(Position::new(1, 1), Digit::D4)];
        state.dispatch(
            EditAction::LoadGivens {
                cells: cells.clone(),
                clear_existing: false,
            }
            .into(),
        );
        assert_eq!(state.grid().get(Position::new(0, 0)).entered(), Some(Digit::D2));
        assert_eq!(state.grid().get(Position::new(1, 1)).given(), Some(Digit::D4));

        state.dispatch(
            EditAction::LoadGivens {
                cells,
                clear_existing: true,
            }
            .into(),
        );
        assert_eq!(state.grid().get(Position::new(0, 0)), Cell::EMPTY);
        assert_eq!(state.grid().get(Position::new(1, 1)).given(), Some(Digit::D4));

        // Loading is an edit: both loads are undoable.
        state.dispatch(HistoryAction::Undo.into());
        assert_eq!(state.grid().get(Position::new(0, 0)).entered(), Some(Digit::D2));
    }

    #[test]
    fn test_load_givens_skips_invalid_digits() {
        let mut state = EditorState::new();
        state.dispatch(
            EditAction::LoadGivens {
                cells: vec![
                    GivenCell {
                        row: 0,
                        column: 0,
                        given_digit: 0,
                    },
                    GivenCell::new(Position::new(0, 1), Digit::D6),
                ],
                clear_existing: false,
            }
            .into(),
        );
        assert_eq!(state.grid().get(Position::new(0, 0)), Cell::EMPTY);
        assert_eq!(state.grid().get(Position::new(0, 1)).given(), Some(Digit::D6));
    }

    #[test]
    fn test_effective_selection_does_not_duplicate_cursor() {
        let mut state = EditorState::new();
        state.dispatch(
            SelectAction::UpdateSelection {
                positions: vec![Position::new(0, 0)],
                extend: false,
            }
            .into(),
        );
        // Cursor is (0, 0) as well.
        assert_eq!(state.effective_selection().len(), 1);
    }

    fn edit_strategy() -> impl Strategy<Value = EditAction> {
        let digit = (1u8..=9).prop_map(Digit::from_value);
        prop_oneof![
            digit.clone().prop_map(EditAction::EnterDigit),
            digit.clone().prop_map(EditAction::EnterGiven),
            (
                prop_oneof![Just(PencilKind::Corner), Just(PencilKind::Centre)],
                digit,
            )
                .prop_map(|(kind, digit)| EditAction::TogglePencilMark { kind, digit }),
            (0u8..16).prop_map(|bits| EditAction::ClearCell {
                retain: RetainSet::from_bits_truncate(bits),
            }),
            (0u32..9, 0u32..9, 0u8..12, any::<bool>()).prop_map(
                |(row, column, given_digit, clear_existing)| EditAction::LoadGivens {
                    cells: vec![GivenCell {
                        row,
                        column,
                        given_digit,
                    }],
                    clear_existing,
                }
            ),
        ]
    }

    proptest! {
        /// N edits then N undos restore the starting grid exactly, and an
        /// extra undo past the floor changes nothing.
        #[test]
        fn prop_undo_round_trip(
            steps in prop::collection::vec(
                ((0u32..9, 0u32..9), edit_strategy()),
                0..12,
            )
        ) {
            let mut state = EditorState::new();
            let initial = state.grid().clone();
            let edit_count = steps.len();

            for ((row, column), edit) in steps {
                state.dispatch(
                    SelectAction::SetCursor {
                        position: Position::new(row, column),
                        extend_selection: false,
                    }
                    .into(),
                );
                state.dispatch(edit.into());
            }

            for _ in 0..edit_count {
                state.dispatch(HistoryAction::Undo.into());
            }
            prop_assert_eq!(state.grid(), &initial);

            state.dispatch(HistoryAction::Undo.into());
            prop_assert_eq!(state.grid(), &initial);
        }
    }
}
