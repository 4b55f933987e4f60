//! Translation of keyboard input into controller actions.
//!
//! This is the thin adapter between a UI toolkit's key events and the
//! controller's action vocabulary. It is deliberately toolkit-neutral:
//! the hosting layer maps its own event type onto [`Key`] and
//! [`Modifiers`], and everything mode-dependent (which facet a digit
//! keystroke writes, what Backspace erases, the Space-bar mode cycle)
//! lives here instead of leaking into the controller.
//!
//! Digits are carried as [`Digit`] values, so an out-of-range digit
//! cannot reach the controller at all; the boundary contract is
//! discharged by construction.

use penmark_core::{Digit, PencilKind};

use crate::{
    action::{Action, EditAction, HistoryAction, RetainSet, SelectAction},
    mode::EditMode,
};

/// A keyboard key the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// A digit key, 1-9.
    Digit(Digit),
    /// Arrow up.
    ArrowUp,
    /// Arrow down.
    ArrowDown,
    /// Arrow left.
    ArrowLeft,
    /// Arrow right.
    ArrowRight,
    /// Backspace.
    Backspace,
    /// Escape.
    Escape,
    /// The `Z` key.
    Z,
    /// The space bar.
    Space,
}

/// Modifier keys held during a keystroke.
///
/// `command` is Ctrl on Windows/Linux and Cmd on macOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Whether Shift is held.
    pub shift: bool,
    /// Whether the platform command modifier is held.
    pub command: bool,
}

/// What a keystroke translates to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEffect {
    /// Dispatch this action to the controller.
    Dispatch(Action),
    /// Switch the UI's edit mode; nothing reaches the controller.
    ChangeMode(EditMode),
    /// The keystroke means nothing here.
    Ignored,
}

/// Translates one keystroke under the given mode.
#[must_use]
pub fn translate(key: Key, modifiers: Modifiers, mode: EditMode) -> InputEffect {
    match key {
        Key::Digit(digit) => InputEffect::Dispatch(digit_action(digit, mode).into()),
        Key::Backspace => InputEffect::Dispatch(
            EditAction::ClearCell {
                retain: backspace_retain(mode),
            }
            .into(),
        ),
        Key::ArrowUp => arrow(-1, 0, modifiers),
        Key::ArrowDown => arrow(1, 0, modifiers),
        Key::ArrowLeft => arrow(0, -1, modifiers),
        Key::ArrowRight => arrow(0, 1, modifiers),
        Key::Escape => InputEffect::Dispatch(
            SelectAction::UpdateSelection {
                positions: Vec::new(),
                extend: false,
            }
            .into(),
        ),
        Key::Z if modifiers.command => InputEffect::Dispatch(HistoryAction::Undo.into()),
        Key::Z => InputEffect::Ignored,
        Key::Space => InputEffect::ChangeMode(mode.cycled()),
    }
}

fn digit_action(digit: Digit, mode: EditMode) -> EditAction {
    match mode {
        EditMode::Digit => EditAction::EnterDigit(digit),
        EditMode::Given => EditAction::EnterGiven(digit),
        EditMode::CentrePencil => EditAction::TogglePencilMark {
            kind: PencilKind::Centre,
            digit,
        },
        EditMode::CornerPencil => EditAction::TogglePencilMark {
            kind: PencilKind::Corner,
            digit,
        },
    }
}

/// Backspace erases only the facet the current mode writes, keeping the
/// rest.
fn backspace_retain(mode: EditMode) -> RetainSet {
    let erased = match mode {
        EditMode::Digit => RetainSet::ENTERED,
        EditMode::CornerPencil => RetainSet::CORNER_PENCILS,
        EditMode::CentrePencil => RetainSet::CENTRE_PENCILS,
        EditMode::Given => RetainSet::GIVENS,
    };
    RetainSet::all().difference(erased)
}

fn arrow(row_delta: i32, column_delta: i32, modifiers: Modifiers) -> InputEffect {
    InputEffect::Dispatch(
        SelectAction::MoveCursor {
            row_delta,
            column_delta,
            extend_selection: modifiers.shift,
            preserve_selection: modifiers.command,
        }
        .into(),
    )
}
