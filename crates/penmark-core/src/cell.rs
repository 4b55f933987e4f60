//! The value stored at one grid position.

use crate::{Digit, DigitSet};

/// The two pencil-mark slots of a cell.
///
/// Corner and centre marks are rendered differently but structurally
/// identical, so operations on them are parameterized by this kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PencilKind {
    /// Small candidate markers in the cell corners.
    Corner,
    /// Small candidate markers in the cell centre.
    Centre,
}

/// One grid cell: up to four independent facets.
///
/// A cell stores a given (fixed clue) digit, a player-entered digit, and
/// two pencil-mark sets. All facets are optional and stored independently;
/// precedence between them is an interpretation applied by operations, not
/// a representation constraint:
///
/// - a present given digit shields the cell from digit entry and pencil
///   toggles (see [`toggled_pencil`]);
/// - a present entered digit makes pencil toggles no-ops;
/// - [`effective_digit`] resolves display and completion precedence as
///   entered-else-given.
///
/// `Cell` is a plain `Copy` value; editing never mutates a cell in place.
///
/// # Examples
///
/// ```
/// use penmark_core::{Cell, Digit, PencilKind};
///
/// let cell = Cell::EMPTY.with_entered(Some(Digit::D4));
/// assert_eq!(cell.effective_digit(), Some(Digit::D4));
///
/// // Pencil toggles on a decided cell change nothing.
/// let same = cell.toggled_pencil(PencilKind::Centre, Digit::D1);
/// assert_eq!(cell, same);
/// ```
///
/// [`toggled_pencil`]: Self::toggled_pencil
/// [`effective_digit`]: Self::effective_digit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    given: Option<Digit>,
    entered: Option<Digit>,
    corner_pencils: DigitSet,
    centre_pencils: DigitSet,
}

impl Cell {
    /// The cell with no facets set.
    pub const EMPTY: Self = Self {
        given: None,
        entered: None,
        corner_pencils: DigitSet::EMPTY,
        centre_pencils: DigitSet::EMPTY,
    };

    /// Returns the given (fixed clue) digit, if any.
    #[must_use]
    pub const fn given(self) -> Option<Digit> {
        self.given
    }

    /// Returns the player-entered digit, if any.
    #[must_use]
    pub const fn entered(self) -> Option<Digit> {
        self.entered
    }

    /// Returns the corner pencil-mark set.
    #[must_use]
    pub const fn corner_pencils(self) -> DigitSet {
        self.corner_pencils
    }

    /// Returns the centre pencil-mark set.
    #[must_use]
    pub const fn centre_pencils(self) -> DigitSet {
        self.centre_pencils
    }

    /// Returns the pencil-mark set of the requested kind.
    #[must_use]
    pub const fn pencil_marks(self, kind: PencilKind) -> DigitSet {
        match kind {
            PencilKind::Corner => self.corner_pencils,
            PencilKind::Centre => self.centre_pencils,
        }
    }

    /// Returns whether no facet is set.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.given.is_none()
            && self.entered.is_none()
            && self.corner_pencils.is_empty()
            && self.centre_pencils.is_empty()
    }

    /// Returns the digit this cell contributes to a solution.
    ///
    /// The entered digit takes precedence over the given digit; pencil
    /// marks never count.
    #[must_use]
    pub const fn effective_digit(self) -> Option<Digit> {
        match self.entered {
            Some(digit) => Some(digit),
            None => self.given,
        }
    }

    /// Returns a copy with the given facet replaced.
    #[must_use]
    pub const fn with_given(mut self, given: Option<Digit>) -> Self {
        self.given = given;
        self
    }

    /// Returns a copy with the entered facet replaced.
    #[must_use]
    pub const fn with_entered(mut self, entered: Option<Digit>) -> Self {
        self.entered = entered;
        self
    }

    /// Returns a copy with the corner pencil-mark set replaced.
    #[must_use]
    pub const fn with_corner_pencils(mut self, marks: DigitSet) -> Self {
        self.corner_pencils = marks;
        self
    }

    /// Returns a copy with the centre pencil-mark set replaced.
    #[must_use]
    pub const fn with_centre_pencils(mut self, marks: DigitSet) -> Self {
        self.centre_pencils = marks;
        self
    }

    /// Toggles a pencil mark, respecting decided cells.
    ///
    /// A cell holding a given or entered digit is returned unchanged;
    /// otherwise membership of `digit` in the requested set is flipped.
    #[must_use]
    pub fn toggled_pencil(self, kind: PencilKind, digit: Digit) -> Self {
        if self.given.is_some() || self.entered.is_some() {
            return self;
        }
        match kind {
            PencilKind::Corner => self.with_corner_pencils(self.corner_pencils.toggled(digit)),
            PencilKind::Centre => self.with_centre_pencils(self.centre_pencils.toggled(digit)),
        }
    }
}
