//! Grid positions and the distance helpers defined over them.

use std::fmt;

/// A `(row, col)` location on a row-major grid.
///
/// Positions are always non-negative: growing an infinite grid toward
/// row or column 0 re-anchors existing coordinates instead of producing
/// negative indices.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Position {
    /// Create a position.
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan (L1) distance.
    pub fn taxicab(self, other: Position) -> usize {
        self.vertical_dist(other) + self.horizontal_dist(other)
    }

    /// Chebyshev (L∞) distance: taxicab distance when diagonal steps
    /// count as one.
    pub fn taxicab_with_diagonals(self, other: Position) -> usize {
        self.vertical_dist(other).max(self.horizontal_dist(other))
    }

    /// Absolute column difference.
    pub fn horizontal_dist(self, other: Position) -> usize {
        self.col.abs_diff(other.col)
    }

    /// Absolute row difference.
    pub fn vertical_dist(self, other: Position) -> usize {
        self.row.abs_diff(other.row)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}
