//! Grid cells and their traversal annotations.

use prism_core::{Direction, Position};

/// A single grid slot.
///
/// The position is re-stamped whenever the grid grows toward row or
/// column 0, so it always matches the cell's current location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub(crate) position: Position,
    pub(crate) value: char,
}

impl Cell {
    pub(crate) fn new(position: Position, value: char) -> Self {
        Self { position, value }
    }

    /// Current row index.
    pub fn row(&self) -> usize {
        self.position.row
    }

    /// Current column index.
    pub fn col(&self) -> usize {
        self.position.col
    }

    /// Current `(row, col)` position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The parsed (or fill) character.
    pub fn value(&self) -> char {
        self.value
    }
}

/// A set of [`Direction`]s packed into one byte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// The empty set.
    pub const EMPTY: Self = Self(0);

    fn bit(d: Direction) -> u8 {
        1 << d.index()
    }

    /// Whether `d` is in the set.
    pub fn contains(self, d: Direction) -> bool {
        self.0 & Self::bit(d) != 0
    }

    /// Insert `d`. Returns `true` if it was not already present.
    pub fn insert(&mut self, d: Direction) -> bool {
        let fresh = !self.contains(d);
        self.0 |= Self::bit(d);
        fresh
    }

    /// Number of directions in the set.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate members in [`Direction::ALL`] order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |d| self.contains(*d))
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for d in iter {
            set.insert(d);
        }
        set
    }
}

/// Mutable per-cell scratch state written during traversal.
///
/// Annotations are monotonic during a traversal: flags are only ever
/// set. They are reset wholesale by forking a fresh grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Annotations {
    /// Directions in which a traversal has already processed this cell.
    pub traversed: DirectionSet,
    /// Whether any traversal has passed through this cell.
    pub lit: bool,
}

impl Annotations {
    /// Record a visit while travelling in `d`, lighting the cell.
    ///
    /// Returns `true` if this `(cell, direction)` pair is new.
    pub fn record(&mut self, d: Direction) -> bool {
        self.lit = true;
        self.traversed.insert(d)
    }

    /// Whether the cell was already processed while travelling in `d`.
    pub fn has_traversed(&self, d: Direction) -> bool {
        self.traversed.contains(d)
    }

    /// Whether the cell has been lit.
    pub fn is_lit(&self) -> bool {
        self.lit
    }

    /// Reset to the default (unvisited) state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
