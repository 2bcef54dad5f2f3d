//! Growth descriptors for infinite grids.

use prism_core::{Axis, Direction, PointerId, Position};

/// Describes one growth step of an infinite grid.
///
/// Growing toward [`Direction::Up`] or [`Direction::Left`] inserts rows or
/// columns before every existing cell, so every existing coordinate on
/// that axis moves forward by `amount`. Growing toward `Down`/`Right`
/// appends, leaving existing coordinates alone.
///
/// The grid applies [`shift`](Self::shift) to every registered pointer.
/// The `anchor` pointer (the one whose move triggered growth) is skipped;
/// it repositions itself onto the new edge afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrowthDelta {
    /// The edge that grew.
    pub side: Direction,
    /// Number of rows or columns inserted.
    pub amount: usize,
    /// Pointer exempt from shifting, if any.
    pub anchor: Option<PointerId>,
}

impl GrowthDelta {
    /// Axis along which rows or columns were inserted.
    pub fn axis(&self) -> Axis {
        self.side.axis()
    }

    /// How far existing coordinates on [`axis`](Self::axis) move.
    pub fn offset(&self) -> usize {
        if self.side.is_forward() {
            0
        } else {
            self.amount
        }
    }

    /// New position of a cell that was at `pos` before growth.
    pub fn shift_cell(&self, pos: Position) -> Position {
        match self.axis() {
            Axis::Row => Position::new(pos.row + self.offset(), pos.col),
            Axis::Col => Position::new(pos.row, pos.col + self.offset()),
        }
    }

    /// New position of pointer `id` that was at `pos` before growth.
    ///
    /// Identity for the anchor; otherwise the same as
    /// [`shift_cell`](Self::shift_cell), so the pointer keeps looking at
    /// the same cell.
    pub fn shift(&self, id: PointerId, pos: Position) -> Position {
        if self.anchor == Some(id) {
            pos
        } else {
            self.shift_cell(pos)
        }
    }
}
