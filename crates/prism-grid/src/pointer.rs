//! Pointer handles: movement, peeking, neighbours, and distances.
//!
//! A pointer is a `(position, payload)` entry in its grid's registry.
//! [`PointerRef`] and [`PointerMut`] are borrowed views onto one entry;
//! the grid stays the single owner of both cells and pointers.

use crate::cell::{Annotations, Cell};
use crate::edge::{self, EdgeBehavior};
use crate::grid::Grid;
use prism_core::{Axis, Diagonal, Direction, GridError, PointerId, Position};
use smallvec::SmallVec;

/// Registry entry for one pointer.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<P> {
    pub(crate) position: Position,
    pub(crate) payload: P,
}

/// Length of the axis `dir` moves along.
fn axis_len<P>(grid: &Grid<P>, dir: Direction) -> usize {
    match dir.axis() {
        Axis::Row => grid.height(),
        Axis::Col => grid.width(),
    }
}

fn axis_coord(pos: Position, dir: Direction) -> usize {
    match dir.axis() {
        Axis::Row => pos.row,
        Axis::Col => pos.col,
    }
}

fn with_axis(pos: Position, dir: Direction, coord: usize) -> Position {
    match dir.axis() {
        Axis::Row => Position::new(coord, pos.col),
        Axis::Col => Position::new(pos.row, coord),
    }
}

/// Resolve `steps` in `dir` from `pos`, or `None` if blocked.
fn resolve<P>(
    grid: &Grid<P>,
    pos: Position,
    dir: Direction,
    steps: usize,
    edge: EdgeBehavior,
) -> Option<Position> {
    edge::resolve_axis(
        axis_coord(pos, dir),
        steps,
        dir.is_forward(),
        axis_len(grid, dir),
        edge,
    )
    .map(|coord| with_axis(pos, dir, coord))
}

/// Which component(s) of a diagonal are blocked, as an error label.
fn blocked_label(diag: Diagonal, vertical_ok: bool, horizontal_ok: bool) -> String {
    match (vertical_ok, horizontal_ok) {
        (false, false) => format!("{} or {}", diag.vertical(), diag.horizontal()),
        (false, true) => diag.vertical().name().to_string(),
        _ => diag.horizontal().name().to_string(),
    }
}

// ── PointerRef ──────────────────────────────────────────────────

/// Read-only view of a registered pointer.
pub struct PointerRef<'g, P> {
    grid: &'g Grid<P>,
    id: PointerId,
    cursor: &'g Cursor<P>,
}

impl<'g, P> PointerRef<'g, P> {
    pub(crate) fn new(grid: &'g Grid<P>, id: PointerId, cursor: &'g Cursor<P>) -> Self {
        Self { grid, id, cursor }
    }

    /// This pointer's ID.
    pub fn id(&self) -> PointerId {
        self.id
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.cursor.position
    }

    /// Current row.
    pub fn row(&self) -> usize {
        self.cursor.position.row
    }

    /// Current column.
    pub fn col(&self) -> usize {
        self.cursor.position.col
    }

    /// The payload carried by this pointer.
    pub fn payload(&self) -> &'g P {
        &self.cursor.payload
    }

    /// The cell under the pointer.
    pub fn cell(&self) -> &'g Cell {
        let pos = self.position();
        &self.grid.rows_slice()[pos.row][pos.col]
    }

    /// Value of the cell under the pointer.
    pub fn value(&self) -> char {
        self.cell().value()
    }

    /// Annotations of the cell under the pointer.
    pub fn annotations(&self) -> &'g Annotations {
        let pos = self.position();
        &self.grid.annotations()[pos.row * self.grid.width() + pos.col]
    }

    // ── Bounds ──────────────────────────────────────────────────

    /// Whether `steps` in `dir` stays inside the grid. Pure check: no
    /// wrapping, no growth.
    pub fn can_move(&self, dir: Direction, steps: usize) -> bool {
        resolve(self.grid, self.position(), dir, steps, EdgeBehavior::Absorb).is_some()
    }

    /// Whether both components of a diagonal step stay inside the grid.
    pub fn can_move_diagonal(&self, diag: Diagonal, vertical: usize, horizontal: usize) -> bool {
        self.can_move(diag.vertical(), vertical) && self.can_move(diag.horizontal(), horizontal)
    }

    /// Number of steps from the pointer to the `side` edge.
    pub fn steps_to_edge(&self, side: Direction) -> usize {
        let coord = axis_coord(self.position(), side);
        if side.is_forward() {
            axis_len(self.grid, side) - 1 - coord
        } else {
            coord
        }
    }

    // ── Peeking ─────────────────────────────────────────────────

    /// The cell `steps` away in `dir`. Never grows the grid.
    pub fn peek(
        &self,
        dir: Direction,
        steps: usize,
        edge: EdgeBehavior,
    ) -> Result<&'g Cell, GridError> {
        let target = resolve(self.grid, self.position(), dir, steps, edge).ok_or_else(|| {
            GridError::Peek {
                toward: dir.name().to_string(),
            }
        })?;
        Ok(&self.grid.rows_slice()[target.row][target.col])
    }

    /// The cell `vertical` rows and `horizontal` columns away along `diag`.
    pub fn peek_diagonal(
        &self,
        diag: Diagonal,
        vertical: usize,
        horizontal: usize,
        edge: EdgeBehavior,
    ) -> Result<&'g Cell, GridError> {
        let pos = self.position();
        let v = resolve(self.grid, pos, diag.vertical(), vertical, edge);
        let h = resolve(self.grid, pos, diag.horizontal(), horizontal, edge);
        match (v, h) {
            (Some(v), Some(h)) => Ok(&self.grid.rows_slice()[v.row][h.col]),
            (v, h) => Err(GridError::Peek {
                toward: blocked_label(diag, v.is_some(), h.is_some()),
            }),
        }
    }

    // ── Neighbours ──────────────────────────────────────────────

    /// Up to four orthogonal neighbours.
    ///
    /// A direction counts only if the pointer could step that way without
    /// leaving the grid, so a cell is never its own neighbour. `edge` is
    /// handed to the peek and only decides where it lands.
    pub fn neighbours(&self, edge: EdgeBehavior) -> SmallVec<[&'g Cell; 4]> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.can_move(d, 1))
            .filter_map(|d| self.peek(d, 1, edge).ok())
            .collect()
    }

    /// Up to four diagonal neighbours, filtered like [`neighbours`](Self::neighbours).
    pub fn diagonal_neighbours(&self, edge: EdgeBehavior) -> SmallVec<[&'g Cell; 4]> {
        Diagonal::ALL
            .into_iter()
            .filter(|&d| self.can_move_diagonal(d, 1, 1))
            .filter_map(|d| self.peek_diagonal(d, 1, 1, edge).ok())
            .collect()
    }

    /// Up to eight neighbours: orthogonal first, then diagonal.
    pub fn all_neighbours(&self, edge: EdgeBehavior) -> SmallVec<[&'g Cell; 8]> {
        let mut out: SmallVec<[&'g Cell; 8]> = SmallVec::new();
        out.extend(self.neighbours(edge));
        out.extend(self.diagonal_neighbours(edge));
        out
    }

    // ── Distances ───────────────────────────────────────────────

    /// Manhattan distance to another pointer.
    pub fn taxicab(&self, other: &PointerRef<'_, P>) -> usize {
        self.position().taxicab(other.position())
    }

    /// Chebyshev distance to another pointer.
    pub fn taxicab_with_diagonals(&self, other: &PointerRef<'_, P>) -> usize {
        self.position().taxicab_with_diagonals(other.position())
    }

    /// Column difference to another pointer.
    pub fn horizontal_dist(&self, other: &PointerRef<'_, P>) -> usize {
        self.position().horizontal_dist(other.position())
    }

    /// Row difference to another pointer.
    pub fn vertical_dist(&self, other: &PointerRef<'_, P>) -> usize {
        self.position().vertical_dist(other.position())
    }
}

// ── PointerMut ──────────────────────────────────────────────────

/// Mutable view of a registered pointer.
///
/// Movement past the edge of an infinite grid grows the grid and shifts
/// every other pointer; see [`Grid::grow`].
pub struct PointerMut<'g, P> {
    grid: &'g mut Grid<P>,
    id: PointerId,
    index: usize,
}

impl<'g, P> PointerMut<'g, P> {
    pub(crate) fn new(grid: &'g mut Grid<P>, id: PointerId, index: usize) -> Self {
        Self { grid, id, index }
    }

    fn cursor(&self) -> &Cursor<P> {
        &self.grid.pointers[self.index]
    }

    fn cursor_mut(&mut self) -> &mut Cursor<P> {
        &mut self.grid.pointers[self.index]
    }

    /// Reborrow as a read-only handle.
    pub fn view(&self) -> PointerRef<'_, P> {
        PointerRef::new(&*self.grid, self.id, self.cursor())
    }

    /// This pointer's ID.
    pub fn id(&self) -> PointerId {
        self.id
    }

    /// Current position.
    pub fn position(&self) -> Position {
        self.cursor().position
    }

    /// The payload carried by this pointer.
    pub fn payload(&self) -> &P {
        &self.cursor().payload
    }

    /// Mutable access to the payload.
    pub fn payload_mut(&mut self) -> &mut P {
        &mut self.cursor_mut().payload
    }

    /// Replace the payload.
    pub fn set_payload(&mut self, payload: P) {
        self.cursor_mut().payload = payload;
    }

    /// Mutable annotations of the cell under the pointer.
    pub fn annotations_mut(&mut self) -> Result<&mut Annotations, GridError> {
        let pos = self.position();
        self.grid.annotations_at_mut(pos.row, pos.col)
    }

    /// Overwrite the value of the cell under the pointer.
    pub fn set_value(&mut self, value: char) -> Result<(), GridError> {
        let pos = self.position();
        self.grid.set_value_at(pos.row, pos.col, value)
    }

    /// Jump to `(row, col)`, which must be inside the grid.
    pub fn move_to(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let pos = self.grid.check(row, col)?;
        self.cursor_mut().position = pos;
        Ok(())
    }

    /// Move `steps` in `dir`.
    ///
    /// Resolution order: in-bounds target, then wrap (if `edge` is
    /// [`EdgeBehavior::Wrap`]), then growth (if the grid is infinite),
    /// otherwise [`GridError::Move`]. After growth the pointer sits on the
    /// new edge.
    pub fn move_by(
        &mut self,
        dir: Direction,
        steps: usize,
        edge: EdgeBehavior,
    ) -> Result<(), GridError> {
        let pos = self.position();
        if let Some(target) = resolve(&*self.grid, pos, dir, steps, edge) {
            self.cursor_mut().position = target;
            return Ok(());
        }
        if !self.grid.is_infinite() {
            return Err(GridError::Move {
                toward: dir.name().to_string(),
            });
        }

        let shortfall = steps - self.view().steps_to_edge(dir);
        self.grid.grow(dir, shortfall, Some(self.id))?;
        let edge_coord = if dir.is_forward() {
            axis_len(&*self.grid, dir) - 1
        } else {
            0
        };
        let cursor = self.cursor_mut();
        cursor.position = with_axis(cursor.position, dir, edge_coord);
        Ok(())
    }

    /// Move `vertical` rows and `horizontal` columns along `diag`.
    ///
    /// On a bounded grid with [`EdgeBehavior::Absorb`] the move is
    /// all-or-nothing: if either component is blocked nothing moves and
    /// the error names the blocked component(s). Wrap and infinite grids
    /// resolve each component independently.
    pub fn move_diagonal(
        &mut self,
        diag: Diagonal,
        vertical: usize,
        horizontal: usize,
        edge: EdgeBehavior,
    ) -> Result<(), GridError> {
        let (v_ok, h_ok) = {
            let me = self.view();
            (
                me.can_move(diag.vertical(), vertical),
                me.can_move(diag.horizontal(), horizontal),
            )
        };
        if !(v_ok && h_ok) && edge == EdgeBehavior::Absorb && !self.grid.is_infinite() {
            return Err(GridError::Move {
                toward: blocked_label(diag, v_ok, h_ok),
            });
        }
        self.move_by(diag.vertical(), vertical, edge)?;
        self.move_by(diag.horizontal(), horizontal, edge)
    }

    /// Step toward `target`: `steps` horizontally, then `steps`
    /// vertically, skipping an axis that is already aligned.
    pub fn move_toward(&mut self, target: Position, steps: usize) -> Result<(), GridError> {
        let pos = self.position();
        if target.col != pos.col {
            let dir = if target.col < pos.col {
                Direction::Left
            } else {
                Direction::Right
            };
            self.move_by(dir, steps, EdgeBehavior::Absorb)?;
        }
        if target.row != pos.row {
            let dir = if target.row < pos.row {
                Direction::Up
            } else {
                Direction::Down
            };
            self.move_by(dir, steps, EdgeBehavior::Absorb)?;
        }
        Ok(())
    }
}
