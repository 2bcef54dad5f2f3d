//! The [`Grid`] container: cell storage, annotation overlay, pointer registry.

use crate::cell::{Annotations, Cell};
use crate::growth::GrowthDelta;
use crate::pointer::{Cursor, PointerMut, PointerRef};
use indexmap::IndexMap;
use prism_core::{Direction, GridError, GridInstanceId, PointerId, Position};
use std::fmt;
use std::sync::Arc;

/// A rectangular 2D grid of [`Cell`]s with registered pointers.
///
/// `P` is the per-pointer payload (e.g. a beam's travel direction).
///
/// Cell storage is held behind an [`Arc`] and cloned on first write, so
/// [`fork`](Self::fork) is cheap. Annotations live in a flat row-major
/// overlay owned by each grid instance.
pub struct Grid<P = ()> {
    rows: Arc<Vec<Vec<Cell>>>,
    overlay: Vec<Annotations>,
    width: usize,
    height: usize,
    infinite: bool,
    fill: char,
    pub(crate) pointers: IndexMap<PointerId, Cursor<P>>,
    next_pointer: u32,
    instance_id: GridInstanceId,
}

impl<P> Grid<P> {
    /// Default fill value for cells created by [`new`](Self::new) and growth.
    pub const DEFAULT_FILL: char = '.';

    /// Create a bounded `height x width` grid filled with `fill`.
    ///
    /// Returns a `Parse` error if either dimension is 0.
    pub fn new(width: usize, height: usize, fill: char) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::Parse {
                line: 0,
                reason: "grid must have at least one cell".into(),
            });
        }
        let rows = (0..height)
            .map(|r| {
                (0..width)
                    .map(|c| Cell::new(Position::new(r, c), fill))
                    .collect()
            })
            .collect();
        Ok(Self::from_rows(rows, width, height, fill))
    }

    /// Parse a rectangular block of text, one row per line.
    ///
    /// Trailing blank lines and `\r` line endings are ignored. Every other
    /// line must have the same number of characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_grid::Grid;
    ///
    /// let grid: Grid = Grid::parse("./\n|-").unwrap();
    /// assert_eq!((grid.height(), grid.width()), (2, 2));
    /// assert_eq!(grid.value_at(1, 1).unwrap(), '-');
    /// assert!(Grid::<()>::parse("..\n.").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        Self::read_from_lines(text.trim_end_matches(['\n', '\r']).lines())
    }

    /// Parse pre-split lines. See [`parse`](Self::parse).
    pub fn read_from_lines<I, S>(lines: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut rows: Vec<Vec<Cell>> = Vec::new();
        let mut width = None;
        for (r, line) in lines.into_iter().enumerate() {
            let line = line.as_ref().trim_end_matches('\r');
            let row: Vec<Cell> = line
                .chars()
                .enumerate()
                .map(|(c, ch)| Cell::new(Position::new(r, c), ch))
                .collect();
            match width {
                None if row.is_empty() => {
                    return Err(GridError::Parse {
                        line: r + 1,
                        reason: "first row is empty".into(),
                    });
                }
                None => width = Some(row.len()),
                Some(w) if w != row.len() => {
                    return Err(GridError::Parse {
                        line: r + 1,
                        reason: format!("expected {w} columns, found {}", row.len()),
                    });
                }
                Some(_) => {}
            }
            rows.push(row);
        }
        let Some(width) = width else {
            return Err(GridError::Parse {
                line: 0,
                reason: "input contains no rows".into(),
            });
        };
        let height = rows.len();
        Ok(Self::from_rows(rows, width, height, Self::DEFAULT_FILL))
    }

    fn from_rows(rows: Vec<Vec<Cell>>, width: usize, height: usize, fill: char) -> Self {
        Self {
            rows: Arc::new(rows),
            overlay: vec![Annotations::default(); width * height],
            width,
            height,
            infinite: false,
            fill,
            pointers: IndexMap::new(),
            next_pointer: 0,
            instance_id: GridInstanceId::next(),
        }
    }

    /// Make this grid infinite: moves past an edge grow it with `fill`.
    pub fn infinite(mut self, fill: char) -> Self {
        self.infinite = true;
        self.fill = fill;
        self
    }

    /// Whether moves past an edge grow the grid.
    pub fn is_infinite(&self) -> bool {
        self.infinite
    }

    /// Value used for cells created by growth.
    pub fn fill(&self) -> char {
        self.fill
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Unique instance identifier; forks get a fresh one.
    pub fn instance_id(&self) -> GridInstanceId {
        self.instance_id
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub(crate) fn check(&self, row: usize, col: usize) -> Result<Position, GridError> {
        let pos = Position::new(row, col);
        if self.contains(pos) {
            Ok(pos)
        } else {
            Err(GridError::out_of_bounds(pos, self.height, self.width))
        }
    }

    pub(crate) fn rows_slice(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.width + pos.col
    }

    // ── Cell accessors ──────────────────────────────────────────

    /// The cell at `(row, col)`.
    pub fn cell_at(&self, row: usize, col: usize) -> Result<&Cell, GridError> {
        let pos = self.check(row, col)?;
        Ok(&self.rows[pos.row][pos.col])
    }

    /// The value of the cell at `(row, col)`.
    pub fn value_at(&self, row: usize, col: usize) -> Result<char, GridError> {
        self.cell_at(row, col).map(Cell::value)
    }

    /// Overwrite the value of the cell at `(row, col)`.
    pub fn set_value_at(&mut self, row: usize, col: usize, value: char) -> Result<(), GridError> {
        let pos = self.check(row, col)?;
        Arc::make_mut(&mut self.rows)[pos.row][pos.col].value = value;
        Ok(())
    }

    /// Annotations of the cell at `(row, col)`.
    pub fn annotations_at(&self, row: usize, col: usize) -> Result<&Annotations, GridError> {
        let pos = self.check(row, col)?;
        Ok(&self.overlay[self.index(pos)])
    }

    /// Mutable annotations of the cell at `(row, col)`.
    pub fn annotations_at_mut(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<&mut Annotations, GridError> {
        let pos = self.check(row, col)?;
        let idx = self.index(pos);
        Ok(&mut self.overlay[idx])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().flatten()
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// The annotation overlay in row-major order.
    pub fn annotations(&self) -> &[Annotations] {
        &self.overlay
    }

    /// Count cells whose annotations satisfy `pred`.
    pub fn count_where(&self, pred: impl Fn(&Annotations) -> bool) -> usize {
        self.overlay.iter().filter(|&a| pred(a)).count()
    }

    /// Serialise cell values back to text, rows joined by `\n`.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(self.height * (self.width + 1));
        for (r, row) in self.rows.iter().enumerate() {
            if r > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(Cell::value));
        }
        out
    }

    /// Independent copy with the same cells, cleared annotations, and no
    /// pointers. The payload type may change.
    pub fn fork<Q>(&self) -> Grid<Q> {
        Grid {
            rows: Arc::clone(&self.rows),
            overlay: vec![Annotations::default(); self.overlay.len()],
            width: self.width,
            height: self.height,
            infinite: self.infinite,
            fill: self.fill,
            pointers: IndexMap::new(),
            next_pointer: 0,
            instance_id: GridInstanceId::next(),
        }
    }

    // ── Pointer registry ────────────────────────────────────────

    /// Register a new pointer at `(0, 0)` carrying `payload`.
    pub fn new_pointer(&mut self, payload: P) -> PointerId {
        let id = PointerId(self.next_pointer);
        self.next_pointer += 1;
        self.pointers.insert(
            id,
            Cursor {
                position: Position::default(),
                payload,
            },
        );
        id
    }

    /// Register a new pointer at `(row, col)`.
    pub fn spawn_pointer(
        &mut self,
        payload: P,
        row: usize,
        col: usize,
    ) -> Result<PointerId, GridError> {
        let pos = self.check(row, col)?;
        let id = self.new_pointer(payload);
        if let Some(cursor) = self.pointers.get_mut(&id) {
            cursor.position = pos;
        }
        Ok(id)
    }

    /// Register a copy of pointer `id` at the same position.
    pub fn clone_pointer(&mut self, id: PointerId) -> Result<PointerId, GridError>
    where
        P: Clone,
    {
        let cursor = self
            .pointers
            .get(&id)
            .cloned()
            .ok_or(GridError::UnknownPointer { id })?;
        let new_id = PointerId(self.next_pointer);
        self.next_pointer += 1;
        self.pointers.insert(new_id, cursor);
        Ok(new_id)
    }

    /// Deregister pointer `id`, returning its payload.
    pub fn remove_pointer(&mut self, id: PointerId) -> Result<P, GridError> {
        self.pointers
            .shift_remove(&id)
            .map(|cursor| cursor.payload)
            .ok_or(GridError::UnknownPointer { id })
    }

    /// Read-only handle to pointer `id`.
    pub fn pointer(&self, id: PointerId) -> Result<PointerRef<'_, P>, GridError> {
        let cursor = self
            .pointers
            .get(&id)
            .ok_or(GridError::UnknownPointer { id })?;
        Ok(PointerRef::new(self, id, cursor))
    }

    /// Mutable handle to pointer `id`.
    pub fn pointer_mut(&mut self, id: PointerId) -> Result<PointerMut<'_, P>, GridError> {
        let index = self
            .pointers
            .get_index_of(&id)
            .ok_or(GridError::UnknownPointer { id })?;
        Ok(PointerMut::new(self, id, index))
    }

    /// IDs of all registered pointers, in registration order.
    pub fn pointer_ids(&self) -> impl Iterator<Item = PointerId> + '_ {
        self.pointers.keys().copied()
    }

    /// Number of registered pointers.
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    // ── Growth ──────────────────────────────────────────────────

    /// Insert `amount` rows/columns of fill at the `side` edge.
    ///
    /// Every cell is re-stamped with its new position and every pointer
    /// except `anchor` is shifted so it still refers to the same cell.
    /// Returns the applied [`GrowthDelta`].
    pub fn grow(
        &mut self,
        side: Direction,
        amount: usize,
        anchor: Option<PointerId>,
    ) -> Result<GrowthDelta, GridError> {
        if !self.infinite {
            return Err(GridError::NotGrowable { side });
        }
        let delta = GrowthDelta {
            side,
            amount,
            anchor,
        };
        if amount == 0 {
            return Ok(delta);
        }

        let (old_width, old_height) = (self.width, self.height);
        let blank = Cell::new(Position::default(), self.fill);
        let rows = Arc::make_mut(&mut self.rows);
        match side {
            Direction::Left => {
                for row in rows.iter_mut() {
                    row.splice(0..0, std::iter::repeat_n(blank.clone(), amount));
                }
                self.width += amount;
            }
            Direction::Right => {
                for row in rows.iter_mut() {
                    row.extend(std::iter::repeat_n(blank.clone(), amount));
                }
                self.width += amount;
            }
            Direction::Up => {
                let fresh = vec![blank.clone(); old_width];
                rows.splice(0..0, std::iter::repeat_n(fresh, amount));
                self.height += amount;
            }
            Direction::Down => {
                let fresh = vec![blank.clone(); old_width];
                rows.extend(std::iter::repeat_n(fresh, amount));
                self.height += amount;
            }
        }

        // Appending only stamps the new cells; prepending shifts everything.
        let (min_row, min_col) = match side {
            Direction::Right => (0, old_width),
            Direction::Down => (old_height, 0),
            Direction::Left | Direction::Up => (0, 0),
        };
        for (r, row) in rows.iter_mut().enumerate().skip(min_row) {
            for (c, cell) in row.iter_mut().enumerate().skip(min_col) {
                cell.position = Position::new(r, c);
            }
        }

        let mut overlay = vec![Annotations::default(); self.width * self.height];
        for r in 0..old_height {
            for c in 0..old_width {
                let moved = delta.shift_cell(Position::new(r, c));
                overlay[moved.row * self.width + moved.col] = self.overlay[r * old_width + c];
            }
        }
        self.overlay = overlay;

        for (id, cursor) in self.pointers.iter_mut() {
            cursor.position = delta.shift(*id, cursor.position);
        }

        log::debug!(
            "grid {}: grew {side} by {amount} to {}x{}",
            self.instance_id,
            self.height,
            self.width
        );
        Ok(delta)
    }

    /// Grow `n` columns at the left edge.
    pub fn grow_left(&mut self, n: usize) -> Result<GrowthDelta, GridError> {
        self.grow(Direction::Left, n, None)
    }

    /// Grow `n` columns at the right edge.
    pub fn grow_right(&mut self, n: usize) -> Result<GrowthDelta, GridError> {
        self.grow(Direction::Right, n, None)
    }

    /// Grow `n` rows at the top edge.
    pub fn grow_up(&mut self, n: usize) -> Result<GrowthDelta, GridError> {
        self.grow(Direction::Up, n, None)
    }

    /// Grow `n` rows at the bottom edge.
    pub fn grow_down(&mut self, n: usize) -> Result<GrowthDelta, GridError> {
        self.grow(Direction::Down, n, None)
    }
}

impl<P: Clone> Clone for Grid<P> {
    /// Full copy including annotations and pointers, under a new instance ID.
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
            overlay: self.overlay.clone(),
            width: self.width,
            height: self.height,
            infinite: self.infinite,
            fill: self.fill,
            pointers: self.pointers.clone(),
            next_pointer: self.next_pointer,
            instance_id: GridInstanceId::next(),
        }
    }
}

impl<P> fmt::Display for Grid<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<P> fmt::Debug for Grid<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("instance_id", &self.instance_id)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("infinite", &self.infinite)
            .field("pointers", &self.pointers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    const SAMPLE: &str = "abc\ndef";

    // ── Parsing ─────────────────────────────────────────────────

    #[test]
    fn parse_stamps_positions() {
        let g: Grid = Grid::parse(SAMPLE).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        let cell = g.cell_at(1, 2).unwrap();
        assert_eq!(cell.value(), 'f');
        assert_eq!((cell.row(), cell.col()), (1, 2));
        compliance::run_full_compliance(&g);
    }

    #[test]
    fn parse_ignores_trailing_newlines_and_crlf() {
        let g: Grid = Grid::parse("ab\r\ncd\r\n\n").unwrap();
        assert_eq!(g.render(), "ab\ncd");
    }

    #[test]
    fn parse_rejects_ragged_rows() {
        let err = Grid::<()>::parse("abc\nde\nfgh").unwrap_err();
        assert_eq!(
            err,
            GridError::Parse {
                line: 2,
                reason: "expected 3 columns, found 2".into()
            }
        );
    }

    #[test]
    fn parse_rejects_empty_input() {
        assert!(matches!(
            Grid::<()>::parse(""),
            Err(GridError::Parse { line: 0, .. })
        ));
        assert!(matches!(
            Grid::<()>::parse("\nab"),
            Err(GridError::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn new_rejects_zero_dimensions() {
        assert!(Grid::<()>::new(0, 3, '.').is_err());
        assert!(Grid::<()>::new(3, 0, '.').is_err());
        let g = Grid::<()>::new(4, 2, '#').unwrap();
        assert_eq!(g.render(), "####\n####");
    }

    // ── Accessors ───────────────────────────────────────────────

    #[test]
    fn accessors_are_bounds_checked() {
        let g: Grid = Grid::parse(SAMPLE).unwrap();
        assert!(matches!(
            g.cell_at(2, 0),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(g.value_at(0, 3).is_err());
        assert!(g.annotations_at(5, 5).is_err());
        assert_eq!(g.value_at(0, 0).unwrap(), 'a');
    }

    #[test]
    fn annotations_are_per_cell() {
        let mut g: Grid = Grid::parse(SAMPLE).unwrap();
        g.annotations_at_mut(1, 0).unwrap().record(Direction::Up);
        assert!(g.annotations_at(1, 0).unwrap().is_lit());
        assert!(!g.annotations_at(0, 0).unwrap().is_lit());
        assert_eq!(g.count_where(Annotations::is_lit), 1);
    }

    #[test]
    fn set_value_does_not_leak_into_forks() {
        let mut g: Grid = Grid::parse(SAMPLE).unwrap();
        let fork: Grid = g.fork();
        g.set_value_at(0, 0, 'z').unwrap();
        assert_eq!(g.value_at(0, 0).unwrap(), 'z');
        assert_eq!(fork.value_at(0, 0).unwrap(), 'a');
    }

    // ── Fork ────────────────────────────────────────────────────

    #[test]
    fn fork_clears_annotations_and_pointers() {
        let mut g: Grid<u8> = Grid::parse(SAMPLE).unwrap();
        g.new_pointer(1);
        g.annotations_at_mut(0, 1).unwrap().record(Direction::Left);
        let f: Grid<u8> = g.fork();
        assert_eq!(f.render(), g.render());
        assert_eq!(f.pointer_count(), 0);
        assert_eq!(f.count_where(Annotations::is_lit), 0);
        assert_ne!(f.instance_id(), g.instance_id());
        assert_eq!(g.count_where(Annotations::is_lit), 1);
    }

    // ── Pointer registry ────────────────────────────────────────

    #[test]
    fn pointer_ids_are_never_reused() {
        let mut g: Grid<char> = Grid::parse(SAMPLE).unwrap();
        let a = g.new_pointer('a');
        let b = g.new_pointer('b');
        assert_eq!(g.remove_pointer(a).unwrap(), 'a');
        let c = g.new_pointer('c');
        assert_ne!(c, a);
        assert_ne!(c, b);
        assert_eq!(g.pointer_ids().collect::<Vec<_>>(), vec![b, c]);
        assert!(matches!(
            g.pointer(a),
            Err(GridError::UnknownPointer { .. })
        ));
        assert!(g.remove_pointer(a).is_err());
    }

    #[test]
    fn spawn_and_clone_pointer() {
        let mut g: Grid<u32> = Grid::parse(SAMPLE).unwrap();
        let a = g.spawn_pointer(7, 1, 2).unwrap();
        let b = g.clone_pointer(a).unwrap();
        let pb = g.pointer(b).unwrap();
        assert_eq!(pb.position(), Position::new(1, 2));
        assert_eq!(*pb.payload(), 7);
        assert!(g.spawn_pointer(0, 2, 0).is_err());
    }

    // ── Growth ──────────────────────────────────────────────────

    #[test]
    fn bounded_grid_refuses_growth() {
        let mut g: Grid = Grid::parse(SAMPLE).unwrap();
        assert_eq!(
            g.grow_left(1).unwrap_err(),
            GridError::NotGrowable {
                side: Direction::Left
            }
        );
    }

    #[test]
    fn grow_left_shifts_cells_pointers_and_annotations() {
        let mut g: Grid = Grid::parse(SAMPLE).unwrap().infinite('.');
        let p = g.spawn_pointer((), 1, 1).unwrap();
        g.annotations_at_mut(1, 1).unwrap().record(Direction::Right);

        let delta = g.grow_left(2).unwrap();
        assert_eq!(delta.offset(), 2);
        assert_eq!(g.render(), "..abc\n..def");
        let ptr = g.pointer(p).unwrap();
        assert_eq!(ptr.position(), Position::new(1, 3));
        assert_eq!(ptr.value(), 'e');
        assert!(ptr.annotations().is_lit());
        compliance::run_full_compliance(&g);
    }

    #[test]
    fn grow_up_and_down() {
        let mut g: Grid = Grid::parse(SAMPLE).unwrap().infinite('#');
        let p = g.new_pointer(());
        g.grow_up(1).unwrap();
        g.grow_down(2).unwrap();
        g.grow_right(1).unwrap();
        assert_eq!(g.render(), "####\nabc#\ndef#\n####\n####");
        assert_eq!(g.pointer(p).unwrap().value(), 'a');
        compliance::run_full_compliance(&g);
    }

    #[test]
    fn grow_zero_is_a_no_op() {
        let mut g: Grid = Grid::parse(SAMPLE).unwrap().infinite('.');
        g.grow_up(0).unwrap();
        assert_eq!(g.render(), SAMPLE);
    }

    // ── Property tests ──────────────────────────────────────────

    fn arb_text() -> impl Strategy<Value = String> {
        (1usize..8, 1usize..8).prop_flat_map(|(w, h)| {
            proptest::collection::vec(
                proptest::collection::vec(prop_oneof![
                    Just('.'),
                    Just('/'),
                    Just('\\'),
                    Just('|'),
                    Just('-'),
                    Just('#'),
                ], w),
                h,
            )
            .prop_map(|rows| {
                rows.into_iter()
                    .map(|r| r.into_iter().collect::<String>())
                    .collect::<Vec<_>>()
                    .join("\n")
            })
        })
    }

    proptest! {
        #[test]
        fn parse_render_round_trip(text in arb_text()) {
            let g: Grid = Grid::parse(&text).unwrap();
            prop_assert_eq!(g.render(), text);
        }

        #[test]
        fn grow_left_preserves_identity(
            text in arb_text(),
            n in 0usize..5,
            pr in 0usize..8,
            pc in 0usize..8,
        ) {
            let mut g: Grid = Grid::parse(&text).unwrap().infinite('.');
            let pr = pr % g.height();
            let pc = pc % g.width();
            let p = g.spawn_pointer((), pr, pc).unwrap();
            let before = g.pointer(p).unwrap().value();
            let old_width = g.width();

            g.grow_left(n).unwrap();

            let ptr = g.pointer(p).unwrap();
            prop_assert_eq!(ptr.col(), pc + n);
            prop_assert_eq!(ptr.row(), pr);
            prop_assert_eq!(ptr.value(), before);
            prop_assert_eq!(g.width(), old_width + n);
            for (r, row) in g.rows().enumerate() {
                prop_assert_eq!(row.len(), g.width());
                for (c, cell) in row.iter().enumerate() {
                    prop_assert_eq!(cell.position(), Position::new(r, c));
                }
            }
        }
    }
}
